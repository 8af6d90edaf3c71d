//! # Receipt Configuration
//!
//! Default tax rate and coupon for callers that do not pick their own.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`RECEIPT_*`)
//! 2. Host config (any serde format, embedded as `ReceiptConfig`)
//! 3. Defaults (this file)
//!
//! ## Environment Variables
//! - `RECEIPT_TAX_RATE`: default tax rate as a percentage (e.g., "8.25")
//! - `RECEIPT_COUPON`: default coupon as a percentage (e.g., "20"), must be below 100
//!
//! Configuration is read-only after loading, so no locking is needed.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::calculator::{post_tax_total, Calculator};
use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::rate::{Coupon, TaxRate};
use crate::validation::validate_coupon;

/// Environment variable holding the default tax rate percentage.
pub const TAX_RATE_ENV: &str = "RECEIPT_TAX_RATE";

/// Environment variable holding the default coupon percentage.
pub const COUPON_ENV: &str = "RECEIPT_COUPON";

/// Receipt configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptConfig {
    /// Tax rate applied when the caller does not supply one.
    /// e.g., 825 bps = 8.25%
    pub default_tax_rate: TaxRate,

    /// Coupon applied when the caller does not supply one.
    #[serde(default)]
    pub default_coupon: Option<Coupon>,
}

impl Default for ReceiptConfig {
    /// 8.25% exclusive tax, no coupon.
    fn default() -> Self {
        ReceiptConfig {
            default_tax_rate: TaxRate::from_bps(825),
            default_coupon: None,
        }
    }
}

impl ReceiptConfig {
    /// Creates a ReceiptConfig from environment variables and defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ReceiptConfig::from_env`], reading values through `lookup`.
    ///
    /// ## Example
    /// ```rust
    /// use receipt_core::config::ReceiptConfig;
    ///
    /// let config = ReceiptConfig::from_lookup(|key| match key {
    ///     "RECEIPT_TAX_RATE" => Some("10".to_string()),
    ///     _ => None,
    /// })
    /// .unwrap();
    /// assert_eq!(config.default_tax_rate.bps(), 1000);
    /// assert_eq!(config.default_coupon, None);
    /// ```
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = ReceiptConfig::default();

        if let Some(raw) = lookup(TAX_RATE_ENV) {
            let pct = parse_percentage(TAX_RATE_ENV, &raw)?;
            config.default_tax_rate = TaxRate::from_percentage(pct);
            debug!(bps = config.default_tax_rate.bps(), "Tax rate override");
        }

        if let Some(raw) = lookup(COUPON_ENV) {
            let pct = parse_percentage(COUPON_ENV, &raw)?;
            let coupon = Coupon::from_percentage(pct);
            validate_coupon(coupon)?;
            config.default_coupon = Some(coupon);
            debug!(bps = coupon.bps(), "Coupon override");
        }

        info!(
            tax_rate_bps = config.default_tax_rate.bps(),
            coupon_bps = config.default_coupon.map(|c| c.bps()),
            "Receipt configuration loaded"
        );

        Ok(config)
    }

    /// Checks a deserialized config the same way `from_lookup` checks env values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(coupon) = self.default_coupon {
            validate_coupon(coupon)?;
        }
        Ok(())
    }

    /// Post-tax total of `amounts` using the configured tax rate and coupon.
    pub fn post_tax_total<C>(&self, calculator: &C, amounts: &[Money]) -> CoreResult<Money>
    where
        C: Calculator + ?Sized,
    {
        post_tax_total(calculator, amounts, self.default_tax_rate, self.default_coupon)
    }
}

/// Largest percentage whose basis points still fit in a `u32`.
const MAX_PERCENTAGE: f64 = (u32::MAX / 100) as f64;

/// Parses a non-negative percentage that converts to basis points without
/// saturating.
fn parse_percentage(key: &'static str, raw: &str) -> Result<f64, ConfigError> {
    match raw.trim().parse::<f64>() {
        Ok(pct) if (0.0..=MAX_PERCENTAGE).contains(&pct) => Ok(pct),
        _ => Err(ConfigError::InvalidValue {
            key,
            value: raw.to_string(),
        }),
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },

    #[error("Invalid coupon: {0}")]
    InvalidCoupon(#[from] CoreError),
}
