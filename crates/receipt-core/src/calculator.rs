//! # Calculator Module
//!
//! The three receipt operations and how they compose.
//!
//! ## Composition
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       post_tax_total()                                  │
//! │                                                                         │
//! │  amounts, coupon ──► Calculator::total ──► subtotal ─────────┐         │
//! │                             │                                 │         │
//! │                             └─► Err(InvalidArgument) ──► returned as-is │
//! │                                                               │         │
//! │  subtotal, tax_rate ──► Calculator::tax ──► tax ──────────────┤         │
//! │                                                               ▼         │
//! │                                               subtotal + tax (result)   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! `post_tax_total` only talks to the [`Calculator`] trait, so a test double
//! can observe exactly which arguments reach `total` and `tax`.
//!
//! ## Example
//! ```rust
//! use receipt_core::{Coupon, Money, Receipt, TaxRate};
//!
//! let receipt = Receipt::new();
//! let items = [Money::from_dollars(10), Money::from_dollars(10)];
//!
//! // $20.00 - 20% = $16.00, + 10% tax = $17.60
//! let total = receipt
//!     .post_tax_total(&items, TaxRate::from_fraction(0.10), Some(Coupon::from_fraction(0.20)))
//!     .unwrap();
//! assert_eq!(total.cents(), 1760);
//! ```

use tracing::{debug, warn};

use crate::error::CoreResult;
use crate::money::Money;
use crate::rate::{Coupon, TaxRate};
use crate::validation::validate_coupon;

// =============================================================================
// Calculator Trait
// =============================================================================

/// The two primitive receipt operations.
#[cfg_attr(test, mockall::automock)]
pub trait Calculator {
    /// Sums `amounts` and applies the optional coupon.
    ///
    /// ## Errors
    /// `CoreError::InvalidArgument` when the coupon is 100% or more.
    fn total(&self, amounts: &[Money], coupon: Option<Coupon>) -> CoreResult<Money>;

    /// Returns `amount × rate`.
    fn tax(&self, amount: Money, rate: TaxRate) -> Money;
}

/// Subtotal plus tax on that subtotal.
///
/// Calls `total` once with `(amounts, coupon)`, then `tax` once with
/// `(subtotal, tax_rate)`. An error from `total` is returned unchanged and
/// `tax` is not called.
pub fn post_tax_total<C>(
    calculator: &C,
    amounts: &[Money],
    tax_rate: TaxRate,
    coupon: Option<Coupon>,
) -> CoreResult<Money>
where
    C: Calculator + ?Sized,
{
    let subtotal = calculator.total(amounts, coupon)?;
    let tax = calculator.tax(subtotal, tax_rate);
    let total = subtotal + tax;

    debug!(
        subtotal = subtotal.cents(),
        tax = tax.cents(),
        total = total.cents(),
        "Post-tax total calculated"
    );

    Ok(total)
}

// =============================================================================
// Receipt
// =============================================================================

/// The real calculator. Stateless; every call is a pure function of its inputs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Receipt;

impl Receipt {
    pub const fn new() -> Self {
        Receipt
    }

    /// See [`post_tax_total`].
    pub fn post_tax_total(
        &self,
        amounts: &[Money],
        tax_rate: TaxRate,
        coupon: Option<Coupon>,
    ) -> CoreResult<Money> {
        post_tax_total(self, amounts, tax_rate, coupon)
    }
}

impl Calculator for Receipt {
    /// ## Example
    /// ```rust
    /// use receipt_core::{Calculator, Coupon, Money, Receipt};
    ///
    /// let items: Vec<Money> = [0, 2, 5, 8].into_iter().map(Money::from_dollars).collect();
    ///
    /// assert_eq!(Receipt.total(&items, None).unwrap(), Money::from_dollars(15));
    /// assert_eq!(
    ///     Receipt.total(&items, Some(Coupon::from_fraction(0.20))).unwrap(),
    ///     Money::from_dollars(12)
    /// );
    /// assert!(Receipt.total(&items, Some(Coupon::from_fraction(1.20))).is_err());
    /// ```
    fn total(&self, amounts: &[Money], coupon: Option<Coupon>) -> CoreResult<Money> {
        let sum: Money = amounts.iter().sum();

        let Some(coupon) = coupon else {
            debug!(items = amounts.len(), subtotal = sum.cents(), "Total without coupon");
            return Ok(sum);
        };

        if let Err(err) = validate_coupon(coupon) {
            warn!(coupon_bps = coupon.bps(), "Coupon rejected");
            return Err(err);
        }

        let subtotal = sum.apply_coupon(coupon);
        debug!(
            items = amounts.len(),
            sum = sum.cents(),
            coupon_bps = coupon.bps(),
            subtotal = subtotal.cents(),
            "Total with coupon"
        );
        Ok(subtotal)
    }

    fn tax(&self, amount: Money, rate: TaxRate) -> Money {
        amount.calculate_tax(rate)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
