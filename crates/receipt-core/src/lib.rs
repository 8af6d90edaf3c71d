//! # receipt-core: Pure Receipt Calculations
//!
//! Sums line items, applies an optional percentage coupon, computes tax, and
//! combines both into a post-tax total. Every function is pure: no I/O, no
//! retained state between calls.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Caller (CLI front end, billing component)                              │
//! │    gathers prices, picks coupon and tax rate, renders the result        │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ receipt-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌────────────┐  ┌──────────┐   │   │
//! │  │   │   money   │  │   rate    │  │ calculator │  │  config  │   │   │
//! │  │   │   Money   │  │  TaxRate  │  │ Calculator │  │ Receipt- │   │   │
//! │  │   │  Σ, tax   │  │  Coupon   │  │  Receipt   │  │  Config  │   │   │
//! │  │   └───────────┘  └───────────┘  └────────────┘  └──────────┘   │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO PERSISTENCE • NO RENDERING • PURE FUNCTIONS      │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`rate`] - Tax rates and coupons in basis points
//! - [`calculator`] - `total`, `tax`, `post_tax_total`
//! - [`validation`] - Coupon checks
//! - [`config`] - Default tax rate and coupon
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use receipt_core::{Calculator, Coupon, Money, Receipt, TaxRate};
//!
//! let items: Vec<Money> = [1, 2, 5, 8].into_iter().map(Money::from_dollars).collect();
//! let receipt = Receipt::new();
//!
//! let subtotal = receipt.total(&items, Some(Coupon::from_fraction(0.20))).unwrap();
//! assert_eq!(subtotal.cents(), 1280);
//!
//! let total = receipt
//!     .post_tax_total(&items, TaxRate::from_fraction(0.10), Some(Coupon::from_fraction(0.20)))
//!     .unwrap();
//! assert_eq!(total.cents(), 1408);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod calculator;
pub mod config;
pub mod error;
pub mod money;
pub mod rate;
pub mod validation;

mod calculator_proptest;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use calculator::{post_tax_total, Calculator, Receipt};
pub use config::{ConfigError, ReceiptConfig};
pub use error::{CoreError, CoreResult};
pub use money::Money;
pub use rate::{Coupon, TaxRate};
