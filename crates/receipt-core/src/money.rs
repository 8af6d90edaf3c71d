//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In floating point:                                                     │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    10 cents + 20 cents = 30 cents, exactly                             │
//! │    Rates are basis points, so amount × rate stays integer until the    │
//! │    single rounding step back to cents                                  │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use receipt_core::money::Money;
//!
//! let price = Money::from_cents(1099); // $10.99
//!
//! let total = price + Money::from_cents(500);  // $15.99
//! let sum: Money = [price, total].into_iter().sum();
//! assert_eq!(sum.cents(), 2698);
//! ```

use serde::{Deserialize, Serialize};
use std::iter::Sum;
use std::ops::Add;

use crate::rate::{Coupon, TaxRate, BPS_PER_UNIT};

/// Multiplies cents by a basis-point rate and rounds back to cents.
///
/// The product is formed in i128; a result outside i64 saturates at
/// `i64::MIN`/`i64::MAX`. Halves round away from zero, so refunds mirror sales.
#[inline]
fn apply_bps(cents: i64, bps: i128) -> i64 {
    let half = BPS_PER_UNIT as i128 / 2;
    let product = cents as i128 * bps;
    let rounded = if product >= 0 { product + half } else { product - half };
    let scaled = rounded / BPS_PER_UNIT as i128;
    i64::try_from(scaled).unwrap_or(if scaled < 0 { i64::MIN } else { i64::MAX })
}

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (cents for USD).
///
/// ## Design Decisions
/// - **i64 (signed)**: Allows negative values for refunds
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Saturating**: sums and rate products clamp at the i64 bounds
/// - **No Display**: rendering belongs to the caller
///
/// ## Where Money is Used
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                                                                         │
/// │  Line-item amounts ──► Σ ──► apply_coupon ──► subtotal                 │
/// │                                                  │                      │
/// │                                                  ├──► calculate_tax     │
/// │                                                  │         │            │
/// │                                                  ▼         ▼            │
/// │                                       post-tax total = subtotal + tax   │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use receipt_core::money::Money;
    ///
    /// let price = Money::from_cents(1099); // Represents $10.99
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from whole dollars.
    #[inline]
    pub const fn from_dollars(dollars: i64) -> Self {
        Money(dollars * 100)
    }

    /// Returns the value in cents (smallest currency unit).
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Calculates tax: `amount × rate`, rounded half up (away from zero) to the cent.
    ///
    /// ## Example
    /// ```rust
    /// use receipt_core::money::Money;
    /// use receipt_core::TaxRate;
    ///
    /// let price = Money::from_cents(1000); // $10.00
    /// let rate = TaxRate::from_bps(1000);  // 10%
    /// assert_eq!(price.calculate_tax(rate).cents(), 100);
    ///
    /// // $10.00 × 8.25% = $0.825 → rounds to $0.83
    /// assert_eq!(price.calculate_tax(TaxRate::from_bps(825)).cents(), 83);
    /// ```
    pub fn calculate_tax(&self, rate: TaxRate) -> Money {
        Money(apply_bps(self.0, rate.bps() as i128))
    }

    /// Applies a coupon: `amount × (1 - coupon)`, rounded like `calculate_tax`.
    ///
    /// No validation happens here; `Calculator::total` rejects coupons of
    /// 100% or more before calling this.
    ///
    /// ## Example
    /// ```rust
    /// use receipt_core::money::Money;
    /// use receipt_core::Coupon;
    ///
    /// let subtotal = Money::from_cents(1500);                     // $15.00
    /// let discounted = subtotal.apply_coupon(Coupon::from_bps(2000)); // 20% off
    /// assert_eq!(discounted.cents(), 1200);                       // $12.00
    /// ```
    pub fn apply_coupon(&self, coupon: Coupon) -> Money {
        let remaining_bps = BPS_PER_UNIT as i128 - coupon.bps() as i128;
        Money(apply_bps(self.0, remaining_bps))
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Addition of two Money values, saturating at the i64 bounds.
impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0.saturating_add(other.0))
    }
}

/// Summing line items. An empty sequence sums to zero.
impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let money = Money::from_cents(1099);
        assert_eq!(money.cents(), 1099);
        assert_eq!(Money::from_dollars(8).cents(), 800);
    }

    #[test]
    fn test_addition() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);
        assert_eq!((a + b).cents(), 1500);
    }

    #[test]
    fn test_addition_saturates() {
        let max = Money::from_cents(i64::MAX);
        assert_eq!(max + Money::from_cents(1), max);
        assert_eq!(
            Money::from_cents(i64::MIN) + Money::from_cents(-1),
            Money::from_cents(i64::MIN)
        );
        let sum: Money = [max, max].into_iter().sum();
        assert_eq!(sum, max);
    }

    #[test]
    fn test_sum() {
        let items = [
            Money::from_dollars(0),
            Money::from_dollars(2),
            Money::from_dollars(5),
            Money::from_dollars(8),
        ];
        let by_ref: Money = items.iter().sum();
        let by_value: Money = items.into_iter().sum();
        assert_eq!(by_ref, Money::from_dollars(15));
        assert_eq!(by_value, by_ref);

        let empty: Money = std::iter::empty::<Money>().sum();
        assert!(empty.is_zero());
    }

    #[test]
    fn test_tax_calculation_basic() {
        // $10.00 at 10% = $1.00
        let tax = Money::from_cents(1000).calculate_tax(TaxRate::from_bps(1000));
        assert_eq!(tax.cents(), 100);
    }

    #[test]
    fn test_tax_calculation_with_rounding() {
        // $10.00 at 8.25% = $0.825 → $0.83
        let tax = Money::from_cents(1000).calculate_tax(TaxRate::from_bps(825));
        assert_eq!(tax.cents(), 83);
    }

    #[test]
    fn test_apply_coupon() {
        let subtotal = Money::from_dollars(15);
        assert_eq!(subtotal.apply_coupon(Coupon::from_bps(2000)), Money::from_dollars(12));
        assert_eq!(subtotal.apply_coupon(Coupon::zero()), subtotal);
    }

    #[test]
    fn test_apply_coupon_rounds_half_up() {
        // $0.05 with 50% off = $0.025 → $0.03
        let discounted = Money::from_cents(5).apply_coupon(Coupon::from_bps(5000));
        assert_eq!(discounted.cents(), 3);
    }

    #[test]
    fn test_large_amounts_do_not_overflow() {
        let big = Money::from_cents(i64::MAX / 2);
        let tax = big.calculate_tax(TaxRate::from_bps(10_000));
        assert_eq!(tax, big);
    }

    #[test]
    fn test_tax_beyond_i64_saturates() {
        // 300% of i64::MAX / 2 does not fit in i64
        let big = Money::from_cents(i64::MAX / 2);
        let tax = big.calculate_tax(TaxRate::from_bps(30_000));
        assert_eq!(tax, Money::from_cents(i64::MAX));

        let refund = Money::from_cents(i64::MIN / 2);
        let tax = refund.calculate_tax(TaxRate::from_bps(30_000));
        assert_eq!(tax, Money::from_cents(i64::MIN));
    }

    #[test]
    fn test_zero_and_checks() {
        assert!(Money::zero().is_zero());
        assert!(Money::from_cents(-100).is_negative());
        assert!(!Money::from_cents(100).is_negative());
    }

    #[test]
    fn test_refunds_round_symmetrically() {
        // -$10.00 at 8.25% = -$0.825 → -$0.83
        let tax = Money::from_cents(-1000).calculate_tax(TaxRate::from_bps(825));
        assert_eq!(tax.cents(), -83);
        assert_eq!(Money::from_cents(-1).apply_coupon(Coupon::zero()).cents(), -1);
    }
}
