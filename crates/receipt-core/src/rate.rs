//! # Rate Types
//!
//! Fractional rates applied to monetary amounts.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          Rate Types                                     │
//! │                                                                         │
//! │  ┌─────────────────┐              ┌─────────────────┐                  │
//! │  │    TaxRate      │              │     Coupon      │                  │
//! │  │  ─────────────  │              │  ─────────────  │                  │
//! │  │  bps (u32)      │              │  bps (u32)      │                  │
//! │  │  825 = 8.25%    │              │  2000 = 20% off │                  │
//! │  │  no bounds      │              │  valid: < 10000 │                  │
//! │  └─────────────────┘              └─────────────────┘                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Why Basis Points?
//! 1 basis point = 0.01% = 1/10000. Holding rates as integers keeps every
//! multiplication in integer space, the same way `Money` holds cents.

use serde::{Deserialize, Serialize};

/// Basis points in one whole (100%).
pub const BPS_PER_UNIT: u32 = 10_000;

/// Converts a fraction (0.0825) to basis points (825), rounding to nearest.
fn fraction_to_bps(fraction: f64) -> u32 {
    (fraction * BPS_PER_UNIT as f64).round() as u32
}

/// Basis points for a discount fraction.
///
/// Rounding must not move a fraction across 1.0: anything below a full
/// discount stays at most 9999 bps, anything at or above it at least 10000.
fn coupon_bps(fraction: f64) -> u32 {
    let bps = fraction_to_bps(fraction);
    if fraction < 1.0 {
        bps.min(BPS_PER_UNIT - 1)
    } else {
        bps.max(BPS_PER_UNIT)
    }
}

// =============================================================================
// Tax Rate
// =============================================================================

/// Tax rate represented in basis points (bps).
///
/// 825 bps = 8.25% (e.g., Texas sales tax).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TaxRate(u32);

impl TaxRate {
    /// Creates a tax rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        TaxRate(bps)
    }

    /// Creates a tax rate from a percentage (for convenience).
    pub fn from_percentage(pct: f64) -> Self {
        TaxRate((pct * 100.0).round() as u32)
    }

    /// Creates a tax rate from a fraction.
    ///
    /// ```rust
    /// use receipt_core::TaxRate;
    ///
    /// assert_eq!(TaxRate::from_fraction(0.10).bps(), 1000);
    /// ```
    pub fn from_fraction(fraction: f64) -> Self {
        TaxRate(fraction_to_bps(fraction))
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }
}

// =============================================================================
// Coupon
// =============================================================================

/// A percentage discount applied to the summed subtotal before tax.
///
/// Any basis-point value can be represented so that callers can pass what
/// the customer entered; `total` rejects coupons of 100% or more. Absence of
/// a coupon is `Option::None`, which stays distinct from a zero coupon.
///
/// ## User Workflow
/// ```text
/// Items: $0 + $2 + $5 + $8 = $15
///      │
///      ▼
/// Coupon 20% (2000 bps) ← THIS TYPE
///      │
///      ▼
/// Subtotal: $15 × (1 - 0.20) = $12
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coupon(u32);

impl Coupon {
    /// Creates a coupon from basis points (2000 = 20% off).
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        Coupon(bps)
    }

    /// Creates a coupon from a percentage (20.0 = 20% off).
    ///
    /// Percentages below 100 always yield a coupon below a full discount.
    pub fn from_percentage(pct: f64) -> Self {
        Coupon::from_fraction(pct / 100.0)
    }

    /// Creates a coupon from a fraction (0.20 = 20% off).
    ///
    /// ```rust
    /// use receipt_core::Coupon;
    ///
    /// assert_eq!(Coupon::from_fraction(0.20).bps(), 2000);
    /// assert_eq!(Coupon::from_fraction(1.20).bps(), 12000);
    ///
    /// // Still below 100%, even though it rounds to 10000 bps
    /// assert_eq!(Coupon::from_fraction(0.99999).bps(), 9999);
    /// ```
    pub fn from_fraction(fraction: f64) -> Self {
        Coupon(coupon_bps(fraction))
    }

    /// Returns the discount in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// A coupon that takes nothing off.
    #[inline]
    pub const fn zero() -> Self {
        Coupon(0)
    }

    /// Checks if the coupon leaves less than the full amount to pay.
    #[inline]
    pub const fn is_below_full_discount(&self) -> bool {
        self.0 < BPS_PER_UNIT
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tax_rate_from_bps() {
        let rate = TaxRate::from_bps(825);
        assert_eq!(rate.bps(), 825);
    }

    #[test]
    fn test_tax_rate_from_percentage() {
        let rate = TaxRate::from_percentage(8.25);
        assert_eq!(rate.bps(), 825);
    }

    #[test]
    fn test_tax_rate_from_fraction() {
        assert_eq!(TaxRate::from_fraction(0.10).bps(), 1000);
        assert_eq!(TaxRate::from_fraction(0.20).bps(), 2000);
        assert_eq!(TaxRate::from_fraction(0.0825).bps(), 825);
    }

    #[test]
    fn test_coupon_conversions() {
        assert_eq!(Coupon::from_fraction(0.20).bps(), 2000);
        assert_eq!(Coupon::from_percentage(20.0).bps(), 2000);
        assert_eq!(Coupon::zero().bps(), 0);
    }

    #[test]
    fn test_coupon_full_discount_boundary() {
        assert!(Coupon::zero().is_below_full_discount());
        assert!(Coupon::from_bps(9_999).is_below_full_discount());
        assert!(!Coupon::from_bps(10_000).is_below_full_discount());
        assert!(!Coupon::from_fraction(1.20).is_below_full_discount());
    }

    #[test]
    fn test_coupon_just_below_full_discount_stays_valid() {
        assert_eq!(Coupon::from_fraction(0.99999).bps(), 9_999);
        assert_eq!(Coupon::from_fraction(0.99995).bps(), 9_999);
        assert_eq!(Coupon::from_percentage(99.999).bps(), 9_999);
        assert!(Coupon::from_fraction(0.99999).is_below_full_discount());
        assert!(Coupon::from_percentage(99.999).is_below_full_discount());
    }

    #[test]
    fn test_coupon_at_or_above_full_discount_stays_invalid() {
        assert_eq!(Coupon::from_fraction(1.0).bps(), 10_000);
        assert_eq!(Coupon::from_fraction(1.000001).bps(), 10_000);
        assert_eq!(Coupon::from_percentage(100.0).bps(), 10_000);
        assert!(!Coupon::from_percentage(100.0).is_below_full_discount());
    }
}
