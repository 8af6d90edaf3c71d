//! # Validation Module
//!
//! Argument checks run before any receipt arithmetic.
//!
//! ## Usage
//! ```rust
//! use receipt_core::validation::validate_coupon;
//! use receipt_core::Coupon;
//!
//! assert!(validate_coupon(Coupon::from_fraction(0.20)).is_ok());
//! assert!(validate_coupon(Coupon::from_fraction(1.20)).is_err());
//! ```

use crate::error::{CoreError, CoreResult};
use crate::rate::{Coupon, BPS_PER_UNIT};

/// Validates a coupon.
///
/// ## Rules
/// - Must take off less than 100% (< 10000 bps)
/// - Zero is allowed and is a no-op
///
/// ## User Workflow
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  Coupon entered: 120%                                                   │
/// │       │                                                                 │
/// │       ▼                                                                 │
/// │  validate_coupon(12000 bps) ← THIS FUNCTION                            │
/// │       │                                                                 │
/// │       ├── bps >= 10000? → InvalidArgument                              │
/// │       │                                                                 │
/// │       └── OK → Subtotal × (1 - coupon)                                 │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn validate_coupon(coupon: Coupon) -> CoreResult<()> {
    if !coupon.is_below_full_discount() {
        return Err(CoreError::InvalidArgument {
            argument: "coupon",
            reason: format!(
                "{} bps must be below {} bps (100%)",
                coupon.bps(),
                BPS_PER_UNIT
            ),
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_coupon() {
        assert!(validate_coupon(Coupon::zero()).is_ok());
        assert!(validate_coupon(Coupon::from_bps(2000)).is_ok());
        assert!(validate_coupon(Coupon::from_bps(9_999)).is_ok());

        assert!(validate_coupon(Coupon::from_bps(10_000)).is_err());
        assert!(validate_coupon(Coupon::from_bps(12_000)).is_err());
    }

    #[test]
    fn test_validate_coupon_error_names_argument() {
        let err = validate_coupon(Coupon::from_bps(12_000)).unwrap_err();
        assert_eq!(
            err,
            CoreError::InvalidArgument {
                argument: "coupon",
                reason: "12000 bps must be below 10000 bps (100%)".to_string(),
            }
        );
    }
}
