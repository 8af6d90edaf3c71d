//! # Error Types
//!
//! Domain-specific error types for receipt-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  receipt-core errors                                                   │
//! │  ├── CoreError    (this file) - Calculation failures                   │
//! │  └── ConfigError  (config.rs) - Bad configuration values               │
//! │                                                                         │
//! │  Flow: total() ──► CoreError ──► post_tax_total() ──► caller           │
//! │        (propagated unchanged, never wrapped or masked)                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (argument name, offending value)
//! 3. Errors are enum variants, never String

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Receipt calculation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// An argument was rejected before any arithmetic ran.
    ///
    /// ## When This Occurs
    /// - A coupon of 100% or more is passed to `total`
    ///
    /// ## User Workflow
    /// ```text
    /// Coupon entered: 120%
    ///      │
    ///      ▼
    /// total([...], Some(120%))
    ///      │
    ///      ▼
    /// InvalidArgument { argument: "coupon", reason: "..." }
    ///      │
    ///      ▼
    /// post_tax_total() returns the same error, tax is never computed
    /// ```
    #[error("Invalid argument {argument}: {reason}")]
    InvalidArgument {
        argument: &'static str,
        reason: String,
    },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
