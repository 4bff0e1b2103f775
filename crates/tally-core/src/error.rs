//! # Error Types
//!
//! Domain-specific error types for tally-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                 │
//! │                                                                     │
//! │  tally-core errors (this file)                                      │
//! │  ├── Violation   - per-item rule breaches, reported not propagated  │
//! │  └── MoneyError  - malformed price input at the ingestion edge      │
//! │                                                                     │
//! │  tally-db errors (separate crate)                                   │
//! │  └── DbError     - database operation failures                      │
//! │                                                                     │
//! │  tally-engine errors (separate crate)                               │
//! │  └── EngineError - infrastructure failures during a batch           │
//! │                                                                     │
//! │  A Violation is NOT an Err: one item's breach never aborts the      │
//! │  batch, it lands in that item's report entry instead.               │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Errors are enum variants, never String
//! 3. Each Violation variant IS its caller-facing message

use serde::{Serialize, Serializer};
use thiserror::Error;

// =============================================================================
// Violation
// =============================================================================

/// A single pricing rule breach for one batch item.
///
/// Violations are collected into a [`ReportEntry`](crate::report::ReportEntry)
/// in evaluation order: floor rule, band rule, then pack consistency. Tests
/// assert on this ordering, so new variants must slot into a defined position.
///
/// The `Display` text is the caller-facing message; serialization emits the
/// message string so the report is comparable without matching enum names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Violation {
    /// The referenced product code has no catalog entry.
    #[error("product not found")]
    ProductNotFound,

    /// The proposed price is below the product's cost price.
    #[error("price may not be lower than cost")]
    PriceBelowCost,

    /// The proposed price moves more than 10% from the current price.
    ///
    /// ## Edge Case
    /// A current price of zero makes the percentage change unbounded, so any
    /// non-zero proposal fires this violation (see `rules::evaluate`).
    #[error("price may not exceed a 10% change from the current value")]
    PriceOutsideBand,

    /// The pack's price does not equal the weighted sum of its components
    /// under the proposed batch. Surfaces on the pack entry and on every
    /// component entry present in the batch.
    #[error("component prices do not reflect the pack price")]
    PackPriceMismatch,
}

/// Serialize as the caller-facing message string.
impl Serialize for Violation {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

// =============================================================================
// Money Error
// =============================================================================

/// Errors from parsing fixed-point price input.
///
/// Prices enter the engine as 2-decimal fixed-point values. Anything finer
/// is rejected here rather than rounded, because the pack consistency check
/// uses exact cent equality and silent rounding would shift its outcome.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoneyError {
    /// Input is not a decimal number.
    #[error("invalid money amount: '{0}'")]
    Invalid(String),

    /// Input carries sub-cent precision.
    #[error("money amounts are limited to 2 decimal places, got {0}")]
    TooManyDecimals(usize),
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_violation_messages() {
        assert_eq!(Violation::ProductNotFound.to_string(), "product not found");
        assert_eq!(
            Violation::PriceBelowCost.to_string(),
            "price may not be lower than cost"
        );
        assert_eq!(
            Violation::PriceOutsideBand.to_string(),
            "price may not exceed a 10% change from the current value"
        );
        assert_eq!(
            Violation::PackPriceMismatch.to_string(),
            "component prices do not reflect the pack price"
        );
    }

    #[test]
    fn test_violation_serializes_as_message() {
        let json = serde_json::to_string(&Violation::PackPriceMismatch).unwrap();
        assert_eq!(json, "\"component prices do not reflect the pack price\"");
    }

    #[test]
    fn test_money_error_messages() {
        let err = MoneyError::TooManyDecimals(3);
        assert_eq!(
            err.to_string(),
            "money amounts are limited to 2 decimal places, got 3"
        );
    }
}
