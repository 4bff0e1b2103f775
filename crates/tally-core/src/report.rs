//! # Validation Report
//!
//! The per-item and batch-level outcome types returned to callers.
//!
//! ## Report Shape
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  BatchReport                                                        │
//! │  ├── success: true iff every entry has an empty error list          │
//! │  └── results: one entry per input item, IN INPUT ORDER              │
//! │        │                                                            │
//! │        ├── { code: 1020, name, sales_price, new_price, errors: [] } │
//! │        ├── { code: 19,   name, sales_price, new_price,              │
//! │        │     errors: ["price may not exceed a 10% change...",       │
//! │        │              "component prices do not reflect..."] }       │
//! │        └── { code: 9999, errors: ["product not found"] }            │
//! │                                                                     │
//! │  name/sales_price/new_price are populated only when the product     │
//! │  was found; error order is evaluation order and is asserted on.     │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;

use crate::error::Violation;
use crate::money::Money;

// =============================================================================
// Report Entry
// =============================================================================

/// Validation outcome for a single proposed change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportEntry {
    /// Product code from the input item (echoed even when unknown).
    pub code: i64,

    /// Product name; only when the product was found.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Current stored sales price; only when the product was found.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sales_price: Option<Money>,

    /// The proposed price; only when the product was found.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_price: Option<Money>,

    /// Violations in evaluation order: floor, band, pack consistency.
    pub errors: Vec<Violation>,
}

impl ReportEntry {
    /// Entry for a product code with no catalog row.
    ///
    /// Carries only the echoed code and the not-found message; there is no
    /// name or baseline price to report.
    pub fn not_found(code: i64) -> Self {
        ReportEntry {
            code,
            name: None,
            sales_price: None,
            new_price: None,
            errors: vec![Violation::ProductNotFound],
        }
    }

    /// True when the entry carries no violations.
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }
}

// =============================================================================
// Batch Report
// =============================================================================

/// Aggregated outcome of validating one batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BatchReport {
    /// True iff every entry is clean. An empty batch is vacuously valid.
    pub success: bool,

    /// One entry per input item, in the same order as the input batch.
    pub results: Vec<ReportEntry>,
}

impl BatchReport {
    /// Builds a report, deriving `success` from the entries.
    pub fn from_results(results: Vec<ReportEntry>) -> Self {
        let success = results.iter().all(ReportEntry::is_clean);
        BatchReport { success, results }
    }

    /// The vacuous report for an empty batch.
    pub fn empty() -> Self {
        BatchReport {
            success: true,
            results: Vec::new(),
        }
    }
}

// =============================================================================
// Commit Outcome
// =============================================================================

/// User-facing outcome of a commit attempt.
///
/// Deliberately coarse: the committer never leaks the per-item report (the
/// caller can run validation itself if it wants details) and never leaks
/// internal storage errors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommitOutcome {
    /// Whether the batch was applied.
    pub success: bool,

    /// Caller-facing summary message.
    pub message: String,
}

impl CommitOutcome {
    /// All changes persisted.
    pub fn applied() -> Self {
        CommitOutcome {
            success: true,
            message: "prices updated successfully".to_string(),
        }
    }

    /// Validation failed; nothing was written.
    pub fn rejected() -> Self {
        CommitOutcome {
            success: false,
            message: "review the submitted changes".to_string(),
        }
    }

    /// Persistence failed after validation passed; the transaction rolled
    /// back, so nothing was written.
    pub fn failed() -> Self {
        CommitOutcome {
            success: false,
            message: "an error occurred while updating prices".to_string(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn clean_entry(code: i64) -> ReportEntry {
        ReportEntry {
            code,
            name: Some(format!("product {code}")),
            sales_price: Some(Money::from_cents(1000)),
            new_price: Some(Money::from_cents(1050)),
            errors: vec![],
        }
    }

    #[test]
    fn test_success_requires_every_entry_clean() {
        let report = BatchReport::from_results(vec![clean_entry(1), clean_entry(2)]);
        assert!(report.success);

        let mut dirty = clean_entry(3);
        dirty.errors.push(Violation::PriceBelowCost);
        let report = BatchReport::from_results(vec![clean_entry(1), dirty]);
        assert!(!report.success);
    }

    #[test]
    fn test_empty_report_is_vacuously_successful() {
        let report = BatchReport::empty();
        assert!(report.success);
        assert!(report.results.is_empty());
    }

    #[test]
    fn test_not_found_entry_shape() {
        let entry = ReportEntry::not_found(9999);
        let json = serde_json::to_value(&entry).unwrap();

        // Optional fields must be absent, not null
        assert_eq!(
            json,
            serde_json::json!({
                "code": 9999,
                "errors": ["product not found"]
            })
        );
    }

    #[test]
    fn test_entry_serializes_errors_as_messages_in_order() {
        let mut entry = clean_entry(19);
        entry.errors = vec![Violation::PriceOutsideBand, Violation::PackPriceMismatch];

        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(
            json["errors"],
            serde_json::json!([
                "price may not exceed a 10% change from the current value",
                "component prices do not reflect the pack price"
            ])
        );
    }

    #[test]
    fn test_commit_outcome_messages() {
        assert_eq!(CommitOutcome::applied().message, "prices updated successfully");
        assert_eq!(CommitOutcome::rejected().message, "review the submitted changes");
        assert_eq!(
            CommitOutcome::failed().message,
            "an error occurred while updating prices"
        );
    }
}
