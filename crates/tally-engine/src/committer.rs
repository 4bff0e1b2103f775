//! # Price Committer
//!
//! Applies a validated batch to the catalog, all-or-nothing.
//!
//! ## Commit Gate
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  commit(changes)                                                    │
//! │       │                                                             │
//! │       ├── validate_batch(changes)                                   │
//! │       │       │                                                     │
//! │       │       ├── invalid → NO WRITES, "review the submitted        │
//! │       │       │             changes" (the per-item report is NOT    │
//! │       │       │             leaked through this path)               │
//! │       │       ▼                                                     │
//! │       ├── apply_price_changes: ONE transaction for the whole batch  │
//! │       │       │                                                     │
//! │       │       ├── any write fails → rollback, generic failure       │
//! │       │       │   message (internal error details stay in the log)  │
//! │       │       ▼                                                     │
//! │       └── "prices updated successfully"                             │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use tracing::{error, info, warn};

use crate::engine::PriceEngine;
use crate::error::EngineResult;
use tally_core::{CommitOutcome, PriceChange};

impl PriceEngine {
    /// Validates and, if the batch is fully valid, persists every change.
    ///
    /// ## Outcomes
    /// * Validation fails → nothing is written, `success: false` with a
    ///   "review" message; callers wanting details run `validate_batch`
    ///   themselves.
    /// * Persistence fails → the transaction rolls back, the sqlx error is
    ///   logged, and only a generic failure message reaches the caller.
    /// * Otherwise every change in the batch is applied.
    ///
    /// Infrastructure failures during the validation phase still propagate
    /// as `EngineError`: at that point nothing has been decided yet, and
    /// the caller should retry rather than tell the user to fix prices.
    pub async fn commit(&self, changes: &[PriceChange]) -> EngineResult<CommitOutcome> {
        let report = self.validate_batch(changes).await?;

        if !report.success {
            warn!(count = changes.len(), "Batch rejected by validation, nothing written");
            return Ok(CommitOutcome::rejected());
        }

        match self.products().apply_price_changes(changes).await {
            Ok(()) => {
                info!(count = changes.len(), "Price batch committed");
                Ok(CommitOutcome::applied())
            }
            Err(err) => {
                // The caller gets a generic message; the detail stays here
                error!(%err, "Price batch commit failed, transaction rolled back");
                Ok(CommitOutcome::failed())
            }
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use crate::testutil::{change, seeded_engine};
    use tally_core::Money;

    #[tokio::test]
    async fn test_commit_applies_valid_batch() {
        let (engine, db) = seeded_engine().await;

        let outcome = engine
            .commit(&[change(19, 787), change(1020, 5874)])
            .await
            .unwrap();

        assert!(outcome.success);
        assert_eq!(outcome.message, "prices updated successfully");

        let p = db.products().get_by_code(19).await.unwrap().unwrap();
        assert_eq!(p.sales_cents, Money::from_cents(787));
        let p = db.products().get_by_code(1020).await.unwrap().unwrap();
        assert_eq!(p.sales_cents, Money::from_cents(5874));
    }

    #[tokio::test]
    async fn test_commit_gates_on_validation() {
        let (engine, db) = seeded_engine().await;

        // Component reprice without the matching pack reprice: invalid
        let outcome = engine.commit(&[change(19, 787)]).await.unwrap();

        assert!(!outcome.success);
        assert_eq!(outcome.message, "review the submitted changes");

        // Nothing may have been written
        let p = db.products().get_by_code(19).await.unwrap().unwrap();
        assert_eq!(p.sales_cents, Money::from_cents(729));
    }

    #[tokio::test]
    async fn test_commit_rejects_unknown_product_without_writes() {
        let (engine, db) = seeded_engine().await;

        let outcome = engine
            .commit(&[change(16, 2200), change(9999, 100)])
            .await
            .unwrap();

        assert!(!outcome.success);

        let p = db.products().get_by_code(16).await.unwrap().unwrap();
        assert_eq!(p.sales_cents, Money::from_cents(2100));
    }

    #[tokio::test]
    async fn test_commit_empty_batch_is_a_no_op_success() {
        let (engine, _db) = seeded_engine().await;

        let outcome = engine.commit(&[]).await.unwrap();
        assert!(outcome.success);
    }
}
