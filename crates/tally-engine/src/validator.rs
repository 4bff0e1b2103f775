//! # Batch Validator
//!
//! Orchestrates per-item validation across a proposed batch.
//!
//! ## Per-Item Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  validate_batch(changes)                                            │
//! │       │                                                             │
//! │       ├── snapshot batch into Arc<[PriceChange]>                    │
//! │       │   (shared READ-ONLY input for every task)                   │
//! │       │                                                             │
//! │       ├── tokio::spawn one task per item                            │
//! │       │     │                                                       │
//! │       │     ├── fetch product ── missing? → "product not found"     │
//! │       │     ├── floor rule, band rule (tally-core::rules)           │
//! │       │     ├── participates in a pack? (cheap count pre-check)     │
//! │       │     │     └── resolve pack → consistency check against      │
//! │       │     │         the WHOLE batch snapshot                      │
//! │       │     └── report entry, violations in evaluation order        │
//! │       │                                                             │
//! │       └── await handles IN INPUT ORDER → BatchReport                │
//! │           (results[i].code == changes[i].product_code, always)      │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! One item's violations never abort its siblings; only infrastructure
//! failures (catalog unreachable, task panic) abort the batch.

use std::sync::Arc;

use tracing::{debug, info};

use crate::engine::PriceEngine;
use crate::error::{EngineError, EngineResult};
use tally_core::{consistency, rules, BatchReport, PriceChange, ReportEntry};

impl PriceEngine {
    /// Validates a batch of proposed price changes.
    ///
    /// Returns one report entry per input item, in input order, with an
    /// overall `success` flag that is true iff every entry is clean.
    ///
    /// Validation is read-only and deterministic: calling it twice against
    /// an unchanged catalog yields identical reports.
    ///
    /// ## Edge Case
    /// An empty batch is vacuously valid: `{ success: true, results: [] }`.
    pub async fn validate_batch(&self, changes: &[PriceChange]) -> EngineResult<BatchReport> {
        if changes.is_empty() {
            return Ok(BatchReport::empty());
        }

        debug!(count = changes.len(), "Validating price change batch");

        // One immutable snapshot shared by every task; the consistency
        // check reads sibling proposals from it
        let batch: Arc<[PriceChange]> = Arc::from(changes);

        let mut handles = Vec::with_capacity(changes.len());
        for &change in batch.iter() {
            let engine = self.clone();
            let snapshot = Arc::clone(&batch);
            handles.push(tokio::spawn(async move {
                engine.validate_one(change, &snapshot).await
            }));
        }

        // Awaiting in spawn order pins the report to the input order,
        // whatever order the tasks actually finish in
        let mut results = Vec::with_capacity(handles.len());
        for handle in handles {
            let entry = handle
                .await
                .map_err(|err| EngineError::TaskFailed(err.to_string()))??;
            results.push(entry);
        }

        let report = BatchReport::from_results(results);
        info!(
            count = report.results.len(),
            success = report.success,
            "Batch validation finished"
        );
        Ok(report)
    }

    /// Validates a single proposed change against the batch snapshot.
    async fn validate_one(
        &self,
        change: PriceChange,
        batch: &[PriceChange],
    ) -> EngineResult<ReportEntry> {
        let Some(product) = self.products().get_by_code(change.product_code).await? else {
            return Ok(ReportEntry::not_found(change.product_code));
        };

        // Per-product rules first: floor at cost, then the ±10% band
        let mut errors = rules::evaluate(&product, change.new_price);

        // Pack consistency only for products that participate in a pack;
        // the count is a cheap pre-check before full resolution
        if self.packs().count_involving(product.code).await? > 0 {
            if let Some(pack_info) = self.resolver().resolve(&product).await? {
                errors.extend(consistency::check(&pack_info, batch));
            }
        }

        Ok(ReportEntry {
            code: change.product_code,
            name: Some(product.name),
            sales_price: Some(product.sales_cents),
            new_price: Some(change.new_price),
            errors,
        })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{change, seeded_engine};
    use tally_core::{Money, Violation};

    #[tokio::test]
    async fn test_vacuous_batch() {
        let (engine, _db) = seeded_engine().await;

        let report = engine.validate_batch(&[]).await.unwrap();
        assert!(report.success);
        assert!(report.results.is_empty());
    }

    #[tokio::test]
    async fn test_clean_change_within_band() {
        let (engine, _db) = seeded_engine().await;

        // 21.00 → 22.00 is under 10% and above the 14.00 cost
        let report = engine
            .validate_batch(&[change(16, 2200)])
            .await
            .unwrap();

        assert!(report.success);
        assert_eq!(report.results.len(), 1);

        let entry = &report.results[0];
        assert_eq!(entry.code, 16);
        assert_eq!(entry.name.as_deref(), Some("House Blend Coffee 250g"));
        assert_eq!(entry.sales_price, Some(Money::from_cents(2100)));
        assert_eq!(entry.new_price, Some(Money::from_cents(2200)));
        assert!(entry.errors.is_empty());
    }

    #[tokio::test]
    async fn test_product_not_found() {
        let (engine, _db) = seeded_engine().await;

        let report = engine.validate_batch(&[change(9999, 100)]).await.unwrap();

        assert!(!report.success);
        let entry = &report.results[0];
        assert_eq!(entry.code, 9999);
        assert_eq!(entry.errors, vec![Violation::ProductNotFound]);
        assert!(entry.name.is_none());
        assert!(entry.sales_price.is_none());
        assert!(entry.new_price.is_none());
    }

    #[tokio::test]
    async fn test_not_found_does_not_abort_siblings() {
        let (engine, _db) = seeded_engine().await;

        let report = engine
            .validate_batch(&[change(9999, 100), change(16, 2200)])
            .await
            .unwrap();

        assert!(!report.success);
        assert_eq!(report.results[0].errors, vec![Violation::ProductNotFound]);
        assert!(report.results[1].errors.is_empty());
    }

    #[tokio::test]
    async fn test_floor_and_band_violations() {
        let (engine, _db) = seeded_engine().await;

        // 10.00 is below the 14.00 cost AND more than 10% below 21.00
        let report = engine.validate_batch(&[change(16, 1000)]).await.unwrap();

        assert!(!report.success);
        assert_eq!(
            report.results[0].errors,
            vec![Violation::PriceBelowCost, Violation::PriceOutsideBand]
        );
    }

    #[tokio::test]
    async fn test_pack_scenario_a_consistent_batch_passes() {
        let (engine, _db) = seeded_engine().await;

        // 7.87×3 + 11.71×3 = 58.74: both entries clean
        let report = engine
            .validate_batch(&[change(19, 787), change(1020, 5874)])
            .await
            .unwrap();

        assert!(report.success, "report: {report:?}");
        assert!(report.results.iter().all(|entry| entry.errors.is_empty()));
    }

    #[tokio::test]
    async fn test_pack_scenario_b_mismatch_surfaces_on_both_entries() {
        let (engine, _db) = seeded_engine().await;

        // 25.50 breaks the band on 19 AND the pack total
        let report = engine
            .validate_batch(&[change(19, 2550), change(1020, 5874)])
            .await
            .unwrap();

        assert!(!report.success);

        let component = &report.results[0];
        assert_eq!(component.code, 19);
        assert_eq!(
            component.errors,
            vec![Violation::PriceOutsideBand, Violation::PackPriceMismatch]
        );

        let pack = &report.results[1];
        assert_eq!(pack.code, 1020);
        assert_eq!(pack.errors, vec![Violation::PackPriceMismatch]);
    }

    #[tokio::test]
    async fn test_component_change_alone_breaks_pack_consistency() {
        let (engine, _db) = seeded_engine().await;

        // Repricing one component without repricing the pack
        let report = engine.validate_batch(&[change(19, 787)]).await.unwrap();

        assert!(!report.success);
        assert_eq!(
            report.results[0].errors,
            vec![Violation::PackPriceMismatch]
        );
    }

    #[tokio::test]
    async fn test_order_preservation() {
        let (engine, _db) = seeded_engine().await;

        let batch = [
            change(21, 1171),
            change(9999, 100),
            change(16, 2100),
            change(18, 520),
        ];
        let report = engine.validate_batch(&batch).await.unwrap();

        let result_codes: Vec<i64> = report.results.iter().map(|e| e.code).collect();
        let input_codes: Vec<i64> = batch.iter().map(|c| c.product_code).collect();
        assert_eq!(result_codes, input_codes);
    }

    #[tokio::test]
    async fn test_validation_is_idempotent() {
        let (engine, _db) = seeded_engine().await;

        let batch = [change(19, 2550), change(1020, 5874), change(9999, 100)];
        let first = engine.validate_batch(&batch).await.unwrap();
        let second = engine.validate_batch(&batch).await.unwrap();

        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_report_wire_shape() {
        let (engine, _db) = seeded_engine().await;

        let report = engine.validate_batch(&[change(9999, 100)]).await.unwrap();
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "success": false,
                "results": [
                    { "code": 9999, "errors": ["product not found"] }
                ]
            })
        );
    }
}
