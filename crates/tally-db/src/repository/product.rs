//! # Product Repository
//!
//! Database operations for the product catalog.
//!
//! ## Key Operations
//! - Lookup by code (the validator's per-item fetch)
//! - Upsert (external catalog management)
//! - Transactional batch price writes (the committer's single write path)
//!
//! ## Why One Transaction For The Batch?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  ❌ WRONG: one independent write per item                           │
//! │     save(19) ok, save(21) ok, save(1020) FAILS                      │
//! │     → 19 and 21 already landed, the pack is now inconsistent        │
//! │                                                                     │
//! │  ✅ CORRECT: all writes inside a single transaction                 │
//! │     BEGIN; update 19; update 21; update 1020(fails) → ROLLBACK      │
//! │     → the catalog is exactly as it was before the commit            │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::Utc;
use sqlx::{SqliteConnection, SqlitePool};
use tracing::debug;

use crate::error::{DbError, DbResult};
use tally_core::{Money, PriceChange, Product};

/// Repository for product catalog operations.
///
/// ## Usage
/// ```rust,ignore
/// let repo = db.products();
///
/// let product = repo.get_by_code(1020).await?;
/// repo.apply_price_changes(&changes).await?;
/// ```
#[derive(Debug, Clone)]
pub struct ProductRepository {
    pool: SqlitePool,
}

impl ProductRepository {
    /// Creates a new ProductRepository.
    pub fn new(pool: SqlitePool) -> Self {
        ProductRepository { pool }
    }

    /// Gets a product by its code.
    ///
    /// ## Returns
    /// * `Ok(Some(Product))` - Product found
    /// * `Ok(None)` - No catalog row for this code
    pub async fn get_by_code(&self, code: i64) -> DbResult<Option<Product>> {
        let product = sqlx::query_as::<_, Product>(
            r#"
            SELECT code, name, cost_cents, sales_cents, created_at, updated_at
            FROM products
            WHERE code = ?1
            "#,
        )
        .bind(code)
        .fetch_optional(&self.pool)
        .await?;

        Ok(product)
    }

    /// Lists catalog products ordered by code.
    pub async fn list(&self, limit: u32) -> DbResult<Vec<Product>> {
        let products = sqlx::query_as::<_, Product>(
            r#"
            SELECT code, name, cost_cents, sales_cents, created_at, updated_at
            FROM products
            ORDER BY code
            LIMIT ?1
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(products)
    }

    /// Inserts or updates a product by code.
    ///
    /// This is the catalog management entry point: the validation engine
    /// never creates products, only reprices them.
    pub async fn upsert(
        &self,
        code: i64,
        name: &str,
        cost: Money,
        sales: Money,
    ) -> DbResult<Product> {
        debug!(code, name, "Upserting product");

        let now = Utc::now();

        sqlx::query(
            r#"
            INSERT INTO products (code, name, cost_cents, sales_cents, created_at, updated_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?5)
            ON CONFLICT (code) DO UPDATE SET
                name = excluded.name,
                cost_cents = excluded.cost_cents,
                sales_cents = excluded.sales_cents,
                updated_at = excluded.updated_at
            "#,
        )
        .bind(code)
        .bind(name)
        .bind(cost)
        .bind(sales)
        .bind(now)
        .execute(&self.pool)
        .await?;

        self.get_by_code(code)
            .await?
            .ok_or_else(|| DbError::not_found("product", code))
    }

    /// Updates one product's sales price inside a caller-owned transaction.
    ///
    /// ## Returns
    /// * `Err(DbError::NotFound)` - No row for this code; the caller is
    ///   expected to roll the transaction back
    pub async fn update_sales_price(
        conn: &mut SqliteConnection,
        code: i64,
        new_price: Money,
    ) -> DbResult<()> {
        let now = Utc::now();

        let result = sqlx::query(
            r#"
            UPDATE products
            SET sales_cents = ?2, updated_at = ?3
            WHERE code = ?1
            "#,
        )
        .bind(code)
        .bind(new_price)
        .bind(now)
        .execute(conn)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("product", code));
        }

        Ok(())
    }

    /// Applies a batch of price changes in a single transaction.
    ///
    /// All-or-nothing: any failing row rolls back every previously applied
    /// row, so a half-committed batch can never leave a pack inconsistent.
    pub async fn apply_price_changes(&self, changes: &[PriceChange]) -> DbResult<()> {
        debug!(count = changes.len(), "Applying price changes");

        let mut tx = self.pool.begin().await?;

        for change in changes {
            Self::update_sales_price(&mut *tx, change.product_code, change.new_price).await?;
        }

        tx.commit().await?;

        debug!(count = changes.len(), "Price changes committed");
        Ok(())
    }

    /// Counts catalog products (for diagnostics).
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Database, DbConfig};

    async fn test_db() -> Database {
        Database::new(DbConfig::in_memory()).await.unwrap()
    }

    #[tokio::test]
    async fn test_upsert_and_get() {
        let db = test_db().await;
        let repo = db.products();

        let product = repo
            .upsert(19, "component A", Money::from_cents(400), Money::from_cents(729))
            .await
            .unwrap();

        assert_eq!(product.code, 19);
        assert_eq!(product.sales_cents, Money::from_cents(729));

        // Second upsert updates in place
        let product = repo
            .upsert(19, "component A", Money::from_cents(400), Money::from_cents(750))
            .await
            .unwrap();
        assert_eq!(product.sales_cents, Money::from_cents(750));
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_get_missing_returns_none() {
        let db = test_db().await;
        assert!(db.products().get_by_code(9999).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_apply_price_changes() {
        let db = test_db().await;
        let repo = db.products();

        repo.upsert(19, "a", Money::from_cents(400), Money::from_cents(729))
            .await
            .unwrap();
        repo.upsert(21, "b", Money::from_cents(600), Money::from_cents(1171))
            .await
            .unwrap();

        repo.apply_price_changes(&[
            PriceChange::new(19, Money::from_cents(787)),
            PriceChange::new(21, Money::from_cents(1200)),
        ])
        .await
        .unwrap();

        let p = repo.get_by_code(19).await.unwrap().unwrap();
        assert_eq!(p.sales_cents, Money::from_cents(787));
        let p = repo.get_by_code(21).await.unwrap().unwrap();
        assert_eq!(p.sales_cents, Money::from_cents(1200));
    }

    #[tokio::test]
    async fn test_apply_price_changes_rolls_back_on_failure() {
        let db = test_db().await;
        let repo = db.products();

        repo.upsert(19, "a", Money::from_cents(400), Money::from_cents(729))
            .await
            .unwrap();

        // Second change targets a missing row; the first must roll back
        let result = repo
            .apply_price_changes(&[
                PriceChange::new(19, Money::from_cents(787)),
                PriceChange::new(9999, Money::from_cents(100)),
            ])
            .await;

        assert!(matches!(result, Err(DbError::NotFound { .. })));

        let p = repo.get_by_code(19).await.unwrap().unwrap();
        assert_eq!(p.sales_cents, Money::from_cents(729), "write must roll back");
    }

    #[tokio::test]
    async fn test_list_orders_by_code() {
        let db = test_db().await;
        let repo = db.products();

        repo.upsert(21, "b", Money::zero(), Money::from_cents(1171))
            .await
            .unwrap();
        repo.upsert(19, "a", Money::zero(), Money::from_cents(729))
            .await
            .unwrap();

        let listed = repo.list(10).await.unwrap();
        let codes: Vec<i64> = listed.iter().map(|p| p.code).collect();
        assert_eq!(codes, vec![19, 21]);
    }
}
