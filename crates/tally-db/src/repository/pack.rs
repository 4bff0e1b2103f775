//! # Pack Repository
//!
//! Database operations for pack bill-of-materials lookups.
//!
//! ## Lookup Directions
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  packs table: (pack_code, product_code, qty)                        │
//! │                                                                     │
//! │  components_of(1020)      → rows WHERE pack_code = 1020             │
//! │                             "what does this pack contain?"          │
//! │                                                                     │
//! │  find_by_component(19)    → row  WHERE product_code = 19            │
//! │                             "which pack does this belong to?"       │
//! │                                                                     │
//! │  count_involving(19)      → rows WHERE either side = 19             │
//! │                             cheap "participates in any pack?"       │
//! │                             pre-check before full resolution        │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::DbResult;
use tally_core::{PackComponent, PackRecord};

/// Repository for pack membership operations.
#[derive(Debug, Clone)]
pub struct PackRepository {
    pool: SqlitePool,
}

impl PackRepository {
    /// Creates a new PackRepository.
    pub fn new(pool: SqlitePool) -> Self {
        PackRepository { pool }
    }

    /// Returns the full component list of a pack, products included,
    /// in membership-row order.
    ///
    /// Empty when the code is not a pack header.
    pub async fn components_of(&self, pack_code: i64) -> DbResult<Vec<PackComponent>> {
        let components = sqlx::query_as::<_, PackComponent>(
            r#"
            SELECT p.code, p.name, p.cost_cents, p.sales_cents,
                   p.created_at, p.updated_at, k.qty
            FROM packs k
            INNER JOIN products p ON p.code = k.product_code
            WHERE k.pack_code = ?1
            ORDER BY k.id
            "#,
        )
        .bind(pack_code)
        .fetch_all(&self.pool)
        .await?;

        debug!(pack_code, count = components.len(), "Fetched pack components");
        Ok(components)
    }

    /// Finds the membership record where the given code is the component.
    ///
    /// At most one row by the single-membership invariant; if the dataset
    /// ever breaks that assumption, the first row (by insertion order) wins.
    pub async fn find_by_component(&self, product_code: i64) -> DbResult<Option<PackRecord>> {
        let record = sqlx::query_as::<_, PackRecord>(
            r#"
            SELECT id, pack_code, product_code, qty
            FROM packs
            WHERE product_code = ?1
            ORDER BY id
            LIMIT 1
            "#,
        )
        .bind(product_code)
        .fetch_optional(&self.pool)
        .await?;

        Ok(record)
    }

    /// Counts membership rows where the code appears on either side.
    ///
    /// Used as the cheap "does this product participate in any pack?"
    /// pre-check before full resolution.
    pub async fn count_involving(&self, code: i64) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*)
            FROM packs
            WHERE pack_code = ?1 OR product_code = ?1
            "#,
        )
        .bind(code)
        .fetch_one(&self.pool)
        .await?;

        Ok(count)
    }

    /// Adds a component to a pack's bill-of-materials.
    ///
    /// Both codes must already exist in the catalog (FK-enforced).
    pub async fn add_component(&self, pack_code: i64, product_code: i64, qty: i64) -> DbResult<()> {
        debug!(pack_code, product_code, qty, "Adding pack component");

        sqlx::query(
            r#"
            INSERT INTO packs (pack_code, product_code, qty)
            VALUES (?1, ?2, ?3)
            "#,
        )
        .bind(pack_code)
        .bind(product_code)
        .bind(qty)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
