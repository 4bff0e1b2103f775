//! # Domain Types
//!
//! Core domain types used throughout Tally.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                │
//! │                                                                     │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌──────────────────┐   │
//! │  │    Product      │   │   PackRecord    │   │   PriceChange    │   │
//! │  │  ─────────────  │   │  ─────────────  │   │  ──────────────  │   │
//! │  │  code (i64)     │   │  pack_code      │   │  product_code    │   │
//! │  │  name           │   │  product_code   │   │  new_price       │   │
//! │  │  cost_cents     │   │  qty            │   └──────────────────┘   │
//! │  │  sales_cents    │   └─────────────────┘                          │
//! │  └─────────────────┘                                                │
//! │                                                                     │
//! │  PackInfo = resolved pack header + full component list              │
//! │  (what the consistency check consumes; never a partial view)        │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::money::Money;

// =============================================================================
// Product
// =============================================================================

/// A catalog product.
///
/// `code` is the stable business identifier: externally assigned for
/// imported catalogs, auto-generated otherwise. `sales_cents` is the price
/// currently in effect - the baseline every proposed change is measured
/// against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Product {
    /// Stable integer product code (primary key).
    pub code: i64,

    /// Display name, non-empty.
    pub name: String,

    /// Acquisition cost - the floor for any proposed sales price.
    pub cost_cents: Money,

    /// Current sales price.
    pub sales_cents: Money,

    /// Row creation timestamp (maintained by the db layer).
    pub created_at: DateTime<Utc>,

    /// Last modification timestamp (maintained by the db layer).
    pub updated_at: DateTime<Utc>,
}

// =============================================================================
// Pack Membership
// =============================================================================

/// One bill-of-materials row: `qty` units of `product_code` go into one unit
/// of `pack_code`.
///
/// A product may appear on the pack side of many records (defining what it
/// contains) but on the component side of at most one pack's membership set.
/// Single-level nesting is an assumed dataset invariant: a pack is never
/// itself a component of another pack.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct PackRecord {
    /// Surrogate row id.
    pub id: i64,

    /// Product code of the pack.
    pub pack_code: i64,

    /// Product code of the component.
    pub product_code: i64,

    /// Units of the component per unit of the pack, >= 1.
    pub qty: i64,
}

/// A component of a resolved pack: the product row joined with its quantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct PackComponent {
    /// The component product.
    #[cfg_attr(feature = "sqlx", sqlx(flatten))]
    pub product: Product,

    /// Units per pack.
    pub qty: i64,
}

/// A fully resolved pack: header product plus its complete bill-of-materials.
///
/// Resolution guarantees `components` is the whole membership set of `pack`,
/// whether resolution started from the pack side or from a single component.
/// The consistency check relies on that: a partial component list would make
/// the recomputed total meaningless.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackInfo {
    /// The pack header product.
    pub pack: Product,

    /// Complete component list, in membership-row order.
    pub components: Vec<PackComponent>,
}

// =============================================================================
// Price Change
// =============================================================================

/// One proposed price change within a batch.
///
/// Ephemeral: supplied per batch, never persisted until the committer runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceChange {
    /// Code of the product to reprice.
    pub product_code: i64,

    /// Proposed sales price.
    pub new_price: Money,
}

impl PriceChange {
    /// Convenience constructor.
    pub const fn new(product_code: i64, new_price: Money) -> Self {
        PriceChange {
            product_code,
            new_price,
        }
    }
}

/// Looks up the proposed price for `code` in a batch, if any.
///
/// This is the shared read for "effective price" semantics: a product's
/// effective price during validation is its proposed price when the batch
/// touches it, otherwise its stored sales price.
pub fn proposed_price(batch: &[PriceChange], code: i64) -> Option<Money> {
    batch
        .iter()
        .find(|change| change.product_code == code)
        .map(|change| change.new_price)
}

// =============================================================================
// Unit Tests
// =============================================================================
