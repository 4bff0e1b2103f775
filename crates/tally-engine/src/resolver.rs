//! # Pack Resolver
//!
//! Determines whether a product participates in a pack and, if so,
//! materialises the pack header plus its complete bill-of-materials.
//!
//! ## Resolution Order
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  resolve(product)                                                   │
//! │       │                                                             │
//! │       ├── 1. components WHERE pack_code = product.code?             │
//! │       │      → product IS the pack header                           │
//! │       │                                                             │
//! │       ├── 2. membership WHERE product_code = product.code?          │
//! │       │      → product is a component; re-fetch ALL components      │
//! │       │        of that record's pack (siblings included!)           │
//! │       │                                                             │
//! │       └── 3. neither → None, no pack rule applies                   │
//! │                                                                     │
//! │  Either way the returned component list is the COMPLETE             │
//! │  bill-of-materials - the consistency check needs every sibling,     │
//! │  not just the component that triggered resolution.                  │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use tracing::debug;

use crate::error::{EngineError, EngineResult};
use tally_core::{PackInfo, Product};
use tally_db::{DbError, PackRepository, ProductRepository};

/// Resolves pack participation for catalog products.
#[derive(Debug, Clone)]
pub struct PackResolver {
    products: ProductRepository,
    packs: PackRepository,
}

impl PackResolver {
    /// Creates a resolver over the given repositories.
    pub fn new(products: ProductRepository, packs: PackRepository) -> Self {
        PackResolver { products, packs }
    }

    /// Resolves the pack a product participates in, if any.
    ///
    /// ## Returns
    /// * `Ok(Some(PackInfo))` - the product is a pack header or a component;
    ///   the info carries the header and the full component list
    /// * `Ok(None)` - the product participates in no pack
    pub async fn resolve(&self, product: &Product) -> EngineResult<Option<PackInfo>> {
        // Pack side first: the product's own components, if it has any
        let components = self.packs.components_of(product.code).await?;
        if !components.is_empty() {
            debug!(code = product.code, count = components.len(), "Resolved as pack header");
            return Ok(Some(PackInfo {
                pack: product.clone(),
                components,
            }));
        }

        // Component side: find the owning pack, then re-fetch the complete
        // component list - the product has siblings the check must see
        let Some(membership) = self.packs.find_by_component(product.code).await? else {
            return Ok(None);
        };

        let pack = self
            .products
            .get_by_code(membership.pack_code)
            .await?
            .ok_or_else(|| {
                // FKs make this unreachable on a healthy database; a missing
                // header means the catalog itself is broken
                EngineError::Db(DbError::not_found("pack header", membership.pack_code))
            })?;

        let components = self.packs.components_of(pack.code).await?;

        debug!(
            code = product.code,
            pack = pack.code,
            count = components.len(),
            "Resolved as pack component"
        );

        Ok(Some(PackInfo { pack, components }))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
