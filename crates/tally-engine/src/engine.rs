//! # Price Engine
//!
//! The caller-facing handle. Owns the repositories and the pack resolver;
//! the actual operations live in [`validator`](crate::validator) and
//! [`committer`](crate::committer).

use tally_db::{Database, PackRepository, ProductRepository};

use crate::resolver::PackResolver;

/// The price maintenance engine.
///
/// Cheap to clone: each validation task gets its own handle over the same
/// reference-counted connection pool.
///
/// ## Usage
/// ```rust,ignore
/// let engine = PriceEngine::new(&db);
///
/// let report = engine.validate_batch(&changes).await?;
/// let outcome = engine.commit(&changes).await?;
/// ```
#[derive(Debug, Clone)]
pub struct PriceEngine {
    products: ProductRepository,
    packs: PackRepository,
    resolver: PackResolver,
}

impl PriceEngine {
    /// Creates an engine over the given database.
    pub fn new(db: &Database) -> Self {
        let products = db.products();
        let packs = db.packs();
        let resolver = PackResolver::new(products.clone(), packs.clone());

        PriceEngine {
            products,
            packs,
            resolver,
        }
    }

    /// The catalog accessor.
    pub(crate) fn products(&self) -> &ProductRepository {
        &self.products
    }

    /// The pack membership accessor.
    pub(crate) fn packs(&self) -> &PackRepository {
        &self.packs
    }

    /// The pack resolver.
    pub(crate) fn resolver(&self) -> &PackResolver {
        &self.resolver
    }
}
