//! Shared test fixtures: an in-memory catalog seeded with standalone
//! products and the reference pack.

use tally_core::{Money, PriceChange};
use tally_db::{Database, DbConfig};

use crate::engine::PriceEngine;

/// (code, name, cost, sales) in cents. Mirrors the seed binary's catalog:
/// pack 1020 at 57.00 containing 19 (7.29 × 3) and 21 (11.71 × 3).
const PRODUCTS: &[(i64, &str, i64, i64)] = &[
    (16, "House Blend Coffee 250g", 1400, 2100),
    (18, "Wheat Crackers 200g", 310, 520),
    (19, "Sparkling Water 500ml", 400, 729),
    (21, "Orchard Juice 1L", 640, 1171),
    (1020, "Picnic Basket", 3120, 5700),
];

const PACK_COMPONENTS: &[(i64, i64, i64)] = &[(1020, 19, 3), (1020, 21, 3)];

/// Fresh in-memory database with the reference catalog.
pub(crate) async fn seeded_db() -> Database {
    let db = Database::new(DbConfig::in_memory()).await.unwrap();

    let products = db.products();
    for &(code, name, cost, sales) in PRODUCTS {
        products
            .upsert(code, name, Money::from_cents(cost), Money::from_cents(sales))
            .await
            .unwrap();
    }

    let packs = db.packs();
    for &(pack_code, product_code, qty) in PACK_COMPONENTS {
        packs.add_component(pack_code, product_code, qty).await.unwrap();
    }

    db
}

/// Engine over a fresh seeded database. The database handle is returned
/// too, so tests can inspect catalog state after commits.
pub(crate) async fn seeded_engine() -> (PriceEngine, Database) {
    let db = seeded_db().await;
    (PriceEngine::new(&db), db)
}

/// Shorthand for a proposed change in cents.
pub(crate) fn change(product_code: i64, new_cents: i64) -> PriceChange {
    PriceChange::new(product_code, Money::from_cents(new_cents))
}
