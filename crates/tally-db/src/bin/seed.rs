//! # Seed Data Generator
//!
//! Populates the database with a development catalog, including the
//! reference pack used throughout the test suite.
//!
//! ## Usage
//! ```bash
//! # Seed the default database
//! cargo run -p tally-db --bin seed
//!
//! # Specify database path
//! cargo run -p tally-db --bin seed -- --db ./data/tally.db
//! ```
//!
//! ## Seeded Data
//! - A handful of standalone products
//! - Pack 1020 "Picnic Basket" at 57.00, containing:
//!   - 19 "Sparkling Water 500ml" at 7.29, qty 3
//!   - 21 "Orchard Juice 1L" at 11.71, qty 3
//!
//! The pack is seeded consistent: 7.29×3 + 11.71×3 = 57.00.

use std::env;

use tally_core::Money;
use tally_db::{Database, DbConfig, DbResult};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// (code, name, cost, sales) in cents.
const PRODUCTS: &[(i64, &str, i64, i64)] = &[
    (16, "House Blend Coffee 250g", 1400, 2100),
    (18, "Wheat Crackers 200g", 310, 520),
    (19, "Sparkling Water 500ml", 400, 729),
    (20, "Dark Chocolate Bar 90g", 550, 980),
    (21, "Orchard Juice 1L", 640, 1171),
    (1010, "Gift Wrap Sheet", 120, 250),
    (1020, "Picnic Basket", 3120, 5700),
];

/// (pack_code, product_code, qty).
const PACK_COMPONENTS: &[(i64, i64, i64)] = &[(1020, 19, 3), (1020, 21, 3)];

#[tokio::main]
async fn main() -> DbResult<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,tally=debug,sqlx=warn"));

    tracing_subscriber::fmt().with_env_filter(filter).init();

    let db_path = parse_db_path().unwrap_or_else(|| "./tally.db".to_string());

    info!(path = %db_path, "Seeding database");
    let db = Database::new(DbConfig::new(&db_path)).await?;

    let products = db.products();
    for &(code, name, cost, sales) in PRODUCTS {
        products
            .upsert(code, name, Money::from_cents(cost), Money::from_cents(sales))
            .await?;
    }
    info!(count = PRODUCTS.len(), "Products seeded");

    let packs = db.packs();
    for &(pack_code, product_code, qty) in PACK_COMPONENTS {
        // Re-running seed against an existing database hits the uniqueness
        // constraint; that is fine, the membership is already there.
        if let Err(err) = packs.add_component(pack_code, product_code, qty).await {
            tracing::debug!(%err, pack_code, product_code, "Skipping existing membership");
        }
    }
    info!(count = PACK_COMPONENTS.len(), "Pack memberships seeded");

    db.close().await;
    Ok(())
}

/// Reads `--db <path>` from the command line, if present.
fn parse_db_path() -> Option<String> {
    let args: Vec<String> = env::args().collect();
    args.iter()
        .position(|a| a == "--db")
        .and_then(|i| args.get(i + 1))
        .cloned()
}
