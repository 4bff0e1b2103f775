//! # tally-db: Database Layer for Tally
//!
//! This crate provides catalog and pack storage for the Tally pricing
//! engine. It uses SQLite with sqlx for async operations.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                        Tally Data Flow                              │
//! │                                                                     │
//! │  tally-engine (validate_batch / commit)                             │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  ┌───────────────────────────────────────────────────────────────┐  │
//! │  │                    tally-db (THIS CRATE)                      │  │
//! │  │                                                               │  │
//! │  │   ┌───────────────┐   ┌────────────────┐   ┌──────────────┐   │  │
//! │  │   │   Database    │   │  Repositories  │   │  Migrations  │   │  │
//! │  │   │   (pool.rs)   │   │  product.rs    │   │  (embedded)  │   │  │
//! │  │   │               │◄──│  pack.rs       │   │ 001_init.sql │   │  │
//! │  │   └───────────────┘   └────────────────┘   └──────────────┘   │  │
//! │  │                                                               │  │
//! │  └───────────────────────────────────────────────────────────────┘  │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  SQLite file (WAL mode, foreign keys on)                            │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`pool`] - Connection pool creation and configuration
//! - [`migrations`] - Embedded database migrations
//! - [`error`] - Database error types
//! - [`repository`] - Repository implementations (product, pack)
//!
//! ## Usage
//!
//! ```rust,ignore
//! use tally_db::{Database, DbConfig};
//!
//! let db = Database::new(DbConfig::new("path/to/tally.db")).await?;
//!
//! let product = db.products().get_by_code(1020).await?;
//! let components = db.packs().components_of(1020).await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod migrations;
pub mod pool;
pub mod repository;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{DbError, DbResult};
pub use pool::{Database, DbConfig};

// Repository re-exports for convenience
pub use repository::pack::PackRepository;
pub use repository::product::ProductRepository;
