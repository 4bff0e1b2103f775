//! # tally-engine: Batch Validation and Commit for Tally
//!
//! The orchestration layer and the only crate callers need to depend on.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                        Tally Engine                                 │
//! │                                                                     │
//! │  Caller (HTTP layer, CLI, batch importer, ...)                      │
//! │       │                                                             │
//! │       ├── PriceEngine::validate_batch(changes) → BatchReport        │
//! │       └── PriceEngine::commit(changes)         → CommitOutcome      │
//! │                                                                     │
//! │  ┌───────────────────────────────────────────────────────────────┐  │
//! │  │                tally-engine (THIS CRATE)                      │  │
//! │  │                                                               │  │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────────────────┐     │  │
//! │  │   │ validator │  │ resolver  │  │      committer        │     │  │
//! │  │   │ fan-out + │  │ pack BOM  │  │ gate on validation,   │     │  │
//! │  │   │ report    │  │ lookup    │  │ single transaction    │     │  │
//! │  │   └───────────┘  └───────────┘  └───────────────────────┘     │  │
//! │  └───────────────────────────────────────────────────────────────┘  │
//! │       │ rules, consistency            │ repositories                │
//! │       ▼                               ▼                             │
//! │   tally-core                      tally-db                          │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`engine`] - The [`PriceEngine`] handle
//! - [`validator`] - Batch validation (concurrent per-item fan-out)
//! - [`resolver`] - Pack bill-of-materials resolution
//! - [`committer`] - Gated, transactional commit
//! - [`error`] - Infrastructure error types
//!
//! ## Usage
//!
//! ```rust,ignore
//! use tally_db::{Database, DbConfig};
//! use tally_engine::PriceEngine;
//!
//! let db = Database::new(DbConfig::new("./tally.db")).await?;
//! let engine = PriceEngine::new(&db);
//!
//! let report = engine.validate_batch(&changes).await?;
//! if report.success {
//!     let outcome = engine.commit(&changes).await?;
//! }
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod committer;
pub mod engine;
pub mod error;
pub mod resolver;
pub mod validator;

#[cfg(test)]
pub(crate) mod testutil;

// =============================================================================
// Re-exports
// =============================================================================

pub use engine::PriceEngine;
pub use error::{EngineError, EngineResult};
pub use resolver::PackResolver;

// The report types callers consume come from tally-core
pub use tally_core::{BatchReport, CommitOutcome, PriceChange, ReportEntry, Violation};
