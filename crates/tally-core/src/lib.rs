//! # tally-core: Pure Pricing Logic for Tally
//!
//! This crate is the **heart** of Tally. It contains the price maintenance
//! rules as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                        Tally Architecture                           │
//! │                                                                     │
//! │  ┌───────────────────────────────────────────────────────────────┐  │
//! │  │                Caller (HTTP layer, CLI, ...)                  │  │
//! │  │        validate_batch / commit on tally-engine                │  │
//! │  └─────────────────────────────┬─────────────────────────────────┘  │
//! │                                │                                    │
//! │  ┌─────────────────────────────▼─────────────────────────────────┐  │
//! │  │                    tally-engine                               │  │
//! │  │     pack resolution, batch fan-out, transactional commit      │  │
//! │  └─────────────────────────────┬─────────────────────────────────┘  │
//! │                                │                                    │
//! │  ┌─────────────────────────────▼─────────────────────────────────┐  │
//! │  │               ★ tally-core (THIS CRATE) ★                     │  │
//! │  │                                                               │  │
//! │  │   ┌───────────┐ ┌───────────┐ ┌───────────┐ ┌─────────────┐   │  │
//! │  │   │   money   │ │   rules   │ │consistency│ │   report    │   │  │
//! │  │   │   Money   │ │ floor/band│ │ pack total│ │ BatchReport │   │  │
//! │  │   └───────────┘ └───────────┘ └───────────┘ └─────────────┘   │  │
//! │  │                                                               │  │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS          │  │
//! │  └─────────────────────────────┬─────────────────────────────────┘  │
//! │                                │                                    │
//! │  ┌─────────────────────────────▼─────────────────────────────────┐  │
//! │  │                  tally-db (SQLite layer)                      │  │
//! │  └───────────────────────────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - Money type with integer-cent arithmetic (no floating point!)
//! - [`types`] - Domain types (Product, pack membership, PriceChange)
//! - [`rules`] - The per-product rules: floor-at-cost and the ±10% band
//! - [`consistency`] - Pack total recomputation against a proposed batch
//! - [`report`] - Per-item report entries and the batch report
//! - [`error`] - The violation taxonomy and parse errors
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: same batch and catalog state in, same report out
//! 2. **No I/O**: database, network, file system access is FORBIDDEN here
//! 3. **Integer Money**: all monetary values are cents (i64), so the exact
//!    equality in the pack check is meaningful
//! 4. **Typed Violations**: rule breaches are enum variants carrying their
//!    caller-facing message, never free-form strings

// =============================================================================
// Module Declarations
// =============================================================================

pub mod consistency;
pub mod error;
pub mod money;
pub mod report;
pub mod rules;
pub mod types;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{MoneyError, Violation};
pub use money::Money;
pub use report::{BatchReport, CommitOutcome, ReportEntry};
pub use types::{PackComponent, PackInfo, PackRecord, PriceChange, Product};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum allowed price movement per change, in percent of the current
/// sales price, in either direction.
///
/// ## Business Reason
/// Guards against fat-finger repricing: a price may drift, but never jump.
/// The boundary is inclusive - a change of exactly this percentage passes.
pub const PRICE_BAND_PERCENT: i64 = 10;
