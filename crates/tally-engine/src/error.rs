//! # Engine Error Types
//!
//! Infrastructure failures during batch processing.
//!
//! These are NOT rule violations: a product breaking the price band lands
//! in its report entry, never here. `EngineError` means the batch itself
//! could not be processed - the catalog was unreachable or a validation
//! task died.

use thiserror::Error;

use tally_db::DbError;

/// Batch processing infrastructure errors.
#[derive(Debug, Error)]
pub enum EngineError {
    /// A catalog or pack lookup failed.
    #[error("catalog access failed: {0}")]
    Db(#[from] DbError),

    /// A spawned validation task panicked or was cancelled.
    #[error("validation task failed: {0}")]
    TaskFailed(String),
}

/// Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;
