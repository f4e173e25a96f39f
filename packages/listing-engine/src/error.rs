//! Typed errors for the listing engine.
//!
//! Uses `thiserror` for library errors (not `anyhow`).
//!
//! Normalization itself never fails: missing and unparseable values
//! degrade to empty strings so one bad listing cannot abort a batch.
//! Errors here come from the engine's boundaries: the oracle and the
//! filesystem.

use thiserror::Error;

/// Errors from the file and oracle boundaries of the engine.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The extraction oracle failed or returned garbage
    #[error("oracle error: {0}")]
    Oracle(#[from] OracleError),

    /// Filesystem operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV read or write failed
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A required column is missing from an input table
    #[error("missing required column: {column}")]
    MissingColumn { column: String },
}

/// Errors from the extraction-oracle seam.
#[derive(Debug, Error)]
pub enum OracleError {
    /// The oracle backend (HTTP client, LLM service) failed
    #[error("oracle backend error: {0}")]
    Backend(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The response contained no JSON object at all
    #[error("oracle response contained no JSON object")]
    MissingPayload,

    /// The recovered payload was not valid JSON
    #[error("oracle response was not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

/// Result type alias for engine operations.
pub type Result<T> = std::result::Result<T, EngineError>;

/// Result type alias for oracle operations.
pub type OracleResult<T> = std::result::Result<T, OracleError>;
