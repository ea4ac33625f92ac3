//! Question source port.
//!
//! Defines the interface for loading a question bank into a validated
//! [`QuestionPool`]. Infrastructure adapters implement this for concrete file
//! formats (CSV, JSON, spreadsheets). Row-level validation happens here, at the
//! boundary: the domain only ever sees well-formed records.

use paper_domain::QuestionPool;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a question bank.
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("Could not read question bank {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not parse question bank: {0}")]
    Parse(String),

    #[error("Question bank has no '{column}' column (found: {})", .available.join(", "))]
    MissingColumn {
        column: String,
        available: Vec<String>,
    },

    #[error("Row {row}: {reason}")]
    InvalidRow { row: usize, reason: String },

    #[error("Unsupported question bank format: {0}")]
    UnsupportedFormat(String),
}

/// Port for loading the question pool.
///
/// Implementations are expected to be cheap to call repeatedly; each call
/// reads the bank afresh.
pub trait QuestionSourcePort: Send + Sync {
    /// Load and validate every record of the bank, in bank order.
    fn load(&self) -> Result<QuestionPool, SourceError>;

    /// Short human-readable description (e.g. the file path).
    fn describe(&self) -> String;
}
