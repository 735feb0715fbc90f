//! Error types for the match-log pipeline.
//!
//! Only whole-run failures live here. A single field that fails to coerce is
//! not an error: it becomes `None` on the typed record.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// The page could not be fetched or read.
    #[error("source unavailable ({source_ref}): {reason}")]
    SourceUnavailable { source_ref: String, reason: String },

    /// The document does not contain the expected match-log table.
    #[error("table '{table_id}' not found in document")]
    SchemaNotFound { table_id: String },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub fn source_unavailable(source_ref: &str, reason: impl ToString) -> Self {
        Error::SourceUnavailable {
            source_ref: source_ref.to_string(),
            reason: reason.to_string(),
        }
    }
}
