//! Error types for namecheck-core

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in namecheck-core
#[derive(Debug, Error)]
pub enum Error {
    /// Failed to read a file
    #[error("failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write a file
    #[error("failed to write file '{path}': {source}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// CSV error while reading or writing a diff file
    #[error("CSV error in '{path}': {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A recoverable failure on a single input line.
///
/// Callers skip the offending line and continue; these never surface as a
/// stage failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LineError {
    /// The ID field did not parse as an integer
    #[error("item ID is not an integer: '{0}'")]
    InvalidId(String),

    /// A required field delimiter was missing
    #[error("missing '{0}' delimiter")]
    MissingDelimiter(char),
}
