//! Error types for compendium-core

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading tables or dispatching JSON records.
///
/// Translation itself never fails; unknown words pass through untouched.
#[derive(Debug, Error)]
pub enum Error {
    /// Failed to read a file
    #[error("failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A data file did not have the expected JSON shape
    #[error("failed to parse JSON '{path}': {source}")]
    JsonParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The language list has no canonical entry
    #[error("language list in '{0}' is empty")]
    NoLanguages(PathBuf),

    /// Unknown record kind name
    #[error("unknown record kind: {0}")]
    UnknownKind(String),

    /// Unknown vocabulary name
    #[error("unknown vocabulary: {0}")]
    UnknownVocabulary(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
