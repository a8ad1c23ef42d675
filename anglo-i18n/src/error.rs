//! Error types for dictionary loading and translation

use std::path::PathBuf;

/// Errors raised while building or loading dictionary data.
///
/// All of these surface at load time. A successfully built
/// [`DictionaryStore`](crate::DictionaryStore) is never re-validated on the
/// translation path.
#[derive(Debug, thiserror::Error)]
pub enum DictionaryError {
    /// Two entries of one table share a key (compared case-insensitively)
    #[error("duplicate key '{key}' in {table}")]
    DuplicateKey { table: String, key: String },

    /// Two entries of a reversible table share a value, so the table cannot be reversed
    #[error("duplicate value '{value}' in {table}: reversal would be ambiguous")]
    DuplicateValue { table: String, value: String },

    /// An entry with an empty key or value
    #[error("empty entry in {table}")]
    EmptyEntry { table: String },

    #[error("failed to read '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse JSON from '{origin}': {source}")]
    Json {
        origin: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    /// The JSON document was valid but not a flat object
    #[error("invalid dictionary in '{0}': root must be an object")]
    NotAnObject(String),
}

/// Errors raised by a translation call
#[derive(Debug, thiserror::Error)]
pub enum TranslateError {
    /// The direction selector was not one of the two supported values
    #[error("invalid direction '{0}': expected american-to-british or british-to-american")]
    InvalidDirection(String),

    /// The match alternation could not be compiled (only possible past the regex size limit)
    #[error("failed to compile match pattern: {0}")]
    Pattern(#[from] regex::Error),
}

/// Result type for dictionary operations
pub type DictionaryResult<T> = Result<T, DictionaryError>;

/// Result type for translation operations
pub type TranslateResult<T> = Result<T, TranslateError>;
