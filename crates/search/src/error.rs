//! Error types for the search crate.

use thiserror::Error;

/// Result type alias for search operations.
pub type Result<T> = std::result::Result<T, SearchError>;

/// Errors that can occur at the search boundary.
///
/// The scoring pipeline itself is total — empty queries, empty pools, and
/// sparse records are all defined behavior, not errors. Failures only arise
/// when decoding payloads handed over by the app shell.
#[derive(Debug, Error)]
pub enum SearchError {
    /// Record payload could not be decoded
    #[error("Invalid records payload: {0}")]
    InvalidRecords(#[from] serde_json::Error),
}
