//! Error types for the feed crate.

use thiserror::Error;

/// Result type alias for feed operations.
pub type Result<T> = std::result::Result<T, FeedError>;

/// Errors that can occur at the feed boundary.
///
/// Interleaving itself is total — empty streams are defined behavior.
/// Failures only arise when decoding recommender payloads handed over by
/// the app shell.
#[derive(Debug, Error)]
pub enum FeedError {
    /// Recommender payload could not be decoded
    #[error("Invalid feed payload: {0}")]
    InvalidPayload(#[from] serde_json::Error),
}
