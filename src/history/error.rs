//! Error types for history persistence

use thiserror::Error;

/// Errors surfaced by history mutations.
///
/// Reads never fail; an unreadable slot is reported as an empty history.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Failed to write history slot '{key}': {source}")]
    Write {
        key: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to encode history: {0}")]
    Serialize(#[from] serde_json::Error),
}
