//! Error types for classification requests.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while analyzing a file with the remote service.
///
/// Every variant renders as a single human-readable message; callers show
/// it as-is and never receive a partial prediction alongside it.
#[derive(Error, Debug)]
pub enum ClientError {
    /// File handle is missing a path or a name.
    #[error("Invalid file: {0}")]
    InvalidFile(String),

    /// Selected file could not be read from local storage.
    #[error("Failed to read {}: {source}", path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Network connectivity error (DNS, connection refused, etc.).
    #[error("Network error: {0}")]
    Transport(String),

    /// Request exceeded the configured deadline.
    #[error("Request timeout after {seconds}s: {message}")]
    Timeout { seconds: u64, message: String },

    /// Service answered with a non-success status.
    ///
    /// `message` is the service's `detail` when it sent one, otherwise the
    /// status code and raw body.
    #[error("{message}")]
    Service { status: u16, message: String },

    /// Success status, but the body is not a prediction.
    #[error("Invalid response: {0}")]
    MalformedResponse(String),
}

impl ClientError {
    /// True when the request never produced an HTTP response.
    pub fn is_transport(&self) -> bool {
        matches!(self, ClientError::Transport(_) | ClientError::Timeout { .. })
    }

    /// HTTP status reported by the service, if it answered.
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Service { status, .. } => Some(*status),
            _ => None,
        }
    }
}
