//! Remote analysis client.
//!
//! Uploads a selected file to the classification service and returns its
//! prediction. The service is a black box: one multipart POST in, one JSON
//! prediction out. Transport, status and parse failures all come back
//! through [`ClientError`].

use async_trait::async_trait;

pub mod error;
pub mod http;
pub mod types;

pub use error::ClientError;
pub use http::HttpAnalysisClient;
pub use types::{FileHandle, PredictionResponse, FALLBACK_MIME_TYPE};

/// Anything that can turn a file into a prediction.
///
/// Object-safe so commands can take `&dyn AnalysisClient` and tests can
/// substitute a canned implementation.
#[async_trait]
pub trait AnalysisClient: Send + Sync {
    /// Where requests are sent, for logging and display.
    fn endpoint(&self) -> &str;

    /// Classify one file.
    ///
    /// # Returns
    ///
    /// - `Ok(PredictionResponse)` on a 2xx response with a valid prediction body
    /// - `Err(ClientError::InvalidFile | FileRead)` before any network traffic
    /// - `Err(ClientError::Transport | Timeout)` if no response arrived
    /// - `Err(ClientError::Service)` on a non-2xx status
    /// - `Err(ClientError::MalformedResponse)` on a 2xx status with an unusable body
    async fn analyze(&self, file: &FileHandle) -> Result<PredictionResponse, ClientError>;
}
