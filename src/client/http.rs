//! HTTP implementation of the analysis client.

use super::{AnalysisClient, ClientError, FileHandle, PredictionResponse};
use crate::config::ServiceConfig;
use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use serde_json::Value;
use std::error::Error as _;
use std::time::Duration;

/// Multipart field the service reads the upload from.
pub const UPLOAD_FIELD: &str = "file";

/// Sends files to the classification service over HTTP.
pub struct HttpAnalysisClient {
    /// Full URL the upload is POSTed to
    endpoint: String,
    /// Per-request deadline
    timeout: Duration,
    client: Client,
}

impl HttpAnalysisClient {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Self {
        Self::with_client(endpoint, timeout, Client::new())
    }

    /// Reuse an existing client (connection pool, proxies, TLS settings).
    pub fn with_client(endpoint: impl Into<String>, timeout: Duration, client: Client) -> Self {
        Self {
            endpoint: endpoint.into(),
            timeout,
            client,
        }
    }

    pub fn from_config(config: &ServiceConfig) -> Self {
        Self::new(
            config.endpoint.clone(),
            Duration::from_secs(config.timeout_seconds),
        )
    }

    fn transport_error(&self, err: reqwest::Error) -> ClientError {
        if err.is_timeout() {
            ClientError::Timeout {
                seconds: self.timeout.as_secs(),
                message: error_chain(&err),
            }
        } else {
            ClientError::Transport(error_chain(&err))
        }
    }
}

#[async_trait]
impl AnalysisClient for HttpAnalysisClient {
    fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn analyze(&self, file: &FileHandle) -> Result<PredictionResponse, ClientError> {
        file.validate()?;

        let bytes = tokio::fs::read(&file.path)
            .await
            .map_err(|source| ClientError::FileRead {
                path: file.path.clone(),
                source,
            })?;
        let size = bytes.len();

        let part = Part::bytes(bytes)
            .file_name(file.name.clone())
            .mime_str(file.content_type())
            .map_err(|e| {
                ClientError::InvalidFile(format!(
                    "invalid content type '{}': {}",
                    file.content_type(),
                    e
                ))
            })?;
        let form = Form::new().part(UPLOAD_FIELD, part);

        tracing::info!(
            file = %file.name,
            endpoint = %self.endpoint,
            bytes = size,
            content_type = %file.content_type(),
            "Uploading file for analysis"
        );

        let response = self
            .client
            .post(&self.endpoint)
            .multipart(form)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = response.status();
        let body = response.text().await.map_err(|e| self.transport_error(e))?;
        tracing::debug!(status = status.as_u16(), body = %body, "Classification service response");

        if !status.is_success() {
            let message = service_error_message(status.as_u16(), &body);
            tracing::warn!(status = status.as_u16(), error = %message, "Classification request rejected");
            return Err(ClientError::Service {
                status: status.as_u16(),
                message,
            });
        }

        serde_json::from_str(&body).map_err(|e| {
            tracing::warn!(error = %e, "Classification response is not a prediction");
            ClientError::MalformedResponse(format!("Failed to parse prediction response: {}", e))
        })
    }
}

/// Message for a non-success response.
///
/// Uses the body's `detail` when it is JSON carrying a non-empty, non-zero one,
/// `API error: <status>` when it is JSON without one, and
/// `API error: <status> - <body>` otherwise.
pub fn service_error_message(status: u16, body: &str) -> String {
    let fallback = format!("API error: {}", status);
    match serde_json::from_str::<Value>(body) {
        Ok(json) => match json.get("detail") {
            Some(Value::String(detail)) if !detail.is_empty() => detail.clone(),
            // Validation errors arrive as a structured detail list
            Some(detail @ (Value::Array(_) | Value::Object(_))) => detail.to_string(),
            Some(Value::Bool(true)) => "true".to_string(),
            Some(Value::Number(n)) if n.as_f64() != Some(0.0) => n.to_string(),
            _ => fallback,
        },
        Err(_) => format!("{} - {}", fallback, body),
    }
}

/// Render an error with its sources, so connect failures keep the OS reason.
fn error_chain(err: &reqwest::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}
