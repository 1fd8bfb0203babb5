//! Request and response types for the classification service.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use super::ClientError;

/// Content type sent when the caller declared none.
pub const FALLBACK_MIME_TYPE: &str = "application/octet-stream";

/// Prediction returned by the classification service.
///
/// `predicted_class_name` is an open set; look it up through
/// [`crate::classes::lookup`] rather than matching on it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResponse {
    pub predicted_class_id: i64,
    pub predicted_class_name: String,
    /// Class name to probability. May omit classes and need not sum to 1.
    pub probabilities: BTreeMap<String, f64>,
    #[serde(default)]
    pub detail: String,
    #[serde(default)]
    pub input_file_size_bytes: u64,
    #[serde(default)]
    pub processing_time_seconds: f64,
}

impl PredictionResponse {
    /// Probability attached to the predicted class, or `0.0` when the
    /// service left it out of `probabilities`.
    pub fn confidence(&self) -> f64 {
        self.probabilities
            .get(&self.predicted_class_name)
            .copied()
            .unwrap_or(0.0)
    }

    /// Probabilities sorted from most to least likely.
    pub fn ranked_probabilities(&self) -> Vec<(&str, f64)> {
        let mut ranked: Vec<(&str, f64)> = self
            .probabilities
            .iter()
            .map(|(name, p)| (name.as_str(), *p))
            .collect();
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
        ranked
    }
}

/// A locally available file selected for analysis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileHandle {
    /// Where the bytes are read from
    pub path: PathBuf,
    /// Name reported to the service and recorded in history
    pub name: String,
    /// Declared content type, if any
    pub mime_type: Option<String>,
}

impl FileHandle {
    pub fn new(path: impl Into<PathBuf>, name: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            name: name.into(),
            mime_type: None,
        }
    }

    /// Build a handle from a path, taking the name from its last component
    /// and the declared type from its extension.
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self {
            path: path.to_path_buf(),
            name,
            mime_type: mime_guess::from_path(path).first_raw().map(str::to_string),
        }
    }

    pub fn with_mime_type(mut self, mime_type: impl Into<String>) -> Self {
        self.mime_type = Some(mime_type.into());
        self
    }

    /// Content type for the upload part.
    pub fn content_type(&self) -> &str {
        self.mime_type
            .as_deref()
            .filter(|m| !m.trim().is_empty())
            .unwrap_or(FALLBACK_MIME_TYPE)
    }

    pub fn validate(&self) -> Result<(), ClientError> {
        if self.path.as_os_str().is_empty() {
            return Err(ClientError::InvalidFile("path cannot be empty".to_string()));
        }
        if self.name.trim().is_empty() {
            return Err(ClientError::InvalidFile("name cannot be empty".to_string()));
        }
        Ok(())
    }
}
