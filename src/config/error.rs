//! Configuration error types

use std::path::PathBuf;
use thiserror::Error;

/// Problems found while loading or checking an [`AnalyzerConfig`](super::AnalyzerConfig).
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config file not found: {0}")]
    NotFound(PathBuf),

    /// The file exists but is not valid analyzer TOML.
    #[error("Failed to parse {}: {message}", path.display())]
    Parse { path: PathBuf, message: String },

    /// A setting parsed but cannot be used, e.g. an `ftp://` endpoint.
    #[error("Invalid value for '{field}': {message}")]
    Validation { field: String, message: String },
}

impl ConfigError {
    pub(crate) fn invalid(field: &str, message: impl Into<String>) -> Self {
        ConfigError::Validation {
            field: field.to_string(),
            message: message.into(),
        }
    }

    /// Dotted setting name (`service.endpoint`) for validation failures.
    pub fn field(&self) -> Option<&str> {
        match self {
            ConfigError::Validation { field, .. } => Some(field),
            _ => None,
        }
    }
}
