//! Configuration module for rng-analyzer
//!
//! Provides layered configuration loading from files, environment variables, and defaults.
//!
//! # Configuration Precedence
//!
//! 1. CLI arguments (highest priority)
//! 2. Environment variables (`RNG_ANALYZER_*`)
//! 3. Configuration file (TOML)
//! 4. Default values (lowest priority)
//!
//! # Example
//!
//! ```rust
//! use rng_analyzer::config::AnalyzerConfig;
//!
//! let config = AnalyzerConfig::default();
//! assert_eq!(config.service.timeout_seconds, 30);
//!
//! let toml = r#"
//! [service]
//! endpoint = "http://localhost:8000/predict_bin/"
//! "#;
//! let config: AnalyzerConfig = toml::from_str(toml).unwrap();
//! assert_eq!(config.service.endpoint, "http://localhost:8000/predict_bin/");
//! ```

pub mod error;
pub mod history;
pub mod logging;
pub mod service;

pub use error::ConfigError;
pub use history::HistoryConfig;
pub use logging::{LogFormat, LoggingConfig};
pub use service::{ServiceConfig, DEFAULT_ENDPOINT};

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Unified configuration for the analyzer client.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// Remote classification service
    pub service: ServiceConfig,
    /// Local analysis history
    pub history: HistoryConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
}

impl AnalyzerConfig {
    /// Load configuration from a TOML file
    ///
    /// If path is None, returns default configuration.
    /// If path doesn't exist, returns NotFound error.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(p) => {
                if !p.exists() {
                    return Err(ConfigError::NotFound(p.to_path_buf()));
                }
                let content = std::fs::read_to_string(p)?;
                toml::from_str(&content).map_err(|e| ConfigError::Parse {
                    path: p.to_path_buf(),
                    message: e.to_string(),
                })
            }
            None => Ok(Self::default()),
        }
    }

    /// Apply environment variable overrides
    ///
    /// Invalid values are silently ignored (defaults are kept).
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(endpoint) = std::env::var("RNG_ANALYZER_ENDPOINT") {
            self.service.endpoint = endpoint;
        }
        if let Ok(timeout) = std::env::var("RNG_ANALYZER_TIMEOUT") {
            if let Ok(t) = timeout.parse() {
                self.service.timeout_seconds = t;
            }
        }
        if let Ok(dir) = std::env::var("RNG_ANALYZER_DATA_DIR") {
            if !dir.is_empty() {
                self.history.data_dir = PathBuf::from(dir);
            }
        }

        if let Ok(level) = std::env::var("RNG_ANALYZER_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Ok(format) = std::env::var("RNG_ANALYZER_LOG_FORMAT") {
            if let Ok(f) = format.parse() {
                self.logging.format = f;
            }
        }

        self
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let endpoint = self.service.endpoint.trim();
        if endpoint.is_empty() {
            return Err(ConfigError::invalid(
                "service.endpoint",
                "endpoint cannot be empty",
            ));
        }
        let url = reqwest::Url::parse(endpoint).map_err(|e| {
            ConfigError::invalid("service.endpoint", format!("not a valid URL: {}", e))
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::invalid(
                "service.endpoint",
                format!("unsupported scheme '{}'", url.scheme()),
            ));
        }

        if self.service.timeout_seconds == 0 {
            return Err(ConfigError::invalid(
                "service.timeout_seconds",
                "timeout must be non-zero",
            ));
        }

        if self.history.data_dir.as_os_str().is_empty() {
            return Err(ConfigError::invalid(
                "history.data_dir",
                "data directory cannot be empty",
            ));
        }

        Ok(())
    }
}
