//! Logging configuration

use super::ConfigError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::str::FromStr;

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    /// Human-readable lines next to the command output
    #[default]
    Pretty,
    /// One JSON object per event, for log shippers
    Json,
}

impl FromStr for LogFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pretty" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            other => Err(ConfigError::invalid(
                "logging.format",
                format!("expected 'pretty' or 'json', got '{}'", other),
            )),
        }
    }
}

/// `[logging]` section
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
    /// Per-module overrides keyed by module under the crate, e.g. `client` or `history`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub component_levels: Option<HashMap<String, String>>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        // stderr is shared with progress and warnings, so only problems are logged
        Self {
            level: "warn".to_string(),
            format: LogFormat::Pretty,
            component_levels: None,
        }
    }
}
