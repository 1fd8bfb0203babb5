//! History storage configuration

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Local analysis history settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HistoryConfig {
    /// Directory holding the key-value slots
    pub data_dir: PathBuf,
    /// Record every successful analysis
    pub auto_save: bool,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            auto_save: true,
        }
    }
}

/// Platform data directory, falling back to the working directory when
/// the platform reports none.
pub fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("rng-analyzer")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_history_config_defaults() {
        let config = HistoryConfig::default();
        assert!(config.auto_save);
        assert!(config.data_dir.ends_with("rng-analyzer"));
    }

    #[test]
    fn test_history_config_from_toml() {
        let config: HistoryConfig = toml::from_str(
            r#"
            data_dir = "/tmp/rng"
            auto_save = false
            "#,
        )
        .unwrap();
        assert_eq!(config.data_dir, PathBuf::from("/tmp/rng"));
        assert!(!config.auto_save);
    }
}
