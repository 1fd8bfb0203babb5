//! Classification service configuration

use serde::{Deserialize, Serialize};

/// Endpoint the original mobile client shipped with.
pub const DEFAULT_ENDPOINT: &str = "https://rng-api.onrender.com/predict_bin/";

/// Remote classification service settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// Full URL the file is POSTed to
    pub endpoint: String,
    /// Upper bound on a single upload round trip
    pub timeout_seconds: u64,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout_seconds: 30,
        }
    }
}
