//! Storage cluster admin API configuration.

use serde::{Deserialize, Serialize};

/// Where and how to reach the cluster's admin API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminConfig {
    /// Base URL of the cluster (scheme, host and port).
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Timeout for a single admin call in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            timeout_seconds: default_timeout(),
        }
    }
}

fn default_endpoint() -> String {
    "http://localhost:9000".to_string()
}

fn default_timeout() -> u64 {
    30
}
