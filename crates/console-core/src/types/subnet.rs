//! The SUBNET record stored in the cluster's `subnet` config subsystem.

use serde::{Deserialize, Serialize};

/// License, API key, and proxy as stored in cluster configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LicenseTokenConfig {
    /// SUBNET API key.
    pub api_key: String,
    /// License JWT.
    pub license: String,
    /// Proxy used to reach SUBNET. Empty means direct.
    pub proxy: String,
}

impl LicenseTokenConfig {
    /// The stored proxy, if one is set.
    pub fn proxy(&self) -> Option<&str> {
        Some(self.proxy.as_str()).filter(|p| !p.is_empty())
    }
}
