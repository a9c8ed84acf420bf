//! SUBNET licensing service configuration.

use serde::{Deserialize, Serialize};

/// Environment variable that seeds the license directly.
pub const ENV_SUBNET_LICENSE: &str = "CONSOLE_SUBNET_LICENSE";
/// Environment variable holding the explicitly configured SUBNET proxy.
pub const ENV_SUBNET_PROXY: &str = "CONSOLE_SUBNET_PROXY";
/// Environment variable adding one PEM key to the offline public keys.
pub const ENV_SUBNET_PUBLIC_KEY: &str = "CONSOLE_SUBNET_PUBLIC_KEY";
/// Environment variable overriding the SUBNET base URL.
pub const ENV_SUBNET_URL: &str = "CONSOLE_SUBNET_URL";

/// SUBNET client configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubnetConfig {
    /// SUBNET base URL.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Proxy used when the cluster has none stored. Empty means direct.
    #[serde(default)]
    pub proxy: String,
    /// License seeded by the cluster. Empty means "look it up".
    #[serde(default)]
    pub license: String,
    /// PEM public keys used when the SUBNET key cannot be downloaded.
    ///
    /// None ship by default: an air-gapped cluster must configure the
    /// key published by SUBNET here or through `CONSOLE_SUBNET_PUBLIC_KEY`.
    #[serde(default)]
    pub public_keys: Vec<String>,
    /// Timeout for a single SUBNET call in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
}

impl Default for SubnetConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            proxy: String::new(),
            license: String::new(),
            public_keys: Vec::new(),
            timeout_seconds: default_timeout(),
        }
    }
}

impl SubnetConfig {
    /// Applies the `CONSOLE_SUBNET_*` variables from the process environment.
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides_from(|key| std::env::var(key).ok());
    }

    /// Applies overrides from an arbitrary variable lookup.
    ///
    /// Unset or empty variables leave the current value untouched.
    pub fn apply_overrides_from<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.is_empty());

        if let Some(license) = non_empty(ENV_SUBNET_LICENSE) {
            self.license = license;
        }
        if let Some(proxy) = non_empty(ENV_SUBNET_PROXY) {
            self.proxy = proxy;
        }
        if let Some(url) = non_empty(ENV_SUBNET_URL) {
            self.base_url = url;
        }
        if let Some(key) = non_empty(ENV_SUBNET_PUBLIC_KEY)
            && !self.public_keys.contains(&key)
        {
            self.public_keys.push(key);
        }
    }

    /// The seeded license, if any.
    pub fn seeded_license(&self) -> Option<&str> {
        Some(self.license.as_str()).filter(|l| !l.is_empty())
    }

    /// Whether a license can be verified without reaching SUBNET.
    pub fn has_offline_keys(&self) -> bool {
        self.public_keys.iter().any(|k| !k.trim().is_empty())
    }

    /// The explicitly configured proxy, if any.
    pub fn configured_proxy(&self) -> Option<&str> {
        Some(self.proxy.as_str()).filter(|p| !p.is_empty())
    }
}

fn default_base_url() -> String {
    "https://subnet.min.io".to_string()
}

fn default_timeout() -> u64 {
    30
}
