//! Reading and writing the cluster's `subnet` configuration subsystem.

use console_core::error::AppError;
use console_core::result::AppResult;
use console_core::traits::AdminClient;
use console_core::types::LicenseTokenConfig;

use crate::config_kv::parse_server_config_output;

/// Name of the configuration subsystem holding SUBNET settings.
pub const SUBNET_SUB_SYS: &str = "subnet";

const KEY_LICENSE: &str = "license";
const KEY_API_KEY: &str = "api_key";
const KEY_PROXY: &str = "proxy";

/// Reads the default `subnet` target from cluster configuration.
pub async fn subnet_key_from_config(admin: &dyn AdminClient) -> AppResult<LicenseTokenConfig> {
    let output = admin.get_config_kv(SUBNET_SUB_SYS).await?;
    let configs = parse_server_config_output(&output)?;

    configs
        .iter()
        .find(|c| c.is_default_target())
        .map(|c| {
            let value = |key: &str| c.lookup(key).unwrap_or_default().to_string();
            LicenseTokenConfig {
                api_key: value(KEY_API_KEY),
                license: value(KEY_LICENSE),
                proxy: value(KEY_PROXY),
            }
        })
        .ok_or_else(|| AppError::external("unable to find subnet configuration"))
}

/// Scans every `subnet` entry for a `license` key.
///
/// When several entries carry one, the last wins. Returns `None` when no
/// non-empty license is stored.
pub async fn license_from_config(admin: &dyn AdminClient) -> AppResult<Option<String>> {
    let output = admin.get_config_kv(SUBNET_SUB_SYS).await?;
    let configs = parse_server_config_output(&output)?;

    let license = configs
        .iter()
        .flat_map(|c| c.kv.iter())
        .filter(|kv| kv.key == KEY_LICENSE)
        .map(|kv| kv.value.clone())
        .last()
        .filter(|l| !l.is_empty());

    Ok(license)
}

/// Formats the configuration line written after a successful registration.
pub fn format_subnet_config(license: &str, api_key: &str, proxy: &str) -> String {
    format!("{SUBNET_SUB_SYS} {KEY_LICENSE}={license} {KEY_API_KEY}={api_key} {KEY_PROXY}={proxy}")
}

#[cfg(test)]
mod tests {
    use super::*;

    use async_trait::async_trait;
    use console_core::types::ServerInfo;

    struct StaticConfig(&'static str);

    #[async_trait]
    impl AdminClient for StaticConfig {
        async fn server_info(&self) -> AppResult<ServerInfo> {
            Ok(ServerInfo::default())
        }

        async fn get_config_kv(&self, key: &str) -> AppResult<String> {
            assert_eq!(key, SUBNET_SUB_SYS);
            Ok(self.0.to_string())
        }

        async fn set_config_kv(&self, _kv: &str) -> AppResult<bool> {
            Ok(false)
        }
    }

    #[test]
    fn test_format_subnet_config() {
        assert_eq!(
            format_subnet_config("lic", "key", "http://proxy:3128"),
            "subnet license=lic api_key=key proxy=http://proxy:3128"
        );
        assert_eq!(
            format_subnet_config("lic", "key", ""),
            "subnet license=lic api_key=key proxy="
        );
    }

    #[tokio::test]
    async fn test_subnet_key_reads_default_target() {
        let admin = StaticConfig(
            "subnet:other license=ignored\nsubnet license=L1 api_key=K1 proxy=http://p:1",
        );
        let key = subnet_key_from_config(&admin).await.unwrap();
        assert_eq!(key.license, "L1");
        assert_eq!(key.api_key, "K1");
        assert_eq!(key.proxy(), Some("http://p:1"));
    }

    #[tokio::test]
    async fn test_subnet_key_missing_keys_are_empty() {
        let admin = StaticConfig("subnet");
        let key = subnet_key_from_config(&admin).await.unwrap();
        assert_eq!(key, LicenseTokenConfig::default());
    }

    #[tokio::test]
    async fn test_subnet_key_without_default_target_fails() {
        let admin = StaticConfig("subnet:named license=x");
        let err = subnet_key_from_config(&admin).await.unwrap_err();
        assert_eq!(err.message, "unable to find subnet configuration");
    }

    #[tokio::test]
    async fn test_license_from_config_scans_all_entries() {
        let admin = StaticConfig("subnet api_key=k\nsubnet:named license=from-target");
        let license = license_from_config(&admin).await.unwrap();
        assert_eq!(license.as_deref(), Some("from-target"));
    }

    #[tokio::test]
    async fn test_license_from_config_empty_is_none() {
        let admin = StaticConfig("subnet license= api_key=k proxy=");
        assert_eq!(license_from_config(&admin).await.unwrap(), None);
    }
}
