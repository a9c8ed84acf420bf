//! Cluster registration with SUBNET.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};
use url::Url;

use console_core::error::{AppError, ErrorKind};
use console_core::result::AppResult;
use console_core::types::{LicenseTokenConfig, ServerInfo};

use crate::client::{SubnetClient, parse_body};

/// Cluster description sent to SUBNET, encoded into the registration token.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClusterRegistrationInfo {
    pub deployment_id: String,
    pub cluster_name: String,
    pub used_capacity: u64,
    pub info: ClusterInfo,
}

/// Size and shape of the cluster.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClusterInfo {
    pub minio_version: String,
    pub no_of_server_pools: u32,
    pub no_of_servers: usize,
    pub no_of_drives: usize,
    pub no_of_buckets: u64,
    pub no_of_objects: u64,
    pub total_drive_space: u64,
    pub used_drive_space: u64,
}

impl ClusterRegistrationInfo {
    /// Derives registration info from the admin `info` response.
    ///
    /// The deployment id doubles as the cluster name.
    pub fn from_server_info(info: &ServerInfo) -> Self {
        let pools = info
            .servers
            .iter()
            .map(|s| s.pool_number)
            .fold(1, u32::max);

        let drives = info.servers.iter().flat_map(|s| s.drives.iter());
        let (total_space, used_space) = drives
            .clone()
            .fold((0u64, 0u64), |(total, used), d| {
                (total + d.total_space, used + d.used_space)
            });

        Self {
            deployment_id: info.deployment_id.clone(),
            cluster_name: info.deployment_id.clone(),
            used_capacity: info.usage.size,
            info: ClusterInfo {
                minio_version: info
                    .servers
                    .first()
                    .map(|s| s.version.clone())
                    .unwrap_or_default(),
                no_of_server_pools: pools,
                no_of_servers: info.servers.len(),
                no_of_drives: drives.count(),
                no_of_buckets: info.buckets.count,
                no_of_objects: info.objects.count,
                total_drive_space: total_space,
                used_drive_space: used_space,
            },
        }
    }
}

/// Encodes registration info as a base64 JSON token.
pub fn generate_reg_token(info: &ClusterRegistrationInfo) -> AppResult<String> {
    let json = serde_json::to_vec(info)?;
    Ok(STANDARD.encode(json))
}

/// Derives the registration token straight from server info.
pub fn reg_token_from_server_info(info: &ServerInfo) -> AppResult<String> {
    generate_reg_token(&ClusterRegistrationInfo::from_server_info(info))
}

/// How the cluster is registered with SUBNET.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegisterCredentials<'a> {
    /// An existing SUBNET API key.
    ApiKey(&'a str),
    /// A logged-in user's access token and the chosen account.
    Token { token: &'a str, account_id: &'a str },
}

#[derive(Serialize)]
struct RegistrationRequest {
    token: String,
}

#[derive(Debug, Default, Deserialize)]
struct RegistrationResponse {
    #[serde(default)]
    api_key: String,
    #[serde(default)]
    license: String,
}

/// Registers the cluster and returns the issued license and API key.
///
/// The returned record has no proxy; callers merge in the stored one.
pub async fn register(
    client: &SubnetClient,
    server_info: &ServerInfo,
    credentials: RegisterCredentials<'_>,
) -> AppResult<LicenseTokenConfig> {
    let mut url = Url::parse(&client.endpoints().register()).map_err(|e| {
        AppError::with_source(ErrorKind::Configuration, "Invalid SUBNET base URL", e)
    })?;

    let token = match credentials {
        RegisterCredentials::ApiKey(api_key) => {
            url.query_pairs_mut().append_pair("api_key", api_key);
            None
        }
        RegisterCredentials::Token { token, account_id } => {
            if token.is_empty() || account_id.is_empty() {
                return Err(AppError::validation(
                    "missing accountID or authentication token",
                ));
            }
            url.query_pairs_mut().append_pair("aid", account_id);
            Some(token)
        }
    };

    let request = RegistrationRequest {
        token: reg_token_from_server_info(server_info)?,
    };
    let body = client.post(url, &request, token).await?;
    let response: RegistrationResponse = parse_body(&body)?;

    if response.api_key.is_empty() && response.license.is_empty() {
        return Err(AppError::external("subnet api key not found"));
    }

    tracing::info!(
        deployment_id = %server_info.deployment_id,
        "Cluster registered with SUBNET"
    );

    Ok(LicenseTokenConfig {
        api_key: response.api_key,
        license: response.license,
        proxy: String::new(),
    })
}
