//! HTTP client for the cluster's admin API.
//!
//! Requests are authorized with the caller's session token. Request
//! signing and payload encryption are left to the deployment's gateway.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use url::Url;

use console_core::config::AdminConfig;
use console_core::error::{AppError, ErrorKind};
use console_core::result::AppResult;
use console_core::traits::{AdminClient, AdminClientFactory};
use console_core::types::{Principal, ServerInfo};

const ADMIN_API_PREFIX: &str = "minio/admin/v3";

/// Header the cluster sets to report whether a config change was applied live.
pub const CONFIG_APPLIED_HEADER: &str = "x-minio-config-applied";
const CONFIG_APPLIED_TRUE: &str = "true";

/// Admin client bound to a single session.
#[derive(Clone)]
pub struct HttpAdminClient {
    http: reqwest::Client,
    endpoint: String,
    session_token: String,
}

impl std::fmt::Debug for HttpAdminClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpAdminClient")
            .field("endpoint", &self.endpoint)
            .finish()
    }
}

impl HttpAdminClient {
    /// Creates a client for `endpoint` acting with `session_token`.
    pub fn new(http: reqwest::Client, endpoint: &str, session_token: &str) -> Self {
        Self {
            http,
            endpoint: endpoint.trim_end_matches('/').to_string(),
            session_token: session_token.to_string(),
        }
    }

    fn api_url(&self, api: &str) -> AppResult<Url> {
        let raw = format!("{}/{ADMIN_API_PREFIX}/{api}", self.endpoint);
        Url::parse(&raw).map_err(|e| {
            AppError::with_source(
                ErrorKind::Configuration,
                format!("Invalid admin endpoint '{}'", self.endpoint),
                e,
            )
        })
    }

    async fn send(&self, request: reqwest::RequestBuilder, api: &str) -> AppResult<reqwest::Response> {
        let response = request
            .bearer_auth(&self.session_token)
            .send()
            .await
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::ExternalService,
                    format!("Admin API call '{api}' failed"),
                    e,
                )
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(api, status = status.as_u16(), "Admin API returned an error");
            return Err(admin_status_error(api, status, &body));
        }

        Ok(response)
    }
}

fn admin_status_error(api: &str, status: StatusCode, body: &str) -> AppError {
    let message = if body.trim().is_empty() {
        format!("Admin API call '{api}' returned {status}")
    } else {
        format!("Admin API call '{api}' returned {status}: {}", body.trim())
    };
    AppError::external(message)
}

#[async_trait]
impl AdminClient for HttpAdminClient {
    async fn server_info(&self) -> AppResult<ServerInfo> {
        let url = self.api_url("info")?;
        let response = self.send(self.http.get(url), "info").await?;

        response.json::<ServerInfo>().await.map_err(|e| {
            AppError::with_source(ErrorKind::Serialization, "Malformed server info response", e)
        })
    }

    async fn get_config_kv(&self, key: &str) -> AppResult<String> {
        let mut url = self.api_url("get-config-kv")?;
        url.query_pairs_mut().append_pair("key", key);

        let response = self.send(self.http.get(url), "get-config-kv").await?;
        response.text().await.map_err(|e| {
            AppError::with_source(ErrorKind::ExternalService, "Failed to read config response", e)
        })
    }

    async fn set_config_kv(&self, kv: &str) -> AppResult<bool> {
        let url = self.api_url("set-config-kv")?;
        let response = self
            .send(self.http.put(url).body(kv.to_string()), "set-config-kv")
            .await?;

        let applied = response
            .headers()
            .get(CONFIG_APPLIED_HEADER)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|v| v == CONFIG_APPLIED_TRUE);

        Ok(!applied)
    }
}

/// Builds [`HttpAdminClient`]s sharing one connection pool.
#[derive(Debug, Clone)]
pub struct HttpAdminClientFactory {
    http: reqwest::Client,
    endpoint: String,
}

impl HttpAdminClientFactory {
    /// Creates a factory from admin configuration.
    pub fn new(config: &AdminConfig) -> AppResult<Self> {
        Url::parse(&config.endpoint).map_err(|e| {
            AppError::with_source(
                ErrorKind::Configuration,
                format!("Invalid admin endpoint '{}'", config.endpoint),
                e,
            )
        })?;

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds.max(1)))
            .build()
            .map_err(|e| {
                AppError::with_source(ErrorKind::Internal, "Failed to build admin HTTP client", e)
            })?;

        Ok(Self {
            http,
            endpoint: config.endpoint.clone(),
        })
    }
}

impl AdminClientFactory for HttpAdminClientFactory {
    fn create(&self, principal: &Principal) -> AppResult<Arc<dyn AdminClient>> {
        if principal.session_token().is_empty() {
            return Err(AppError::authentication("Missing session credentials"));
        }

        Ok(Arc::new(HttpAdminClient::new(
            self.http.clone(),
            &self.endpoint,
            principal.session_token(),
        )))
    }
}
