//! Proxy-aware HTTP client for SUBNET.

use std::time::Duration;

use reqwest::header::{CONTENT_TYPE, HeaderValue};
use reqwest::{IntoUrl, Proxy, StatusCode};
use serde::Serialize;

use console_core::config::SubnetConfig;
use console_core::error::{AppError, ErrorKind};
use console_core::result::AppResult;

use crate::endpoints::SubnetEndpoints;

/// Picks the proxy for SUBNET traffic.
///
/// A proxy stored in cluster configuration wins over the explicitly
/// configured one; empty values count as unset.
pub fn resolve_proxy(stored: Option<&str>, configured: Option<&str>) -> Option<String> {
    let non_empty = |p: Option<&str>| p.filter(|p| !p.trim().is_empty()).map(str::to_string);
    non_empty(stored).or_else(|| non_empty(configured))
}

/// HTTP client for SUBNET, optionally routed through a proxy.
#[derive(Debug, Clone)]
pub struct SubnetClient {
    http: reqwest::Client,
    endpoints: SubnetEndpoints,
    proxy: Option<String>,
}

impl SubnetClient {
    /// Builds a client; `proxy` must be a valid proxy URL when given.
    pub fn new(config: &SubnetConfig, proxy: Option<&str>) -> AppResult<Self> {
        let mut builder =
            reqwest::Client::builder().timeout(Duration::from_secs(config.timeout_seconds.max(1)));

        if let Some(proxy_url) = proxy {
            let parsed = url::Url::parse(proxy_url).map_err(|e| {
                AppError::with_source(
                    ErrorKind::Configuration,
                    format!("Invalid SUBNET proxy URL '{proxy_url}'"),
                    e,
                )
            })?;
            let proxy = Proxy::all(parsed.as_str()).map_err(|e| {
                AppError::with_source(
                    ErrorKind::Configuration,
                    format!("Invalid SUBNET proxy URL '{proxy_url}'"),
                    e,
                )
            })?;
            builder = builder.proxy(proxy);
            tracing::debug!(
                proxy_host = parsed.host_str().unwrap_or_default(),
                "SUBNET client: proxy enabled"
            );
        }

        let http = builder.build().map_err(|e| {
            AppError::with_source(ErrorKind::Internal, "Failed to build SUBNET HTTP client", e)
        })?;

        Ok(Self {
            http,
            endpoints: SubnetEndpoints::new(&config.base_url),
            proxy: proxy.map(str::to_string),
        })
    }

    /// Builds a client that talks to SUBNET directly.
    pub fn direct(config: &SubnetConfig) -> AppResult<Self> {
        Self::new(config, None)
    }

    pub fn endpoints(&self) -> &SubnetEndpoints {
        &self.endpoints
    }

    /// The proxy this client routes through, if any.
    pub fn proxy(&self) -> Option<&str> {
        self.proxy.as_deref()
    }

    /// Sends a GET and returns the body of a 200 response.
    pub(crate) async fn get<U: IntoUrl>(&self, url: U, token: Option<&str>) -> AppResult<String> {
        let request = self
            .http
            .get(url)
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        self.execute(request, token).await
    }

    /// Sends a JSON POST and returns the body of a 200 response.
    pub(crate) async fn post<U: IntoUrl, T: Serialize + ?Sized>(
        &self,
        url: U,
        body: &T,
        token: Option<&str>,
    ) -> AppResult<String> {
        let request = self.http.post(url).json(body);
        self.execute(request, token).await
    }

    async fn execute(
        &self,
        mut request: reqwest::RequestBuilder,
        token: Option<&str>,
    ) -> AppResult<String> {
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await.map_err(|e| {
            AppError::with_source(ErrorKind::ExternalService, "SUBNET request failed", e)
        })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            AppError::with_source(ErrorKind::ExternalService, "Failed to read SUBNET response", e)
        })?;

        if status != StatusCode::OK {
            tracing::warn!(status = status.as_u16(), "SUBNET request rejected");
            return Err(AppError::external(format!(
                "Request failed with code {} and errors: {}",
                status.as_u16(),
                body
            )));
        }

        Ok(body)
    }
}

/// Parses a SUBNET JSON body.
pub(crate) fn parse_body<T: serde::de::DeserializeOwned>(body: &str) -> AppResult<T> {
    serde_json::from_str(body).map_err(|e| {
        AppError::with_source(ErrorKind::Serialization, "Malformed SUBNET response", e)
    })
}
