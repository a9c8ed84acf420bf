//! Admin client traits for the storage cluster's configuration API.

use std::sync::Arc;

use async_trait::async_trait;

use crate::result::AppResult;
use crate::types::{Principal, ServerInfo};

/// Reads and writes cluster configuration and reports cluster metadata.
///
/// One client is built per request from the caller's [`Principal`];
/// implementations hold no state shared between requests.
#[async_trait]
pub trait AdminClient: Send + Sync {
    /// Fetch server and cluster metadata.
    async fn server_info(&self) -> AppResult<ServerInfo>;

    /// Fetch the raw key-value configuration of a subsystem (e.g. `"subnet"`).
    async fn get_config_kv(&self, key: &str) -> AppResult<String>;

    /// Apply a configuration line such as `subnet license=... api_key=... proxy=...`.
    ///
    /// Returns `true` when the cluster reports a restart is required.
    async fn set_config_kv(&self, kv: &str) -> AppResult<bool>;
}

/// Builds an [`AdminClient`] acting on behalf of a principal.
pub trait AdminClientFactory: Send + Sync + 'static {
    /// Create a client for the given session.
    fn create(&self, principal: &Principal) -> AppResult<Arc<dyn AdminClient>>;
}
