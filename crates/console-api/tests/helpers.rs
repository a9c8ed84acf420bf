//! Shared test helpers for API tests.

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

use console_api::{AppState, build_app};
use console_core::config::{AppConfig, SubnetConfig};
use console_core::error::AppError;
use console_core::result::AppResult;
use console_core::traits::{AdminClient, AdminClientFactory};
use console_core::types::{Principal, ServerInfo};
use console_service::SubnetService;

pub const SESSION: &str = "session-token";

/// In-memory cluster serving a fixed `subnet` configuration.
#[derive(Default)]
pub struct MemoryAdmin {
    pub config_output: String,
    pub writes: Mutex<Vec<String>>,
}

#[async_trait]
impl AdminClient for MemoryAdmin {
    async fn server_info(&self) -> AppResult<ServerInfo> {
        Ok(ServerInfo {
            deployment_id: "dep-test".to_string(),
            ..ServerInfo::default()
        })
    }

    async fn get_config_kv(&self, _key: &str) -> AppResult<String> {
        Ok(self.config_output.clone())
    }

    async fn set_config_kv(&self, kv: &str) -> AppResult<bool> {
        self.writes.lock().unwrap().push(kv.to_string());
        Ok(true)
    }
}

/// Hands out the shared admin only for the expected session token.
pub struct TestFactory {
    pub admin: Arc<MemoryAdmin>,
    pub created: AtomicUsize,
}

impl AdminClientFactory for TestFactory {
    fn create(&self, principal: &Principal) -> AppResult<Arc<dyn AdminClient>> {
        if principal.session_token() != SESSION {
            return Err(AppError::authentication("Unknown session"));
        }
        self.created.fetch_add(1, Ordering::SeqCst);
        Ok(self.admin.clone())
    }
}

/// Test application context
pub struct TestApp {
    pub router: Router,
    pub admin: Arc<MemoryAdmin>,
    pub factory: Arc<TestFactory>,
}

impl TestApp {
    /// Builds the app against `subnet_url` with the given cluster config.
    pub fn new(subnet_url: &str, config_output: &str) -> Self {
        Self::with_config(subnet_url, config_output, AppConfig::default())
    }

    /// Like [`TestApp::new`], with a custom server request timeout.
    pub fn with_request_timeout(subnet_url: &str, config_output: &str, seconds: u64) -> Self {
        let mut config = AppConfig::default();
        config.server.request_timeout_seconds = seconds;
        Self::with_config(subnet_url, config_output, config)
    }

    fn with_config(subnet_url: &str, config_output: &str, mut config: AppConfig) -> Self {
        config.subnet = SubnetConfig {
            base_url: subnet_url.to_string(),
            timeout_seconds: 5,
            ..SubnetConfig::default()
        };

        let admin = Arc::new(MemoryAdmin {
            config_output: config_output.to_string(),
            ..MemoryAdmin::default()
        });
        let factory = Arc::new(TestFactory {
            admin: admin.clone(),
            created: AtomicUsize::new(0),
        });

        let state = AppState {
            subnet_service: Arc::new(SubnetService::new(config.subnet.clone(), factory.clone())),
        };

        Self {
            router: build_app(state, &config.server),
            admin,
            factory,
        }
    }

    pub fn admin_clients_created(&self) -> usize {
        self.factory.created.load(Ordering::SeqCst)
    }

    pub fn config_writes(&self) -> Vec<String> {
        self.admin.writes.lock().unwrap().clone()
    }

    /// Make an HTTP request with the test session as bearer token.
    pub async fn request(&self, method: &str, path: &str, body: Option<Value>) -> TestResponse {
        self.send(method, path, body, Some(("Authorization", format!("Bearer {SESSION}"))))
            .await
    }

    /// Make an HTTP request with an optional extra header.
    pub async fn send(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        header: Option<(&str, String)>,
    ) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        self.send_raw(method, path, body_str, header).await
    }

    /// Make an HTTP request with the test session and a raw body.
    pub async fn request_raw(&self, method: &str, path: &str, body: &str) -> TestResponse {
        self.send_raw(
            method,
            path,
            body.to_string(),
            Some(("Authorization", format!("Bearer {SESSION}"))),
        )
        .await
    }

    async fn send_raw(
        &self,
        method: &str,
        path: &str,
        body_str: String,
        header: Option<(&str, String)>,
    ) -> TestResponse {
        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json");

        if let Some((name, value)) = header {
            req = req.header(name, value);
        }

        let req = req
            .body(Body::from(body_str))
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse { status, body }
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub body: Value,
}
