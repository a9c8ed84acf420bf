//! Application builder: wires router, middleware, and state into an Axum app.

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use axum::http::StatusCode;
use tower::ServiceBuilder;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use console_admin::HttpAdminClientFactory;
use console_core::config::{AppConfig, ServerConfig};
use console_core::error::AppError;
use console_core::result::AppResult;
use console_service::SubnetService;

use crate::middleware::compression::build_compression_layer;
use crate::middleware::cors::build_cors_layer;
use crate::router::build_router;
use crate::state::AppState;

/// Builds the complete Axum application with all routes and middleware.
pub fn build_app(state: AppState, server: &ServerConfig) -> Router {
    build_router(state).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(build_cors_layer(&server.cors))
            .layer(build_compression_layer())
            .layer(TimeoutLayer::with_status_code(
                StatusCode::REQUEST_TIMEOUT,
                Duration::from_secs(server.request_timeout_seconds.max(1)),
            )),
    )
}

/// Builds the application state from configuration.
pub fn build_state(config: AppConfig) -> AppResult<AppState> {
    let admin_factory = Arc::new(HttpAdminClientFactory::new(&config.admin)?);
    let subnet_service = Arc::new(SubnetService::new(config.subnet, admin_factory));

    Ok(AppState { subnet_service })
}

/// Runs the console server until Ctrl+C.
pub async fn run_server(config: AppConfig) -> AppResult<()> {
    tracing::info!(
        admin_endpoint = %config.admin.endpoint,
        subnet_url = %config.subnet.base_url,
        subnet_proxy = config.subnet.configured_proxy().is_some(),
        license_seeded = config.subnet.seeded_license().is_some(),
        "Starting console server..."
    );
    if !config.subnet.has_offline_keys() {
        tracing::warn!(
            "No offline SUBNET public keys configured; license info needs SUBNET to be reachable"
        );
    }

    let server = config.server.clone();
    let app = build_app(build_state(config)?, &server);

    let addr = format!("{}:{}", server.host, server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!("Console server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    tracing::info!("Console server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
    }
}
