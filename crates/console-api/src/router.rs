//! Route definitions for the console HTTP API.
//!
//! All routes are mounted under `/api/v1`. The router receives
//! `AppState` and passes it to handlers via Axum's `State` extractor.

use axum::{
    Router, middleware as axum_middleware,
    routing::{get, post},
};

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the API router with request logging.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(subnet_routes())
        .merge(health_routes());

    Router::new()
        .nest("/api/v1", api_routes)
        .layer(axum_middleware::from_fn(middleware::logging::request_logging))
        .with_state(state)
}

/// SUBNET endpoints
fn subnet_routes() -> Router<AppState> {
    Router::new()
        .route("/subnet/login", post(handlers::subnet::login))
        .route("/subnet/login/mfa", post(handlers::subnet::login_mfa))
        .route("/subnet/register", post(handlers::subnet::register))
        .route("/subnet/info", get(handlers::subnet::info))
        .route(
            "/subnet/registration-token",
            get(handlers::subnet::registration_token),
        )
        .route("/subnet/apikey", get(handlers::subnet::api_key))
}

fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}
