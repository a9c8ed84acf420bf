//! # console-api
//!
//! HTTP API layer for the SUBNET console bridge built on Axum.
//!
//! Provides the SUBNET endpoints, session extraction, middleware (CORS,
//! logging, compression, timeouts), DTOs, and error mapping.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{build_app, run_server};
pub use error::ApiError;
pub use state::AppState;
