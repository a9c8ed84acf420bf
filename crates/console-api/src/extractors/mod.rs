//! Custom Axum extractors.

pub mod json;
pub mod session;

pub use json::ApiJson;
pub use session::Session;
