//! # console-core
//!
//! Core crate for the SUBNET console bridge. Contains configuration
//! schemas, the admin-client traits, cluster and principal value types,
//! and the unified error system.
//!
//! This crate has **no** internal dependencies on other console crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
