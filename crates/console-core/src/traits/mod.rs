//! Core traits defined in `console-core` and implemented by other crates.

pub mod admin;

pub use admin::{AdminClient, AdminClientFactory};
