//! # console-service
//!
//! Business logic for the SUBNET console endpoints. Each operation is a
//! short sequence over two collaborators: the cluster admin client and
//! the SUBNET client.

pub mod subnet;

pub use subnet::SubnetService;
