//! SUBNET login, registration, and license operations.

pub mod models;
pub mod service;

pub use models::{LoginCredentials, MfaLoginCredentials, RegisterParams, SubnetLoginResult};
pub use service::SubnetService;
