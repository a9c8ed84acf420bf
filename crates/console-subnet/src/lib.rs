//! # console-subnet
//!
//! Client for SUBNET, the external licensing and registration service.
//!
//! - [`client`]: proxy-aware HTTP client and request plumbing
//! - [`auth`]: login, MFA login, organizations, API keys
//! - [`register`]: cluster registration info, registration tokens, registration
//! - [`license`]: license JWT verification

pub mod auth;
pub mod client;
pub mod endpoints;
pub mod license;
pub mod register;

pub use auth::{LoginTokens, Organization};
pub use client::{SubnetClient, resolve_proxy};
pub use license::LicenseInfo;
pub use register::{ClusterRegistrationInfo, RegisterCredentials};
