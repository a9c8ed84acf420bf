//! Value types shared by the admin, SUBNET, and API crates.

pub mod principal;
pub mod server_info;
pub mod subnet;

pub use principal::Principal;
pub use server_info::ServerInfo;
pub use subnet::LicenseTokenConfig;
