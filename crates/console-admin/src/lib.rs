//! # console-admin
//!
//! Access to the storage cluster's administrative API: the HTTP
//! [`client::HttpAdminClient`], the parser for subsystem key-value
//! configuration output, and helpers for the `subnet` subsystem.

pub mod client;
pub mod config_kv;
pub mod subnet_config;

pub use client::{HttpAdminClient, HttpAdminClientFactory};
pub use config_kv::{ConfigKv, SubsysConfig, parse_server_config_output};
pub use subnet_config::{
    SUBNET_SUB_SYS, format_subnet_config, license_from_config, subnet_key_from_config,
};
