//! Application configuration schemas.
//!
//! All configuration structs are deserialized from TOML files via the
//! `config` crate. Each sub-module represents a logical configuration
//! section.

pub mod admin;
pub mod app;
pub mod logging;
pub mod subnet;

use serde::{Deserialize, Serialize};

pub use self::admin::AdminConfig;
pub use self::app::{CorsConfig, ServerConfig};
pub use self::logging::LoggingConfig;
pub use self::subnet::SubnetConfig;

use crate::error::AppError;

/// Root application configuration.
///
/// This struct is the top-level deserialization target for the merged
/// TOML configuration files (default.toml + environment overlay).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// Storage cluster admin API settings.
    #[serde(default)]
    pub admin: AdminConfig,
    /// SUBNET licensing service settings.
    #[serde(default)]
    pub subnet: SubnetConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from TOML files.
    ///
    /// Merges the default configuration with an environment-specific overlay
    /// and environment variables prefixed with `CONSOLE__`. The
    /// `CONSOLE_SUBNET_*` variables are applied last.
    pub fn load(env: &str) -> Result<Self, AppError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{env}")).required(false))
            .add_source(
                config::Environment::with_prefix("CONSOLE")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        let mut app: AppConfig = config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))?;

        app.subnet.apply_env_overrides();
        Ok(app)
    }
}
