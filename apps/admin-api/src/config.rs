//! Admin API configuration module.
//!
//! Configuration is loaded from environment variables with fallback to
//! defaults, and validated once at startup.

use std::env;
use std::path::PathBuf;

use catalog_core::DEFAULT_PER_PAGE;

/// Admin API configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// HTTP listen port
    pub http_port: u16,

    /// Path to the SQLite database file
    pub database_path: PathBuf,

    /// Root directory of the public blob area (uploads land below it)
    pub media_root: PathBuf,

    /// Page size used when the client sends no perPage value
    pub default_per_page: u32,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        let config = AppConfig {
            http_port: env::var("HTTP_PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("HTTP_PORT".to_string()))?,

            database_path: env::var("DATABASE_PATH")
                .unwrap_or_else(|_| "./catalog.db".to_string())
                .into(),

            media_root: env::var("MEDIA_ROOT")
                .unwrap_or_else(|_| "./storage/public".to_string())
                .into(),

            default_per_page: env::var("DEFAULT_PER_PAGE")
                .unwrap_or_else(|_| DEFAULT_PER_PAGE.to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("DEFAULT_PER_PAGE".to_string()))?,
        };

        if config.default_per_page == 0 {
            return Err(ConfigError::InvalidValue("DEFAULT_PER_PAGE".to_string()));
        }

        Ok(config)
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}
