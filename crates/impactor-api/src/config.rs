//! Application configuration for the API binary.
//!
//! All settings come from environment variables (with `.env` support via
//! `dotenvy` in `main`). A missing NASA API key fails startup with a
//! descriptive error instead of prompting interactively.

use std::path::PathBuf;

use impactor_neo::NeoConfig;

use crate::server::ServerConfig;

/// A configuration value is missing or invalid.
#[derive(Debug, thiserror::Error)]
#[error("config error: {0}")]
pub struct ConfigError(pub String);

/// Complete application configuration loaded from the environment.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// HTTP server settings.
    pub server: ServerConfig,
    /// Path of the JSON file holding user simulations.
    pub impact_file: PathBuf,
    /// NEO adapter settings (API key, base URL, timeout).
    pub neo: NeoConfig,
}

impl AppConfig {
    /// Load configuration from environment variables.
    ///
    /// Required variables:
    /// - `NASA_API_KEY` -- NASA API key for the NEO adapter
    ///
    /// Optional variables:
    /// - `BIND_HOST` -- listen address (default `0.0.0.0`)
    /// - `BIND_PORT` -- listen port (default 8080)
    /// - `IMPACT_FILE` -- simulation store path (default `impacts.json`)
    /// - `STATIC_DIR` -- static file directory (default `static`)
    /// - `NEO_API_URL`, `NEO_TIMEOUT_MS` -- see [`NeoConfig::from_env`]
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a required variable is absent or a
    /// value does not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        let host = std::env::var("BIND_HOST").unwrap_or_else(|_| String::from("0.0.0.0"));

        let port: u16 = std::env::var("BIND_PORT")
            .unwrap_or_else(|_| String::from("8080"))
            .parse()
            .map_err(|e| ConfigError(format!("invalid BIND_PORT: {e}")))?;

        let impact_file = PathBuf::from(
            std::env::var("IMPACT_FILE").unwrap_or_else(|_| String::from("impacts.json")),
        );

        let static_dir =
            PathBuf::from(std::env::var("STATIC_DIR").unwrap_or_else(|_| String::from("static")));

        let neo = NeoConfig::from_env().map_err(|e| ConfigError(e.to_string()))?;

        Ok(Self {
            server: ServerConfig {
                host,
                port,
                static_dir,
            },
            impact_file,
            neo,
        })
    }
}
