//! Configuration for the NEO data adapter.
//!
//! All configuration is loaded from environment variables. The API key is
//! required and its absence fails fast with a descriptive error rather
//! than blocking on interactive input.

use std::time::Duration;

use crate::error::NeoError;

/// Default base URL of NASA's NEO REST API.
pub const DEFAULT_API_URL: &str = "https://api.nasa.gov/neo/rest/v1";

/// Default upstream request timeout in milliseconds.
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

/// NEO adapter configuration loaded from the environment.
#[derive(Debug, Clone)]
pub struct NeoConfig {
    /// Base API URL (e.g. `https://api.nasa.gov/neo/rest/v1`).
    pub api_url: String,
    /// NASA API key sent with every request.
    pub api_key: String,
    /// Hard deadline for one upstream request; exceeding it is an
    /// upstream failure.
    pub timeout: Duration,
}

impl NeoConfig {
    /// Load configuration from environment variables.
    ///
    /// Required variables:
    /// - `NASA_API_KEY` -- NASA API key
    ///
    /// Optional variables:
    /// - `NEO_API_URL` -- base API URL (default `https://api.nasa.gov/neo/rest/v1`)
    /// - `NEO_TIMEOUT_MS` -- request timeout in milliseconds (default 10000)
    ///
    /// # Errors
    ///
    /// Returns [`NeoError::Config`] if the API key is absent or a value
    /// does not parse.
    pub fn from_env() -> Result<Self, NeoError> {
        let api_key = std::env::var("NASA_API_KEY")
            .map_err(|_| NeoError::Config(String::from("missing required env var NASA_API_KEY")))?;
        if api_key.trim().is_empty() {
            return Err(NeoError::Config(String::from("NASA_API_KEY is empty")));
        }

        let api_url =
            std::env::var("NEO_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_owned());

        let timeout_ms: u64 = std::env::var("NEO_TIMEOUT_MS")
            .unwrap_or_else(|_| DEFAULT_TIMEOUT_MS.to_string())
            .parse()
            .map_err(|e| NeoError::Config(format!("invalid NEO_TIMEOUT_MS: {e}")))?;

        Ok(Self {
            api_url,
            api_key,
            timeout: Duration::from_millis(timeout_ms),
        })
    }
}
