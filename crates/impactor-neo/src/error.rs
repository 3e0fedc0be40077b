//! Error types for the NEO data adapter.
//!
//! Everything that goes wrong talking to or reading from the upstream
//! catalog is an upstream failure from the caller's perspective; the
//! HTTP layer surfaces these as a 500-class response with a generic
//! message, never a raw error chain.

/// Errors that can occur in the NEO data adapter.
#[derive(Debug, thiserror::Error)]
pub enum NeoError {
    /// Required configuration is missing or invalid.
    #[error("config error: {0}")]
    Config(String),

    /// The HTTP client could not be constructed.
    #[error("HTTP client error: {0}")]
    Client(String),

    /// The upstream request failed, timed out, or returned a non-success
    /// status.
    #[error("upstream error: {0}")]
    Upstream(String),

    /// The upstream payload did not have the expected shape.
    #[error("upstream parse error: {0}")]
    Parse(String),
}
