//! NASA NEO data adapter for the Impactor service.
//!
//! Maps the external asteroid-catalog response into the system's
//! [`AsteroidSummary`](impactor_types::AsteroidSummary) shape. The
//! adapter is read-only and stateless: nothing it fetches is persisted,
//! and failures are surfaced as upstream errors without retrying.
//!
//! # Modules
//!
//! - [`config`] -- env-based configuration with a fail-fast API key check
//! - [`client`] -- the `reqwest` client and pure summarization functions
//! - [`error`] -- [`NeoError`]

pub mod client;
pub mod config;
pub mod error;

pub use client::{DEFAULT_VELOCITY_KM_S, NeoClient, summarize_browse};
pub use config::NeoConfig;
pub use error::NeoError;
