//! HTTP API server for the Impactor service.
//!
//! This crate provides an Axum HTTP server that exposes:
//!
//! - **Catalog endpoints** for listing historical + simulated impacts,
//!   running new simulations, and deleting saved ones
//! - **Live NEO endpoint** proxying NASA's asteroid browse feed
//! - **Static file fallback** for the bundled frontend
//!
//! # Architecture
//!
//! Handlers are thin: validation happens in the typed request payloads
//! and the hazard model, persistence in the impact store, and upstream
//! access in the NEO client. The [`ApiError`] boundary enum maps every
//! failure to its status code in one place.
//!
//! [`ApiError`]: error::ApiError

pub mod config;
pub mod error;
pub mod handlers;
pub mod router;
pub mod server;
pub mod state;

// Re-export primary types for convenience.
pub use config::{AppConfig, ConfigError};
pub use error::ApiError;
pub use router::build_router;
pub use server::{ServerConfig, ServerError, start_server};
pub use state::AppState;
