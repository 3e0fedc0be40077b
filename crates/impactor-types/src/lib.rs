//! Shared type definitions for the Impactor service.
//!
//! This crate is the single source of truth for the types that cross crate
//! boundaries in the Impactor workspace: impact event records, asteroid
//! summaries from the NASA NEO feed, and the impact identifier newtype.
//!
//! # Modules
//!
//! - [`ids`] -- The [`ImpactId`] newtype and the simulated-id format
//! - [`structs`] -- [`ImpactEvent`] and [`AsteroidSummary`] records

pub mod ids;
pub mod structs;

// Re-export the public types at crate root for convenience.
pub use ids::ImpactId;
pub use structs::{AsteroidSummary, ImpactEvent};
