//! Impact event persistence and catalog for the Impactor service.
//!
//! This crate owns everything between the pure hazard model and the HTTP
//! layer: the durable store of user simulations, the fixed historical
//! event list, and the catalog that merges the two and orchestrates
//! simulation creation.
//!
//! # Modules
//!
//! - [`error`] -- [`StoreError`]
//! - [`store`] -- [`ImpactStore`] enum dispatch over file and memory backends
//! - [`historical`] -- the three fixed reference impacts
//! - [`catalog`] -- [`ImpactCatalog`] merge + simulate + delete

pub mod catalog;
pub mod error;
pub mod historical;
pub mod store;

pub use catalog::{
    CatalogError, DEFAULT_DIAMETER_M, DEFAULT_POP_DENSITY_PER_KM2, DEFAULT_VELOCITY_KM_S,
    ImpactCatalog, SimulationInput,
};
pub use error::StoreError;
pub use historical::historical_impacts;
pub use store::{FileStore, ImpactStore, MemoryStore};
