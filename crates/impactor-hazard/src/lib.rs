//! Impact hazard model for the Impactor service.
//!
//! This crate is the numerical core of the system: a deterministic chain
//! of physical formulas that converts asteroid size and speed into
//! released energy, ground-damage radius, affected population, and
//! induced seismic magnitude. No I/O, no shared state, no async.
//!
//! # Modules
//!
//! - [`error`] -- Invalid-input precondition violations
//! - [`model`] -- The formula chain and the [`HazardAssessment`] result

pub mod error;
pub mod model;

pub use error::HazardError;
pub use model::{
    DEFAULT_DENSITY_KG_M3, HazardAssessment, JOULES_PER_MEGATON, assess, earthquake_magnitude,
    impact_radius_km, kinetic_energy_megatons, population_affected, round2,
};
