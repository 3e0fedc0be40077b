//! Core record types for the Impactor service.
//!
//! [`ImpactEvent`] is the persisted/presented impact record; its derived
//! hazard fields are computed once at creation time by the hazard model
//! and never recomputed afterwards. [`AsteroidSummary`] is the ephemeral
//! projection of a NASA NEO record, produced fresh per request and never
//! persisted.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::ImpactId;

/// A simulated or historical asteroid impact record.
///
/// Historical events are defined at process start and are immutable.
/// Simulated events are created by the simulate operation, appended to
/// the impact store, and may later be deleted by id; they are never
/// mutated after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImpactEvent {
    /// Unique identifier within the event's source list.
    pub id: ImpactId,
    /// Display label (e.g. `Chicxulub (66Mya)` or `Simulated Impact (0.00, 0.00)`).
    pub name: String,
    /// Impact site latitude in degrees, if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    /// Impact site longitude in degrees, if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
    /// Asteroid diameter in meters. Always positive.
    pub diameter_m: f64,
    /// Impact speed in kilometers per second. Always positive.
    pub velocity_km_s: f64,
    /// Released energy in megatons TNT, rounded to 2 decimal places.
    ///
    /// Derived at creation from `diameter_m` and `velocity_km_s`.
    pub energy_megatons: f64,
    /// Severe ground-damage radius in kilometers, rounded to 2 decimal places.
    pub impact_radius_km: f64,
    /// People inside the damage radius at the creation-time population
    /// density. Floor of the area computation, not rounded.
    pub population_affected: u64,
    /// Induced seismic magnitude, clamped to a minimum of 0 and rounded
    /// to 2 decimal places.
    pub earthquake_magnitude: f64,
    /// When the simulation was created. Absent for historical entries.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

/// Ephemeral summary of a near-Earth object from the NASA NEO feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AsteroidSummary {
    /// NASA NEO reference id.
    pub id: String,
    /// NASA designation (e.g. `433 Eros (A898 PA)`).
    pub name: String,
    /// Maximum estimated diameter in meters, rounded to 2 decimal places.
    pub diameter_m: f64,
    /// Relative velocity of the first close approach in km/s (default 20
    /// when no close-approach data exists), rounded to 2 decimal places.
    pub velocity_km_s: f64,
    /// NASA's potentially-hazardous classification, copied verbatim.
    pub hazardous: bool,
}
