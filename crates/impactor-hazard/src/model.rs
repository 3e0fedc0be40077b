//! The deterministic hazard formula chain.
//!
//! Converts asteroid size and speed into released energy, ground-damage
//! radius, affected population, and induced seismic magnitude. Every
//! function here is pure and side-effect-free; the only failure mode is
//! an invalid-input precondition violation.
//!
//! The formulas are empirical estimates, not validated science:
//!
//! - energy: kinetic energy of a spherical rock, converted to megatons TNT
//! - radius: `1.5 * megatons^(1/3)` km of severe ground damage
//! - population: uniform density over the damage disk, floored
//! - magnitude: `0.67 * log10(joules) - 10.7`, clamped to 0

use std::f64::consts::PI;

use crate::error::HazardError;

/// Joules per megaton of TNT.
pub const JOULES_PER_MEGATON: f64 = 4.184e15;

/// Default asteroid bulk density in kg/m^3 (stony composition).
pub const DEFAULT_DENSITY_KG_M3: f64 = 3000.0;

/// All four hazard metrics for one asteroid, computed in a single pass.
///
/// Values are unrounded except `population_affected`, which is the floor
/// of the area computation. Callers building output payloads apply
/// [`round2`] to the float fields.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HazardAssessment {
    /// Released energy in megatons TNT.
    pub energy_megatons: f64,
    /// Severe ground-damage radius in kilometers.
    pub impact_radius_km: f64,
    /// People inside the damage radius.
    pub population_affected: u64,
    /// Induced seismic magnitude, never negative.
    pub earthquake_magnitude: f64,
}

/// Kinetic energy of an asteroid impact in megatons TNT.
///
/// Computes the sphere volume from the diameter, the mass from the given
/// bulk density, and `0.5 * m * v^2` with the velocity converted to m/s.
///
/// # Errors
///
/// Returns a [`HazardError`] if the diameter, velocity, or density is not
/// strictly positive.
pub fn kinetic_energy_megatons(
    diameter_m: f64,
    velocity_km_s: f64,
    density_kg_m3: f64,
) -> Result<f64, HazardError> {
    if !(diameter_m > 0.0) {
        return Err(HazardError::NonPositiveDiameter { value: diameter_m });
    }
    if !(velocity_km_s > 0.0) {
        return Err(HazardError::NonPositiveVelocity {
            value: velocity_km_s,
        });
    }
    if !(density_kg_m3 > 0.0) {
        return Err(HazardError::NonPositiveDensity {
            value: density_kg_m3,
        });
    }

    let radius_m = diameter_m / 2.0;
    let volume_m3 = 4.0 / 3.0 * PI * radius_m.powi(3);
    let mass_kg = density_kg_m3 * volume_m3;
    let velocity_m_s = velocity_km_s * 1000.0;
    let energy_joules = 0.5 * mass_kg * velocity_m_s.powi(2);

    Ok(energy_joules / JOULES_PER_MEGATON)
}

/// Severe ground-damage radius in kilometers for a given energy release.
///
/// Defined as `1.5 * megatons^(1/3)`. For `megatons <= 0` (or NaN) the
/// radius is explicitly 0 rather than a NaN or a negative cube root.
pub fn impact_radius_km(megatons: f64) -> f64 {
    if megatons > 0.0 {
        1.5 * megatons.cbrt()
    } else {
        0.0
    }
}

/// Number of people inside the damage radius at a uniform density.
///
/// Floor of `pi * radius_km^2 * pop_density_per_km2`; never rounds up.
///
/// # Errors
///
/// Returns [`HazardError::NegativePopulationDensity`] for a negative
/// density. A zero density is valid and yields zero.
pub fn population_affected(pop_density_per_km2: f64, radius_km: f64) -> Result<u64, HazardError> {
    if pop_density_per_km2 < 0.0 {
        return Err(HazardError::NegativePopulationDensity {
            value: pop_density_per_km2,
        });
    }

    let area_km2 = PI * radius_km.powi(2);
    let people = (area_km2 * pop_density_per_km2).floor();

    // Non-negative by construction: area >= 0 and density >= 0.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    Ok(people as u64)
}

/// Seismic magnitude induced by an energy release, clamped to 0.
///
/// Defined as `0.67 * log10(joules) - 10.7`. The logarithm is undefined
/// for non-positive energy, so `megatons <= 0` (or NaN) short-circuits to
/// magnitude 0 before the logarithm is taken; the final clamp alone would
/// not protect against the domain error.
pub fn earthquake_magnitude(megatons: f64) -> f64 {
    if !(megatons > 0.0) {
        return 0.0;
    }

    let joules = megatons * JOULES_PER_MEGATON;
    let magnitude = 0.67 * joules.log10() - 10.7;
    magnitude.max(0.0)
}

/// Run the full formula chain for one asteroid.
///
/// # Errors
///
/// Returns a [`HazardError`] if any of the inputs violates its
/// precondition (non-positive diameter/velocity/density, negative
/// population density).
pub fn assess(
    diameter_m: f64,
    velocity_km_s: f64,
    density_kg_m3: f64,
    pop_density_per_km2: f64,
) -> Result<HazardAssessment, HazardError> {
    let energy_megatons = kinetic_energy_megatons(diameter_m, velocity_km_s, density_kg_m3)?;
    let impact_radius = impact_radius_km(energy_megatons);
    let population = population_affected(pop_density_per_km2, impact_radius)?;
    let magnitude = earthquake_magnitude(energy_megatons);

    Ok(HazardAssessment {
        energy_megatons,
        impact_radius_km: impact_radius,
        population_affected: population,
        earthquake_magnitude: magnitude,
    })
}

/// Round a value to 2 decimal places for output payloads.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
