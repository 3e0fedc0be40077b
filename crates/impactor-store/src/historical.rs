//! The fixed historical impact list.
//!
//! Three reference impacts defined at process start. They are immutable,
//! never persisted, and never deletable. Their derived hazard fields are
//! computed through the hazard model at construction so the same
//! creation-time invariant holds for historical and simulated events.

use impactor_hazard::{DEFAULT_DENSITY_KG_M3, HazardError, assess};
use impactor_types::ImpactEvent;

use crate::catalog::{DEFAULT_POP_DENSITY_PER_KM2, event_from_assessment};

/// Identifier, name, diameter (m), velocity (km/s), latitude, longitude.
const HISTORICAL: [(&str, &str, f64, f64, f64, f64); 3] = [
    ("chicxulub", "Chicxulub (66Mya)", 10_000.0, 20.0, 21.4, -89.0),
    ("tunguska", "Tunguska (1908)", 50.0, 16.0, 60.9, 101.9),
    ("chelyabinsk", "Chelyabinsk (2013)", 20.0, 19.0, 54.9, 61.1),
];

/// Build the historical impact list, in fixed presentation order.
///
/// # Errors
///
/// Returns a [`HazardError`] if the hazard model rejects an entry; the
/// curated constants above always pass, so a failure here indicates the
/// table was edited with invalid values.
pub fn historical_impacts() -> Result<Vec<ImpactEvent>, HazardError> {
    HISTORICAL
        .iter()
        .map(|&(id, name, diameter_m, velocity_km_s, latitude, longitude)| {
            let assessment = assess(
                diameter_m,
                velocity_km_s,
                DEFAULT_DENSITY_KG_M3,
                DEFAULT_POP_DENSITY_PER_KM2,
            )?;
            Ok(event_from_assessment(
                id.into(),
                name.to_owned(),
                Some(latitude),
                Some(longitude),
                diameter_m,
                velocity_km_s,
                &assessment,
                None,
            ))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_entries_in_fixed_order() {
        let events = historical_impacts().unwrap_or_default();
        let ids: Vec<&str> = events.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, ["chicxulub", "tunguska", "chelyabinsk"]);
    }

    #[test]
    fn derived_fields_match_the_hazard_model() {
        let events = historical_impacts().unwrap_or_default();
        let chicxulub = events.iter().find(|e| e.id.as_str() == "chicxulub");
        assert!(chicxulub.is_some());
        if let Some(event) = chicxulub {
            // ~7.5e7 MT; the 1e8 order-of-magnitude reference. The
            // magnitude formula gives ~5.1 at this energy.
            assert!(event.energy_megatons > 5.0e7);
            assert!(event.energy_megatons < 1.5e8);
            assert!(event.impact_radius_km > 500.0);
            assert!(event.earthquake_magnitude > 4.5);
            assert!(event.earthquake_magnitude < 6.0);
            assert!(event.population_affected > 0);
            assert!(event.created_at.is_none());
        }
    }

    #[test]
    fn historical_entries_carry_coordinates() {
        let events = historical_impacts().unwrap_or_default();
        assert!(events.iter().all(|e| e.latitude.is_some() && e.longitude.is_some()));
    }
}
