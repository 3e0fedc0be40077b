//! Read-only catalog merge plus simulation orchestration.
//!
//! [`ImpactCatalog`] owns the fixed historical list and an [`ImpactStore`]
//! of user simulations. Reads merge the two lists without filtering;
//! writes (simulate, delete) touch only the store side. Historical ids
//! are never present in the store, so deleting one yields `NotFound`.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use impactor_hazard::{DEFAULT_DENSITY_KG_M3, HazardAssessment, HazardError, assess, round2};
use impactor_types::{ImpactEvent, ImpactId};
use rand::Rng;
use tokio::sync::Mutex;
use tracing::info;

use crate::error::StoreError;
use crate::store::ImpactStore;

/// Default asteroid diameter in meters when a simulation omits it.
pub const DEFAULT_DIAMETER_M: f64 = 50.0;

/// Default impact velocity in km/s when a simulation omits it.
pub const DEFAULT_VELOCITY_KM_S: f64 = 20.0;

/// Default local population density per km^2 when a simulation omits it.
pub const DEFAULT_POP_DENSITY_PER_KM2: f64 = 1000.0;

/// Random draws attempted before falling back to a sequential scan of the
/// simulated-id space.
const ID_RANDOM_ATTEMPTS: u32 = 64;

/// Upper bound (inclusive) of the simulated-id numeric range.
const ID_MAX: u32 = 99_999;

/// Inputs for one impact simulation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationInput {
    /// Asteroid diameter in meters.
    pub diameter_m: f64,
    /// Impact speed in km/s.
    pub velocity_km_s: f64,
    /// Impact site latitude in degrees.
    pub latitude: f64,
    /// Impact site longitude in degrees.
    pub longitude: f64,
    /// Local population density per km^2.
    pub pop_density_per_km2: f64,
}

impl Default for SimulationInput {
    fn default() -> Self {
        Self {
            diameter_m: DEFAULT_DIAMETER_M,
            velocity_km_s: DEFAULT_VELOCITY_KM_S,
            latitude: 0.0,
            longitude: 0.0,
            pop_density_per_km2: DEFAULT_POP_DENSITY_PER_KM2,
        }
    }
}

/// Errors that can occur in catalog operations.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The hazard model rejected the simulation inputs.
    #[error(transparent)]
    Hazard(#[from] HazardError),

    /// The underlying store failed.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Every identifier in the `sim_#####` range is taken.
    #[error("simulated-id space exhausted")]
    IdSpaceExhausted,
}

/// The merged view over historical and simulated impact events.
pub struct ImpactCatalog {
    historical: Vec<ImpactEvent>,
    store: ImpactStore,
    /// Serializes the read-mint-append cycle in [`Self::simulate`], so two
    /// concurrent callers can never mint the same id from one snapshot.
    mint_lock: Mutex<()>,
}

impl ImpactCatalog {
    /// Create a catalog over a historical list and a store.
    pub fn new(historical: Vec<ImpactEvent>, store: ImpactStore) -> Self {
        Self {
            historical,
            store,
            mint_lock: Mutex::new(()),
        }
    }

    /// The fixed historical entries, in presentation order.
    pub fn historical(&self) -> &[ImpactEvent] {
        &self.historical
    }

    /// The backing store.
    pub const fn store(&self) -> &ImpactStore {
        &self.store
    }

    /// Every event: historical entries (fixed order) followed by stored
    /// simulations (store order). Pure merge, no filtering.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the store read fails.
    pub async fn get_all(&self) -> Result<Vec<ImpactEvent>, StoreError> {
        let stored = self.store.load_all().await?;
        Ok(self.historical.iter().cloned().chain(stored).collect())
    }

    /// Simulate one impact: run the hazard model, mint a unique id, build
    /// the event record, and append it to the store.
    ///
    /// The generated identifier is checked for uniqueness against the
    /// union of historical and currently stored ids, so a `sim_#####`
    /// collision cannot occur within one store. The id-mint lock is held
    /// from the existing-id snapshot through the append, which closes the
    /// window where two concurrent callers could mint from the same
    /// snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Hazard`] for invalid inputs,
    /// [`CatalogError::Store`] if persisting fails, and
    /// [`CatalogError::IdSpaceExhausted`] if all 100 000 simulated ids
    /// are in use.
    pub async fn simulate(&self, input: &SimulationInput) -> Result<ImpactEvent, CatalogError> {
        let assessment = assess(
            input.diameter_m,
            input.velocity_km_s,
            DEFAULT_DENSITY_KG_M3,
            input.pop_density_per_km2,
        )?;

        let _guard = self.mint_lock.lock().await;
        let stored = self.store.load_all().await?;
        let id = {
            let existing: HashSet<&str> = self
                .historical
                .iter()
                .chain(stored.iter())
                .map(|e| e.id.as_str())
                .collect();
            let mut rng = rand::rng();
            unique_sim_id(&existing, &mut rng)
        }
        .ok_or(CatalogError::IdSpaceExhausted)?;

        let name = format!(
            "Simulated Impact ({:.2}, {:.2})",
            input.latitude, input.longitude
        );
        let event = event_from_assessment(
            id,
            name,
            Some(input.latitude),
            Some(input.longitude),
            input.diameter_m,
            input.velocity_km_s,
            &assessment,
            Some(Utc::now()),
        );

        self.store.append(event.clone()).await?;
        info!(
            id = %event.id,
            energy_megatons = event.energy_megatons,
            impact_radius_km = event.impact_radius_km,
            population_affected = event.population_affected,
            "impact simulated"
        );

        Ok(event)
    }

    /// Delete a stored simulation by id.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Store`] wrapping [`StoreError::NotFound`]
    /// when no stored event matches (historical ids always miss).
    pub async fn delete(&self, id: &ImpactId) -> Result<(), CatalogError> {
        self.store.delete_by_id(id).await?;
        info!(%id, "impact deleted");
        Ok(())
    }
}

/// Build an [`ImpactEvent`] from a hazard assessment, applying the output
/// rounding policy (2 decimal places for the float metrics, floor for
/// population).
#[allow(clippy::too_many_arguments)]
pub(crate) fn event_from_assessment(
    id: ImpactId,
    name: String,
    latitude: Option<f64>,
    longitude: Option<f64>,
    diameter_m: f64,
    velocity_km_s: f64,
    assessment: &HazardAssessment,
    created_at: Option<DateTime<Utc>>,
) -> ImpactEvent {
    ImpactEvent {
        id,
        name,
        latitude,
        longitude,
        diameter_m,
        velocity_km_s,
        energy_megatons: round2(assessment.energy_megatons),
        impact_radius_km: round2(assessment.impact_radius_km),
        population_affected: assessment.population_affected,
        earthquake_magnitude: round2(assessment.earthquake_magnitude),
        created_at,
    }
}

/// Mint a `sim_#####` identifier absent from `existing`.
///
/// Tries a bounded number of random draws first, then scans the numeric
/// range sequentially so exhaustion is detected deterministically.
/// Returns `None` only when every id in the range is taken.
fn unique_sim_id(existing: &HashSet<&str>, rng: &mut impl Rng) -> Option<ImpactId> {
    for _ in 0..ID_RANDOM_ATTEMPTS {
        let candidate = ImpactId::simulated(rng.random_range(0..=ID_MAX));
        if !existing.contains(candidate.as_str()) {
            return Some(candidate);
        }
    }

    (0..=ID_MAX)
        .map(ImpactId::simulated)
        .find(|candidate| !existing.contains(candidate.as_str()))
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    use super::*;

    #[test]
    fn unique_id_avoids_existing() {
        let taken = ImpactId::simulated(7);
        let mut existing = HashSet::new();
        existing.insert(taken.as_str());

        let mut rng = SmallRng::seed_from_u64(42);
        let minted = unique_sim_id(&existing, &mut rng);
        assert!(minted.is_some());
        assert_ne!(minted, Some(taken.clone()));
    }

    #[test]
    fn unique_id_falls_back_to_sequential_scan() {
        // Everything taken except one slot; random draws will almost
        // certainly miss it, the sequential scan must find it.
        let all: Vec<ImpactId> = (0..=ID_MAX)
            .filter(|&n| n != 31_337)
            .map(ImpactId::simulated)
            .collect();
        let existing: HashSet<&str> = all.iter().map(ImpactId::as_str).collect();

        let mut rng = SmallRng::seed_from_u64(1);
        let minted = unique_sim_id(&existing, &mut rng);
        assert_eq!(minted, Some(ImpactId::simulated(31_337)));
    }

    #[test]
    fn unique_id_exhaustion_returns_none() {
        let all: Vec<ImpactId> = (0..=ID_MAX).map(ImpactId::simulated).collect();
        let existing: HashSet<&str> = all.iter().map(ImpactId::as_str).collect();

        let mut rng = SmallRng::seed_from_u64(1);
        assert_eq!(unique_sim_id(&existing, &mut rng), None);
    }

    #[test]
    fn simulation_input_defaults_match_the_api_contract() {
        let input = SimulationInput::default();
        assert!((input.diameter_m - 50.0).abs() < f64::EPSILON);
        assert!((input.velocity_km_s - 20.0).abs() < f64::EPSILON);
        assert!((input.pop_density_per_km2 - 1000.0).abs() < f64::EPSILON);
    }
}
