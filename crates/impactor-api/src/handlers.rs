//! REST endpoint handlers for the impact API server.
//!
//! # Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `GET` | `/` | JSON API index |
//! | `GET` | `/get_impacts` | Historical + simulated impacts |
//! | `POST` | `/simulate_impact` | Simulate an impact and save it |
//! | `DELETE` | `/delete_impact/{id}` | Remove a saved simulation |
//! | `GET` | `/nasa_asteroids` | Live asteroid data from NASA's NEO API |

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use impactor_store::{
    DEFAULT_DIAMETER_M, DEFAULT_POP_DENSITY_PER_KM2, DEFAULT_VELOCITY_KM_S, SimulationInput,
};
use impactor_types::ImpactId;

use crate::error::ApiError;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request payloads
// ---------------------------------------------------------------------------

/// Request body for `POST /simulate_impact`.
///
/// Diameter, velocity, and population density are optional with the
/// documented defaults; the impact site coordinates are required, so a
/// payload without them is rejected before reaching the hazard model.
#[derive(Debug, serde::Deserialize)]
pub struct SimulateRequest {
    /// Asteroid diameter in meters (default 50).
    #[serde(default = "default_diameter")]
    pub diameter_m: f64,
    /// Impact speed in km/s (default 20).
    #[serde(default = "default_velocity")]
    pub velocity_km_s: f64,
    /// Impact site latitude in degrees.
    pub latitude: f64,
    /// Impact site longitude in degrees.
    pub longitude: f64,
    /// Local population density per km^2 (default 1000).
    #[serde(default = "default_pop_density")]
    pub pop_density_per_km2: f64,
}

const fn default_diameter() -> f64 {
    DEFAULT_DIAMETER_M
}

const fn default_velocity() -> f64 {
    DEFAULT_VELOCITY_KM_S
}

const fn default_pop_density() -> f64 {
    DEFAULT_POP_DENSITY_PER_KM2
}

impl From<&SimulateRequest> for SimulationInput {
    fn from(request: &SimulateRequest) -> Self {
        Self {
            diameter_m: request.diameter_m,
            velocity_km_s: request.velocity_km_s,
            latitude: request.latitude,
            longitude: request.longitude,
            pop_density_per_km2: request.pop_density_per_km2,
        }
    }
}

// ---------------------------------------------------------------------------
// GET / -- API index
// ---------------------------------------------------------------------------

/// List all available API routes and their purpose.
pub async fn index() -> impl IntoResponse {
    Json(serde_json::json!({
        "api_name": "Asteroid Impact Simulation API",
        "description": "Simulate asteroid impacts, view NASA asteroid data, and manage saved simulations.",
        "routes": {
            "/": "API index - lists all routes and their purpose.",
            "/get_impacts": "GET historical + user-simulated impacts.",
            "/simulate_impact": "POST: Simulate an asteroid impact and save it.",
            "/nasa_asteroids": "GET: Fetch live asteroid data from NASA's NEO API.",
            "/delete_impact/{id}": "DELETE: Remove a saved simulation by ID.",
        },
    }))
}

// ---------------------------------------------------------------------------
// GET /get_impacts -- merged catalog
// ---------------------------------------------------------------------------

/// Return both historical and user-simulated impacts, historical first.
pub async fn get_impacts(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, ApiError> {
    let events = state.catalog.get_all().await?;
    Ok(Json(events))
}

// ---------------------------------------------------------------------------
// POST /simulate_impact -- run the hazard model and save the result
// ---------------------------------------------------------------------------

/// Simulate an asteroid impact, persist it, and return the created event.
pub async fn simulate_impact(
    State(state): State<Arc<AppState>>,
    Json(request): Json<SimulateRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let event = state.catalog.simulate(&SimulationInput::from(&request)).await?;
    Ok(Json(event))
}

// ---------------------------------------------------------------------------
// DELETE /delete_impact/{id} -- remove a saved simulation
// ---------------------------------------------------------------------------

/// Delete a saved simulation by id.
///
/// Historical entries are not stored, so their ids yield a 404.
pub async fn delete_impact(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let id = ImpactId::from(id);
    state.catalog.delete(&id).await?;
    Ok(Json(serde_json::json!({
        "message": format!("Impact {id} deleted"),
    })))
}

// ---------------------------------------------------------------------------
// GET /nasa_asteroids -- live NEO data, never persisted
// ---------------------------------------------------------------------------

/// Fetch the asteroid dataset from NASA's NEO API and summarize it.
pub async fn nasa_asteroids(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, ApiError> {
    let asteroids = state.neo.fetch_asteroids().await?;
    Ok(Json(serde_json::json!({
        "count": asteroids.len(),
        "asteroids": asteroids,
    })))
}
