//! Axum router construction for the impact API.
//!
//! Assembles all routes into a single [`Router`] with CORS middleware
//! enabled for cross-origin dashboard access, request tracing, and a
//! static-file fallback for the bundled frontend.

use std::path::PathBuf;
use std::sync::Arc;

use axum::Router;
use axum::routing::{delete, get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Build the complete Axum router for the impact API server.
///
/// The router includes:
/// - `GET /` -- JSON API index
/// - `GET /get_impacts` -- historical + simulated impacts
/// - `POST /simulate_impact` -- simulate and persist an impact
/// - `DELETE /delete_impact/{id}` -- remove a saved simulation
/// - `GET /nasa_asteroids` -- live NEO data
/// - any other path -- static files from `static_dir`
///
/// CORS is configured to allow any origin for development. In
/// production this should be restricted.
pub fn build_router(state: Arc<AppState>, static_dir: PathBuf) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(handlers::index))
        .route("/get_impacts", get(handlers::get_impacts))
        .route("/simulate_impact", post(handlers::simulate_impact))
        .route("/delete_impact/{id}", delete(handlers::delete_impact))
        .route("/nasa_asteroids", get(handlers::nasa_asteroids))
        .fallback_service(ServeDir::new(static_dir))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
