//! Integration tests for the impact API endpoints.
//!
//! Tests use Axum's `Router` directly via `tower::ServiceExt` without
//! starting a TCP server. The catalog runs on the in-memory store; the
//! NEO client points at an unreachable local address so upstream-failure
//! mapping can be exercised without a network.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::indexing_slicing)]

use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use impactor_api::state::AppState;
use impactor_api::{ApiError, build_router};
use impactor_neo::{NeoClient, NeoConfig, NeoError};
use impactor_store::{ImpactCatalog, ImpactStore, MemoryStore, historical_impacts};
use serde_json::Value;
use tower::ServiceExt;

fn make_test_state() -> Arc<AppState> {
    let historical = historical_impacts().expect("historical catalog");
    let catalog = ImpactCatalog::new(historical, ImpactStore::Memory(MemoryStore::new()));

    // Unreachable upstream: port 9 (discard) refuses connections, and the
    // short timeout keeps the failure path fast.
    let neo_config = NeoConfig {
        api_url: String::from("http://127.0.0.1:9"),
        api_key: String::from("TEST_KEY"),
        timeout: Duration::from_millis(500),
    };
    let neo = NeoClient::new(&neo_config).expect("neo client");

    Arc::new(AppState::new(catalog, neo))
}

fn test_router(state: Arc<AppState>, static_dir: &tempfile::TempDir) -> axum::Router {
    build_router(state, static_dir.path().to_path_buf())
}

async fn body_to_json(body: Body) -> Value {
    let bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn json_request(method: &str, path: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(path)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

// =========================================================================
// Index + catalog
// =========================================================================

#[tokio::test]
async fn test_index_lists_routes() {
    let dir = tempfile::tempdir().unwrap();
    let router = test_router(make_test_state(), &dir);

    let response = router
        .oneshot(Request::get("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_to_json(response.into_body()).await;
    assert!(json["routes"]["/simulate_impact"].is_string());
    assert!(json["routes"]["/get_impacts"].is_string());
}

#[tokio::test]
async fn test_get_impacts_returns_historical_entries() {
    let dir = tempfile::tempdir().unwrap();
    let router = test_router(make_test_state(), &dir);

    let response = router
        .oneshot(Request::get("/get_impacts").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_to_json(response.into_body()).await;
    let events = json.as_array().unwrap();
    assert_eq!(events.len(), 3);
    assert_eq!(events[0]["id"], "chicxulub");
    assert_eq!(events[1]["id"], "tunguska");
    assert_eq!(events[2]["id"], "chelyabinsk");
}

// =========================================================================
// Simulation
// =========================================================================

#[tokio::test]
async fn test_simulate_with_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let router = test_router(make_test_state(), &dir);

    let body = serde_json::json!({ "latitude": 0.0, "longitude": 0.0 });
    let response = router
        .oneshot(json_request("POST", "/simulate_impact", &body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_to_json(response.into_body()).await;

    // Defaults: 50 m at 20 km/s over 1000 people/km^2.
    assert_eq!(json["diameter_m"], 50.0);
    assert_eq!(json["velocity_km_s"], 20.0);
    assert!(json["id"].as_str().unwrap().starts_with("sim_"));
    assert_eq!(json["name"], "Simulated Impact (0.00, 0.00)");
    assert!(json["energy_megatons"].as_f64().unwrap() < 10.0);
    assert!(json["earthquake_magnitude"].as_f64().unwrap() < 6.0);
    assert!(json["population_affected"].as_u64().unwrap() > 0);
}

#[tokio::test]
async fn test_simulated_event_appears_after_historical() {
    let dir = tempfile::tempdir().unwrap();
    let state = make_test_state();

    let body = serde_json::json!({ "latitude": 48.85, "longitude": 2.35 });
    let created = test_router(Arc::clone(&state), &dir)
        .oneshot(json_request("POST", "/simulate_impact", &body))
        .await
        .unwrap();
    assert_eq!(created.status(), StatusCode::OK);
    let created_json = body_to_json(created.into_body()).await;

    let response = test_router(state, &dir)
        .oneshot(Request::get("/get_impacts").body(Body::empty()).unwrap())
        .await
        .unwrap();
    let json = body_to_json(response.into_body()).await;
    let events = json.as_array().unwrap();

    assert_eq!(events.len(), 4);
    assert_eq!(events[3]["id"], created_json["id"]);
}

#[tokio::test]
async fn test_simulate_rejects_non_positive_diameter() {
    let dir = tempfile::tempdir().unwrap();
    let router = test_router(make_test_state(), &dir);

    let body = serde_json::json!({
        "diameter_m": -5.0,
        "latitude": 0.0,
        "longitude": 0.0,
    });
    let response = router
        .oneshot(json_request("POST", "/simulate_impact", &body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_to_json(response.into_body()).await;
    assert!(json["error"].as_str().unwrap().contains("diameter"));
}

#[tokio::test]
async fn test_simulate_rejects_negative_population_density() {
    let dir = tempfile::tempdir().unwrap();
    let router = test_router(make_test_state(), &dir);

    let body = serde_json::json!({
        "latitude": 0.0,
        "longitude": 0.0,
        "pop_density_per_km2": -10.0,
    });
    let response = router
        .oneshot(json_request("POST", "/simulate_impact", &body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_simulate_requires_coordinates() {
    let dir = tempfile::tempdir().unwrap();
    let router = test_router(make_test_state(), &dir);

    let body = serde_json::json!({ "diameter_m": 100.0 });
    let response = router
        .oneshot(json_request("POST", "/simulate_impact", &body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

// =========================================================================
// Deletion
// =========================================================================

#[tokio::test]
async fn test_delete_existing_simulation() {
    let dir = tempfile::tempdir().unwrap();
    let state = make_test_state();

    let body = serde_json::json!({ "latitude": 0.0, "longitude": 0.0 });
    let created = test_router(Arc::clone(&state), &dir)
        .oneshot(json_request("POST", "/simulate_impact", &body))
        .await
        .unwrap();
    let created_json = body_to_json(created.into_body()).await;
    let id = created_json["id"].as_str().unwrap().to_owned();

    let response = test_router(Arc::clone(&state), &dir)
        .oneshot(
            Request::delete(format!("/delete_impact/{id}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["message"], format!("Impact {id} deleted"));

    // The catalog is back to the three historical entries.
    let listing = test_router(state, &dir)
        .oneshot(Request::get("/get_impacts").body(Body::empty()).unwrap())
        .await
        .unwrap();
    let listing_json = body_to_json(listing.into_body()).await;
    assert_eq!(listing_json.as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_delete_absent_id_is_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let router = test_router(make_test_state(), &dir);

    let response = router
        .oneshot(
            Request::delete("/delete_impact/sim_99999")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_to_json(response.into_body()).await;
    assert!(json["error"].as_str().unwrap().contains("sim_99999"));
    assert_eq!(json["status"], 404);
}

#[tokio::test]
async fn test_delete_historical_id_is_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let router = test_router(make_test_state(), &dir);

    let response = router
        .oneshot(
            Request::delete("/delete_impact/chicxulub")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// =========================================================================
// NEO proxy
// =========================================================================

#[tokio::test]
async fn test_nasa_asteroids_upstream_failure_maps_to_bad_gateway() {
    let dir = tempfile::tempdir().unwrap();
    let router = test_router(make_test_state(), &dir);

    let response = router
        .oneshot(Request::get("/nasa_asteroids").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let json = body_to_json(response.into_body()).await;
    // Generic message, never the raw transport error.
    assert_eq!(json["error"], "failed to fetch from NASA API");
}

#[tokio::test]
async fn test_upstream_error_variant_maps_to_bad_gateway() {
    let error = ApiError::Neo(NeoError::Upstream(String::from("boom")));
    let response = axum::response::IntoResponse::into_response(error);
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
}

// =========================================================================
// Static fallback
// =========================================================================

#[tokio::test]
async fn test_static_fallback_serves_files() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("index.html"), "<h1>Impactor</h1>").unwrap();
    let router = test_router(make_test_state(), &dir);

    let response = router
        .oneshot(Request::get("/index.html").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_unknown_path_is_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let router = test_router(make_test_state(), &dir);

    let response = router
        .oneshot(Request::get("/no_such_file").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
