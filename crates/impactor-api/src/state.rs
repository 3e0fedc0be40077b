//! Shared application state for the impact API server.
//!
//! [`AppState`] bundles the impact catalog (historical list + store) and
//! the NEO client. It is wrapped in [`Arc`](std::sync::Arc) and injected
//! into handlers via Axum's `State` extractor.

use impactor_neo::NeoClient;
use impactor_store::ImpactCatalog;

/// Shared state for the Axum application.
pub struct AppState {
    /// The merged historical + simulated impact catalog.
    pub catalog: ImpactCatalog,
    /// Client for the NASA NEO browse endpoint.
    pub neo: NeoClient,
}

impl AppState {
    /// Create the application state.
    pub const fn new(catalog: ImpactCatalog, neo: NeoClient) -> Self {
        Self { catalog, neo }
    }
}
