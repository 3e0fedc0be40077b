//! Error types for the impact API server.
//!
//! [`ApiError`] unifies all failure modes into a single enum that can be
//! converted into an Axum HTTP response via its
//! [`IntoResponse`](axum::response::IntoResponse) implementation.
//!
//! Status mapping: invalid hazard inputs are 400, a missing delete target
//! is 404, upstream NEO failures are 502 with a generic message (the raw
//! error is logged, never sent), everything else is 500.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use impactor_neo::NeoError;
use impactor_store::{CatalogError, StoreError};
use tracing::error;

/// Errors that can occur in the API layer.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// A catalog operation failed (hazard validation, store, id space).
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// A direct store read failed.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// The NEO data adapter failed.
    #[error(transparent)]
    Neo(#[from] NeoError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::Catalog(CatalogError::Hazard(e)) => (StatusCode::BAD_REQUEST, e.to_string()),
            Self::Catalog(CatalogError::Store(StoreError::NotFound(id)))
            | Self::Store(StoreError::NotFound(id)) => {
                (StatusCode::NOT_FOUND, format!("impact not found: {id}"))
            }
            Self::Catalog(e) => {
                error!(error = %e, "catalog operation failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    String::from("internal error"),
                )
            }
            Self::Store(e) => {
                error!(error = %e, "store operation failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    String::from("internal error"),
                )
            }
            Self::Neo(NeoError::Upstream(e) | NeoError::Parse(e)) => {
                error!(error = %e, "NEO fetch failed");
                (
                    StatusCode::BAD_GATEWAY,
                    String::from("failed to fetch from NASA API"),
                )
            }
            Self::Neo(e) => {
                error!(error = %e, "NEO adapter misconfigured");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    String::from("NEO adapter unavailable"),
                )
            }
        };

        let body = serde_json::json!({
            "error": message,
            "status": status.as_u16(),
        });

        (status, axum::Json(body)).into_response()
    }
}
