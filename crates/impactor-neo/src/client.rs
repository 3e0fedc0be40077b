//! HTTP client for NASA's NEO browse endpoint.
//!
//! The client fetches the upstream asteroid catalog and maps each record
//! into the system's [`AsteroidSummary`] shape. Nothing it returns is
//! persisted. Summarization is done by pure functions over
//! [`serde_json::Value`] so the mapping unit-tests without a network.
//!
//! NASA's payload quirks worth knowing:
//! - `close_approach_data` may be empty; velocity falls back to 20 km/s
//! - `relative_velocity.kilometers_per_second` is a *string* of a float

use impactor_types::AsteroidSummary;
use tracing::error;

use crate::config::NeoConfig;
use crate::error::NeoError;

/// Relative velocity assumed when a record has no close-approach data.
pub const DEFAULT_VELOCITY_KM_S: f64 = 20.0;

/// Client for the NASA NEO REST API.
pub struct NeoClient {
    client: reqwest::Client,
    api_url: String,
    api_key: String,
}

impl NeoClient {
    /// Build a client with the configured request timeout.
    ///
    /// # Errors
    ///
    /// Returns [`NeoError::Client`] if the underlying HTTP client cannot
    /// be constructed.
    pub fn new(config: &NeoConfig) -> Result<Self, NeoError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| NeoError::Client(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            api_url: config.api_url.clone(),
            api_key: config.api_key.clone(),
        })
    }

    /// Fetch the current asteroid catalog page and summarize it.
    ///
    /// # Errors
    ///
    /// Returns [`NeoError::Upstream`] for transport failures, timeouts,
    /// and non-success statuses, and [`NeoError::Parse`] for a malformed
    /// payload. The adapter never retries.
    pub async fn fetch_asteroids(&self) -> Result<Vec<AsteroidSummary>, NeoError> {
        let url = format!("{}/neo/browse", self.api_url);

        let response = self
            .client
            .get(&url)
            .query(&[("api_key", self.api_key.as_str())])
            .send()
            .await
            .map_err(|e| {
                error!(error = %e, "NEO browse request failed");
                NeoError::Upstream(format!("NEO browse request failed: {e}"))
            })?;

        let status = response.status();
        if !status.is_success() {
            error!(%status, "NEO browse returned non-success status");
            return Err(NeoError::Upstream(format!("NEO browse returned {status}")));
        }

        let json: serde_json::Value = response
            .json()
            .await
            .map_err(|e| NeoError::Parse(format!("NEO browse response not JSON: {e}")))?;

        summarize_browse(&json)
    }
}

/// Map a full browse payload to asteroid summaries.
///
/// # Errors
///
/// Returns [`NeoError::Parse`] if `near_earth_objects` is missing or any
/// record lacks a required field.
pub fn summarize_browse(json: &serde_json::Value) -> Result<Vec<AsteroidSummary>, NeoError> {
    json.get("near_earth_objects")
        .and_then(serde_json::Value::as_array)
        .ok_or_else(|| {
            NeoError::Parse(String::from("response missing near_earth_objects array"))
        })?
        .iter()
        .map(summarize_neo)
        .collect()
}

/// Map one NEO record to an [`AsteroidSummary`].
///
/// Diameter is the maximum estimated diameter in meters; velocity is the
/// first close approach's relative velocity, defaulting to
/// [`DEFAULT_VELOCITY_KM_S`] when the close-approach list is empty;
/// the hazardous flag is copied verbatim.
fn summarize_neo(neo: &serde_json::Value) -> Result<AsteroidSummary, NeoError> {
    let id = neo
        .get("id")
        .and_then(serde_json::Value::as_str)
        .ok_or_else(|| NeoError::Parse(String::from("NEO record missing id")))?;

    let name = neo
        .get("name")
        .and_then(serde_json::Value::as_str)
        .ok_or_else(|| NeoError::Parse(String::from("NEO record missing name")))?;

    let diameter_m = neo
        .get("estimated_diameter")
        .and_then(|d| d.get("meters"))
        .and_then(|m| m.get("estimated_diameter_max"))
        .and_then(serde_json::Value::as_f64)
        .ok_or_else(|| {
            NeoError::Parse(format!("NEO {id} missing estimated_diameter.meters"))
        })?;

    let velocity_km_s = close_approach_velocity(neo, id)?;

    let hazardous = neo
        .get("is_potentially_hazardous_asteroid")
        .and_then(serde_json::Value::as_bool)
        .ok_or_else(|| NeoError::Parse(format!("NEO {id} missing hazardous flag")))?;

    Ok(AsteroidSummary {
        id: id.to_owned(),
        name: name.to_owned(),
        diameter_m: round2(diameter_m),
        velocity_km_s: round2(velocity_km_s),
        hazardous,
    })
}

/// Relative velocity (km/s) of the first close-approach record, or the
/// default when the list is empty.
fn close_approach_velocity(neo: &serde_json::Value, id: &str) -> Result<f64, NeoError> {
    let Some(approaches) = neo
        .get("close_approach_data")
        .and_then(serde_json::Value::as_array)
    else {
        return Err(NeoError::Parse(format!(
            "NEO {id} missing close_approach_data"
        )));
    };

    let Some(first) = approaches.first() else {
        return Ok(DEFAULT_VELOCITY_KM_S);
    };

    // The upstream encodes the velocity as a string of a decimal number.
    first
        .get("relative_velocity")
        .and_then(|v| v.get("kilometers_per_second"))
        .and_then(serde_json::Value::as_str)
        .and_then(|s| s.parse::<f64>().ok())
        .ok_or_else(|| NeoError::Parse(format!("NEO {id} has malformed relative_velocity")))
}

/// Round a value to 2 decimal places for output payloads.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
#[allow(clippy::indexing_slicing)]
mod tests {
    use super::*;

    fn eros() -> serde_json::Value {
        serde_json::json!({
            "id": "2000433",
            "name": "433 Eros (A898 PA)",
            "estimated_diameter": {
                "meters": {
                    "estimated_diameter_min": 22108.281,
                    "estimated_diameter_max": 49435.619
                }
            },
            "close_approach_data": [
                {
                    "relative_velocity": {
                        "kilometers_per_second": "5.5786191633"
                    }
                },
                {
                    "relative_velocity": {
                        "kilometers_per_second": "4.3944"
                    }
                }
            ],
            "is_potentially_hazardous_asteroid": false
        })
    }

    #[test]
    fn summarize_browse_maps_all_records() {
        let json = serde_json::json!({ "near_earth_objects": [eros()] });
        let summaries = summarize_browse(&json).unwrap_or_default();
        assert_eq!(summaries.len(), 1);

        let first = summaries.first();
        assert_eq!(first.map(|s| s.id.as_str()), Some("2000433"));
        assert_eq!(first.map(|s| s.hazardous), Some(false));
    }

    #[test]
    fn diameter_uses_the_maximum_estimate() {
        let json = serde_json::json!({ "near_earth_objects": [eros()] });
        let summaries = summarize_browse(&json).unwrap_or_default();
        let diameter = summaries.first().map(|s| s.diameter_m);
        assert_eq!(diameter, Some(49435.62));
    }

    #[test]
    fn velocity_comes_from_the_first_close_approach() {
        let json = serde_json::json!({ "near_earth_objects": [eros()] });
        let summaries = summarize_browse(&json).unwrap_or_default();
        let velocity = summaries.first().map(|s| s.velocity_km_s);
        assert_eq!(velocity, Some(5.58));
    }

    #[test]
    fn empty_close_approach_falls_back_to_default_velocity() {
        let mut neo = eros();
        neo["close_approach_data"] = serde_json::json!([]);
        let json = serde_json::json!({ "near_earth_objects": [neo] });

        let summaries = summarize_browse(&json).unwrap_or_default();
        let velocity = summaries.first().map(|s| s.velocity_km_s);
        assert_eq!(velocity, Some(DEFAULT_VELOCITY_KM_S));
    }

    #[test]
    fn hazardous_flag_is_copied_verbatim() {
        let mut neo = eros();
        neo["is_potentially_hazardous_asteroid"] = serde_json::json!(true);
        let json = serde_json::json!({ "near_earth_objects": [neo] });

        let summaries = summarize_browse(&json).unwrap_or_default();
        assert_eq!(summaries.first().map(|s| s.hazardous), Some(true));
    }

    #[test]
    fn missing_envelope_is_a_parse_error() {
        let json = serde_json::json!({ "page": {} });
        assert!(matches!(summarize_browse(&json), Err(NeoError::Parse(_))));
    }

    #[test]
    fn missing_diameter_is_a_parse_error() {
        let mut neo = eros();
        neo["estimated_diameter"] = serde_json::json!({});
        let json = serde_json::json!({ "near_earth_objects": [neo] });
        assert!(matches!(summarize_browse(&json), Err(NeoError::Parse(_))));
    }

    #[test]
    fn malformed_velocity_string_is_a_parse_error() {
        let mut neo = eros();
        neo["close_approach_data"] = serde_json::json!([
            { "relative_velocity": { "kilometers_per_second": "fast" } }
        ]);
        let json = serde_json::json!({ "near_earth_objects": [neo] });
        assert!(matches!(summarize_browse(&json), Err(NeoError::Parse(_))));
    }
}
