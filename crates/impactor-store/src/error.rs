//! Error types for the impact store.
//!
//! Read-side corruption is deliberately *not* an error: a missing or
//! unparseable backing file loads as an empty list (logged at `warn`).
//! Only write failures and delete misses surface as [`StoreError`].

use impactor_types::ImpactId;

/// Errors that can occur in the impact store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// A filesystem operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A serialization or deserialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// No stored event matched the requested identifier.
    #[error("impact not found: {0}")]
    NotFound(ImpactId),
}
