//! The impact event identifier newtype.
//!
//! Identifiers are plain strings on the wire. Historical entries carry
//! curated ids (`chicxulub`, `tunguska`, ...) while simulated entries use
//! the `sim_<5-digit number>` format. Wrapping the string in a newtype
//! keeps ids from being confused with names or other string fields.

use serde::{Deserialize, Serialize};

/// Prefix shared by every simulated impact identifier.
pub const SIMULATED_PREFIX: &str = "sim_";

/// Unique identifier for an impact event (historical or simulated).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImpactId(String);

impl ImpactId {
    /// Create an identifier from an arbitrary string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Create a simulated impact identifier in the `sim_#####` format.
    ///
    /// The numeric part is zero-padded to five digits so the textual
    /// format is stable across the whole `0..=99999` range.
    pub fn simulated(n: u32) -> Self {
        Self(format!("{SIMULATED_PREFIX}{n:05}"))
    }

    /// View the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the identifier and return the inner string.
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Whether this identifier uses the simulated-impact format.
    pub fn is_simulated(&self) -> bool {
        self.0.starts_with(SIMULATED_PREFIX)
    }
}

impl core::fmt::Display for ImpactId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for ImpactId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for ImpactId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}
