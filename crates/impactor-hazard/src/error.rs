//! Error types for the hazard model.
//!
//! Every variant is an invalid-input precondition violation; the HTTP
//! layer maps all of them to a 400-class response.

/// Errors that can occur when evaluating the hazard model.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum HazardError {
    /// The asteroid diameter must be strictly positive.
    #[error("diameter must be positive, got {value} m")]
    NonPositiveDiameter {
        /// The rejected diameter in meters.
        value: f64,
    },

    /// The impact velocity must be strictly positive.
    #[error("velocity must be positive, got {value} km/s")]
    NonPositiveVelocity {
        /// The rejected velocity in km/s.
        value: f64,
    },

    /// The asteroid density must be strictly positive.
    #[error("density must be positive, got {value} kg/m^3")]
    NonPositiveDensity {
        /// The rejected density in kg/m^3.
        value: f64,
    },

    /// The local population density cannot be negative.
    #[error("population density cannot be negative, got {value} per km^2")]
    NegativePopulationDensity {
        /// The rejected population density per km^2.
        value: f64,
    },
}
