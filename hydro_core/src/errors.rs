//! # Error Types
//!
//! Structured error types for hydro_core. Every variant carries enough
//! context for a caller (human or programmatic) to understand and fix the
//! offending input without re-running the calculation.
//!
//! Errors here are strictly *precondition* failures: missing or invalid
//! input for the requested model, or an unknown calculation selector.
//! Physically meaningful "failures" such as choked compressible flow are
//! reported through [`crate::results::HydraulicResult::success`], never as
//! an `Err`.
//!
//! ## Example
//!
//! ```rust
//! use hydro_core::errors::{HydroError, HydroResult};
//!
//! fn validate_diameter(diameter_m: f64) -> HydroResult<()> {
//!     if diameter_m <= 0.0 {
//!         return Err(HydroError::invalid_input(
//!             "diameter_m",
//!             diameter_m.to_string(),
//!             "Inner diameter must be positive",
//!         ));
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for hydro_core operations
pub type HydroResult<T> = Result<T, HydroError>;

/// Structured error type for hydraulic calculations.
///
/// Each variant provides specific context about what went wrong,
/// enabling programmatic error handling by callers.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum HydroError {
    /// An input value is invalid (non-positive, out of range, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// A fluid property required by the selected model is absent
    #[error("Missing property '{field}' required by the {model} model")]
    MissingProperty { field: String, model: String },

    /// The dispatch selector does not name a known calculation
    #[error("Unknown calculation type: '{selector}'")]
    UnknownCalculationType { selector: String },
}

impl HydroError {
    /// Create an InvalidInput error
    pub fn invalid_input(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        HydroError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a MissingProperty error
    pub fn missing_property(field: impl Into<String>, model: impl Into<String>) -> Self {
        HydroError::MissingProperty {
            field: field.into(),
            model: model.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            HydroError::InvalidInput { .. } => "INVALID_INPUT",
            HydroError::MissingProperty { .. } => "MISSING_PROPERTY",
            HydroError::UnknownCalculationType { .. } => "UNKNOWN_CALCULATION_TYPE",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = HydroError::invalid_input("diameter_m", "-0.1", "Inner diameter must be positive");
        let json = serde_json::to_string(&error).unwrap();
        let roundtrip: HydroError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(
            HydroError::missing_property("liquid_density_kg_m3", "liquid").error_code(),
            "MISSING_PROPERTY"
        );
        let unknown = HydroError::UnknownCalculationType {
            selector: "steam".to_string(),
        };
        assert_eq!(unknown.error_code(), "UNKNOWN_CALCULATION_TYPE");
    }

    #[test]
    fn test_display_messages() {
        let error = HydroError::missing_property("gas_molecular_weight", "gas");
        assert_eq!(
            error.to_string(),
            "Missing property 'gas_molecular_weight' required by the gas model"
        );
    }
}
