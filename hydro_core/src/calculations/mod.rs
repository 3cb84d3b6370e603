//! # Hydraulic Calculations
//!
//! This module contains the pipe-flow pressure-drop models. Each model
//! follows the pattern:
//!
//! - shared [`HydraulicInputs`](crate::inputs::HydraulicInputs) in, shared
//!   [`HydraulicResult`](crate::results::HydraulicResult) out
//! - `calculate(&inputs) -> HydroResult<HydraulicResult>` - pure function
//! - precondition failures as `Err`, physical non-viability as
//!   `success = false`, everything else as warnings
//!
//! ## Available Models
//!
//! - [`liquid`] - single-phase incompressible Darcy-Weisbach
//! - [`gas`] - single-phase compressible isothermal flow with choking
//! - [`homogeneous`] - no-slip two-phase screening estimate
//! - [`beggs_brill`] - Beggs & Brill (1973) two-phase correlation
//!
//! [`dispatch`] routes a [`CalculationType`] selector to exactly one model.

pub mod beggs_brill;
pub mod friction;
pub mod gas;
pub mod homogeneous;
pub mod liquid;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{HydroError, HydroResult};
use crate::inputs::HydraulicInputs;
use crate::results::HydraulicResult;

// Re-export the pieces callers usually want
pub use beggs_brill::FlowPattern;
pub use friction::friction_factor;

/// Selector for the four pipe-flow models.
///
/// The serialized tags are the wire selectors accepted at the dispatch
/// boundary; anything else is a precondition failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CalculationType {
    /// Single-phase compressible gas
    #[serde(rename = "gas")]
    Gas,
    /// Single-phase incompressible liquid
    #[serde(rename = "liquid")]
    Liquid,
    /// Two-phase Beggs-Brill correlation (design-grade)
    #[serde(rename = "mixed-beggs-brill")]
    MixedBeggsBrill,
    /// Two-phase homogeneous no-slip model (screening)
    #[serde(rename = "mixed-homogeneous")]
    MixedHomogeneous,
}

impl CalculationType {
    /// The wire selector for this calculation type
    pub fn selector(&self) -> &'static str {
        match self {
            CalculationType::Gas => "gas",
            CalculationType::Liquid => "liquid",
            CalculationType::MixedBeggsBrill => "mixed-beggs-brill",
            CalculationType::MixedHomogeneous => "mixed-homogeneous",
        }
    }
}

impl fmt::Display for CalculationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.selector())
    }
}

impl FromStr for CalculationType {
    type Err = HydroError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "gas" => Ok(CalculationType::Gas),
            "liquid" => Ok(CalculationType::Liquid),
            "mixed-beggs-brill" => Ok(CalculationType::MixedBeggsBrill),
            "mixed-homogeneous" => Ok(CalculationType::MixedHomogeneous),
            other => Err(HydroError::UnknownCalculationType {
                selector: other.to_string(),
            }),
        }
    }
}

/// Route the inputs to exactly one model and return its result.
///
/// # Errors
///
/// Propagates the selected model's precondition failures.
pub fn dispatch(
    calculation: CalculationType,
    inputs: &HydraulicInputs,
) -> HydroResult<HydraulicResult> {
    match calculation {
        CalculationType::Gas => gas::calculate(inputs),
        CalculationType::Liquid => liquid::calculate(inputs),
        CalculationType::MixedBeggsBrill => beggs_brill::calculate(inputs),
        CalculationType::MixedHomogeneous => homogeneous::calculate(inputs),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn water_line() -> HydraulicInputs {
        HydraulicInputs {
            length_m: 100.0,
            elevation_change_m: 0.0,
            diameter_m: 0.1,
            roughness_m: 4.5e-5,
            mass_flow_kg_s: 20.0,
            gas_mass_flow_kg_s: None,
            liquid_mass_flow_kg_s: None,
            inlet_pressure_pa: 5.0e5,
            inlet_temperature_k: 293.15,
            liquid_density_kg_m3: Some(1000.0),
            liquid_viscosity_pa_s: Some(0.001),
            gas_molecular_weight: None,
            gas_z_factor: None,
            gas_viscosity_pa_s: None,
            gas_specific_heat_ratio: None,
            tp_gas_density_kg_m3: None,
            tp_gas_viscosity_pa_s: None,
            surface_tension_n_m: None,
        }
    }

    #[test]
    fn test_selector_round_trip() {
        for calc in [
            CalculationType::Gas,
            CalculationType::Liquid,
            CalculationType::MixedBeggsBrill,
            CalculationType::MixedHomogeneous,
        ] {
            assert_eq!(calc.selector().parse::<CalculationType>().unwrap(), calc);
        }
    }

    #[test]
    fn test_unknown_selector_is_precondition_failure() {
        let err = "steam".parse::<CalculationType>().unwrap_err();
        assert_eq!(err.error_code(), "UNKNOWN_CALCULATION_TYPE");
    }

    #[test]
    fn test_serde_tags_match_selectors() {
        let json = serde_json::to_string(&CalculationType::MixedBeggsBrill).unwrap();
        assert_eq!(json, "\"mixed-beggs-brill\"");
        let back: CalculationType = serde_json::from_str("\"liquid\"").unwrap();
        assert_eq!(back, CalculationType::Liquid);
    }

    #[test]
    fn test_dispatch_routes_to_liquid() {
        let result = dispatch(CalculationType::Liquid, &water_line()).unwrap();
        assert_eq!(result.flow_regime, "Turbulent");
    }

    #[test]
    fn test_dispatch_propagates_preconditions() {
        // The same inputs lack the properties the gas model requires
        let err = dispatch(CalculationType::Gas, &water_line()).unwrap_err();
        assert_eq!(err.error_code(), "MISSING_PROPERTY");
    }
}
