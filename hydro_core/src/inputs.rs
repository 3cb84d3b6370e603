//! # Hydraulic Inputs
//!
//! The shared input record for every pipe-flow model. One value describes a
//! single pipe segment with fixed fluid properties evaluated at
//! representative conditions; all fields are SI. Callers are responsible
//! for converting display units (see [`crate::units`]) before populating
//! this struct.
//!
//! Optional fields are model-specific: the liquid model ignores gas
//! properties and vice versa, and the two-phase models read the phase mass
//! flows and flowing-condition gas properties rather than the gas-law
//! fields. Each model validates exactly the fields it uses.
//!
//! ## JSON Example (horizontal water line)
//!
//! ```json
//! {
//!   "length_m": 100.0,
//!   "elevation_change_m": 0.0,
//!   "diameter_m": 0.1,
//!   "roughness_m": 4.5e-5,
//!   "mass_flow_kg_s": 20.0,
//!   "inlet_pressure_pa": 500000.0,
//!   "inlet_temperature_k": 293.15,
//!   "liquid_density_kg_m3": 1000.0,
//!   "liquid_viscosity_pa_s": 0.001
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_SURFACE_TENSION_N_M;
use crate::errors::{HydroError, HydroResult};

/// One pipe segment and its flow, in SI units.
///
/// Never mutated by the engine; every model is a pure function of this
/// value and allocates a fresh [`crate::results::HydraulicResult`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HydraulicInputs {
    /// Pipe length along the run (m)
    pub length_m: f64,

    /// Net elevation change, outlet minus inlet (m, positive = uphill)
    pub elevation_change_m: f64,

    /// Inner diameter (m)
    pub diameter_m: f64,

    /// Absolute roughness (m)
    pub roughness_m: f64,

    /// Total mass flow rate (kg/s); used by the single-phase models
    pub mass_flow_kg_s: f64,

    /// Gas-phase mass flow rate for two-phase models (kg/s)
    #[serde(default)]
    pub gas_mass_flow_kg_s: Option<f64>,

    /// Liquid-phase mass flow rate for two-phase models (kg/s)
    #[serde(default)]
    pub liquid_mass_flow_kg_s: Option<f64>,

    /// Absolute inlet pressure (Pa)
    pub inlet_pressure_pa: f64,

    /// Inlet temperature (K)
    pub inlet_temperature_k: f64,

    /// Liquid density (kg/m³); liquid and two-phase models
    #[serde(default)]
    pub liquid_density_kg_m3: Option<f64>,

    /// Liquid dynamic viscosity (Pa·s); liquid and two-phase models
    #[serde(default)]
    pub liquid_viscosity_pa_s: Option<f64>,

    /// Gas molecular weight (kg/kmol); gas model
    #[serde(default)]
    pub gas_molecular_weight: Option<f64>,

    /// Gas compressibility factor Z (defaults to 1.0)
    #[serde(default)]
    pub gas_z_factor: Option<f64>,

    /// Gas dynamic viscosity (Pa·s); gas model
    #[serde(default)]
    pub gas_viscosity_pa_s: Option<f64>,

    /// Specific-heat ratio k = Cp/Cv; gas model (sonic velocity)
    #[serde(default)]
    pub gas_specific_heat_ratio: Option<f64>,

    /// Gas density at flowing conditions (kg/m³); two-phase models only
    #[serde(default)]
    pub tp_gas_density_kg_m3: Option<f64>,

    /// Gas dynamic viscosity at flowing conditions (Pa·s); two-phase models only
    #[serde(default)]
    pub tp_gas_viscosity_pa_s: Option<f64>,

    /// Gas-liquid surface tension (N/m, defaults to 0.072)
    #[serde(default)]
    pub surface_tension_n_m: Option<f64>,
}

impl HydraulicInputs {
    /// Flow cross-sectional area A = πD²/4 (m²)
    pub fn flow_area_m2(&self) -> f64 {
        std::f64::consts::PI * self.diameter_m * self.diameter_m / 4.0
    }

    /// Relative roughness ε/D, clamped to ≥ 0
    pub fn relative_roughness(&self) -> f64 {
        (self.roughness_m / self.diameter_m).max(0.0)
    }

    /// Compressibility factor with its 1.0 default applied
    pub fn z_factor(&self) -> f64 {
        self.gas_z_factor.unwrap_or(1.0)
    }

    /// Surface tension with its default applied (N/m)
    pub fn surface_tension_n_m(&self) -> f64 {
        self.surface_tension_n_m
            .unwrap_or(DEFAULT_SURFACE_TENSION_N_M)
    }

    /// Validate the geometric fields shared by every model.
    pub fn validate_geometry(&self) -> HydroResult<()> {
        if self.diameter_m <= 0.0 {
            return Err(HydroError::invalid_input(
                "diameter_m",
                self.diameter_m.to_string(),
                "Inner diameter must be positive",
            ));
        }
        if self.length_m <= 0.0 {
            return Err(HydroError::invalid_input(
                "length_m",
                self.length_m.to_string(),
                "Pipe length must be positive",
            ));
        }
        if self.roughness_m < 0.0 {
            return Err(HydroError::invalid_input(
                "roughness_m",
                self.roughness_m.to_string(),
                "Roughness cannot be negative",
            ));
        }
        Ok(())
    }

    /// Validate the total mass flow used by the single-phase models.
    pub fn validate_mass_flow(&self) -> HydroResult<()> {
        if self.mass_flow_kg_s <= 0.0 {
            return Err(HydroError::invalid_input(
                "mass_flow_kg_s",
                self.mass_flow_kg_s.to_string(),
                "Mass flow must be positive",
            ));
        }
        Ok(())
    }
}

/// Unwrap an optional property for `model`, requiring a strictly positive
/// value. Absence is a [`HydroError::MissingProperty`]; a non-positive value
/// is a [`HydroError::InvalidInput`].
pub fn require_positive(value: Option<f64>, field: &str, model: &str) -> HydroResult<f64> {
    let value = value.ok_or_else(|| HydroError::missing_property(field, model))?;
    if value <= 0.0 {
        return Err(HydroError::invalid_input(
            field,
            value.to_string(),
            "Value must be positive",
        ));
    }
    Ok(value)
}
