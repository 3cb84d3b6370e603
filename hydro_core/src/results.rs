//! # Hydraulic Results
//!
//! The shared result record returned by every pipe-flow model. A result is
//! constructed fresh per call and never mutated afterwards.
//!
//! `success` distinguishes physically viable solutions from expected
//! non-viability (a gas line whose frictional drop exceeds the available
//! inlet pressure). It is data, not an error: malformed input is reported
//! through [`crate::errors::HydroError`] instead.

use serde::{Deserialize, Serialize};

/// Results from a pipe-segment hydraulic calculation, in SI units.
///
/// Optional diagnostics are populated only where they are meaningful:
/// Mach number by the gas model, the holdup/mixture/superficial fields by
/// the two-phase models.
///
/// ## JSON Example
///
/// ```json
/// {
///   "success": true,
///   "outlet_pressure_pa": 467000.0,
///   "pressure_drop_pa": 33000.0,
///   "friction_drop_pa": 33000.0,
///   "elevation_drop_pa": 0.0,
///   "acceleration_drop_pa": 0.0,
///   "velocity_m_s": 2.55,
///   "reynolds_number": 254600.0,
///   "friction_factor": 0.018,
///   "flow_regime": "Turbulent",
///   "warnings": []
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HydraulicResult {
    /// Whether a physically valid solution was found
    pub success: bool,

    /// Absolute outlet pressure (Pa)
    pub outlet_pressure_pa: f64,

    /// Total pressure drop, inlet minus outlet (Pa)
    pub pressure_drop_pa: f64,

    /// Friction component of the drop (Pa)
    pub friction_drop_pa: f64,

    /// Elevation (hydrostatic) component of the drop (Pa, signed)
    pub elevation_drop_pa: f64,

    /// Acceleration component of the drop (Pa); 0 for all current models
    pub acceleration_drop_pa: f64,

    /// Representative velocity (m/s); mixture velocity for two-phase models
    pub velocity_m_s: f64,

    /// Reynolds number used for the friction factor
    pub reynolds_number: f64,

    /// Darcy friction factor
    pub friction_factor: f64,

    /// Descriptive flow-regime label (e.g. "Laminar", "Segregated", "Choked/Vacuum")
    pub flow_regime: String,

    /// Mach number at the outlet (gas model only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mach_number: Option<f64>,

    /// In-situ liquid holdup (two-phase models)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub liquid_holdup: Option<f64>,

    /// Mixture density (kg/m³, two-phase models)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mixture_density_kg_m3: Option<f64>,

    /// Mixture viscosity (Pa·s, two-phase models)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mixture_viscosity_pa_s: Option<f64>,

    /// Superficial gas velocity (m/s, two-phase models)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub superficial_gas_velocity_m_s: Option<f64>,

    /// Superficial liquid velocity (m/s, two-phase models)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub superficial_liquid_velocity_m_s: Option<f64>,

    /// Ordered, human-readable notes on non-fatal anomalies
    #[serde(default)]
    pub warnings: Vec<String>,
}

impl HydraulicResult {
    /// A successful single-phase result with no diagnostics; models fill in
    /// the optional fields they own.
    pub fn single_phase(
        outlet_pressure_pa: f64,
        friction_drop_pa: f64,
        elevation_drop_pa: f64,
        velocity_m_s: f64,
        reynolds_number: f64,
        friction_factor: f64,
        flow_regime: impl Into<String>,
    ) -> Self {
        HydraulicResult {
            success: true,
            outlet_pressure_pa,
            pressure_drop_pa: friction_drop_pa + elevation_drop_pa,
            friction_drop_pa,
            elevation_drop_pa,
            acceleration_drop_pa: 0.0,
            velocity_m_s,
            reynolds_number,
            friction_factor,
            flow_regime: flow_regime.into(),
            mach_number: None,
            liquid_holdup: None,
            mixture_density_kg_m3: None,
            mixture_viscosity_pa_s: None,
            superficial_gas_velocity_m_s: None,
            superficial_liquid_velocity_m_s: None,
            warnings: Vec::new(),
        }
    }

    /// Percentage of the total drop attributable to friction, for display.
    pub fn friction_share(&self) -> f64 {
        if self.pressure_drop_pa.abs() < f64::EPSILON {
            return 0.0;
        }
        self.friction_drop_pa / self.pressure_drop_pa
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_phase_constructor_sums_drops() {
        let result =
            HydraulicResult::single_phase(4.0e5, 3.0e4, 1.0e4, 2.5, 2.5e5, 0.018, "Turbulent");
        assert!(result.success);
        assert_eq!(result.pressure_drop_pa, 4.0e4);
        assert_eq!(result.acceleration_drop_pa, 0.0);
        assert!((result.friction_share() - 0.75).abs() < 1e-12);
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_optional_diagnostics_skipped_in_json() {
        let result =
            HydraulicResult::single_phase(4.0e5, 3.0e4, 1.0e4, 2.5, 2.5e5, 0.018, "Turbulent");
        let json = serde_json::to_string(&result).unwrap();
        assert!(!json.contains("mach_number"));
        assert!(!json.contains("liquid_holdup"));
    }
}
