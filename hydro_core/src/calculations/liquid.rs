//! # Single-Phase Liquid Model
//!
//! Darcy-Weisbach pressure drop for incompressible liquid flow, plus the
//! hydrostatic elevation term.
//!
//! ## Assumptions
//!
//! - Incompressible fluid with constant density and viscosity
//! - Full-bore flow in a circular pipe of constant diameter
//! - Elevation is a genuine loss/gain: uphill adds to the drop, downhill
//!   subtracts (the outlet pressure can exceed the inlet on a steep fall)
//!
//! Liquid flow is never choked in this model, so `success` is always true;
//! a sub-atmospheric outlet is reported as a warning, not a failure.
//!
//! ## Example
//!
//! ```rust
//! use hydro_core::calculations::liquid;
//! use hydro_core::inputs::HydraulicInputs;
//!
//! # fn sample() -> HydraulicInputs {
//! #     HydraulicInputs {
//! #         length_m: 100.0, elevation_change_m: 0.0, diameter_m: 0.1,
//! #         roughness_m: 4.5e-5, mass_flow_kg_s: 20.0,
//! #         gas_mass_flow_kg_s: None, liquid_mass_flow_kg_s: None,
//! #         inlet_pressure_pa: 5.0e5, inlet_temperature_k: 293.15,
//! #         liquid_density_kg_m3: Some(1000.0),
//! #         liquid_viscosity_pa_s: Some(0.001),
//! #         gas_molecular_weight: None, gas_z_factor: None,
//! #         gas_viscosity_pa_s: None, gas_specific_heat_ratio: None,
//! #         tp_gas_density_kg_m3: None, tp_gas_viscosity_pa_s: None,
//! #         surface_tension_n_m: None,
//! #     }
//! # }
//! let result = liquid::calculate(&sample()).unwrap();
//! assert_eq!(result.flow_regime, "Turbulent");
//! ```

use crate::calculations::friction::friction_factor;
use crate::constants::{
    GRAVITY_M_S2, LAMINAR_RE_LIMIT, LIQUID_VELOCITY_LIMIT_M_S, TURBULENT_RE_LIMIT,
};
use crate::errors::HydroResult;
use crate::inputs::{require_positive, HydraulicInputs};
use crate::results::HydraulicResult;

/// Regime label from the Reynolds number thresholds shared with the
/// homogeneous model.
pub(crate) fn regime_label(reynolds: f64) -> &'static str {
    if reynolds < LAMINAR_RE_LIMIT {
        "Laminar"
    } else if reynolds > TURBULENT_RE_LIMIT {
        "Turbulent"
    } else {
        "Transition"
    }
}

/// Calculate liquid-line pressure drop.
///
/// # Errors
///
/// Precondition failure if geometry or mass flow is invalid, or if liquid
/// density/viscosity are absent or non-positive.
pub fn calculate(inputs: &HydraulicInputs) -> HydroResult<HydraulicResult> {
    inputs.validate_geometry()?;
    inputs.validate_mass_flow()?;
    let density = require_positive(inputs.liquid_density_kg_m3, "liquid_density_kg_m3", "liquid")?;
    let viscosity = require_positive(
        inputs.liquid_viscosity_pa_s,
        "liquid_viscosity_pa_s",
        "liquid",
    )?;

    let area = inputs.flow_area_m2();
    let velocity = inputs.mass_flow_kg_s / (density * area);
    let reynolds = density * velocity * inputs.diameter_m / viscosity;
    let f = friction_factor(reynolds, inputs.relative_roughness());

    let friction_drop =
        f * (inputs.length_m / inputs.diameter_m) * density * velocity * velocity / 2.0;
    let elevation_drop = density * GRAVITY_M_S2 * inputs.elevation_change_m;
    let outlet_pressure = inputs.inlet_pressure_pa - friction_drop - elevation_drop;

    let mut result = HydraulicResult::single_phase(
        outlet_pressure,
        friction_drop,
        elevation_drop,
        velocity,
        reynolds,
        f,
        regime_label(reynolds),
    );

    if velocity > LIQUID_VELOCITY_LIMIT_M_S {
        result.warnings.push(format!(
            "Velocity {velocity:.2} m/s exceeds typical liquid limit of {LIQUID_VELOCITY_LIMIT_M_S} m/s"
        ));
    }
    if outlet_pressure < 0.0 {
        result.warnings.push(format!(
            "Outlet pressure {outlet_pressure:.0} Pa indicates a vacuum condition"
        ));
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::HydroError;

    /// Horizontal water line: D = 0.1 m, L = 100 m, 20 kg/s of water
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
    fn test_horizontal_water_line_scenario() {
        let result = calculate(&water_line()).unwrap();

        // v = ṁ/(ρA) = 20 / (1000 · 7.854e-3) = 2.546 m/s
        assert!((result.velocity_m_s - 2.55).abs() < 0.01);
        assert_eq!(result.flow_regime, "Turbulent");
        assert!(result.success);
        assert_eq!(result.elevation_drop_pa, 0.0);
        assert!(result.outlet_pressure_pa < 5.0e5);
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_friction_drop_magnitude() {
        let result = calculate(&water_line()).unwrap();

        // f ≈ 0.0182, ΔP = f·(L/D)·ρv²/2 ≈ 59 kPa
        assert!((result.friction_factor - 0.0182).abs() < 0.0005);
        assert!((result.friction_drop_pa - 5.9e4).abs() < 2.0e3);
    }

    #[test]
    fn test_zero_elevation_invariant() {
        let mut inputs = water_line();
        inputs.elevation_change_m = 0.0;
        let result = calculate(&inputs).unwrap();
        assert_eq!(result.elevation_drop_pa, 0.0);
        assert_eq!(result.pressure_drop_pa, result.friction_drop_pa);
    }

    #[test]
    fn test_downhill_recovers_pressure() {
        let mut uphill = water_line();
        uphill.elevation_change_m = 10.0;
        let mut downhill = water_line();
        downhill.elevation_change_m = -10.0;

        let up = calculate(&uphill).unwrap();
        let down = calculate(&downhill).unwrap();

        // ±10 m of water is ±98.07 kPa of hydrostatic head
        assert!((up.elevation_drop_pa - 98066.5).abs() < 1.0);
        assert!((down.elevation_drop_pa + 98066.5).abs() < 1.0);
        assert!(down.outlet_pressure_pa > up.outlet_pressure_pa);
    }

    #[test]
    fn test_laminar_regime_label() {
        let mut inputs = water_line();
        // Heavy oil at low rate: Re = ρvD/μ well under 2000
        inputs.mass_flow_kg_s = 0.5;
        inputs.liquid_density_kg_m3 = Some(900.0);
        inputs.liquid_viscosity_pa_s = Some(0.5);
        let result = calculate(&inputs).unwrap();
        assert_eq!(result.flow_regime, "Laminar");
        assert_eq!(result.friction_factor, 64.0 / result.reynolds_number);
    }

    #[test]
    fn test_high_velocity_warning() {
        let mut inputs = water_line();
        inputs.mass_flow_kg_s = 40.0; // v ≈ 5.1 m/s
        let result = calculate(&inputs).unwrap();
        assert!(result.success);
        assert!(result.warnings.iter().any(|w| w.contains("exceeds typical liquid limit")));
    }

    #[test]
    fn test_vacuum_warning() {
        let mut inputs = water_line();
        inputs.inlet_pressure_pa = 1.0e4; // far below the ~59 kPa friction drop
        let result = calculate(&inputs).unwrap();
        assert!(result.success, "vacuum is a warning, not a failure");
        assert!(result.outlet_pressure_pa < 0.0);
        assert!(result.warnings.iter().any(|w| w.contains("vacuum")));
    }

    #[test]
    fn test_missing_density_is_precondition_failure() {
        let mut inputs = water_line();
        inputs.liquid_density_kg_m3 = None;
        match calculate(&inputs) {
            Err(HydroError::MissingProperty { field, model }) => {
                assert_eq!(field, "liquid_density_kg_m3");
                assert_eq!(model, "liquid");
            }
            other => panic!("expected MissingProperty, got {other:?}"),
        }
    }

    #[test]
    fn test_nonpositive_diameter_rejected() {
        let mut inputs = water_line();
        inputs.diameter_m = -0.1;
        assert!(calculate(&inputs).is_err());
    }
}
