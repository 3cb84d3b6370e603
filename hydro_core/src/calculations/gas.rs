//! # Single-Phase Gas Model
//!
//! Isothermal compressible flow integrated along the pipe, with an
//! elevation term and choked-flow detection.
//!
//! ## Algorithm Overview
//!
//! 1. Inlet density from the real-gas law `ρ = P·MW/(Z·R·T)`
//! 2. Reynolds number in mass-flux form `Re = ṁ·D/(μ·A)`, constant along
//!    a constant-diameter pipe, so the friction factor is solved once
//! 3. Horizontal: `P_out² = P_in² − F`; inclined:
//!    `P_out² = P_in²·e^(−S₂) − F·(1 − e^(−S₂))/S₂` with
//!    `S₂ = 2·MW·g·Δz/(Z·R·T)`
//! 4. `P_out² ≤ 0` means the stated rate cannot be sustained: the result is
//!    `success = false` with regime "Choked/Vacuum" — expected data, not an
//!    error
//! 5. Otherwise report outlet velocity and the Mach number against the
//!    sonic velocity `c = √(k·Z·Rs·T)`
//!
//! The friction/elevation split of the total drop is evaluated at the
//! arithmetic-mean pressure for reporting only; it plays no part in the
//! outlet-pressure integration.

use crate::calculations::friction::friction_factor;
use crate::constants::{GRAVITY_M_S2, MACH_COMPRESSIBILITY_LIMIT, R_UNIVERSAL_J_KMOL_K};
use crate::errors::{HydroError, HydroResult};
use crate::inputs::{require_positive, HydraulicInputs};
use crate::results::HydraulicResult;

/// Below this |S₂| the elevation exponent is treated as zero (horizontal)
const S2_HORIZONTAL_LIMIT: f64 = 1e-6;

/// Calculate compressible gas-line pressure drop.
///
/// # Errors
///
/// Precondition failure for invalid geometry/mass flow or when molecular
/// weight, gas viscosity, or specific-heat ratio are absent/non-positive.
pub fn calculate(inputs: &HydraulicInputs) -> HydroResult<HydraulicResult> {
    inputs.validate_geometry()?;
    inputs.validate_mass_flow()?;
    let mw = require_positive(inputs.gas_molecular_weight, "gas_molecular_weight", "gas")?;
    let viscosity = require_positive(inputs.gas_viscosity_pa_s, "gas_viscosity_pa_s", "gas")?;
    let heat_ratio = require_positive(
        inputs.gas_specific_heat_ratio,
        "gas_specific_heat_ratio",
        "gas",
    )?;
    let z = inputs.z_factor();
    if z <= 0.0 {
        return Err(HydroError::invalid_input(
            "gas_z_factor",
            z.to_string(),
            "Compressibility factor must be positive",
        ));
    }
    let temperature = inputs.inlet_temperature_k;
    if temperature <= 0.0 {
        return Err(HydroError::invalid_input(
            "inlet_temperature_k",
            temperature.to_string(),
            "Absolute temperature must be positive",
        ));
    }

    let area = inputs.flow_area_m2();
    let mass_flux = inputs.mass_flow_kg_s / area;
    let zrt = z * R_UNIVERSAL_J_KMOL_K * temperature;
    let inlet_density = inputs.inlet_pressure_pa * mw / zrt;
    let specific_r = R_UNIVERSAL_J_KMOL_K / mw;

    // Mass-flux Reynolds number, constant along the pipe
    let reynolds = inputs.mass_flow_kg_s * inputs.diameter_m / (viscosity * area);
    let f = friction_factor(reynolds, inputs.relative_roughness());

    let friction_term = f * (inputs.length_m / inputs.diameter_m)
        * (z * specific_r * temperature)
        * mass_flux
        * mass_flux;
    let s2 = 2.0 * mw * GRAVITY_M_S2 * inputs.elevation_change_m / zrt;

    let outlet_p_squared = if s2.abs() < S2_HORIZONTAL_LIMIT {
        inputs.inlet_pressure_pa.powi(2) - friction_term
    } else {
        let decay = (-s2).exp();
        inputs.inlet_pressure_pa.powi(2) * decay - friction_term * (1.0 - decay) / s2
    };

    if outlet_p_squared <= 0.0 {
        let mut result = HydraulicResult::single_phase(
            0.0,
            inputs.inlet_pressure_pa,
            0.0,
            inputs.mass_flow_kg_s / (inlet_density * area),
            reynolds,
            f,
            "Choked/Vacuum",
        );
        result.success = false;
        result.warnings.push(
            "Pressure drop too high: flow cannot be sustained at this rate (vacuum or choked flow)"
                .to_string(),
        );
        return Ok(result);
    }

    let outlet_pressure = outlet_p_squared.sqrt();
    let outlet_density = outlet_pressure * mw / zrt;
    let outlet_velocity = inputs.mass_flow_kg_s / (outlet_density * area);
    let sonic_velocity = (heat_ratio * z * specific_r * temperature).sqrt();
    let mach = outlet_velocity / sonic_velocity;

    let total_drop = inputs.inlet_pressure_pa - outlet_pressure;

    // Reporting-only split at the arithmetic-mean pressure
    let mean_density = (inputs.inlet_pressure_pa + outlet_pressure) / 2.0 * mw / zrt;
    let elevation_drop = mean_density * GRAVITY_M_S2 * inputs.elevation_change_m;
    let friction_drop = total_drop - elevation_drop;

    let mut result = HydraulicResult::single_phase(
        outlet_pressure,
        friction_drop,
        elevation_drop,
        outlet_velocity,
        reynolds,
        f,
        "Turbulent",
    );
    result.pressure_drop_pa = total_drop;
    result.mach_number = Some(mach);

    if mach > 1.0 {
        result
            .warnings
            .push(format!("Mach number {mach:.2} exceeds 1: flow is choked"));
    }
    if mach > MACH_COMPRESSIBILITY_LIMIT {
        result.warnings.push(format!(
            "Mach number {mach:.2} exceeds {MACH_COMPRESSIBILITY_LIMIT}: compressibility effects significant"
        ));
    }

    Ok(result)
}
