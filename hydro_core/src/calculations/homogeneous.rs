//! # Homogeneous Two-Phase Model
//!
//! No-slip screening approximation for gas+liquid flow: both phases are
//! assumed to travel at the same velocity, so mixture density and viscosity
//! are volumetric-fraction blends and the pressure drop reduces to a
//! single-phase Darcy-Weisbach calculation on the blended fluid.
//!
//! This is a coarse screening estimate, not a design-grade result; every
//! result carries that caveat as its first warning. Use
//! [`crate::calculations::beggs_brill`] for design work.

use crate::calculations::friction::friction_factor;
use crate::calculations::liquid::regime_label;
use crate::constants::GRAVITY_M_S2;
use crate::errors::HydroResult;
use crate::inputs::{require_positive, HydraulicInputs};
use crate::results::HydraulicResult;

const MODEL: &str = "mixed-homogeneous";

/// Calculate two-phase pressure drop with the no-slip homogeneous model.
///
/// # Errors
///
/// Precondition failure if geometry, either phase mass flow, or any of the
/// four phase properties (liquid/gas density and viscosity at flowing
/// conditions) are absent or non-positive.
pub fn calculate(inputs: &HydraulicInputs) -> HydroResult<HydraulicResult> {
    inputs.validate_geometry()?;
    let gas_flow = require_positive(inputs.gas_mass_flow_kg_s, "gas_mass_flow_kg_s", MODEL)?;
    let liquid_flow = require_positive(
        inputs.liquid_mass_flow_kg_s,
        "liquid_mass_flow_kg_s",
        MODEL,
    )?;
    let liquid_density =
        require_positive(inputs.liquid_density_kg_m3, "liquid_density_kg_m3", MODEL)?;
    let liquid_viscosity = require_positive(
        inputs.liquid_viscosity_pa_s,
        "liquid_viscosity_pa_s",
        MODEL,
    )?;
    let gas_density =
        require_positive(inputs.tp_gas_density_kg_m3, "tp_gas_density_kg_m3", MODEL)?;
    let gas_viscosity = require_positive(
        inputs.tp_gas_viscosity_pa_s,
        "tp_gas_viscosity_pa_s",
        MODEL,
    )?;

    let area = inputs.flow_area_m2();
    let liquid_volumetric = liquid_flow / liquid_density;
    let gas_volumetric = gas_flow / gas_density;
    let no_slip_fraction = liquid_volumetric / (liquid_volumetric + gas_volumetric);

    let mixture_density =
        liquid_density * no_slip_fraction + gas_density * (1.0 - no_slip_fraction);
    let mixture_viscosity =
        liquid_viscosity * no_slip_fraction + gas_viscosity * (1.0 - no_slip_fraction);

    let mixture_velocity = (liquid_volumetric + gas_volumetric) / area;
    let reynolds = mixture_density * mixture_velocity * inputs.diameter_m / mixture_viscosity;
    let f = friction_factor(reynolds, inputs.relative_roughness());

    let friction_drop = f * (inputs.length_m / inputs.diameter_m)
        * mixture_density
        * mixture_velocity
        * mixture_velocity
        / 2.0;
    let elevation_drop = mixture_density * GRAVITY_M_S2 * inputs.elevation_change_m;
    let outlet_pressure = inputs.inlet_pressure_pa - friction_drop - elevation_drop;

    let mut result = HydraulicResult::single_phase(
        outlet_pressure,
        friction_drop,
        elevation_drop,
        mixture_velocity,
        reynolds,
        f,
        regime_label(reynolds),
    );
    result.liquid_holdup = Some(no_slip_fraction);
    result.mixture_density_kg_m3 = Some(mixture_density);
    result.mixture_viscosity_pa_s = Some(mixture_viscosity);
    result.superficial_gas_velocity_m_s = Some(gas_volumetric / area);
    result.superficial_liquid_velocity_m_s = Some(liquid_volumetric / area);

    result.warnings.push(
        "Homogeneous no-slip model is a screening approximation; use Beggs-Brill for design"
            .to_string(),
    );

    Ok(result)
}
