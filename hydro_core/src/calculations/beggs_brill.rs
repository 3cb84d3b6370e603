//! # Beggs-and-Brill Two-Phase Model
//!
//! Design-grade implementation of the Beggs & Brill (1973) correlation with
//! a Payne-style inclination correction: flow-pattern classification over
//! (λL, Fr), regime-specific horizontal holdup, inclination factor Ψ, and a
//! two-phase friction multiplier `e^S`.
//!
//! ## Algorithm Overview
//!
//! 1. Superficial velocities, no-slip fraction λL, Froude number
//! 2. Pattern boundaries L1..L4 and classification into the closed
//!    [`FlowPattern`] set
//! 3. Horizontal holdup `α₀ = a·λL^b / Fr^c` (interpolated across the
//!    Transition band), inclination-corrected and clamped to
//!    `[0.0001, 0.9999]`
//! 4. Friction from the no-slip mixture Reynolds number times `e^S`
//! 5. Gradients: the *elevation* term uses the slip mixture density
//!    `ρL·α + ρG·(1−α)`, while the *friction* term uses the no-slip
//!    density `ρL·λL + ρG·(1−λL)`. The mismatch is deliberate; it is how
//!    the published correlation is formulated.
//!
//! The correlation has no choking concept, so `success` is always true;
//! mist-flow and liquid-accumulation hints surface as warnings.
//!
//! ## References
//!
//! - Beggs, H.D. and Brill, J.P. (1973), "A Study of Two-Phase Flow in
//!   Inclined Pipes", J. Petroleum Technology 25
//! - Payne, G.A. et al. (1979), JPT 31 (inclination correction factors)

use serde::{Deserialize, Serialize};

use crate::calculations::friction::friction_factor;
use crate::constants::GRAVITY_M_S2;
use crate::errors::HydroResult;
use crate::inputs::{require_positive, HydraulicInputs};
use crate::results::HydraulicResult;

const MODEL: &str = "mixed-beggs-brill";

/// Beggs-Brill flow patterns.
///
/// A closed set so the per-pattern coefficient tables below are exhaustive
/// and statically checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlowPattern {
    Segregated,
    Transition,
    Intermittent,
    Distributed,
}

impl FlowPattern {
    /// Descriptive label used in [`HydraulicResult::flow_regime`]
    pub fn label(self) -> &'static str {
        match self {
            FlowPattern::Segregated => "Segregated",
            FlowPattern::Transition => "Transition",
            FlowPattern::Intermittent => "Intermittent",
            FlowPattern::Distributed => "Distributed",
        }
    }
}

/// Pattern boundaries L1..L4 as functions of the no-slip fraction.
fn pattern_boundaries(lambda: f64) -> (f64, f64, f64, f64) {
    let l1 = 316.0 * lambda.powf(0.302);
    let l2 = 0.0009252 * lambda.powf(-2.4684);
    let l3 = 0.10 * lambda.powf(-1.4516);
    let l4 = 0.5 * lambda.powf(-6.738);
    (l1, l2, l3, l4)
}

/// Classify the flow pattern from the published (λL, Fr) decision table.
fn classify(lambda: f64, froude: f64) -> FlowPattern {
    let (l1, l2, l3, l4) = pattern_boundaries(lambda);

    if (lambda < 0.01 && froude < l1) || (lambda >= 0.01 && froude < l2) {
        FlowPattern::Segregated
    } else if lambda >= 0.01 && froude >= l2 && froude <= l3 {
        FlowPattern::Transition
    } else if (lambda >= 0.01 && lambda < 0.4 && froude > l3 && froude <= l1)
        || (lambda >= 0.4 && froude > l3 && froude <= l4)
    {
        FlowPattern::Intermittent
    } else if (lambda < 0.4 && froude >= l1) || (lambda >= 0.4 && froude > l4) {
        FlowPattern::Distributed
    } else if froude > l1 {
        // Numerical edge fallback
        FlowPattern::Distributed
    } else {
        FlowPattern::Segregated
    }
}

/// Horizontal holdup `a·λL^b / Fr^c`, clamped to `[λL, 1]`.
fn plain_holdup(a: f64, b: f64, c: f64, lambda: f64, froude: f64) -> f64 {
    (a * lambda.powf(b) / froude.powf(c)).clamp(lambda, 1.0)
}

/// Horizontal (uncorrected) holdup for a pattern; Transition interpolates
/// between its Segregated and Intermittent values with `weight` toward
/// Segregated.
fn horizontal_holdup(pattern: FlowPattern, lambda: f64, froude: f64, weight: f64) -> f64 {
    match pattern {
        FlowPattern::Segregated => plain_holdup(0.98, 0.4846, 0.0868, lambda, froude),
        FlowPattern::Intermittent => plain_holdup(0.845, 0.5351, 0.0173, lambda, froude),
        FlowPattern::Distributed => plain_holdup(1.065, 0.5824, 0.0609, lambda, froude),
        FlowPattern::Transition => {
            let seg = plain_holdup(0.98, 0.4846, 0.0868, lambda, froude);
            let int = plain_holdup(0.845, 0.5351, 0.0173, lambda, froude);
            weight * seg + (1.0 - weight) * int
        }
    }
}

/// `C = (1−λL)·ln(d·λL^e·Nlv^f·Fr^g)` with a non-positive log argument
/// treated as `C = 0`.
fn c_value(d: f64, e: f64, f: f64, g: f64, lambda: f64, nlv: f64, froude: f64) -> f64 {
    let arg = d * lambda.powf(e) * nlv.powf(f) * froude.powf(g);
    if arg <= 0.0 {
        return 0.0;
    }
    (1.0 - lambda) * arg.ln()
}

/// Inclination-correction coefficient C for a pattern and flow direction.
///
/// Downhill flow uses one coefficient set for every pattern; this follows
/// the original correlation tables even though some later references split
/// the downhill Segregated and Intermittent cases.
fn inclination_coefficient(
    pattern: FlowPattern,
    lambda: f64,
    nlv: f64,
    froude: f64,
    uphill: bool,
    weight: f64,
) -> f64 {
    let per_pattern = |p: FlowPattern| -> f64 {
        if !uphill {
            return c_value(4.70, -0.3692, 0.1244, -0.5056, lambda, nlv, froude);
        }
        match p {
            FlowPattern::Segregated => {
                c_value(0.011, -3.768, 3.539, -1.614, lambda, nlv, froude)
            }
            FlowPattern::Intermittent => {
                c_value(2.96, 0.305, -0.4473, 0.0978, lambda, nlv, froude)
            }
            FlowPattern::Distributed | FlowPattern::Transition => 0.0,
        }
    };

    match pattern {
        FlowPattern::Distributed => 0.0,
        FlowPattern::Transition => {
            let seg = per_pattern(FlowPattern::Segregated);
            let int = per_pattern(FlowPattern::Intermittent);
            weight * seg + (1.0 - weight) * int
        }
        _ => per_pattern(pattern),
    }
}

/// Friction multiplier exponent S from `y = λL/α²`.
fn friction_exponent(y: f64) -> f64 {
    if y > 1.0 && y < 1.2 {
        return (2.2 * y - 1.2).ln();
    }
    let ln_y = y.ln();
    if ln_y.abs() < 1e-12 {
        return 0.0;
    }
    ln_y / (-0.0523 + 3.182 * ln_y - 0.8725 * ln_y.powi(2) + 0.01853 * ln_y.powi(4))
}

/// Calculate two-phase pressure drop with the Beggs-Brill correlation.
///
/// # Errors
///
/// Precondition failure if geometry, either phase mass flow, or any of the
/// four flowing-condition phase properties are absent or non-positive.
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
    let surface_tension = inputs.surface_tension_n_m();

    // Step 1: superficial velocities and dimensionless groups
    let area = inputs.flow_area_m2();
    let liquid_volumetric = liquid_flow / liquid_density;
    let gas_volumetric = gas_flow / gas_density;
    let vsl = liquid_volumetric / area;
    let vsg = gas_volumetric / area;
    let mixture_velocity = vsl + vsg;
    let lambda = liquid_volumetric / (liquid_volumetric + gas_volumetric);
    let froude = mixture_velocity * mixture_velocity / (GRAVITY_M_S2 * inputs.diameter_m);

    // Steps 2-3: pattern classification
    let (_, l2, l3, _) = pattern_boundaries(lambda);
    let pattern = classify(lambda, froude);
    let transition_weight = if pattern == FlowPattern::Transition {
        (l3 - froude) / (l3 - l2)
    } else {
        0.0
    };

    // Step 4: horizontal holdup
    let holdup_horizontal = horizontal_holdup(pattern, lambda, froude, transition_weight);

    // Step 5: inclination correction (Payne form)
    let nlv = vsl * (liquid_density / (GRAVITY_M_S2 * surface_tension)).powf(0.25);
    let c = if inputs.elevation_change_m == 0.0 {
        0.0
    } else {
        inclination_coefficient(
            pattern,
            lambda,
            nlv,
            froude,
            inputs.elevation_change_m > 0.0,
            transition_weight,
        )
    };
    let theta = (inputs.elevation_change_m / inputs.length_m)
        .clamp(-1.0, 1.0)
        .asin();
    let sin_term = (1.8 * theta).sin();
    let psi = 1.0 + c * (sin_term - sin_term.powi(3) / 3.0);

    // Step 6: holdup with slip
    let holdup = (holdup_horizontal * psi).clamp(0.0001, 0.9999);

    // Step 7: two-phase friction factor
    let no_slip_density = liquid_density * lambda + gas_density * (1.0 - lambda);
    let no_slip_viscosity = liquid_viscosity * lambda + gas_viscosity * (1.0 - lambda);
    let reynolds =
        no_slip_density * mixture_velocity * inputs.diameter_m / no_slip_viscosity;
    let base_friction = friction_factor(reynolds, inputs.relative_roughness());
    let s = friction_exponent(lambda / (holdup * holdup));
    let two_phase_friction = base_friction * s.exp();

    // Step 8: gradients; slip density for elevation, no-slip for friction
    let slip_density = liquid_density * holdup + gas_density * (1.0 - holdup);
    let elevation_drop = slip_density * GRAVITY_M_S2 * inputs.elevation_change_m;
    let friction_drop = two_phase_friction * no_slip_density * mixture_velocity
        * mixture_velocity
        / (2.0 * inputs.diameter_m)
        * inputs.length_m;
    let outlet_pressure = inputs.inlet_pressure_pa - friction_drop - elevation_drop;

    let mut result = HydraulicResult::single_phase(
        outlet_pressure,
        friction_drop,
        elevation_drop,
        mixture_velocity,
        reynolds,
        two_phase_friction,
        pattern.label(),
    );
    result.liquid_holdup = Some(holdup);
    result.mixture_density_kg_m3 = Some(slip_density);
    result.mixture_viscosity_pa_s = Some(no_slip_viscosity);
    result.superficial_gas_velocity_m_s = Some(vsg);
    result.superficial_liquid_velocity_m_s = Some(vsl);

    // Step 9: correlation-range hints
    if froude > 300.0 && pattern != FlowPattern::Distributed {
        result.warnings.push(format!(
            "Froude number {froude:.0} suggests mist flow; correlation accuracy degrades"
        ));
    }
    if holdup > 0.95 && lambda < 0.5 {
        result.warnings.push(format!(
            "Liquid holdup {holdup:.3} with low liquid fraction suggests liquid accumulation"
        ));
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::GRAVITY_M_S2;

    /// Build inputs hitting a target (λL, Fr) point in a 0.1 m line with
    /// water (1000 kg/m³) and a 10 kg/m³ gas.
    fn segment_at(lambda: f64, froude: f64, elevation_m: f64) -> HydraulicInputs {
        let diameter = 0.1;
        let area = std::f64::consts::PI * diameter * diameter / 4.0;
        let mixture_velocity = (froude * GRAVITY_M_S2 * diameter).sqrt();
        let total_volumetric = mixture_velocity * area;
        let liquid_volumetric = lambda * total_volumetric;
        let gas_volumetric = total_volumetric - liquid_volumetric;

        HydraulicInputs {
            length_m: 100.0,
            elevation_change_m: elevation_m,
            diameter_m: diameter,
            roughness_m: 4.5e-5,
            mass_flow_kg_s: liquid_volumetric * 1000.0 + gas_volumetric * 10.0,
            gas_mass_flow_kg_s: Some(gas_volumetric * 10.0),
            liquid_mass_flow_kg_s: Some(liquid_volumetric * 1000.0),
            inlet_pressure_pa: 2.0e6,
            inlet_temperature_k: 293.15,
            liquid_density_kg_m3: Some(1000.0),
            liquid_viscosity_pa_s: Some(0.001),
            gas_molecular_weight: None,
            gas_z_factor: None,
            gas_viscosity_pa_s: None,
            gas_specific_heat_ratio: None,
            tp_gas_density_kg_m3: Some(10.0),
            tp_gas_viscosity_pa_s: Some(1.2e-5),
            surface_tension_n_m: None,
        }
    }

    #[test]
    fn test_boundary_functions() {
        let (l1, l2, l3, l4) = pattern_boundaries(0.1);
        assert!((l1 - 157.7).abs() < 0.5);
        assert!((l2 - 0.272).abs() < 0.005);
        assert!((l3 - 2.829).abs() < 0.01);
        assert!(l4 > 1.0e6);
    }

    #[test]
    fn test_regime_boundary_sweep() {
        // λL = 0.1: L2 ≈ 0.272, L3 ≈ 2.829. Sweep Fr across both
        // boundaries and require Segregated → Transition → Intermittent
        // with smoothly varying holdup.
        let mut seen = Vec::new();
        let mut previous_holdup: Option<f64> = None;
        let mut fr = 0.20;
        while fr <= 3.5 {
            let result = calculate(&segment_at(0.1, fr, 0.0)).unwrap();
            if seen.last() != Some(&result.flow_regime) {
                seen.push(result.flow_regime.clone());
            }
            let holdup = result.liquid_holdup.unwrap();
            assert!((0.0001..=0.9999).contains(&holdup));
            if let Some(prev) = previous_holdup {
                assert!(
                    (holdup - prev).abs() < 0.02,
                    "holdup jumped from {prev} to {holdup} at Fr = {fr}"
                );
            }
            previous_holdup = Some(holdup);
            fr += 0.05;
        }
        assert_eq!(seen, vec!["Segregated", "Transition", "Intermittent"]);
    }

    #[test]
    fn test_holdup_bounds_over_grid() {
        for lambda in [0.005, 0.05, 0.2, 0.5, 0.9] {
            for froude in [0.01, 0.5, 5.0, 50.0, 400.0] {
                for elevation in [-50.0, 0.0, 50.0] {
                    let result = calculate(&segment_at(lambda, froude, elevation)).unwrap();
                    let holdup = result.liquid_holdup.unwrap();
                    assert!(
                        (0.0001..=0.9999).contains(&holdup),
                        "holdup {holdup} out of bounds at λ={lambda}, Fr={froude}, Δz={elevation}"
                    );
                    assert!(result.success);
                }
            }
        }
    }

    #[test]
    fn test_holdup_never_below_no_slip_when_horizontal() {
        // Horizontal: Ψ = 1, so α = α₀ ≥ λL by the clamp
        for lambda in [0.05, 0.2, 0.6] {
            let result = calculate(&segment_at(lambda, 1.0, 0.0)).unwrap();
            assert!(result.liquid_holdup.unwrap() >= lambda - 1e-12);
        }
    }

    #[test]
    fn test_uphill_increases_segregated_holdup() {
        let flat = calculate(&segment_at(0.1, 0.2, 0.0)).unwrap();
        let uphill = calculate(&segment_at(0.1, 0.2, 50.0)).unwrap();
        assert_eq!(flat.flow_regime, "Segregated");
        assert!(uphill.liquid_holdup.unwrap() > flat.liquid_holdup.unwrap());
    }

    #[test]
    fn test_slip_and_no_slip_densities_in_gradients() {
        // Elevation uses the slip density, friction the no-slip density;
        // recompute both terms independently from the reported diagnostics.
        let inputs = segment_at(0.3, 2.0, 30.0);
        let result = calculate(&inputs).unwrap();

        let holdup = result.liquid_holdup.unwrap();
        let slip_density = 1000.0 * holdup + 10.0 * (1.0 - holdup);
        let expected_elevation = slip_density * GRAVITY_M_S2 * 30.0;
        assert!((result.elevation_drop_pa - expected_elevation).abs() < 1e-6);

        let lambda = 0.3;
        let no_slip_density = 1000.0 * lambda + 10.0 * (1.0 - lambda);
        let vm = result.velocity_m_s;
        let expected_friction = result.friction_factor * no_slip_density * vm * vm
            / (2.0 * inputs.diameter_m)
            * inputs.length_m;
        assert!((result.friction_drop_pa - expected_friction).abs() < 1e-6);
    }

    #[test]
    fn test_decision_table() {
        // Published Beggs-Brill pattern map, spot-checked in each region
        assert_eq!(classify(0.001, 1.0), FlowPattern::Segregated);
        assert_eq!(classify(0.2, 0.001), FlowPattern::Segregated);
        assert_eq!(classify(0.2, 1.0), FlowPattern::Transition);
        assert_eq!(classify(0.2, 5.0), FlowPattern::Intermittent);
        assert_eq!(classify(0.45, 50.0), FlowPattern::Intermittent);
        assert_eq!(classify(0.05, 300.0), FlowPattern::Distributed);
        assert_eq!(classify(0.45, 200.0), FlowPattern::Distributed);
    }

    #[test]
    fn test_liquid_accumulation_warning() {
        // Slow uphill flow at λL = 0.4: α₀ ≈ 0.996, Ψ > 1 → clamped high
        let result = calculate(&segment_at(0.4, 0.005, 10.0)).unwrap();
        let holdup = result.liquid_holdup.unwrap();
        assert!(holdup > 0.95, "holdup = {holdup}");
        assert!(result
            .warnings
            .iter()
            .any(|w| w.contains("liquid accumulation")));
    }

    #[test]
    fn test_friction_exponent_bands() {
        // y inside (1, 1.2) takes the ln(2.2y − 1.2) branch
        let y = 1.1;
        assert!((friction_exponent(y) - (2.2 * y - 1.2_f64).ln()).abs() < 1e-12);
        // y = 1 exactly is S = 0
        assert_eq!(friction_exponent(1.0), 0.0);
        // Far from 1 the quartic denominator applies and stays finite
        let s = friction_exponent(4.0);
        assert!(s.is_finite());
    }

    #[test]
    fn test_superficial_velocities_reported() {
        let result = calculate(&segment_at(0.25, 1.0, 0.0)).unwrap();
        let vsl = result.superficial_liquid_velocity_m_s.unwrap();
        let vsg = result.superficial_gas_velocity_m_s.unwrap();
        assert!((vsl / (vsl + vsg) - 0.25).abs() < 1e-9);
        assert!((result.velocity_m_s - (vsl + vsg)).abs() < 1e-12);
    }

    #[test]
    fn test_missing_surface_tension_uses_default() {
        let mut inputs = segment_at(0.1, 0.2, 50.0);
        inputs.surface_tension_n_m = None;
        let with_default = calculate(&inputs).unwrap();
        inputs.surface_tension_n_m = Some(0.072);
        let explicit = calculate(&inputs).unwrap();
        assert_eq!(
            with_default.liquid_holdup.unwrap().to_bits(),
            explicit.liquid_holdup.unwrap().to_bits()
        );
    }
}
