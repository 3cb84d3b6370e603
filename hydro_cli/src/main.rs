//! # Pipeflow CLI Application
//!
//! Terminal front-end for the pipe-flow hydraulics engine. Prompts for a
//! pipe segment, runs the selected model through the dispatch boundary,
//! and prints a formatted result block plus the JSON payload.

use std::io::{self, BufRead, Write};

use hydro_core::materials::PipeMaterial;
use hydro_core::units::{Bar, Celsius, Kelvin, Pascals};
use hydro_core::{dispatch, CalculationType, HydraulicInputs};

fn prompt_f64(prompt: &str, default: f64) -> f64 {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return default;
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return default;
    }

    input.trim().parse().unwrap_or(default)
}

fn prompt_line(prompt: &str, default: &str) -> String {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return default.to_string();
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return default.to_string();
    }

    let trimmed = input.trim();
    if trimmed.is_empty() {
        default.to_string()
    } else {
        trimmed.to_string()
    }
}

fn main() {
    println!("Pipeflow CLI - Pipe Hydraulics Calculator");
    println!("=========================================");
    println!();
    println!("Calculation types: gas, liquid, mixed-beggs-brill, mixed-homogeneous");

    let calculation: CalculationType = match prompt_line("Calculation type [liquid]: ", "liquid")
        .parse()
    {
        Ok(calc) => calc,
        Err(e) => {
            eprintln!("Error: {}", e);
            return;
        }
    };

    println!();
    println!("Pipe materials:");
    for material in PipeMaterial::ALL {
        println!("  {} ({:.1e} m)", material.name(), material.roughness_m());
    }
    let material_name = prompt_line("Pipe material [Commercial steel]: ", "Commercial steel");
    let roughness_m = match PipeMaterial::from_name(&material_name) {
        Ok(material) => material.roughness_m(),
        Err(_) => prompt_f64("Absolute roughness (m) [4.5e-5]: ", 4.5e-5),
    };

    println!();
    let length_m = prompt_f64("Pipe length (m) [100.0]: ", 100.0);
    let elevation_change_m = prompt_f64("Elevation change (m, + = uphill) [0.0]: ", 0.0);
    let diameter_m = prompt_f64("Inner diameter (m) [0.1]: ", 0.1);
    let inlet_pressure: Pascals = Bar(prompt_f64("Inlet pressure (bar abs) [5.0]: ", 5.0)).into();
    let inlet_temperature: Kelvin =
        Celsius(prompt_f64("Inlet temperature (degC) [20.0]: ", 20.0)).into();

    let mut inputs = HydraulicInputs {
        length_m,
        elevation_change_m,
        diameter_m,
        roughness_m,
        mass_flow_kg_s: 0.0,
        gas_mass_flow_kg_s: None,
        liquid_mass_flow_kg_s: None,
        inlet_pressure_pa: inlet_pressure.0,
        inlet_temperature_k: inlet_temperature.0,
        liquid_density_kg_m3: None,
        liquid_viscosity_pa_s: None,
        gas_molecular_weight: None,
        gas_z_factor: None,
        gas_viscosity_pa_s: None,
        gas_specific_heat_ratio: None,
        tp_gas_density_kg_m3: None,
        tp_gas_viscosity_pa_s: None,
        surface_tension_n_m: None,
    };

    println!();
    match calculation {
        CalculationType::Liquid => {
            inputs.mass_flow_kg_s = prompt_f64("Mass flow (kg/s) [20.0]: ", 20.0);
            inputs.liquid_density_kg_m3 = Some(prompt_f64("Density (kg/m3) [1000.0]: ", 1000.0));
            inputs.liquid_viscosity_pa_s =
                Some(prompt_f64("Viscosity (Pa.s) [0.001]: ", 0.001));
        }
        CalculationType::Gas => {
            inputs.mass_flow_kg_s = prompt_f64("Mass flow (kg/s) [5.0]: ", 5.0);
            inputs.gas_molecular_weight =
                Some(prompt_f64("Molecular weight (kg/kmol) [18.0]: ", 18.0));
            inputs.gas_z_factor = Some(prompt_f64("Compressibility Z [1.0]: ", 1.0));
            inputs.gas_viscosity_pa_s = Some(prompt_f64("Viscosity (Pa.s) [1.0e-5]: ", 1.0e-5));
            inputs.gas_specific_heat_ratio = Some(prompt_f64("Cp/Cv ratio [1.3]: ", 1.3));
        }
        CalculationType::MixedBeggsBrill | CalculationType::MixedHomogeneous => {
            inputs.liquid_mass_flow_kg_s = Some(prompt_f64("Liquid mass flow (kg/s) [5.0]: ", 5.0));
            inputs.gas_mass_flow_kg_s = Some(prompt_f64("Gas mass flow (kg/s) [0.5]: ", 0.5));
            inputs.liquid_density_kg_m3 =
                Some(prompt_f64("Liquid density (kg/m3) [1000.0]: ", 1000.0));
            inputs.liquid_viscosity_pa_s =
                Some(prompt_f64("Liquid viscosity (Pa.s) [0.001]: ", 0.001));
            inputs.tp_gas_density_kg_m3 =
                Some(prompt_f64("Gas density at conditions (kg/m3) [10.0]: ", 10.0));
            inputs.tp_gas_viscosity_pa_s =
                Some(prompt_f64("Gas viscosity (Pa.s) [1.2e-5]: ", 1.2e-5));
            inputs.surface_tension_n_m =
                Some(prompt_f64("Surface tension (N/m) [0.072]: ", 0.072));
            inputs.mass_flow_kg_s = inputs.liquid_mass_flow_kg_s.unwrap_or(0.0)
                + inputs.gas_mass_flow_kg_s.unwrap_or(0.0);
        }
    }

    println!();
    println!("Running {} model...", calculation);
    println!();

    match dispatch(calculation, &inputs) {
        Ok(result) => {
            println!("═══════════════════════════════════════");
            println!("  HYDRAULIC CALCULATION RESULTS");
            println!("═══════════════════════════════════════");
            println!();
            println!("Status:      {} ({})", status_icon(result.success), result.flow_regime);
            println!("Outlet P:    {:.3} bar", Bar::from(Pascals(result.outlet_pressure_pa)).0);
            println!("Total ΔP:    {:.3} bar", Bar::from(Pascals(result.pressure_drop_pa)).0);
            println!("  friction:  {:.3} bar", Bar::from(Pascals(result.friction_drop_pa)).0);
            println!("  elevation: {:.3} bar", Bar::from(Pascals(result.elevation_drop_pa)).0);
            println!("Velocity:    {:.2} m/s", result.velocity_m_s);
            println!("Reynolds:    {:.3e}", result.reynolds_number);
            println!("Friction f:  {:.5}", result.friction_factor);
            if let Some(mach) = result.mach_number {
                println!("Mach:        {:.3}", mach);
            }
            if let Some(holdup) = result.liquid_holdup {
                println!("Holdup:      {:.4}", holdup);
            }
            if !result.warnings.is_empty() {
                println!();
                println!("Warnings:");
                for warning in &result.warnings {
                    println!("  - {}", warning);
                }
            }

            println!();
            println!("JSON Output (for LLM/API use):");
            if let Ok(json) = serde_json::to_string_pretty(&result) {
                println!("{}", json);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            if let Ok(json) = serde_json::to_string_pretty(&e) {
                eprintln!();
                eprintln!("Error JSON:");
                eprintln!("{}", json);
            }
        }
    }
}

fn status_icon(success: bool) -> &'static str {
    if success {
        "[OK]"
    } else {
        "[NOT VIABLE]"
    }
}
