//! # hydro_core - Pipe-Flow Hydraulics Calculation Engine
//!
//! `hydro_core` is the computational heart of Pipeflow, providing pressure
//! drop, velocity, flow-regime, and diagnostic calculations for a single
//! pipe segment: single-phase liquid, single-phase compressible gas, and
//! two-phase gas+liquid flow.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: every model is a pure function of its inputs
//! - **JSON-First**: all boundary types implement Serialize/Deserialize
//! - **Rich Errors**: structured precondition errors, not just strings
//! - **Failure as Data**: choked/vacuum compressible flow is a
//!   `success = false` result, never an `Err`
//!
//! Inputs and outputs are SI throughout; callers convert display units at
//! the boundary (see [`units`]).
//!
//! ## Quick Start
//!
//! ```rust
//! use hydro_core::{dispatch, CalculationType, HydraulicInputs};
//!
//! let inputs = HydraulicInputs {
//!     length_m: 100.0,
//!     elevation_change_m: 0.0,
//!     diameter_m: 0.1,
//!     roughness_m: 4.5e-5,
//!     mass_flow_kg_s: 20.0,
//!     gas_mass_flow_kg_s: None,
//!     liquid_mass_flow_kg_s: None,
//!     inlet_pressure_pa: 5.0e5,
//!     inlet_temperature_k: 293.15,
//!     liquid_density_kg_m3: Some(1000.0),
//!     liquid_viscosity_pa_s: Some(0.001),
//!     gas_molecular_weight: None,
//!     gas_z_factor: None,
//!     gas_viscosity_pa_s: None,
//!     gas_specific_heat_ratio: None,
//!     tp_gas_density_kg_m3: None,
//!     tp_gas_viscosity_pa_s: None,
//!     surface_tension_n_m: None,
//! };
//!
//! let result = dispatch(CalculationType::Liquid, &inputs).unwrap();
//! assert!(result.success);
//! println!("ΔP = {:.0} Pa ({})", result.pressure_drop_pa, result.flow_regime);
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - the four flow models, friction solver, and dispatch
//! - [`inputs`] / [`results`] - the shared data contracts
//! - [`materials`] - pipe roughness catalog
//! - [`units`] - boundary unit conversions
//! - [`constants`] - physical and solver constants
//! - [`errors`] - structured error types

pub mod calculations;
pub mod constants;
pub mod errors;
pub mod inputs;
pub mod materials;
pub mod results;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::{dispatch, CalculationType, FlowPattern};
pub use errors::{HydroError, HydroResult};
pub use inputs::HydraulicInputs;
pub use results::HydraulicResult;
