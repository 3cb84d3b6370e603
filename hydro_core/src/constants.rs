//! # Physical and Solver Constants
//!
//! Shared constants for the hydraulics engine. Solver limits are named here
//! (rather than inlined as literals) so tests can assert termination and
//! tolerance behavior directly.

/// Standard gravitational acceleration (m/s²)
pub const GRAVITY_M_S2: f64 = 9.80665;

/// Universal gas constant (J/(kmol·K)), paired with molecular weight in kg/kmol
pub const R_UNIVERSAL_J_KMOL_K: f64 = 8314.462618;

/// Default gas-liquid surface tension when not supplied (N/m, roughly water/air)
pub const DEFAULT_SURFACE_TENSION_N_M: f64 = 0.072;

/// Reynolds number below which flow is treated as laminar
pub const LAMINAR_RE_LIMIT: f64 = 2000.0;

/// Reynolds number above which flow is treated as fully turbulent
pub const TURBULENT_RE_LIMIT: f64 = 4000.0;

/// Maximum fixed-point iterations for the Colebrook-White solver
pub const COLEBROOK_MAX_ITERATIONS: usize = 20;

/// Convergence tolerance on successive Colebrook friction-factor iterates
pub const COLEBROOK_TOLERANCE: f64 = 1e-6;

/// Floor applied when an iterate would drive the friction factor non-positive
pub const FRICTION_FACTOR_FLOOR: f64 = 1e-6;

/// Typical erosional/service velocity limit for liquid lines (m/s)
pub const LIQUID_VELOCITY_LIMIT_M_S: f64 = 4.5;

/// Mach number above which compressibility effects are significant
pub const MACH_COMPRESSIBILITY_LIMIT: f64 = 0.3;
