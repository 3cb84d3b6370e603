//! # Unit Types
//!
//! Type-safe wrappers for the unit conversions at the engine boundary.
//! The models themselves work in coherent SI (Pa, K, m, kg/s); these
//! newtypes let front-ends accept field units (bar, °C, mm, kg/h) and
//! convert explicitly, with compile-time safety against mixing them up.
//!
//! ## Design Philosophy
//!
//! Simple `f64` newtypes rather than a full units library:
//! - the engine uses one coherent unit set internally
//! - JSON serialization stays clean (just numbers)
//! - minimal runtime overhead
//!
//! ## Example
//!
//! ```rust
//! use hydro_core::units::{Bar, Pascals, Celsius, Kelvin};
//!
//! let inlet: Pascals = Bar(5.0).into();
//! assert_eq!(inlet.0, 5.0e5);
//!
//! let temperature: Kelvin = Celsius(20.0).into();
//! assert!((temperature.0 - 293.15).abs() < 1e-12);
//! ```

use serde::{Deserialize, Serialize};

// ============================================================================
// Pressure Units
// ============================================================================

/// Absolute pressure in pascals
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pascals(pub f64);

/// Absolute pressure in bar
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Bar(pub f64);

/// Absolute pressure in kilopascals
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Kilopascals(pub f64);

impl From<Bar> for Pascals {
    fn from(bar: Bar) -> Self {
        Pascals(bar.0 * 1.0e5)
    }
}

impl From<Pascals> for Bar {
    fn from(pa: Pascals) -> Self {
        Bar(pa.0 / 1.0e5)
    }
}

impl From<Kilopascals> for Pascals {
    fn from(kpa: Kilopascals) -> Self {
        Pascals(kpa.0 * 1.0e3)
    }
}

impl From<Pascals> for Kilopascals {
    fn from(pa: Pascals) -> Self {
        Kilopascals(pa.0 / 1.0e3)
    }
}

// ============================================================================
// Temperature Units
// ============================================================================

/// Absolute temperature in kelvin
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Kelvin(pub f64);

/// Temperature in degrees Celsius
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Celsius(pub f64);

impl From<Celsius> for Kelvin {
    fn from(c: Celsius) -> Self {
        Kelvin(c.0 + 273.15)
    }
}

impl From<Kelvin> for Celsius {
    fn from(k: Kelvin) -> Self {
        Celsius(k.0 - 273.15)
    }
}

// ============================================================================
// Length Units
// ============================================================================

/// Length in meters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Meters(pub f64);

/// Length in millimeters (pipe bores are quoted in mm)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Millimeters(pub f64);

impl From<Millimeters> for Meters {
    fn from(mm: Millimeters) -> Self {
        Meters(mm.0 / 1000.0)
    }
}

impl From<Meters> for Millimeters {
    fn from(m: Meters) -> Self {
        Millimeters(m.0 * 1000.0)
    }
}

// ============================================================================
// Mass Flow Units
// ============================================================================

/// Mass flow in kilograms per second
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KgPerSecond(pub f64);

/// Mass flow in kilograms per hour (datasheet convention)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KgPerHour(pub f64);

impl From<KgPerHour> for KgPerSecond {
    fn from(kgh: KgPerHour) -> Self {
        KgPerSecond(kgh.0 / 3600.0)
    }
}

impl From<KgPerSecond> for KgPerHour {
    fn from(kgs: KgPerSecond) -> Self {
        KgPerHour(kgs.0 * 3600.0)
    }
}
