//! # Pipe Materials
//!
//! Absolute-roughness catalog for common pipe materials. Values are the
//! widely tabulated new-pipe figures (e.g. Perry's Chemical Engineers'
//! Handbook); front-ends use this to fill the roughness field from a
//! material pick instead of asking for meters directly.
//!
//! ## Example
//!
//! ```rust
//! use hydro_core::materials::PipeMaterial;
//!
//! let steel = PipeMaterial::CommercialSteel;
//! assert_eq!(steel.roughness_m(), 4.5e-5);
//! ```

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::errors::{HydroError, HydroResult};

/// Pipe materials with tabulated absolute roughness
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PipeMaterial {
    /// Drawn tubing (copper, brass, glass)
    DrawnTubing,
    /// Commercial steel / wrought iron
    CommercialSteel,
    /// Stainless steel
    StainlessSteel,
    /// Galvanized iron
    GalvanizedIron,
    /// Cast iron
    CastIron,
    /// PVC and other smooth plastics
    Pvc,
    /// Concrete (smooth finish)
    Concrete,
}

impl PipeMaterial {
    /// All materials, in display order for UI selection
    pub const ALL: [PipeMaterial; 7] = [
        PipeMaterial::DrawnTubing,
        PipeMaterial::CommercialSteel,
        PipeMaterial::StainlessSteel,
        PipeMaterial::GalvanizedIron,
        PipeMaterial::CastIron,
        PipeMaterial::Pvc,
        PipeMaterial::Concrete,
    ];

    /// Absolute roughness for new pipe (m)
    pub fn roughness_m(&self) -> f64 {
        match self {
            PipeMaterial::DrawnTubing => 1.5e-6,
            PipeMaterial::CommercialSteel => 4.5e-5,
            PipeMaterial::StainlessSteel => 1.5e-5,
            PipeMaterial::GalvanizedIron => 1.5e-4,
            PipeMaterial::CastIron => 2.6e-4,
            PipeMaterial::Pvc => 1.5e-6,
            PipeMaterial::Concrete => 1.0e-3,
        }
    }

    /// Display name
    pub fn name(&self) -> &'static str {
        match self {
            PipeMaterial::DrawnTubing => "Drawn tubing",
            PipeMaterial::CommercialSteel => "Commercial steel",
            PipeMaterial::StainlessSteel => "Stainless steel",
            PipeMaterial::GalvanizedIron => "Galvanized iron",
            PipeMaterial::CastIron => "Cast iron",
            PipeMaterial::Pvc => "PVC",
            PipeMaterial::Concrete => "Concrete",
        }
    }

    /// Look up a material from its display name (case-insensitive)
    pub fn from_name(name: &str) -> HydroResult<Self> {
        BY_NAME
            .get(name.to_lowercase().as_str())
            .copied()
            .ok_or_else(|| {
                HydroError::invalid_input("material", name, "Unknown pipe material")
            })
    }
}

static BY_NAME: Lazy<HashMap<String, PipeMaterial>> = Lazy::new(|| {
    PipeMaterial::ALL
        .iter()
        .map(|m| (m.name().to_lowercase(), *m))
        .collect()
});
