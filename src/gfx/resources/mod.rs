// src/gfx/resources/mod.rs
//! Material resources
//!
//! Material definitions and the propagation of viewer material settings onto them.

pub mod material;
pub mod propagation;

// Re-export main types
pub use material::{Material, MaterialKind, MaterialRef, PbrParams};
pub use propagation::{
    apply_material_params, apply_material_params_with_presets, tweak_material,
    tweak_material_with_presets, EnvironmentPresets, MaterialParams, PropagationReport,
};
