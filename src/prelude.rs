//! # Modelview Prelude
//!
//! Commonly used types and functions in one import.
//!
//! ```no_run
//! use modelview::prelude::*;
//!
//! let mut viewer = ViewerState::new();
//! let model = load_obj("model.obj").unwrap();
//! let fit = viewer.load_model(model);
//! println!("Camera at {:?}", fit.pose.position);
//! ```

pub use crate::error::{Result, ViewerError};
pub use crate::gfx::{
    bounds::BoundingBox,
    camera::{
        compute_fit_pose, CameraPose, FitResult, FramingConfig, OrbitCamera, OrbitCameraBounds,
        OrbitLimits,
    },
    resources::{
        apply_material_params, tweak_material, EnvironmentPresets, Material, MaterialKind,
        MaterialParams, MaterialRef, PbrParams, PropagationReport,
    },
    scene::{
        auto_center_and_scale, compute_normalization, load_obj, Mesh, Normalization, SceneGraph,
        SceneNode, Transform,
    },
};
pub use crate::viewer::{BackgroundMode, EnvironmentMap, ViewerState};

// Math types used throughout the public API
pub use cgmath::{Deg, Rad, Vector3};
