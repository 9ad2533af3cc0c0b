//! # Graphics Module
//!
//! Everything the viewer knows about the 3D scene: bounding boxes, camera
//! framing, the model hierarchy and its materials.
//!
//! ## Architecture Overview
//!
//! - **Bounds** ([`bounds`]) - Axis-aligned boxes and the degenerate-size policy
//! - **Camera System** ([`camera`]) - Fit-to-model framing and the orbit camera
//! - **Scene Management** ([`scene`]) - Scene graph, normalization and OBJ import
//! - **Resources** ([`resources`]) - PBR materials and parameter propagation
//!
//! Framing, normalization and propagation are plain functions over these
//! types. They never touch a GPU; the renderer picks up changed materials
//! through their `needs_update` flag and rebuilds its projection from the
//! camera's clip planes.
//!
//! ## Usage
//!
//! ```no_run
//! use modelview::gfx::{
//!     camera::{FramingConfig, OrbitCamera},
//!     resources::{apply_material_params, MaterialParams},
//!     scene::{load_obj, SceneGraph},
//! };
//!
//! let mut model = load_obj("model.obj").unwrap();
//! let fit = FramingConfig::default().fit(&model.world_bounds());
//!
//! let mut camera = OrbitCamera::default();
//! camera.apply_fit(&fit.pose, &fit.limits);
//!
//! apply_material_params(&mut model, &MaterialParams::new(0.8, 0.3, false));
//! ```

pub mod bounds;
pub mod camera;
pub mod resources;
pub mod scene;

// Re-export commonly used types
pub use bounds::BoundingBox;
pub use camera::orbit_camera::OrbitCamera;
