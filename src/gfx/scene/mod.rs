//! # Scene Management Module
//!
//! The model hierarchy the viewer operates on, and the operations that move or
//! measure it.
//!
//! ## Key Components
//!
//! - [`SceneNode`] - A node with a local [`Transform`], an optional [`Mesh`] and children
//! - [`SceneGraph`] - The traversal and bounds queries the viewer core needs
//! - [`normalize`] - Recenter and rescale a model into a canonical frame
//! - [`obj`] - Build a scene graph from an OBJ/MTL file
//!
//! ## Usage
//!
//! ```no_run
//! use modelview::gfx::scene::{load_obj, SceneGraph};
//!
//! let model = load_obj("model.obj").unwrap();
//! let bounds = model.world_bounds();
//! println!("Model size: {:?}", bounds.size());
//! ```

pub mod node;
pub mod normalize;
pub mod obj;

// Re-export main types
pub use node::{Mesh, SceneGraph, SceneNode, Transform};
pub use normalize::{auto_center_and_scale, compute_normalization, Normalization};
pub use obj::load_obj;
