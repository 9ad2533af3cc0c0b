// src/lib.rs
//! Modelview
//!
//! Model viewer core for the Haggis engine: frames a loaded model with an orbit
//! camera, optionally normalizes it into a canonical frame, and pushes
//! metalness/roughness settings onto its PBR materials.

pub mod error;
pub mod gfx;
pub mod prelude;
pub mod viewer;

// Re-export main types for convenience
pub use error::{Result, ViewerError};
pub use viewer::ViewerState;
