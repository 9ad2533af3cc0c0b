pub mod framing;
pub mod orbit_camera;

// Re-export main types
pub use framing::{compute_fit_pose, CameraPose, FitResult, FramingConfig, OrbitLimits};
pub use orbit_camera::{OrbitCamera, OrbitCameraBounds};
