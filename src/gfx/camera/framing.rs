//! # Camera Framing
//!
//! Computes a camera pose, clip planes and orbit distance limits that keep a
//! model fully in view. The caller assigns the result onto a live camera, see
//! [`OrbitCamera::apply_fit`](super::orbit_camera::OrbitCamera::apply_fit).
//!
//! ## Algorithm
//!
//! With `d` the largest extent of the model's bounding box:
//!
//! - fit distance: `d * fit_offset / tan(fov / 2)`
//! - camera position: `center + (0, d * 0.3, fit_distance)`
//! - clip planes: `d / 100` and `d * 20`
//! - orbit limits: `d * 0.1` to `d * 10`, around the box center
//!
//! A degenerate box (see [`BoundingBox::fit_dimension`]) is framed as if its
//! largest extent were `1.0`.

use cgmath::{Deg, Rad, Vector3};

use crate::error::{Result, ViewerError};
use crate::gfx::bounds::BoundingBox;

/// Camera placement produced by a fit
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    pub position: Vector3<f32>,
    /// Look-at target
    pub target: Vector3<f32>,
    pub near: f32,
    pub far: f32,
    /// Vertical field of view
    pub fov: Rad<f32>,
}

impl CameraPose {
    /// Distance from the camera to its look-at target
    pub fn distance(&self) -> f32 {
        let offset = self.position - self.target;
        (offset.x * offset.x + offset.y * offset.y + offset.z * offset.z).sqrt()
    }
}

/// Permitted camera-to-target distance range for orbit controls
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitLimits {
    pub min_distance: f32,
    pub max_distance: f32,
}

impl OrbitLimits {
    /// Clamps into the range. Never panics, even for an inverted range.
    pub fn clamp(&self, distance: f32) -> f32 {
        distance.max(self.min_distance).min(self.max_distance)
    }
}

/// Everything a fit produces, including the intermediate values
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitResult {
    pub pose: CameraPose,
    pub limits: OrbitLimits,
    pub fit_distance: f32,
    /// Largest extent used for the fit, after the degenerate floor
    pub max_dimension: f32,
    /// True when the floor replaced a degenerate extent
    pub degenerate: bool,
}

/// Tunables for [`FramingConfig::fit`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FramingConfig {
    /// Vertical field of view, strictly between 0 and pi
    pub fov: Rad<f32>,
    /// Margin multiplier around the model
    pub fit_offset: f32,
    /// Camera rise as a fraction of the largest extent
    pub elevation: f32,
    pub near_divisor: f32,
    pub far_factor: f32,
    pub orbit_min_factor: f32,
    pub orbit_max_factor: f32,
    /// Largest extent substituted for degenerate boxes
    pub degenerate_floor: f32,
}

impl Default for FramingConfig {
    fn default() -> Self {
        Self {
            fov: Deg(45.0).into(),
            fit_offset: 1.5,
            elevation: 0.3,
            near_divisor: 100.0,
            far_factor: 20.0,
            orbit_min_factor: 0.1,
            orbit_max_factor: 10.0,
            degenerate_floor: 1.0,
        }
    }
}

impl FramingConfig {
    /// Builder pattern: Set the vertical field of view
    pub fn with_fov(mut self, fov: impl Into<Rad<f32>>) -> Self {
        self.fov = fov.into();
        self
    }

    /// Builder pattern: Set the margin multiplier
    pub fn with_fit_offset(mut self, fit_offset: f32) -> Self {
        self.fit_offset = fit_offset;
        self
    }

    /// Builder pattern: Set the camera rise factor
    pub fn with_elevation(mut self, elevation: f32) -> Self {
        self.elevation = elevation;
        self
    }

    /// Builder pattern: Set the orbit distance factors
    pub fn with_orbit_factors(mut self, min_factor: f32, max_factor: f32) -> Self {
        self.orbit_min_factor = min_factor;
        self.orbit_max_factor = max_factor;
        self
    }

    /// Checks the preconditions [`fit`](Self::fit) relies on
    pub fn validate(&self) -> Result<()> {
        let fov = self.fov.0;
        if !(fov.is_finite() && fov > 0.0 && fov < std::f32::consts::PI) {
            return Err(ViewerError::InvalidFraming(format!(
                "field of view must lie in (0, pi) radians, got {fov}"
            )));
        }
        if !(self.fit_offset.is_finite() && self.fit_offset > 1.0) {
            return Err(ViewerError::InvalidFraming(format!(
                "fit offset must be greater than 1.0, got {}",
                self.fit_offset
            )));
        }
        if !(self.near_divisor > 0.0 && self.far_factor > 0.0) {
            return Err(ViewerError::InvalidFraming(
                "clip plane factors must be positive".to_string(),
            ));
        }
        if !(self.orbit_min_factor > 0.0 && self.orbit_min_factor < self.orbit_max_factor) {
            return Err(ViewerError::InvalidFraming(format!(
                "orbit factors must satisfy 0 < min < max, got {} and {}",
                self.orbit_min_factor, self.orbit_max_factor
            )));
        }
        if !(self.degenerate_floor.is_finite() && self.degenerate_floor > 0.0) {
            return Err(ViewerError::InvalidFraming(format!(
                "degenerate floor must be positive, got {}",
                self.degenerate_floor
            )));
        }
        Ok(())
    }

    /// Frames `bounds` with this configuration.
    ///
    /// Pure: nothing is assigned to a camera here. Invalid configurations are
    /// logged and computed anyway; call [`validate`](Self::validate) first to
    /// reject them.
    pub fn fit(&self, bounds: &BoundingBox) -> FitResult {
        if let Err(err) = self.validate() {
            log::warn!("Framing with invalid configuration: {err}");
        }

        let (max_dimension, degenerate) = match bounds.fit_dimension() {
            Some(max_dim) => (max_dim, false),
            None => {
                log::debug!(
                    "Degenerate bounds, framing with floor extent {}",
                    self.degenerate_floor
                );
                (self.degenerate_floor, true)
            }
        };

        let center = bounds.center();
        let fit_distance = (max_dimension * self.fit_offset) / (self.fov.0 * 0.5).tan();

        let pose = CameraPose {
            position: center + Vector3::new(0.0, max_dimension * self.elevation, fit_distance),
            target: center,
            near: max_dimension / self.near_divisor,
            far: max_dimension * self.far_factor,
            fov: self.fov,
        };
        let limits = OrbitLimits {
            min_distance: max_dimension * self.orbit_min_factor,
            max_distance: max_dimension * self.orbit_max_factor,
        };

        FitResult {
            pose,
            limits,
            fit_distance,
            max_dimension,
            degenerate,
        }
    }
}

/// Fits a camera to `bounds` with the default framing factors.
///
/// `fov` is the vertical field of view and `fit_offset` the margin multiplier
/// (1.5 in the viewer).
pub fn compute_fit_pose(
    bounds: &BoundingBox,
    fov: Rad<f32>,
    fit_offset: f32,
) -> (CameraPose, OrbitLimits) {
    let result = FramingConfig::default()
        .with_fov(fov)
        .with_fit_offset(fit_offset)
        .fit(bounds);
    (result.pose, result.limits)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    fn box_from_center_size(center: Vector3<f32>, size: Vector3<f32>) -> BoundingBox {
        BoundingBox::new(center - size * 0.5, center + size * 0.5)
    }

    fn approx(a: f32, b: f32, eps: f32) -> bool {
        (a - b).abs() < eps
    }

    #[test]
    fn test_reference_scenario() {
        let bounds = box_from_center_size(Vector3::new(0.0, 1.0, 0.0), Vector3::new(2.0, 4.0, 2.0));
        let (pose, limits) = compute_fit_pose(&bounds, Rad(std::f32::consts::FRAC_PI_4), 1.5);

        assert!(approx(pose.position.x, 0.0, 1e-5));
        assert!(approx(pose.position.y, 2.2, 1e-5));
        assert!(approx(pose.position.z, 14.485, 1e-2));
        assert_eq!(pose.target, Vector3::new(0.0, 1.0, 0.0));
        assert!(approx(pose.near, 0.04, 1e-6));
        assert!(approx(pose.far, 80.0, 1e-4));
        assert!(approx(limits.min_distance, 0.4, 1e-6));
        assert!(approx(limits.max_distance, 40.0, 1e-4));
    }

    #[test]
    fn test_degenerate_box_uses_floor() {
        let point = BoundingBox::from_points(&[Vector3::new(2.0, 3.0, 4.0)]);
        let result = FramingConfig::default().fit(&point);

        assert!(result.degenerate);
        assert_eq!(result.max_dimension, 1.0);
        assert!(result.fit_distance.is_finite() && result.fit_distance > 0.0);
        assert!(result.pose.near < result.pose.far);
        assert_eq!(result.pose.target, Vector3::new(2.0, 3.0, 4.0));

        let empty = FramingConfig::default().fit(&BoundingBox::empty());
        assert!(empty.degenerate);
        assert!(empty.pose.position.z.is_finite());
    }

    #[test]
    fn test_smallest_valid_box_keeps_limits_positive() {
        let at_limit = BoundingBox::new(
            Vector3::new(0.0, 0.0, 0.0),
            Vector3::new(crate::gfx::bounds::MIN_FIT_DIMENSION, 0.0, 0.0),
        );
        let result = FramingConfig::default().fit(&at_limit);
        assert!(!result.degenerate);
        assert!(result.pose.near.is_normal() && result.pose.near < result.pose.far);
        assert!(result.limits.min_distance.is_normal());
        assert!(result.limits.min_distance < result.limits.max_distance);

        // Subnormal extents fall back to the floor instead of rounding to zero
        let subnormal = BoundingBox::new(Vector3::new(0.0, 0.0, 0.0), Vector3::new(1e-45, 0.0, 0.0));
        let (pose, limits) = compute_fit_pose(&subnormal, Deg(45.0).into(), 1.5);
        assert!(pose.near > 0.0 && pose.near < pose.far);
        assert!(0.0 < limits.min_distance && limits.min_distance < limits.max_distance);
    }

    #[test]
    fn test_fit_distance_is_linear_in_offset() {
        let bounds = box_from_center_size(Vector3::new(5.0, -1.0, 2.0), Vector3::new(3.0, 1.0, 7.0));
        let config = FramingConfig::default();
        let single = config.with_fit_offset(1.5).fit(&bounds);
        let double = config.with_fit_offset(3.0).fit(&bounds);
        assert!(approx(double.fit_distance, 2.0 * single.fit_distance, 1e-3));
    }

    #[test]
    fn test_ordering_holds_for_random_boxes() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        for _ in 0..500 {
            let center = Vector3::new(
                rng.random_range(-100.0..100.0),
                rng.random_range(-100.0..100.0),
                rng.random_range(-100.0..100.0),
            );
            let size = Vector3::new(
                rng.random_range(0.001..50.0),
                rng.random_range(0.0..50.0),
                rng.random_range(0.0..50.0),
            );
            let fov = Rad(rng.random_range(0.1..3.0));
            let offset = rng.random_range(1.01..4.0);
            let (pose, limits) = compute_fit_pose(&box_from_center_size(center, size), fov, offset);

            assert!(pose.near < pose.far);
            assert!(0.0 < limits.min_distance && limits.min_distance < limits.max_distance);
            assert!(pose.distance().is_finite());
        }
    }

    #[test]
    fn test_camera_sits_in_front_and_above() {
        let bounds = box_from_center_size(Vector3::new(0.0, 0.0, 0.0), Vector3::new(1.0, 1.0, 1.0));
        let result = FramingConfig::default().fit(&bounds);
        assert!(result.pose.position.z > bounds.max.z);
        assert!(result.pose.position.y > 0.0);
        assert!(approx(result.pose.position.y, 0.3, 1e-6));
    }

    #[test]
    fn test_validate_rejects_bad_inputs() {
        assert!(FramingConfig::default().validate().is_ok());
        assert!(FramingConfig::default().with_fov(Rad(0.0)).validate().is_err());
        assert!(FramingConfig::default()
            .with_fov(Rad(std::f32::consts::PI))
            .validate()
            .is_err());
        assert!(FramingConfig::default().with_fit_offset(0.5).validate().is_err());
        assert!(FramingConfig::default()
            .with_orbit_factors(2.0, 1.0)
            .validate()
            .is_err());
    }

    #[test]
    fn test_limits_clamp() {
        let limits = OrbitLimits {
            min_distance: 0.4,
            max_distance: 40.0,
        };
        assert_eq!(limits.clamp(0.1), 0.4);
        assert_eq!(limits.clamp(100.0), 40.0);
        assert_eq!(limits.clamp(12.0), 12.0);
    }
}
