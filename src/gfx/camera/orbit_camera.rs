use cgmath::*;

use super::framing::{CameraPose, OrbitLimits};

/// Smallest gap between the clip planes the projection accepts
const MIN_CLIP_SPAN: f32 = 1e-6;

/// Orbit camera circling a look-at target.
///
/// The eye is always derived from `distance`, `pitch` and `yaw` around
/// `target`; the distance is kept inside `bounds`.
#[derive(Debug, Clone, Copy)]
pub struct OrbitCamera {
    pub distance: f32,
    pub pitch: f32,
    pub yaw: f32,
    pub eye: Vector3<f32>,
    pub target: Vector3<f32>,
    pub up: Vector3<f32>,
    pub bounds: OrbitCameraBounds,
    pub aspect: f32,
    pub fovy: Rad<f32>,
    pub znear: f32,
    pub zfar: f32,
}

impl OrbitCamera {
    pub fn new(distance: f32, pitch: f32, yaw: f32, target: Vector3<f32>) -> Self {
        let mut camera = Self {
            distance,
            pitch,
            yaw,
            eye: Vector3::zero(), // Will be auto-calculated in `update()` nevertheless.
            target,
            up: Vector3::unit_y(),
            bounds: OrbitCameraBounds::default(),
            aspect: 16.0 / 9.0,
            fovy: Rad(std::f32::consts::PI / 4.0),
            znear: 0.1,
            zfar: 1000.0,
        };
        camera.update();
        camera
    }

    pub fn reset_to_default(&mut self) {
        self.distance = 8.0;
        self.pitch = 0.4; // Slight downward angle
        self.yaw = 0.2;
        self.target = Vector3::zero();
        self.bounds = OrbitCameraBounds::default();

        self.update();
    }

    /// Moves the camera onto a fitted pose and installs its distance limits.
    ///
    /// Clip planes and field of view are copied as-is; the renderer must
    /// rebuild its projection afterwards.
    pub fn apply_fit(&mut self, pose: &CameraPose, limits: &OrbitLimits) {
        let offset = pose.position - pose.target;
        let distance = offset.magnitude();

        self.target = pose.target;
        self.fovy = pose.fov;
        self.znear = pose.near;
        self.zfar = pose.far;
        self.bounds.min_distance = Some(limits.min_distance);
        self.bounds.max_distance = Some(limits.max_distance);

        if distance > f32::EPSILON {
            self.pitch = (offset.y / distance)
                .asin()
                .clamp(self.bounds.min_pitch, self.bounds.max_pitch);
            self.yaw = offset.x.atan2(offset.z);
        }
        // The fitted pose may sit outside the orbit range; the range wins.
        self.distance = limits.clamp(distance);
        self.update();
    }

    pub fn set_distance(&mut self, distance: f32) {
        self.distance = distance
            .max(self.bounds.min_distance.unwrap_or(f32::EPSILON))
            .min(self.bounds.max_distance.unwrap_or(f32::MAX));
        self.update();
    }

    pub fn add_distance(&mut self, delta: f32) {
        // Proportional so fitted models of any scale zoom at the same rate
        let corrected_zoom = self.distance * 0.1 * delta;
        self.set_distance(self.distance + corrected_zoom);
    }

    pub fn set_pitch(&mut self, pitch: f32) {
        self.pitch = pitch.clamp(self.bounds.min_pitch, self.bounds.max_pitch);
        self.update();
    }

    pub fn add_pitch(&mut self, delta: f32) {
        self.set_pitch(self.pitch + delta);
    }

    pub fn set_yaw(&mut self, yaw: f32) {
        let mut bounded_yaw = yaw;
        if let Some(min_yaw) = self.bounds.min_yaw {
            bounded_yaw = bounded_yaw.max(min_yaw);
        }
        if let Some(max_yaw) = self.bounds.max_yaw {
            bounded_yaw = bounded_yaw.min(max_yaw);
        }
        self.yaw = bounded_yaw;
        self.update();
    }

    pub fn add_yaw(&mut self, delta: f32) {
        self.set_yaw(self.yaw + delta);
    }

    /// Pans the camera relative to the current view direction
    /// delta.0 = horizontal pan (left/right relative to camera view)
    /// delta.1 = vertical pan (up/down relative to camera view)
    pub fn pan(&mut self, delta: (f32, f32)) {
        let forward = (self.target - self.eye).normalize();
        let right = forward.cross(self.up).normalize();
        let up = right.cross(forward).normalize();

        // Scale pan movement by distance for consistent feel at all zoom levels
        let pan_scale = self.distance * 0.1;
        let movement = right * delta.0 * pan_scale + up * delta.1 * pan_scale;

        // Move both eye and target to maintain the view direction
        self.eye += movement;
        self.target += movement;
    }

    /// Keeps the aspect ratio in step with the viewport. A zero-sized
    /// viewport (minimized window) leaves it unchanged.
    pub fn resize_projection(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.aspect = width as f32 / height as f32;
    }

    /// Right-handed view-projection matrix in OpenGL clip space.
    ///
    /// Clip planes closer than the projection can resolve are pushed apart.
    pub fn view_projection_matrix(&self) -> Matrix4<f32> {
        let eye = Point3::from_vec(self.eye);
        let target = Point3::from_vec(self.target);
        let view = Matrix4::look_at_rh(eye, target, self.up);

        let znear = self.znear.max(f32::MIN_POSITIVE);
        let zfar = if self.zfar - znear > MIN_CLIP_SPAN {
            self.zfar
        } else {
            znear + znear.max(MIN_CLIP_SPAN)
        };
        perspective(self.fovy, self.aspect, znear, zfar) * view
    }

    /// Updates the camera after changing `distance`, `pitch` or `yaw`.
    fn update(&mut self) {
        self.eye =
            calculate_cartesian_eye_position(self.pitch, self.yaw, self.distance, self.target);
    }
}

#[derive(Debug, Clone, Copy)]
pub struct OrbitCameraBounds {
    pub min_distance: Option<f32>,
    pub max_distance: Option<f32>,
    pub min_pitch: f32,
    pub max_pitch: f32,
    pub min_yaw: Option<f32>,
    pub max_yaw: Option<f32>,
}

impl Default for OrbitCameraBounds {
    fn default() -> Self {
        Self {
            min_distance: None,
            max_distance: Some(16.0),
            min_pitch: -std::f32::consts::PI / 2.0 + f32::EPSILON,
            max_pitch: std::f32::consts::PI / 2.0 - f32::EPSILON,
            min_yaw: None,
            max_yaw: None,
        }
    }
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self::new(8.0, 0.4, 0.2, Vector3::zero())
    }
}

fn calculate_cartesian_eye_position(
    pitch: f32,
    yaw: f32,
    distance: f32,
    target: Vector3<f32>,
) -> Vector3<f32> {
    Vector3::new(
        distance * yaw.sin() * pitch.cos(),
        distance * pitch.sin(),
        distance * yaw.cos() * pitch.cos(),
    ) + target
}
