//! Viewer application state
//!
//! Owns what the UI layer manipulates: the current model, the environment map,
//! the background mode, the material sliders and the orbit camera. UI events
//! call into [`ViewerState`]; it runs framing and material propagation on the
//! state it owns and hands results back.
//!
//! Models and environment maps arrive here only once fully loaded.

use crate::error::Result;
use crate::gfx::{
    bounds::BoundingBox,
    camera::{FitResult, FramingConfig, OrbitCamera},
    resources::{
        apply_material_params_with_presets, EnvironmentPresets, MaterialParams, PropagationReport,
    },
    scene::{SceneGraph, SceneNode},
};

/// Prefiltered environment lighting, as handed over by the loader
#[derive(Debug, Clone, PartialEq)]
pub struct EnvironmentMap {
    pub name: String,
}

impl EnvironmentMap {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
        }
    }
}

/// What is drawn behind the model
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BackgroundMode {
    /// The environment map itself
    Environment,
    Solid([f32; 3]),
}

const DEFAULT_BACKGROUND: [f32; 3] = [0.12, 0.12, 0.14];

pub struct ViewerState {
    model: Option<SceneNode>,
    environment: Option<EnvironmentMap>,
    background: BackgroundMode,
    solid_color: [f32; 3],
    metalness: f32,
    roughness: f32,
    framing: FramingConfig,
    presets: EnvironmentPresets,
    last_fit: Option<FitResult>,
    camera: OrbitCamera,
}

impl ViewerState {
    /// Creates an empty viewer with default framing and presets
    pub fn new() -> Self {
        Self {
            model: None,
            environment: None,
            background: BackgroundMode::Solid(DEFAULT_BACKGROUND),
            solid_color: DEFAULT_BACKGROUND,
            metalness: 0.0,
            roughness: 0.5,
            framing: FramingConfig::default(),
            presets: EnvironmentPresets::default(),
            last_fit: None,
            camera: OrbitCamera::default(),
        }
    }

    /// Builder pattern: Use a custom framing configuration
    pub fn with_framing(mut self, framing: FramingConfig) -> Result<Self> {
        framing.validate()?;
        self.framing = framing;
        Ok(self)
    }

    /// Builder pattern: Use custom environment intensity presets
    pub fn with_presets(mut self, presets: EnvironmentPresets) -> Self {
        self.presets = presets;
        self
    }

    /// Replaces the current model, frames the camera on it and applies the
    /// current material settings.
    pub fn load_model(&mut self, model: SceneNode) -> FitResult {
        let name = model.name.clone();
        let bounds = model.world_bounds();
        if let Some(previous) = self.model.replace(model) {
            log::debug!("Replacing model '{}'", previous.name);
        }
        self.propagate_materials();
        self.frame(&name, &bounds)
    }

    /// Releases the current model
    pub fn unload(&mut self) -> Option<SceneNode> {
        self.last_fit = None;
        self.model.take()
    }

    /// Frames the camera on the current model again, e.g. after the user
    /// orbited away. Returns `None` without a model.
    pub fn reframe(&mut self) -> Option<FitResult> {
        self.frame_current()
    }

    fn frame_current(&mut self) -> Option<FitResult> {
        let model = self.model.as_ref()?;
        let (name, bounds) = (model.name.clone(), model.world_bounds());
        Some(self.frame(&name, &bounds))
    }

    fn frame(&mut self, name: &str, bounds: &BoundingBox) -> FitResult {
        let fit = self.framing.fit(bounds);
        self.camera.apply_fit(&fit.pose, &fit.limits);
        self.last_fit = Some(fit);

        log::info!(
            "Framed '{}' at distance {:.3} (max dimension {:.3})",
            name,
            fit.fit_distance,
            fit.max_dimension
        );
        fit
    }

    /// Installs or clears the environment map.
    ///
    /// The background follows the map: installing one shows it, clearing it
    /// falls back to the solid color. Material intensities are re-applied.
    pub fn set_environment(&mut self, environment: Option<EnvironmentMap>) -> PropagationReport {
        self.background = match environment {
            Some(_) => BackgroundMode::Environment,
            None => BackgroundMode::Solid(self.solid_color),
        };
        self.environment = environment;
        self.propagate_materials()
    }

    pub fn set_metalness(&mut self, metalness: f32) -> PropagationReport {
        self.metalness = metalness;
        self.propagate_materials()
    }

    pub fn set_roughness(&mut self, roughness: f32) -> PropagationReport {
        self.roughness = roughness;
        self.propagate_materials()
    }

    /// Switches between the environment and the solid background.
    ///
    /// Without an environment map there is nothing to show, so the background
    /// stays solid.
    pub fn toggle_background(&mut self) -> BackgroundMode {
        self.background = match self.background {
            BackgroundMode::Solid(_) if self.environment.is_some() => BackgroundMode::Environment,
            BackgroundMode::Solid(color) => {
                log::debug!("No environment map loaded, keeping solid background");
                BackgroundMode::Solid(color)
            }
            BackgroundMode::Environment => BackgroundMode::Solid(self.solid_color),
        };
        self.background
    }

    pub fn set_background_color(&mut self, color: [f32; 3]) {
        self.solid_color = color;
        if let BackgroundMode::Solid(_) = self.background {
            self.background = BackgroundMode::Solid(color);
        }
    }

    /// Current slider values, as applied to the model
    pub fn material_params(&self) -> MaterialParams {
        MaterialParams::new(self.metalness, self.roughness, self.environment.is_some())
    }

    fn propagate_materials(&mut self) -> PropagationReport {
        let params = self.material_params();
        match self.model.as_mut() {
            Some(model) => apply_material_params_with_presets(model, &params, &self.presets),
            None => PropagationReport::default(),
        }
    }

    pub fn model(&self) -> Option<&SceneNode> {
        self.model.as_ref()
    }

    /// Mutable model access. Call [`reframe`](Self::reframe) after moving it.
    pub fn model_mut(&mut self) -> Option<&mut SceneNode> {
        self.model.as_mut()
    }

    pub fn environment(&self) -> Option<&EnvironmentMap> {
        self.environment.as_ref()
    }

    pub fn background(&self) -> BackgroundMode {
        self.background
    }

    pub fn last_fit(&self) -> Option<&FitResult> {
        self.last_fit.as_ref()
    }

    pub fn camera(&self) -> &OrbitCamera {
        &self.camera
    }

    /// Camera access for orbit, zoom and pan input. Loading or reframing a
    /// model overwrites the pose and distance limits.
    pub fn camera_mut(&mut self) -> &mut OrbitCamera {
        &mut self.camera
    }
}

impl Default for ViewerState {
    fn default() -> Self {
        Self::new()
    }
}
