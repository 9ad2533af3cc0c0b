//! Material parameter propagation
//!
//! Pushes the viewer's metalness/roughness sliders onto every PBR material in a
//! model. Non-PBR materials are skipped without error: scenes legitimately mix
//! lit meshes with lines, points and custom shaders.

use crate::gfx::scene::{Mesh, SceneGraph};

use super::material::Material;

/// Slider state applied to every PBR material
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MaterialParams {
    /// Applied as-is, no clamping
    pub metalness: f32,
    /// Applied as-is, no clamping
    pub roughness: f32,
    /// Whether an environment map is currently lighting the scene
    pub has_environment_map: bool,
}

impl MaterialParams {
    pub fn new(metalness: f32, roughness: f32, has_environment_map: bool) -> Self {
        Self {
            metalness,
            roughness,
            has_environment_map,
        }
    }
}

impl Default for MaterialParams {
    fn default() -> Self {
        Self::new(0.0, 0.5, false)
    }
}

/// Environment reflection intensities. Two discrete settings, not a curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnvironmentPresets {
    pub with_environment: f32,
    /// Ambient-only lighting
    pub without_environment: f32,
}

impl Default for EnvironmentPresets {
    fn default() -> Self {
        Self {
            with_environment: 1.2,
            without_environment: 0.4,
        }
    }
}

impl EnvironmentPresets {
    pub fn intensity_for(&self, has_environment_map: bool) -> f32 {
        if has_environment_map {
            self.with_environment
        } else {
            self.without_environment
        }
    }
}

/// Outcome of a propagation pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PropagationReport {
    /// Materials updated
    pub applied: usize,
    /// Material slots left untouched (non-PBR, or a mesh without material)
    pub skipped: usize,
}

/// Applies `params` to a single material with the default presets.
///
/// Returns `false`, leaving the material untouched, when it is absent or not
/// PBR-capable.
pub fn tweak_material(material: Option<&mut Material>, params: &MaterialParams) -> bool {
    tweak_material_with_presets(material, params, &EnvironmentPresets::default())
}

pub fn tweak_material_with_presets(
    material: Option<&mut Material>,
    params: &MaterialParams,
    presets: &EnvironmentPresets,
) -> bool {
    let Some(material) = material else {
        return false;
    };
    let Some(pbr) = material.pbr_mut() else {
        return false;
    };

    pbr.metalness = params.metalness;
    pbr.roughness = params.roughness;
    pbr.env_map_intensity = presets.intensity_for(params.has_environment_map);
    material.mark_dirty();
    true
}

/// Applies `params` to every material under `root` with the default presets.
///
/// Idempotent. Must only run on a fully loaded graph.
pub fn apply_material_params<G: SceneGraph + ?Sized>(
    root: &mut G,
    params: &MaterialParams,
) -> PropagationReport {
    apply_material_params_with_presets(root, params, &EnvironmentPresets::default())
}

pub fn apply_material_params_with_presets<G: SceneGraph + ?Sized>(
    root: &mut G,
    params: &MaterialParams,
    presets: &EnvironmentPresets,
) -> PropagationReport {
    let mut report = PropagationReport::default();

    root.visit_renderables_mut(&mut |mesh: &mut Mesh| {
        let Some(materials) = mesh.material.as_mut() else {
            report.skipped += 1;
            return;
        };
        for material in materials.iter_mut() {
            if tweak_material_with_presets(Some(material), params, presets) {
                report.applied += 1;
            } else {
                report.skipped += 1;
            }
        }
    });

    log::debug!(
        "Material params metalness={} roughness={} env={}: {} applied, {} skipped",
        params.metalness,
        params.roughness,
        params.has_environment_map,
        report.applied,
        report.skipped
    );
    report
}
