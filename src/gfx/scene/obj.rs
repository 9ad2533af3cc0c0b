//! OBJ model import
//!
//! Parsing is delegated to `tobj`; this module only turns its output into a
//! [`SceneNode`] tree the viewer can frame and shade. Each OBJ model (one per
//! `o`/`g` group and material) becomes a child node of the returned root.

use std::path::Path;

use cgmath::Vector3;

use crate::error::{Result, ViewerError};
use crate::gfx::resources::material::Material;

use super::node::{Mesh, SceneNode};

/// Loads an OBJ file and its MTL library into a scene graph.
///
/// MTL materials become metallic-roughness materials: metalness 0 and a
/// roughness derived from the Phong shininess, so the viewer sliders apply to
/// them. A missing or unreadable MTL file is tolerated and every model gets the
/// default material.
pub fn load_obj(path: impl AsRef<Path>) -> Result<SceneNode> {
    let path = path.as_ref();
    let (models, materials) = tobj::load_obj(
        path,
        &tobj::LoadOptions {
            triangulate: true,
            single_index: true,
            ..Default::default()
        },
    )
    .map_err(|source| ViewerError::ObjLoad {
        path: path.to_path_buf(),
        source,
    })?;

    let materials = materials.unwrap_or_else(|err| {
        log::warn!("No usable MTL for {}: {err}; using default materials", path.display());
        Vec::new()
    });
    let materials: Vec<Material> = materials
        .iter()
        .enumerate()
        .map(|(i, mtl)| convert_material(i, mtl))
        .collect();

    let root_name = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "model".to_string());
    let mut root = SceneNode::new(&root_name);

    for (i, model) in models.iter().enumerate() {
        let mesh = &model.mesh;
        if mesh.positions.is_empty() {
            continue;
        }

        let positions = mesh
            .positions
            .chunks_exact(3)
            .map(|p| Vector3::new(p[0], p[1], p[2]))
            .collect();

        let material = mesh
            .material_id
            .and_then(|id| materials.get(id).cloned())
            .unwrap_or_default();

        let name = if model.name.is_empty() {
            format!("mesh_{}", i)
        } else {
            model.name.clone()
        };

        let mesh = Mesh::new(&name, positions, Some(material.into()))
            .with_indices(mesh.indices.clone());
        root.add_child(SceneNode::new(&name).with_mesh(mesh));
    }

    if root.children.is_empty() {
        return Err(ViewerError::EmptyModel(path.to_path_buf()));
    }

    log::info!(
        "Loaded '{}' with {} meshes and {} materials",
        root.name,
        root.children.len(),
        materials.len()
    );
    Ok(root)
}

fn convert_material(index: usize, mtl: &tobj::Material) -> Material {
    let name = if mtl.name.is_empty() {
        format!("material_{}", index)
    } else {
        mtl.name.clone()
    };
    let diffuse = mtl.diffuse.unwrap_or([0.8, 0.8, 0.8]);
    // Convert shininess to roughness
    let roughness = 1.0 - (mtl.shininess.unwrap_or(32.0) / 128.0).clamp(0.0, 1.0);

    Material::standard(
        &name,
        [diffuse[0], diffuse[1], diffuse[2], mtl.dissolve.unwrap_or(1.0)],
        0.0,
        roughness,
    )
}
