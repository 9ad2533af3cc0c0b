use modelview::prelude::*;

fn mesh(name: &str, materials: MaterialRef) -> SceneNode {
    SceneNode::new(name).with_mesh(Mesh::new(
        name,
        vec![Vector3::new(-1.0, 0.0, -1.0), Vector3::new(1.0, 2.0, 1.0)],
        Some(materials),
    ))
}

fn mixed_scene() -> SceneNode {
    SceneNode::new("root")
        .with_child(mesh(
            "multi",
            MaterialRef::Multi(vec![
                Material::standard("body", [0.5, 0.5, 0.5, 1.0], 0.0, 1.0),
                Material::physical("paint", [0.8, 0.1, 0.1, 1.0], 0.1, 0.4, 1.0),
            ]),
        ))
        .with_child(mesh("left", Material::default().into()))
        .with_child(mesh(
            "right",
            Material::standard("chrome", [0.9, 0.9, 0.9, 1.0], 1.0, 0.05).into(),
        ))
        .with_child(mesh(
            "outline",
            Material::line("outline", [0.0, 0.0, 0.0, 1.0], 2.0).into(),
        ))
}

fn collect_materials(root: &SceneNode) -> Vec<Material> {
    let mut materials = Vec::new();
    for child in &root.children {
        if let Some(material_ref) = child.mesh.as_ref().and_then(|m| m.material.as_ref()) {
            materials.extend(material_ref.iter().cloned());
        }
    }
    materials
}

#[test]
fn test_updates_every_pbr_material_and_leaves_lines_alone() {
    let mut root = mixed_scene();
    let line_before = collect_materials(&root)
        .into_iter()
        .find(|m| !m.is_pbr())
        .unwrap();

    let report = apply_material_params(&mut root, &MaterialParams::new(0.8, 0.3, true));
    assert_eq!(report.applied, 4);
    assert_eq!(report.skipped, 1);

    let materials = collect_materials(&root);
    let updated: Vec<&PbrParams> = materials.iter().filter_map(Material::pbr).collect();
    assert_eq!(updated.len(), 4);
    for pbr in updated {
        assert_eq!(pbr.metalness, 0.8);
        assert_eq!(pbr.roughness, 0.3);
        assert_eq!(pbr.env_map_intensity, 1.2);
    }
    assert!(materials.iter().filter(|m| m.is_pbr()).all(|m| m.needs_update));

    let line_after = materials.into_iter().find(|m| !m.is_pbr()).unwrap();
    assert_eq!(line_after, line_before);
}

#[test]
fn test_propagation_is_idempotent() {
    let mut root = mixed_scene();
    let params = MaterialParams::new(0.25, 0.75, false);

    apply_material_params(&mut root, &params);
    let first = root.clone();
    apply_material_params(&mut root, &params);
    assert_eq!(root, first);
}

#[test]
fn test_meshes_without_material_are_skipped() {
    let mut root = SceneNode::new("root")
        .with_child(SceneNode::new("bare").with_mesh(Mesh::new(
            "bare",
            vec![Vector3::new(0.0, 0.0, 0.0)],
            None,
        )))
        .with_child(mesh("lit", Material::default().into()));

    let report = apply_material_params(&mut root, &MaterialParams::default());
    assert_eq!(report, PropagationReport { applied: 1, skipped: 1 });
}

#[test]
fn test_forest_of_roots_is_a_scene_graph() {
    let mut roots = vec![mixed_scene(), mixed_scene()];
    let report = apply_material_params(roots.as_mut_slice(), &MaterialParams::new(1.0, 0.0, true));
    assert_eq!(report.applied, 8);
}
