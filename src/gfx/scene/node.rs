use cgmath::{Deg, Euler, Matrix4, Quaternion, SquareMatrix, Vector3};

use crate::gfx::{bounds::BoundingBox, resources::material::MaterialRef};

/// Local transform of a node: translation, rotation, scale
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub position: Vector3<f32>,
    pub rotation: Euler<Deg<f32>>,
    pub scale: Vector3<f32>,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vector3::new(0.0, 0.0, 0.0),
            rotation: Euler::new(Deg(0.0), Deg(0.0), Deg(0.0)),
            scale: Vector3::new(1.0, 1.0, 1.0),
        }
    }
}

impl Transform {
    /// Composed matrix. Order matters: T * R * S
    pub fn matrix(&self) -> Matrix4<f32> {
        let t = Matrix4::from_translation(self.position);
        let rotation: Quaternion<f32> = self.rotation.into();
        let r = Matrix4::from(rotation);
        let s = Matrix4::from_nonuniform_scale(self.scale.x, self.scale.y, self.scale.z);
        t * r * s
    }

    pub fn set_uniform_scale(&mut self, scale: f32) {
        self.scale = Vector3::new(scale, scale, scale);
    }
}

/// Renderable payload of a node
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    pub name: String,
    /// Vertex positions in the node's local space
    pub positions: Vec<Vector3<f32>>,
    pub indices: Vec<u32>,
    pub material: Option<MaterialRef>,
}

impl Mesh {
    pub fn new(name: &str, positions: Vec<Vector3<f32>>, material: Option<MaterialRef>) -> Self {
        Self {
            name: name.to_string(),
            positions,
            indices: Vec::new(),
            material,
        }
    }

    pub fn with_indices(mut self, indices: Vec<u32>) -> Self {
        self.indices = indices;
        self
    }

    pub fn local_bounds(&self) -> BoundingBox {
        BoundingBox::from_points(&self.positions)
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

/// Node of the model hierarchy
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SceneNode {
    pub name: String,
    pub transform: Transform,
    pub mesh: Option<Mesh>,
    pub children: Vec<SceneNode>,
}

impl SceneNode {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Default::default()
        }
    }

    /// Builder pattern: Attach a mesh
    pub fn with_mesh(mut self, mesh: Mesh) -> Self {
        self.mesh = Some(mesh);
        self
    }

    /// Builder pattern: Append a child
    pub fn with_child(mut self, child: SceneNode) -> Self {
        self.children.push(child);
        self
    }

    /// Builder pattern: Set the local transform
    pub fn with_transform(mut self, transform: Transform) -> Self {
        self.transform = transform;
        self
    }

    pub fn add_child(&mut self, child: SceneNode) {
        self.children.push(child);
    }

    /// Number of nodes below this one
    pub fn descendant_count(&self) -> usize {
        self.children
            .iter()
            .map(|child| 1 + child.descendant_count())
            .sum()
    }

    /// Number of nodes in this subtree carrying a mesh
    pub fn mesh_count(&self) -> usize {
        let own = usize::from(self.mesh.is_some());
        own + self.children.iter().map(SceneNode::mesh_count).sum::<usize>()
    }

    fn visit_mut(&mut self, visitor: &mut dyn FnMut(&mut Mesh)) {
        if let Some(mesh) = self.mesh.as_mut() {
            visitor(mesh);
        }
        for child in &mut self.children {
            child.visit_mut(visitor);
        }
    }

    fn bounds_under(&self, parent: &Matrix4<f32>) -> BoundingBox {
        let world = *parent * self.transform.matrix();
        let own = self
            .mesh
            .as_ref()
            .map(|mesh| mesh.local_bounds().transform(&world))
            .unwrap_or_else(BoundingBox::empty);

        self.children
            .iter()
            .fold(own, |bounds, child| bounds.union(&child.bounds_under(&world)))
    }
}

/// Scene graph access needed by the viewer core.
///
/// Rendering engines expose their own node types; implementing this trait is
/// all framing and material propagation need from them.
pub trait SceneGraph {
    /// Visits every mesh in the graph, depth-first
    fn visit_renderables_mut(&mut self, visitor: &mut dyn FnMut(&mut Mesh));

    /// World-space bounds of all meshes in the graph
    fn world_bounds(&self) -> BoundingBox;
}

impl SceneGraph for SceneNode {
    fn visit_renderables_mut(&mut self, visitor: &mut dyn FnMut(&mut Mesh)) {
        self.visit_mut(visitor);
    }

    fn world_bounds(&self) -> BoundingBox {
        self.bounds_under(&Matrix4::identity())
    }
}

/// A forest of top-level nodes, as held by a scene
impl SceneGraph for [SceneNode] {
    fn visit_renderables_mut(&mut self, visitor: &mut dyn FnMut(&mut Mesh)) {
        for node in self.iter_mut() {
            node.visit_mut(visitor);
        }
    }

    fn world_bounds(&self) -> BoundingBox {
        self.iter()
            .fold(BoundingBox::empty(), |bounds, node| bounds.union(&node.world_bounds()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gfx::resources::material::Material;

    fn unit_cube(name: &str) -> Mesh {
        Mesh::new(
            name,
            vec![
                Vector3::new(-0.5, -0.5, -0.5),
                Vector3::new(0.5, 0.5, 0.5),
            ],
            Some(Material::default().into()),
        )
    }

    #[test]
    fn test_world_bounds_compose_transforms() {
        let child = SceneNode::new("child")
            .with_mesh(unit_cube("cube"))
            .with_transform(Transform {
                position: Vector3::new(0.0, 2.0, 0.0),
                ..Default::default()
            });
        let mut root_transform = Transform::default();
        root_transform.position = Vector3::new(10.0, 0.0, 0.0);
        root_transform.set_uniform_scale(2.0);
        let root = SceneNode::new("root")
            .with_transform(root_transform)
            .with_child(child);

        let bounds = root.world_bounds();
        // Child sits at 2 * (0, 2, 0) + (10, 0, 0) with size 2
        let center = bounds.center();
        assert!((center.x - 10.0).abs() < 1e-5);
        assert!((center.y - 4.0).abs() < 1e-5);
        assert!((bounds.max_dimension() - 2.0).abs() < 1e-5);
    }

    #[test]
    fn test_empty_graph_has_empty_bounds() {
        let root = SceneNode::new("root").with_child(SceneNode::new("group"));
        assert!(root.world_bounds().is_empty());
        assert_eq!(root.descendant_count(), 1);
        assert_eq!(root.mesh_count(), 0);
    }

    #[test]
    fn test_visit_reaches_nested_meshes() {
        let mut root = SceneNode::new("root").with_mesh(unit_cube("a")).with_child(
            SceneNode::new("group")
                .with_child(SceneNode::new("leaf").with_mesh(unit_cube("b")))
                .with_child(SceneNode::new("leaf2").with_mesh(unit_cube("c"))),
        );

        let mut names = Vec::new();
        root.visit_renderables_mut(&mut |mesh: &mut Mesh| names.push(mesh.name.clone()));
        assert_eq!(names, vec!["a", "b", "c"]);
        assert_eq!(root.mesh_count(), 3);
        assert_eq!(root.descendant_count(), 3);
    }

    #[test]
    fn test_forest_bounds_cover_all_roots() {
        let nodes = vec![
            SceneNode::new("left").with_mesh(unit_cube("l")).with_transform(Transform {
                position: Vector3::new(-5.0, 0.0, 0.0),
                ..Default::default()
            }),
            SceneNode::new("right").with_mesh(unit_cube("r")).with_transform(Transform {
                position: Vector3::new(5.0, 0.0, 0.0),
                ..Default::default()
            }),
        ];
        let bounds = nodes.as_slice().world_bounds();
        assert!((bounds.size().x - 11.0).abs() < 1e-5);
    }
}
