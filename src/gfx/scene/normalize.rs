//! Model normalization
//!
//! The alternative to moving the camera: move the model. A loaded model is
//! recentered at the origin and uniformly scaled so its largest extent matches
//! a canonical size, then every model can share one fixed camera setup.

use cgmath::Vector3;

use crate::gfx::bounds::BoundingBox;

use super::node::{SceneNode, Transform};
use super::SceneGraph;

/// Fraction of the model height it is lifted above the origin, so it does not
/// sit exactly astride the ground plane
const GROUND_NUDGE: f32 = 0.02;

/// Translation and uniform scale bringing a model into the canonical frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Normalization {
    pub translation: Vector3<f32>,
    pub scale: f32,
}

impl Normalization {
    /// Applies the translation, then the scale, on top of `transform`.
    ///
    /// Both act in the parent's frame, about the node's pivot, so the node's
    /// existing rotation and scale are preserved.
    pub fn apply(&self, transform: &mut Transform) {
        transform.position = (transform.position + self.translation) * self.scale;
        transform.scale *= self.scale;
    }
}

/// Computes the recentering translation and uniform scale for `bounds`.
///
/// `target_max_dim` must be positive and finite; zero collapses the model and a
/// negative size mirrors it. A degenerate box (see
/// [`BoundingBox::fit_dimension`]) has nothing to scale against and gets a
/// scale of `1.0`.
pub fn compute_normalization(bounds: &BoundingBox, target_max_dim: f32) -> (Vector3<f32>, f32) {
    let size = bounds.size();
    let translation = -bounds.center() + Vector3::new(0.0, size.y * GROUND_NUDGE, 0.0);
    let scale = match bounds.fit_dimension() {
        Some(max_dim) => target_max_dim / max_dim,
        None => {
            log::debug!("Degenerate bounds, leaving model scale unchanged");
            1.0
        }
    };
    (translation, scale)
}

/// Measures `node` and normalizes its transform in place
pub fn auto_center_and_scale(node: &mut SceneNode, target_max_dim: f32) -> Normalization {
    let bounds = node.world_bounds();
    let (translation, scale) = compute_normalization(&bounds, target_max_dim);
    let normalization = Normalization { translation, scale };
    normalization.apply(&mut node.transform);

    log::info!(
        "Normalized '{}': max dimension {:.3} -> {:.3}",
        node.name,
        bounds.max_dimension(),
        target_max_dim
    );
    normalization
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gfx::resources::material::Material;
    use crate::gfx::scene::node::Mesh;
    use cgmath::Deg;

    fn box_mesh(min: Vector3<f32>, max: Vector3<f32>) -> Mesh {
        Mesh::new("box", vec![min, max], Some(Material::default().into()))
    }

    #[test]
    fn test_normalization_values() {
        let bounds = BoundingBox::new(Vector3::new(1.0, 2.0, 3.0), Vector3::new(3.0, 6.0, 4.0));
        let (translation, scale) = compute_normalization(&bounds, 2.0);

        // center (2, 4, 3.5), size.y 4 -> nudge 0.08
        assert!((translation.x + 2.0).abs() < 1e-6);
        assert!((translation.y + 4.0 - 0.08).abs() < 1e-6);
        assert!((translation.z + 3.5).abs() < 1e-6);
        assert!((scale - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_zero_size_keeps_scale() {
        let point = BoundingBox::from_points(&[Vector3::new(4.0, 4.0, 4.0)]);
        let (translation, scale) = compute_normalization(&point, 2.0);
        assert_eq!(scale, 1.0);
        assert_eq!(translation, Vector3::new(-4.0, -4.0, -4.0));

        let (_, empty_scale) = compute_normalization(&BoundingBox::empty(), 2.0);
        assert_eq!(empty_scale, 1.0);
    }

    #[test]
    fn test_auto_center_and_scale_reaches_canonical_frame() {
        let mut node = SceneNode::new("model").with_child(
            SceneNode::new("body")
                .with_mesh(box_mesh(Vector3::new(10.0, 0.0, -2.0), Vector3::new(14.0, 8.0, 2.0))),
        );
        node.transform.rotation.y = Deg(90.0);

        let normalization = auto_center_and_scale(&mut node, 2.0);
        let bounds = node.world_bounds();

        assert!((bounds.max_dimension() - 2.0).abs() < 1e-4);
        let center = bounds.center();
        assert!(center.x.abs() < 1e-4);
        assert!(center.z.abs() < 1e-4);
        // Only the ground nudge remains, scaled with the model
        let expected_lift = 8.0 * GROUND_NUDGE * normalization.scale;
        assert!((center.y - expected_lift).abs() < 1e-4);
    }

    #[test]
    fn test_apply_preserves_existing_scale() {
        let mut transform = Transform::default();
        transform.set_uniform_scale(3.0);
        Normalization {
            translation: Vector3::new(1.0, 0.0, 0.0),
            scale: 0.5,
        }
        .apply(&mut transform);
        assert_eq!(transform.scale, Vector3::new(1.5, 1.5, 1.5));
        assert_eq!(transform.position, Vector3::new(0.5, 0.0, 0.0));
    }
}
