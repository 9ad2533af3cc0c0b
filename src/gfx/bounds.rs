//! # Bounding Boxes
//!
//! Axis-aligned bounding boxes in world space. Every framing and normalization
//! routine in the viewer starts from one of these, recomputed fresh each time a
//! model is loaded.
//!
//! ## Degenerate boxes
//!
//! A box whose largest extent is zero (a single point, or no geometry at all)
//! cannot be used as a divisor. [`BoundingBox::fit_dimension`] is the one place
//! that decides degeneracy; callers branch on its `None` instead of comparing
//! extents themselves.

use cgmath::{Matrix4, Vector3, Vector4};

/// Smallest extent [`BoundingBox::fit_dimension`] accepts. Below it, derived
/// clip planes and orbit limits lose precision or underflow to zero.
pub const MIN_FIT_DIMENSION: f32 = 1e-6;

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    /// Minimum corner of the bounding box
    pub min: Vector3<f32>,
    /// Maximum corner of the bounding box
    pub max: Vector3<f32>,
}

impl BoundingBox {
    /// Create a new bounding box from its corners
    pub fn new(min: Vector3<f32>, max: Vector3<f32>) -> Self {
        Self { min, max }
    }

    /// The empty box. Contains nothing and is the identity for [`union`](Self::union).
    pub fn empty() -> Self {
        Self {
            min: Vector3::new(f32::INFINITY, f32::INFINITY, f32::INFINITY),
            max: Vector3::new(f32::NEG_INFINITY, f32::NEG_INFINITY, f32::NEG_INFINITY),
        }
    }

    /// Create a bounding box enclosing a set of points
    pub fn from_points(points: &[Vector3<f32>]) -> Self {
        let mut bounds = Self::empty();
        for point in points {
            bounds.expand_by_point(*point);
        }
        bounds
    }

    /// True when the box encloses no point at all
    pub fn is_empty(&self) -> bool {
        self.max.x < self.min.x || self.max.y < self.min.y || self.max.z < self.min.z
    }

    pub fn expand_by_point(&mut self, point: Vector3<f32>) {
        self.min.x = self.min.x.min(point.x);
        self.min.y = self.min.y.min(point.y);
        self.min.z = self.min.z.min(point.z);
        self.max.x = self.max.x.max(point.x);
        self.max.y = self.max.y.max(point.y);
        self.max.z = self.max.z.max(point.z);
    }

    /// Smallest box enclosing both `self` and `other`
    pub fn union(&self, other: &BoundingBox) -> Self {
        if other.is_empty() {
            return *self;
        }
        if self.is_empty() {
            return *other;
        }
        let mut merged = *self;
        merged.expand_by_point(other.min);
        merged.expand_by_point(other.max);
        merged
    }

    /// Component-wise extent. Never negative; zero for the empty box.
    pub fn size(&self) -> Vector3<f32> {
        if self.is_empty() {
            return Vector3::new(0.0, 0.0, 0.0);
        }
        Vector3::new(
            (self.max.x - self.min.x).max(0.0),
            (self.max.y - self.min.y).max(0.0),
            (self.max.z - self.min.z).max(0.0),
        )
    }

    /// Midpoint of the box. The empty box is centered at the origin.
    pub fn center(&self) -> Vector3<f32> {
        if self.is_empty() {
            return Vector3::new(0.0, 0.0, 0.0);
        }
        (self.min + self.max) * 0.5
    }

    /// Largest component of [`size`](Self::size)
    pub fn max_dimension(&self) -> f32 {
        let size = self.size();
        size.x.max(size.y).max(size.z)
    }

    /// Largest dimension, or `None` when it cannot be divided by.
    ///
    /// Empty boxes, boxes with non-finite corners and boxes whose largest
    /// extent is below [`MIN_FIT_DIMENSION`] are all degenerate. Callers decide
    /// what a degenerate box means for them.
    pub fn fit_dimension(&self) -> Option<f32> {
        let max_dim = self.max_dimension();
        if max_dim.is_finite() && max_dim >= MIN_FIT_DIMENSION {
            Some(max_dim)
        } else {
            None
        }
    }

    /// Apply a transformation matrix to the box
    pub fn transform(&self, matrix: &Matrix4<f32>) -> Self {
        if self.is_empty() {
            return *self;
        }

        // Transform all 8 corners and re-fit
        let corners = [
            Vector3::new(self.min.x, self.min.y, self.min.z),
            Vector3::new(self.max.x, self.min.y, self.min.z),
            Vector3::new(self.min.x, self.max.y, self.min.z),
            Vector3::new(self.min.x, self.min.y, self.max.z),
            Vector3::new(self.max.x, self.max.y, self.min.z),
            Vector3::new(self.max.x, self.min.y, self.max.z),
            Vector3::new(self.min.x, self.max.y, self.max.z),
            Vector3::new(self.max.x, self.max.y, self.max.z),
        ];

        let mut transformed = Self::empty();
        for corner in &corners {
            let homogeneous = matrix * Vector4::new(corner.x, corner.y, corner.z, 1.0);
            transformed.expand_by_point(Vector3::new(
                homogeneous.x / homogeneous.w,
                homogeneous.y / homogeneous.w,
                homogeneous.z / homogeneous.w,
            ));
        }
        transformed
    }
}

impl Default for BoundingBox {
    fn default() -> Self {
        Self::empty()
    }
}
