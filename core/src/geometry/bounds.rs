//! Axis-aligned bounding boxes

#![allow(dead_code)]
use super::{point, Matrix4x4, Ray, Tuple};
use crate::common::*;

/// An axis-aligned bounding box in some shape's local space.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Bounds3 {
    /// Minimum corner.
    pub min: Tuple,

    /// Maximum corner.
    pub max: Tuple,
}

/// An empty box; merging any point into it yields that point.
pub const EMPTY_BOUNDS: Bounds3 = Bounds3 {
    min: Tuple {
        x: INFINITY,
        y: INFINITY,
        z: INFINITY,
        w: 1.0,
    },
    max: Tuple {
        x: -INFINITY,
        y: -INFINITY,
        z: -INFINITY,
        w: 1.0,
    },
};

impl Bounds3 {
    /// Creates a new bounding box from two corner points.
    ///
    /// * `min` - Minimum corner.
    /// * `max` - Maximum corner.
    pub fn new(min: Tuple, max: Tuple) -> Self {
        Self { min, max }
    }

    /// Returns the box grown to include a point.
    ///
    /// * `p` - The point.
    pub fn merge_point(&self, p: Tuple) -> Self {
        Self {
            min: point(self.min.x.min(p.x), self.min.y.min(p.y), self.min.z.min(p.z)),
            max: point(self.max.x.max(p.x), self.max.y.max(p.y), self.max.z.max(p.z)),
        }
    }

    /// Returns the union of two boxes.
    ///
    /// * `other` - The other box.
    pub fn merge(&self, other: &Bounds3) -> Self {
        self.merge_point(other.min).merge_point(other.max)
    }

    /// Returns the box enclosing all eight corners of this box after
    /// applying a transform.
    ///
    /// * `m` - The transformation matrix.
    pub fn transform(&self, m: &Matrix4x4) -> Self {
        let corners = [
            point(self.min.x, self.min.y, self.min.z),
            point(self.min.x, self.min.y, self.max.z),
            point(self.min.x, self.max.y, self.min.z),
            point(self.min.x, self.max.y, self.max.z),
            point(self.max.x, self.min.y, self.min.z),
            point(self.max.x, self.min.y, self.max.z),
            point(self.max.x, self.max.y, self.min.z),
            point(self.max.x, self.max.y, self.max.z),
        ];
        corners
            .iter()
            .fold(EMPTY_BOUNDS, |b, c| b.merge_point(*m * *c))
    }

    /// Returns true if a ray intersects the box. Used by groups to reject
    /// rays before testing every child.
    ///
    /// * `ray` - The ray in the same space as the box.
    pub fn intersects(&self, ray: &Ray) -> bool {
        let (xtmin, xtmax) =
            check_axis(ray.origin.x, ray.direction.x, self.min.x, self.max.x);
        let (ytmin, ytmax) =
            check_axis(ray.origin.y, ray.direction.y, self.min.y, self.max.y);
        let (ztmin, ztmax) =
            check_axis(ray.origin.z, ray.direction.z, self.min.z, self.max.z);

        let tmin = xtmin.max(ytmin).max(ztmin);
        let tmax = xtmax.min(ytmax).min(ztmax);
        tmin <= tmax
    }
}

/// Returns the `[tmin, tmax]` interval where a ray is inside one slab.
/// A near-zero direction component puts the plane crossings at ±∞.
///
/// * `origin`    - Ray origin along the axis.
/// * `direction` - Ray direction along the axis.
/// * `min`       - Slab minimum.
/// * `max`       - Slab maximum.
pub fn check_axis(origin: Float, direction: Float, min: Float, max: Float) -> (Float, Float) {
    let tmin_numerator = min - origin;
    let tmax_numerator = max - origin;

    let (tmin, tmax) = if direction.abs() >= EPSILON {
        (tmin_numerator / direction, tmax_numerator / direction)
    } else {
        (tmin_numerator * INFINITY, tmax_numerator * INFINITY)
    };

    if tmin > tmax {
        (tmax, tmin)
    } else {
        (tmin, tmax)
    }
}
