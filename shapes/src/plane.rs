//! Planes

#![allow(dead_code)]
use core::common::*;
use core::geometry::{point, vector, Bounds3, Ray, Tuple};

/// The xz-plane (local y = 0), extending infinitely in x and z.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Plane;

impl Plane {
    /// Returns the single crossing parameter, or nothing when the ray is
    /// parallel to (or coplanar with) the plane.
    ///
    /// * `ray` - The ray in the plane's local space.
    pub fn local_intersect(&self, ray: &Ray) -> Vec<Float> {
        if ray.direction.y.abs() < EPSILON {
            return vec![];
        }
        vec![-ray.origin.y / ray.direction.y]
    }

    /// Returns the local-space normal, constant everywhere on the plane.
    ///
    /// * `_p` - The point in local space (unused).
    pub fn local_normal_at(&self, _p: Tuple) -> Tuple {
        vector(0.0, 1.0, 0.0)
    }

    /// Returns the local-space bounding box, unbounded in x and z.
    pub fn bounds(&self) -> Bounds3 {
        Bounds3::new(point(-INFINITY, 0.0, -INFINITY), point(INFINITY, 0.0, INFINITY))
    }
}
