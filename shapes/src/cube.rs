//! Cubes

#![allow(dead_code)]
use core::common::Float;
use core::geometry::{check_axis, point, vector, Bounds3, Ray, Tuple};

/// An axis-aligned cube spanning [-1, 1] on every axis.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Cube;

impl Cube {
    /// Slab test: intersects the per-axis `[tmin, tmax]` intervals and
    /// reports the entry and exit parameters when they overlap.
    ///
    /// * `ray` - The ray in the cube's local space.
    pub fn local_intersect(&self, ray: &Ray) -> Vec<Float> {
        let (xtmin, xtmax) = check_axis(ray.origin.x, ray.direction.x, -1.0, 1.0);
        let (ytmin, ytmax) = check_axis(ray.origin.y, ray.direction.y, -1.0, 1.0);
        let (ztmin, ztmax) = check_axis(ray.origin.z, ray.direction.z, -1.0, 1.0);

        let tmin = xtmin.max(ytmin).max(ztmin);
        let tmax = xtmax.min(ytmax).min(ztmax);

        if tmin > tmax {
            vec![]
        } else {
            vec![tmin, tmax]
        }
    }

    /// Returns the local-space normal: the axis with the largest absolute
    /// component of the point.
    ///
    /// * `p` - The point in local space.
    pub fn local_normal_at(&self, p: Tuple) -> Tuple {
        let maxc = p.x.abs().max(p.y.abs()).max(p.z.abs());
        if maxc == p.x.abs() {
            vector(p.x, 0.0, 0.0)
        } else if maxc == p.y.abs() {
            vector(0.0, p.y, 0.0)
        } else {
            vector(0.0, 0.0, p.z)
        }
    }

    /// Returns the local-space bounding box.
    pub fn bounds(&self) -> Bounds3 {
        Bounds3::new(point(-1.0, -1.0, -1.0), point(1.0, 1.0, 1.0))
    }
}
