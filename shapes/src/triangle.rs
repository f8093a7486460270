//! Triangles

#![allow(dead_code)]
use core::common::*;
use core::geometry::{Bounds3, Ray, Tuple, EMPTY_BOUNDS};

/// A triangle with precomputed edge vectors and face normal, intersected
/// with the Möller–Trumbore algorithm.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Triangle {
    /// First vertex.
    pub p1: Tuple,

    /// Second vertex.
    pub p2: Tuple,

    /// Third vertex.
    pub p3: Tuple,

    /// Edge from p1 to p2.
    pub e1: Tuple,

    /// Edge from p1 to p3.
    pub e2: Tuple,

    /// Face normal, normalized.
    pub normal: Tuple,
}

impl Triangle {
    /// Creates a triangle from its three vertices.
    ///
    /// * `p1` - First vertex.
    /// * `p2` - Second vertex.
    /// * `p3` - Third vertex.
    pub fn new(p1: Tuple, p2: Tuple, p3: Tuple) -> Self {
        let e1 = p2 - p1;
        let e2 = p3 - p1;
        let normal = e2.cross(&e1).normalize();
        Self {
            p1,
            p2,
            p3,
            e1,
            e2,
            normal,
        }
    }

    /// Möller–Trumbore ray/triangle intersection. Returns nothing when the
    /// ray is parallel to the triangle plane or the barycentric
    /// coordinates fall outside the triangle.
    ///
    /// * `ray` - The ray in the triangle's local space.
    pub fn local_intersect(&self, ray: &Ray) -> Vec<Float> {
        let dir_cross_e2 = ray.direction.cross(&self.e2);
        let det = self.e1.dot(&dir_cross_e2);
        if det.abs() < EPSILON {
            return vec![];
        }

        let f = 1.0 / det;
        let p1_to_origin = ray.origin - self.p1;
        let u = f * p1_to_origin.dot(&dir_cross_e2);
        if !(0.0..=1.0).contains(&u) {
            return vec![];
        }

        let origin_cross_e1 = p1_to_origin.cross(&self.e1);
        let v = f * ray.direction.dot(&origin_cross_e1);
        if v < 0.0 || u + v > 1.0 {
            return vec![];
        }

        vec![f * self.e2.dot(&origin_cross_e1)]
    }

    /// Returns the precomputed face normal.
    ///
    /// * `_p` - The point in local space (unused).
    pub fn local_normal_at(&self, _p: Tuple) -> Tuple {
        self.normal
    }

    /// Returns the local-space bounding box enclosing the vertices.
    pub fn bounds(&self) -> Bounds3 {
        EMPTY_BOUNDS
            .merge_point(self.p1)
            .merge_point(self.p2)
            .merge_point(self.p3)
    }
}
