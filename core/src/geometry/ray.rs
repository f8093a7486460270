//! Rays

#![allow(dead_code)]
use super::{Matrix4x4, Tuple};
use crate::common::Float;

/// A ray with an origin point and a direction vector.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Ray {
    /// Origin of the ray. Must be a point.
    pub origin: Tuple,

    /// Direction of the ray. Must be a vector.
    pub direction: Tuple,
}

impl Ray {
    /// Creates a new ray.
    ///
    /// Swapping the point/vector roles is a scene construction bug, so it
    /// is checked in debug builds.
    ///
    /// * `origin`    - Origin point.
    /// * `direction` - Direction vector.
    pub fn new(origin: Tuple, direction: Tuple) -> Self {
        debug_assert!(origin.is_point(), "ray origin must be a point");
        debug_assert!(direction.is_vector(), "ray direction must be a vector");
        Self { origin, direction }
    }

    /// Returns the point at the given parameter along the ray.
    ///
    /// * `t` - The ray parameter.
    pub fn position(&self, t: Float) -> Tuple {
        self.origin + self.direction * t
    }

    /// Returns the ray transformed by a matrix. The direction is not
    /// renormalized, so the parameterization is preserved.
    ///
    /// * `m` - The transformation matrix.
    pub fn transform(&self, m: &Matrix4x4) -> Ray {
        Ray {
            origin: *m * self.origin,
            direction: *m * self.direction,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{point, scaling, translation, vector};

    #[test]
    fn creating_and_querying_a_ray() {
        let r = Ray::new(point(1.0, 2.0, 3.0), vector(4.0, 5.0, 6.0));
        assert_eq!(r.origin, point(1.0, 2.0, 3.0));
        assert_eq!(r.direction, vector(4.0, 5.0, 6.0));
    }

    #[test]
    #[should_panic]
    fn swapped_roles_panic_in_debug_builds() {
        let _ = Ray::new(vector(1.0, 2.0, 3.0), point(4.0, 5.0, 6.0));
    }

    #[test]
    fn computing_a_point_from_a_distance() {
        let r = Ray::new(point(2.0, 3.0, 4.0), vector(1.0, 0.0, 0.0));
        assert_eq!(r.position(0.0), point(2.0, 3.0, 4.0));
        assert_eq!(r.position(1.0), point(3.0, 3.0, 4.0));
        assert_eq!(r.position(-1.0), point(1.0, 3.0, 4.0));
        assert_eq!(r.position(2.5), point(4.5, 3.0, 4.0));
    }

    #[test]
    fn translating_a_ray() {
        let r = Ray::new(point(1.0, 2.0, 3.0), vector(0.0, 1.0, 0.0));
        let r2 = r.transform(&translation(3.0, 4.0, 5.0));
        assert_eq!(r2.origin, point(4.0, 6.0, 8.0));
        assert_eq!(r2.direction, vector(0.0, 1.0, 0.0));
    }

    #[test]
    fn scaling_a_ray() {
        let r = Ray::new(point(1.0, 2.0, 3.0), vector(0.0, 1.0, 0.0));
        let r2 = r.transform(&scaling(2.0, 3.0, 4.0));
        assert_eq!(r2.origin, point(2.0, 6.0, 12.0));
        assert_eq!(r2.direction, vector(0.0, 3.0, 0.0));
    }
}
