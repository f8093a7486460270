//! Spheres

#![allow(dead_code)]
use core::common::Float;
use core::geometry::{point, Bounds3, Ray, Tuple};

/// A unit sphere centered at the local origin.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Sphere;

impl Sphere {
    /// Returns the ray parameters where a local-space ray crosses the
    /// sphere: none when the discriminant is negative, otherwise the two
    /// (possibly equal) quadratic roots.
    ///
    /// * `ray` - The ray in the sphere's local space.
    pub fn local_intersect(&self, ray: &Ray) -> Vec<Float> {
        let sphere_to_ray = ray.origin - point(0.0, 0.0, 0.0);
        let a = ray.direction.dot(&ray.direction);
        let b = 2.0 * ray.direction.dot(&sphere_to_ray);
        let c = sphere_to_ray.dot(&sphere_to_ray) - 1.0;

        let discriminant = b * b - 4.0 * a * c;
        if discriminant < 0.0 {
            return vec![];
        }

        let sqrt_d = discriminant.sqrt();
        vec![(-b - sqrt_d) / (2.0 * a), (-b + sqrt_d) / (2.0 * a)]
    }

    /// Returns the local-space normal at a point on the sphere.
    ///
    /// * `p` - The point in local space.
    pub fn local_normal_at(&self, p: Tuple) -> Tuple {
        p - point(0.0, 0.0, 0.0)
    }

    /// Returns the local-space bounding box.
    pub fn bounds(&self) -> Bounds3 {
        Bounds3::new(point(-1.0, -1.0, -1.0), point(1.0, 1.0, 1.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::common::epsilon_eq;
    use core::geometry::vector;

    #[test]
    fn ray_intersects_sphere_at_two_points() {
        let r = Ray::new(point(0.0, 0.0, -5.0), vector(0.0, 0.0, 1.0));
        let xs = Sphere.local_intersect(&r);
        assert_eq!(xs, vec![4.0, 6.0]);
    }

    #[test]
    fn ray_intersects_sphere_at_a_tangent() {
        let r = Ray::new(point(0.0, 1.0, -5.0), vector(0.0, 0.0, 1.0));
        let xs = Sphere.local_intersect(&r);
        assert_eq!(xs, vec![5.0, 5.0]);
    }

    #[test]
    fn ray_misses_sphere() {
        let r = Ray::new(point(0.0, 2.0, -5.0), vector(0.0, 0.0, 1.0));
        assert!(Sphere.local_intersect(&r).is_empty());
    }

    #[test]
    fn ray_originates_inside_sphere() {
        let r = Ray::new(point(0.0, 0.0, 0.0), vector(0.0, 0.0, 1.0));
        let xs = Sphere.local_intersect(&r);
        assert_eq!(xs, vec![-1.0, 1.0]);
    }

    #[test]
    fn sphere_is_behind_ray() {
        let r = Ray::new(point(0.0, 0.0, 5.0), vector(0.0, 0.0, 1.0));
        let xs = Sphere.local_intersect(&r);
        assert_eq!(xs, vec![-6.0, -4.0]);
    }

    #[test]
    fn normal_on_an_axis() {
        assert_eq!(
            Sphere.local_normal_at(point(1.0, 0.0, 0.0)),
            vector(1.0, 0.0, 0.0)
        );
        assert_eq!(
            Sphere.local_normal_at(point(0.0, 1.0, 0.0)),
            vector(0.0, 1.0, 0.0)
        );
        assert_eq!(
            Sphere.local_normal_at(point(0.0, 0.0, 1.0)),
            vector(0.0, 0.0, 1.0)
        );
    }

    #[test]
    fn normal_at_nonaxial_point_is_normalized() {
        let s = (3.0 as Float).sqrt() / 3.0;
        let n = Sphere.local_normal_at(point(s, s, s));
        assert_eq!(n, vector(s, s, s));
        assert!(epsilon_eq(n.magnitude(), 1.0));
    }
}
