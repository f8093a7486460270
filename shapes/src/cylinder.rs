//! Cylinders

#![allow(dead_code)]
use core::common::*;
use core::geometry::{point, vector, Bounds3, Ray, Tuple};

/// A cylinder of radius 1 around the local y-axis, infinite unless
/// truncated, optionally closed with flat caps.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Cylinder {
    /// Lower truncation plane (exclusive).
    pub minimum: Float,

    /// Upper truncation plane (exclusive).
    pub maximum: Float,

    /// Whether the truncated ends are capped.
    pub closed: bool,
}

impl Default for Cylinder {
    /// An infinite open cylinder.
    fn default() -> Self {
        Self {
            minimum: -INFINITY,
            maximum: INFINITY,
            closed: false,
        }
    }
}

impl Cylinder {
    /// Creates a truncated cylinder.
    ///
    /// * `minimum` - Lower truncation plane.
    /// * `maximum` - Upper truncation plane.
    /// * `closed`  - Whether the ends are capped.
    pub fn new(minimum: Float, maximum: Float, closed: bool) -> Self {
        Self {
            minimum,
            maximum,
            closed,
        }
    }

    /// Intersects the quadratic wall within the truncation range, plus the
    /// two cap disks when closed.
    ///
    /// * `ray` - The ray in the cylinder's local space.
    pub fn local_intersect(&self, ray: &Ray) -> Vec<Float> {
        let mut xs = vec![];

        let a = ray.direction.x * ray.direction.x + ray.direction.z * ray.direction.z;
        if a.abs() >= EPSILON {
            let b = 2.0 * ray.origin.x * ray.direction.x + 2.0 * ray.origin.z * ray.direction.z;
            let c = ray.origin.x * ray.origin.x + ray.origin.z * ray.origin.z - 1.0;

            let disc = b * b - 4.0 * a * c;
            if disc < 0.0 {
                return vec![];
            }

            let sqrt_d = disc.sqrt();
            let mut t0 = (-b - sqrt_d) / (2.0 * a);
            let mut t1 = (-b + sqrt_d) / (2.0 * a);
            if t0 > t1 {
                std::mem::swap(&mut t0, &mut t1);
            }

            for t in [t0, t1] {
                let y = ray.origin.y + t * ray.direction.y;
                if self.minimum < y && y < self.maximum {
                    xs.push(t);
                }
            }
        }

        self.intersect_caps(ray, &mut xs);
        xs
    }

    /// Adds the crossings of the two cap disks, when the cylinder is
    /// closed and the ray is not parallel to the caps.
    ///
    /// * `ray` - The ray in local space.
    /// * `xs`  - The parameter list to append to.
    fn intersect_caps(&self, ray: &Ray, xs: &mut Vec<Float>) {
        if !self.closed || ray.direction.y.abs() < EPSILON {
            return;
        }

        for limit in [self.minimum, self.maximum] {
            let t = (limit - ray.origin.y) / ray.direction.y;
            if check_cap(ray, t, 1.0) {
                xs.push(t);
            }
        }
    }

    /// Returns the local-space normal: a cap normal near a closed end,
    /// otherwise the radial wall normal.
    ///
    /// * `p` - The point in local space.
    pub fn local_normal_at(&self, p: Tuple) -> Tuple {
        let dist = p.x * p.x + p.z * p.z;
        if dist < 1.0 && p.y >= self.maximum - EPSILON {
            vector(0.0, 1.0, 0.0)
        } else if dist < 1.0 && p.y <= self.minimum + EPSILON {
            vector(0.0, -1.0, 0.0)
        } else {
            vector(p.x, 0.0, p.z)
        }
    }

    /// Returns the local-space bounding box, unbounded in y unless
    /// truncated.
    pub fn bounds(&self) -> Bounds3 {
        Bounds3::new(point(-1.0, self.minimum, -1.0), point(1.0, self.maximum, 1.0))
    }
}

/// Returns true if the crossing at parameter `t` lies within a cap disk
/// of the given radius.
///
/// * `ray`    - The ray in local space.
/// * `t`      - The crossing parameter.
/// * `radius` - The cap radius.
pub(crate) fn check_cap(ray: &Ray, t: Float, radius: Float) -> bool {
    let x = ray.origin.x + t * ray.direction.x;
    let z = ray.origin.z + t * ray.direction.z;
    x * x + z * z <= radius * radius
}
