//! Cones

#![allow(dead_code)]
use crate::cylinder::check_cap;
use core::common::*;
use core::geometry::{point, vector, Bounds3, Ray, Tuple};

/// A double-napped cone with its apex at the local origin, opening along
/// the y-axis, infinite unless truncated, optionally closed with caps.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Cone {
    /// Lower truncation plane (exclusive).
    pub minimum: Float,

    /// Upper truncation plane (exclusive).
    pub maximum: Float,

    /// Whether the truncated ends are capped.
    pub closed: bool,
}

impl Default for Cone {
    /// An infinite open cone.
    fn default() -> Self {
        Self {
            minimum: -INFINITY,
            maximum: INFINITY,
            closed: false,
        }
    }
}

impl Cone {
    /// Creates a truncated cone.
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

    /// Intersects the quadratic cone surface within the truncation range,
    /// plus the cap disks when closed. A ray parallel to one half of the
    /// cone (`a ≈ 0`) still crosses the other half once.
    ///
    /// * `ray` - The ray in the cone's local space.
    pub fn local_intersect(&self, ray: &Ray) -> Vec<Float> {
        let mut xs = vec![];

        let d = ray.direction;
        let o = ray.origin;
        let a = d.x * d.x - d.y * d.y + d.z * d.z;
        let b = 2.0 * o.x * d.x - 2.0 * o.y * d.y + 2.0 * o.z * d.z;
        let c = o.x * o.x - o.y * o.y + o.z * o.z;

        if a.abs() < EPSILON {
            if b.abs() >= EPSILON {
                self.push_in_range(ray, -c / (2.0 * b), &mut xs);
            }
        } else {
            let disc = b * b - 4.0 * a * c;
            if disc >= 0.0 {
                let sqrt_d = disc.sqrt();
                let mut t0 = (-b - sqrt_d) / (2.0 * a);
                let mut t1 = (-b + sqrt_d) / (2.0 * a);
                if t0 > t1 {
                    std::mem::swap(&mut t0, &mut t1);
                }
                self.push_in_range(ray, t0, &mut xs);
                self.push_in_range(ray, t1, &mut xs);
            }
        }

        self.intersect_caps(ray, &mut xs);
        xs
    }

    /// Appends `t` when the crossing's y-coordinate lies inside the
    /// truncation range.
    ///
    /// * `ray` - The ray in local space.
    /// * `t`   - The crossing parameter.
    /// * `xs`  - The parameter list to append to.
    fn push_in_range(&self, ray: &Ray, t: Float, xs: &mut Vec<Float>) {
        let y = ray.origin.y + t * ray.direction.y;
        if self.minimum < y && y < self.maximum {
            xs.push(t);
        }
    }

    /// Adds the crossings of the cap disks. A cone cap at plane y has
    /// radius |y|.
    ///
    /// * `ray` - The ray in local space.
    /// * `xs`  - The parameter list to append to.
    fn intersect_caps(&self, ray: &Ray, xs: &mut Vec<Float>) {
        if !self.closed || ray.direction.y.abs() < EPSILON {
            return;
        }

        for limit in [self.minimum, self.maximum] {
            let t = (limit - ray.origin.y) / ray.direction.y;
            if check_cap(ray, t, limit.abs()) {
                xs.push(t);
            }
        }
    }

    /// Returns the local-space normal: a cap normal near a closed end,
    /// otherwise the slanted wall normal.
    ///
    /// * `p` - The point in local space.
    pub fn local_normal_at(&self, p: Tuple) -> Tuple {
        let dist = p.x * p.x + p.z * p.z;
        if dist < self.maximum * self.maximum && p.y >= self.maximum - EPSILON {
            return vector(0.0, 1.0, 0.0);
        }
        if dist < self.minimum * self.minimum && p.y <= self.minimum + EPSILON {
            return vector(0.0, -1.0, 0.0);
        }

        let mut y = dist.sqrt();
        if p.y > 0.0 {
            y = -y;
        }
        vector(p.x, y, p.z)
    }

    /// Returns the local-space bounding box. The radius at a truncation
    /// plane y is |y|.
    pub fn bounds(&self) -> Bounds3 {
        let limit = self.minimum.abs().max(self.maximum.abs());
        Bounds3::new(
            point(-limit, self.minimum, -limit),
            point(limit, self.maximum, limit),
        )
    }
}
