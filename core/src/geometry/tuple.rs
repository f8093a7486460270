//! 4-component tuples

#![allow(dead_code)]
use crate::common::*;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// A 4-component tuple representing either a point (w = 1) or a vector
/// (w = 0) in homogeneous coordinates.
#[derive(Copy, Clone, Debug, Default)]
pub struct Tuple {
    /// X-coordinate.
    pub x: Float,

    /// Y-coordinate.
    pub y: Float,

    /// Z-coordinate.
    pub z: Float,

    /// Homogeneous coordinate; 1 for points, 0 for vectors.
    pub w: Float,
}

impl Tuple {
    /// Creates a new tuple.
    ///
    /// * `x` - X-coordinate.
    /// * `y` - Y-coordinate.
    /// * `z` - Z-coordinate.
    /// * `w` - Homogeneous coordinate.
    pub fn new(x: Float, y: Float, z: Float, w: Float) -> Self {
        Self { x, y, z, w }
    }

    /// Returns true if the tuple is a point.
    pub fn is_point(&self) -> bool {
        self.w == 1.0
    }

    /// Returns true if the tuple is a vector.
    pub fn is_vector(&self) -> bool {
        self.w == 0.0
    }

    /// Returns the length of the tuple.
    pub fn magnitude(&self) -> Float {
        (self.x * self.x + self.y * self.y + self.z * self.z + self.w * self.w).sqrt()
    }

    /// Returns the unit tuple pointing in the same direction.
    ///
    /// Normalizing a zero-length vector is undefined and yields NaN
    /// components; callers are expected never to do so.
    pub fn normalize(&self) -> Self {
        *self / self.magnitude()
    }

    /// Returns the dot product with another tuple.
    ///
    /// * `other` - The other tuple.
    pub fn dot(&self, other: &Tuple) -> Float {
        self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w
    }

    /// Returns the cross product with another vector.
    ///
    /// * `other` - The other vector.
    pub fn cross(&self, other: &Tuple) -> Self {
        vector(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Returns this vector reflected about a normal.
    ///
    /// * `normal` - The surface normal.
    pub fn reflect(&self, normal: &Tuple) -> Self {
        *self - *normal * 2.0 * self.dot(normal)
    }
}

/// Creates a new point (w = 1).
///
/// * `x` - X-coordinate.
/// * `y` - Y-coordinate.
/// * `z` - Z-coordinate.
pub fn point(x: Float, y: Float, z: Float) -> Tuple {
    Tuple::new(x, y, z, 1.0)
}

/// Creates a new vector (w = 0).
///
/// * `x` - X-coordinate.
/// * `y` - Y-coordinate.
/// * `z` - Z-coordinate.
pub fn vector(x: Float, y: Float, z: Float) -> Tuple {
    Tuple::new(x, y, z, 0.0)
}

impl PartialEq for Tuple {
    /// Approximate equality within `EPSILON` on every component.
    ///
    /// * `other` - The tuple to compare.
    fn eq(&self, other: &Self) -> bool {
        epsilon_eq(self.x, other.x)
            && epsilon_eq(self.y, other.y)
            && epsilon_eq(self.z, other.z)
            && epsilon_eq(self.w, other.w)
    }
}

impl Add for Tuple {
    type Output = Tuple;

    /// Adds two tuples. Point + vector = point, vector + vector = vector.
    ///
    /// * `other` - The tuple to add.
    fn add(self, other: Self) -> Self::Output {
        Tuple::new(
            self.x + other.x,
            self.y + other.y,
            self.z + other.z,
            self.w + other.w,
        )
    }
}

impl Sub for Tuple {
    type Output = Tuple;

    /// Subtracts two tuples. Point - point = vector, point - vector = point.
    ///
    /// * `other` - The tuple to subtract.
    fn sub(self, other: Self) -> Self::Output {
        Tuple::new(
            self.x - other.x,
            self.y - other.y,
            self.z - other.z,
            self.w - other.w,
        )
    }
}

impl Neg for Tuple {
    type Output = Tuple;

    /// Negates every component.
    fn neg(self) -> Self::Output {
        Tuple::new(-self.x, -self.y, -self.z, -self.w)
    }
}

impl Mul<Float> for Tuple {
    type Output = Tuple;

    /// Scales every component.
    ///
    /// * `s` - The scalar.
    fn mul(self, s: Float) -> Self::Output {
        Tuple::new(self.x * s, self.y * s, self.z * s, self.w * s)
    }
}

impl Div<Float> for Tuple {
    type Output = Tuple;

    /// Divides every component.
    ///
    /// * `s` - The scalar.
    fn div(self, s: Float) -> Self::Output {
        Tuple::new(self.x / s, self.y / s, self.z / s, self.w / s)
    }
}
