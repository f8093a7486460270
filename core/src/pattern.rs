//! Surface patterns

#![allow(dead_code)]
use crate::color::Color;
use crate::geometry::{Matrix4x4, Tuple, IDENTITY_MATRIX};

/// The procedural rule a pattern uses to pick between its two colors.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum PatternKind {
    /// Always the first color, regardless of the point.
    Solid,

    /// Alternates by `floor(x)` parity.
    Stripe,

    /// Linear interpolation by the fractional part of x.
    Gradient,

    /// Alternates by `floor(x² + z²)` parity.
    Ring,

    /// Alternates by parity of `floor(x) + floor(y) + floor(z)`.
    Checker,
}

/// A procedural color: a pure function of a point in pattern space.
/// Pattern space nests inside object space, which nests inside world
/// space.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Pattern {
    /// The procedural rule.
    pub kind: PatternKind,

    /// First color.
    pub a: Color,

    /// Second color.
    pub b: Color,

    /// Pattern-to-object transform.
    transform: Matrix4x4,

    /// Cached inverse of the transform.
    inverse_transform: Matrix4x4,
}

impl Pattern {
    fn new(kind: PatternKind, a: Color, b: Color) -> Self {
        Self {
            kind,
            a,
            b,
            transform: IDENTITY_MATRIX,
            inverse_transform: IDENTITY_MATRIX,
        }
    }

    /// Creates a solid color pattern.
    ///
    /// * `a` - The color.
    pub fn solid(a: Color) -> Self {
        Self::new(PatternKind::Solid, a, a)
    }

    /// Creates a stripe pattern alternating along the x-axis with period 2.
    ///
    /// * `a` - First color.
    /// * `b` - Second color.
    pub fn stripe(a: Color, b: Color) -> Self {
        Self::new(PatternKind::Stripe, a, b)
    }

    /// Creates a gradient pattern blending along the x-axis.
    ///
    /// * `a` - Color at x = 0.
    /// * `b` - Color at x = 1.
    pub fn gradient(a: Color, b: Color) -> Self {
        Self::new(PatternKind::Gradient, a, b)
    }

    /// Creates a ring pattern of concentric circles in the xz-plane.
    ///
    /// * `a` - First color.
    /// * `b` - Second color.
    pub fn ring(a: Color, b: Color) -> Self {
        Self::new(PatternKind::Ring, a, b)
    }

    /// Creates a 3-D checker pattern.
    ///
    /// * `a` - First color.
    /// * `b` - Second color.
    pub fn checker(a: Color, b: Color) -> Self {
        Self::new(PatternKind::Checker, a, b)
    }

    /// Sets the pattern-to-object transform, caching its inverse.
    ///
    /// * `transform` - The new transform.
    pub fn set_transform(&mut self, transform: Matrix4x4) {
        self.transform = transform;
        self.inverse_transform = transform.inverse();
    }

    /// Builder variant of [`Self::set_transform`].
    ///
    /// * `transform` - The new transform.
    pub fn with_transform(mut self, transform: Matrix4x4) -> Self {
        self.set_transform(transform);
        self
    }

    /// Returns the pattern-to-object transform.
    pub fn transform(&self) -> Matrix4x4 {
        self.transform
    }

    /// Evaluates the pattern at a point in pattern space.
    ///
    /// * `p` - The point.
    pub fn color_at(&self, p: Tuple) -> Color {
        match self.kind {
            PatternKind::Solid => self.a,
            PatternKind::Stripe => {
                if p.x.floor() as i64 % 2 == 0 {
                    self.a
                } else {
                    self.b
                }
            }
            PatternKind::Gradient => {
                let distance = self.b - self.a;
                self.a + distance * (p.x - p.x.floor())
            }
            PatternKind::Ring => {
                if (p.x * p.x + p.z * p.z).floor() as i64 % 2 == 0 {
                    self.a
                } else {
                    self.b
                }
            }
            PatternKind::Checker => {
                if (p.x.floor() + p.y.floor() + p.z.floor()) as i64 % 2 == 0 {
                    self.a
                } else {
                    self.b
                }
            }
        }
    }

    /// Evaluates the pattern at a world-space point on an object: the point
    /// is pulled into object space and then into pattern space.
    ///
    /// * `world_to_object` - The object's world-to-object transform.
    /// * `world_point`     - The point in world space.
    pub fn color_at_object(&self, world_to_object: &Matrix4x4, world_point: Tuple) -> Color {
        let object_point = *world_to_object * world_point;
        let pattern_point = self.inverse_transform * object_point;
        self.color_at(pattern_point)
    }
}
