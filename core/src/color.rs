//! RGB colors

#![allow(dead_code)]
use crate::common::*;
use std::ops::{Add, Mul, Sub};

/// An RGB color with unbounded Float channels. Out-of-range values are
/// tolerated until final pixel-depth encoding.
#[derive(Copy, Clone, Debug, Default)]
pub struct Color {
    /// Red channel.
    pub r: Float,

    /// Green channel.
    pub g: Float,

    /// Blue channel.
    pub b: Float,
}

/// Black (all channels 0).
pub const BLACK: Color = Color {
    r: 0.0,
    g: 0.0,
    b: 0.0,
};

/// White (all channels 1).
pub const WHITE: Color = Color {
    r: 1.0,
    g: 1.0,
    b: 1.0,
};

impl Color {
    /// Creates a new color.
    ///
    /// * `r` - Red channel.
    /// * `g` - Green channel.
    /// * `b` - Blue channel.
    pub fn new(r: Float, g: Float, b: Float) -> Self {
        Self { r, g, b }
    }
}

impl PartialEq for Color {
    /// Approximate equality within `EPSILON` on every channel.
    ///
    /// * `other` - The color to compare.
    fn eq(&self, other: &Self) -> bool {
        epsilon_eq(self.r, other.r) && epsilon_eq(self.g, other.g) && epsilon_eq(self.b, other.b)
    }
}

impl Add for Color {
    type Output = Color;

    /// Adds two colors channel-wise.
    ///
    /// * `other` - The color to add.
    fn add(self, other: Self) -> Self::Output {
        Color::new(self.r + other.r, self.g + other.g, self.b + other.b)
    }
}

impl Sub for Color {
    type Output = Color;

    /// Subtracts two colors channel-wise.
    ///
    /// * `other` - The color to subtract.
    fn sub(self, other: Self) -> Self::Output {
        Color::new(self.r - other.r, self.g - other.g, self.b - other.b)
    }
}

impl Mul<Float> for Color {
    type Output = Color;

    /// Scales every channel.
    ///
    /// * `s` - The scalar.
    fn mul(self, s: Float) -> Self::Output {
        Color::new(self.r * s, self.g * s, self.b * s)
    }
}

impl Mul for Color {
    type Output = Color;

    /// Hadamard (component-wise) product of two colors.
    ///
    /// * `other` - The other color.
    fn mul(self, other: Self) -> Self::Output {
        Color::new(self.r * other.r, self.g * other.g, self.b * other.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn colors_are_rgb_tuples() {
        let c = Color::new(-0.5, 0.4, 1.7);
        assert_eq!(c.r, -0.5);
        assert_eq!(c.g, 0.4);
        assert_eq!(c.b, 1.7);
    }

    #[test]
    fn adding_and_subtracting_colors() {
        let c1 = Color::new(0.9, 0.6, 0.75);
        let c2 = Color::new(0.7, 0.1, 0.25);
        assert_eq!(c1 + c2, Color::new(1.6, 0.7, 1.0));
        assert_eq!(c1 - c2, Color::new(0.2, 0.5, 0.5));
    }

    #[test]
    fn multiplying_color_by_scalar() {
        let c = Color::new(0.2, 0.3, 0.4);
        assert_eq!(c * 2.0, Color::new(0.4, 0.6, 0.8));
    }

    #[test]
    fn multiplying_colors_is_hadamard_product() {
        let c1 = Color::new(1.0, 0.2, 0.4);
        let c2 = Color::new(0.9, 1.0, 0.1);
        assert_eq!(c1 * c2, Color::new(0.9, 0.2, 0.04));
    }
}
