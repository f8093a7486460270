//! Common

#![allow(dead_code)]

/// Use 64-bit precision for floating point numbers.
pub type Float = f64;

/// Infinty (∞)
pub const INFINITY: Float = Float::INFINITY;

/// PI (π)
pub const PI: Float = std::f64::consts::PI;

/// PI/2 (π/2)
pub const PI_OVER_TWO: Float = PI * 0.5;

/// PI/4 (π/4)
pub const PI_OVER_FOUR: Float = PI * 0.25;

/// 2*PI (2π)
pub const TWO_PI: Float = PI * 2.0;

/// Tolerance used for approximate floating point comparisons and for
/// nudging secondary ray origins off surfaces.
pub const EPSILON: Float = 1e-5;

/// Returns true if two floating point values are within `EPSILON` of each
/// other.
///
/// * `a` - First value.
/// * `b` - Second value.
#[inline(always)]
pub fn epsilon_eq(a: Float, b: Float) -> bool {
    (a - b).abs() < EPSILON
}

/// Clamps a value to the given range.
///
/// * `val` - The value.
/// * `low` - Lower bound.
/// * `high` - Upper bound.
#[inline(always)]
pub fn clamp(val: Float, low: Float, high: Float) -> Float {
    if val < low {
        low
    } else if val > high {
        high
    } else {
        val
    }
}

/// Linearly interpolates between two values.
///
/// * `t` - The interpolation parameter.
/// * `a` - Value at t = 0.
/// * `b` - Value at t = 1.
#[inline(always)]
pub fn lerp(t: Float, a: Float, b: Float) -> Float {
    a + t * (b - a)
}
