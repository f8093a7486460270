//! Transformations

#![allow(dead_code)]
use super::{matrix4x4, Matrix4x4, Tuple};
use crate::common::Float;

/// Returns a translation matrix.
///
/// * `x` - Translation along the x-axis.
/// * `y` - Translation along the y-axis.
/// * `z` - Translation along the z-axis.
#[rustfmt::skip]
pub fn translation(x: Float, y: Float, z: Float) -> Matrix4x4 {
    matrix4x4(
        1.0, 0.0, 0.0,   x,
        0.0, 1.0, 0.0,   y,
        0.0, 0.0, 1.0,   z,
        0.0, 0.0, 0.0, 1.0,
    )
}

/// Returns a scaling matrix.
///
/// * `x` - Scale factor along the x-axis.
/// * `y` - Scale factor along the y-axis.
/// * `z` - Scale factor along the z-axis.
#[rustfmt::skip]
pub fn scaling(x: Float, y: Float, z: Float) -> Matrix4x4 {
    matrix4x4(
          x, 0.0, 0.0, 0.0,
        0.0,   y, 0.0, 0.0,
        0.0, 0.0,   z, 0.0,
        0.0, 0.0, 0.0, 1.0,
    )
}

/// Returns a rotation matrix about the x-axis.
///
/// * `r` - Angle in radians.
#[rustfmt::skip]
pub fn rotation_x(r: Float) -> Matrix4x4 {
    let (sin_r, cos_r) = r.sin_cos();
    matrix4x4(
        1.0,   0.0,    0.0, 0.0,
        0.0, cos_r, -sin_r, 0.0,
        0.0, sin_r,  cos_r, 0.0,
        0.0,   0.0,    0.0, 1.0,
    )
}

/// Returns a rotation matrix about the y-axis.
///
/// * `r` - Angle in radians.
#[rustfmt::skip]
pub fn rotation_y(r: Float) -> Matrix4x4 {
    let (sin_r, cos_r) = r.sin_cos();
    matrix4x4(
         cos_r, 0.0, sin_r, 0.0,
           0.0, 1.0,   0.0, 0.0,
        -sin_r, 0.0, cos_r, 0.0,
           0.0, 0.0,   0.0, 1.0,
    )
}

/// Returns a rotation matrix about the z-axis.
///
/// * `r` - Angle in radians.
#[rustfmt::skip]
pub fn rotation_z(r: Float) -> Matrix4x4 {
    let (sin_r, cos_r) = r.sin_cos();
    matrix4x4(
        cos_r, -sin_r, 0.0, 0.0,
        sin_r,  cos_r, 0.0, 0.0,
          0.0,    0.0, 1.0, 0.0,
          0.0,    0.0, 0.0, 1.0,
    )
}

/// Returns a shearing matrix where each coordinate changes in proportion
/// to the other two.
///
/// * `xy` - Shear of x in proportion to y.
/// * `xz` - Shear of x in proportion to z.
/// * `yx` - Shear of y in proportion to x.
/// * `yz` - Shear of y in proportion to z.
/// * `zx` - Shear of z in proportion to x.
/// * `zy` - Shear of z in proportion to y.
#[rustfmt::skip]
pub fn shearing(xy: Float, xz: Float, yx: Float, yz: Float, zx: Float, zy: Float) -> Matrix4x4 {
    matrix4x4(
        1.0,  xy,  xz, 0.0,
         yx, 1.0,  yz, 0.0,
         zx,  zy, 1.0, 0.0,
        0.0, 0.0, 0.0, 1.0,
    )
}

/// Returns the world-to-camera transform for an eye positioned at `from`,
/// looking at `to`, with `up` indicating which direction is up.
///
/// * `from` - The eye position.
/// * `to`   - The point looked at.
/// * `up`   - The up vector (need not be normalized or exactly
///            perpendicular).
#[rustfmt::skip]
pub fn view_transform(from: Tuple, to: Tuple, up: Tuple) -> Matrix4x4 {
    let forward = (to - from).normalize();
    let left = forward.cross(&up.normalize());
    let true_up = left.cross(&forward);

    let orientation = matrix4x4(
           left.x,     left.y,     left.z, 0.0,
        true_up.x,  true_up.y,  true_up.z, 0.0,
       -forward.x, -forward.y, -forward.z, 0.0,
              0.0,        0.0,        0.0, 1.0,
    );
    orientation * translation(-from.x, -from.y, -from.z)
}
