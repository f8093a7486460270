//! Perspective Camera

use core::common::Float;
use core::geometry::{point, Matrix4x4, Ray, IDENTITY_MATRIX};

/// A pinhole camera mapping a canvas of `hsize` x `vsize` pixels onto a
/// canvas plane one unit in front of the camera.
#[derive(Copy, Clone, Debug)]
pub struct PerspectiveCamera {
    /// Horizontal canvas size in pixels.
    pub hsize: usize,

    /// Vertical canvas size in pixels.
    pub vsize: usize,

    /// Vertical field of view in radians.
    pub field_of_view: Float,

    /// World-to-camera transformation.
    transform: Matrix4x4,

    /// Cached inverse of `transform`.
    inverse_transform: Matrix4x4,

    /// World-space size of one pixel on the canvas plane.
    pixel_size: Float,

    /// Half the canvas width in world units.
    half_width: Float,

    /// Half the canvas height in world units.
    half_height: Float,
}

impl PerspectiveCamera {
    /// Creates a camera with the identity view transformation.
    ///
    /// * `hsize`         - Horizontal canvas size in pixels.
    /// * `vsize`         - Vertical canvas size in pixels.
    /// * `field_of_view` - Vertical field of view in radians.
    pub fn new(hsize: usize, vsize: usize, field_of_view: Float) -> Self {
        let half_view = (field_of_view / 2.0).tan();
        let aspect = hsize as Float / vsize as Float;

        let (half_width, half_height) = if aspect >= 1.0 {
            (half_view, half_view / aspect)
        } else {
            (half_view * aspect, half_view)
        };

        Self {
            hsize,
            vsize,
            field_of_view,
            transform: IDENTITY_MATRIX,
            inverse_transform: IDENTITY_MATRIX,
            pixel_size: half_width * 2.0 / hsize as Float,
            half_width,
            half_height,
        }
    }

    /// Returns the world-to-camera transformation.
    pub fn transform(&self) -> &Matrix4x4 {
        &self.transform
    }

    /// Returns the cached inverse of the view transformation.
    pub fn inverse_transform(&self) -> &Matrix4x4 {
        &self.inverse_transform
    }

    /// Returns the world-space size of one pixel.
    pub fn pixel_size(&self) -> Float {
        self.pixel_size
    }

    /// Sets the view transformation, caching its inverse.
    ///
    /// * `transform` - The world-to-camera transformation.
    pub fn set_transform(&mut self, transform: Matrix4x4) {
        self.transform = transform;
        self.inverse_transform = transform.inverse();
    }

    /// Returns the world-space ray through the center of the given pixel.
    ///
    /// * `px` - Pixel column.
    /// * `py` - Pixel row.
    pub fn ray_for_pixel(&self, px: usize, py: usize) -> Ray {
        // Offsets from the canvas edge to the pixel's center.
        let x_offset = (px as Float + 0.5) * self.pixel_size;
        let y_offset = (py as Float + 0.5) * self.pixel_size;

        // The camera looks toward -z, so +x is to the left.
        let world_x = self.half_width - x_offset;
        let world_y = self.half_height - y_offset;

        // The canvas plane is at z = -1.
        let pixel = self.inverse_transform * point(world_x, world_y, -1.0);
        let origin = self.inverse_transform * point(0.0, 0.0, 0.0);
        let direction = (pixel - origin).normalize();

        Ray::new(origin, direction)
    }
}
