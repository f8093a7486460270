//! Lights

#![allow(dead_code)]
use crate::color::Color;
use crate::geometry::Tuple;

/// A point light: a position with no size and an intensity color.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PointLight {
    /// Position of the light.
    pub position: Tuple,

    /// Intensity of the light.
    pub intensity: Color,
}

impl PointLight {
    /// Creates a new point light.
    ///
    /// * `position`  - Position of the light. Must be a point.
    /// * `intensity` - Intensity of the light.
    pub fn new(position: Tuple, intensity: Color) -> Self {
        debug_assert!(position.is_point(), "light position must be a point");
        Self {
            position,
            intensity,
        }
    }
}
