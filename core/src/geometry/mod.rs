//! Geometry

mod bounds;
mod matrix;
mod ray;
mod transform;
mod tuple;

// Re-export.
pub use bounds::*;
pub use matrix::*;
pub use ray::*;
pub use transform::*;
pub use tuple::*;
