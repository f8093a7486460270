//! Integrators

#[macro_use]
extern crate log;

// Re-export.
mod scene;
mod whitted;

pub use scene::*;
pub use whitted::*;
