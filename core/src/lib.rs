//! Core

#[macro_use]
extern crate log;

// Re-export.
pub mod app;
pub mod color;
pub mod common;
pub mod film;
pub mod geometry;
pub mod intersection;
pub mod light;
pub mod material;
pub mod pattern;
