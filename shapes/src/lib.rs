//! Shapes

#[macro_use]
extern crate log;

// Re-export.
mod cone;
mod cube;
mod cylinder;
mod group;
mod interaction;
mod objmesh;
mod plane;
mod shape;
mod sphere;
mod triangle;

pub use cone::*;
pub use cube::*;
pub use cylinder::*;
pub use group::*;
pub use interaction::*;
pub use objmesh::*;
pub use plane::*;
pub use shape::*;
pub use sphere::*;
pub use triangle::*;
