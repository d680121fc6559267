//! Conversion of voxel grids into renderable geometry.
//!
//! Meshing runs in two steps:
//! 1. [`visibility`] culls every cell with no empty neighbour
//! 2. [`mesh`] emits a 24-vertex cube for each remaining cell
//!
//! Faces are not merged; each visible cell always contributes all six quads.

pub mod mesh;
pub mod visibility;

pub use mesh::{MeshBuffers, MeshBuilder};
