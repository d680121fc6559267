//! Rendering-facing output of the terrain core.
//!
//! Nothing here talks to a GPU. This module produces the buffers and texture
//! coordinates a rendering backend binds and draws as a quad list.

pub mod meshing;
pub mod texture;
pub mod vertex;

// Re-export commonly used types
pub use meshing::{MeshBuffers, MeshBuilder};
pub use vertex::Vertex;
