//! Cube meshing for terrain rendering.
//!
//! # Architecture
//! - [`MeshBuilder`]: walks the visible cells of a grid and emits one cube each
//! - [`MeshBuffers`]: the resulting position, colour and texture coordinate buffers
//! - [`Face`]: the four world-space corners of one cube face
//!
//! # Usage
//! ```
//! use voxel_terrain::config::ColorMode;
//! use voxel_terrain::rendering::meshing::mesh::MeshBuilder;
//! use voxel_terrain::voxels::block::block_type::BlockType;
//! use voxel_terrain::voxels::chunk::voxel_grid::VoxelGrid;
//!
//! let mut grid = VoxelGrid::new(2, 2, 2);
//! grid.set(0, 0, 0, BlockType::STONE);
//!
//! let buffers = MeshBuilder::new([0, 0, 0], 1.0, ColorMode::Textured).build(&grid);
//! assert_eq!(buffers.vertex_count(), 24);
//! ```

mod face;
mod mesh;

pub use face::Face;
pub use mesh::*;
