//! Mesh data structures and operations for terrain rendering.
//!
//! Converts a voxel grid into three parallel vertex buffers (positions, colours,
//! texture coordinates) describing a quad list: 6 quads and 24 vertices per
//! visible cell, faces in `BlockSide` order, each quad counter-clockwise seen
//! from outside.

use cgmath::Point3;

use crate::config::ColorMode;
use crate::rendering::meshing::visibility::visible_cells;
use crate::rendering::vertex::Vertex;
use crate::voxels::block::{block_side::BlockSide, Block};
use crate::voxels::chunk::voxel_grid::VoxelGrid;

use super::face::Face;

/// Vertices emitted per visible cell.
pub const VERTICES_PER_CELL: usize = 24;

const WHITE: [f32; 3] = [1.0, 1.0, 1.0];

/// The three output buffers of one generation pass.
///
/// All three hold `visible_cells * 24` entries. Once built they are never
/// modified; a new pass produces a new value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeshBuffers {
    /// Vertex positions in world space.
    pub positions: Vec<[f32; 3]>,
    /// Vertex colours.
    pub colors: Vec<[f32; 3]>,
    /// Atlas texture coordinates.
    pub tex_coords: Vec<[f32; 2]>,
    /// Number of cells emitted.
    pub visible_cells: usize,
}

impl MeshBuffers {
    /// Number of vertices in each buffer.
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// `true` when no cell was emitted.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Positions as a flat `x, y, z, x, y, z, ...` slice.
    pub fn position_floats(&self) -> &[f32] {
        bytemuck::cast_slice(&self.positions)
    }

    /// Colours as a flat `r, g, b, ...` slice.
    pub fn color_floats(&self) -> &[f32] {
        bytemuck::cast_slice(&self.colors)
    }

    /// Texture coordinates as a flat `u, v, ...` slice.
    pub fn tex_coord_floats(&self) -> &[f32] {
        bytemuck::cast_slice(&self.tex_coords)
    }

    /// Raw position bytes for upload.
    pub fn position_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.positions)
    }

    /// Raw colour bytes for upload.
    pub fn color_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.colors)
    }

    /// Raw texture coordinate bytes for upload.
    pub fn tex_coord_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.tex_coords)
    }

    /// Zips the three buffers into one interleaved vertex list.
    pub fn interleaved(&self) -> Vec<Vertex> {
        self.positions
            .iter()
            .zip(&self.colors)
            .zip(&self.tex_coords)
            .map(|((&position, &color), &tex_coords)| Vertex::new(position, color, tex_coords))
            .collect()
    }
}

/// Builds [`MeshBuffers`] from a grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeshBuilder {
    /// World-space centre of cell `(0, 0, 0)`.
    pub origin: Point3<f32>,
    /// Edge length of one cell.
    pub cell_length: f32,
    /// White or per-material tint.
    pub color_mode: ColorMode,
}

impl MeshBuilder {
    /// Creates a builder for a chunk placed at `origin`.
    pub fn new(origin: [i32; 3], cell_length: f32, color_mode: ColorMode) -> Self {
        MeshBuilder {
            origin: Point3::new(origin[0] as f32, origin[1] as f32, origin[2] as f32),
            cell_length,
            color_mode,
        }
    }

    /// World-space centre of a cell: `origin + (x, y, z) * cell_length`.
    pub fn cell_centre(&self, x: usize, y: usize, z: usize) -> Point3<f32> {
        Point3::new(
            self.origin.x + x as f32 * self.cell_length,
            self.origin.y + y as f32 * self.cell_length,
            self.origin.z + z as f32 * self.cell_length,
        )
    }

    /// Emits a full cube for every visible cell of `grid`.
    pub fn build(&self, grid: &VoxelGrid) -> MeshBuffers {
        let mut buffers = MeshBuffers::default();
        let half = self.cell_length / 2.0;

        for cell in visible_cells(grid) {
            let block_type = grid.block_type_at(cell.x, cell.y, cell.z);
            let descriptor = Block::descriptor(block_type);
            let color = match self.color_mode {
                ColorMode::Textured => WHITE,
                ColorMode::Tinted => descriptor.tint,
            };
            let centre = self.cell_centre(cell.x, cell.y, cell.z);

            for side in BlockSide::all() {
                let face = Face::new(centre, half, side);
                let quad = &descriptor.face_tex_coords[side as usize];
                for (corner, uv) in face.corners().into_iter().zip(quad) {
                    buffers.positions.push(corner.into());
                    buffers.colors.push(color);
                    buffers.tex_coords.push(*uv);
                }
            }
            buffers.visible_cells += 1;
        }

        buffers
    }
}
