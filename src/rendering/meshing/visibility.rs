//! Face culling over a voxel grid.
//!
//! A cell is emitted only if it is solid and at least one of its six
//! axis-aligned neighbours is empty. Neighbours outside the grid count as
//! empty, so every solid cell on a grid face is visible.

use bitvec::prelude::BitVec;
use cgmath::Point3;

use crate::voxels::block::block_side::BlockSide;
use crate::voxels::chunk::voxel_grid::{CellKey, VoxelGrid};

/// Which faces of the cell at `(x, y, z)` border an empty or out-of-range neighbour.
///
/// Indexed by `BlockSide`. An empty cell exposes nothing.
pub fn exposed_faces(grid: &VoxelGrid, x: usize, y: usize, z: usize) -> [bool; 6] {
    if !grid.is_occupied(x, y, z) {
        return [false; 6];
    }
    let (x, y, z) = (x as i64, y as i64, z as i64);
    BlockSide::all().map(|side| {
        let [dx, dy, dz] = side.normal();
        let (nx, ny, nz) = (x + dx as i64, y + dy as i64, z + dz as i64);
        !grid.in_bounds_signed(nx, ny, nz)
            || !grid.is_occupied(nx as usize, ny as usize, nz as usize)
    })
}

/// Returns `true` if the cell is solid and has at least one exposed face.
pub fn is_visible(grid: &VoxelGrid, x: usize, y: usize, z: usize) -> bool {
    exposed_faces(grid, x, y, z).contains(&true)
}

/// One bit per cell, in grid storage order, set for visible cells.
pub fn visible_mask(grid: &VoxelGrid) -> BitVec {
    let mut mask = BitVec::repeat(false, grid.len());
    for cell in visible_cells(grid) {
        if let Some(index) = grid.index(cell.x, cell.y, cell.z) {
            mask.set(index, true);
        }
    }
    mask
}

/// Iterates visible cells in emission order: x, then z, then y.
pub fn visible_cells(grid: &VoxelGrid) -> impl Iterator<Item = CellKey> + '_ {
    (0..grid.size_x()).flat_map(move |x| {
        (0..grid.size_z()).flat_map(move |z| {
            (0..grid.max_height())
                .filter(move |&y| is_visible(grid, x, y, z))
                .map(move |y| Point3::new(x, y, z))
        })
    })
}
