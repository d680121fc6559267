//! # Voxel Grid Module
//!
//! Dense storage for one chunk's cells.
//!
//! ## Layout
//!
//! Cells live in a single flat `Vec<Block>`, one byte each, indexed
//! `(x * max_height + y) * size_z + z`. Every access goes through
//! [`VoxelGrid::index`], which rejects coordinates outside
//! `[0, size_x) x [0, max_height) x [0, size_z)`.

use cgmath::Point3;

use crate::voxels::block::{block_type::BlockType, Block};

/// Integer coordinate of a cell, used as a set/queue key during flood fill.
pub type CellKey = Point3<usize>;

/// A dense 3-D volume of optional material cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoxelGrid {
    size_x: usize,
    max_height: usize,
    size_z: usize,
    blocks: Vec<Block>,
}

impl VoxelGrid {
    /// Creates a grid with every cell empty.
    pub fn new(size_x: usize, max_height: usize, size_z: usize) -> Self {
        VoxelGrid {
            size_x,
            max_height,
            size_z,
            blocks: vec![Block::AIR; size_x * max_height * size_z],
        }
    }

    /// Extent along X.
    pub fn size_x(&self) -> usize {
        self.size_x
    }

    /// Number of vertical levels.
    pub fn max_height(&self) -> usize {
        self.max_height
    }

    /// Extent along Z.
    pub fn size_z(&self) -> usize {
        self.size_z
    }

    /// Total number of cells, empty ones included.
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// `true` when the grid has no cells at all.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Returns `true` if `(x, y, z)` addresses a cell of this grid.
    pub fn in_bounds(&self, x: usize, y: usize, z: usize) -> bool {
        x < self.size_x && y < self.max_height && z < self.size_z
    }

    /// Signed variant of [`in_bounds`](Self::in_bounds) for coordinates that may be negative.
    pub fn in_bounds_signed(&self, x: i64, y: i64, z: i64) -> bool {
        x >= 0 && y >= 0 && z >= 0 && self.in_bounds(x as usize, y as usize, z as usize)
    }

    /// Maps a coordinate to its flat index, or `None` outside the grid.
    pub fn index(&self, x: usize, y: usize, z: usize) -> Option<usize> {
        if self.in_bounds(x, y, z) {
            Some((x * self.max_height + y) * self.size_z + z)
        } else {
            None
        }
    }

    /// The material at a cell, `None` if the coordinate is out of range.
    pub fn get(&self, x: usize, y: usize, z: usize) -> Option<BlockType> {
        self.index(x, y, z).map(|i| self.blocks[i].block_type())
    }

    /// The material at a cell, treating out-of-range coordinates as `AIR`.
    pub fn block_type_at(&self, x: usize, y: usize, z: usize) -> BlockType {
        self.get(x, y, z).unwrap_or(BlockType::AIR)
    }

    /// Returns `true` if the cell exists and holds a solid material.
    pub fn is_occupied(&self, x: usize, y: usize, z: usize) -> bool {
        self.block_type_at(x, y, z).is_solid()
    }

    /// Writes a cell. Returns `false` and leaves the grid untouched when out of range.
    pub fn set(&mut self, x: usize, y: usize, z: usize, block_type: BlockType) -> bool {
        match self.index(x, y, z) {
            Some(i) => {
                self.blocks[i] = Block::new(block_type);
                true
            }
            None => false,
        }
    }

    /// Key-based read, for flood-fill code that carries `CellKey`s around.
    pub fn get_key(&self, key: CellKey) -> Option<BlockType> {
        self.get(key.x, key.y, key.z)
    }

    /// Key-based write.
    pub fn set_key(&mut self, key: CellKey, block_type: BlockType) -> bool {
        self.set(key.x, key.y, key.z, block_type)
    }

    /// Topmost solid cell of a column at or below `from_y`, not going below `to_y`.
    pub fn topmost_solid(&self, x: usize, z: usize, from_y: usize, to_y: usize) -> Option<usize> {
        if from_y < to_y {
            return None;
        }
        (to_y..=from_y).rev().find(|&y| self.is_occupied(x, y, z))
    }

    /// Number of cells holding `block_type`.
    pub fn count(&self, block_type: BlockType) -> usize {
        let id = Block::new(block_type);
        self.blocks.iter().filter(|b| **b == id).count()
    }

    /// Raw cell bytes, one material id per cell in index order.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.blocks)
    }

    /// Iterates all solid cells in storage order (x, then y, then z).
    pub fn solid_cells(&self) -> impl Iterator<Item = (CellKey, BlockType)> + '_ {
        let (max_height, size_z) = (self.max_height, self.size_z);
        self.blocks.iter().enumerate().filter_map(move |(i, block)| {
            let block_type = block.block_type();
            if !block_type.is_solid() {
                return None;
            }
            let z = i % size_z;
            let y = (i / size_z) % max_height;
            let x = i / (size_z * max_height);
            Some((Point3::new(x, y, z), block_type))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_grid_is_all_air() {
        let grid = VoxelGrid::new(4, 3, 2);
        assert_eq!(grid.len(), 24);
        assert_eq!(grid.count(BlockType::AIR), 24);
        assert_eq!(grid.solid_cells().count(), 0);
    }

    #[test]
    fn index_rejects_out_of_range() {
        let grid = VoxelGrid::new(4, 3, 2);
        assert_eq!(grid.index(0, 0, 0), Some(0));
        assert_eq!(grid.index(3, 2, 1), Some(23));
        assert_eq!(grid.index(4, 0, 0), None);
        assert_eq!(grid.index(0, 3, 0), None);
        assert_eq!(grid.index(0, 0, 2), None);
        assert!(!grid.in_bounds_signed(-1, 0, 0));
    }

    #[test]
    fn set_and_get_round_trip() {
        let mut grid = VoxelGrid::new(4, 3, 2);
        assert!(grid.set(2, 1, 1, BlockType::STONE));
        assert_eq!(grid.get(2, 1, 1), Some(BlockType::STONE));
        assert!(grid.is_occupied(2, 1, 1));
        assert!(!grid.set(9, 1, 1, BlockType::STONE));
        assert_eq!(grid.get(9, 1, 1), None);
        assert_eq!(grid.block_type_at(9, 1, 1), BlockType::AIR);
    }

    #[test]
    fn solid_cells_reports_coordinates() {
        let mut grid = VoxelGrid::new(3, 4, 5);
        grid.set(2, 3, 4, BlockType::WATER);
        grid.set(0, 1, 2, BlockType::SAND);
        let cells: Vec<_> = grid.solid_cells().collect();
        assert_eq!(
            cells,
            vec![
                (Point3::new(0, 1, 2), BlockType::SAND),
                (Point3::new(2, 3, 4), BlockType::WATER)
            ]
        );
    }

    #[test]
    fn topmost_solid_scans_downwards() {
        let mut grid = VoxelGrid::new(1, 6, 1);
        grid.set(0, 0, 0, BlockType::BEDROCK);
        grid.set(0, 3, 0, BlockType::GRASS);
        assert_eq!(grid.topmost_solid(0, 0, 5, 0), Some(3));
        assert_eq!(grid.topmost_solid(0, 0, 2, 0), Some(0));
        assert_eq!(grid.topmost_solid(0, 0, 5, 4), None);
        assert_eq!(grid.topmost_solid(0, 0, 1, 2), None);
    }

    #[test]
    fn bytes_mirror_cells() {
        let mut grid = VoxelGrid::new(2, 1, 1);
        grid.set(1, 0, 0, BlockType::BEDROCK);
        assert_eq!(grid.as_bytes(), &[0, BlockType::BEDROCK as u8]);
    }
}
