//! # Block Classifier Module
//!
//! Fills the grid column by column from a height map.

use crate::voxels::block::block_type::BlockType;
use crate::voxels::chunk::voxel_grid::VoxelGrid;

use super::{height_map::HeightMap, GenerationRng};

/// Material of level `level` in a column with surface `surface` and bedrock line `deep`.
///
/// `fill` is only consulted for levels strictly between the bedrock line and the
/// surface cap, so callers that draw randomness inside it consume exactly one draw
/// per such level.
pub fn classify_level(
    level: usize,
    surface: usize,
    deep: usize,
    fill: impl FnOnce() -> BlockType,
) -> BlockType {
    if level >= surface {
        BlockType::AIR
    } else if level + 1 == surface {
        BlockType::GRASS
    } else if level < deep {
        BlockType::BEDROCK
    } else {
        fill()
    }
}

/// Writes every column of `heights` into `grid`.
///
/// Columns are visited x-major, then z, and each column bottom-up; the shared
/// generator is drawn once per dirt/stone level in that order, which is what makes
/// a fixed seed reproduce the same grid. Levels at or above the surface are left
/// untouched (the grid is expected to start empty).
pub fn classify_columns<R: GenerationRng + ?Sized>(
    grid: &mut VoxelGrid,
    heights: &HeightMap,
    rng: &mut R,
) {
    for (x, z, surface, deep) in heights.columns() {
        for level in 0..surface.min(grid.max_height()) {
            let block_type = classify_level(level, surface, deep, || {
                if rng.next_bool() {
                    BlockType::DIRT
                } else {
                    BlockType::STONE
                }
            });
            grid.set(x, level, z, block_type);
        }
    }
}
