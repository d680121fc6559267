//! # Collision Module
//!
//! Answers "is this point too close to solid terrain?" for a camera or player
//! about to move.
//!
//! ## Grid transform
//!
//! A query point `p` is mapped into continuous grid coordinates per axis with
//!
//! ```text
//! g = (σ · p − origin) / cell_length
//! ```
//!
//! where `σ` is `+1` when queries are world-space positions and `−1` when they
//! are a camera view translation (the negated eye position). Cell centres land
//! on integer `g`, and the cell holding `g` is `floor(g + 0.5)`.
//!
//! ## Probes
//!
//! Four probes sit half a cell out along ±X and ±Z at the query height. Any
//! probe that resolves to an occupied cell reports a collision; probes outside
//! the grid never do.

use cgmath::{Point3, Vector3};

use crate::config::CollisionConvention;
use crate::voxels::chunk::voxel_grid::VoxelGrid;

/// Horizontal probe offsets, in cells.
const PROBE_OFFSETS: [(f32, f32); 4] = [(0.5, 0.5), (0.5, -0.5), (-0.5, 0.5), (-0.5, -0.5)];

/// Affine map from query space into continuous grid coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridTransform {
    scale: f32,
    offset: Vector3<f32>,
}

impl GridTransform {
    /// Builds the transform for a chunk placed at `origin` with cells `cell_length` wide.
    pub fn new(origin: [i32; 3], cell_length: f32, convention: CollisionConvention) -> Self {
        let sign = match convention {
            CollisionConvention::WorldSpace => 1.0,
            CollisionConvention::CameraTranslation => -1.0,
        };
        GridTransform {
            scale: sign / cell_length,
            offset: Vector3::new(
                -(origin[0] as f32) / cell_length,
                -(origin[1] as f32) / cell_length,
                -(origin[2] as f32) / cell_length,
            ),
        }
    }

    /// Continuous grid coordinates of `point`.
    pub fn to_grid(&self, point: Point3<f32>) -> Point3<f32> {
        Point3::new(
            point.x * self.scale + self.offset.x,
            point.y * self.scale + self.offset.y,
            point.z * self.scale + self.offset.z,
        )
    }

    /// Index of the cell containing grid coordinate `g`; may be negative.
    pub fn cell_index(g: f32) -> i64 {
        (g + 0.5).floor() as i64
    }
}

/// Read-only occupancy test against one grid.
pub struct CollisionProbe<'a> {
    grid: &'a VoxelGrid,
    transform: GridTransform,
}

impl<'a> CollisionProbe<'a> {
    /// Probes `grid` through `transform`.
    pub fn new(grid: &'a VoxelGrid, transform: GridTransform) -> Self {
        CollisionProbe { grid, transform }
    }

    /// Returns `true` if any of the four probes around `(x, y, z)` hits a solid cell.
    pub fn too_close(&self, x: f32, y: f32, z: f32) -> bool {
        let g = self.transform.to_grid(Point3::new(x, y, z));
        let gy = GridTransform::cell_index(g.y);
        PROBE_OFFSETS.iter().any(|&(dx, dz)| {
            let gx = GridTransform::cell_index(g.x + dx);
            let gz = GridTransform::cell_index(g.z + dz);
            self.grid.in_bounds_signed(gx, gy, gz)
                && self.grid.is_occupied(gx as usize, gy as usize, gz as usize)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::voxels::block::block_type::BlockType;

    fn single_cell_grid() -> VoxelGrid {
        let mut grid = VoxelGrid::new(5, 5, 5);
        grid.set(2, 1, 3, BlockType::STONE);
        grid
    }

    #[test]
    fn cell_centre_hits() {
        let grid = single_cell_grid();
        let transform = GridTransform::new([-30, 0, -30], 2.0, CollisionConvention::WorldSpace);
        let probe = CollisionProbe::new(&grid, transform);
        // centre of (2, 1, 3) = origin + index * L
        assert!(probe.too_close(-26.0, 2.0, -24.0));
    }

    #[test]
    fn far_away_misses() {
        let grid = single_cell_grid();
        let transform = GridTransform::new([-30, 0, -30], 2.0, CollisionConvention::WorldSpace);
        let probe = CollisionProbe::new(&grid, transform);
        assert!(!probe.too_close(1000.0, 2.0, 1000.0));
        assert!(!probe.too_close(-1000.0, -1000.0, -1000.0));
        assert!(!probe.too_close(-26.0, 500.0, -24.0));
    }

    #[test]
    fn camera_translation_is_negated() {
        let grid = single_cell_grid();
        let transform =
            GridTransform::new([-30, 0, -30], 2.0, CollisionConvention::CameraTranslation);
        let probe = CollisionProbe::new(&grid, transform);
        assert!(probe.too_close(26.0, -2.0, 24.0));
        assert!(!probe.too_close(-26.0, 2.0, -24.0));
    }

    #[test]
    fn transform_maps_centres_to_integers() {
        let transform = GridTransform::new([4, -2, 0], 0.5, CollisionConvention::WorldSpace);
        let g = transform.to_grid(Point3::new(5.0, -1.0, 0.5));
        assert_eq!(g, Point3::new(2.0, 2.0, 1.0));
        assert_eq!(GridTransform::cell_index(-0.49), 0);
        assert_eq!(GridTransform::cell_index(-0.51), -1);
    }

    #[test]
    fn probes_reach_half_a_cell_sideways() {
        let grid = single_cell_grid();
        let transform = GridTransform::new([0, 0, 0], 1.0, CollisionConvention::WorldSpace);
        let probe = CollisionProbe::new(&grid, transform);
        // probes cover cells floor(g) and floor(g) + 1 on each horizontal axis
        assert!(probe.too_close(2.9, 1.0, 3.0));
        assert!(probe.too_close(1.2, 1.0, 3.0));
        assert!(!probe.too_close(3.0, 1.0, 3.0));
        // two cells over: out of reach
        assert!(!probe.too_close(4.2, 1.0, 3.0));
        // wrong level
        assert!(!probe.too_close(2.0, 2.0, 3.0));
    }

    #[test]
    fn empty_grid_never_collides() {
        let grid = VoxelGrid::new(3, 3, 3);
        let probe = CollisionProbe::new(
            &grid,
            GridTransform::new([0, 0, 0], 1.0, CollisionConvention::WorldSpace),
        );
        for x in -2..5 {
            assert!(!probe.too_close(x as f32, 1.0, 1.0));
        }
    }
}
