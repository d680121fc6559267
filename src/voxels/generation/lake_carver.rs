//! # Lake Carver Module
//!
//! Carves lakes into a classified grid by flood-filling surface depressions.
//!
//! ## Algorithm
//!
//! Each attempt picks a random column, finds its topmost solid cell and, unless that
//! cell is a boundary cell, runs a breadth-first fill over the 8 same-level
//! neighbours. Non-boundary cells become `WATER` and keep expanding; boundary cells
//! become `SAND` and stop there.
//!
//! ## Boundary cells
//!
//! A cell is a boundary cell when any of these hold:
//! * it is on the outermost ring of columns (`x` or `z` within 1 of the edge)
//! * it is on the top level
//! * one of its 4 cardinal neighbours on the same level is empty
//! * the cell directly above it is solid (the lake would sit under rock)
//!
//! A non-boundary cell is at least one column away from every X/Z edge and below the
//! top level, so every neighbour index the fill computes from it is in range.
//! Boundary checks read an occupancy snapshot taken before the fill starts, so
//! painting a bank into an empty cell never changes how its neighbours classify.

use std::collections::{HashSet, VecDeque};

use bitvec::prelude::BitVec;
use cgmath::Point3;
use log::debug;

use crate::config::LakeConfig;
use crate::voxels::block::block_type::BlockType;
use crate::voxels::chunk::voxel_grid::{CellKey, VoxelGrid};

use super::{height_map::HeightMap, GenerationRng};

/// Same-level neighbour offsets `(dx, dz)`: 4 cardinals then 4 diagonals.
const FILL_NEIGHBOURS: [(isize, isize); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

/// Vertical range the seed scan searches, both ends inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedScan {
    /// First level checked.
    pub top: usize,
    /// Last level checked.
    pub bottom: usize,
}

impl SeedScan {
    /// Scans from just under the highest surface down to the top cell of the lowest column.
    pub fn from_heights(heights: &HeightMap, max_height: usize) -> Self {
        SeedScan {
            top: heights.highest_surface().min(max_height).saturating_sub(1),
            bottom: heights.mid_height.saturating_sub(1),
        }
    }
}

/// One carved lake.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LakeSummary {
    /// Cell the fill started from.
    pub seed: CellKey,
    /// Cells turned into water, seed included.
    pub water_cells: usize,
    /// Cells turned into sand banks.
    pub sand_cells: usize,
}

/// Outcome of a whole carving pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LakeReport {
    /// Attempts actually made before stopping.
    pub attempts: usize,
    /// Lakes in the order they were carved.
    pub lakes: Vec<LakeSummary>,
    /// Water cells over all lakes.
    pub water_cells: usize,
}

impl LakeReport {
    /// Sand cells over all lakes.
    pub fn sand_cells(&self) -> usize {
        self.lakes.iter().map(|lake| lake.sand_cells).sum()
    }
}

/// Solid/empty state of every cell, frozen at one point in time.
struct OccupancySnapshot {
    size_z: usize,
    max_height: usize,
    solid: BitVec,
}

impl OccupancySnapshot {
    fn capture(grid: &VoxelGrid) -> Self {
        let mut solid = BitVec::with_capacity(grid.len());
        for x in 0..grid.size_x() {
            for y in 0..grid.max_height() {
                for z in 0..grid.size_z() {
                    solid.push(grid.is_occupied(x, y, z));
                }
            }
        }
        OccupancySnapshot {
            size_z: grid.size_z(),
            max_height: grid.max_height(),
            solid,
        }
    }

    fn is_occupied(&self, x: usize, y: usize, z: usize) -> bool {
        self.solid[(x * self.max_height + y) * self.size_z + z]
    }
}

/// Decides whether `cell` stops a flood fill.
///
/// Short-circuit order matters: the edge and top-level tests run first so the
/// neighbour lookups after them are always in range.
pub fn is_boundary_cell(grid: &VoxelGrid, cell: CellKey) -> bool {
    is_boundary_in(grid, cell, &|x: usize, y: usize, z: usize| {
        grid.is_occupied(x, y, z)
    })
}

fn is_boundary_in(
    grid: &VoxelGrid,
    cell: CellKey,
    occupied: &dyn Fn(usize, usize, usize) -> bool,
) -> bool {
    let Point3 { x, y, z } = cell;
    if x == 0
        || z == 0
        || x >= grid.size_x().saturating_sub(1)
        || z >= grid.size_z().saturating_sub(1)
    {
        return true;
    }
    if y >= grid.max_height().saturating_sub(1) {
        return true;
    }
    let open_side = !occupied(x + 1, y, z)
        || !occupied(x - 1, y, z)
        || !occupied(x, y, z + 1)
        || !occupied(x, y, z - 1);
    open_side || occupied(x, y + 1, z)
}

/// Flood-fills one lake from `seed`.
///
/// `seed` must not be a boundary cell; [`carve_lakes`] checks this before calling.
pub fn flood_fill(grid: &mut VoxelGrid, seed: CellKey) -> LakeSummary {
    let snapshot = OccupancySnapshot::capture(grid);
    let mut visited: HashSet<CellKey> = HashSet::new();
    let mut queue: VecDeque<CellKey> = VecDeque::new();

    visited.insert(seed);
    grid.set_key(seed, BlockType::WATER);
    queue.push_back(seed);

    let mut summary = LakeSummary {
        seed,
        water_cells: 1,
        sand_cells: 0,
    };

    while let Some(cell) = queue.pop_front() {
        for (dx, dz) in FILL_NEIGHBOURS {
            // cell is not a boundary cell, so both stay within [0, size)
            let neighbour = Point3::new(
                cell.x.wrapping_add_signed(dx),
                cell.y,
                cell.z.wrapping_add_signed(dz),
            );
            if !visited.insert(neighbour) {
                continue;
            }
            // earlier lakes keep their water
            if grid.get_key(neighbour) == Some(BlockType::WATER) {
                continue;
            }
            let boundary = is_boundary_in(grid, neighbour, &|x: usize, y: usize, z: usize| {
                snapshot.is_occupied(x, y, z)
            });
            if boundary {
                grid.set_key(neighbour, BlockType::SAND);
                summary.sand_cells += 1;
            } else {
                grid.set_key(neighbour, BlockType::WATER);
                summary.water_cells += 1;
                queue.push_back(neighbour);
            }
        }
    }

    summary
}

/// Runs lake attempts until the water target or the attempt budget is reached.
pub fn carve_lakes<R: GenerationRng + ?Sized>(
    grid: &mut VoxelGrid,
    scan: SeedScan,
    config: &LakeConfig,
    rng: &mut R,
) -> LakeReport {
    let mut report = LakeReport::default();

    for _ in 0..config.max_attempts {
        if report.water_cells >= config.target_water_cells {
            break;
        }
        report.attempts += 1;

        let x = rng.next_index(grid.size_x());
        let z = rng.next_index(grid.size_z());
        let Some(y) = grid.topmost_solid(x, z, scan.top, scan.bottom) else {
            debug!("Lake attempt at column ({x}, {z}) found no surface in scan range");
            continue;
        };
        let seed = Point3::new(x, y, z);

        if grid.get_key(seed) == Some(BlockType::WATER) {
            debug!("Lake attempt at {seed:?} landed in an existing lake");
            continue;
        }
        if is_boundary_cell(grid, seed) {
            debug!("Lake attempt at {seed:?} rejected: seed is a boundary cell");
            continue;
        }

        let lake = flood_fill(grid, seed);
        debug!(
            "Carved lake at {:?}: {} water, {} sand",
            seed, lake.water_cells, lake.sand_cells
        );
        report.water_cells += lake.water_cells;
        report.lakes.push(lake);
    }

    report
}
