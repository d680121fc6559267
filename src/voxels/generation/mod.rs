//! # Terrain Generation
//!
//! One generation pass turns three noise layers and a random generator into a
//! classified, lake-carved voxel grid:
//!
//! 1. [`height_map`] samples surface and bedrock heights per column
//! 2. [`classifier`] fills every column from those heights
//! 3. [`lake_carver`] floods depressions with water and rims them with sand
//!
//! All randomness after the noise layers comes from a single [`GenerationRng`],
//! drawn in a fixed order, so a seeded pass is reproducible.

use log::{debug, info, warn};
use web_time::Instant;

use crate::config::LakeConfig;
use crate::voxels::chunk::voxel_grid::VoxelGrid;

use height_map::{HeightMap, HeightMapParams};
use lake_carver::{carve_lakes, LakeReport, SeedScan};
use noise_field::TerrainNoise;

pub mod classifier;
pub mod height_map;
pub mod lake_carver;
pub mod noise_field;

/// Source of the random choices a generation pass makes.
///
/// Injected so tests can script exact draws.
pub trait GenerationRng {
    /// A fair coin flip.
    fn next_bool(&mut self) -> bool;

    /// A uniform index in `[0, bound)`. `bound` is never zero.
    fn next_index(&mut self, bound: usize) -> usize;
}

impl GenerationRng for fastrand::Rng {
    fn next_bool(&mut self) -> bool {
        self.bool()
    }

    fn next_index(&mut self, bound: usize) -> usize {
        if bound == 0 {
            0
        } else {
            self.usize(..bound)
        }
    }
}

/// Everything one pass produced.
#[derive(Debug, Clone)]
pub struct GeneratedTerrain {
    /// Classified and lake-carved cells.
    pub grid: VoxelGrid,
    /// Column heights the grid was filled from.
    pub heights: HeightMap,
    /// What the lake pass did.
    pub lakes: LakeReport,
}

/// Runs the height map, classification and lake passes into a fresh grid.
///
/// # Arguments
/// * `params` - Chunk shape and the world origin of its first column
/// * `noise` - The three seeded noise layers
/// * `lakes` - Attempt budget and water target for lake carving
/// * `rng` - Generator for dirt/stone choices and lake seed columns, in that order
pub fn generate_terrain<R: GenerationRng + ?Sized>(
    params: &HeightMapParams,
    noise: &TerrainNoise,
    lakes: &LakeConfig,
    rng: &mut R,
) -> GeneratedTerrain {
    let start = Instant::now();

    let heights = HeightMap::generate(params, noise);
    debug!(
        "Height map: {} distinct surface heights, lowest {}, highest {}",
        heights.distinct_heights.len(),
        heights.mid_height,
        heights.highest_surface()
    );

    let mut grid = VoxelGrid::new(params.size_x, params.max_height, params.size_z);
    classifier::classify_columns(&mut grid, &heights, rng);

    let scan = SeedScan::from_heights(&heights, params.max_height);
    let report = carve_lakes(&mut grid, scan, lakes, rng);
    if report.lakes.is_empty() {
        warn!("No lake carved after {} attempts", report.attempts);
    }

    info!(
        "Generated {}x{}x{} terrain with {} lakes ({} water cells) in {:?}",
        params.size_x,
        params.max_height,
        params.size_z,
        report.lakes.len(),
        report.water_cells,
        start.elapsed()
    );

    GeneratedTerrain {
        grid,
        heights,
        lakes: report,
    }
}

/// Replays fixed draws; once a script runs out it answers `false` and `0`.
#[cfg(test)]
pub(crate) struct ScriptedRng {
    bools: std::vec::IntoIter<bool>,
    indices: std::vec::IntoIter<usize>,
    bools_drawn: usize,
}

#[cfg(test)]
impl ScriptedRng {
    pub(crate) fn new(bools: Vec<bool>, indices: Vec<usize>) -> Self {
        ScriptedRng {
            bools: bools.into_iter(),
            indices: indices.into_iter(),
            bools_drawn: 0,
        }
    }

    pub(crate) fn bools_drawn(&self) -> usize {
        self.bools_drawn
    }
}

#[cfg(test)]
impl GenerationRng for ScriptedRng {
    fn next_bool(&mut self) -> bool {
        self.bools_drawn += 1;
        self.bools.next().unwrap_or(false)
    }

    fn next_index(&mut self, bound: usize) -> usize {
        self.indices.next().unwrap_or(0).min(bound.saturating_sub(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::NoiseConfig;
    use crate::voxels::block::block_type::BlockType;

    fn params() -> HeightMapParams {
        HeightMapParams {
            origin: (-30, -30),
            size_x: 30,
            size_z: 30,
            max_height: 30,
            min_height_bound: 10,
            relief: 100.0,
        }
    }

    #[test]
    fn fastrand_index_stays_in_bound() {
        let mut rng = fastrand::Rng::with_seed(4);
        for bound in 1..50 {
            assert!(rng.next_index(bound) < bound);
        }
        assert_eq!(rng.next_index(0), 0);
    }

    #[test]
    fn seeded_passes_are_identical() {
        let noise = TerrainNoise::fractal([10, 20, 30], &NoiseConfig::default());
        let lakes = LakeConfig::default();
        let a = generate_terrain(&params(), &noise, &lakes, &mut fastrand::Rng::with_seed(8));
        let b = generate_terrain(&params(), &noise, &lakes, &mut fastrand::Rng::with_seed(8));
        assert_eq!(a.grid.as_bytes(), b.grid.as_bytes());
        assert_eq!(a.lakes, b.lakes);
    }

    #[test]
    fn flat_terrain_without_lake_budget_is_layered() {
        let p = HeightMapParams {
            origin: (0, 0),
            size_x: 8,
            size_z: 8,
            max_height: 6,
            min_height_bound: 3,
            relief: 100.0,
        };
        let lakes = LakeConfig {
            max_attempts: 0,
            target_water_cells: 10,
        };
        let terrain = generate_terrain(
            &p,
            &TerrainNoise::constant(0.0),
            &lakes,
            &mut fastrand::Rng::with_seed(1),
        );
        assert_eq!(terrain.lakes.attempts, 0);
        assert_eq!(terrain.grid.count(BlockType::GRASS), 64);
        assert_eq!(terrain.grid.count(BlockType::BEDROCK), 3 * 64);
        assert_eq!(terrain.grid.count(BlockType::WATER), 0);
    }

    #[test]
    fn lake_cells_sit_on_carved_levels() {
        let noise = TerrainNoise::fractal([1, 2, 3], &NoiseConfig::default());
        let terrain = generate_terrain(
            &params(),
            &noise,
            &LakeConfig::default(),
            &mut fastrand::Rng::with_seed(77),
        );
        let water = terrain.grid.count(BlockType::WATER);
        assert_eq!(water, terrain.lakes.water_cells);
        assert!(terrain.lakes.attempts <= LakeConfig::default().max_attempts);
    }
}
