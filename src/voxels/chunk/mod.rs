//! # Chunk Module
//!
//! This module provides the `Chunk` struct: one bounded voxel volume, the
//! generator state that fills it, and the mesh buffers derived from it.
//!
//! ## Lifecycle
//!
//! A chunk is created empty. Every call to [`Chunk::regenerate`] rebuilds the grid
//! and the mesh from scratch; nothing is updated incrementally. Between calls the
//! grid and the published buffers are immutable.
//!
//! ## Publication
//!
//! Finished buffers are published by swapping an `Arc<MeshBuffers>` inside an
//! [`MtResource`]. A render thread holding a [`Chunk::buffer_handle`] only ever
//! sees a complete buffer set, either the previous one or the new one.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use log::{debug, info};
use web_time::Instant;

use crate::collision::{CollisionProbe, GridTransform};
use crate::config::ChunkConfig;
use crate::core::MtResource;
use crate::error::TerrainResult;
use crate::rendering::meshing::{MeshBuffers, MeshBuilder};

use super::block::block_type::BlockType;
use super::generation::{
    generate_terrain,
    height_map::{HeightMap, HeightMapParams},
    lake_carver::LakeReport,
    noise_field::TerrainNoise,
    GenerationRng,
};
use voxel_grid::VoxelGrid;

pub mod voxel_grid;

/// Summary of the most recent generation pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChunkStats {
    /// Completed `regenerate` calls.
    pub passes: usize,
    /// Cells that produced geometry.
    pub visible_cells: usize,
    /// Vertices in the published buffers.
    pub vertex_count: usize,
    /// Cell count per solid material.
    pub material_counts: BTreeMap<BlockType, usize>,
    /// Lake carving outcome of the last pass.
    pub lakes: LakeReport,
    /// Lowest surface height; zero before the first pass.
    pub mid_height: usize,
    /// Number of distinct surface heights, a rough measure of relief.
    pub distinct_heights: usize,
}

impl fmt::Display for ChunkStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "pass {}: {} visible cells, {} vertices, {} lakes ({} water), ",
            self.passes,
            self.visible_cells,
            self.vertex_count,
            self.lakes.lakes.len(),
            self.lakes.water_cells
        )?;
        write!(
            f,
            "lowest surface {}, {} distinct heights",
            self.mid_height, self.distinct_heights
        )?;
        for (block_type, count) in &self.material_counts {
            write!(f, ", {}={}", block_type.name(), count)?;
        }
        Ok(())
    }
}

/// One voxel terrain chunk and its render output.
pub struct Chunk {
    config: ChunkConfig,
    seed: u64,
    /// Draws one pass seed per regeneration.
    master_rng: fastrand::Rng,
    grid: VoxelGrid,
    heights: Option<HeightMap>,
    lakes: LakeReport,
    passes: usize,
    mesh_builder: MeshBuilder,
    transform: GridTransform,
    buffers: MtResource<Arc<MeshBuffers>>,
}

impl Chunk {
    /// Creates an empty chunk from a validated config.
    ///
    /// # Arguments
    /// * `config` - Shape, placement and generation parameters
    ///
    /// # Returns
    /// A chunk with an all-empty grid and empty buffers, or the first config
    /// violation found.
    pub fn new(config: ChunkConfig) -> TerrainResult<Self> {
        config.validate()?;
        let seed = config.seed.unwrap_or_else(|| fastrand::u64(..));
        info!(
            "Creating {}x{}x{} chunk at {:?} with seed {}",
            config.size_x, config.max_height, config.size_z, config.origin, seed
        );

        Ok(Chunk {
            grid: VoxelGrid::new(config.size_x, config.max_height, config.size_z),
            master_rng: fastrand::Rng::with_seed(seed),
            heights: None,
            lakes: LakeReport::default(),
            passes: 0,
            mesh_builder: MeshBuilder::new(config.origin, config.cell_length, config.color_mode),
            transform: GridTransform::new(
                config.origin,
                config.cell_length,
                config.collision_convention,
            ),
            buffers: MtResource::new(Arc::new(MeshBuffers::default())),
            seed,
            config,
        })
    }

    /// Runs one full generation pass with freshly seeded noise and generator.
    pub fn regenerate(&mut self) {
        let pass_seed = self.master_rng.u64(..);
        let mut rng = fastrand::Rng::with_seed(pass_seed);
        let noise_seeds = [rng.u32(..), rng.u32(..), rng.u32(..)];
        debug!("Pass seed {pass_seed}, noise seeds {noise_seeds:?}");

        let noise = TerrainNoise::fractal(noise_seeds, &self.config.noise);
        self.regenerate_with(&noise, &mut rng);
    }

    /// Runs one full generation pass with caller-supplied noise and generator.
    ///
    /// The grid is rebuilt, then meshed, then the new buffers are swapped in.
    pub fn regenerate_with<R: GenerationRng + ?Sized>(
        &mut self,
        noise: &TerrainNoise,
        rng: &mut R,
    ) {
        let start = Instant::now();

        let terrain = generate_terrain(&self.height_map_params(), noise, &self.config.lakes, rng);
        self.grid = terrain.grid;
        self.heights = Some(terrain.heights);
        self.lakes = terrain.lakes;

        let mesh_start = Instant::now();
        let mesh = self.mesh_builder.build(&self.grid);
        debug!(
            "Meshed {} visible cells into {} vertices in {:?}",
            mesh.visible_cells,
            mesh.vertex_count(),
            mesh_start.elapsed()
        );

        self.buffers.replace(Arc::new(mesh));
        self.passes += 1;
        info!("Regeneration {} finished in {:?}", self.passes, start.elapsed());
    }

    fn height_map_params(&self) -> HeightMapParams {
        HeightMapParams {
            origin: (self.config.origin[0], self.config.origin[2]),
            size_x: self.config.size_x,
            size_z: self.config.size_z,
            max_height: self.config.max_height,
            min_height_bound: self.config.min_height_bound,
            relief: self.config.relief,
        }
    }

    /// The buffers of the last completed pass.
    pub fn buffers(&self) -> Arc<MeshBuffers> {
        self.buffers.snapshot()
    }

    /// A shared handle other threads can read published buffers through.
    pub fn buffer_handle(&self) -> MtResource<Arc<MeshBuffers>> {
        self.buffers.clone()
    }

    /// Vertices in the published buffers: `visible cells * 24`.
    pub fn vertex_count(&self) -> usize {
        self.buffers.get().vertex_count()
    }

    /// Returns `true` if a probe around `(x, y, z)` touches solid terrain.
    ///
    /// The point is read in the chunk's configured collision convention.
    pub fn too_close(&self, x: f32, y: f32, z: f32) -> bool {
        CollisionProbe::new(&self.grid, self.transform).too_close(x, y, z)
    }

    /// Cells of the last pass.
    pub fn grid(&self) -> &VoxelGrid {
        &self.grid
    }

    /// Height map of the last pass, `None` before the first.
    pub fn heights(&self) -> Option<&HeightMap> {
        self.heights.as_ref()
    }

    /// Lakes carved by the last pass.
    pub fn lake_report(&self) -> &LakeReport {
        &self.lakes
    }

    /// The validated config this chunk was built from.
    pub fn config(&self) -> &ChunkConfig {
        &self.config
    }

    /// Master seed this chunk was built with.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Collects a summary of the current grid and buffers.
    pub fn stats(&self) -> ChunkStats {
        let buffers = self.buffers();
        let material_counts = BlockType::SOLID
            .iter()
            .map(|&block_type| (block_type, self.grid.count(block_type)))
            .collect();
        ChunkStats {
            passes: self.passes,
            visible_cells: buffers.visible_cells,
            vertex_count: buffers.vertex_count(),
            material_counts,
            lakes: self.lakes.clone(),
            mid_height: self.heights.as_ref().map_or(0, |h| h.mid_height),
            distinct_heights: self.heights.as_ref().map_or(0, |h| h.distinct_heights.len()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TerrainError;
    use crate::voxels::generation::ScriptedRng;

    fn small_config(seed: u64) -> ChunkConfig {
        ChunkConfig {
            origin: [-8, 0, -8],
            size_x: 8,
            size_z: 8,
            max_height: 6,
            min_height_bound: 3,
            seed: Some(seed),
            ..ChunkConfig::default()
        }
    }

    #[test]
    fn new_chunk_is_empty() {
        let chunk = Chunk::new(small_config(1)).unwrap();
        assert_eq!(chunk.grid().count(BlockType::AIR), 8 * 6 * 8);
        assert_eq!(chunk.vertex_count(), 0);
        assert!(chunk.heights().is_none());
        assert_eq!(chunk.stats().passes, 0);
    }

    #[test]
    fn invalid_config_is_rejected() {
        let config = ChunkConfig {
            size_x: 0,
            ..small_config(1)
        };
        assert!(matches!(
            Chunk::new(config),
            Err(TerrainError::InvalidDimension { name: "size_x", .. })
        ));
    }

    #[test]
    fn nan_relief_is_rejected_before_generation() {
        let config = ChunkConfig {
            relief: f64::NAN,
            ..small_config(1)
        };
        assert!(matches!(Chunk::new(config), Err(TerrainError::InvalidRelief(_))));
    }

    #[test]
    fn scenario_a_through_the_chunk() {
        let mut chunk = Chunk::new(small_config(1)).unwrap();
        let mut rng = ScriptedRng::new(vec![], vec![]);
        chunk.regenerate_with(&TerrainNoise::constant(0.0), &mut rng);

        let stats = chunk.stats();
        assert_eq!(stats.material_counts[&BlockType::GRASS], 64);
        assert_eq!(stats.material_counts[&BlockType::BEDROCK], 3 * 64);
        // scripted draws are all false and every lake seed lands on the edge
        assert_eq!(stats.material_counts[&BlockType::STONE], 2 * 64);
        assert_eq!(stats.material_counts[&BlockType::DIRT], 0);
        assert_eq!(stats.material_counts[&BlockType::WATER], 0);
        assert_eq!(stats.lakes.attempts, 20);
        assert_eq!(stats.mid_height, 6);
        assert_eq!(stats.distinct_heights, 1);
        assert_eq!(chunk.vertex_count(), stats.visible_cells * 24);
    }

    #[test]
    fn published_buffers_survive_later_passes() {
        let mut chunk = Chunk::new(small_config(5)).unwrap();
        chunk.regenerate();
        let first = chunk.buffers();
        let handle = chunk.buffer_handle();
        chunk.regenerate();
        assert_eq!(chunk.stats().passes, 2);
        assert_eq!(first.positions.len(), first.visible_cells * 24);
        assert!(Arc::ptr_eq(&handle.snapshot(), &chunk.buffers()));
    }

    #[test]
    fn same_seed_same_chunk() {
        let mut a = Chunk::new(small_config(42)).unwrap();
        let mut b = Chunk::new(small_config(42)).unwrap();
        for _ in 0..2 {
            a.regenerate();
            b.regenerate();
            assert_eq!(a.grid().as_bytes(), b.grid().as_bytes());
            assert_eq!(*a.buffers(), *b.buffers());
        }
    }

    #[test]
    fn stats_render_as_one_line() {
        let mut chunk = Chunk::new(small_config(3)).unwrap();
        chunk.regenerate();
        let line = chunk.stats().to_string();
        assert!(line.starts_with("pass 1:"));
        assert!(!line.contains('\n'));
    }
}
