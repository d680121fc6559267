#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

//! # Voxel Terrain
//!
//! Procedural generation of a single voxel terrain chunk: noise-driven height
//! maps, layered materials, flood-filled lakes, face-culled cube meshes and a
//! point collision probe.
//!
//! ## Key Modules
//!
//! * `voxels` - Materials, the voxel grid, the chunk and the generation pipeline
//! * `rendering` - Visibility culling, mesh buffers and texture atlas addressing
//! * `collision` - Grid transform and the `too_close` probe
//! * `config` - JSON-loadable chunk configuration
//! * `core` - Shared utilities used throughout the crate
//!
//! ## Usage
//!
//! ```rust
//! use voxel_terrain::{config::ChunkConfig, voxels::chunk::Chunk};
//!
//! let config = ChunkConfig {
//!     seed: Some(7),
//!     ..ChunkConfig::default()
//! };
//! let mut chunk = Chunk::new(config).unwrap();
//! chunk.regenerate();
//!
//! let buffers = chunk.buffers();
//! assert_eq!(buffers.vertex_count(), buffers.visible_cells * 24);
//! ```

use std::path::PathBuf;

use log::info;

use config::ChunkConfig;
use error::TerrainResult;
use voxels::chunk::Chunk;

pub mod collision;
pub mod config;
pub mod core;
pub mod error;
pub mod rendering;
pub mod voxels;

/// What the headless driver should do.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunOptions {
    /// JSON config file; defaults apply when absent.
    pub config_path: Option<PathBuf>,
    /// Overrides the config's seed.
    pub seed: Option<u64>,
    /// Number of `regenerate` passes to run.
    pub regenerations: usize,
    /// Points to run the collision probe against after the last pass.
    pub probes: Vec<[f32; 3]>,
}

/// Builds a chunk, regenerates it and logs what came out.
pub fn run(options: RunOptions) -> TerrainResult<()> {
    let mut log_builder = env_logger::Builder::new();
    log_builder
        .target(env_logger::Target::Stdout)
        .filter_level(log::LevelFilter::Info)
        .parse_env("RUST_LOG");
    // a logger may already be installed by an embedding application
    let _ = log_builder.try_init();

    info!("Logger initialized");

    let mut config = match &options.config_path {
        Some(path) => ChunkConfig::from_path(path)?,
        None => ChunkConfig::default(),
    };
    if options.seed.is_some() {
        config.seed = options.seed;
    }

    let mut chunk = Chunk::new(config)?;
    for _ in 0..options.regenerations {
        chunk.regenerate();
        info!("{}", chunk.stats());
    }

    for [x, y, z] in options.probes {
        info!("too_close({x}, {y}, {z}) = {}", chunk.too_close(x, y, z));
    }

    Ok(())
}
