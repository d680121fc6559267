//! # Voxel Terrain Core
//!
//! This module contains the data model and generation pipeline for a single
//! terrain chunk.
//!
//! ## Architecture
//!
//! * **Block**: Material tags and the interned per-material render descriptors
//! * **Chunk**: Owns the grid, runs generation passes and publishes mesh buffers
//! * **Generation**: Noise, height map, column classification and lake carving
//!
//! ## Data Flow
//!
//! 1. The chunk draws a pass seed and builds three noise layers from it
//! 2. The height map turns noise into per-column surface and bedrock heights
//! 3. Columns are classified into materials, then lakes are carved in place
//! 4. Visible cells are meshed and the new buffers replace the old ones

pub mod block;
pub mod chunk;
pub mod generation;
