//! Configuration for a single terrain chunk.
//!
//! Every field has a default so a config file only needs to name what it
//! changes. Loading always validates before handing the config out.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{TerrainError, TerrainResult};

/// Parameters of one coherent-noise layer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NoiseLayerConfig {
    /// Size, in cells, of the largest feature the layer produces.
    pub feature_size: f64,
    /// Amplitude falloff between successive octaves.
    pub persistence: f64,
}

impl NoiseLayerConfig {
    fn validate(&self, layer: &'static str) -> TerrainResult<()> {
        if !self.feature_size.is_finite() || self.feature_size < 1.0 {
            return Err(TerrainError::InvalidNoiseLayer {
                layer,
                reason: format!("feature_size must be >= 1, got {}", self.feature_size),
            });
        }
        if !self.persistence.is_finite() || self.persistence <= 0.0 || self.persistence > 1.0 {
            return Err(TerrainError::InvalidNoiseLayer {
                layer,
                reason: format!("persistence must be in (0, 1], got {}", self.persistence),
            });
        }
        Ok(())
    }
}

/// The three noise layers that drive the height map.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NoiseConfig {
    /// First surface layer.
    #[serde(default = "default_surface_primary")]
    pub surface_primary: NoiseLayerConfig,
    /// Second surface layer, averaged with the first.
    #[serde(default = "default_surface_secondary")]
    pub surface_secondary: NoiseLayerConfig,
    /// Bedrock line layer.
    #[serde(default = "default_deep")]
    pub deep: NoiseLayerConfig,
}

impl Default for NoiseConfig {
    fn default() -> Self {
        Self {
            surface_primary: default_surface_primary(),
            surface_secondary: default_surface_secondary(),
            deep: default_deep(),
        }
    }
}

/// Limits for the lake carving pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LakeConfig {
    /// Number of random seed columns tried per pass.
    #[serde(default = "default_lake_attempts")]
    pub max_attempts: usize,
    /// Carving stops once this many water cells exist.
    #[serde(default = "default_lake_target")]
    pub target_water_cells: usize,
}

impl Default for LakeConfig {
    fn default() -> Self {
        Self {
            max_attempts: default_lake_attempts(),
            target_water_cells: default_lake_target(),
        }
    }
}

/// How vertex colours are filled in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorMode {
    /// Uniform white; the atlas texture supplies all colour.
    #[default]
    Textured,
    /// Flat per-material tint, for untextured debug rendering.
    Tinted,
}

/// Which space the collision query point is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CollisionConvention {
    /// The query is a world-space position.
    #[default]
    WorldSpace,
    /// The query is the camera's view translation, i.e. the negated eye position.
    CameraTranslation,
}

/// Full description of a chunk and how it is generated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChunkConfig {
    /// World-space origin of cell (0, 0, 0); also offsets the noise lattice.
    #[serde(default = "default_origin")]
    pub origin: [i32; 3],
    /// Columns along X.
    #[serde(default = "default_size")]
    pub size_x: usize,
    /// Columns along Z.
    #[serde(default = "default_size")]
    pub size_z: usize,
    /// Number of vertical levels; surface heights never exceed it.
    #[serde(default = "default_max_height")]
    pub max_height: usize,
    /// Upper bound of the bedrock line.
    #[serde(default = "default_min_height_bound")]
    pub min_height_bound: usize,
    /// Edge length of one cell in world units.
    #[serde(default = "default_cell_length")]
    pub cell_length: f32,
    /// Multiplier from a noise sample to a height offset in cells.
    #[serde(default = "default_relief")]
    pub relief: f64,
    /// Height map noise layers.
    #[serde(default)]
    pub noise: NoiseConfig,
    /// Lake carving limits.
    #[serde(default)]
    pub lakes: LakeConfig,
    /// Vertex colour fill.
    #[serde(default)]
    pub color_mode: ColorMode,
    /// Space collision queries are given in.
    #[serde(default)]
    pub collision_convention: CollisionConvention,
    /// Master seed; a random one is drawn when absent.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for ChunkConfig {
    fn default() -> Self {
        Self {
            origin: default_origin(),
            size_x: default_size(),
            size_z: default_size(),
            max_height: default_max_height(),
            min_height_bound: default_min_height_bound(),
            cell_length: default_cell_length(),
            relief: default_relief(),
            noise: NoiseConfig::default(),
            lakes: LakeConfig::default(),
            color_mode: ColorMode::default(),
            collision_convention: CollisionConvention::default(),
            seed: None,
        }
    }
}

impl ChunkConfig {
    /// Parses and validates a config from JSON text.
    pub fn from_json_str(text: &str) -> TerrainResult<Self> {
        let config: ChunkConfig = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a config file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> TerrainResult<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| TerrainError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text)
    }

    /// Checks every invariant generation relies on.
    pub fn validate(&self) -> TerrainResult<()> {
        for (name, value) in [
            ("size_x", self.size_x),
            ("size_z", self.size_z),
            ("max_height", self.max_height),
        ] {
            if value == 0 {
                return Err(TerrainError::InvalidDimension { name, value });
            }
        }
        if self.min_height_bound == 0 || self.min_height_bound > self.max_height {
            return Err(TerrainError::InvalidHeightBounds {
                min_height_bound: self.min_height_bound,
                max_height: self.max_height,
            });
        }
        if !self.cell_length.is_finite() || self.cell_length <= 0.0 {
            return Err(TerrainError::InvalidCellLength(self.cell_length));
        }
        if !self.relief.is_finite() {
            return Err(TerrainError::InvalidRelief(self.relief));
        }
        self.noise.surface_primary.validate("surface_primary")?;
        self.noise.surface_secondary.validate("surface_secondary")?;
        self.noise.deep.validate("deep")?;
        Ok(())
    }
}

// Default values
fn default_origin() -> [i32; 3] {
    [-30, 0, -30]
}

fn default_size() -> usize {
    30
}

fn default_max_height() -> usize {
    30
}

fn default_min_height_bound() -> usize {
    10
}

fn default_cell_length() -> f32 {
    2.0
}

fn default_relief() -> f64 {
    100.0
}

fn default_surface_primary() -> NoiseLayerConfig {
    NoiseLayerConfig {
        feature_size: 64.0,
        persistence: 0.5,
    }
}

fn default_surface_secondary() -> NoiseLayerConfig {
    NoiseLayerConfig {
        feature_size: 32.0,
        persistence: 0.6,
    }
}

fn default_deep() -> NoiseLayerConfig {
    NoiseLayerConfig {
        feature_size: 48.0,
        persistence: 0.4,
    }
}

fn default_lake_attempts() -> usize {
    20
}

fn default_lake_target() -> usize {
    10_000
}
