//! # Noise Field Module
//!
//! Deterministic coherent-noise oracles over the integer column lattice.

use noise::{Fbm, MultiFractal, NoiseFn, Perlin};

use crate::config::NoiseLayerConfig;

/// A deterministic sampler over integer lattice coordinates.
///
/// Implementations must be pure: the same `(i, k)` always yields the same value,
/// and every value lies in `[-1, 1]`.
pub trait NoiseField {
    /// Samples the field at world column `(i, k)`.
    fn sample(&self, i: i32, k: i32) -> f64;
}

/// Multi-octave Perlin noise shaped by a feature size and persistence.
///
/// The base frequency is `1 / feature_size` and the octave count is the number of
/// doublings needed to get from one cell up to `feature_size`, so the finest octave
/// works at roughly cell resolution. Lattice points are sampled at cell centres
/// (`i + 0.5`) to stay clear of Perlin's zero crossings on integer coordinates.
pub struct FractalNoise {
    fbm: Fbm<Perlin>,
}

impl FractalNoise {
    /// Builds a layer from its seed and shape parameters.
    pub fn new(seed: u32, layer: &NoiseLayerConfig) -> Self {
        let octaves =
            (layer.feature_size.log2().ceil() as usize).clamp(1, Fbm::<Perlin>::MAX_OCTAVES);
        let fbm = Fbm::<Perlin>::new(seed)
            .set_octaves(octaves)
            .set_frequency(1.0 / layer.feature_size)
            .set_lacunarity(2.0)
            .set_persistence(layer.persistence);
        FractalNoise { fbm }
    }
}

impl NoiseField for FractalNoise {
    fn sample(&self, i: i32, k: i32) -> f64 {
        let value = self.fbm.get([i as f64 + 0.5, k as f64 + 0.5]);
        if value.is_finite() {
            value.clamp(-1.0, 1.0)
        } else {
            0.0
        }
    }
}

/// A field that returns the same value everywhere.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConstantNoise(pub f64);

impl NoiseField for ConstantNoise {
    fn sample(&self, _i: i32, _k: i32) -> f64 {
        self.0.clamp(-1.0, 1.0)
    }
}

/// The three independently seeded layers one generation pass reads.
pub struct TerrainNoise {
    /// First surface layer.
    pub surface_primary: Box<dyn NoiseField + Send + Sync>,
    /// Second surface layer, averaged with the first.
    pub surface_secondary: Box<dyn NoiseField + Send + Sync>,
    /// Bedrock line layer.
    pub deep: Box<dyn NoiseField + Send + Sync>,
}

impl TerrainNoise {
    /// Seeds the three fractal layers.
    pub fn fractal(seeds: [u32; 3], layers: &crate::config::NoiseConfig) -> Self {
        TerrainNoise {
            surface_primary: Box::new(FractalNoise::new(seeds[0], &layers.surface_primary)),
            surface_secondary: Box::new(FractalNoise::new(seeds[1], &layers.surface_secondary)),
            deep: Box::new(FractalNoise::new(seeds[2], &layers.deep)),
        }
    }

    /// All three layers return `value` everywhere.
    pub fn constant(value: f64) -> Self {
        TerrainNoise {
            surface_primary: Box::new(ConstantNoise(value)),
            surface_secondary: Box::new(ConstantNoise(value)),
            deep: Box::new(ConstantNoise(value)),
        }
    }
}
