//! # Height Map Module
//!
//! Turns noise samples into per-column surface and bedrock heights.

use std::collections::BTreeSet;

use super::noise_field::TerrainNoise;

/// Shape parameters the height map needs from the chunk.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeightMapParams {
    /// World column index of local column `(0, 0)`, as `(origin_x, origin_z)`.
    pub origin: (i32, i32),
    /// Columns along X.
    pub size_x: usize,
    /// Columns along Z.
    pub size_z: usize,
    /// Ceiling for surface heights.
    pub max_height: usize,
    /// Ceiling for the bedrock line.
    pub min_height_bound: usize,
    /// Height offset, in cells, of a full-scale noise sample.
    pub relief: f64,
}

/// Per-column `(surface, deep)` heights for one chunk.
///
/// Every column satisfies `1 <= deep <= surface <= max_height`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeightMap {
    size_x: usize,
    size_z: usize,
    surface: Vec<usize>,
    deep: Vec<usize>,
    /// Lowest surface height over all columns.
    pub mid_height: usize,
    /// Every distinct surface height produced.
    pub distinct_heights: BTreeSet<usize>,
}

impl HeightMap {
    /// Samples every column in x-then-z order.
    pub fn generate(params: &HeightMapParams, noise: &TerrainNoise) -> Self {
        let columns = params.size_x * params.size_z;
        let mut surface = Vec::with_capacity(columns);
        let mut deep = Vec::with_capacity(columns);
        let mut mid_height = params.max_height;
        let mut distinct_heights = BTreeSet::new();

        for x in 0..params.size_x {
            for z in 0..params.size_z {
                let i = params.origin.0 + x as i32;
                let k = params.origin.1 + z as i32;

                let primary = height_from_noise(
                    noise.surface_primary.sample(i, k),
                    params.relief,
                    params.max_height,
                );
                let secondary = height_from_noise(
                    noise.surface_secondary.sample(i, k),
                    params.relief,
                    params.max_height,
                );
                let surface_height = (primary + secondary) / 2;

                let deep_height = height_from_noise(
                    noise.deep.sample(i, k),
                    params.relief,
                    params.min_height_bound,
                )
                .min(surface_height);

                mid_height = mid_height.min(surface_height);
                distinct_heights.insert(surface_height);
                surface.push(surface_height);
                deep.push(deep_height);
            }
        }

        HeightMap {
            size_x: params.size_x,
            size_z: params.size_z,
            surface,
            deep,
            mid_height,
            distinct_heights,
        }
    }

    /// Surface height of a column; levels `[0, surface)` are solid.
    pub fn surface(&self, x: usize, z: usize) -> usize {
        self.surface[x * self.size_z + z]
    }

    /// Bedrock line of a column; levels `[0, deep)` are bedrock.
    pub fn deep(&self, x: usize, z: usize) -> usize {
        self.deep[x * self.size_z + z]
    }

    /// Columns along X.
    pub fn size_x(&self) -> usize {
        self.size_x
    }

    /// Columns along Z.
    pub fn size_z(&self) -> usize {
        self.size_z
    }

    /// Highest surface height produced; the lake seed scan starts just below it.
    pub fn highest_surface(&self) -> usize {
        self.distinct_heights.last().copied().unwrap_or(self.mid_height)
    }

    /// Iterates `(x, z, surface, deep)` in generation order.
    pub fn columns(&self) -> impl Iterator<Item = (usize, usize, usize, usize)> + '_ {
        let size_z = self.size_z;
        self.surface
            .iter()
            .zip(self.deep.iter())
            .enumerate()
            .map(move |(index, (&s, &d))| (index / size_z, index % size_z, s, d))
    }
}

/// Maps a noise sample to a height in `[1, ceiling]`: `ceiling - round(relief * noise)`.
///
/// A non-finite offset counts as zero, so the column sits at the ceiling.
pub fn height_from_noise(noise: f64, relief: f64, ceiling: usize) -> usize {
    let offset = (relief * noise).round();
    let offset = if offset.is_finite() { offset } else { 0.0 };
    let height = ceiling as f64 - offset;
    height.clamp(1.0, ceiling as f64) as usize
}
