//! # Terrain Error Types
//!
//! Everything that can go wrong before a chunk exists. Generation itself is
//! total; only configuration and construction are fallible.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading or validating a chunk configuration.
#[derive(Error, Debug)]
pub enum TerrainError {
    /// A grid dimension was zero.
    #[error("invalid dimension: {name} must be at least 1, got {value}")]
    InvalidDimension {
        /// The offending field.
        name: &'static str,
        /// The value supplied.
        value: usize,
    },

    /// The bedrock bound does not fit under the height ceiling.
    #[error(
        "invalid height bounds: min_height_bound {min_height_bound} must be within 1..={max_height}"
    )]
    InvalidHeightBounds {
        /// Configured bedrock bound.
        min_height_bound: usize,
        /// Configured height ceiling.
        max_height: usize,
    },

    /// The cell edge length is not a positive finite number.
    #[error("invalid cell length {0}: must be positive and finite")]
    InvalidCellLength(f32),

    /// The noise-to-height multiplier is NaN or infinite.
    #[error("invalid relief {0}: must be finite")]
    InvalidRelief(f64),

    /// A noise layer has parameters the sampler cannot use.
    #[error("invalid noise layer '{layer}': {reason}")]
    InvalidNoiseLayer {
        /// Which layer (surface_primary, surface_secondary, deep).
        layer: &'static str,
        /// What is wrong with it.
        reason: String,
    },

    /// The configuration file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// The configuration text is not valid JSON for a chunk config.
    #[error("failed to parse chunk config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Result alias used by the fallible entry points of this crate.
pub type TerrainResult<T> = Result<T, TerrainError>;
