//! # Block Type Module
//!
//! This module defines the materials a voxel cell can hold.
//! It provides conversion from the compact stored id back to the rich enum.

use num_derive::FromPrimitive;
use num_traits::FromPrimitive;

use super::BlockTypeSize;

/// Enumerates every material a cell can hold, plus `AIR` for an empty cell.
///
/// The discriminant is the id stored in the grid and the index into the
/// material descriptor table, so the order here is load-bearing.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, FromPrimitive)]
#[repr(u8)]
pub enum BlockType {
    /// Empty space.
    AIR = 0,

    /// Surface cap of every column.
    GRASS = 1,

    /// Lake banks.
    SAND = 2,

    /// Carved lake bodies.
    WATER = 3,

    /// Soft fill between the surface and the bedrock line.
    DIRT = 4,

    /// Hard fill between the surface and the bedrock line.
    STONE = 5,

    /// Everything below a column's bedrock line.
    BEDROCK = 6,
}

/// Number of `BlockType` variants, `AIR` included.
pub const BLOCK_TYPE_COUNT: usize = 7;

impl BlockType {
    /// Every variant, in id order.
    pub const ALL: [BlockType; BLOCK_TYPE_COUNT] = [
        BlockType::AIR,
        BlockType::GRASS,
        BlockType::SAND,
        BlockType::WATER,
        BlockType::DIRT,
        BlockType::STONE,
        BlockType::BEDROCK,
    ];

    /// Every solid material, in id order.
    pub const SOLID: [BlockType; BLOCK_TYPE_COUNT - 1] = [
        BlockType::GRASS,
        BlockType::SAND,
        BlockType::WATER,
        BlockType::DIRT,
        BlockType::STONE,
        BlockType::BEDROCK,
    ];

    /// Converts a stored id back into a `BlockType`.
    ///
    /// Ids outside the known range decode as `AIR`; the grid never writes one.
    pub fn get_block_type_from_int(btype: BlockTypeSize) -> Self {
        BlockType::from_u8(btype).unwrap_or(BlockType::AIR)
    }

    /// Returns `true` for every variant except `AIR`.
    pub fn is_solid(self) -> bool {
        self != BlockType::AIR
    }

    /// Lower-case display name, as used in logs.
    pub fn name(self) -> &'static str {
        match self {
            BlockType::AIR => "air",
            BlockType::GRASS => "grass",
            BlockType::SAND => "sand",
            BlockType::WATER => "water",
            BlockType::DIRT => "dirt",
            BlockType::STONE => "stone",
            BlockType::BEDROCK => "bedrock",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_round_trip_through_storage() {
        for block_type in BlockType::ALL {
            let id = block_type as BlockTypeSize;
            assert_eq!(BlockType::get_block_type_from_int(id), block_type);
        }
    }

    #[test]
    fn unknown_id_decodes_as_air() {
        assert_eq!(BlockType::get_block_type_from_int(200), BlockType::AIR);
    }

    #[test]
    fn only_air_is_not_solid() {
        assert!(!BlockType::AIR.is_solid());
        assert!(BlockType::SOLID.iter().all(|b| b.is_solid()));
    }
}
