//! # Block Module
//!
//! This module provides the per-cell storage type and the interned, per-material
//! descriptors shared by every cell of a material.

use std::sync::LazyLock;

use block_type::{BlockType, BLOCK_TYPE_COUNT};

use crate::rendering::texture::{AtlasTile, TextureAtlas, QuadTexCoords};

pub mod block_side;
pub mod block_type;

/// The underlying integer type used to represent block types in memory.
pub type BlockTypeSize = u8;

/// Maps each block type to its atlas tile for each face.
///
/// The outer array is indexed by `BlockType` as a `usize`.
/// The inner array holds one tile per face in the order:
/// [Front, Back, Bottom, Top, Left, Right]
pub static BLOCK_TYPE_TO_ATLAS_TILES: [[AtlasTile; 6]; BLOCK_TYPE_COUNT] = [
    [AtlasTile::new(0, 0); 6], // AIR (never emitted)
    [
        AtlasTile::new(3, 0),
        AtlasTile::new(3, 0),
        AtlasTile::new(2, 0),
        AtlasTile::new(0, 0),
        AtlasTile::new(3, 0),
        AtlasTile::new(3, 0),
    ], // GRASS (top: 0,0, bottom: dirt, sides: 3,0)
    [AtlasTile::new(2, 1); 6],   // SAND
    [AtlasTile::new(13, 12); 6], // WATER
    [AtlasTile::new(2, 0); 6],   // DIRT
    [AtlasTile::new(1, 0); 6],   // STONE
    [AtlasTile::new(1, 1); 6],   // BEDROCK
];

/// Flat colour per block type, used when vertex colours are tinted instead of textured.
pub static BLOCK_TYPE_TO_TINT: [[f32; 3]; BLOCK_TYPE_COUNT] = [
    [0.0, 0.0, 0.0],   // AIR
    [0.0, 1.0, 0.0],   // GRASS
    [0.93, 0.87, 0.6], // SAND
    [0.0, 0.0, 1.0],   // WATER
    [1.0, 0.5, 0.0],   // DIRT
    [0.5, 0.5, 0.5],   // STONE
    [0.2, 0.2, 0.2],   // BEDROCK
];

/// Immutable render data shared by every cell of one material.
///
/// Built once per process and handed out by reference; cells never carry
/// their own copy.
#[derive(Debug, Clone, PartialEq)]
pub struct MaterialDescriptor {
    /// The material this descriptor belongs to.
    pub block_type: BlockType,
    /// Atlas texture coordinates, one quad per face in `BlockSide` order.
    pub face_tex_coords: [QuadTexCoords; 6],
    /// Flat colour for tinted output.
    pub tint: [f32; 3],
}

static MATERIAL_DESCRIPTORS: LazyLock<[MaterialDescriptor; BLOCK_TYPE_COUNT]> =
    LazyLock::new(|| {
        let atlas = TextureAtlas::default();
        BlockType::ALL.map(|block_type| {
            let tiles = &BLOCK_TYPE_TO_ATLAS_TILES[block_type as usize];
            MaterialDescriptor {
                block_type,
                face_tex_coords: tiles.map(|tile| atlas.tile_quad(tile)),
                tint: BLOCK_TYPE_TO_TINT[block_type as usize],
            }
        })
    });

/// Represents a single voxel cell in the grid.
///
/// # Memory Layout
/// The `#[repr(C)]` attribute with a single byte keeps the grid a plain byte buffer,
/// which is what `VoxelGrid::as_bytes` exposes.
#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable, Debug, PartialEq, Eq, Default)]
pub struct Block {
    /// The type of this block, encoded as a `BlockTypeSize` for compact storage.
    pub block_type: BlockTypeSize,
}

impl Block {
    /// An empty cell.
    pub const AIR: Block = Block {
        block_type: BlockType::AIR as BlockTypeSize,
    };

    /// Creates a new block of the specified type.
    pub fn new(block_type: BlockType) -> Self {
        Block {
            block_type: block_type as BlockTypeSize,
        }
    }

    /// Decodes the stored id.
    pub fn block_type(&self) -> BlockType {
        BlockType::get_block_type_from_int(self.block_type)
    }

    /// Returns the interned descriptor for a block type.
    pub fn descriptor(block_type: BlockType) -> &'static MaterialDescriptor {
        &MATERIAL_DESCRIPTORS[block_type as usize]
    }
}
