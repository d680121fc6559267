//! Texture atlas addressing.
//!
//! The atlas image itself is an external asset and is never decoded here. This
//! module only turns tile positions into normalised UV rectangles.

/// Texture coordinates for the four corners of one quad.
///
/// Corner order matches the quad's vertex order: bottom-left, bottom-right,
/// top-right, top-left, as seen from outside the cube.
pub type QuadTexCoords = [[f32; 2]; 4];

/// A tile position in the atlas grid, in tiles from the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AtlasTile {
    /// Column, counted left to right.
    pub column: u16,
    /// Row, counted top to bottom.
    pub row: u16,
}

impl AtlasTile {
    /// Creates a tile reference.
    pub const fn new(column: u16, row: u16) -> Self {
        AtlasTile { column, row }
    }
}

/// Layout of a square-tiled texture atlas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextureAtlas {
    /// Tiles per row of the atlas image.
    pub columns: u16,
    /// Tiles per column of the atlas image.
    pub rows: u16,
}

impl Default for TextureAtlas {
    /// A 16 x 16 tile atlas.
    fn default() -> Self {
        TextureAtlas {
            columns: 16,
            rows: 16,
        }
    }
}

impl TextureAtlas {
    /// UV rectangle of a tile, with V growing downwards as in image space.
    ///
    /// Tiles outside the layout wrap around, so every tile maps somewhere valid.
    pub fn tile_quad(&self, tile: AtlasTile) -> QuadTexCoords {
        let tile_u = 1.0 / self.columns as f32;
        let tile_v = 1.0 / self.rows as f32;
        let u0 = (tile.column % self.columns) as f32 * tile_u;
        let v0 = (tile.row % self.rows) as f32 * tile_v;
        let (u1, v1) = (u0 + tile_u, v0 + tile_v);

        [[u0, v1], [u1, v1], [u1, v0], [u0, v0]]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_tile_spans_one_sixteenth() {
        let quad = TextureAtlas::default().tile_quad(AtlasTile::new(0, 0));
        assert_eq!(quad, [[0.0, 0.0625], [0.0625, 0.0625], [0.0625, 0.0], [0.0, 0.0]]);
    }

    #[test]
    fn quads_stay_inside_unit_square() {
        let atlas = TextureAtlas::default();
        for column in 0..16 {
            for row in 0..16 {
                for [u, v] in atlas.tile_quad(AtlasTile::new(column, row)) {
                    assert!((0.0..=1.0).contains(&u));
                    assert!((0.0..=1.0).contains(&v));
                }
            }
        }
    }

    #[test]
    fn out_of_range_tiles_wrap() {
        let atlas = TextureAtlas::default();
        assert_eq!(
            atlas.tile_quad(AtlasTile::new(17, 1)),
            atlas.tile_quad(AtlasTile::new(1, 1))
        );
    }
}
