use cgmath::{Point3, Vector3};

use crate::voxels::block::block_side::BlockSide;

/// Represents a single quad face of a cell in world space.
///
/// The four corners are named as seen from outside the cube, so walking
/// `ll -> lr -> ur -> ul` is counter-clockwise and the quad's front face points
/// away from the cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Face {
    /// Lower-left corner
    pub ll: Point3<f32>,
    /// Lower-right corner
    pub lr: Point3<f32>,
    /// Upper-right corner
    pub ur: Point3<f32>,
    /// Upper-left corner
    pub ul: Point3<f32>,
    /// Which side of the cell this face represents
    pub block_side: BlockSide,
}

impl Face {
    /// Creates the face of a cube centred at `centre` with edge length `2 * half`.
    ///
    /// # Arguments
    /// * `centre` - World-space centre of the cell
    /// * `half` - Half the cell edge length
    /// * `block_side` - Which side of the cell to build
    pub fn new(centre: Point3<f32>, half: f32, block_side: BlockSide) -> Self {
        let h = half;
        let [ll, lr, ur, ul] = match block_side {
            BlockSide::FRONT => [[-h, -h, h], [h, -h, h], [h, h, h], [-h, h, h]],
            BlockSide::BACK => [[h, -h, -h], [-h, -h, -h], [-h, h, -h], [h, h, -h]],
            BlockSide::BOTTOM => [[-h, -h, -h], [h, -h, -h], [h, -h, h], [-h, -h, h]],
            BlockSide::TOP => [[-h, h, h], [h, h, h], [h, h, -h], [-h, h, -h]],
            BlockSide::LEFT => [[-h, -h, -h], [-h, -h, h], [-h, h, h], [-h, h, -h]],
            BlockSide::RIGHT => [[h, -h, h], [h, -h, -h], [h, h, -h], [h, h, h]],
        };
        let at = |offset: [f32; 3]| centre + Vector3::from(offset);
        Face {
            ll: at(ll),
            lr: at(lr),
            ur: at(ur),
            ul: at(ul),
            block_side,
        }
    }

    /// Corners in emission order.
    pub fn corners(&self) -> [Point3<f32>; 4] {
        [self.ll, self.lr, self.ur, self.ul]
    }
}
