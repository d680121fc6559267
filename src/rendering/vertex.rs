//! Interleaved vertex format for mesh output.
//!
//! The chunk itself publishes three separate buffers; backends that prefer a
//! single interleaved buffer can build one with [`MeshBuffers::interleaved`].
//!
//! [`MeshBuffers::interleaved`]: super::meshing::mesh::MeshBuffers::interleaved

/// A single vertex of a terrain quad.
///
/// # Memory Layout
/// - Position: 3x f32 (12 bytes)
/// - Colour: 3x f32 (12 bytes)
/// - Texture Coordinates: [f32; 2] (8 bytes)
///
/// Total size: 32 bytes
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    /// World-space position
    pub position: [f32; 3],
    /// RGB colour, white when the atlas supplies all colour
    pub color: [f32; 3],
    /// Atlas UV coordinates
    pub tex_coords: [f32; 2],
}

impl Vertex {
    /// Byte distance between consecutive vertices in an interleaved buffer.
    pub const STRIDE: usize = std::mem::size_of::<Vertex>();

    /// Creates a new vertex.
    pub fn new(position: [f32; 3], color: [f32; 3], tex_coords: [f32; 2]) -> Self {
        Vertex {
            position,
            color,
            tex_coords,
        }
    }

    /// Byte offsets of the position, colour and texture coordinate attributes.
    pub const fn attribute_offsets() -> [usize; 3] {
        [0, 12, 24]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_is_tightly_packed() {
        assert_eq!(Vertex::STRIDE, 32);
        let vertex = Vertex::new([1.0, 2.0, 3.0], [0.5; 3], [0.25, 0.75]);
        let floats: &[f32] = bytemuck::cast_slice(std::slice::from_ref(&vertex));
        assert_eq!(floats, &[1.0, 2.0, 3.0, 0.5, 0.5, 0.5, 0.25, 0.75]);
        assert_eq!(Vertex::attribute_offsets()[2], 6 * std::mem::size_of::<f32>());
    }
}
