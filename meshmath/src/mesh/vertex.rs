use crate::math::*;
use bytemuck::{Pod, Zeroable};
use std::mem::{offset_of, size_of};

/// One interleaved vertex exactly as stored on disk and uploaded to the GPU.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default, Pod, Zeroable)]
pub struct Vertex {
    pub position: Vec3,
    pub normal: Vec3,
}

impl Vertex {
    pub const fn new(position: Vec3, normal: Vec3) -> Self {
        Self { position, normal }
    }
}

/// Byte sizes and offsets of the attributes inside one [`Vertex`], in the form
/// a `glVertexAttribPointer`-style API wants them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VertexLayout {
    pub vertex_size: usize,
    pub positions_size: usize,
    pub positions_offset: usize,
    pub normals_size: usize,
    pub normals_offset: usize,
}

impl VertexLayout {
    pub const POSITION_NORMAL: VertexLayout = VertexLayout {
        vertex_size: size_of::<Vertex>(),
        positions_size: size_of::<Vec3>(),
        positions_offset: offset_of!(Vertex, position),
        normals_size: size_of::<Vec3>(),
        normals_offset: offset_of!(Vertex, normal),
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_matches_file_format() {
        let l = VertexLayout::POSITION_NORMAL;
        assert_eq!(l.vertex_size, 24);
        assert_eq!(l.positions_size, 12);
        assert_eq!(l.positions_offset, 0);
        assert_eq!(l.normals_size, 12);
        assert_eq!(l.normals_offset, 12);
    }

    #[test]
    fn test_vertex_is_six_floats() {
        let v = Vertex::new(Vec3::new(1.0, 2.0, 3.0), Vec3::new(4.0, 5.0, 6.0));
        let floats: &[f32] = bytemuck::cast_slice(std::slice::from_ref(&v));
        assert_eq!(floats, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    }
}
