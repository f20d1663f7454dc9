use thiserror::Error;

#[derive(Error, Debug)]
pub enum MeshError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The input ended before `section` was complete. `expected` is the size
    /// of the whole section in bytes.
    #[error("mesh data truncated in {section}: expected {expected} bytes")]
    Truncated { section: &'static str, expected: u64 },

    #[error("mesh too large: {vertex_count} vertices, {triangle_count} triangles")]
    TooLarge { vertex_count: u64, triangle_count: u64 },

    #[error("triangle {triangle} references vertex {index}, but the mesh has {vertex_count} vertices")]
    IndexOutOfBounds { triangle: usize, index: u32, vertex_count: usize },

    #[error("vertex {vertex} has a non-finite component {component}")]
    NonFinite { vertex: usize, component: usize },
}
