use super::*;
use crate::math::*;

/// A triangle mesh with interleaved position/normal vertices and `u32`
/// indices. The counts are derived from the buffers, so they always agree.
///
/// Indices are not checked on construction or load; call [`MeshData::validate`]
/// before trusting them.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MeshData {
    vertices: Vec<Vertex>,
    triangles: Vec<[u32; 3]>,
}

impl MeshData {
    pub const LAYOUT: VertexLayout = VertexLayout::POSITION_NORMAL;

    pub fn new(vertices: Vec<Vertex>, triangles: Vec<[u32; 3]>) -> Self {
        Self { vertices, triangles }
    }

    pub fn from_vertices(vertices: &[Vertex], triangles: &[[u32; 3]]) -> Self {
        Self::new(vertices.to_vec(), triangles.to_vec())
    }

    /// Axis-aligned cube centered at the origin, with flat normals and
    /// counter-clockwise outward-facing triangles. Every face gets its own six
    /// vertices, so the result has 36 vertices and 12 triangles.
    pub fn cube(size: f32) -> Self {
        // (normal, u, v) with u x v == normal
        const FACES: [(Vec3, Vec3, Vec3); 6] = [
            (Vec3::NEG_Z, Vec3::Y, Vec3::X),
            (Vec3::Z, Vec3::X, Vec3::Y),
            (Vec3::NEG_X, Vec3::Z, Vec3::Y),
            (Vec3::X, Vec3::Y, Vec3::Z),
            (Vec3::NEG_Y, Vec3::X, Vec3::Z),
            (Vec3::Y, Vec3::Z, Vec3::X),
        ];
        let h = size * 0.5;

        let mut vertices = Vec::with_capacity(36);
        for (n, u, v) in FACES {
            let corner = |su: f32, sv: f32| Vertex::new((n + u * su + v * sv) * h, n);
            let (c0, c1, c2, c3) = (corner(-1.0, -1.0), corner(1.0, -1.0), corner(1.0, 1.0), corner(-1.0, 1.0));
            vertices.extend_from_slice(&[c0, c1, c2, c2, c3, c0]);
        }

        let triangles = (0..12u32).map(|t| [t * 3, t * 3 + 1, t * 3 + 2]).collect();
        Self { vertices, triangles }
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    pub fn layout(&self) -> VertexLayout {
        Self::LAYOUT
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn triangle_indices(&self) -> &[[u32; 3]] {
        &self.triangles
    }

    /// `vertex_count * 6` floats: px, py, pz, nx, ny, nz per vertex.
    pub fn vertex_data(&self) -> &[f32] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// `triangle_count * 3` indices.
    pub fn triangles(&self) -> &[u32] {
        bytemuck::cast_slice(&self.triangles)
    }

    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.triangles)
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::from_points(self.vertices.iter().map(|v| v.position))
    }

    /// Reports the first out-of-range index, then the first non-finite
    /// position or normal component (0..6, positions first).
    pub fn validate(&self) -> Result<(), MeshError> {
        let vertex_count = self.vertex_count();
        for (triangle, tri) in self.triangles.iter().enumerate() {
            if let Some(&index) = tri.iter().find(|&&i| i as usize >= vertex_count) {
                return Err(MeshError::IndexOutOfBounds { triangle, index, vertex_count });
            }
        }

        for (vertex, v) in self.vertices.iter().enumerate() {
            let floats: &[f32; 6] = bytemuck::cast_ref(v);
            if let Some(component) = floats.iter().position(|f| !f.is_finite()) {
                return Err(MeshError::NonFinite { vertex, component });
            }
        }

        Ok(())
    }

    pub fn vertices_mut(&mut self) -> &mut [Vertex] {
        &mut self.vertices
    }

    pub fn triangles_mut(&mut self) -> &mut [[u32; 3]] {
        &mut self.triangles
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn triangle() -> MeshData {
        MeshData::from_vertices(
            &[
                Vertex::new(Vec3::new(0.0, 0.0, 0.0), Vec3::Z),
                Vertex::new(Vec3::new(1.0, 0.0, 0.0), Vec3::Z),
                Vertex::new(Vec3::new(0.0, 1.0, 0.0), Vec3::Z),
            ],
            &[[0, 1, 2]],
        )
    }

    #[test]
    fn test_counts_and_views() {
        let mesh = triangle();
        assert_eq!(mesh.vertex_count(), 3);
        assert_eq!(mesh.triangle_count(), 1);
        assert_eq!(
            mesh.vertex_data(),
            &[0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0]
        );
        assert_eq!(mesh.triangles(), &[0, 1, 2]);
        assert_eq!(mesh.vertex_bytes().len(), 24 * 3);
        assert_eq!(mesh.index_bytes().len(), 12);
        assert_eq!(mesh.layout(), VertexLayout::POSITION_NORMAL);
    }

    #[test]
    fn test_empty() {
        let mesh = MeshData::default();
        assert_eq!(mesh.vertex_count(), 0);
        assert_eq!(mesh.triangle_count(), 0);
        assert!(mesh.vertex_data().is_empty());
        assert_eq!(mesh.aabb(), Aabb::default());
        assert!(mesh.validate().is_ok());
    }

    #[test]
    fn test_aabb() {
        let aabb = triangle().aabb();
        assert_eq!(aabb.min, Vec3::ZERO);
        assert_eq!(aabb.max, Vec3::new(1.0, 1.0, 0.0));
    }

    #[test]
    fn test_cube() {
        let cube = MeshData::cube(2.0);
        assert_eq!(cube.vertex_count(), 36);
        assert_eq!(cube.triangle_count(), 12);
        assert!(cube.validate().is_ok());
        assert_eq!(cube.aabb(), Aabb::new(Vec3::splat(-1.0), Vec3::ONE));

        // flat normals, wound counter-clockwise when seen from outside
        let v = cube.vertices();
        for tri in cube.triangle_indices() {
            let [a, b, c] = tri.map(|i| v[i as usize]);
            let face_normal = cross(b.position - a.position, c.position - a.position).normalized();
            assert_eq!(a.normal, b.normal);
            assert_eq!(a.normal, c.normal);
            assert_relative_eq!(face_normal, a.normal, epsilon = 1e-6);
            assert!(dot(a.position, a.normal) > 0.0);
        }
    }

    #[test]
    fn test_validate_index_out_of_bounds() {
        let mut mesh = triangle();
        mesh.triangles_mut()[0][2] = 3;
        match mesh.validate() {
            Err(MeshError::IndexOutOfBounds { triangle, index, vertex_count }) => {
                assert_eq!((triangle, index, vertex_count), (0, 3, 3));
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_validate_non_finite() {
        let mut mesh = triangle();
        mesh.vertices_mut()[1].normal.y = f32::NAN;
        match mesh.validate() {
            Err(MeshError::NonFinite { vertex, component }) => assert_eq!((vertex, component), (1, 4)),
            other => panic!("unexpected {:?}", other),
        }

        mesh.vertices_mut()[1].normal.y = 0.0;
        mesh.vertices_mut()[2].position.x = f32::INFINITY;
        assert!(matches!(mesh.validate(), Err(MeshError::NonFinite { vertex: 2, component: 0 })));
    }
}
