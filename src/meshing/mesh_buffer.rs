//! Mesh data accumulated by a meshing pass.
//!
//! A `MeshBuffer` holds three parallel, append-only sequences: vertex positions,
//! triangle indices and texture coordinates. It is built once per meshing pass and
//! then handed, read-only, to the renderer.

use crate::voxels::voxel::voxel_face::VoxelFace;

use super::vertex::Vertex;

/// Number of vertices emitted per face.
pub const VERTICES_PER_FACE: usize = 4;
/// Number of triangle indices emitted per face (two triangles).
pub const INDICES_PER_FACE: usize = 6;

/// Geometry produced for one chunk, in chunk-local space.
///
/// # Invariants
/// - `positions.len() == uvs.len()`
/// - `indices.len()` is a multiple of 3, and of [`INDICES_PER_FACE`]
/// - every face's indices reference the 4 positions appended with it
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeshBuffer {
    positions: Vec<[f32; 3]>,
    indices: Vec<u32>,
    uvs: Vec<[f32; 2]>,
}

impl MeshBuffer {
    /// Creates a new, empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one quad for `face` of the voxel whose minimum corner is `(x, y, z)`.
    ///
    /// Adds four positions and four texture coordinates from the face table, then
    /// two triangles `(n-4, n-3, n-2)` and `(n-4, n-2, n-1)` where `n` is the
    /// vertex count after the append.
    pub fn add_face(&mut self, x: i32, y: i32, z: i32, face: VoxelFace) {
        let origin = [x as f32, y as f32, z as f32];
        for (offset, uv) in face.corner_offsets().iter().zip(face.corner_uvs()) {
            self.positions.push([
                origin[0] + offset[0] as f32,
                origin[1] + offset[1] as f32,
                origin[2] + offset[2] as f32,
            ]);
            self.uvs.push(*uv);
        }

        let n = self.positions.len() as u32;
        self.indices
            .extend_from_slice(&[n - 4, n - 3, n - 2, n - 4, n - 2, n - 1]);
    }

    /// Vertex positions, four per face.
    pub fn positions(&self) -> &[[f32; 3]] {
        &self.positions
    }

    /// Triangle indices into [`MeshBuffer::positions`], three per triangle.
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// Texture coordinates, one per position.
    pub fn uvs(&self) -> &[[f32; 2]] {
        &self.uvs
    }

    /// Number of emitted faces.
    pub fn face_count(&self) -> usize {
        self.positions.len() / VERTICES_PER_FACE
    }

    /// Number of emitted vertices.
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Returns `true` if no face was emitted.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Interleaves positions and texture coordinates into GPU-ready vertices.
    pub fn vertices(&self) -> Vec<Vertex> {
        self.positions
            .iter()
            .zip(&self.uvs)
            .map(|(position, uv)| Vertex::new(*position, *uv))
            .collect()
    }

    /// Raw bytes of the position sequence, for direct buffer upload.
    pub fn position_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.positions)
    }

    /// Raw bytes of the index sequence, for direct buffer upload.
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }

    /// Raw bytes of the texture coordinate sequence, for direct buffer upload.
    pub fn uv_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.uvs)
    }

    /// Consumes the buffer and returns `(positions, indices, uvs)`.
    pub fn into_parts(self) -> (Vec<[f32; 3]>, Vec<u32>, Vec<[f32; 2]>) {
        (self.positions, self.indices, self.uvs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_face_appends_four_vertices_and_two_triangles() {
        let mut buffer = MeshBuffer::new();
        buffer.add_face(0, 0, 0, VoxelFace::Top);
        buffer.add_face(2, 3, 4, VoxelFace::Back);

        assert_eq!(buffer.face_count(), 2);
        assert_eq!(buffer.positions().len(), 8);
        assert_eq!(buffer.uvs().len(), 8);
        assert_eq!(buffer.indices(), &[0, 1, 2, 0, 2, 3, 4, 5, 6, 4, 6, 7]);
    }

    #[test]
    fn top_face_geometry_matches_the_table() {
        let mut buffer = MeshBuffer::new();
        buffer.add_face(1, 2, 3, VoxelFace::Top);
        assert_eq!(
            buffer.positions(),
            &[[1.0, 3.0, 3.0], [1.0, 3.0, 4.0], [2.0, 3.0, 4.0], [2.0, 3.0, 3.0]]
        );
        assert_eq!(buffer.uvs(), &[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]]);
    }

    #[test]
    fn right_face_geometry_matches_the_table() {
        let mut buffer = MeshBuffer::new();
        buffer.add_face(0, 0, 0, VoxelFace::Right);
        assert_eq!(
            buffer.positions(),
            &[[1.0, 0.0, 1.0], [1.0, 0.0, 0.0], [1.0, 1.0, 0.0], [1.0, 1.0, 1.0]]
        );
        assert_eq!(buffer.uvs(), &[[1.0, 0.0], [1.0, 1.0], [1.0, 1.0], [1.0, 0.0]]);
    }

    #[test]
    fn byte_views_cover_every_element() {
        let mut buffer = MeshBuffer::new();
        buffer.add_face(0, 0, 0, VoxelFace::Front);
        assert_eq!(buffer.position_bytes().len(), 4 * 3 * 4);
        assert_eq!(buffer.index_bytes().len(), 6 * 4);
        assert_eq!(buffer.uv_bytes().len(), 4 * 2 * 4);
    }

    #[test]
    fn vertices_interleave_in_order() {
        let mut buffer = MeshBuffer::new();
        buffer.add_face(0, 0, 0, VoxelFace::Front);
        let vertices = buffer.vertices();
        assert_eq!(vertices.len(), 4);
        assert_eq!(vertices[0].position, [0.0, 0.0, 1.0]);
        assert_eq!(vertices[0].tex_coords, [0.0, 1.0]);
        assert_eq!(vertices[2].position, [1.0, 1.0, 1.0]);

        let (positions, indices, uvs) = buffer.into_parts();
        assert_eq!((positions.len(), indices.len(), uvs.len()), (4, 6, 4));
    }
}
