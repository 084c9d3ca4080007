//! Per-voxel face-culling mesher.
//!
//! Every solid voxel is tested on all six faces. A face is emitted as its own
//! quad when the neighbor across it is air; adjacent coplanar faces are never
//! merged.
//!
//! Neighbors inside the chunk are read directly. Neighbors across the chunk
//! boundary are asked of the resolver, and an unloaded neighbor counts as open
//! space, so a partially loaded world shows its chunk boundaries rather than
//! sealing them. A neighbor past the end of the `i32` global grid can never be
//! loaded and is treated the same way.

use cgmath::Point3;
use log::trace;

use crate::voxels::{
    chunk::Chunk, coords, resolver::VoxelResolver, voxel::voxel_face::VoxelFace,
};

use super::MeshBuffer;

/// Builds the mesh for `chunk`.
///
/// Voxels are visited x outer, y middle, z inner, and each voxel's faces in
/// [`VoxelFace::all`] order. This order fixes the vertex order of the output.
/// Meshing only reads, so calling it twice on unchanged data yields identical
/// buffers.
///
/// # Examples
///
/// ```
/// use cgmath::Point3;
/// use voxel_mesher::meshing::mesh_chunk;
/// use voxel_mesher::voxels::{chunk::Chunk, resolver::NoNeighbors, voxel::Voxel};
///
/// let mut chunk = Chunk::empty(Point3::new(0, 0, 0));
/// chunk.set_local(0, 0, 0, Voxel::new(1));
///
/// let mesh = mesh_chunk(&chunk, &NoNeighbors);
/// assert_eq!(mesh.face_count(), 6);
/// assert_eq!(mesh.indices().len(), 36);
/// ```
pub fn mesh_chunk<R: VoxelResolver + ?Sized>(chunk: &Chunk, resolver: &R) -> MeshBuffer {
    let mut buffer = MeshBuffer::new();

    for (local, _) in chunk.solid_voxels() {
        for face in VoxelFace::all() {
            if is_face_visible(chunk, resolver, local, face) {
                buffer.add_face(local.x, local.y, local.z, face);
            }
        }
    }

    trace!(
        "Meshed chunk at {:?}: {} faces",
        chunk.position(),
        buffer.face_count()
    );
    buffer
}

/// Returns `true` if `face` of the solid voxel at `local` borders open space.
pub fn is_face_visible<R: VoxelResolver + ?Sized>(
    chunk: &Chunk,
    resolver: &R,
    local: Point3<i32>,
    face: VoxelFace,
) -> bool {
    let neighbor = local + face.normal();
    if coords::is_local_in_bounds(neighbor.x, neighbor.y, neighbor.z) {
        return chunk.is_air_local(neighbor.x, neighbor.y, neighbor.z);
    }

    chunk
        .checked_global_position_of(neighbor.x, neighbor.y, neighbor.z)
        .and_then(|global| resolver.voxel_at_global(global))
        .map_or(true, |voxel| voxel.is_air())
}
