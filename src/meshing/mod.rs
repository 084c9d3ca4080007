//! Mesh generation for voxel chunks.
//!
//! This module turns chunk voxel data into triangle meshes by culling every face
//! that touches a solid neighbor.
//!
//! # Architecture
//! - [`mesh_chunk`]: the face-culling mesher, a pure function of a chunk and a
//!   neighbor resolver
//! - [`MeshBuffer`]: append-only positions, triangle indices and texture coordinates
//! - [`Vertex`]: interleaved GPU-ready view of a buffer
//! - [`remesh_world`]: meshes every loaded chunk on a pool of worker threads
//!
//! # Output Contract
//! One quad is emitted per visible face; faces are never merged. Vertex order,
//! winding and UVs follow the table in
//! [`VoxelFace`](crate::voxels::voxel::voxel_face::VoxelFace), and voxels are
//! visited x outer, y middle, z inner. Meshes are in chunk-local space: place
//! them at [`Chunk::world_origin`](crate::voxels::chunk::Chunk::world_origin).

mod face_mesher;
mod mesh_buffer;
mod parallel;
mod vertex;

pub use face_mesher::{is_face_visible, mesh_chunk};
pub use mesh_buffer::{MeshBuffer, INDICES_PER_FACE, VERTICES_PER_FACE};
pub use parallel::{default_worker_count, remesh_shared, remesh_world, ChunkMesh};
pub use vertex::Vertex;
