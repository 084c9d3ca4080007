//! # Voxel Data Model
//!
//! This module contains the chunked voxel volume the mesher reads from.
//!
//! ## Architecture
//!
//! * **Voxel**: A material code, `0` meaning air, plus the six voxel faces
//! * **Coords**: Conversions between global, chunk and local coordinates
//! * **Chunk**: A fixed-size dense 3D grid of voxels at a chunk coordinate
//! * **World**: A sparse map of loaded chunks answering global voxel queries
//! * **Resolver**: The neighbor lookup capability handed to the mesher
//!
//! ## Data Flow
//!
//! 1. A chunk is created empty and filled by a `ChunkPopulator`
//! 2. The world takes ownership of the chunk at its chunk coordinate
//! 3. A remesh reads the chunk directly and its neighbors through the world
//! 4. The resulting mesh is handed to the renderer
//!
//! ## Thread Safety
//!
//! Meshing only reads. Any number of chunks may be meshed concurrently from a
//! shared `&World`; loading and unloading take `&mut World` and therefore wait
//! for in-flight passes to finish.

pub mod chunk;
pub mod coords;
pub mod resolver;
pub mod voxel;
pub mod world;
