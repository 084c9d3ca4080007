#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![warn(rustdoc::invalid_rust_codeblocks)]

//! # Voxel Mesher
//!
//! A sparse, chunked voxel volume and the face-culling mesher that turns each
//! chunk into renderable triangle geometry.
//!
//! ## Key Modules
//!
//! * `voxels` - Voxels, chunks, coordinate conversions and the chunk world
//! * `meshing` - Face-culling mesher, mesh buffers and parallel remeshing
//! * `core` - Shared, lock-guarded resources for multi-threaded access
//! * `error` - Error types
//!
//! ## Usage
//!
//! ```rust
//! use cgmath::Point3;
//! use voxel_mesher::voxels::{chunk::SolidFill, voxel::Voxel, world::World};
//!
//! let mut world = World::new();
//! world.add_chunk_at(Point3::new(0, 0, 0), &SolidFill(Voxel::new(1)));
//! world.add_chunk_at(Point3::new(1, 0, 0), &SolidFill(Voxel::new(1)));
//!
//! // The face shared by the two chunks is culled on both sides.
//! let mesh = world.remesh_chunk(Point3::new(0, 0, 0)).unwrap();
//! assert_eq!(mesh.face_count(), 5 * 16 * 16);
//! ```
//!
//! Meshes are produced in chunk-local space; the renderer places each one at
//! its chunk's `world_origin()`.

use cgmath::Point3;
use log::info;

pub mod core;
pub mod error;
pub mod meshing;
pub mod voxels;

pub use error::{Result, VoxelError};

use crate::core::MtResource;
use meshing::{default_worker_count, remesh_shared};
use voxels::{chunk::CHUNK_DIMENSION, voxel::Voxel, world::World};

/// Number of chunks along each axis of the demo world.
pub const DEMO_WORLD_EXTENT: i32 = 4;

/// Loads a `DEMO_WORLD_EXTENT`³ block of chunks holding a solid sphere, meshes
/// every chunk in parallel and logs the result.
///
/// Logging is configured through `RUST_LOG`.
pub fn run() {
    let mut log_builder = env_logger::Builder::new();
    log_builder
        .target(env_logger::Target::Stdout)
        .parse_env("RUST_LOG")
        .init();

    info!("Logger initialized");

    let world = MtResource::new(World::new());
    let center = (DEMO_WORLD_EXTENT * CHUNK_DIMENSION) as f32 / 2.0;
    let radius = center - 1.0;
    let sphere = move |g: Point3<i32>| {
        let (x, y, z) = (
            g.x as f32 + 0.5 - center,
            g.y as f32 + 0.5 - center,
            g.z as f32 + 0.5 - center,
        );
        if x * x + y * y + z * z <= radius * radius {
            Voxel::new(1 + (g.y / CHUNK_DIMENSION) as u16)
        } else {
            Voxel::AIR
        }
    };

    {
        let mut world = world.get_mut();
        for x in 0..DEMO_WORLD_EXTENT {
            for y in 0..DEMO_WORLD_EXTENT {
                for z in 0..DEMO_WORLD_EXTENT {
                    world.add_chunk_at(Point3::new(x, y, z), &sphere);
                }
            }
        }
        info!("Loaded {} chunks", world.len());
    }

    for (position, mesh) in remesh_shared(&world, default_worker_count()) {
        info!(
            "Chunk {:?}: {} faces, {} vertices, {} indices",
            position,
            mesh.face_count(),
            mesh.vertex_count(),
            mesh.indices().len()
        );
    }
}
