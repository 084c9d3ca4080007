//! Parallel remeshing of every loaded chunk.
//!
//! Meshing never writes, so distinct chunks can be meshed concurrently against
//! the same world. The sorted chunk list is split into contiguous batches, one
//! per worker thread, and every worker reads the world through a shared
//! borrow. Results are reassembled in chunk-coordinate order so the output
//! does not depend on scheduling.
//!
//! Loading and unloading need `&mut World`, so they cannot overlap a pass. When
//! the world is shared through an [`MtResource`], [`remesh_shared`] holds the
//! read guard for the whole pass.

use std::num::NonZeroUsize;
use std::thread;

use cgmath::Point3;
use log::{debug, info};
use web_time::Instant;

use crate::core::MtResource;
use crate::voxels::world::World;

use super::{mesh_chunk, MeshBuffer};

/// A chunk coordinate paired with the mesh built for it.
pub type ChunkMesh = (Point3<i32>, MeshBuffer);

/// Number of workers to use when the caller has no preference.
pub fn default_worker_count() -> usize {
    thread::available_parallelism()
        .map(NonZeroUsize::get)
        .unwrap_or(1)
}

/// Meshes every loaded chunk of `world` on up to `workers` threads.
///
/// A worker count of zero is treated as one.
///
/// # Returns
/// One mesh per loaded chunk, sorted by chunk coordinate (x, then y, then z).
pub fn remesh_world(world: &World, workers: usize) -> Vec<ChunkMesh> {
    let positions = world.positions();
    if positions.is_empty() {
        return Vec::new();
    }

    let workers = workers.clamp(1, positions.len());
    let batch_size = positions.len().div_ceil(workers);
    let started = Instant::now();

    let meshes = thread::scope(|scope| {
        let handles: Vec<_> = positions
            .chunks(batch_size)
            .enumerate()
            .map(|(worker, batch)| {
                scope.spawn(move || {
                    debug!("Worker {} meshing {} chunks", worker, batch.len());
                    batch
                        .iter()
                        .filter_map(|&position| {
                            world
                                .get_chunk(position)
                                .map(|chunk| (position, mesh_chunk(chunk, world)))
                        })
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        handles
            .into_iter()
            .flat_map(|handle| match handle.join() {
                Ok(meshes) => meshes,
                Err(panic) => std::panic::resume_unwind(panic),
            })
            .collect::<Vec<_>>()
    });

    let faces: usize = meshes.iter().map(|(_, mesh)| mesh.face_count()).sum();
    info!(
        "Remeshed {} chunks on {} workers: {} faces in {:?}",
        meshes.len(),
        workers,
        faces,
        started.elapsed()
    );
    meshes
}

/// Meshes every chunk of a shared world, holding its read lock for the
/// whole pass so no chunk is loaded or unloaded mid-pass.
pub fn remesh_shared(world: &MtResource<World>, workers: usize) -> Vec<ChunkMesh> {
    let guard = world.get();
    remesh_world(&guard, workers)
}
