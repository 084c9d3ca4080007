//! # World Module
//!
//! This module provides the `World` struct which manages the collection of loaded
//! chunks. It serves as the central coordinator for chunk loading, unloading, and
//! voxel access by global position.
//!
//! ## Architecture
//!
//! The world uses a sparse storage approach where only loaded chunks are kept in
//! memory, keyed by chunk coordinate. This allows for effectively infinite world
//! sizes while keeping load, unload and lookup O(1) amortized.
//!
//! The world exclusively owns its chunks. Callers receive borrowed read access
//! (or explicit copies), and chunks never point back at the world: neighbor
//! lookups go through the [`VoxelResolver`] the world implements.
//!
//! ## Duplicate Coordinates
//!
//! [`World::load`] rejects a chunk whose coordinate is already occupied and
//! leaves the loaded chunk untouched. Overwriting is only done on request,
//! through [`World::replace`].

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use cgmath::{Point3, Vector3};
use log::{debug, warn};

use crate::error::{Result, VoxelError};
use crate::meshing::{mesh_chunk, MeshBuffer};

use super::chunk::{Chunk, ChunkPopulator};
use super::coords;
use super::resolver::VoxelResolver;
use super::voxel::Voxel;

/// Order in which [`World::cardinal_neighbors`] reports adjacent chunks:
/// +Y, -Y, -X, +X, +Z, -Z.
pub const CARDINAL_DIRECTIONS: [Vector3<i32>; 6] = [
    Vector3 { x: 0, y: 1, z: 0 },
    Vector3 { x: 0, y: -1, z: 0 },
    Vector3 { x: -1, y: 0, z: 0 },
    Vector3 { x: 1, y: 0, z: 0 },
    Vector3 { x: 0, y: 0, z: 1 },
    Vector3 { x: 0, y: 0, z: -1 },
];

/// Represents a voxel world composed of multiple chunks.
///
/// The world is stored as a sparse 3D grid of chunks, where each chunk is a 16x16x16
/// collection of voxels.
///
/// # Examples
///
/// ```
/// use cgmath::Point3;
/// use voxel_mesher::voxels::{chunk::SolidFill, voxel::Voxel, world::World};
///
/// let mut world = World::new();
/// world.add_chunk_at(Point3::new(0, 0, 0), &SolidFill(Voxel::new(1)));
///
/// assert!(world.get_chunk(Point3::new(0, 0, 0)).is_some());
/// assert_eq!(world.get_voxel_at_global(Point3::new(5, 5, 5)), Some(Voxel::new(1)));
/// assert_eq!(world.get_voxel_at_global(Point3::new(-1, 5, 5)), None);
/// ```
#[derive(Debug, Default)]
pub struct World {
    /// A mapping from chunk coordinates to chunk data. Every key equals the
    /// position stored in its chunk.
    chunks: HashMap<Point3<i32>, Chunk>,
}

impl World {
    /// Creates a new, empty world.
    pub fn new() -> Self {
        World {
            chunks: HashMap::new(),
        }
    }

    /// Loads `chunk` at its own chunk coordinate.
    ///
    /// # Errors
    /// Returns [`VoxelError::ChunkAlreadyLoaded`] if the coordinate is occupied.
    /// The chunk already loaded there is kept and the new one is dropped.
    pub fn load(&mut self, chunk: Chunk) -> Result<()> {
        let position = chunk.position();
        match self.chunks.entry(position) {
            Entry::Occupied(_) => {
                warn!("Rejected duplicate chunk at {:?}", position);
                Err(VoxelError::ChunkAlreadyLoaded { position })
            }
            Entry::Vacant(slot) => {
                slot.insert(chunk);
                debug!("Loaded chunk at {:?}", position);
                Ok(())
            }
        }
    }

    /// Loads `chunk` at its own chunk coordinate, overwriting any chunk
    /// already there.
    ///
    /// # Returns
    /// The chunk that was replaced, if any.
    pub fn replace(&mut self, chunk: Chunk) -> Option<Chunk> {
        let position = chunk.position();
        let previous = self.chunks.insert(position, chunk);
        debug!(
            "Loaded chunk at {:?} (replaced existing: {})",
            position,
            previous.is_some()
        );
        previous
    }

    /// Creates, populates and loads a chunk at `position` if one doesn't
    /// already exist. If the coordinate is occupied this method does nothing.
    ///
    /// # Arguments
    /// * `position` - The chunk coordinates where the new chunk should be added
    /// * `populator` - Fills the new chunk before it becomes visible to lookups
    ///
    /// # Panics
    /// Panics if `position` is outside the addressable chunk range, like
    /// [`Chunk::empty`].
    pub fn add_chunk_at<P: ChunkPopulator + ?Sized>(&mut self, position: Point3<i32>, populator: &P) {
        if let Entry::Vacant(slot) = self.chunks.entry(position) {
            slot.insert(Chunk::populated(position, populator));
            debug!("Generated chunk at {:?}", position);
        }
    }

    /// Removes the chunk at `position`, if loaded.
    ///
    /// # Returns
    /// The removed chunk, or `None` if nothing was loaded there.
    pub fn unload(&mut self, position: Point3<i32>) -> Option<Chunk> {
        let removed = self.chunks.remove(&position);
        if removed.is_some() {
            debug!("Unloaded chunk at {:?}", position);
        }
        removed
    }

    /// Retrieves a reference to the chunk at the specified chunk coordinates.
    pub fn get_chunk(&self, position: Point3<i32>) -> Option<&Chunk> {
        self.chunks.get(&position)
    }

    /// Retrieves a mutable reference to the chunk at the specified chunk
    /// coordinates, for in-place population.
    pub fn get_chunk_mut(&mut self, position: Point3<i32>) -> Option<&mut Chunk> {
        self.chunks.get_mut(&position)
    }

    /// Looks up a voxel by global position.
    ///
    /// # Returns
    /// The voxel, or `None` if the owning chunk is not loaded.
    pub fn get_voxel_at_global(&self, global: Point3<i32>) -> Option<Voxel> {
        let (chunk_position, local) = coords::split_global(global);
        self.chunks
            .get(&chunk_position)
            .map(|chunk| chunk.get_local(local.x, local.y, local.z))
    }

    /// Returns the loaded chunks among the six face-adjacent to `position`,
    /// in [`CARDINAL_DIRECTIONS`] order.
    pub fn cardinal_neighbors(&self, position: Point3<i32>) -> Vec<&Chunk> {
        CARDINAL_DIRECTIONS
            .iter()
            .filter_map(|direction| {
                let neighbor = Point3::new(
                    position.x.checked_add(direction.x)?,
                    position.y.checked_add(direction.y)?,
                    position.z.checked_add(direction.z)?,
                );
                self.chunks.get(&neighbor)
            })
            .collect()
    }

    /// All loaded chunk coordinates, sorted by (x, y, z).
    pub fn positions(&self) -> Vec<Point3<i32>> {
        let mut positions: Vec<_> = self.chunks.keys().copied().collect();
        positions.sort_by_key(|p| (p.x, p.y, p.z));
        positions
    }

    /// Iterates the loaded chunks in no particular order.
    pub fn chunks(&self) -> impl Iterator<Item = &Chunk> {
        self.chunks.values()
    }

    /// The number of loaded chunks.
    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    /// Returns `true` if no chunk is loaded.
    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    /// Builds the mesh of the chunk at `position`, resolving boundary faces
    /// against the other loaded chunks.
    ///
    /// # Returns
    /// The mesh, or `None` if no chunk is loaded at `position`.
    pub fn remesh_chunk(&self, position: Point3<i32>) -> Option<MeshBuffer> {
        self.get_chunk(position).map(|chunk| mesh_chunk(chunk, self))
    }
}

impl VoxelResolver for World {
    fn voxel_at_global(&self, global: Point3<i32>) -> Option<Voxel> {
        self.get_voxel_at_global(global)
    }
}
