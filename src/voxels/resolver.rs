//! # Voxel Resolver
//!
//! The mesher never reaches into the world on its own. Whenever a face sits
//! on a chunk boundary it asks a `VoxelResolver` for the voxel on the other
//! side. `World` implements the trait, as does any
//! `Fn(Point3<i32>) -> Option<Voxel>` closure.

use cgmath::Point3;

use super::voxel::Voxel;

/// Resolves voxels by global position.
///
/// `None` means nothing is loaded at that position. The mesher treats it as
/// open space.
pub trait VoxelResolver {
    /// Returns the voxel at `global`, or `None` if its chunk is not loaded.
    fn voxel_at_global(&self, global: Point3<i32>) -> Option<Voxel>;
}

impl<F> VoxelResolver for F
where
    F: Fn(Point3<i32>) -> Option<Voxel>,
{
    fn voxel_at_global(&self, global: Point3<i32>) -> Option<Voxel> {
        self(global)
    }
}

/// A resolver for a chunk meshed in isolation: every neighbor is unloaded.
#[derive(Copy, Clone, Debug, Default)]
pub struct NoNeighbors;

impl VoxelResolver for NoNeighbors {
    fn voxel_at_global(&self, _global: Point3<i32>) -> Option<Voxel> {
        None
    }
}
