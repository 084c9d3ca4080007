//! # Chunk Population Module
//!
//! Chunks are created empty and filled by a `ChunkPopulator`. Terrain
//! generators live outside this crate and plug in through the trait, or by
//! passing a closure that maps a global voxel position to a voxel.
//!
//! The fills provided here are deterministic and meant for tests and demos:
//! - `EmptyFill`: every voxel air
//! - `SolidFill`: every voxel the same material
//! - `CheckerboardFill`: alternating solid and air cells in all three axes

use cgmath::Point3;

use crate::voxels::voxel::Voxel;

use super::{Chunk, CHUNK_DIMENSION};

/// Fills every cell of a freshly created chunk.
///
/// The mesher places no constraint on a populator beyond leaving the chunk
/// fully populated before it is meshed.
pub trait ChunkPopulator {
    /// Writes every voxel of `chunk`.
    fn populate(&self, chunk: &mut Chunk);
}

/// Any `Fn(global position) -> Voxel` populates a chunk cell by cell.
impl<F> ChunkPopulator for F
where
    F: Fn(Point3<i32>) -> Voxel,
{
    fn populate(&self, chunk: &mut Chunk) {
        for_each_local(|x, y, z| {
            let voxel = self(chunk.global_position_of(x, y, z));
            chunk.set_local(x, y, z, voxel);
        });
    }
}

/// Leaves every voxel air.
#[derive(Copy, Clone, Debug, Default)]
pub struct EmptyFill;

impl ChunkPopulator for EmptyFill {
    fn populate(&self, chunk: &mut Chunk) {
        for_each_local(|x, y, z| chunk.set_local(x, y, z, Voxel::AIR));
    }
}

/// Sets every voxel to the wrapped material.
#[derive(Copy, Clone, Debug)]
pub struct SolidFill(pub Voxel);

impl ChunkPopulator for SolidFill {
    fn populate(&self, chunk: &mut Chunk) {
        for_each_local(|x, y, z| chunk.set_local(x, y, z, self.0));
    }
}

/// Alternates the wrapped material with air.
///
/// Parity is taken from global coordinates, so the pattern continues
/// across chunk boundaries.
#[derive(Copy, Clone, Debug)]
pub struct CheckerboardFill(pub Voxel);

impl ChunkPopulator for CheckerboardFill {
    fn populate(&self, chunk: &mut Chunk) {
        let fill = self.0;
        (move |global: Point3<i32>| {
            if (global.x + global.y + global.z).rem_euclid(2) == 0 {
                fill
            } else {
                Voxel::AIR
            }
        })
        .populate(chunk);
    }
}

/// Visits every local coordinate, x outer, y middle, z inner.
fn for_each_local<F: FnMut(i32, i32, i32)>(mut visit: F) {
    for x in 0..CHUNK_DIMENSION {
        for y in 0..CHUNK_DIMENSION {
            for z in 0..CHUNK_DIMENSION {
                visit(x, y, z);
            }
        }
    }
}
