//! # Chunk Iteration Module
//!
//! This module provides an iterator over the solid voxels of a chunk.
//!
//! The iterator walks the chunk's `solid_array` bit vector, so runs of air
//! are skipped without reading the voxel grid. Because the grid is x-major,
//! voxels come out x outer, y middle, z inner.

use bitvec::order::Lsb0;
use bitvec::slice::IterOnes;
use cgmath::Point3;

use crate::voxels::voxel::Voxel;

use super::Chunk;

/// An iterator over all non-air voxels in a chunk, yielding
/// `(local position, voxel)` pairs.
pub struct SolidVoxelIterator<'a> {
    /// Reference to the chunk being iterated over
    chunk_ref: &'a Chunk,
    /// Indices of the set bits in the chunk's solid array
    ones: IterOnes<'a, usize, Lsb0>,
}

impl<'a> SolidVoxelIterator<'a> {
    /// Creates a new `SolidVoxelIterator` positioned before the first solid voxel.
    pub fn new(chunk_ref: &'a Chunk) -> Self {
        SolidVoxelIterator {
            chunk_ref,
            ones: chunk_ref.solid_array().iter_ones(),
        }
    }
}

impl Iterator for SolidVoxelIterator<'_> {
    type Item = (Point3<i32>, Voxel);

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.ones.next()?;
        Some((Chunk::local_of_index(index), self.chunk_ref.voxels()[index]))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.ones.size_hint()
    }
}
