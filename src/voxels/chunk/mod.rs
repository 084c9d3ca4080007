//! # Chunk Module
//!
//! This module provides the `Chunk` struct: a fixed-size, dense 16x16x16 grid
//! of voxels located at an integer chunk coordinate.
//!
//! ## Storage
//!
//! A chunk keeps two views of the same data in sync:
//! - `voxels`: one `Voxel` per cell, the authoritative material codes
//! - `solid_array`: a bit vector (1 bit per cell) marking non-air cells
//!
//! Cells are laid out x-major (`x * CHUNK_PLANE_SIZE + y * CHUNK_DIMENSION + z`),
//! so walking the bit vector in order visits cells x outer, y middle, z inner.
//! That is the order the mesher emits geometry in.
//!
//! ### Performance Characteristics
//! - **Voxel Lookup**: O(1)
//! - **Solidity Check**: O(1), a single bit read
//! - **Solid Iteration**: skips runs of air without touching `voxels`
//!
//! A chunk holds no reference to the world that owns it. Anything that needs
//! neighboring chunks receives a resolver explicitly.

use bitvec::prelude::BitVec;
use cgmath::Point3;

use super::coords;
use super::voxel::Voxel;

pub mod chunk_iteration;
pub mod chunk_population;

pub use chunk_iteration::SolidVoxelIterator;
pub use chunk_population::{CheckerboardFill, ChunkPopulator, EmptyFill, SolidFill};

/// The dimension (width, height, depth) of a chunk in voxels.
pub const CHUNK_DIMENSION: i32 = 16;
/// The number of voxels in a single 2D plane of a chunk (CHUNK_DIMENSION²).
pub const CHUNK_PLANE_SIZE: i32 = CHUNK_DIMENSION * CHUNK_DIMENSION;
/// The total number of voxels in a chunk (CHUNK_DIMENSION³).
pub const CHUNK_VOLUME: usize = (CHUNK_PLANE_SIZE * CHUNK_DIMENSION) as usize;

/// A 16x16x16 grid of voxels at a fixed chunk coordinate.
#[derive(Clone, Debug)]
pub struct Chunk {
    /// The position of this chunk in chunk coordinates (not voxel coordinates).
    position: Point3<i32>,

    /// Material codes for every cell, x-major.
    voxels: Box<[Voxel]>,

    /// One bit per cell, set when the cell is solid. Same indexing as `voxels`.
    solid_array: BitVec,
}

impl Chunk {
    /// Creates a new, completely empty chunk (all voxels are air).
    ///
    /// # Arguments
    /// * `position` - The chunk coordinates of the new chunk
    ///
    /// # Panics
    /// Panics if some voxel of the chunk would have a global position outside
    /// the `i32` range (see [`coords::is_chunk_in_range`]).
    pub fn empty(position: Point3<i32>) -> Self {
        assert!(
            coords::is_chunk_in_range(position),
            "chunk coordinate {position:?} is outside the addressable world"
        );
        Chunk {
            position,
            voxels: vec![Voxel::AIR; CHUNK_VOLUME].into_boxed_slice(),
            solid_array: BitVec::repeat(false, CHUNK_VOLUME),
        }
    }

    /// Creates a chunk at `position` and fills it with `populator`.
    ///
    /// # Examples
    ///
    /// ```
    /// use cgmath::Point3;
    /// use voxel_mesher::voxels::{chunk::{Chunk, SolidFill}, voxel::Voxel};
    ///
    /// let chunk = Chunk::populated(Point3::new(0, -1, 0), &SolidFill(Voxel::new(3)));
    /// assert!(!chunk.is_empty());
    /// ```
    pub fn populated<P: ChunkPopulator + ?Sized>(position: Point3<i32>, populator: &P) -> Self {
        let mut chunk = Chunk::empty(position);
        populator.populate(&mut chunk);
        chunk
    }

    /// The chunk coordinate of this chunk.
    #[inline]
    pub fn position(&self) -> Point3<i32> {
        self.position
    }

    /// Read-only access to the voxel grid, x-major.
    ///
    /// Use [`Chunk::index_of`] to locate a cell.
    #[inline]
    pub fn voxels(&self) -> &[Voxel] {
        &self.voxels
    }

    /// Returns the grid index of the in-range local coordinate `(x, y, z)`.
    ///
    /// # Panics
    /// Panics if any axis lies outside `[0, CHUNK_DIMENSION)`.
    #[inline]
    pub fn index_of(x: i32, y: i32, z: i32) -> usize {
        assert!(
            coords::is_local_in_bounds(x, y, z),
            "local voxel coordinate ({x}, {y}, {z}) is outside the chunk"
        );
        (x * CHUNK_PLANE_SIZE + y * CHUNK_DIMENSION + z) as usize
    }

    /// Inverse of [`Chunk::index_of`].
    ///
    /// # Panics
    /// Panics if `index` is not below [`CHUNK_VOLUME`].
    #[inline]
    pub fn local_of_index(index: usize) -> Point3<i32> {
        assert!(
            index < CHUNK_VOLUME,
            "voxel index {index} is outside the chunk"
        );
        let index = index as i32;
        Point3::new(
            index / CHUNK_PLANE_SIZE,
            (index / CHUNK_DIMENSION) % CHUNK_DIMENSION,
            index % CHUNK_DIMENSION,
        )
    }

    /// Gets the voxel at the specified chunk-relative coordinates.
    ///
    /// # Panics
    /// Panics if the coordinates are out of bounds. Coordinates are never clamped.
    #[inline]
    pub fn get_local(&self, x: i32, y: i32, z: i32) -> Voxel {
        self.voxels[Self::index_of(x, y, z)]
    }

    /// Replaces the voxel at the specified chunk-relative coordinates.
    ///
    /// # Panics
    /// Panics if the coordinates are out of bounds.
    pub fn set_local(&mut self, x: i32, y: i32, z: i32, voxel: Voxel) {
        let index = Self::index_of(x, y, z);
        self.voxels[index] = voxel;
        self.solid_array.set(index, voxel.is_solid());
    }

    /// Checks whether the local coordinate holds no solid information.
    ///
    /// Returns `true` if the cell is air, or if the coordinate lies outside the
    /// chunk. Callers that step across the boundary must resolve the neighbor
    /// through the world instead.
    #[inline]
    pub fn is_air_local(&self, x: i32, y: i32, z: i32) -> bool {
        !coords::is_local_in_bounds(x, y, z) || !self.solid_array[Self::index_of(x, y, z)]
    }

    /// Converts a chunk-relative coordinate to a global voxel position.
    ///
    /// The coordinate may lie outside the chunk; the result then addresses a
    /// voxel of a neighboring chunk. For chunks at the edge of the world use
    /// [`Chunk::checked_global_position_of`], since the neighbor may not exist.
    #[inline]
    pub fn global_position_of(&self, x: i32, y: i32, z: i32) -> Point3<i32> {
        coords::global_position_of(self.position, Point3::new(x, y, z))
    }

    /// Converts a chunk-relative coordinate to a global voxel position, or
    /// `None` if that position lies past the end of the `i32` grid.
    #[inline]
    pub fn checked_global_position_of(&self, x: i32, y: i32, z: i32) -> Option<Point3<i32>> {
        coords::checked_global_position_of(self.position, Point3::new(x, y, z))
    }

    /// Converts a global voxel position to this chunk's local space.
    ///
    /// Returns `None` if the position belongs to another chunk.
    pub fn local_position_of(&self, global: Point3<i32>) -> Option<Point3<i32>> {
        let origin = self.world_origin();
        let local = Point3::new(
            global.x.checked_sub(origin.x)?,
            global.y.checked_sub(origin.y)?,
            global.z.checked_sub(origin.z)?,
        );
        coords::is_local_in_bounds(local.x, local.y, local.z).then_some(local)
    }

    /// Looks up a voxel by global position, if it lies inside this chunk.
    pub fn get_voxel_at_global(&self, global: Point3<i32>) -> Option<Voxel> {
        self.local_position_of(global)
            .map(|local| self.get_local(local.x, local.y, local.z))
    }

    /// The global position of this chunk's `(0, 0, 0)` voxel.
    ///
    /// Renderers translate this chunk's mesh by this offset.
    pub fn world_origin(&self) -> Point3<i32> {
        self.global_position_of(0, 0, 0)
    }

    /// The minimum and maximum voxel positions of this chunk in global voxel
    /// space, both inclusive.
    pub fn world_bounds(&self) -> (Point3<i32>, Point3<i32>) {
        let last = CHUNK_DIMENSION - 1;
        (self.world_origin(), self.global_position_of(last, last, last))
    }

    /// The number of solid voxels in this chunk.
    pub fn solid_count(&self) -> usize {
        self.solid_array.count_ones()
    }

    /// Returns `true` if every voxel is air.
    pub fn is_empty(&self) -> bool {
        self.solid_array.not_any()
    }

    /// Iterates the solid voxels of this chunk, x outer, y middle, z inner.
    pub fn solid_voxels(&self) -> SolidVoxelIterator<'_> {
        SolidVoxelIterator::new(self)
    }

    pub(crate) fn solid_array(&self) -> &BitVec {
        &self.solid_array
    }
}
