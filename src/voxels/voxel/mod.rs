//! # Voxel Module
//!
//! This module defines the atomic unit of volume data and the six faces a
//! voxel exposes to the mesher.

pub mod voxel_face;

/// The underlying integer type used to store a voxel's material code.
pub type VoxelTypeSize = u16;

/// Represents a single voxel cell in the world.
///
/// A voxel carries nothing but its material code. A code of `0` is the
/// reserved empty ("air") sentinel; every other value denotes a distinct
/// solid material. Voxels are replaced wholesale, never partially mutated.
///
/// # Memory Layout
/// The `#[repr(C)]` attribute keeps the layout stable so chunk grids can be
/// handed to GPU or overlay consumers as raw bytes.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Voxel {
    /// The material code of this voxel, `0` for air.
    pub type_id: VoxelTypeSize,
}

impl Voxel {
    /// The empty voxel.
    pub const AIR: Voxel = Voxel { type_id: 0 };

    /// Creates a voxel with the given material code.
    pub const fn new(type_id: VoxelTypeSize) -> Self {
        Voxel { type_id }
    }

    /// Returns `true` if this voxel is the empty sentinel.
    #[inline]
    pub const fn is_air(self) -> bool {
        self.type_id == 0
    }

    /// Returns `true` if this voxel occupies space.
    #[inline]
    pub const fn is_solid(self) -> bool {
        self.type_id != 0
    }
}
