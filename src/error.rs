//! # Error Types
//!
//! Recoverable failures of the voxel world and mesh buffer APIs.
//!
//! Out-of-range local voxel access is not represented here: it is a
//! programming error and panics. Lookups that land in unloaded space are
//! not errors either, they resolve to `None`.

use cgmath::Point3;
use thiserror::Error;

/// Errors that can occur while managing chunks or building meshes.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VoxelError {
    /// A chunk was loaded at a chunk coordinate that is already occupied.
    #[error("a chunk is already loaded at chunk coordinate {position:?}")]
    ChunkAlreadyLoaded {
        /// The occupied chunk coordinate.
        position: Point3<i32>,
    },

    /// A face index outside `0..6` was supplied.
    #[error("invalid face index {0}, expected a value in 0..6")]
    InvalidFaceIndex(usize),
}

/// Convenience alias for results produced by this crate.
pub type Result<T> = std::result::Result<T, VoxelError>;
