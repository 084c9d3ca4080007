//! # Voxel Face Module
//!
//! This module defines the six axis-aligned faces of a voxel, the order in
//! which the mesher tests and emits them, and the per-face geometry table.
//!
//! The geometry table is an external contract: renderers and tests depend
//! on the exact corner order, winding and texture coordinates below.

use cgmath::Vector3;
use num_derive::FromPrimitive;
use num_traits::FromPrimitive;

use crate::error::VoxelError;

/// Represents the six faces of a voxel.
///
/// The discriminant of each variant is its face index. Faces are tested and
/// emitted in discriminant order: [TOP, BOTTOM, LEFT, RIGHT, FRONT, BACK].
#[derive(PartialEq, Eq, Hash, Copy, Clone, Debug, FromPrimitive)]
pub enum VoxelFace {
    /// The top face (facing positive Y)
    Top = 0,

    /// The bottom face (facing negative Y)
    Bottom = 1,

    /// The left face (facing negative X)
    Left = 2,

    /// The right face (facing positive X)
    Right = 3,

    /// The front face (facing positive Z)
    Front = 4,

    /// The back face (facing negative Z)
    Back = 5,
}

/// Corner offsets from a voxel's minimum corner, in winding order, indexed
/// by face index.
const FACE_OFFSETS: [[[u8; 3]; 4]; 6] = [
    [[0, 1, 0], [0, 1, 1], [1, 1, 1], [1, 1, 0]],
    [[0, 0, 0], [1, 0, 0], [1, 0, 1], [0, 0, 1]],
    [[0, 0, 0], [0, 0, 1], [0, 1, 1], [0, 1, 0]],
    [[1, 0, 1], [1, 0, 0], [1, 1, 0], [1, 1, 1]],
    [[0, 0, 1], [1, 0, 1], [1, 1, 1], [0, 1, 1]],
    [[1, 0, 0], [0, 0, 0], [0, 1, 0], [1, 1, 0]],
];

/// Texture coordinates matching `FACE_OFFSETS` corner for corner.
const FACE_UVS: [[[f32; 2]; 4]; 6] = [
    [[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]],
    [[0.0, 0.0], [0.0, 1.0], [1.0, 1.0], [1.0, 0.0]],
    [[0.0, 0.0], [0.0, 0.0], [0.0, 1.0], [0.0, 1.0]],
    [[1.0, 0.0], [1.0, 1.0], [1.0, 1.0], [1.0, 0.0]],
    [[0.0, 1.0], [0.0, 1.0], [1.0, 1.0], [1.0, 1.0]],
    [[0.0, 0.0], [1.0, 0.0], [1.0, 0.0], [0.0, 0.0]],
];

impl VoxelFace {
    /// Returns all six faces in emission order.
    pub fn all() -> [VoxelFace; 6] {
        [
            VoxelFace::Top,
            VoxelFace::Bottom,
            VoxelFace::Left,
            VoxelFace::Right,
            VoxelFace::Front,
            VoxelFace::Back,
        ]
    }

    /// The face index, `0..6`.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// The unit step from a voxel to the neighbor this face looks at.
    pub fn normal(self) -> Vector3<i32> {
        match self {
            VoxelFace::Top => Vector3::new(0, 1, 0),
            VoxelFace::Bottom => Vector3::new(0, -1, 0),
            VoxelFace::Left => Vector3::new(-1, 0, 0),
            VoxelFace::Right => Vector3::new(1, 0, 0),
            VoxelFace::Front => Vector3::new(0, 0, 1),
            VoxelFace::Back => Vector3::new(0, 0, -1),
        }
    }

    /// The four corner offsets of this face in winding order.
    #[inline]
    pub fn corner_offsets(self) -> &'static [[u8; 3]; 4] {
        &FACE_OFFSETS[self.index()]
    }

    /// The texture coordinates of the four corners, in the same order as
    /// [`VoxelFace::corner_offsets`].
    #[inline]
    pub fn corner_uvs(self) -> &'static [[f32; 2]; 4] {
        &FACE_UVS[self.index()]
    }
}

impl TryFrom<usize> for VoxelFace {
    type Error = VoxelError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        VoxelFace::from_usize(index).ok_or(VoxelError::InvalidFaceIndex(index))
    }
}
