//! # Coordinate Conversions
//!
//! Three coordinate spaces are in play:
//!
//! * **global**: a voxel's position in the world grid, independent of chunking
//! * **chunk**: the position of a chunk, in units of `CHUNK_DIMENSION` voxels
//! * **local**: a voxel's position inside its chunk, each axis in `[0, CHUNK_DIMENSION)`
//!
//! Splitting a global position uses floor division so that chunk boundaries
//! tile seamlessly across zero: global `-1` belongs to chunk `-1` at local
//! `CHUNK_DIMENSION - 1`, and global `-CHUNK_DIMENSION` to chunk `-1` at local `0`.

use cgmath::{Point3, Vector3};

use super::chunk::CHUNK_DIMENSION;

/// Smallest chunk coordinate, on any axis, whose voxels all have an `i32`
/// global position.
pub const MIN_CHUNK_COORDINATE: i32 = i32::MIN.div_euclid(CHUNK_DIMENSION);
/// Largest chunk coordinate, on any axis, whose voxels all have an `i32`
/// global position.
pub const MAX_CHUNK_COORDINATE: i32 = i32::MAX.div_euclid(CHUNK_DIMENSION);

/// Returns the chunk coordinate of the chunk containing `global`.
#[inline]
pub fn chunk_position_of(global: Point3<i32>) -> Point3<i32> {
    Point3::new(
        global.x.div_euclid(CHUNK_DIMENSION),
        global.y.div_euclid(CHUNK_DIMENSION),
        global.z.div_euclid(CHUNK_DIMENSION),
    )
}

/// Returns the position of `global` inside its owning chunk.
#[inline]
pub fn local_position_of(global: Point3<i32>) -> Point3<i32> {
    Point3::new(
        global.x.rem_euclid(CHUNK_DIMENSION),
        global.y.rem_euclid(CHUNK_DIMENSION),
        global.z.rem_euclid(CHUNK_DIMENSION),
    )
}

/// Splits a global position into `(chunk coordinate, local position)`.
#[inline]
pub fn split_global(global: Point3<i32>) -> (Point3<i32>, Point3<i32>) {
    (chunk_position_of(global), local_position_of(global))
}

/// Recombines a chunk coordinate and a local position into a global position.
///
/// The local position is not required to lie inside the chunk, which lets
/// callers address a neighbor's voxels relative to this chunk.
#[inline]
pub fn global_position_of(chunk: Point3<i32>, local: Point3<i32>) -> Point3<i32> {
    local + chunk_origin(chunk)
}

/// Like [`global_position_of`], but returns `None` when the result does not
/// fit in `i32`. This happens when a local position just outside a chunk at
/// the edge of the chunk range steps past the end of the global grid.
pub fn checked_global_position_of(chunk: Point3<i32>, local: Point3<i32>) -> Option<Point3<i32>> {
    let axis = |c: i32, l: i32| c.checked_mul(CHUNK_DIMENSION)?.checked_add(l);
    Some(Point3::new(
        axis(chunk.x, local.x)?,
        axis(chunk.y, local.y)?,
        axis(chunk.z, local.z)?,
    ))
}

/// The global position of a chunk's `(0, 0, 0)` voxel.
#[inline]
pub fn chunk_origin(chunk: Point3<i32>) -> Vector3<i32> {
    Vector3::new(chunk.x, chunk.y, chunk.z) * CHUNK_DIMENSION
}

/// Returns `true` if every voxel of the chunk at `chunk` has an `i32` global
/// position.
#[inline]
pub fn is_chunk_in_range(chunk: Point3<i32>) -> bool {
    let range = MIN_CHUNK_COORDINATE..=MAX_CHUNK_COORDINATE;
    range.contains(&chunk.x) && range.contains(&chunk.y) && range.contains(&chunk.z)
}

/// Returns `true` if every axis of `local` lies in `[0, CHUNK_DIMENSION)`.
#[inline]
pub fn is_local_in_bounds(x: i32, y: i32, z: i32) -> bool {
    (0..CHUNK_DIMENSION).contains(&x)
        && (0..CHUNK_DIMENSION).contains(&y)
        && (0..CHUNK_DIMENSION).contains(&z)
}
