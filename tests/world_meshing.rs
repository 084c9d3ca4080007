use cgmath::Point3;
use voxel_mesher::meshing::{is_face_visible, mesh_chunk, remesh_world};
use voxel_mesher::voxels::{
    chunk::{Chunk, SolidFill, CHUNK_DIMENSION},
    coords,
    resolver::NoNeighbors,
    voxel::{voxel_face::VoxelFace, Voxel},
    world::{World, CARDINAL_DIRECTIONS},
};
use voxel_mesher::VoxelError;

const D: i32 = CHUNK_DIMENSION;

/// A pattern that differs on each side of every chunk boundary.
fn speckled(seed: u64) -> impl Fn(Point3<i32>) -> Voxel {
    move |g: Point3<i32>| {
        let mut rng = fastrand::Rng::with_seed(
            seed ^ (g.x as u64).wrapping_mul(0x9E37_79B9)
                ^ (g.y as u64).wrapping_mul(0x85EB_CA6B)
                ^ (g.z as u64).wrapping_mul(0xC2B2_AE35),
        );
        if rng.bool() {
            Voxel::new(rng.u16(1..4))
        } else {
            Voxel::AIR
        }
    }
}

/// Local position in a chunk with `depth` along `axis` and `(u, v)` across it.
fn on_axis(axis: usize, depth: i32, u: i32, v: i32) -> Point3<i32> {
    match axis {
        0 => Point3::new(depth, u, v),
        1 => Point3::new(u, depth, v),
        _ => Point3::new(u, v, depth),
    }
}

#[test]
fn shared_faces_are_culled_symmetrically() {
    // (axis, face of the lower chunk toward the upper one, face back)
    let boundaries = [
        (0, VoxelFace::Right, VoxelFace::Left),
        (1, VoxelFace::Top, VoxelFace::Bottom),
        (2, VoxelFace::Front, VoxelFace::Back),
    ];

    for (axis, up, down) in boundaries {
        let b = Point3::new(0, 0, 0);
        let a = b - up.normal();
        let mut world = World::new();
        world.add_chunk_at(a, &speckled(7));
        world.add_chunk_at(b, &speckled(7));

        let chunk_a = world.get_chunk(a).unwrap();
        let chunk_b = world.get_chunk(b).unwrap();
        let mut checked = 0;
        for u in 0..D {
            for v in 0..D {
                let last = on_axis(axis, D - 1, u, v);
                let first = on_axis(axis, 0, u, v);
                let lower = chunk_a.get_local(last.x, last.y, last.z);
                let upper = chunk_b.get_local(first.x, first.y, first.z);

                if lower.is_solid() {
                    let visible = is_face_visible(chunk_a, &world, last, up);
                    assert_eq!(visible, upper.is_air(), "{up:?} at axis {axis} u={u} v={v}");
                    checked += 1;
                }
                if upper.is_solid() {
                    let visible = is_face_visible(chunk_b, &world, first, down);
                    assert_eq!(visible, lower.is_air(), "{down:?} at axis {axis} u={u} v={v}");
                    checked += 1;
                }
            }
        }
        assert!(checked > 0, "axis {axis} had no solid boundary voxels");
    }
}

#[test]
fn unloaded_neighbors_leave_boundaries_exposed() {
    let mut world = World::new();
    let origin = Point3::new(0, 0, 0);
    world.add_chunk_at(origin, &SolidFill(Voxel::new(1)));

    let isolated = world.remesh_chunk(origin).unwrap();
    assert_eq!(isolated.face_count(), (6 * D * D) as usize);
    assert_eq!(isolated, mesh_chunk(world.get_chunk(origin).unwrap(), &NoNeighbors));

    // Surround the chunk; every boundary face is now sealed.
    for direction in CARDINAL_DIRECTIONS {
        world.add_chunk_at(origin + direction, &SolidFill(Voxel::new(2)));
    }
    assert!(world.remesh_chunk(origin).unwrap().is_empty());

    // Removing one neighbor re-exposes exactly that side.
    world.unload(Point3::new(0, 1, 0));
    let mesh = world.remesh_chunk(origin).unwrap();
    assert_eq!(mesh.face_count(), (D * D) as usize);
    assert!(mesh.positions().iter().all(|p| p[1] == D as f32));
}

#[test]
fn air_neighbors_do_not_seal_boundaries() {
    let mut world = World::new();
    world.add_chunk_at(Point3::new(0, 0, 0), &SolidFill(Voxel::new(1)));
    world.load(Chunk::empty(Point3::new(0, 0, 1))).unwrap();
    let mesh = world.remesh_chunk(Point3::new(0, 0, 0)).unwrap();
    assert_eq!(mesh.face_count(), (6 * D * D) as usize);
}

#[test]
fn neighbor_lookups_cross_negative_boundaries() {
    let mut world = World::new();
    let mut below = Chunk::empty(Point3::new(0, -1, 0));
    below.set_local(3, D - 1, 3, Voxel::new(1));
    world.load(below).unwrap();

    let mut above = Chunk::empty(Point3::new(0, 0, 0));
    above.set_local(3, 0, 3, Voxel::new(1));
    world.load(above).unwrap();

    // Two stacked voxels across y = 0 hide the faces between them.
    let top = world.remesh_chunk(Point3::new(0, 0, 0)).unwrap();
    let bottom = world.remesh_chunk(Point3::new(0, -1, 0)).unwrap();
    assert_eq!(top.face_count(), 5);
    assert_eq!(bottom.face_count(), 5);
}

#[test]
fn duplicate_loads_are_rejected() {
    let mut world = World::new();
    let p = Point3::new(2, 2, 2);
    world.load(Chunk::empty(p)).unwrap();
    let err = world.load(Chunk::populated(p, &SolidFill(Voxel::new(1)))).unwrap_err();
    assert_eq!(err, VoxelError::ChunkAlreadyLoaded { position: p });
    assert!(world.get_chunk(p).unwrap().is_empty());
}

#[test]
fn world_and_chunk_agree_on_global_positions() {
    let mut world = World::new();
    let mut rng = fastrand::Rng::with_seed(42);
    for x in -2..2 {
        for y in -2..2 {
            for z in -2..2 {
                world.add_chunk_at(Point3::new(x, y, z), &speckled(3));
            }
        }
    }

    for _ in 0..2_000 {
        let g = Point3::new(rng.i32(-2 * D..2 * D), rng.i32(-2 * D..2 * D), rng.i32(-2 * D..2 * D));
        let (chunk_position, local) = coords::split_global(g);
        let chunk = world.get_chunk(chunk_position).unwrap();
        assert_eq!(chunk.global_position_of(local.x, local.y, local.z), g);
        assert_eq!(chunk.get_voxel_at_global(g), world.get_voxel_at_global(g));
    }
}

#[test]
fn remeshing_twice_is_identical() {
    let mut world = World::new();
    for x in 0..3 {
        world.add_chunk_at(Point3::new(x, 0, 0), &speckled(11));
    }
    assert_eq!(remesh_world(&world, 2), remesh_world(&world, 3));
}

#[test]
fn chunks_at_the_ends_of_the_i32_range_mesh_without_overflow() {
    for x in [i32::MAX / CHUNK_DIMENSION, i32::MIN / CHUNK_DIMENSION] {
        let mut world = World::new();
        let position = Point3::new(x, 0, 0);
        world.load(Chunk::populated(position, &SolidFill(Voxel::new(1)))).unwrap();
        world.add_chunk_at(Point3::new(x, 0, 1), &speckled(5));

        // The +Z side shows only where the speckled neighbor is air; the other
        // five sides, including the one facing past the end of the grid, are open.
        let neighbor = world.get_chunk(Point3::new(x, 0, 1)).unwrap();
        let uncovered = (0..D)
            .flat_map(|u| (0..D).map(move |v| (u, v)))
            .filter(|&(u, v)| neighbor.get_local(u, v, 0).is_air())
            .count();
        let mesh = world.remesh_chunk(position).unwrap();
        assert_eq!(mesh.face_count(), (5 * D * D) as usize + uncovered);
    }
}
