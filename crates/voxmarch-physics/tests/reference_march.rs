//! The incremental march must agree with a march that re-derives chunk,
//! local coordinates and flat index from absolute voxel coordinates on every
//! step.

use voxmarch_core::math::{in_world, normalize_in_place, same_voxel};
use voxmarch_core::{Axis, DVec3, VoxelKind, WorldPos};
use voxmarch_physics::{MarchResult, RayMarcher};
use voxmarch_world::VoxelWorld;

const AXES: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

/// Straightforward grid traversal reading voxels through
/// [`VoxelWorld::voxel`] with the same tie-break and `t` arithmetic.
fn reference_march(
    world: &VoxelWorld,
    start: DVec3,
    velocity: DVec3,
    max: f64,
    previous_axis: Axis,
) -> MarchResult {
    let mut axis = previous_axis;
    if !in_world(start) {
        return MarchResult::miss(axis);
    }

    let first = WorldPos::from(start);
    if same_voxel(start, start + velocity) {
        return MarchResult {
            hit: world.voxel(first).is_solid(),
            axis,
        };
    }

    let mut direction = velocity;
    normalize_in_place(&mut direction);

    let origin = start.to_array();
    let raw = velocity.to_array();
    let dir = direction.to_array();
    let mut cell = [first.x, first.y, first.z];
    let mut step = [0; 3];
    let mut inv = [0.0; 3];
    let mut boundary = [0.0; 3];

    for a in 0..3 {
        let distance = if raw[a] > 0.0 {
            step[a] = 1;
            f64::from(cell[a]) - origin[a] + 1.0
        } else {
            step[a] = -1;
            origin[a] - f64::from(cell[a])
        };
        inv[a] = (1.0 / dir[a]).abs();
        boundary[a] = if dir[a] == 0.0 {
            f64::INFINITY
        } else {
            inv[a] * distance
        };
    }

    let mut t = 0.0;
    while t <= max {
        if world
            .voxel(WorldPos::new(cell[0], cell[1], cell[2]))
            .is_solid()
        {
            return MarchResult::hit(axis);
        }

        let a = if boundary[1] < boundary[0] && boundary[1] < boundary[2] {
            1
        } else if boundary[0] < boundary[2] {
            0
        } else {
            2
        };

        cell[a] += step[a];
        t = boundary[a];
        boundary[a] += inv[a];
        axis = AXES[a];

        if !WorldPos::new(cell[0], cell[1], cell[2]).in_world() {
            return MarchResult::miss(axis);
        }
    }

    MarchResult::miss(axis)
}

/// Deterministic pseudo-random stream (SplitMix64).
struct Stream(u64);

impl Stream {
    fn next_u64(&mut self) -> u64 {
        self.0 = self.0.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.0;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }

    /// Uniform in `[0, 1)`.
    fn unit(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    fn range(&mut self, lo: f64, hi: f64) -> f64 {
        lo + (hi - lo) * self.unit()
    }

    fn below(&mut self, n: u64) -> u64 {
        self.next_u64() % n
    }
}

/// A world with solids scattered over a block of chunks, plus walls lying
/// on chunk edges.
fn scattered_world(stream: &mut Stream) -> VoxelWorld {
    let mut world = VoxelWorld::new();
    for _ in 0..3000 {
        let pos = WorldPos::new(
            stream.below(128) as i32,
            stream.below(96) as i32,
            stream.below(128) as i32,
        );
        world.set_voxel(pos, VoxelKind(1 + stream.below(8) as u8)).unwrap();
    }
    // Two partial walls: one on the last X layer of a chunk, one on the
    // last Z layer.
    for y in 0..96 {
        for z in 0..64 {
            world
                .set_voxel(WorldPos::new(31, y, z), VoxelKind::STONE)
                .unwrap();
        }
    }
    for y in 0..48 {
        for x in 64..128 {
            world
                .set_voxel(WorldPos::new(x, y, 95), VoxelKind::STONE)
                .unwrap();
        }
    }
    world
}

fn random_velocity(stream: &mut Stream) -> DVec3 {
    let component = |stream: &mut Stream| match stream.below(6) {
        0 => 0.0,
        1 => stream.range(-1.0, 1.0).round(),
        _ => stream.range(-40.0, 40.0),
    };
    loop {
        let v = DVec3::new(
            component(stream),
            component(stream),
            component(stream),
        );
        if v != DVec3::ZERO {
            return v;
        }
    }
}

fn random_start(stream: &mut Stream) -> DVec3 {
    let coord = |stream: &mut Stream, hi: f64| {
        if stream.below(5) == 0 {
            // Exactly on a voxel boundary.
            stream.range(0.0, hi).floor()
        } else {
            stream.range(0.0, hi)
        }
    };
    DVec3::new(
        coord(stream, 140.0),
        coord(stream, 100.0),
        coord(stream, 140.0),
    )
}

#[test]
fn incremental_march_matches_reference() {
    let mut stream = Stream(0x5EED_1234);
    let world = scattered_world(&mut stream);
    let marcher = RayMarcher::new(&world);

    let mut hits = 0;
    for i in 0..4000 {
        let start = random_start(&mut stream);
        let velocity = random_velocity(&mut stream);
        let max = stream.range(0.0, 250.0);
        let previous = AXES[i % 3];

        let expected = reference_march(&world, start, velocity, max, previous);
        let actual = marcher.march(start, velocity, max, previous);
        assert_eq!(
            actual, expected,
            "start {start:?} velocity {velocity:?} max {max}"
        );
        hits += usize::from(actual.hit);
    }

    // The sweep must exercise both outcomes.
    assert!(hits > 100, "only {hits} hits");
    assert!(hits < 3900, "only {} misses", 4000 - hits);
}

#[test]
fn long_rays_across_the_whole_world_match_reference() {
    let mut stream = Stream(42);
    let mut world = VoxelWorld::new();
    for _ in 0..200 {
        let pos = WorldPos::new(
            stream.below(512) as i32,
            stream.below(160) as i32,
            stream.below(512) as i32,
        );
        world.set_voxel(pos, VoxelKind::DIRT).unwrap();
    }
    let marcher = RayMarcher::new(&world);

    for _ in 0..300 {
        let start = DVec3::new(
            stream.range(0.0, 512.0),
            stream.range(0.0, 160.0),
            stream.range(0.0, 512.0),
        );
        let velocity = random_velocity(&mut stream);
        let expected = reference_march(&world, start, velocity, 2000.0, Axis::None);
        assert_eq!(
            marcher.march(start, velocity, 2000.0, Axis::None),
            expected,
            "start {start:?} velocity {velocity:?}"
        );
    }
}
