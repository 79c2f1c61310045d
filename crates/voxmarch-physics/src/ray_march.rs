//! Voxel ray marching through the chunked world.
//!
//! Incremental grid traversal after Amanatides & Woo, "A Fast Voxel
//! Traversal Algorithm for Ray Tracing". The cursor keeps the flat index into
//! the current chunk in step with the chunk-local coordinates, so each voxel
//! step is one add. The chunk is re-fetched only when a local coordinate
//! runs off the chunk edge.

use tracing::trace;
use voxmarch_core::constants::{
    CHUNKS_X, CHUNKS_Y, CHUNKS_Z, CHUNK_BITS, CHUNK_MASK, CHUNK_SIZE, WEIGHT_X, WEIGHT_Y,
    WEIGHT_Z,
};
use voxmarch_core::{math, Axis, ChunkPos, DVec3, WorldPos};
use voxmarch_world::{Chunk, VoxelWorld};

/// Outcome of a single march.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MarchResult {
    /// Whether a solid voxel was reached.
    pub hit: bool,
    /// Axis of the last boundary crossing.
    ///
    /// This is the caller's previous axis when the march ended before
    /// crossing any boundary.
    pub axis: Axis,
}

impl MarchResult {
    /// A hit, last crossing on `axis`.
    #[inline]
    pub const fn hit(axis: Axis) -> Self {
        Self { hit: true, axis }
    }

    /// A miss, last crossing on `axis`.
    #[inline]
    pub const fn miss(axis: Axis) -> Self {
        Self { hit: false, axis }
    }
}

/// Result of advancing the cursor one voxel along an axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Step {
    /// Still inside the current chunk.
    Inside,
    /// Crossed into a neighbouring chunk of the grid.
    EnteredChunk,
    /// Crossed past the edge of the chunk grid.
    LeftGrid,
}

/// Traversal state along one axis.
#[derive(Clone, Copy, Debug)]
struct AxisCursor {
    /// Chunk-local coordinate, `0..CHUNK_SIZE` between steps.
    local: i32,
    /// Chunk-grid coordinate.
    chunk: i32,
    /// Chunks along this axis.
    chunk_limit: i32,
    /// +1 or -1.
    step: i32,
    /// Local coordinate meaning "left the chunk".
    exit: i32,
    /// Local coordinate on entering the next chunk.
    reset: i32,
    /// Flat-index change for one step.
    index_step: isize,
    /// Flat-index correction on entering the next chunk.
    index_reset: isize,
    /// Value of `t` at the next boundary on this axis.
    boundary: f64,
    /// Change in `t` between two boundaries on this axis.
    inv_speed: f64,
}

impl AxisCursor {
    /// Set up stepping for one axis.
    ///
    /// `positive` is the sign of the caller's velocity component and `speed`
    /// the same component after normalization.
    fn new(
        start: f64,
        voxel: i32,
        positive: bool,
        speed: f64,
        weight: isize,
        chunk_limit: usize,
    ) -> Self {
        let size = CHUNK_SIZE as i32;
        let (step, exit, reset, distance) = if positive {
            (1, size, 0, f64::from(voxel) - start + 1.0)
        } else {
            (-1, -1, size - 1, start - f64::from(voxel))
        };

        let inv_speed = (1.0 / speed).abs();
        let boundary = if speed == 0.0 {
            f64::INFINITY
        } else {
            inv_speed * distance
        };

        Self {
            local: voxel & CHUNK_MASK,
            chunk: voxel >> CHUNK_BITS,
            chunk_limit: chunk_limit as i32,
            step,
            exit,
            reset,
            index_step: weight * step as isize,
            index_reset: -weight * CHUNK_SIZE as isize * step as isize,
            boundary,
            inv_speed,
        }
    }

    /// Move one voxel along this axis, keeping `index` in sync.
    #[inline]
    fn advance(&mut self, index: &mut isize) -> Step {
        self.local += self.step;
        *index += self.index_step;
        self.boundary += self.inv_speed;

        if self.local != self.exit {
            return Step::Inside;
        }

        self.local = self.reset;
        *index += self.index_reset;
        self.chunk += self.step;

        if self.chunk < 0 || self.chunk >= self.chunk_limit {
            Step::LeftGrid
        } else {
            Step::EnteredChunk
        }
    }
}

/// Pick the axis whose next boundary is nearest.
///
/// Y wins only when strictly nearest. Between X and Z, X wins only when
/// strictly nearer, so Z takes every tie.
#[inline]
fn nearest_axis(x: f64, y: f64, z: f64) -> Axis {
    if y < x && y < z {
        Axis::Y
    } else if x < z {
        Axis::X
    } else {
        Axis::Z
    }
}

#[inline]
fn is_solid_at(chunk: Option<&Chunk>, index: isize) -> bool {
    chunk.is_some_and(|chunk| chunk.kind_at_index(index as usize).is_solid())
}

/// Marches rays through a borrowed [`VoxelWorld`].
///
/// The world cannot change while a marcher exists. Any number of marchers
/// may share one world across threads.
#[derive(Clone, Copy)]
pub struct RayMarcher<'w> {
    world: &'w VoxelWorld,
}

impl<'w> RayMarcher<'w> {
    /// Create a marcher over `world`.
    pub const fn new(world: &'w VoxelWorld) -> Self {
        Self { world }
    }

    /// March from `start` along `velocity` until a solid voxel is reached,
    /// the ray leaves the world, or the travelled distance exceeds `max`.
    ///
    /// `max` is measured along the normalized velocity. The magnitude of
    /// `velocity` only matters for the same-voxel shortcut: when `start` and
    /// `start + velocity` floor to the same voxel, that voxel alone decides
    /// the result.
    ///
    /// `previous_axis` is returned unchanged unless a boundary is crossed.
    /// That covers a start outside the world, the same-voxel shortcut, and
    /// a start voxel that is already solid. Callers that only read `axis`
    /// after a hit can pass [`Axis::None`].
    ///
    /// `velocity` must be non-zero outside the same-voxel shortcut; a zero
    /// vector cannot be normalized. A zero velocity always takes the
    /// shortcut, since the end point equals the start.
    #[cfg_attr(
        feature = "profiling",
        tracing::instrument(level = "trace", skip_all)
    )]
    pub fn march(
        &self,
        start: DVec3,
        velocity: DVec3,
        max: f64,
        previous_axis: Axis,
    ) -> MarchResult {
        let mut axis = previous_axis;

        if !math::in_world(start) {
            return MarchResult::miss(axis);
        }

        let voxel = WorldPos::from(start);
        let (chunk_pos, local) = voxel.split();
        let mut chunk = self.world.chunk(chunk_pos);
        let mut index = local.to_index() as isize;

        if math::same_voxel(start, start + velocity) {
            return MarchResult {
                hit: is_solid_at(chunk, index),
                axis,
            };
        }

        let mut direction = velocity;
        math::normalize_in_place(&mut direction);

        let mut x = AxisCursor::new(
            start.x,
            voxel.x,
            velocity.x > 0.0,
            direction.x,
            WEIGHT_X,
            CHUNKS_X,
        );
        let mut y = AxisCursor::new(
            start.y,
            voxel.y,
            velocity.y > 0.0,
            direction.y,
            WEIGHT_Y,
            CHUNKS_Y,
        );
        let mut z = AxisCursor::new(
            start.z,
            voxel.z,
            velocity.z > 0.0,
            direction.z,
            WEIGHT_Z,
            CHUNKS_Z,
        );

        let mut t = 0.0;
        while t <= max {
            debug_assert_eq!(
                index,
                (y.local + x.local * WEIGHT_X as i32 + z.local * WEIGHT_Z as i32) as isize
            );

            if is_solid_at(chunk, index) {
                return MarchResult::hit(axis);
            }

            let crossed = nearest_axis(x.boundary, y.boundary, z.boundary);
            let cursor = match crossed {
                Axis::X => &mut x,
                Axis::Y => &mut y,
                Axis::Z => &mut z,
                Axis::None => unreachable!("nearest_axis always picks an axis"),
            };

            t = cursor.boundary;
            let step = cursor.advance(&mut index);
            axis = crossed;

            match step {
                Step::Inside => {}
                Step::EnteredChunk => {
                    chunk = self.world.chunk(ChunkPos::new(x.chunk, y.chunk, z.chunk));
                }
                Step::LeftGrid => {
                    trace!(?axis, t, "ray left the chunk grid");
                    return MarchResult::miss(axis);
                }
            }
        }

        MarchResult::miss(axis)
    }
}
