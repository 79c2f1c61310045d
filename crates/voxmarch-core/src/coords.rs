//! Integer coordinates: voxel in world, chunk in grid, voxel in chunk.
//!
//! Three spaces are used:
//! - [`WorldPos`]: absolute voxel coordinates, `0..WORLD_SIZE_*` when inside the world
//! - [`ChunkPos`]: chunk-grid coordinates, `0..CHUNKS_*` when inside the grid
//! - [`LocalPos`]: coordinates inside one chunk, `0..CHUNK_SIZE`

use crate::constants::{
    CHUNKS_X, CHUNKS_Y, CHUNKS_Z, CHUNK_BITS, CHUNK_MASK, CHUNK_SIZE, CHUNK_SIZE_SQUARED,
    WORLD_SIZE_X, WORLD_SIZE_Y, WORLD_SIZE_Z,
};
use glam::DVec3;

/// Voxel coordinate inside one chunk, `0..CHUNK_SIZE` per axis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct LocalPos {
    pub x: u8,
    pub y: u8,
    pub z: u8,
}

impl LocalPos {
    /// Offset `(x, y, z)` inside a chunk.
    #[inline]
    pub const fn new(x: u8, y: u8, z: u8) -> Self {
        debug_assert!((x as usize) < CHUNK_SIZE);
        debug_assert!((y as usize) < CHUNK_SIZE);
        debug_assert!((z as usize) < CHUNK_SIZE);
        Self { x, y, z }
    }

    /// Convert to linear index for flat array storage.
    ///
    /// Y varies fastest, then X, then Z. The ray marcher walks this index
    /// incrementally, so the order must not change.
    #[inline]
    pub const fn to_index(self) -> usize {
        self.y as usize + (self.x as usize) * CHUNK_SIZE + (self.z as usize) * CHUNK_SIZE_SQUARED
    }

    /// Inverse of [`Self::to_index`].
    #[inline]
    pub const fn from_index(index: usize) -> Self {
        let y = (index % CHUNK_SIZE) as u8;
        let x = ((index / CHUNK_SIZE) % CHUNK_SIZE) as u8;
        let z = (index / CHUNK_SIZE_SQUARED) as u8;
        Self { x, y, z }
    }
}

/// Chunk position in chunk-grid coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ChunkPos {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl ChunkPos {
    /// Chunk at grid cell `(x, y, z)`.
    #[inline]
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Check whether this position addresses a slot of the chunk grid.
    #[inline]
    pub const fn in_grid(self) -> bool {
        self.x >= 0
            && self.y >= 0
            && self.z >= 0
            && (self.x as usize) < CHUNKS_X
            && (self.y as usize) < CHUNKS_Y
            && (self.z as usize) < CHUNKS_Z
    }

    /// Voxel at the minimum corner of this chunk.
    #[inline]
    pub const fn to_world_pos(self) -> WorldPos {
        WorldPos::new(
            self.x << CHUNK_BITS,
            self.y << CHUNK_BITS,
            self.z << CHUNK_BITS,
        )
    }
}

/// Absolute voxel coordinate in the world.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct WorldPos {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl WorldPos {
    /// Voxel at `(x, y, z)`.
    #[inline]
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Check whether this voxel lies inside the world bounds.
    #[inline]
    pub const fn in_world(self) -> bool {
        self.x >= 0
            && self.y >= 0
            && self.z >= 0
            && (self.x as usize) < WORLD_SIZE_X
            && (self.y as usize) < WORLD_SIZE_Y
            && (self.z as usize) < WORLD_SIZE_Z
    }

    /// Get the chunk containing this position (arithmetic shift)
    #[inline]
    pub const fn chunk_pos(self) -> ChunkPos {
        ChunkPos::new(
            self.x >> CHUNK_BITS,
            self.y >> CHUNK_BITS,
            self.z >> CHUNK_BITS,
        )
    }

    /// Get the local position within the chunk (bit mask)
    #[inline]
    pub const fn local_pos(self) -> LocalPos {
        LocalPos::new(
            (self.x & CHUNK_MASK) as u8,
            (self.y & CHUNK_MASK) as u8,
            (self.z & CHUNK_MASK) as u8,
        )
    }

    /// Split into chunk and local position using shift and mask.
    #[inline]
    pub const fn split(self) -> (ChunkPos, LocalPos) {
        (self.chunk_pos(), self.local_pos())
    }

    /// Split into chunk and local position using division and remainder.
    ///
    /// Slower reference path for [`WorldPos::split`]; both agree for every
    /// position because `CHUNK_SIZE` is a power of two.
    #[inline]
    pub const fn split_div(self) -> (ChunkPos, LocalPos) {
        let size = CHUNK_SIZE as i32;
        (
            ChunkPos::new(
                self.x.div_euclid(size),
                self.y.div_euclid(size),
                self.z.div_euclid(size),
            ),
            LocalPos::new(
                self.x.rem_euclid(size) as u8,
                self.y.rem_euclid(size) as u8,
                self.z.rem_euclid(size) as u8,
            ),
        )
    }

    /// Reassemble from a chunk coordinate and an offset inside it.
    #[inline]
    pub const fn from_chunk_local(chunk: ChunkPos, local: LocalPos) -> Self {
        Self::new(
            (chunk.x << CHUNK_BITS) + local.x as i32,
            (chunk.y << CHUNK_BITS) + local.y as i32,
            (chunk.z << CHUNK_BITS) + local.z as i32,
        )
    }
}

impl From<DVec3> for WorldPos {
    fn from(v: DVec3) -> Self {
        Self::new(v.x.floor() as i32, v.y.floor() as i32, v.z.floor() as i32)
    }
}
