//! Core types, math, and constants for the voxmarch voxel world.
//!
//! This crate provides the foundational types used by the world and the
//! ray marcher:
//! - Voxel kinds and crossing axes
//! - Coordinate systems (world, chunk, local)
//! - Vector helpers on top of `glam::DVec3`
//! - The error type for world editing

pub mod coords;
pub mod error;
pub mod math;
pub mod types;

pub use coords::{ChunkPos, LocalPos, WorldPos};
pub use error::{Error, Result};
pub use glam::DVec3;
pub use types::{Axis, VoxelKind};

/// World-wide constants.
///
/// The world has a fixed size. Every dimension is a compile-time constant and
/// the chunk grid tiles the voxel bounds exactly.
pub mod constants {
    /// Size of a chunk in voxels per axis
    pub const CHUNK_SIZE: usize = 32;
    /// Voxels in one Y/X layer of a chunk (32^2)
    pub const CHUNK_SIZE_SQUARED: usize = CHUNK_SIZE * CHUNK_SIZE;
    /// Total voxels in a chunk (32^3)
    pub const CHUNK_SIZE_CUBED: usize = CHUNK_SIZE * CHUNK_SIZE * CHUNK_SIZE;
    /// Bits needed to represent position within a chunk (5 bits for 0-31)
    pub const CHUNK_BITS: u32 = 5;
    /// Mask extracting the chunk-local part of a world coordinate
    pub const CHUNK_MASK: i32 = (CHUNK_SIZE - 1) as i32;

    /// Number of chunks along X
    pub const CHUNKS_X: usize = 16;
    /// Number of chunks along Y (the short, vertical axis)
    pub const CHUNKS_Y: usize = 5;
    /// Number of chunks along Z
    pub const CHUNKS_Z: usize = 16;
    /// Total chunk slots in the world grid
    pub const CHUNK_COUNT: usize = CHUNKS_X * CHUNKS_Y * CHUNKS_Z;

    /// World size in voxels along X
    pub const WORLD_SIZE_X: usize = 512;
    /// World size in voxels along Y
    pub const WORLD_SIZE_Y: usize = 160;
    /// World size in voxels along Z
    pub const WORLD_SIZE_Z: usize = 512;

    /// Flat-index weight of one step along Y inside a chunk
    pub const WEIGHT_Y: isize = 1;
    /// Flat-index weight of one step along X inside a chunk
    pub const WEIGHT_X: isize = CHUNK_SIZE as isize;
    /// Flat-index weight of one step along Z inside a chunk
    pub const WEIGHT_Z: isize = CHUNK_SIZE_SQUARED as isize;

    // Shift/mask addressing is only equivalent to div/mod for a power of two.
    const _: () = assert!(CHUNK_SIZE.is_power_of_two());
    const _: () = assert!(1 << CHUNK_BITS == CHUNK_SIZE);
    const _: () = assert!(CHUNKS_X * CHUNK_SIZE == WORLD_SIZE_X);
    const _: () = assert!(CHUNKS_Y * CHUNK_SIZE == WORLD_SIZE_Y);
    const _: () = assert!(CHUNKS_Z * CHUNK_SIZE == WORLD_SIZE_Z);
}
