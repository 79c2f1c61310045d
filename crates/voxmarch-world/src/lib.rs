//! Chunked sparse voxel world for voxmarch.
//!
//! The world is a fixed 16x5x16 grid of chunk slots. A slot either owns a
//! [`Chunk`] of 32x32x32 voxels or is absent, which means every voxel in that
//! region is empty.

pub mod chunk;
pub mod world;

pub use chunk::Chunk;
pub use world::VoxelWorld;
