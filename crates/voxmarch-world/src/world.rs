//! Dense chunk-slot grid covering the whole world.

use tracing::{debug, trace};
use voxmarch_core::constants::{CHUNKS_X, CHUNKS_Y, CHUNKS_Z, CHUNK_COUNT};
use voxmarch_core::{ChunkPos, Error, Result, VoxelKind, WorldPos};

use crate::chunk::Chunk;

/// The voxel world: a 16x5x16 grid of optional chunks.
///
/// An absent slot is an all-empty region and costs no voxel storage. A chunk
/// position outside the grid is not an absent slot; the checked accessors
/// reject it and the ray marcher stops there.
///
/// The world is populated up front and only read while rays are marched.
/// Shared references are `Sync`, so concurrent read-only marches are fine.
pub struct VoxelWorld {
    /// Chunk slots indexed by [`VoxelWorld::slot_index`].
    slots: Vec<Option<Chunk>>,
}

impl VoxelWorld {
    /// Create a world with every chunk slot absent.
    pub fn new() -> Self {
        Self {
            slots: std::iter::repeat_with(|| None).take(CHUNK_COUNT).collect(),
        }
    }

    /// Slot index for an in-grid chunk position.
    #[inline]
    const fn slot_index(pos: ChunkPos) -> usize {
        (pos.x as usize * CHUNKS_Y + pos.y as usize) * CHUNKS_Z + pos.z as usize
    }

    /// Chunk position for a slot index.
    const fn slot_pos(index: usize) -> ChunkPos {
        ChunkPos::new(
            (index / (CHUNKS_Y * CHUNKS_Z)) as i32,
            ((index / CHUNKS_Z) % CHUNKS_Y) as i32,
            (index % CHUNKS_Z) as i32,
        )
    }

    /// Check whether a world voxel position lies inside the world.
    #[inline]
    pub const fn in_bounds(pos: WorldPos) -> bool {
        pos.in_world()
    }

    /// Chunk at an in-grid position, `None` if the slot is absent.
    ///
    /// `pos` must satisfy `0 <= x < 16`, `0 <= y < 5`, `0 <= z < 16`.
    #[inline]
    pub fn chunk(&self, pos: ChunkPos) -> Option<&Chunk> {
        debug_assert!(pos.in_grid(), "chunk position {pos:?} outside grid");
        self.slots[Self::slot_index(pos)].as_ref()
    }

    /// Checked variant of [`VoxelWorld::chunk`].
    pub fn try_chunk(&self, pos: ChunkPos) -> Result<Option<&Chunk>> {
        Self::check_grid(pos)?;
        Ok(self.chunk(pos))
    }

    /// Check if an in-grid slot holds a chunk.
    pub fn contains_chunk(&self, pos: ChunkPos) -> bool {
        pos.in_grid() && self.chunk(pos).is_some()
    }

    /// Insert or replace the chunk at `pos`, returning the previous one.
    pub fn insert_chunk(&mut self, pos: ChunkPos, chunk: Chunk) -> Result<Option<Chunk>> {
        Self::check_grid(pos)?;
        debug!(
            x = pos.x,
            y = pos.y,
            z = pos.z,
            solid = chunk.solid_count(),
            "chunk inserted"
        );
        Ok(self.slots[Self::slot_index(pos)].replace(chunk))
    }

    /// Remove the chunk at `pos`, leaving the slot absent.
    pub fn remove_chunk(&mut self, pos: ChunkPos) -> Result<Option<Chunk>> {
        Self::check_grid(pos)?;
        let removed = self.slots[Self::slot_index(pos)].take();
        if removed.is_some() {
            debug!(x = pos.x, y = pos.y, z = pos.z, "chunk removed");
        }
        Ok(removed)
    }

    /// Voxel kind at an in-world position.
    ///
    /// Chunk and local coordinates come from shift and mask. An absent chunk
    /// reads as empty without touching voxel storage.
    #[inline]
    pub fn voxel(&self, pos: WorldPos) -> VoxelKind {
        debug_assert!(pos.in_world(), "voxel position {pos:?} outside world");
        let (chunk_pos, local) = pos.split();
        match self.chunk(chunk_pos) {
            Some(chunk) => chunk.get(local),
            None => VoxelKind::EMPTY,
        }
    }

    /// Checked variant of [`VoxelWorld::voxel`].
    pub fn get_voxel(&self, pos: WorldPos) -> Result<VoxelKind> {
        Self::check_world(pos)?;
        Ok(self.voxel(pos))
    }

    /// Set the voxel kind at `pos`.
    ///
    /// The first solid write into an absent slot allocates its chunk. Writing
    /// empty into an absent slot is a no-op.
    pub fn set_voxel(&mut self, pos: WorldPos, kind: VoxelKind) -> Result<()> {
        Self::check_world(pos)?;
        let (chunk_pos, local) = pos.split();
        let slot = &mut self.slots[Self::slot_index(chunk_pos)];
        if slot.is_none() {
            if kind.is_empty() {
                return Ok(());
            }
            trace!(
                x = chunk_pos.x,
                y = chunk_pos.y,
                z = chunk_pos.z,
                "allocating chunk for voxel write"
            );
        }
        slot.get_or_insert_with(Chunk::new).set(local, kind);
        Ok(())
    }

    /// Iterate over occupied slots.
    pub fn loaded_chunks(&self) -> impl Iterator<Item = (ChunkPos, &Chunk)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(index, slot)| slot.as_ref().map(|chunk| (Self::slot_pos(index), chunk)))
    }

    /// Number of occupied slots.
    pub fn chunk_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    fn check_grid(pos: ChunkPos) -> Result<()> {
        if pos.in_grid() {
            Ok(())
        } else {
            Err(Error::OutOfBounds(format!(
                "chunk ({}, {}, {}) outside {CHUNKS_X}x{CHUNKS_Y}x{CHUNKS_Z} grid",
                pos.x, pos.y, pos.z
            )))
        }
    }

    fn check_world(pos: WorldPos) -> Result<()> {
        if pos.in_world() {
            Ok(())
        } else {
            Err(Error::OutOfBounds(format!(
                "voxel ({}, {}, {}) outside world",
                pos.x, pos.y, pos.z
            )))
        }
    }
}

impl Default for VoxelWorld {
    fn default() -> Self {
        Self::new()
    }
}
