//! Chunk data structure for voxel world storage.

use voxmarch_core::constants::CHUNK_SIZE_CUBED;
use voxmarch_core::{Error, LocalPos, Result, VoxelKind};

/// A single chunk of voxel data (32x32x32 voxels).
///
/// Voxels are stored flat in [`LocalPos::to_index`] order: Y fastest, then X,
/// then Z. The storage always holds exactly `CHUNK_SIZE_CUBED` entries.
#[derive(Clone, PartialEq, Eq)]
pub struct Chunk {
    kinds: Box<[VoxelKind]>,
}

impl Chunk {
    /// Create a chunk with every voxel empty.
    pub fn new() -> Self {
        Self::filled(VoxelKind::EMPTY)
    }

    /// Create a chunk with every voxel set to `kind`.
    pub fn filled(kind: VoxelKind) -> Self {
        Self {
            kinds: vec![kind; CHUNK_SIZE_CUBED].into_boxed_slice(),
        }
    }

    /// Create a chunk from voxel kinds in flat index order.
    pub fn from_kinds(kinds: Vec<VoxelKind>) -> Result<Self> {
        if kinds.len() != CHUNK_SIZE_CUBED {
            return Err(Error::InvalidData(format!(
                "expected {CHUNK_SIZE_CUBED} voxels, got {}",
                kinds.len()
            )));
        }
        Ok(Self {
            kinds: kinds.into_boxed_slice(),
        })
    }

    /// Create a chunk from one byte per voxel in flat index order.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != CHUNK_SIZE_CUBED {
            return Err(Error::InvalidData(format!(
                "expected {CHUNK_SIZE_CUBED} bytes, got {}",
                bytes.len()
            )));
        }
        let kinds: &[VoxelKind] = bytemuck::cast_slice(bytes);
        Ok(Self {
            kinds: kinds.into(),
        })
    }

    /// Raw voxel kinds as bytes, in flat index order.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.kinds[..])
    }

    /// Voxel kind at a flat index.
    ///
    /// `index` must be below `CHUNK_SIZE_CUBED`. This is the lookup used on
    /// the ray-march hot path.
    #[inline]
    pub fn kind_at_index(&self, index: usize) -> VoxelKind {
        debug_assert!(index < CHUNK_SIZE_CUBED);
        self.kinds[index]
    }

    /// Voxel kind at a local position.
    #[inline]
    pub fn get(&self, pos: LocalPos) -> VoxelKind {
        self.kinds[pos.to_index()]
    }

    /// Set the voxel kind at a local position.
    #[inline]
    pub fn set(&mut self, pos: LocalPos, kind: VoxelKind) {
        self.kinds[pos.to_index()] = kind;
    }

    /// Check if this chunk holds no solid voxels.
    pub fn is_empty(&self) -> bool {
        self.kinds.iter().all(|kind| kind.is_empty())
    }

    /// Number of solid voxels in the chunk.
    pub fn solid_count(&self) -> usize {
        self.kinds.iter().filter(|kind| kind.is_solid()).count()
    }
}

impl Default for Chunk {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Chunk {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Chunk")
            .field("solid_count", &self.solid_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_chunk_is_empty() {
        let chunk = Chunk::new();
        assert!(chunk.is_empty());
        assert_eq!(chunk.solid_count(), 0);
        assert_eq!(chunk.as_bytes().len(), CHUNK_SIZE_CUBED);
    }

    #[test]
    fn filled_chunk_is_solid() {
        let chunk = Chunk::filled(VoxelKind::STONE);
        assert!(!chunk.is_empty());
        assert_eq!(chunk.solid_count(), CHUNK_SIZE_CUBED);
    }

    #[test]
    fn set_and_get_uses_flat_layout() {
        let mut chunk = Chunk::new();
        let pos = LocalPos::new(5, 6, 7);
        chunk.set(pos, VoxelKind::DIRT);

        assert_eq!(chunk.get(pos), VoxelKind::DIRT);
        assert_eq!(chunk.kind_at_index(6 + 5 * 32 + 7 * 1024), VoxelKind::DIRT);
        assert_eq!(chunk.get(LocalPos::new(6, 5, 7)), VoxelKind::EMPTY);
        assert_eq!(chunk.solid_count(), 1);
    }

    #[test]
    fn from_bytes_roundtrip() {
        let mut bytes = vec![0u8; CHUNK_SIZE_CUBED];
        bytes[LocalPos::new(31, 0, 31).to_index()] = 9;

        let chunk = Chunk::from_bytes(&bytes).unwrap();
        assert_eq!(chunk.get(LocalPos::new(31, 0, 31)), VoxelKind(9));
        assert_eq!(chunk.as_bytes(), bytes.as_slice());
    }

    #[test]
    fn wrong_length_is_rejected() {
        let err = Chunk::from_bytes(&[1, 2, 3]).unwrap_err();
        assert!(matches!(err, Error::InvalidData(_)));

        let err = Chunk::from_kinds(vec![VoxelKind::STONE; 10]).unwrap_err();
        assert!(matches!(err, Error::InvalidData(_)));

        let chunk = Chunk::from_kinds(vec![VoxelKind::STONE; CHUNK_SIZE_CUBED]).unwrap();
        assert_eq!(chunk, Chunk::filled(VoxelKind::STONE));
    }
}
