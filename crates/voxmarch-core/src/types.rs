//! Core voxel types.

use bytemuck::{Pod, Zeroable};
use glam::DVec3;

/// Material kind of a single voxel.
///
/// Kind 0 is reserved for empty space; every other value is solid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
#[repr(transparent)]
pub struct VoxelKind(pub u8);

impl VoxelKind {
    /// Empty space
    pub const EMPTY: Self = Self(0);
    /// Stone
    pub const STONE: Self = Self(1);
    /// Dirt
    pub const DIRT: Self = Self(2);

    /// Returns true if this voxel is empty
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns true if this voxel is solid (not empty)
    #[inline]
    pub const fn is_solid(self) -> bool {
        self.0 != 0
    }
}

/// Axis of a voxel-boundary crossing.
///
/// Downstream physics uses it to pick the velocity component to reflect.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Axis {
    /// No crossing recorded.
    #[default]
    None,
    X,
    Y,
    Z,
}

impl Axis {
    /// Unit vector along this axis, zero for [`Axis::None`].
    #[inline]
    pub const fn unit(self) -> DVec3 {
        match self {
            Self::None => DVec3::ZERO,
            Self::X => DVec3::X,
            Self::Y => DVec3::Y,
            Self::Z => DVec3::Z,
        }
    }
}
