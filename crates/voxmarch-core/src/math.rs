//! Vector helpers for marching through the voxel grid.
//!
//! Points and travel vectors are plain `glam::DVec3`. It already provides
//! addition, `length` and exact componentwise `==`; this module adds the
//! few voxel-space operations built on top of them.

use crate::constants::{WORLD_SIZE_X, WORLD_SIZE_Y, WORLD_SIZE_Z};
use glam::DVec3;

/// World bounds in voxels as a float vector.
pub const WORLD_EXTENT: DVec3 = DVec3::new(
    WORLD_SIZE_X as f64,
    WORLD_SIZE_Y as f64,
    WORLD_SIZE_Z as f64,
);

/// Scale `v` by the reciprocal of its magnitude.
///
/// `v` must be non-zero. A zero vector produces non-finite components;
/// nothing here checks for it.
#[inline]
pub fn normalize_in_place(v: &mut DVec3) {
    let scale = 1.0 / v.length();
    *v *= scale;
}

/// Minimum corner of the voxel containing `p`.
#[inline]
pub fn voxel_of(p: DVec3) -> DVec3 {
    p.floor()
}

/// Whether `a` and `b` fall in the same integer voxel on all three axes.
#[inline]
pub fn same_voxel(a: DVec3, b: DVec3) -> bool {
    voxel_of(a) == voxel_of(b)
}

/// Whether `p` lies inside the world, `0 <= c < size` on every axis.
///
/// NaN components are outside.
#[inline]
pub fn in_world(p: DVec3) -> bool {
    (0.0..WORLD_EXTENT.x).contains(&p.x)
        && (0.0..WORLD_EXTENT.y).contains(&p.y)
        && (0.0..WORLD_EXTENT.z).contains(&p.z)
}
