//! Voxel ray marching and collision response for voxmarch.
//!
//! [`RayMarcher`] walks a ray voxel by voxel through a [`VoxelWorld`] and
//! reports whether it reached a solid voxel, along with the axis of the last
//! boundary it crossed. [`reflect_velocity`] turns that axis into a bounce.

pub mod ray_march;
pub mod response;

pub use ray_march::{MarchResult, RayMarcher};
pub use response::reflect_velocity;

use voxmarch_core::{Axis, DVec3};
use voxmarch_world::VoxelWorld;

/// March a single ray through `world`.
///
/// Shorthand for `RayMarcher::new(world).march(..)`; see
/// [`RayMarcher::march`] for the exact contract.
pub fn ray_march(
    world: &VoxelWorld,
    start: DVec3,
    velocity: DVec3,
    max: f64,
    previous_axis: Axis,
) -> MarchResult {
    RayMarcher::new(world).march(start, velocity, max, previous_axis)
}
