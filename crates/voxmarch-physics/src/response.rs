//! Collision response from a march result.

use voxmarch_core::{Axis, DVec3};

use crate::ray_march::MarchResult;

/// Reflect `velocity` off a face perpendicular to `axis`.
///
/// Only the component along `axis` changes sign. [`Axis::None`] leaves the
/// velocity as is.
#[inline]
pub fn reflect_velocity(velocity: DVec3, axis: Axis) -> DVec3 {
    match axis {
        Axis::None => velocity,
        Axis::X => DVec3::new(-velocity.x, velocity.y, velocity.z),
        Axis::Y => DVec3::new(velocity.x, -velocity.y, velocity.z),
        Axis::Z => DVec3::new(velocity.x, velocity.y, -velocity.z),
    }
}

impl MarchResult {
    /// Velocity after bouncing off the voxel that was hit, `None` on a miss.
    pub fn reflect(&self, velocity: DVec3) -> Option<DVec3> {
        self.hit.then(|| reflect_velocity(velocity, self.axis))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reflect_flips_one_component() {
        let v = DVec3::new(1.0, -2.0, 3.0);
        assert_eq!(reflect_velocity(v, Axis::X), DVec3::new(-1.0, -2.0, 3.0));
        assert_eq!(reflect_velocity(v, Axis::Y), DVec3::new(1.0, 2.0, 3.0));
        assert_eq!(reflect_velocity(v, Axis::Z), DVec3::new(1.0, -2.0, -3.0));
        assert_eq!(reflect_velocity(v, Axis::None), v);
    }

    #[test]
    fn reflect_twice_is_identity() {
        let v = DVec3::new(0.25, 4.0, -7.5);
        for axis in [Axis::X, Axis::Y, Axis::Z] {
            assert_eq!(reflect_velocity(reflect_velocity(v, axis), axis), v);
        }
    }

    #[test]
    fn reflect_preserves_speed_along_unit_axis() {
        let v = DVec3::new(3.0, 4.0, 12.0);
        let reflected = reflect_velocity(v, Axis::Z);
        assert_eq!(reflected.length(), v.length());
        assert_eq!(reflected.dot(Axis::Z.unit()), -v.dot(Axis::Z.unit()));
    }

    #[test]
    fn march_result_reflects_only_on_hit() {
        let v = DVec3::new(1.0, 1.0, 1.0);
        assert_eq!(
            MarchResult::hit(Axis::Y).reflect(v),
            Some(DVec3::new(1.0, -1.0, 1.0))
        );
        assert_eq!(MarchResult::miss(Axis::Y).reflect(v), None);
    }
}
