//! Model transforms uploaded to the `transform` uniform.

use glam::{Mat4, Vec3};

/// Offset applied to the spinning quad.
pub const SPIN_OFFSET: Vec3 = Vec3::new(0.5, -0.5, 0.0);

/// Translates to the lower-right quadrant, then rotates `time` radians around +Z.
pub fn spin_transform(time: f32) -> Mat4 {
    Mat4::from_translation(SPIN_OFFSET) * Mat4::from_rotation_z(time)
}

#[cfg(test)]
mod tests {
    use glam::Vec4;

    use super::*;

    fn approx_eq(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < 1e-5
    }

    #[test]
    fn test_time_zero_is_pure_translation() {
        assert_eq!(spin_transform(0.0), Mat4::from_translation(SPIN_OFFSET));
    }

    #[test]
    fn test_origin_stays_at_offset() {
        for time in [0.0, 0.5, 1.0, 10.0] {
            let origin = spin_transform(time).transform_point3(Vec3::ZERO);
            assert!(approx_eq(origin, SPIN_OFFSET));
        }
    }

    #[test]
    fn test_rotation_happens_before_translation() {
        let quarter = std::f32::consts::FRAC_PI_2;
        let moved = spin_transform(quarter).transform_point3(Vec3::X);
        assert!(approx_eq(moved, SPIN_OFFSET + Vec3::Y));
    }

    #[test]
    fn test_full_turn_returns_to_start() {
        let a = spin_transform(0.0) * Vec4::new(0.5, 0.5, 0.0, 1.0);
        let b = spin_transform(std::f32::consts::TAU) * Vec4::new(0.5, 0.5, 0.0, 1.0);
        assert!(approx_eq(a.truncate(), b.truncate()));
    }
}
