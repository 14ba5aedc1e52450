//! CPU half of the sun-relative shading contract.
//!
//! The fragment shaders in `assets/shaders/` implement the same formulas per
//! pixel; this module is the portable reference used by gameplay systems
//! (city light dimming, sun placement) and by the tests.

use bevy::prelude::*;

use crate::config::SUN_ORBIT_RADIUS;

// terminator softness, in dot-product space
const TERMINATOR_LOW: f32 = -0.2;
const TERMINATOR_HIGH: f32 = 0.2;

const RIM_STRENGTH: f32 = 0.3;

/// Cubic Hermite interpolation clamped to [0, 1] over [edge0, edge1].
pub fn smoothstep(edge0: f32, edge1: f32, x: f32) -> f32 {
    let t = ((x - edge0) / (edge1 - edge0)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// Day-side weight for a surface point, 0 = full night, 1 = full day.
///
/// The smoothstep window turns the terminator into a soft band instead of a
/// hard cutoff.
pub fn day_night_mix(normal: Vec3, sun_direction: Vec3) -> f32 {
    let intensity = normal.dot(sun_direction.normalize());
    smoothstep(TERMINATOR_LOW, TERMINATOR_HIGH, intensity)
}

/// Night-side weight for a surface point, the complement of [`day_night_mix`].
/// Drives the city light intensity: 1 with the sun antipodal, 0 overhead.
pub fn night_factor(normal: Vec3, sun_direction: Vec3) -> f32 {
    1.0 - day_night_mix(normal, sun_direction)
}

/// Blends day and night samples for a surface point and adds the atmosphere
/// rim term. `view_direction` points from the surface toward the camera.
pub fn shade(
    normal: Vec3,
    sun_direction: Vec3,
    view_direction: Vec3,
    day_color: Vec4,
    night_color: Vec4,
    atmosphere_color: Vec3,
) -> Vec4 {
    let mix_value = day_night_mix(normal, sun_direction);
    let mut color = night_color.lerp(day_color, mix_value);

    let rim = 1.0 - normal.dot(view_direction);
    let glow = atmosphere_color * rim * rim * RIM_STRENGTH;
    color.x += glow.x;
    color.y += glow.y;
    color.z += glow.z;

    color
}

/// Sun direction for a time angle (radians), a unit vector toward a point on
/// a circle of radius 10 in the XZ plane.
pub fn sun_direction(angle: f32) -> Vec3 {
    sun_position(angle).normalize()
}

/// World position of the sun light for a time angle.
pub fn sun_position(angle: f32) -> Vec3 {
    Vec3::new(
        angle.cos() * SUN_ORBIT_RADIUS,
        0.0,
        angle.sin() * SUN_ORBIT_RADIUS,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::f32::consts::{PI, TAU};

    const DAY: Vec4 = Vec4::new(0.9, 0.8, 0.6, 1.0);
    const NIGHT: Vec4 = Vec4::new(0.05, 0.05, 0.2, 1.0);

    #[rstest]
    #[case(-1.0, 0.0)]
    #[case(-0.2, 0.0)]
    #[case(0.0, 0.5)]
    #[case(0.2, 1.0)]
    #[case(1.0, 1.0)]
    fn test_smoothstep_edges(#[case] x: f32, #[case] expected: f32) {
        assert!((smoothstep(-0.2, 0.2, x) - expected).abs() < 1e-6);
    }

    #[test]
    fn test_smoothstep_monotonic() {
        let mut previous = 0.0;
        for i in 0..=100 {
            let x = -0.2 + 0.4 * (i as f32 / 100.0);
            let value = smoothstep(-0.2, 0.2, x);
            assert!(value >= previous);
            previous = value;
        }
    }

    #[test]
    fn test_blend_stays_between_endpoints() {
        // sweep the full dot-product range; without the rim term the result
        // must stay on the night..day segment
        let normal = Vec3::X;
        for i in 0..=100 {
            let angle = PI * (i as f32 / 100.0);
            let sun = Vec3::new(angle.cos(), angle.sin(), 0.0);
            let color = shade(normal, sun, Vec3::X, DAY, NIGHT, Vec3::ZERO);
            for channel in 0..4 {
                let low = NIGHT[channel].min(DAY[channel]);
                let high = NIGHT[channel].max(DAY[channel]);
                assert!(color[channel] >= low - 1e-6 && color[channel] <= high + 1e-6);
            }
        }
    }

    #[test]
    fn test_day_side_gets_day_color() {
        let color = shade(Vec3::X, Vec3::X, Vec3::X, DAY, NIGHT, Vec3::ZERO);
        assert!(color.distance(DAY) < 1e-6);
    }

    #[test]
    fn test_night_side_gets_night_color() {
        let color = shade(Vec3::X, Vec3::NEG_X, Vec3::X, DAY, NIGHT, Vec3::ZERO);
        assert!(color.distance(NIGHT) < 1e-6);
    }

    #[test]
    fn test_rim_vanishes_facing_camera() {
        // normal aligned with the view direction gets no atmosphere boost
        let color = shade(Vec3::X, Vec3::X, Vec3::X, DAY, NIGHT, Vec3::new(0.3, 0.6, 1.0));
        assert!(color.distance(DAY) < 1e-6);
    }

    #[test]
    fn test_rim_additive_at_grazing_angle() {
        let atmosphere = Vec3::new(0.3, 0.6, 1.0);
        let color = shade(Vec3::Y, Vec3::X, Vec3::X, DAY, NIGHT, atmosphere);
        let base = shade(Vec3::Y, Vec3::X, Vec3::X, DAY, NIGHT, Vec3::ZERO);
        // rim = 1 at 90 degrees, so the boost is atmosphere * 0.3
        assert!((color.x - base.x - atmosphere.x * 0.3).abs() < 1e-6);
        assert!((color.y - base.y - atmosphere.y * 0.3).abs() < 1e-6);
        assert!((color.z - base.z - atmosphere.z * 0.3).abs() < 1e-6);
    }

    #[test]
    fn test_night_factor_full_with_sun_antipodal() {
        assert!((night_factor(Vec3::X, Vec3::NEG_X) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_night_factor_zero_with_sun_overhead() {
        assert!(night_factor(Vec3::X, Vec3::X).abs() < 1e-6);
    }

    #[test]
    fn test_night_factor_half_on_terminator() {
        assert!((night_factor(Vec3::Y, Vec3::X) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_sun_direction_at_pi_is_negative_x() {
        assert!(sun_direction(PI).distance(Vec3::NEG_X) < 1e-6);
    }

    #[test]
    fn test_sun_direction_periodic() {
        for i in 0..8 {
            let angle = TAU * (i as f32 / 8.0);
            assert!(sun_direction(angle).distance(sun_direction(angle + TAU)) < 1e-5);
        }
    }

    #[test]
    fn test_sun_direction_is_unit_length() {
        for i in 0..16 {
            let angle = TAU * (i as f32 / 16.0);
            assert!((sun_direction(angle).length() - 1.0).abs() < 1e-6);
        }
    }

    #[test]
    fn test_sun_position_radius() {
        assert!((sun_position(1.234).length() - 10.0).abs() < 1e-4);
    }
}
