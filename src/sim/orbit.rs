//! Orbital geometry and gravity
//!
//! Pure functions, no state. Gravity uses an inverse-distance falloff
//! scaled by body radius (larger planets pull harder), which reads much
//! better at arcade scale than true inverse-square.

use glam::Vec2;

use crate::consts::EPSILON;
use crate::polar_to_cartesian;

/// Distance between two points
#[inline]
pub fn distance(a: Vec2, b: Vec2) -> f32 {
    (a - b).length()
}

/// Gravitational acceleration on a point from a body at `center`
///
/// Magnitude is `strength * body_radius / distance`. Returns zero when
/// the point coincides with the body center so the integrator never
/// sees NaN.
pub fn gravity(pos: Vec2, center: Vec2, body_radius: f32, strength: f32) -> Vec2 {
    let delta = center - pos;
    let dist = delta.length();
    if dist < EPSILON {
        return Vec2::ZERO;
    }
    let magnitude = strength * body_radius / dist;
    delta / dist * magnitude
}

/// Point on the circle of `radius` around `center` at `angle`
#[inline]
pub fn orbit_position(center: Vec2, angle: f32, radius: f32) -> Vec2 {
    center + polar_to_cartesian(radius, angle)
}

/// Velocity tangent to an orbit circle
///
/// Perpendicular to the radial direction, signed by `angular_speed`, so
/// a launch inherits spin-consistent momentum from the planet.
#[inline]
pub fn tangent_velocity(angle: f32, angular_speed: f32, radius: f32) -> Vec2 {
    Vec2::new(-angle.sin(), angle.cos()) * angular_speed * radius
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, PI};

    #[test]
    fn test_gravity_points_toward_body() {
        let force = gravity(Vec2::new(200.0, 0.0), Vec2::ZERO, 50.0, 900.0);
        assert!(force.x < 0.0);
        assert!(force.y.abs() < 1e-3);
    }

    #[test]
    fn test_gravity_scales_with_body_radius() {
        let pos = Vec2::new(150.0, 100.0);
        let small = gravity(pos, Vec2::ZERO, 40.0, 900.0).length();
        let large = gravity(pos, Vec2::ZERO, 80.0, 900.0).length();
        assert!(large > small);
        assert!((large / small - 2.0).abs() < 1e-3);
    }

    #[test]
    fn test_gravity_zero_at_center() {
        let force = gravity(Vec2::new(5.0, 5.0), Vec2::new(5.0, 5.0), 50.0, 900.0);
        assert_eq!(force, Vec2::ZERO);
    }

    #[test]
    fn test_orbit_position_on_circle() {
        let center = Vec2::new(100.0, 50.0);
        let pos = orbit_position(center, FRAC_PI_2, 80.0);
        assert!((distance(pos, center) - 80.0).abs() < 1e-3);
        assert!((pos.x - 100.0).abs() < 1e-3);
        assert!((pos.y - 130.0).abs() < 1e-3);
    }

    #[test]
    fn test_tangent_perpendicular_to_radial() {
        let angle: f32 = 0.7;
        let radial = Vec2::new(angle.cos(), angle.sin());
        let tangent = tangent_velocity(angle, 1.5, 90.0);
        assert!(radial.dot(tangent).abs() < 1e-3);
        assert!((tangent.length() - 1.5 * 90.0).abs() < 1e-3);
    }

    #[test]
    fn test_tangent_sign_follows_spin() {
        // At angle 0 the orbit point is to the planet's right; positive
        // spin moves it in +y, negative in -y.
        let ccw = tangent_velocity(0.0, 1.0, 50.0);
        let cw = tangent_velocity(0.0, -1.0, 50.0);
        assert!(ccw.y > 0.0);
        assert!(cw.y < 0.0);
    }

    proptest::proptest! {
        #[test]
        fn prop_gravity_always_finite(
            px in -2000.0f32..2000.0,
            py in -2000.0f32..2000.0,
            bx in -2000.0f32..2000.0,
            by in -2000.0f32..2000.0,
            radius in 1.0f32..200.0,
        ) {
            let force = gravity(Vec2::new(px, py), Vec2::new(bx, by), radius, 900.0);
            proptest::prop_assert!(force.x.is_finite());
            proptest::prop_assert!(force.y.is_finite());
        }

        #[test]
        fn prop_orbit_position_distance(angle in -PI..PI, radius in 1.0f32..500.0) {
            let center = Vec2::new(100.0, -40.0);
            let pos = orbit_position(center, angle, radius);
            proptest::prop_assert!((distance(pos, center) - radius).abs() < radius * 1e-4 + 1e-3);
        }
    }
}
