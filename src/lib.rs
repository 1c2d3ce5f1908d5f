//! Orbit Hop - an orbital gravity-jump arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (orbital physics, collisions, combo scoring)
//! - `tuning`: Data-driven game balance

pub mod sim;
pub mod tuning;

pub use tuning::Tuning;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (120 Hz for smooth physics)
    pub const SIM_DT: f32 = 1.0 / 120.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Default world dimensions (screen-space, y grows downward)
    pub const WORLD_WIDTH: f32 = 800.0;
    pub const WORLD_HEIGHT: f32 = 600.0;
    /// How far past the world rect the player may fly before the run ends
    pub const OUT_OF_BOUNDS_MARGIN: f32 = 100.0;

    /// Player defaults
    pub const PLAYER_RADIUS: f32 = 10.0;
    /// Gap between a planet's surface and the orbiting player
    pub const ORBIT_MARGIN: f32 = 2.0;

    /// Ring annulus dimensions
    pub const RING_OUTER_RADIUS: f32 = 25.0;
    pub const RING_INNER_RADIUS: f32 = 15.0;
    /// Minimum gap between a ring and any planet surface
    pub const RING_CLEARANCE: f32 = 50.0;

    /// Trail defaults
    pub const TRAIL_LENGTH: usize = 24;
    /// Trail sample life lost per second
    pub const TRAIL_DECAY: f32 = 2.0;

    /// Particle pool
    pub const MAX_PARTICLES: usize = 2048;
    /// Constant downward pseudo-gravity on particles (px/s²)
    pub const PARTICLE_GRAVITY: f32 = 200.0;

    /// Below this distance, gravity sources contribute nothing (divide-by-zero guard)
    pub const EPSILON: f32 = 1e-4;
}

/// Normalized angle to [-π, π)
#[inline]
pub fn normalize_angle(mut angle: f32) -> f32 {
    use std::f32::consts::PI;
    while angle >= PI {
        angle -= 2.0 * PI;
    }
    while angle < -PI {
        angle += 2.0 * PI;
    }
    angle
}

/// Convert polar (r, theta) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f32, theta: f32) -> Vec2 {
    Vec2::new(r * theta.cos(), r * theta.sin())
}

/// Convert cartesian (x, y) to polar (r, theta)
#[inline]
pub fn cartesian_to_polar(pos: Vec2) -> (f32, f32) {
    (pos.length(), pos.y.atan2(pos.x))
}
