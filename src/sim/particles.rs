//! Particle field for visual effects
//!
//! A bounded pool of transient entities spawned by gameplay events.
//! Particles never affect gameplay; the pool exists so renderer
//! collaborators can draw bursts without owning any simulation.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::consts::{MAX_PARTICLES, PARTICLE_GRAVITY};

/// Color palette tags for renderer lookup
pub mod colors {
    pub const RING_STANDARD: u32 = 0;
    pub const RING_POWER: u32 = 1;
    pub const DASH: u32 = 2;
    pub const LANDING: u32 = 3;
}

/// A single visual particle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Seconds remaining
    pub life: f32,
    /// Starting life, for fade ratio
    pub max_life: f32,
    pub size: f32,
    /// Palette tag for renderer lookup
    pub color: u32,
}

impl Particle {
    /// Fade ratio in [0, 1] (1 at spawn, 0 at expiry)
    #[inline]
    pub fn fade(&self) -> f32 {
        if self.max_life > 0.0 {
            (self.life / self.max_life).clamp(0.0, 1.0)
        } else {
            0.0
        }
    }
}

/// Bounded particle pool
///
/// At capacity, `spawn` recycles the oldest entry rather than
/// rejecting the new one, so late-game bursts still read on screen.
#[derive(Debug, Clone)]
pub struct ParticleField {
    particles: Vec<Particle>,
    capacity: usize,
}

impl Default for ParticleField {
    fn default() -> Self {
        Self::with_capacity(MAX_PARTICLES)
    }
}

impl ParticleField {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            particles: Vec::with_capacity(capacity),
            capacity,
        }
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Particle> {
        self.particles.iter()
    }

    /// Add a particle, recycling the oldest once at capacity
    pub fn spawn(&mut self, particle: Particle) {
        if self.particles.len() >= self.capacity {
            self.particles.remove(0);
        }
        self.particles.push(particle);
    }

    /// Integrate all particles and reap expired ones
    ///
    /// A constant downward pseudo-gravity keeps bursts feeling
    /// consistent regardless of which planet spawned them. A particle
    /// whose position stops being finite is dropped instead of
    /// spreading NaN through the pool.
    pub fn update(&mut self, dt: f32) {
        for particle in &mut self.particles {
            particle.pos += particle.vel * dt;
            particle.vel.y += PARTICLE_GRAVITY * dt;
            particle.life -= dt;
        }
        self.particles.retain(|p| {
            if !p.pos.is_finite() {
                log::warn!("dropping non-finite particle at {:?}", p.pos);
                return false;
            }
            p.life > 0.0
        });
    }

    /// Radial burst for a collected ring
    pub fn ring_burst(&mut self, pos: Vec2, color: u32, rng: &mut impl Rng) {
        for _ in 0..16 {
            let angle = rng.random_range(0.0..std::f32::consts::TAU);
            let speed = rng.random_range(60.0..180.0);
            let life = rng.random_range(0.4..0.8);
            self.spawn(Particle {
                pos,
                vel: Vec2::new(angle.cos(), angle.sin()) * speed,
                life,
                max_life: life,
                size: rng.random_range(2.0..5.0),
                color,
            });
        }
    }

    /// Small burst trailing a dash, opposite the dash direction
    pub fn dash_burst(&mut self, pos: Vec2, dir: Vec2, rng: &mut impl Rng) {
        let back = -dir.normalize_or_zero();
        for _ in 0..8 {
            let spread: f32 = rng.random_range(-0.5..0.5);
            let vel = Vec2::new(
                back.x * spread.cos() - back.y * spread.sin(),
                back.x * spread.sin() + back.y * spread.cos(),
            ) * rng.random_range(80.0..160.0);
            let life = rng.random_range(0.2..0.45);
            self.spawn(Particle {
                pos,
                vel,
                life,
                max_life: life,
                size: rng.random_range(1.5..3.5),
                color: colors::DASH,
            });
        }
    }

    /// Dust kicked up along the surface on landing
    pub fn landing_burst(&mut self, pos: Vec2, contact_angle: f32, rng: &mut impl Rng) {
        for _ in 0..12 {
            // Scatter along the surface tangent, both directions
            let side = if rng.random_bool(0.5) { 1.0 } else { -1.0 };
            let jitter = rng.random_range(-0.4..0.4);
            let angle = contact_angle + side * std::f32::consts::FRAC_PI_2 + jitter;
            let speed = rng.random_range(40.0..110.0);
            let life = rng.random_range(0.3..0.6);
            self.spawn(Particle {
                pos,
                vel: Vec2::new(angle.cos(), angle.sin()) * speed,
                life,
                max_life: life,
                size: rng.random_range(2.0..4.0),
                color: colors::LANDING,
            });
        }
    }
}
