//! Game state and core simulation types
//!
//! Everything that must be serialized for determinism checks lives
//! here. Caches (trail, particles, per-tick events) are rebuilt by the
//! sim and skipped.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::combo::ComboState;
use super::orbit::{orbit_position, tangent_velocity};
use super::particles::ParticleField;
use super::worldgen;
use crate::consts::*;
use crate::tuning::Tuning;

/// Current phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Run ended (player flew out of the world)
    GameOver,
}

/// A planet the player can orbit
///
/// Immutable after world generation except `rotation_phase`, which
/// advances every frame.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Planet {
    pub pos: Vec2,
    pub radius: f32,
    /// Spin in radians per second; sign sets the orbit direction
    pub rotation_speed: f32,
    /// Accumulated spin, for renderers drawing surface features
    pub rotation_phase: f32,
    /// Palette index for renderer collaborators
    pub color: u32,
}

impl Planet {
    /// Orbit radius for a player of the given size
    #[inline]
    pub fn orbit_radius(&self, player_radius: f32) -> f32 {
        self.radius + player_radius + ORBIT_MARGIN
    }
}

/// Ring collectible kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RingKind {
    #[default]
    Standard,
    /// Double value, rare
    Power,
}

/// A collectible ring (annulus)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ring {
    pub pos: Vec2,
    pub outer_radius: f32,
    pub inner_radius: f32,
    /// Monotonic false→true until the round's rings are replaced
    pub collected: bool,
    pub kind: RingKind,
}

/// Trail sample for player rendering (newest first)
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TrailPoint {
    pub pos: Vec2,
    /// 1.0 at spawn, decays to 0
    pub life: f32,
}

/// The player
///
/// Exactly one of two regimes holds at any time: `on_planet` is set and
/// the player is kinematic (position derived from the orbit angle,
/// velocity zeroed), or `on_planet` is `None` and the player is force
/// integrated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    /// Index into the planet list while orbiting
    pub on_planet: Option<usize>,
    /// Angular position around the current planet
    pub orbit_angle: f32,
    pub is_dashing: bool,
    pub dash_timer: f32,
    pub dash_cooldown: f32,
    /// Combo-derived multiplier on orbit speed and launch power
    pub speed_boost: f32,
    /// Trail history for rendering (newest first)
    #[serde(skip)]
    pub trail: Vec<TrailPoint>,
}

impl Player {
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            radius: PLAYER_RADIUS,
            on_planet: None,
            orbit_angle: 0.0,
            is_dashing: false,
            dash_timer: 0.0,
            dash_cooldown: 0.0,
            speed_boost: 1.0,
            trail: Vec::with_capacity(TRAIL_LENGTH),
        }
    }

    /// Attach to a planet at the given orbit angle
    pub fn place_on_planet(&mut self, index: usize, planet: &Planet, angle: f32) {
        self.on_planet = Some(index);
        self.orbit_angle = angle;
        self.pos = orbit_position(planet.pos, angle, planet.orbit_radius(self.radius));
        self.vel = Vec2::ZERO;
        self.is_dashing = false;
    }

    /// Launch off the current planet
    ///
    /// `pullback` is the aim drag in [0, 1]; it adds up to
    /// `pullback_bonus` launch speed. Silent no-op while airborne. The
    /// launch direction is radially outward plus the tangential
    /// velocity the planet's spin imparts, so fast spinners throw the
    /// player sideways.
    pub fn jump(&mut self, planet: &Planet, pullback: f32, tuning: &Tuning) {
        if self.on_planet.is_none() {
            return;
        }

        let launch_speed = (tuning.jump_power + pullback.clamp(0.0, 1.0) * tuning.pullback_bonus)
            * self.speed_boost
            * tuning.jump_power_mult;
        let radial = Vec2::new(self.orbit_angle.cos(), self.orbit_angle.sin());
        let spin = tangent_velocity(
            self.orbit_angle,
            planet.rotation_speed * self.speed_boost,
            planet.orbit_radius(self.radius),
        );

        self.vel = radial * launch_speed + spin;
        self.on_planet = None;
    }

    /// Start a dash, rescaling velocity to dash power
    ///
    /// Valid only in flight, off cooldown, not already dashing, and
    /// with a nonzero velocity (the dash direction is undefined
    /// otherwise). Returns whether the dash started.
    pub fn dash(&mut self, tuning: &Tuning) -> bool {
        if self.on_planet.is_some() || self.is_dashing || self.dash_cooldown > 0.0 {
            return false;
        }
        let speed_sq = self.vel.length_squared();
        if speed_sq < EPSILON * EPSILON {
            return false;
        }

        self.vel = self.vel / speed_sq.sqrt() * tuning.dash_power;
        self.is_dashing = true;
        self.dash_timer = tuning.dash_duration;
        self.dash_cooldown = tuning.dash_cooldown;
        true
    }

    /// Record current position to trail (call each tick)
    pub fn record_trail(&mut self) {
        self.trail.insert(0, TrailPoint { pos: self.pos, life: 1.0 });
        if self.trail.len() > TRAIL_LENGTH {
            self.trail.pop();
        }
    }

    /// Decay trail sample life and drop dead samples
    pub fn decay_trail(&mut self, dt: f32) {
        for point in &mut self.trail {
            point.life -= TRAIL_DECAY * dt;
        }
        self.trail.retain(|p| p.life > 0.0);
    }
}

/// Gameplay events emitted during a tick, for renderer/audio collaborators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Player landed on a planet
    Landed { planet: usize },
    /// Ring collected, with the score it was worth
    RingCollected { ring: usize, value: u64 },
    /// Dash started
    Dashed,
    /// All rings collected; bonus awarded, next round generated
    LevelCleared { bonus: u64 },
    /// Player left the world
    GameOver,
}

/// RNG state wrapper for serialization
///
/// Each draw batch reseeds from `seed ^ stream`, so serialized state
/// resumes with the exact random sequence it left off at.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RngState {
    pub seed: u64,
    pub stream: u64,
}

impl RngState {
    pub fn new(seed: u64) -> Self {
        Self { seed, stream: 0 }
    }

    /// Fresh generator for the next draw batch, advancing the stream
    pub fn next_rng(&mut self) -> Pcg32 {
        self.stream = self.stream.wrapping_add(1);
        Pcg32::seed_from_u64(self.seed ^ self.stream.wrapping_mul(0x9E37_79B9_7F4A_7C15))
    }
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// RNG state
    pub rng_state: RngState,
    /// Current round index (0-based); bumps when all rings are collected
    pub round: u32,
    /// Score
    pub score: u64,
    /// Combo counter and decay timer
    pub combo: ComboState,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Current phase
    pub phase: GamePhase,
    /// World rectangle (0,0)..bounds
    pub bounds: Vec2,
    /// Player
    pub player: Player,
    /// Planets (stable order; referenced by index from the player)
    pub planets: Vec<Planet>,
    /// Rings for the current round
    pub rings: Vec<Ring>,
    /// Visual particles (not gameplay-affecting)
    #[serde(skip)]
    pub particles: ParticleField,
    /// Events emitted this tick (cleared at tick start)
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Create a new game state with the given seed; world is empty
    /// until [`GameState::init`] runs.
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng_state: RngState::new(seed),
            round: 0,
            score: 0,
            combo: ComboState::default(),
            time_ticks: 0,
            phase: GamePhase::Playing,
            bounds: Vec2::new(WORLD_WIDTH, WORLD_HEIGHT),
            player: Player::new(Vec2::new(WORLD_WIDTH / 2.0, WORLD_HEIGHT / 2.0)),
            planets: Vec::new(),
            rings: Vec::new(),
            particles: ParticleField::default(),
            events: Vec::new(),
        }
    }

    /// Generate the world and start the player orbiting the first planet
    pub fn init(&mut self, width: f32, height: f32, tuning: &Tuning) {
        self.bounds = Vec2::new(width, height);
        self.planets = worldgen::generate_planets(self.bounds, self.seed, tuning.planet_count);
        self.rings = worldgen::generate_rings(
            &self.planets,
            self.bounds,
            self.round_seed(),
            tuning.ring_count,
            tuning.power_ring_chance,
        );

        if let Some(planet) = self.planets.first() {
            let planet = planet.clone();
            self.player.place_on_planet(0, &planet, 0.0);
        }

        log::info!(
            "world {}x{}: {} planets, {} rings (seed {})",
            width,
            height,
            self.planets.len(),
            self.rings.len(),
            self.seed
        );
    }

    /// Fresh state with the same seed and bounds
    pub fn reset(&mut self, tuning: &Tuning) {
        let seed = self.seed;
        let bounds = self.bounds;
        *self = GameState::new(seed);
        self.init(bounds.x, bounds.y, tuning);
    }

    /// Replace the ring population for the next round
    pub fn next_round(&mut self, tuning: &Tuning) {
        self.round += 1;
        self.rings = worldgen::generate_rings(
            &self.planets,
            self.bounds,
            self.round_seed(),
            tuning.ring_count,
            tuning.power_ring_chance,
        );
        log::info!("round {}: {} rings", self.round, self.rings.len());
    }

    /// Per-round worldgen seed, distinct per round but reproducible
    fn round_seed(&self) -> u64 {
        self.seed
            .wrapping_add((self.round as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15))
    }

    /// True once every ring in the round is collected
    pub fn all_rings_collected(&self) -> bool {
        !self.rings.is_empty() && self.rings.iter().all(|r| r.collected)
    }

    /// Out-of-bounds test against the expanded world rect
    pub fn out_of_bounds(&self, pos: Vec2) -> bool {
        pos.x < -OUT_OF_BOUNDS_MARGIN
            || pos.y < -OUT_OF_BOUNDS_MARGIN
            || pos.x > self.bounds.x + OUT_OF_BOUNDS_MARGIN
            || pos.y > self.bounds.y + OUT_OF_BOUNDS_MARGIN
    }
}
