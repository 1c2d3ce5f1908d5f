//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Seeded RNG only, confined to worldgen and particle spreads
//! - Stable iteration order (planets and rings by index)
//! - No rendering or platform dependencies

pub mod collision;
pub mod combo;
pub mod orbit;
pub mod particles;
pub mod state;
pub mod tick;
pub mod worldgen;

pub use combo::{ComboState, combo_bonus, speed_boost_for};
pub use particles::{Particle, ParticleField};
pub use state::{
    GameEvent, GamePhase, GameState, Planet, Player, Ring, RingKind, RngState, TrailPoint,
};
pub use tick::{TickInput, tick};
pub use worldgen::{generate_planets, generate_rings};
