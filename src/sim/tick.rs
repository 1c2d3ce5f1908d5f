//! Per-frame session loop
//!
//! One `tick` advances the whole session in a fixed order: commands,
//! player/orbit integration, particle integration, planet collisions,
//! ring collisions, combo decay, trail bookkeeping, level-clear check.
//! Collision checks run after movement, and ring collection runs after
//! planet landings, so bonuses never reorder within a frame.

use glam::Vec2;

use super::collision;
use super::orbit::{gravity, orbit_position};
use super::particles::colors;
use super::state::{GameEvent, GamePhase, GameState, RingKind};
use crate::normalize_angle;
use crate::tuning::Tuning;

/// Input commands for a single tick (deterministic)
///
/// Invalid commands (jump while airborne, dash on cooldown) are silent
/// no-ops, never errors.
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Launch off the current planet
    pub jump: bool,
    /// Aim drag in [0, 1]; scales the pullback launch bonus
    pub pullback: f32,
    /// Start a dash
    pub dash: bool,
}

/// Advance the session by one timestep
pub fn tick(state: &mut GameState, input: &TickInput, tuning: &Tuning, dt: f32) {
    state.events.clear();

    if state.phase == GamePhase::GameOver {
        return;
    }

    state.time_ticks += 1;

    // --- Commands ---
    if input.jump {
        if let Some(index) = state.player.on_planet {
            if let Some(planet) = state.planets.get(index).cloned() {
                state.player.jump(&planet, input.pullback, tuning);
            }
        }
    }
    if input.dash && state.player.dash(tuning) {
        let mut rng = state.rng_state.next_rng();
        state
            .particles
            .dash_burst(state.player.pos, state.player.vel, &mut rng);
        state.events.push(GameEvent::Dashed);
    }

    // --- Player / orbit integration ---
    for planet in &mut state.planets {
        planet.rotation_phase += planet.rotation_speed * dt;
    }

    match state.player.on_planet {
        Some(index) => {
            // Orbiting is kinematic: position follows the planet's
            // spin, velocity stays zero.
            if let Some(planet) = state.planets.get(index) {
                state.player.orbit_angle = normalize_angle(
                    state.player.orbit_angle
                        + planet.rotation_speed * dt * state.player.speed_boost,
                );
                state.player.pos = orbit_position(
                    planet.pos,
                    state.player.orbit_angle,
                    planet.orbit_radius(state.player.radius),
                );
            }
            state.player.vel = Vec2::ZERO;
        }
        None => {
            let mut accel = Vec2::ZERO;
            for planet in &state.planets {
                accel += gravity(
                    state.player.pos,
                    planet.pos,
                    planet.radius,
                    tuning.gravity_strength,
                );
            }
            state.player.vel += accel * dt;
            let scale = if state.player.is_dashing {
                tuning.dash_position_scale
            } else {
                1.0
            };
            state.player.pos += state.player.vel * dt * scale;
        }
    }

    state.player.dash_timer = (state.player.dash_timer - dt).max(0.0);
    state.player.dash_cooldown = (state.player.dash_cooldown - dt).max(0.0);
    if state.player.is_dashing && state.player.dash_timer <= 0.0 {
        state.player.is_dashing = false;
    }

    // Leaving the expanded world rect ends the run. A designed
    // terminal transition, not an error.
    if state.player.on_planet.is_none() && state.out_of_bounds(state.player.pos) {
        state.phase = GamePhase::GameOver;
        state.events.push(GameEvent::GameOver);
        log::info!(
            "out of bounds at ({:.0}, {:.0}), final score {}",
            state.player.pos.x,
            state.player.pos.y,
            state.score
        );
        return;
    }

    // --- Particle integration ---
    state.particles.update(dt);

    // --- Planet collision ---
    if let Some(index) = collision::landing_planet(&state.player, &state.planets) {
        if let Some(planet) = state.planets.get(index).cloned() {
            collision::land_player(&mut state.player, index, &planet);
            state.score += tuning.landing_bonus;
            let mut rng = state.rng_state.next_rng();
            state
                .particles
                .landing_burst(state.player.pos, state.player.orbit_angle, &mut rng);
            state.events.push(GameEvent::Landed { planet: index });
        }
    }

    // --- Ring collection ---
    for index in 0..state.rings.len() {
        let ring = &state.rings[index];
        if ring.collected || !collision::ring_overlap(state.player.pos, ring) {
            continue;
        }
        let kind = ring.kind;
        let pos = ring.pos;

        state.rings[index].collected = true;
        let value = state.combo.on_ring_collected(kind, tuning);
        state.score += value;
        state.player.speed_boost = state.combo.speed_boost();

        let color = match kind {
            RingKind::Standard => colors::RING_STANDARD,
            RingKind::Power => colors::RING_POWER,
        };
        let mut rng = state.rng_state.next_rng();
        state.particles.ring_burst(pos, color, &mut rng);
        state.events.push(GameEvent::RingCollected { ring: index, value });
    }

    // --- Combo decay ---
    state.combo.update(dt);
    state.player.speed_boost = state.combo.speed_boost();

    // --- Trail bookkeeping ---
    state.player.record_trail();
    state.player.decay_trail(dt);

    // --- Level clear (an edge, not a terminal state) ---
    if state.all_rings_collected() {
        let bonus = state.combo.completion_bonus();
        state.score += bonus;
        state.events.push(GameEvent::LevelCleared { bonus });
        state.next_round(tuning);
    }
}
