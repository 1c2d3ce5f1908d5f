//! World generation
//!
//! Seeded layouts for planets and ring rounds. All randomness in the
//! crate funnels through here and the particle bursts; the physics
//! path itself never draws.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::consts::{RING_CLEARANCE, RING_INNER_RADIUS, RING_OUTER_RADIUS};

use super::state::{Planet, Ring, RingKind};

/// Rejection sampling attempts per placement before the constraint relaxes
const MAX_ATTEMPTS: u32 = 64;
/// Planet radius range
const PLANET_RADIUS_MIN: f32 = 40.0;
const PLANET_RADIUS_MAX: f32 = 80.0;
/// Surface-to-surface gap planets keep from each other (orbit room)
const PLANET_GAP: f32 = 120.0;
/// Planet spin magnitude range (rad/s)
const SPIN_MIN: f32 = 0.3;
const SPIN_MAX: f32 = 1.0;
/// Palette size for planet color tags
const PLANET_PALETTE: u32 = 4;

/// Generate a non-overlapping planet layout
///
/// Deterministic for a given seed. Placement is rejection sampled; if
/// a position can't be found within the attempt cap the gap constraint
/// halves and a warning is logged, so generation always terminates.
pub fn generate_planets(bounds: Vec2, seed: u64, count: usize) -> Vec<Planet> {
    let mut rng = Pcg32::seed_from_u64(seed);
    let mut planets: Vec<Planet> = Vec::with_capacity(count);

    for index in 0..count {
        let radius = rng.random_range(PLANET_RADIUS_MIN..PLANET_RADIUS_MAX);
        let margin = radius + 40.0;
        let mut gap = PLANET_GAP;

        let pos = loop {
            let mut found = None;
            for _ in 0..MAX_ATTEMPTS {
                let candidate = Vec2::new(
                    rng.random_range(margin..bounds.x - margin),
                    rng.random_range(margin..bounds.y - margin),
                );
                let clear = planets
                    .iter()
                    .all(|p| (candidate - p.pos).length() >= p.radius + radius + gap);
                if clear {
                    found = Some(candidate);
                    break;
                }
            }
            if let Some(pos) = found {
                break pos;
            }
            gap /= 2.0;
            log::warn!(
                "planet {} placement failed after {} attempts, relaxing gap to {}",
                index,
                MAX_ATTEMPTS,
                gap
            );
            if gap < 1.0 {
                // Degenerate world; drop the overlap constraint entirely
                break Vec2::new(
                    rng.random_range(margin..bounds.x - margin),
                    rng.random_range(margin..bounds.y - margin),
                );
            }
        };

        let spin = rng.random_range(SPIN_MIN..SPIN_MAX);
        let rotation_speed = if rng.random_bool(0.5) { spin } else { -spin };

        planets.push(Planet {
            pos,
            radius,
            rotation_speed,
            rotation_phase: 0.0,
            color: index as u32 % PLANET_PALETTE,
        });
    }

    planets
}

/// Generate a round of ring placements avoiding all planets
///
/// Rings keep `RING_CLEARANCE` from every planet surface. The
/// rejection loop is capped: past the cap the clearance halves (with a
/// warning) until a position fits, so a crowded world degrades instead
/// of hanging.
pub fn generate_rings(
    planets: &[Planet],
    bounds: Vec2,
    seed: u64,
    count: usize,
    power_chance: f32,
) -> Vec<Ring> {
    let mut rng = Pcg32::seed_from_u64(seed);
    let mut rings = Vec::with_capacity(count);
    let margin = RING_OUTER_RADIUS;

    for index in 0..count {
        let mut clearance = RING_CLEARANCE;
        let pos = loop {
            let mut found = None;
            for _ in 0..MAX_ATTEMPTS {
                let candidate = Vec2::new(
                    rng.random_range(margin..bounds.x - margin),
                    rng.random_range(margin..bounds.y - margin),
                );
                let clear = planets
                    .iter()
                    .all(|p| (candidate - p.pos).length() > p.radius + clearance);
                if clear {
                    found = Some(candidate);
                    break;
                }
            }
            if let Some(pos) = found {
                break pos;
            }
            clearance /= 2.0;
            log::warn!(
                "ring {} placement failed after {} attempts, relaxing clearance to {}",
                index,
                MAX_ATTEMPTS,
                clearance
            );
            if clearance < 1.0 {
                break Vec2::new(
                    rng.random_range(margin..bounds.x - margin),
                    rng.random_range(margin..bounds.y - margin),
                );
            }
        };

        let kind = if rng.random_range(0.0..1.0) < power_chance {
            RingKind::Power
        } else {
            RingKind::Standard
        };

        rings.push(Ring {
            pos,
            outer_radius: RING_OUTER_RADIUS,
            inner_radius: RING_INNER_RADIUS,
            collected: false,
            kind,
        });
    }

    rings
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOUNDS: Vec2 = Vec2::new(800.0, 600.0);

    #[test]
    fn test_planets_reproducible() {
        let a = generate_planets(BOUNDS, 1234, 4);
        let b = generate_planets(BOUNDS, 1234, 4);
        assert_eq!(a.len(), b.len());
        for (p, q) in a.iter().zip(&b) {
            assert_eq!(p.pos, q.pos);
            assert_eq!(p.radius, q.radius);
            assert_eq!(p.rotation_speed, q.rotation_speed);
        }
    }

    #[test]
    fn test_planets_do_not_overlap() {
        let planets = generate_planets(BOUNDS, 99, 4);
        for (i, a) in planets.iter().enumerate() {
            for b in planets.iter().skip(i + 1) {
                assert!((a.pos - b.pos).length() > a.radius + b.radius);
            }
        }
    }

    #[test]
    fn test_rings_reproducible() {
        let planets = generate_planets(BOUNDS, 7, 4);
        let a = generate_rings(&planets, BOUNDS, 42, 8, 0.15);
        let b = generate_rings(&planets, BOUNDS, 42, 8, 0.15);
        for (r, s) in a.iter().zip(&b) {
            assert_eq!(r.pos, s.pos);
            assert_eq!(r.kind, s.kind);
        }
    }

    #[test]
    fn test_rings_respect_planet_clearance() {
        let planets = generate_planets(BOUNDS, 7, 4);
        let rings = generate_rings(&planets, BOUNDS, 42, 8, 0.15);
        assert_eq!(rings.len(), 8);
        for ring in &rings {
            for planet in &planets {
                assert!((ring.pos - planet.pos).length() > planet.radius + RING_CLEARANCE);
            }
            assert!(!ring.collected);
        }
    }

    #[test]
    fn test_crowded_world_still_terminates() {
        // One planet swallowing the whole world: the clearance must
        // relax rather than loop forever.
        let planets = vec![Planet {
            pos: Vec2::new(400.0, 300.0),
            radius: 500.0,
            rotation_speed: 0.5,
            rotation_phase: 0.0,
            color: 0,
        }];
        let rings = generate_rings(&planets, BOUNDS, 5, 4, 0.0);
        assert_eq!(rings.len(), 4);
    }

    #[test]
    fn test_different_seeds_differ() {
        let planets = generate_planets(BOUNDS, 7, 4);
        let a = generate_rings(&planets, BOUNDS, 1, 8, 0.15);
        let b = generate_rings(&planets, BOUNDS, 2, 8, 0.15);
        assert!(a.iter().zip(&b).any(|(r, s)| r.pos != s.pos));
    }
}
