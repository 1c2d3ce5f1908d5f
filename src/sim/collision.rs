//! Collision detection for planets and rings
//!
//! Planet landings are disk-vs-disk against continuously moving
//! bodies; ring collection is an annulus test against the player's
//! center only, so a near pass still collects.

use glam::Vec2;

use super::orbit::distance;
use super::state::{Planet, Player, Ring};

/// Disk overlap test between the player and one planet
#[inline]
pub fn planet_hit(player_pos: Vec2, player_radius: f32, planet: &Planet) -> bool {
    distance(player_pos, planet.pos) <= planet.radius + player_radius
}

/// Find the planet the player lands on this frame, if any
///
/// When overlapping bodies make several planets qualify at once, the
/// nearest center wins; the lower index wins exact ties. Keeping the
/// rule explicit keeps replays identical across runs.
pub fn landing_planet(player: &Player, planets: &[Planet]) -> Option<usize> {
    if player.on_planet.is_some() {
        return None;
    }

    let mut best: Option<(usize, f32)> = None;
    for (index, planet) in planets.iter().enumerate() {
        if !planet_hit(player.pos, player.radius, planet) {
            continue;
        }
        let dist = distance(player.pos, planet.pos);
        match best {
            Some((_, best_dist)) if dist >= best_dist => {}
            _ => best = Some((index, dist)),
        }
    }
    best.map(|(index, _)| index)
}

/// Snap the player onto a planet's orbit at the contact angle
///
/// Position lands on the exact orbit radius so the player never renders
/// inside the surface, and velocity is zeroed (orbiting is kinematic).
pub fn land_player(player: &mut Player, index: usize, planet: &Planet) {
    let contact = player.pos - planet.pos;
    let angle = contact.y.atan2(contact.x);
    player.place_on_planet(index, planet, angle);
}

/// Annulus collection test: player center inside the ring's outer radius
#[inline]
pub fn ring_overlap(player_pos: Vec2, ring: &Ring) -> bool {
    distance(player_pos, ring.pos) <= ring.outer_radius
}
