//! Data-driven game balance
//!
//! Every balance number lives here so external systems (difficulty
//! presets, progression upgrades) can swap values without touching the
//! core. The core stores no tuning; `tick` takes a reference each call.

use serde::{Deserialize, Serialize};

/// Gameplay balance values
///
/// `Default` gives the canonical values the tests are written against.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Gravitational pull scale; per-planet magnitude is
    /// `gravity_strength * planet.radius / distance`
    pub gravity_strength: f32,

    /// Base launch speed in pixels per second
    pub jump_power: f32,
    /// Extra launch speed at full pullback
    pub pullback_bonus: f32,

    /// Speed the velocity is rescaled to when a dash starts
    pub dash_power: f32,
    /// Seconds a dash lasts
    pub dash_duration: f32,
    /// Seconds before another dash is allowed
    pub dash_cooldown: f32,
    /// Position integration multiplier while dashing
    pub dash_position_scale: f32,

    /// Seconds the combo survives without a new ring
    pub combo_window: f32,

    /// Score base for one ring, multiplied by the combo bonus
    pub base_ring_value: u64,
    /// Flat score for landing on a planet
    pub landing_bonus: u64,

    /// Rings per round
    pub ring_count: usize,
    /// Planets per world
    pub planet_count: usize,
    /// Chance a generated ring is a double-value power ring
    pub power_ring_chance: f32,

    /// Upgrade hook: external progression multiplies launch speed
    pub jump_power_mult: f32,
    /// Upgrade hook: external progression multiplies ring score
    pub ring_value_mult: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            gravity_strength: 900.0,

            jump_power: 300.0,
            pullback_bonus: 200.0,

            dash_power: 500.0,
            dash_duration: 0.3,
            dash_cooldown: 1.0,
            dash_position_scale: 2.0,

            combo_window: 3.0,

            base_ring_value: 1,
            landing_bonus: 1,

            ring_count: 8,
            planet_count: 4,
            power_ring_chance: 0.15,

            jump_power_mult: 1.0,
            ring_value_mult: 1.0,
        }
    }
}

impl Tuning {
    /// Load tuning from a JSON string; missing fields fall back to defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serialize tuning to JSON (for editors/debug overlays)
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_round_trip() {
        let tuning = Tuning::default();
        let json = tuning.to_json().unwrap();
        let back = Tuning::from_json(&json).unwrap();
        assert_eq!(back.jump_power, tuning.jump_power);
        assert_eq!(back.ring_count, tuning.ring_count);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let tuning = Tuning::from_json(r#"{"jump_power": 450.0}"#).unwrap();
        assert_eq!(tuning.jump_power, 450.0);
        assert_eq!(tuning.dash_power, Tuning::default().dash_power);
        assert_eq!(tuning.jump_power_mult, 1.0);
    }
}
