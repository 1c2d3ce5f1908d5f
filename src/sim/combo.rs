//! Combo scoring
//!
//! Consecutive ring collections inside a decaying window multiply ring
//! value and player speed. The decay is hard: when the window runs out
//! the combo drops straight to zero.

use serde::{Deserialize, Serialize};

use crate::tuning::Tuning;

use super::state::RingKind;

/// Bonus multiplier cap (reached at combo 20)
const MAX_BONUS: u64 = 50;
/// Speed boost cap
const MAX_SPEED_BOOST: f32 = 2.0;

/// Combo bonus for a given combo count
///
/// Step function: 10 at combo 0, stepping up by 10 every 5 rings,
/// capped at 50.
#[inline]
pub fn combo_bonus(count: u32) -> u64 {
    (10 * (1 + count as u64 / 5)).min(MAX_BONUS)
}

/// Speed boost multiplier for a given combo count (monotonic, capped)
#[inline]
pub fn speed_boost_for(count: u32) -> f32 {
    (1.0 + 0.1 * count as f32).min(MAX_SPEED_BOOST)
}

/// Combo counter with its decay timer
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ComboState {
    /// Consecutive rings collected inside the window
    pub count: u32,
    /// Seconds until the combo decays to zero
    pub timer: f32,
}

impl ComboState {
    /// Score a collected ring, extend the window, and bump the combo.
    ///
    /// The value uses the combo count *before* this ring, so the first
    /// ring of a run is always worth the base bonus.
    pub fn on_ring_collected(&mut self, kind: RingKind, tuning: &Tuning) -> u64 {
        let mut value = tuning.base_ring_value * combo_bonus(self.count);
        if kind == RingKind::Power {
            value *= 2;
        }
        let value = (value as f32 * tuning.ring_value_mult) as u64;

        self.count += 1;
        self.timer = tuning.combo_window;
        value
    }

    /// Count the window down; hard reset at zero.
    pub fn update(&mut self, dt: f32) {
        if self.count == 0 {
            return;
        }
        self.timer -= dt;
        if self.timer <= 0.0 {
            self.count = 0;
            self.timer = 0.0;
        }
    }

    /// Completion bonus when a round's rings are all collected
    #[inline]
    pub fn completion_bonus(&self) -> u64 {
        100 * self.count as u64
    }

    /// Current speed boost derived from the combo count
    #[inline]
    pub fn speed_boost(&self) -> f32 {
        speed_boost_for(self.count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bonus_table() {
        assert_eq!(combo_bonus(0), 10);
        assert_eq!(combo_bonus(4), 10);
        assert_eq!(combo_bonus(5), 20);
        assert_eq!(combo_bonus(10), 30);
        assert_eq!(combo_bonus(15), 40);
        assert_eq!(combo_bonus(20), 50);
        assert_eq!(combo_bonus(1000), 50);
    }

    #[test]
    fn test_first_ring_worth_base_bonus() {
        let tuning = Tuning::default();
        let mut combo = ComboState::default();
        let value = combo.on_ring_collected(RingKind::Standard, &tuning);
        assert_eq!(value, 10);
        assert_eq!(combo.count, 1);
        assert_eq!(combo.timer, tuning.combo_window);
    }

    #[test]
    fn test_power_ring_doubles() {
        let tuning = Tuning::default();
        let mut combo = ComboState::default();
        assert_eq!(combo.on_ring_collected(RingKind::Power, &tuning), 20);
    }

    #[test]
    fn test_hard_decay_to_zero() {
        let tuning = Tuning::default();
        let mut combo = ComboState::default();
        for _ in 0..7 {
            combo.on_ring_collected(RingKind::Standard, &tuning);
        }
        assert_eq!(combo.count, 7);

        // Window intact: count untouched
        combo.update(1.0);
        assert_eq!(combo.count, 7);

        // Window expires: straight to zero, not gradual
        combo.update(tuning.combo_window);
        assert_eq!(combo.count, 0);
        assert_eq!(combo.speed_boost(), 1.0);
    }

    #[test]
    fn test_speed_boost_caps() {
        assert_eq!(speed_boost_for(0), 1.0);
        assert!((speed_boost_for(5) - 1.5).abs() < 1e-6);
        assert_eq!(speed_boost_for(10), 2.0);
        assert_eq!(speed_boost_for(100), 2.0);
    }

    #[test]
    fn test_upgrade_multiplier_applies() {
        let tuning = Tuning {
            ring_value_mult: 2.5,
            ..Default::default()
        };
        let mut combo = ComboState::default();
        assert_eq!(combo.on_ring_collected(RingKind::Standard, &tuning), 25);
    }

    proptest::proptest! {
        #[test]
        fn prop_bonus_non_decreasing(count in 0u32..200) {
            proptest::prop_assert!(combo_bonus(count + 1) >= combo_bonus(count));
        }

        #[test]
        fn prop_speed_boost_monotonic_and_capped(count in 0u32..200) {
            let boost = speed_boost_for(count);
            proptest::prop_assert!(boost >= 1.0);
            proptest::prop_assert!(boost <= MAX_SPEED_BOOST);
            proptest::prop_assert!(speed_boost_for(count + 1) >= boost);
        }
    }
}
