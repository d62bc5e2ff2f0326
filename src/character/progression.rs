//! Experience and level-ups.

use super::types::Character;
use crate::core::constants::*;

/// Threshold for the level after one with `threshold`: `floor(threshold × 1.5)`.
pub fn next_threshold(threshold: u32) -> u32 {
    let grown = threshold as u64 * XP_THRESHOLD_GROWTH_NUM / XP_THRESHOLD_GROWTH_DEN;
    grown.clamp(1, u32::MAX as u64) as u32
}

impl Character {
    /// Adds experience and applies every level-up it pays for.
    /// Returns true if at least one level was gained.
    pub fn gain_experience(&mut self, amount: u32) -> bool {
        self.levels_from_experience(amount) > 0
    }

    /// Like [`Character::gain_experience`] but returns the number of levels gained.
    pub fn levels_from_experience(&mut self, amount: u32) -> u32 {
        self.experience = self.experience.saturating_add(amount);

        let mut levels = 0;
        while self.experience >= self.experience_to_next_level {
            self.experience -= self.experience_to_next_level;
            self.experience_to_next_level = next_threshold(self.experience_to_next_level);
            self.apply_level_up();
            levels += 1;
        }
        levels
    }

    /// XP still missing for the next level.
    pub fn experience_remaining(&self) -> u32 {
        self.experience_to_next_level.saturating_sub(self.experience)
    }

    fn apply_level_up(&mut self) {
        self.level = self.level.saturating_add(1);
        self.vitals.raise_max_hp(LEVEL_UP_MAX_HP);
        self.vitals.restore_full();
        self.base_damage = self.base_damage.saturating_add(LEVEL_UP_BASE_DAMAGE);
        self.defense = self.defense.saturating_add(LEVEL_UP_DEFENSE);
    }
}
