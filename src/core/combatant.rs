//! Health state shared by characters and enemies.

use super::constants::{HEALTH_BAR_EMPTY, HEALTH_BAR_FILLED, HEALTH_BAR_WIDTH};
use super::dice::Dice;
use serde::{Deserialize, Serialize};

/// Name and hit points of anything that can fight.
///
/// Invariant: `current_hp <= max_hp`. A combatant at 0 HP is defeated but
/// stays around as data until replaced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vitals {
    pub name: String,
    current_hp: u32,
    max_hp: u32,
}

impl Vitals {
    pub fn new(name: impl Into<String>, max_hp: u32) -> Self {
        Self {
            name: name.into(),
            current_hp: max_hp,
            max_hp,
        }
    }

    /// Builds vitals at a specific HP, clamped to `max_hp`.
    pub fn with_current(name: impl Into<String>, current_hp: u32, max_hp: u32) -> Self {
        Self {
            name: name.into(),
            current_hp: current_hp.min(max_hp),
            max_hp,
        }
    }

    pub fn current_hp(&self) -> u32 {
        self.current_hp
    }

    pub fn max_hp(&self) -> u32 {
        self.max_hp
    }

    pub fn is_alive(&self) -> bool {
        self.current_hp > 0
    }

    /// Removes up to `amount` HP and returns how much was actually removed.
    pub fn receive_damage(&mut self, amount: u32) -> u32 {
        let applied = amount.min(self.current_hp);
        self.current_hp -= applied;
        applied
    }

    pub fn heal(&mut self, amount: u32) {
        self.current_hp = self.current_hp.saturating_add(amount).min(self.max_hp);
    }

    pub fn raise_max_hp(&mut self, amount: u32) {
        self.max_hp = self.max_hp.saturating_add(amount);
    }

    pub fn restore_full(&mut self) {
        self.current_hp = self.max_hp;
    }

    /// Fixed-width bar, e.g. `##########----------` at half health.
    pub fn health_bar(&self) -> String {
        if self.max_hp == 0 {
            return String::new();
        }

        let filled =
            (HEALTH_BAR_WIDTH as u64 * self.current_hp as u64 / self.max_hp as u64) as usize;
        let empty = HEALTH_BAR_WIDTH as usize - filled;

        let mut bar = String::with_capacity(HEALTH_BAR_WIDTH as usize);
        bar.extend(std::iter::repeat(HEALTH_BAR_FILLED).take(filled));
        bar.extend(std::iter::repeat(HEALTH_BAR_EMPTY).take(empty));
        bar
    }
}

/// Anything with [`Vitals`]. The provided methods forward to them.
pub trait Combatant {
    fn vitals(&self) -> &Vitals;
    fn vitals_mut(&mut self) -> &mut Vitals;

    fn name(&self) -> &str {
        &self.vitals().name
    }

    fn current_hp(&self) -> u32 {
        self.vitals().current_hp()
    }

    fn max_hp(&self) -> u32 {
        self.vitals().max_hp()
    }

    fn is_alive(&self) -> bool {
        self.vitals().is_alive()
    }

    fn receive_damage(&mut self, amount: u32) -> u32 {
        self.vitals_mut().receive_damage(amount)
    }

    fn heal(&mut self, amount: u32) {
        self.vitals_mut().heal(amount)
    }

    fn health_bar(&self) -> String {
        self.vitals().health_bar()
    }
}

/// Offensive moves of a combatant. Each character class and enemy kind
/// supplies its own rolls.
pub trait Fighter: Combatant {
    /// Raw damage of a regular attack.
    fn attack(&mut self, dice: &mut impl Dice) -> u32;

    /// Raw damage of the mana-gated ability. 0 when it cannot be used; in that
    /// case nothing is spent.
    fn special_ability(&mut self, dice: &mut impl Dice) -> u32;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vitals_start_full() {
        let vitals = Vitals::new("Test", 50);
        assert_eq!(vitals.current_hp(), 50);
        assert_eq!(vitals.max_hp(), 50);
        assert!(vitals.is_alive());
    }

    #[test]
    fn test_with_current_clamps_to_max() {
        let vitals = Vitals::with_current("Test", 80, 50);
        assert_eq!(vitals.current_hp(), 50);
    }

    #[test]
    fn test_receive_damage_returns_applied_amount() {
        let mut vitals = Vitals::new("Test", 50);
        assert_eq!(vitals.receive_damage(20), 20);
        assert_eq!(vitals.current_hp(), 30);
        assert_eq!(vitals.receive_damage(0), 0);
        assert_eq!(vitals.current_hp(), 30);
    }

    #[test]
    fn test_receive_damage_overkill_is_discarded() {
        let mut vitals = Vitals::new("Test", 50);
        vitals.receive_damage(45);
        assert_eq!(vitals.receive_damage(100), 5);
        assert_eq!(vitals.current_hp(), 0);
        assert!(!vitals.is_alive());
        assert_eq!(vitals.receive_damage(10), 0);
    }

    #[test]
    fn test_receive_damage_property_holds_for_many_amounts() {
        for start in [0u32, 1, 7, 50] {
            for amount in [0u32, 1, 6, 7, 8, 49, 50, 51, u32::MAX] {
                let mut vitals = Vitals::with_current("Test", start, 50);
                let before = vitals.current_hp();
                let applied = vitals.receive_damage(amount);
                assert_eq!(applied, amount.min(before));
                assert!(vitals.current_hp() <= vitals.max_hp());
            }
        }
    }

    #[test]
    fn test_heal_caps_at_max() {
        let mut vitals = Vitals::with_current("Test", 10, 50);
        vitals.heal(15);
        assert_eq!(vitals.current_hp(), 25);
        vitals.heal(1000);
        assert_eq!(vitals.current_hp(), 50);
        vitals.heal(u32::MAX);
        assert_eq!(vitals.current_hp(), 50);
    }

    #[test]
    fn test_heal_never_decreases() {
        for start in [0u32, 25, 50] {
            for amount in [0u32, 1, 30, 100] {
                let mut vitals = Vitals::with_current("Test", start, 50);
                vitals.heal(amount);
                assert!(vitals.current_hp() >= start);
                assert!(vitals.current_hp() <= 50);
            }
        }
    }

    #[test]
    fn test_raise_max_and_restore() {
        let mut vitals = Vitals::with_current("Test", 10, 50);
        vitals.raise_max_hp(20);
        assert_eq!(vitals.max_hp(), 70);
        assert_eq!(vitals.current_hp(), 10);
        vitals.restore_full();
        assert_eq!(vitals.current_hp(), 70);
    }

    #[test]
    fn test_health_bar_proportions() {
        assert_eq!(Vitals::new("Full", 150).health_bar(), "####################");
        assert_eq!(
            Vitals::with_current("Half", 50, 100).health_bar(),
            "##########----------"
        );
        assert_eq!(
            Vitals::with_current("Empty", 0, 100).health_bar(),
            "--------------------"
        );
        // 147/150 * 20 = 19.6 -> 19
        assert_eq!(
            Vitals::with_current("Floor", 147, 150).health_bar(),
            "###################-"
        );
    }

    #[test]
    fn test_health_bar_zero_max_is_empty() {
        assert_eq!(Vitals::new("Broken", 0).health_bar(), "");
    }
}
