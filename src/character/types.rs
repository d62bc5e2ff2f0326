use super::class::CharacterClass;
use crate::core::constants::*;
use crate::core::{Combatant, Dice, Fighter, Vitals};

/// The player's character.
///
/// Mana never exceeds `max_mana`; `experience` stays below
/// `experience_to_next_level` outside of [`Character::gain_experience`].
#[derive(Debug, Clone, PartialEq)]
pub struct Character {
    pub vitals: Vitals,
    pub class: CharacterClass,
    pub level: u32,
    pub experience: u32,
    pub experience_to_next_level: u32,
    pub mana: u32,
    pub max_mana: u32,
    pub base_damage: u32,
    pub defense: u32,
    pub inventory: Vec<String>,
}

impl Character {
    pub fn new(name: impl Into<String>, class: CharacterClass) -> Self {
        let stats = class.base_stats();
        Self {
            vitals: Vitals::new(name, stats.max_hp),
            class,
            level: STARTING_LEVEL,
            experience: 0,
            experience_to_next_level: STARTING_XP_THRESHOLD,
            mana: stats.max_mana,
            max_mana: stats.max_mana,
            base_damage: stats.base_damage,
            defense: stats.defense,
            inventory: Vec::new(),
        }
    }

    /// `base_damage × U(range)` truncated, never below 1.
    fn roll_damage(&self, range: (f64, f64), dice: &mut impl Dice) -> u32 {
        let multiplier = dice.uniform(range.0, range.1);
        (self.base_damage as f64 * multiplier) as u32
    }

    pub fn basic_attack(&self, dice: &mut impl Dice) -> u32 {
        self.roll_damage(self.class.attack_range(), dice).max(1)
    }

    /// Spends mana on the class ability and returns its damage.
    /// Returns 0 and changes nothing when mana is short.
    pub fn special_ability(&mut self, dice: &mut impl Dice) -> u32 {
        let ability = self.class.special_ability();
        if self.mana < ability.mana_cost {
            return 0;
        }
        self.mana -= ability.mana_cost;

        let mut damage = self.roll_damage(ability.multiplier_range, dice);
        if let Some((chance, multiplier)) = ability.crit {
            if dice.chance(chance) {
                damage = (damage as f64 * multiplier) as u32;
            }
        }
        damage.max(1)
    }

    pub fn special_ability_name(&self) -> &'static str {
        self.class.special_ability().name
    }

    pub fn special_ability_cost(&self) -> u32 {
        self.class.special_ability().mana_cost
    }

    pub fn can_use_special(&self) -> bool {
        self.mana >= self.special_ability_cost()
    }

    pub fn restore_mana(&mut self, amount: u32) {
        self.mana = self.mana.saturating_add(amount).min(self.max_mana);
    }

    pub fn add_item(&mut self, item: impl Into<String>) {
        self.inventory.push(item.into());
    }

    pub fn has_item(&self, item: &str) -> bool {
        self.inventory.iter().any(|i| i == item)
    }

    /// Consumes one matching consumable. Unknown or missing items leave the
    /// inventory untouched and return false.
    pub fn use_item(&mut self, item: &str) -> bool {
        let Some(index) = self.inventory.iter().position(|i| i == item) else {
            return false;
        };

        match item {
            ITEM_POTION => self.heal(POTION_HEAL),
            ITEM_MANA_POTION => self.restore_mana(MANA_POTION_RESTORE),
            _ => return false,
        }

        self.inventory.remove(index);
        true
    }
}

impl Combatant for Character {
    fn vitals(&self) -> &Vitals {
        &self.vitals
    }

    fn vitals_mut(&mut self) -> &mut Vitals {
        &mut self.vitals
    }
}

impl Fighter for Character {
    fn attack(&mut self, dice: &mut impl Dice) -> u32 {
        self.basic_attack(dice)
    }

    fn special_ability(&mut self, dice: &mut impl Dice) -> u32 {
        Character::special_ability(self, dice)
    }
}
