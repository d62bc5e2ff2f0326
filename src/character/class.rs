//! Character classes and their fixed stat lines.

use crate::core::constants::*;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CharacterClass {
    Warrior,
    Mage,
    Archer,
    Generic,
}

/// Starting stats for a freshly created character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BaseStats {
    pub max_hp: u32,
    pub max_mana: u32,
    pub base_damage: u32,
    pub defense: u32,
}

impl From<(u32, u32, u32, u32)> for BaseStats {
    fn from((max_hp, max_mana, base_damage, defense): (u32, u32, u32, u32)) -> Self {
        Self {
            max_hp,
            max_mana,
            base_damage,
            defense,
        }
    }
}

/// A class's mana-gated attack.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpecialAbility {
    pub name: &'static str,
    pub mana_cost: u32,
    pub multiplier_range: (f64, f64),
    /// (chance, multiplier) applied to the truncated damage.
    pub crit: Option<(f64, f64)>,
}

impl CharacterClass {
    pub fn all() -> [CharacterClass; 4] {
        [
            CharacterClass::Warrior,
            CharacterClass::Mage,
            CharacterClass::Archer,
            CharacterClass::Generic,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            CharacterClass::Warrior => "Warrior",
            CharacterClass::Mage => "Mage",
            CharacterClass::Archer => "Archer",
            CharacterClass::Generic => "Generic",
        }
    }

    /// Short blurb shown on the class selection menu.
    pub fn description(&self) -> &'static str {
        match self {
            CharacterClass::Warrior => "High HP, high defense, low mana",
            CharacterClass::Mage => "Low HP, low defense, high mana",
            CharacterClass::Archer => "Medium HP, balanced",
            CharacterClass::Generic => "No specialization",
        }
    }

    /// Case-insensitive lookup by name. Unknown names map to `Generic`.
    pub fn from_name(name: &str) -> CharacterClass {
        let name = name.trim();
        CharacterClass::all()
            .into_iter()
            .find(|class| class.name().eq_ignore_ascii_case(name))
            .unwrap_or(CharacterClass::Generic)
    }

    pub fn base_stats(&self) -> BaseStats {
        match self {
            CharacterClass::Warrior => WARRIOR_STATS.into(),
            CharacterClass::Mage => MAGE_STATS.into(),
            CharacterClass::Archer => ARCHER_STATS.into(),
            CharacterClass::Generic => GENERIC_STATS.into(),
        }
    }

    /// Multiplier range applied to base damage on a basic attack.
    pub fn attack_range(&self) -> (f64, f64) {
        match self {
            CharacterClass::Warrior => WARRIOR_ATTACK_RANGE,
            CharacterClass::Mage => MAGE_ATTACK_RANGE,
            CharacterClass::Archer | CharacterClass::Generic => DEFAULT_ATTACK_RANGE,
        }
    }

    pub fn special_ability(&self) -> SpecialAbility {
        let (name, (mana_cost, low, high), crit) = match self {
            CharacterClass::Warrior => ("Devastating Blow", WARRIOR_SPECIAL, None),
            CharacterClass::Mage => ("Fireball", MAGE_SPECIAL, None),
            CharacterClass::Archer => (
                "Arrow Rain",
                ARCHER_SPECIAL,
                Some((ARCHER_CRIT_CHANCE, ARCHER_CRIT_MULTIPLIER)),
            ),
            CharacterClass::Generic => ("Power Strike", GENERIC_SPECIAL, None),
        };

        SpecialAbility {
            name,
            mana_cost,
            multiplier_range: (low, high),
            crit,
        }
    }
}

impl fmt::Display for CharacterClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
