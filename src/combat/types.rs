use crate::core::constants::*;
use crate::core::{Combatant, Dice, Fighter, Vitals};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnemyKind {
    Goblin,
    Wolf,
    Orc,
    Boss,
}

impl EnemyKind {
    /// In weight-table order, see `EASY_ENEMY_WEIGHTS`.
    pub fn all() -> [EnemyKind; 4] {
        [EnemyKind::Goblin, EnemyKind::Wolf, EnemyKind::Orc, EnemyKind::Boss]
    }

    pub fn name(&self) -> &'static str {
        match self {
            EnemyKind::Goblin => "Goblin",
            EnemyKind::Wolf => "Wolf",
            EnemyKind::Orc => "Orc",
            EnemyKind::Boss => "Boss",
        }
    }

    /// (hp, damage, xp_reward, defense)
    fn stats(&self) -> (u32, u32, u32, u32) {
        match self {
            EnemyKind::Goblin => GOBLIN_STATS,
            EnemyKind::Wolf => WOLF_STATS,
            EnemyKind::Orc => ORC_STATS,
            EnemyKind::Boss => BOSS_STATS,
        }
    }
}

impl fmt::Display for EnemyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Enemy {
    pub vitals: Vitals,
    pub kind: EnemyKind,
    pub damage: u32,
    pub defense: u32,
    pub xp_reward: u32,
    /// Only bosses carry mana.
    pub mana: u32,
    pub max_mana: u32,
}

impl Enemy {
    pub fn new(kind: EnemyKind) -> Self {
        let (hp, damage, xp_reward, defense) = kind.stats();
        let max_mana = if kind == EnemyKind::Boss { BOSS_MANA } else { 0 };
        Self {
            vitals: Vitals::new(kind.name(), hp),
            kind,
            damage,
            defense,
            xp_reward,
            mana: max_mana,
            max_mana,
        }
    }

    fn roll_damage(&self, range: (f64, f64), dice: &mut impl Dice) -> u32 {
        let multiplier = dice.uniform(range.0, range.1);
        ((self.damage as f64 * multiplier) as u32).max(1)
    }

    fn base_attack(&self, dice: &mut impl Dice) -> u32 {
        self.roll_damage(ENEMY_ATTACK_RANGE, dice)
    }

    /// Damage of this enemy's next attack, including kind-specific moves.
    pub fn attack(&mut self, dice: &mut impl Dice) -> u32 {
        match self.kind {
            EnemyKind::Wolf => {
                let first = self.base_attack(dice);
                if dice.chance(WOLF_DOUBLE_STRIKE_CHANCE) {
                    first + self.base_attack(dice)
                } else {
                    first
                }
            }
            EnemyKind::Boss => {
                let special = if dice.chance(BOSS_SPECIAL_CHANCE) {
                    self.special_ability(dice)
                } else {
                    0
                };
                if special > 0 {
                    special
                } else {
                    self.base_attack(dice)
                }
            }
            EnemyKind::Goblin | EnemyKind::Orc => self.base_attack(dice),
        }
    }

    /// The boss's mana-fuelled blow. Other kinds have none and return 0.
    pub fn special_ability(&mut self, dice: &mut impl Dice) -> u32 {
        if self.kind != EnemyKind::Boss || self.mana < BOSS_SPECIAL_MANA_COST {
            return 0;
        }
        self.mana -= BOSS_SPECIAL_MANA_COST;
        self.roll_damage(BOSS_SPECIAL_RANGE, dice)
    }

    /// Applies `raw_damage` reduced by defense, always landing at least 1.
    pub fn receive_damage_with_defense(&mut self, raw_damage: u32) -> u32 {
        let reduced = raw_damage.saturating_sub(self.defense).max(1);
        self.receive_damage(reduced)
    }

    /// Boss turn regeneration. Returns HP restored (0 for other kinds).
    pub fn regenerate(&mut self, dice: &mut impl Dice) -> u32 {
        if self.kind != EnemyKind::Boss || !dice.chance(BOSS_REGEN_CHANCE) {
            return 0;
        }
        let before = self.current_hp();
        self.heal(BOSS_REGEN_AMOUNT);
        self.current_hp() - before
    }
}

impl Combatant for Enemy {
    fn vitals(&self) -> &Vitals {
        &self.vitals
    }

    fn vitals_mut(&mut self) -> &mut Vitals {
        &mut self.vitals
    }
}

impl Fighter for Enemy {
    fn attack(&mut self, dice: &mut impl Dice) -> u32 {
        Enemy::attack(self, dice)
    }

    fn special_ability(&mut self, dice: &mut impl Dice) -> u32 {
        Enemy::special_ability(self, dice)
    }
}
