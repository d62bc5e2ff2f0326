use super::types::{Difficulty, Mission};
use crate::character::Character;
use crate::combat::{run_encounter, Enemy, EncounterResult, EnemyKind, TurnController};
use crate::core::constants::*;
use crate::core::{weighted_pick, Combatant, Dice};
use crate::utils::event_log::EventSink;

/// Difficulty for a character of `level`: easy up to level 2, easy or
/// medium up to level 5, then medium or hard.
pub fn choose_difficulty(level: u32, dice: &mut impl Dice) -> Difficulty {
    if level <= EASY_MAX_LEVEL {
        return Difficulty::Easy;
    }
    let pool = if level <= MEDIUM_MAX_LEVEL {
        [Difficulty::Easy, Difficulty::Medium]
    } else {
        [Difficulty::Medium, Difficulty::Hard]
    };
    pool[dice.pick(pool.len())]
}

/// Spawn weights per difficulty, indexed like [`EnemyKind::all`].
pub fn enemy_weights(difficulty: Difficulty) -> [u32; 4] {
    match difficulty {
        Difficulty::Easy => EASY_ENEMY_WEIGHTS,
        Difficulty::Medium => MEDIUM_ENEMY_WEIGHTS,
        Difficulty::Hard => HARD_ENEMY_WEIGHTS,
    }
}

pub fn choose_enemy_kind(difficulty: Difficulty, dice: &mut impl Dice) -> EnemyKind {
    let index = weighted_pick(dice, &enemy_weights(difficulty)).unwrap_or(0);
    EnemyKind::all()[index]
}

impl Mission {
    /// Random mission from the name pool, scaled to `level`.
    pub fn generate(level: u32, dice: &mut impl Dice) -> Mission {
        let difficulty = choose_difficulty(level, dice);
        let name = MISSION_NAMES[dice.pick(MISSION_NAMES.len())];
        Mission::new(name, difficulty)
    }

    pub fn spawn_enemy(&self, dice: &mut impl Dice) -> Enemy {
        Enemy::new(choose_enemy_kind(self.difficulty, dice))
    }

    /// Spawns this mission's enemy and fights it out.
    pub fn run(
        &self,
        character: &mut Character,
        controller: &mut impl TurnController,
        log: &mut impl EventSink,
        dice: &mut impl Dice,
    ) -> EncounterResult {
        let enemy = self.spawn_enemy(dice);
        log.record(&format!(
            "{} (level {}) starts mission '{}' [{}]",
            character.name(),
            character.level,
            self.name,
            self.difficulty
        ));
        run_encounter(character, enemy, controller, log, dice)
    }
}
