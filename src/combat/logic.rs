use super::types::{Enemy, EnemyKind};
use crate::character::Character;
use crate::core::constants::*;
use crate::core::{Combatant, Dice, Fighter};
use crate::utils::event_log::EventSink;

/// What the player does on their turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayerAction {
    Attack,
    Special,
    UseItem(String),
    Flee,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CombatEvent {
    PlayerAttack {
        damage: u32,
    },
    PlayerSpecial {
        ability: &'static str,
        damage: u32,
    },
    /// Special ability chosen without enough mana; the turn is spent
    NotEnoughMana {
        ability: &'static str,
        cost: u32,
    },
    ItemUsed {
        item: String,
    },
    /// Item missing or not usable; the turn is spent
    ItemUnavailable {
        item: String,
    },
    Fled,
    EnemyAttack {
        damage: u32,
    },
    EnemyRegenerated {
        amount: u32,
    },
    EnemyDefeated {
        xp_gained: u32,
    },
    PlayerDefeated,
    LevelUp {
        level: u32,
    },
    LootFound {
        item: String,
    },
    TurnLimitReached {
        rounds: u32,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncounterOutcome {
    Victory,
    Defeat,
    Fled,
    /// Round cap reached with both sides standing
    Stalemate,
}

/// Report handed back to the menu after an encounter.
#[derive(Debug, Clone, PartialEq)]
pub struct EncounterResult {
    pub outcome: EncounterOutcome,
    pub enemy_kind: EnemyKind,
    pub xp_gained: u32,
    pub leveled_up: bool,
    pub rounds: u32,
    pub loot: Option<String>,
    pub events: Vec<CombatEvent>,
}

impl EncounterResult {
    pub fn victory(&self) -> bool {
        self.outcome == EncounterOutcome::Victory
    }
}

/// Chooses the player's action each round.
pub trait TurnController {
    fn choose_action(&mut self, character: &Character, enemy: &Enemy, round: u32) -> PlayerAction;

    /// Called for every event as it happens.
    fn observe(&mut self, _event: &CombatEvent) {}
}

/// Fixed list of actions, then `fallback` forever. Handy for tests and replays.
#[derive(Debug, Clone)]
pub struct ScriptedController {
    actions: std::collections::VecDeque<PlayerAction>,
    fallback: PlayerAction,
}

impl ScriptedController {
    pub fn new(actions: Vec<PlayerAction>, fallback: PlayerAction) -> Self {
        Self {
            actions: actions.into(),
            fallback,
        }
    }

    pub fn always(action: PlayerAction) -> Self {
        Self::new(Vec::new(), action)
    }
}

impl TurnController for ScriptedController {
    fn choose_action(&mut self, _: &Character, _: &Enemy, _: u32) -> PlayerAction {
        self.actions.pop_front().unwrap_or_else(|| self.fallback.clone())
    }
}

/// Rolls the post-victory drop.
pub fn roll_loot(dice: &mut impl Dice) -> Option<&'static str> {
    if dice.chance(POTION_DROP_CHANCE) {
        Some(ITEM_POTION)
    } else if dice.chance(MANA_POTION_DROP_CHANCE) {
        Some(ITEM_MANA_POTION)
    } else {
        None
    }
}

struct Encounter<'a, C, L> {
    character: &'a mut Character,
    enemy: Enemy,
    controller: &'a mut C,
    log: &'a mut L,
    events: Vec<CombatEvent>,
}

impl<C: TurnController, L: EventSink> Encounter<'_, C, L> {
    fn emit(&mut self, event: CombatEvent) {
        tracing::debug!(?event, "combat event");
        self.controller.observe(&event);
        self.events.push(event);
    }

    /// Resolves the player's action. Returns false if the player fled.
    fn player_turn(&mut self, round: u32, dice: &mut impl Dice) -> bool {
        let action = self
            .controller
            .choose_action(&*self.character, &self.enemy, round);

        match action {
            PlayerAction::Attack => {
                let raw = Fighter::attack(&mut *self.character, dice);
                let damage = self.enemy.receive_damage_with_defense(raw);
                self.emit(CombatEvent::PlayerAttack { damage });
            }
            PlayerAction::Special => {
                let ability = self.character.special_ability_name();
                let raw = Fighter::special_ability(&mut *self.character, dice);
                if raw == 0 {
                    let cost = self.character.special_ability_cost();
                    self.emit(CombatEvent::NotEnoughMana { ability, cost });
                } else {
                    let damage = self.enemy.receive_damage_with_defense(raw);
                    self.emit(CombatEvent::PlayerSpecial { ability, damage });
                }
            }
            PlayerAction::UseItem(item) => {
                if self.character.use_item(&item) {
                    self.emit(CombatEvent::ItemUsed { item });
                } else {
                    self.emit(CombatEvent::ItemUnavailable { item });
                }
            }
            PlayerAction::Flee => {
                self.emit(CombatEvent::Fled);
                return false;
            }
        }
        true
    }

    fn enemy_turn(&mut self, dice: &mut impl Dice) {
        // Enemy hits are raw; character defense does not reduce them
        let raw = Fighter::attack(&mut self.enemy, dice);
        let damage = self.character.receive_damage(raw);
        self.emit(CombatEvent::EnemyAttack { damage });

        let amount = self.enemy.regenerate(dice);
        if amount > 0 {
            self.emit(CombatEvent::EnemyRegenerated { amount });
        }
    }

    fn run(mut self, dice: &mut impl Dice) -> EncounterResult {
        let name = self.character.name().to_string();
        let enemy_name = self.enemy.name().to_string();
        self.log.record(&format!(
            "{} engages a {} ({} HP)",
            name,
            enemy_name,
            self.enemy.current_hp()
        ));

        let mut rounds = 0;
        let outcome = loop {
            if !self.character.is_alive() {
                self.emit(CombatEvent::PlayerDefeated);
                break EncounterOutcome::Defeat;
            }
            if rounds >= MAX_ENCOUNTER_ROUNDS {
                self.emit(CombatEvent::TurnLimitReached { rounds });
                break EncounterOutcome::Stalemate;
            }
            rounds += 1;
            tracing::debug!(
                round = rounds,
                player_hp = self.character.current_hp(),
                enemy_hp = self.enemy.current_hp(),
                "round start"
            );

            if !self.player_turn(rounds, dice) {
                break EncounterOutcome::Fled;
            }
            if !self.enemy.is_alive() {
                break EncounterOutcome::Victory;
            }
            self.enemy_turn(dice);
        };

        let mut xp_gained = 0;
        let mut leveled_up = false;
        let mut loot = None;

        match outcome {
            EncounterOutcome::Victory => {
                xp_gained = self.enemy.xp_reward;
                self.emit(CombatEvent::EnemyDefeated { xp_gained });
                self.log.record(&format!(
                    "Victory: {} defeated the {} and gained {} XP",
                    name, enemy_name, xp_gained
                ));

                leveled_up = self.character.gain_experience(xp_gained);
                if leveled_up {
                    let level = self.character.level;
                    self.emit(CombatEvent::LevelUp { level });
                    self.log.record(&format!("{} reached level {}", name, level));
                }

                if let Some(item) = roll_loot(dice) {
                    self.character.add_item(item);
                    self.emit(CombatEvent::LootFound {
                        item: item.to_string(),
                    });
                    loot = Some(item.to_string());
                }
            }
            EncounterOutcome::Defeat => {
                self.log.record(&format!("Defeat: {} was defeated by the {}", name, enemy_name));
            }
            EncounterOutcome::Fled => {
                self.log.record(&format!("Fled: {} escaped from the {}", name, enemy_name));
            }
            EncounterOutcome::Stalemate => {
                self.log.record(&format!(
                    "Stalemate: {} and the {} still stand after {} rounds",
                    name, enemy_name, rounds
                ));
            }
        }

        EncounterResult {
            outcome,
            enemy_kind: self.enemy.kind,
            xp_gained,
            leveled_up,
            rounds,
            loot,
            events: self.events,
        }
    }
}

/// Fights `enemy` until one side falls, the player flees, or the round cap.
///
/// Each round the player acts first; a surviving enemy then attacks and, if it
/// is a boss, may regenerate. Victory grants the enemy's XP and a loot roll.
pub fn run_encounter(
    character: &mut Character,
    enemy: Enemy,
    controller: &mut impl TurnController,
    log: &mut impl EventSink,
    dice: &mut impl Dice,
) -> EncounterResult {
    Encounter {
        character,
        enemy,
        controller,
        log,
        events: Vec::new(),
    }
    .run(dice)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::CharacterClass;
    use crate::core::ScriptedDice;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_goblin_hit_ignores_player_defense() {
        let mut warrior = Character::new("Aria", CharacterClass::Warrior);
        let mut controller =
            ScriptedController::new(vec![PlayerAction::Attack], PlayerAction::Flee);
        // Warrior hits for 12 (11 after defense), goblin rolls 3
        let mut dice = ScriptedDice::new().with_uniforms(&[1.0, 1.0]);
        let mut log: Vec<String> = Vec::new();

        let result = run_encounter(
            &mut warrior,
            Enemy::new(EnemyKind::Goblin),
            &mut controller,
            &mut log,
            &mut dice,
        );

        assert_eq!(warrior.current_hp(), 147);
        assert_eq!(result.outcome, EncounterOutcome::Fled);
        assert_eq!(result.rounds, 2);
        assert_eq!(result.xp_gained, 0);
        assert_eq!(
            &result.events[..2],
            &[
                CombatEvent::PlayerAttack { damage: 11 },
                CombatEvent::EnemyAttack { damage: 3 }
            ]
        );
    }

    #[test]
    fn test_victory_awards_xp_and_loot() {
        let mut warrior = Character::new("Aria", CharacterClass::Warrior);
        let mut controller = ScriptedController::always(PlayerAction::Attack);
        // 12*1.3 = 15 -> 14 after defense, goblin dies in one hit
        let mut dice = ScriptedDice::new()
            .with_uniforms(&[1.3])
            .with_chances(&[true]);
        let mut log: Vec<String> = Vec::new();

        let result = run_encounter(
            &mut warrior,
            Enemy::new(EnemyKind::Goblin),
            &mut controller,
            &mut log,
            &mut dice,
        );

        assert!(result.victory());
        assert_eq!(result.rounds, 1);
        assert_eq!(result.xp_gained, 30);
        assert!(!result.leveled_up);
        assert_eq!(result.loot.as_deref(), Some(ITEM_POTION));
        assert_eq!(warrior.experience, 30);
        assert_eq!(warrior.current_hp(), 150);
        assert_eq!(warrior.inventory, vec![ITEM_POTION.to_string()]);
        assert!(log.iter().any(|l| l.contains("Aria") && l.contains("Victory")));
    }

    #[test]
    fn test_victory_can_level_up() {
        let mut mage = Character::new("Merlin", CharacterClass::Mage);
        mage.experience = 90;
        let mut controller = ScriptedController::always(PlayerAction::Special);
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let mut log: Vec<String> = Vec::new();

        let result = run_encounter(
            &mut mage,
            Enemy::new(EnemyKind::Goblin),
            &mut controller,
            &mut log,
            &mut rng,
        );

        assert!(result.victory());
        assert!(result.leveled_up);
        assert_eq!(mage.level, 2);
        assert!(result.events.contains(&CombatEvent::LevelUp { level: 2 }));
        assert!(log.iter().any(|l| l.contains("Merlin reached level 2")));
    }

    #[test]
    fn test_defeat_when_player_falls() {
        let mut mage = Character::new("Merlin", CharacterClass::Mage);
        mage.vitals.receive_damage(75);
        let mut controller = ScriptedController::always(PlayerAction::Attack);
        // Mage hits the orc for 8 - 4 = 4, orc hits for 7
        let mut dice = ScriptedDice::new().with_uniforms(&[1.0, 1.0]);
        let mut log: Vec<String> = Vec::new();

        let result = run_encounter(
            &mut mage,
            Enemy::new(EnemyKind::Orc),
            &mut controller,
            &mut log,
            &mut dice,
        );

        assert_eq!(result.outcome, EncounterOutcome::Defeat);
        assert!(!result.victory());
        assert_eq!(result.xp_gained, 0);
        assert_eq!(mage.current_hp(), 0);
        assert_eq!(result.events.last(), Some(&CombatEvent::PlayerDefeated));
        assert!(log.iter().any(|l| l.contains("Defeat") && l.contains("Merlin")));
    }

    #[test]
    fn test_defeated_character_cannot_fight() {
        let mut archer = Character::new("Robin", CharacterClass::Archer);
        archer.vitals.receive_damage(1000);
        let mut controller = ScriptedController::always(PlayerAction::Attack);
        let mut dice = ScriptedDice::new();
        let mut log: Vec<String> = Vec::new();

        let result = run_encounter(
            &mut archer,
            Enemy::new(EnemyKind::Goblin),
            &mut controller,
            &mut log,
            &mut dice,
        );

        assert_eq!(result.outcome, EncounterOutcome::Defeat);
        assert_eq!(result.rounds, 0);
    }

    #[test]
    fn test_special_without_mana_spends_turn() {
        let mut warrior = Character::new("Aria", CharacterClass::Warrior);
        warrior.mana = 0;
        let mut controller =
            ScriptedController::new(vec![PlayerAction::Special], PlayerAction::Flee);
        let mut dice = ScriptedDice::new().with_uniforms(&[1.0]);
        let mut log: Vec<String> = Vec::new();

        let result = run_encounter(
            &mut warrior,
            Enemy::new(EnemyKind::Goblin),
            &mut controller,
            &mut log,
            &mut dice,
        );

        assert_eq!(
            result.events[0],
            CombatEvent::NotEnoughMana {
                ability: "Devastating Blow",
                cost: 15
            }
        );
        assert_eq!(result.events[1], CombatEvent::EnemyAttack { damage: 3 });
        assert_eq!(warrior.mana, 0);
    }

    #[test]
    fn test_using_item_in_combat() {
        let mut archer = Character::new("Robin", CharacterClass::Archer);
        archer.vitals.receive_damage(50);
        archer.add_item(ITEM_POTION);
        let mut controller = ScriptedController::new(
            vec![
                PlayerAction::UseItem(ITEM_POTION.to_string()),
                PlayerAction::UseItem(ITEM_POTION.to_string()),
            ],
            PlayerAction::Flee,
        );
        let mut dice = ScriptedDice::new().with_uniforms(&[1.0, 1.0]);
        let mut log: Vec<String> = Vec::new();

        let result = run_encounter(
            &mut archer,
            Enemy::new(EnemyKind::Goblin),
            &mut controller,
            &mut log,
            &mut dice,
        );

        assert_eq!(
            result.events[0],
            CombatEvent::ItemUsed {
                item: ITEM_POTION.to_string()
            }
        );
        assert_eq!(
            result.events[2],
            CombatEvent::ItemUnavailable {
                item: ITEM_POTION.to_string()
            }
        );
        // 50 + 30 - 3 - 3
        assert_eq!(archer.current_hp(), 74);
    }

    #[test]
    fn test_boss_regenerates_on_its_turn() {
        let mut warrior = Character::new("Aria", CharacterClass::Warrior);
        let mut controller =
            ScriptedController::new(vec![PlayerAction::Attack], PlayerAction::Flee);
        // Warrior: 12 -> 6 after boss defense. Boss: no special, base 10, regen 5
        let mut dice = ScriptedDice::new()
            .with_uniforms(&[1.0, 1.0])
            .with_chances(&[false, true]);
        let mut log: Vec<String> = Vec::new();

        let result = run_encounter(
            &mut warrior,
            Enemy::new(EnemyKind::Boss),
            &mut controller,
            &mut log,
            &mut dice,
        );

        assert_eq!(
            &result.events[..3],
            &[
                CombatEvent::PlayerAttack { damage: 6 },
                CombatEvent::EnemyAttack { damage: 10 },
                CombatEvent::EnemyRegenerated { amount: 5 }
            ]
        );
        assert_eq!(warrior.current_hp(), 140);
    }

    #[test]
    fn test_stalemate_at_round_cap() {
        struct Idle;
        impl TurnController for Idle {
            fn choose_action(&mut self, _: &Character, _: &Enemy, _: u32) -> PlayerAction {
                PlayerAction::UseItem("nothing".to_string())
            }
        }

        let mut warrior = Character::new("Aria", CharacterClass::Warrior);
        warrior.vitals.raise_max_hp(10_000);
        warrior.vitals.restore_full();
        let mut dice = ScriptedDice::new();
        let mut log: Vec<String> = Vec::new();

        let result = run_encounter(
            &mut warrior,
            Enemy::new(EnemyKind::Goblin),
            &mut Idle,
            &mut log,
            &mut dice,
        );

        assert_eq!(result.outcome, EncounterOutcome::Stalemate);
        assert_eq!(result.rounds, MAX_ENCOUNTER_ROUNDS);
        assert!(warrior.is_alive());
    }

    #[test]
    fn test_controller_observes_every_event() {
        #[derive(Default)]
        struct Recorder {
            seen: Vec<CombatEvent>,
        }
        impl TurnController for Recorder {
            fn choose_action(&mut self, _: &Character, _: &Enemy, _: u32) -> PlayerAction {
                PlayerAction::Attack
            }
            fn observe(&mut self, event: &CombatEvent) {
                self.seen.push(event.clone());
            }
        }

        let mut warrior = Character::new("Aria", CharacterClass::Warrior);
        let mut recorder = Recorder::default();
        let mut rng = ChaCha8Rng::seed_from_u64(17);
        let mut log: Vec<String> = Vec::new();

        let result = run_encounter(
            &mut warrior,
            Enemy::new(EnemyKind::Wolf),
            &mut recorder,
            &mut log,
            &mut rng,
        );

        assert_eq!(recorder.seen, result.events);
    }

    #[test]
    fn test_roll_loot_table() {
        let mut dice = ScriptedDice::new().with_chances(&[true]);
        assert_eq!(roll_loot(&mut dice), Some(ITEM_POTION));
        let mut dice = ScriptedDice::new().with_chances(&[false, true]);
        assert_eq!(roll_loot(&mut dice), Some(ITEM_MANA_POTION));
        let mut dice = ScriptedDice::new().with_chances(&[false, false]);
        assert_eq!(roll_loot(&mut dice), None);
    }

    fn opening_volley(fighter: &mut impl Fighter, dice: &mut impl Dice) -> (u32, u32) {
        (fighter.attack(dice), fighter.special_ability(dice))
    }

    #[test]
    fn test_characters_and_enemies_share_fighter_moves() {
        let mut mage = Character::new("Merlin", CharacterClass::Mage);
        let mut dice = ScriptedDice::new().with_uniforms(&[1.0, 2.0]);
        assert_eq!(opening_volley(&mut mage, &mut dice), (8, 16));
        assert_eq!(mage.mana, 80);

        let mut boss = Enemy::new(EnemyKind::Boss);
        let mut dice = ScriptedDice::new().with_uniforms(&[1.0, 2.0]);
        assert_eq!(opening_volley(&mut boss, &mut dice), (10, 20));
        assert_eq!(boss.mana, 30);

        let mut goblin = Enemy::new(EnemyKind::Goblin);
        let mut dice = ScriptedDice::new().with_uniforms(&[1.0]);
        assert_eq!(opening_volley(&mut goblin, &mut dice), (3, 0));
    }
}
