//! Message formatting for the text front end.

use super::input::item_choices;
use crate::character::Character;
use crate::combat::{CombatEvent, EncounterOutcome, EncounterResult, Enemy};
use crate::core::constants::{ITEM_MANA_POTION, ITEM_POTION, MANA_POTION_RESTORE, POTION_HEAL};
use crate::core::Combatant;

/// `potion x2, mana potion`, or `empty`.
pub fn inventory_line(character: &Character) -> String {
    let items = item_choices(character);
    if items.is_empty() {
        return "empty".to_string();
    }
    items
        .iter()
        .map(|item| {
            let count = character.inventory.iter().filter(|i| *i == item).count();
            if count > 1 {
                format!("{} x{}", item, count)
            } else {
                item.clone()
            }
        })
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn character_sheet(character: &Character) -> String {
    let mut sheet = String::new();
    sheet.push_str(&format!(
        "{} the {} (level {})\n",
        character.name(),
        character.class,
        character.level
    ));
    sheet.push_str(&format!(
        "  HP      [{}] {}/{}\n",
        character.health_bar(),
        character.current_hp(),
        character.max_hp()
    ));
    sheet.push_str(&format!(
        "  Mana    {}/{}\n",
        character.mana, character.max_mana
    ));
    sheet.push_str(&format!(
        "  XP      {}/{}\n",
        character.experience, character.experience_to_next_level
    ));
    sheet.push_str(&format!(
        "  Damage  {}   Defense {}\n",
        character.base_damage, character.defense
    ));
    sheet.push_str(&format!(
        "  Special {} ({} MP)\n",
        character.special_ability_name(),
        character.special_ability_cost()
    ));
    sheet.push_str(&format!("  Items   {}", inventory_line(character)));
    sheet
}

/// One-line combat status shown before each player turn.
pub fn combat_status(character: &Character, enemy: &Enemy) -> String {
    format!(
        "{} [{}] {}/{} HP {}/{} MP  vs  {} [{}] {}/{} HP",
        character.name(),
        character.health_bar(),
        character.current_hp(),
        character.max_hp(),
        character.mana,
        character.max_mana,
        enemy.name(),
        enemy.health_bar(),
        enemy.current_hp(),
        enemy.max_hp()
    )
}

pub fn item_effect(item: &str) -> String {
    match item {
        ITEM_POTION => format!("You drink a potion and recover up to {} HP.", POTION_HEAL),
        ITEM_MANA_POTION => format!(
            "You drink a mana potion and recover up to {} mana.",
            MANA_POTION_RESTORE
        ),
        other => format!("You use the {}.", other),
    }
}

pub fn describe_event(event: &CombatEvent, enemy_name: &str) -> String {
    match event {
        CombatEvent::PlayerAttack { damage } => {
            format!("You attack the {} for {} damage.", enemy_name, damage)
        }
        CombatEvent::PlayerSpecial { ability, damage } => {
            format!("You use {} for {} damage!", ability, damage)
        }
        CombatEvent::NotEnoughMana { ability, cost } => format!(
            "Not enough mana for {} ({} MP needed). Your turn is lost.",
            ability, cost
        ),
        CombatEvent::ItemUsed { item } => item_effect(item),
        CombatEvent::ItemUnavailable { item } => {
            format!("You have no usable {}. Your turn is lost.", item)
        }
        CombatEvent::Fled => format!("You flee from the {}.", enemy_name),
        CombatEvent::EnemyAttack { damage } => {
            format!("The {} hits you for {} damage.", enemy_name, damage)
        }
        CombatEvent::EnemyRegenerated { amount } => {
            format!("The {} regenerates {} HP.", enemy_name, amount)
        }
        CombatEvent::EnemyDefeated { xp_gained } => {
            format!("The {} is defeated! +{} XP", enemy_name, xp_gained)
        }
        CombatEvent::PlayerDefeated => "You have been defeated...".to_string(),
        CombatEvent::LevelUp { level } => format!("Level up! You are now level {}.", level),
        CombatEvent::LootFound { item } => format!("You found a {}!", item),
        CombatEvent::TurnLimitReached { rounds } => format!(
            "After {} rounds neither side can go on. You withdraw.",
            rounds
        ),
    }
}

/// Closing line after an encounter.
pub fn encounter_summary(result: &EncounterResult) -> String {
    let enemy = result.enemy_kind.name();
    match result.outcome {
        EncounterOutcome::Victory => {
            let mut line = format!(
                "Mission complete: defeated the {} in {} rounds, +{} XP",
                enemy, result.rounds, result.xp_gained
            );
            if result.leveled_up {
                line.push_str(", level up");
            }
            if let Some(item) = &result.loot {
                line.push_str(&format!(", found a {}", item));
            }
            line
        }
        EncounterOutcome::Defeat => format!("Mission failed: you fell to the {}.", enemy),
        EncounterOutcome::Fled => format!("Mission abandoned: you fled from the {}.", enemy),
        EncounterOutcome::Stalemate => {
            format!("Mission abandoned: the {} outlasted you.", enemy)
        }
    }
}
