//! UI-agnostic parsing of typed menu and combat input.

use crate::character::{Character, CharacterClass};
use crate::combat::PlayerAction;

/// Main menu entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    CreateCharacter,
    StartMission,
    Status,
    UseItem,
    Save,
    Load,
    Quit,
    /// Anything unrecognised
    Other,
}

/// What the player typed at the combat prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CombatInput {
    Attack,
    Special,
    /// Open the item picker
    Item,
    Flee,
    Other,
}

/// Classes offered at creation, in menu order.
pub const PLAYABLE_CLASSES: [CharacterClass; 3] = [
    CharacterClass::Warrior,
    CharacterClass::Mage,
    CharacterClass::Archer,
];

pub fn parse_menu_choice(input: &str) -> MenuChoice {
    match input.trim().to_lowercase().as_str() {
        "1" | "c" | "create" => MenuChoice::CreateCharacter,
        "2" | "m" | "mission" => MenuChoice::StartMission,
        "3" | "s" | "status" => MenuChoice::Status,
        "4" | "i" | "item" => MenuChoice::UseItem,
        "5" | "save" => MenuChoice::Save,
        "6" | "l" | "load" => MenuChoice::Load,
        "7" | "q" | "quit" | "exit" => MenuChoice::Quit,
        _ => MenuChoice::Other,
    }
}

/// Number from [`PLAYABLE_CLASSES`] or a class name. Anything else picks Warrior.
pub fn parse_class_choice(input: &str) -> CharacterClass {
    let trimmed = input.trim();
    if let Ok(n) = trimmed.parse::<usize>() {
        return n
            .checked_sub(1)
            .and_then(|i| PLAYABLE_CLASSES.get(i).copied())
            .unwrap_or(CharacterClass::Warrior);
    }
    match CharacterClass::from_name(trimmed) {
        CharacterClass::Generic => CharacterClass::Warrior,
        class => class,
    }
}

pub fn parse_combat_input(input: &str) -> CombatInput {
    match input.trim().to_lowercase().as_str() {
        "1" | "a" | "attack" => CombatInput::Attack,
        "2" | "s" | "special" => CombatInput::Special,
        "3" | "i" | "item" => CombatInput::Item,
        "4" | "f" | "flee" | "run" => CombatInput::Flee,
        _ => CombatInput::Other,
    }
}

/// Distinct items in the order they were picked up.
pub fn item_choices(character: &Character) -> Vec<String> {
    let mut items: Vec<String> = Vec::new();
    for item in &character.inventory {
        if !items.contains(item) {
            items.push(item.clone());
        }
    }
    items
}

/// 1-based index into [`item_choices`], or an item name.
pub fn parse_item_choice(input: &str, choices: &[String]) -> Option<String> {
    let trimmed = input.trim();
    if let Ok(n) = trimmed.parse::<usize>() {
        return n.checked_sub(1).and_then(|i| choices.get(i)).cloned();
    }
    choices
        .iter()
        .find(|item| item.eq_ignore_ascii_case(trimmed))
        .cloned()
}

impl CombatInput {
    /// Actions that need no further input.
    pub fn action(self) -> Option<PlayerAction> {
        match self {
            CombatInput::Attack => Some(PlayerAction::Attack),
            CombatInput::Special => Some(PlayerAction::Special),
            CombatInput::Flee => Some(PlayerAction::Flee),
            CombatInput::Item | CombatInput::Other => None,
        }
    }
}
