//! Integration test: experience, level-ups and threshold growth

use quest_rpg::character::{next_threshold, Character, CharacterClass};
use quest_rpg::core::Combatant;

#[test]
fn test_multi_threshold_gain() {
    let mut warrior = Character::new("Aria", CharacterClass::Warrior);

    // 100 for level 2, then 150 for level 3
    assert!(warrior.gain_experience(250));
    assert_eq!(warrior.level, 3);
    assert_eq!(warrior.experience, 0);
    assert_eq!(warrior.experience_to_next_level, 225);

    assert_eq!(warrior.max_hp(), 190);
    assert_eq!(warrior.current_hp(), 190);
    assert_eq!(warrior.base_damage, 16);
    assert_eq!(warrior.defense, 10);
}

#[test]
fn test_gain_below_threshold() {
    let mut mage = Character::new("Merlin", CharacterClass::Mage);
    assert!(!mage.gain_experience(99));
    assert_eq!(mage.level, 1);
    assert_eq!(mage.experience, 99);
    assert_eq!(mage.experience_remaining(), 1);

    assert!(mage.gain_experience(1));
    assert_eq!(mage.level, 2);
    assert_eq!(mage.experience, 0);
}

#[test]
fn test_level_up_heals_wounded_character() {
    let mut archer = Character::new("Robin", CharacterClass::Archer);
    archer.receive_damage(90);
    assert_eq!(archer.current_hp(), 10);

    archer.gain_experience(100);
    assert_eq!(archer.current_hp(), 120);
    assert_eq!(archer.max_hp(), 120);
}

#[test]
fn test_threshold_sequence() {
    let mut threshold = 100;
    let mut seen = Vec::new();
    for _ in 0..5 {
        seen.push(threshold);
        threshold = next_threshold(threshold);
    }
    assert_eq!(seen, vec![100, 150, 225, 337, 505]);
}

#[test]
fn test_leftover_experience_carries_over() {
    let mut warrior = Character::new("Aria", CharacterClass::Warrior);
    warrior.gain_experience(80);
    warrior.gain_experience(80);
    assert_eq!(warrior.level, 2);
    assert_eq!(warrior.experience, 60);
    assert_eq!(warrior.experience_to_next_level, 150);
}

#[test]
fn test_mana_is_not_refilled_on_level_up() {
    let mut mage = Character::new("Merlin", CharacterClass::Mage);
    mage.mana = 10;
    mage.gain_experience(100);
    assert_eq!(mage.mana, 10);
    assert_eq!(mage.max_mana, 100);
}
