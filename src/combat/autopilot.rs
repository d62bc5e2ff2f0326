//! Automatic turn controller used by the simulator and the menu's auto-battle.

use super::logic::{PlayerAction, TurnController};
use super::types::Enemy;
use crate::character::Character;
use crate::core::constants::*;
use crate::core::Combatant;

/// Simple survival-first policy:
/// heal when low, refill mana when the special is unaffordable, otherwise
/// use the special if possible and fall back to a basic attack. Never flees.
#[derive(Debug, Clone, Default)]
pub struct AutoPilot;

impl TurnController for AutoPilot {
    fn choose_action(
        &mut self,
        character: &Character,
        _enemy: &Enemy,
        _round: u32,
    ) -> PlayerAction {
        let hp_percent = character.current_hp() as u64 * 100 / character.max_hp().max(1) as u64;

        if hp_percent < AUTOPILOT_POTION_HP_PERCENT as u64 && character.has_item(ITEM_POTION) {
            return PlayerAction::UseItem(ITEM_POTION.to_string());
        }
        if character.can_use_special() {
            return PlayerAction::Special;
        }
        if character.has_item(ITEM_MANA_POTION) && character.mana < character.max_mana {
            return PlayerAction::UseItem(ITEM_MANA_POTION.to_string());
        }
        PlayerAction::Attack
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::CharacterClass;
    use crate::combat::EnemyKind;
    use crate::core::Vitals;

    fn choose(character: &Character) -> PlayerAction {
        AutoPilot.choose_action(character, &Enemy::new(EnemyKind::Orc), 1)
    }

    #[test]
    fn test_prefers_special_when_affordable() {
        let warrior = Character::new("Aria", CharacterClass::Warrior);
        assert_eq!(choose(&warrior), PlayerAction::Special);
    }

    #[test]
    fn test_attacks_when_out_of_mana() {
        let mut warrior = Character::new("Aria", CharacterClass::Warrior);
        warrior.mana = 0;
        assert_eq!(choose(&warrior), PlayerAction::Attack);
    }

    #[test]
    fn test_drinks_potion_when_low() {
        let mut mage = Character::new("Merlin", CharacterClass::Mage);
        mage.add_item(ITEM_POTION);
        mage.receive_damage(60);
        assert_eq!(choose(&mage), PlayerAction::UseItem(ITEM_POTION.to_string()));
    }

    #[test]
    fn test_low_without_potion_keeps_fighting() {
        let mut mage = Character::new("Merlin", CharacterClass::Mage);
        mage.receive_damage(60);
        assert_eq!(choose(&mage), PlayerAction::Special);
    }

    #[test]
    fn test_refills_mana_before_attacking() {
        let mut archer = Character::new("Robin", CharacterClass::Archer);
        archer.mana = 5;
        archer.add_item(ITEM_MANA_POTION);
        assert_eq!(
            choose(&archer),
            PlayerAction::UseItem(ITEM_MANA_POTION.to_string())
        );
    }

    #[test]
    fn test_low_health_check_handles_huge_hp() {
        let mut warrior = Character::new("Aria", CharacterClass::Warrior);
        warrior.vitals = Vitals::with_current("Aria", 10_000_000, 100_000_000);
        warrior.add_item(ITEM_POTION);
        assert_eq!(choose(&warrior), PlayerAction::UseItem(ITEM_POTION.to_string()));

        warrior.vitals = Vitals::with_current("Aria", 90_000_000, 100_000_000);
        assert_eq!(choose(&warrior), PlayerAction::Special);
    }
}
