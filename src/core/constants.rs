// Health bar rendering
pub const HEALTH_BAR_WIDTH: u32 = 20;
pub const HEALTH_BAR_FILLED: char = '#';
pub const HEALTH_BAR_EMPTY: char = '-';

// XP and leveling
pub const STARTING_LEVEL: u32 = 1;
pub const STARTING_XP_THRESHOLD: u32 = 100;
// Threshold grows by 1.5x per level, kept as a ratio to stay in integer math
pub const XP_THRESHOLD_GROWTH_NUM: u64 = 3;
pub const XP_THRESHOLD_GROWTH_DEN: u64 = 2;
pub const LEVEL_UP_MAX_HP: u32 = 20;
pub const LEVEL_UP_BASE_DAMAGE: u32 = 2;
pub const LEVEL_UP_DEFENSE: u32 = 1;

// Consumables
pub const ITEM_POTION: &str = "potion";
pub const ITEM_MANA_POTION: &str = "mana potion";
pub const POTION_HEAL: u32 = 30;
pub const MANA_POTION_RESTORE: u32 = 25;

// Class base stats: (hp, mana, base_damage, defense)
pub const WARRIOR_STATS: (u32, u32, u32, u32) = (150, 30, 12, 8);
pub const MAGE_STATS: (u32, u32, u32, u32) = (80, 100, 8, 3);
pub const ARCHER_STATS: (u32, u32, u32, u32) = (100, 60, 11, 5);
pub const GENERIC_STATS: (u32, u32, u32, u32) = (100, 50, 10, 5);

// Basic attack multiplier ranges
pub const WARRIOR_ATTACK_RANGE: (f64, f64) = (0.9, 1.3);
pub const MAGE_ATTACK_RANGE: (f64, f64) = (0.85, 1.15);
pub const DEFAULT_ATTACK_RANGE: (f64, f64) = (0.8, 1.2);

// Special abilities: (mana_cost, low, high)
pub const WARRIOR_SPECIAL: (u32, f64, f64) = (15, 1.5, 2.0);
pub const MAGE_SPECIAL: (u32, f64, f64) = (20, 2.0, 2.5);
pub const ARCHER_SPECIAL: (u32, f64, f64) = (18, 1.4, 1.8);
pub const GENERIC_SPECIAL: (u32, f64, f64) = (20, 1.3, 1.7);
pub const ARCHER_CRIT_CHANCE: f64 = 0.3;
pub const ARCHER_CRIT_MULTIPLIER: f64 = 1.5;

// Enemy base stats: (hp, damage, xp_reward, defense)
pub const GOBLIN_STATS: (u32, u32, u32, u32) = (14, 3, 30, 1);
pub const WOLF_STATS: (u32, u32, u32, u32) = (25, 5, 50, 2);
pub const ORC_STATS: (u32, u32, u32, u32) = (40, 7, 80, 4);
pub const BOSS_STATS: (u32, u32, u32, u32) = (80, 10, 200, 6);
pub const BOSS_MANA: u32 = 50;

// Enemy attacks
pub const ENEMY_ATTACK_RANGE: (f64, f64) = (0.8, 1.2);
pub const WOLF_DOUBLE_STRIKE_CHANCE: f64 = 0.2;
pub const BOSS_SPECIAL_CHANCE: f64 = 0.3;
pub const BOSS_SPECIAL_MANA_COST: u32 = 20;
pub const BOSS_SPECIAL_RANGE: (f64, f64) = (2.0, 2.5);
pub const BOSS_REGEN_CHANCE: f64 = 0.2;
pub const BOSS_REGEN_AMOUNT: u32 = 5;

// Mission difficulty by character level
pub const EASY_MAX_LEVEL: u32 = 2;
pub const MEDIUM_MAX_LEVEL: u32 = 5;

// Enemy weights per difficulty: (goblin, wolf, orc, boss)
pub const EASY_ENEMY_WEIGHTS: [u32; 4] = [70, 30, 0, 0];
pub const MEDIUM_ENEMY_WEIGHTS: [u32; 4] = [20, 50, 30, 0];
pub const HARD_ENEMY_WEIGHTS: [u32; 4] = [0, 15, 55, 30];

// Encounter
pub const MAX_ENCOUNTER_ROUNDS: u32 = 100;
pub const POTION_DROP_CHANCE: f64 = 0.35;
pub const MANA_POTION_DROP_CHANCE: f64 = 0.15;

pub const MISSION_NAMES: [&str; 8] = [
    "Forest Encounter",
    "Dark Cavern",
    "Ancient Ruins",
    "Wizard's Tower",
    "Dragon's Lair",
    "Lost Temple",
    "Forbidden Forest",
    "Frozen Mountain",
];

// Persistence
pub const DATA_DIR_NAME: &str = ".quest-rpg";
pub const SAVE_FILE_NAME: &str = "save.json";
pub const LOG_FILE_NAME: &str = "quest.log";
pub const DEFAULT_CHARACTER_NAME: &str = "Hero";

// AutoPilot thresholds
pub const AUTOPILOT_POTION_HP_PERCENT: u32 = 35;
