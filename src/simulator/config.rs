//! Simulation configuration.

use crate::character::CharacterClass;

/// Configuration for a simulation run.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Number of simulated characters
    pub num_runs: u32,

    /// Class every simulated character is created with
    pub class: CharacterClass,

    /// Level the character is raised to before its first mission
    pub starting_level: u32,

    /// Missions attempted per run; a run ends early on defeat
    pub missions_per_run: u32,

    /// Random seed for reproducibility (None = random)
    pub seed: Option<u64>,

    /// Log verbosity (0 = silent, 1 = summary, 2 = per run)
    pub verbosity: u8,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_runs: 1000,
            class: CharacterClass::Warrior,
            starting_level: 1,
            missions_per_run: 20,
            seed: None,
            verbosity: 1,
        }
    }
}

impl SimConfig {
    /// Quick config for comparing one class at a given level
    pub fn class_balance_test(class: CharacterClass, starting_level: u32) -> Self {
        Self {
            num_runs: 200,
            class,
            starting_level,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SimConfig::default();
        assert_eq!(config.num_runs, 1000);
        assert_eq!(config.class, CharacterClass::Warrior);
        assert_eq!(config.starting_level, 1);
        assert!(config.seed.is_none());
    }

    #[test]
    fn test_class_balance_preset() {
        let config = SimConfig::class_balance_test(CharacterClass::Mage, 4);
        assert_eq!(config.num_runs, 200);
        assert_eq!(config.class, CharacterClass::Mage);
        assert_eq!(config.starting_level, 4);
        assert_eq!(config.missions_per_run, 20);
    }
}
