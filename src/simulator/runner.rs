//! Main simulation runner driving real missions with the AutoPilot.

use super::config::SimConfig;
use super::report::SimReport;
use crate::character::Character;
use crate::combat::{AutoPilot, EncounterOutcome, EnemyKind};
use crate::core::Dice;
use crate::mission::Mission;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashMap;

/// Outcome of one simulated character's mission chain.
#[derive(Debug, Clone, Default)]
pub struct RunStats {
    pub missions_played: u32,
    pub victories: u32,
    pub defeats: u32,
    pub fled: u32,
    pub stalemates: u32,
    pub final_level: u32,
    pub total_rounds: u64,
    pub potions_found: u32,
    /// Per enemy kind: (encounters, victories)
    pub by_enemy: HashMap<EnemyKind, (u32, u32)>,
}

impl RunStats {
    /// Finished every mission without being defeated.
    pub fn survived(&self) -> bool {
        self.defeats == 0
    }
}

/// Run the full simulation and return a report.
pub fn run_simulation(config: &SimConfig) -> SimReport {
    let mut all_runs = Vec::with_capacity(config.num_runs as usize);

    for run_idx in 0..config.num_runs {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(run_idx as u64)),
            None => StdRng::from_entropy(),
        };

        let run = simulate_single_run(config, &mut rng);
        if config.verbosity >= 2 {
            println!(
                "Run {}/{} - Level {}, Missions {}, Wins {}, {}",
                run_idx + 1,
                config.num_runs,
                run.final_level,
                run.missions_played,
                run.victories,
                if run.survived() { "survived" } else { "defeated" }
            );
        }
        all_runs.push(run);
    }

    SimReport::from_runs(config, all_runs)
}

/// Raises a fresh character to `level` by feeding it exactly the XP it needs.
fn raise_to_level(character: &mut Character, level: u32) {
    while character.level < level {
        let needed = character.experience_remaining();
        character.gain_experience(needed);
    }
}

/// Plays one character through up to `missions_per_run` missions.
pub fn simulate_single_run(config: &SimConfig, dice: &mut impl Dice) -> RunStats {
    let mut character = Character::new("Simulated", config.class);
    raise_to_level(&mut character, config.starting_level);

    let mut stats = RunStats::default();
    let mut log: Vec<String> = Vec::new();

    for _ in 0..config.missions_per_run {
        let mission = Mission::generate(character.level, dice);
        let result = mission.run(&mut character, &mut AutoPilot, &mut log, dice);
        log.clear();

        stats.missions_played += 1;
        stats.total_rounds += result.rounds as u64;
        if result.loot.is_some() {
            stats.potions_found += 1;
        }
        let entry = stats.by_enemy.entry(result.enemy_kind).or_insert((0, 0));
        entry.0 += 1;

        match result.outcome {
            EncounterOutcome::Victory => {
                stats.victories += 1;
                entry.1 += 1;
            }
            EncounterOutcome::Defeat => {
                stats.defeats += 1;
                break;
            }
            EncounterOutcome::Fled => stats.fled += 1,
            EncounterOutcome::Stalemate => stats.stalemates += 1,
        }
    }

    tracing::debug!(
        level = character.level,
        missions = stats.missions_played,
        victories = stats.victories,
        "simulated run finished"
    );
    stats.final_level = character.level;
    stats
}
