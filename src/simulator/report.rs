//! Simulation report generation.

use super::config::SimConfig;
use super::runner::RunStats;
use crate::character::CharacterClass;
use crate::combat::EnemyKind;
use serde::Serialize;
use std::collections::BTreeMap;

/// Encounters and wins against one enemy kind across all runs.
#[derive(Debug, Clone, Default, Serialize)]
pub struct KindStats {
    pub encounters: u32,
    pub victories: u32,
}

impl KindStats {
    pub fn win_rate(&self) -> f64 {
        if self.encounters == 0 {
            0.0
        } else {
            self.victories as f64 / self.encounters as f64
        }
    }
}

/// Aggregated results from multiple simulation runs.
#[derive(Debug, Clone, Serialize)]
pub struct SimReport {
    pub class: CharacterClass,
    pub starting_level: u32,
    pub missions_per_run: u32,
    pub num_runs: u32,
    pub runs_survived: u32,

    pub avg_missions_played: f64,
    pub avg_victories: f64,
    pub avg_final_level: f64,
    pub avg_rounds_per_mission: f64,
    pub mission_win_rate: f64,
    pub total_fled: u32,
    pub total_stalemates: u32,
    pub total_potions_found: u32,

    /// Runs per final level
    pub level_distribution: BTreeMap<u32, u32>,
    /// Keyed by enemy name so the JSON stays readable
    pub by_enemy: BTreeMap<String, KindStats>,
}

impl SimReport {
    pub fn from_runs(config: &SimConfig, runs: Vec<RunStats>) -> Self {
        let num_runs = runs.len() as u32;
        let divisor = num_runs.max(1) as f64;
        let runs_survived = runs.iter().filter(|r| r.survived()).count() as u32;

        let total_missions: u32 = runs.iter().map(|r| r.missions_played).sum();
        let total_victories: u32 = runs.iter().map(|r| r.victories).sum();
        let total_rounds: u64 = runs.iter().map(|r| r.total_rounds).sum();

        let mut level_distribution = BTreeMap::new();
        let mut by_enemy: BTreeMap<String, KindStats> = BTreeMap::new();
        for run in &runs {
            *level_distribution.entry(run.final_level).or_insert(0) += 1;
            for (kind, (encounters, victories)) in &run.by_enemy {
                let entry = by_enemy.entry(kind.name().to_string()).or_default();
                entry.encounters += encounters;
                entry.victories += victories;
            }
        }

        Self {
            class: config.class,
            starting_level: config.starting_level,
            missions_per_run: config.missions_per_run,
            num_runs,
            runs_survived,
            avg_missions_played: total_missions as f64 / divisor,
            avg_victories: total_victories as f64 / divisor,
            avg_final_level: runs.iter().map(|r| r.final_level as f64).sum::<f64>() / divisor,
            avg_rounds_per_mission: total_rounds as f64 / total_missions.max(1) as f64,
            mission_win_rate: total_victories as f64 / total_missions.max(1) as f64,
            total_fled: runs.iter().map(|r| r.fled).sum(),
            total_stalemates: runs.iter().map(|r| r.stalemates).sum(),
            total_potions_found: runs.iter().map(|r| r.potions_found).sum(),
            level_distribution,
            by_enemy,
        }
    }

    pub fn survival_rate(&self) -> f64 {
        self.runs_survived as f64 / self.num_runs.max(1) as f64
    }

    /// Generate a text report.
    pub fn to_text(&self) -> String {
        let mut report = String::new();

        report.push_str("═══════════════════════════════════════════════════════════════\n");
        report.push_str("                    SIMULATION REPORT\n");
        report.push_str("═══════════════════════════════════════════════════════════════\n\n");

        report.push_str(&format!(
            "Class: {}  Starting level: {}  Missions per run: {}\n",
            self.class, self.starting_level, self.missions_per_run
        ));
        report.push_str(&format!(
            "Runs: {} total, {} survived ({:.1}%)\n\n",
            self.num_runs,
            self.runs_survived,
            self.survival_rate() * 100.0
        ));

        report.push_str("── PROGRESSION ──────────────────────────────────────────────────\n");
        report.push_str(&format!(
            "  Avg Missions Played: {:.1}\n",
            self.avg_missions_played
        ));
        report.push_str(&format!("  Avg Victories:       {:.1}\n", self.avg_victories));
        report.push_str(&format!("  Avg Final Level:     {:.1}\n", self.avg_final_level));
        report.push_str(&format!(
            "  Avg Rounds/Mission:  {:.1}\n",
            self.avg_rounds_per_mission
        ));
        report.push_str(&format!(
            "  Mission Win Rate:    {:.1}%\n",
            self.mission_win_rate * 100.0
        ));
        report.push_str(&format!(
            "  Fled / Stalemates:   {} / {}\n",
            self.total_fled, self.total_stalemates
        ));
        report.push_str(&format!(
            "  Potions Found:       {}\n\n",
            self.total_potions_found
        ));

        report.push_str("── ENEMIES ──────────────────────────────────────────────────────\n");
        report.push_str("  Enemy    Fights    Wins    Win Rate\n");
        for kind in EnemyKind::all() {
            if let Some(stats) = self.by_enemy.get(kind.name()) {
                report.push_str(&format!(
                    "  {:<7} {:7} {:7}    {:5.1}%\n",
                    kind.name(),
                    stats.encounters,
                    stats.victories,
                    stats.win_rate() * 100.0
                ));
            }
        }
        report.push('\n');

        report.push_str("── FINAL LEVEL ──────────────────────────────────────────────────\n");
        for (level, count) in &self.level_distribution {
            let pct = (*count as f64 / self.num_runs.max(1) as f64) * 100.0;
            let bar = "█".repeat((pct / 5.0) as usize);
            report.push_str(&format!("  Level {:2}: {:>5.1}% {}\n", level, pct, bar));
        }

        report.push_str("\n═══════════════════════════════════════════════════════════════\n");
        report
    }

    /// Generate a JSON report for further analysis.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}
