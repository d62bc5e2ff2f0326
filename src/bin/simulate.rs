//! Game balance simulator CLI.
//!
//! Plays many AutoPilot-driven mission chains to analyze class balance.
//!
//! Usage:
//!   cargo run --bin simulate -- [OPTIONS]
//!
//! Examples:
//!   cargo run --bin simulate                      # 1000 Warrior runs from level 1
//!   cargo run --bin simulate -- -c mage -l 4     # Mages starting at level 4
//!   cargo run --bin simulate -- --seed 42        # Reproducible run

use quest_rpg::character::CharacterClass;
use quest_rpg::simulator::{run_simulation, SimConfig};
use std::env;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("QUEST_RPG_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();
    let (config, write_json) = parse_args(&args);

    println!("╔═══════════════════════════════════════════════════════════════╗");
    println!("║              QUEST RPG BALANCE SIMULATOR                      ║");
    println!("╚═══════════════════════════════════════════════════════════════╝");
    println!();
    println!("Configuration:");
    println!("  Runs:           {}", config.num_runs);
    println!("  Class:          {}", config.class);
    println!("  Starting Level: {}", config.starting_level);
    println!("  Missions/Run:   {}", config.missions_per_run);
    if let Some(seed) = config.seed {
        println!("  Seed:           {}", seed);
    }
    println!();
    println!("Running simulation...");
    println!();

    let report = run_simulation(&config);

    println!("{}", report.to_text());

    if write_json {
        let filename = format!(
            "sim_report_{}.json",
            chrono::Utc::now().format("%Y%m%d_%H%M%S")
        );
        match std::fs::write(&filename, report.to_json()) {
            Ok(()) => println!("JSON report saved to: {}", filename),
            Err(e) => {
                eprintln!("Failed to write JSON report {}: {}", filename, e);
                std::process::exit(1);
            }
        }
    }
}

fn parse_args(args: &[String]) -> (SimConfig, bool) {
    let mut config = SimConfig::default();
    let mut write_json = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-n" | "--runs" => {
                if i + 1 < args.len() {
                    config.num_runs = args[i + 1].parse().unwrap_or(1000);
                    i += 1;
                }
            }
            "-c" | "--class" => {
                if i + 1 < args.len() {
                    config.class = CharacterClass::from_name(&args[i + 1]);
                    i += 1;
                }
            }
            "-l" | "--level" => {
                if i + 1 < args.len() {
                    config.starting_level = args[i + 1].parse::<u32>().unwrap_or(1).max(1);
                    i += 1;
                }
            }
            "-m" | "--missions" => {
                if i + 1 < args.len() {
                    config.missions_per_run = args[i + 1].parse().unwrap_or(20);
                    i += 1;
                }
            }
            "-s" | "--seed" => {
                if i + 1 < args.len() {
                    config.seed = args[i + 1].parse().ok();
                    i += 1;
                }
            }
            "-v" | "--verbose" => {
                config.verbosity = 2;
            }
            "--json" => {
                write_json = true;
            }
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            other => {
                eprintln!("Ignoring unknown option: {}", other);
            }
        }
        i += 1;
    }

    (config, write_json)
}

fn print_help() {
    println!("Quest RPG Balance Simulator");
    println!();
    println!("USAGE:");
    println!("    cargo run --bin simulate -- [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    -n, --runs <N>       Number of simulated characters (default: 1000)");
    println!("    -c, --class <C>      warrior, mage, archer or generic (default: warrior)");
    println!("    -l, --level <L>      Starting level (default: 1)");
    println!("    -m, --missions <M>   Missions per run (default: 20)");
    println!("    -s, --seed <S>       Random seed for reproducibility");
    println!("    -v, --verbose        Print every run");
    println!("    --json               Save JSON report");
    println!("    -h, --help           Show this help");
    println!();
    println!("EXAMPLES:");
    println!("    cargo run --bin simulate                      # Default run");
    println!("    cargo run --bin simulate -- -c archer -n 200  # 200 archers");
    println!("    cargo run --bin simulate -- --seed 42         # Reproducible");
}
