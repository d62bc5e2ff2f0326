use quest_rpg::character::SaveManager;
use quest_rpg::ui::{Console, Menu};
use quest_rpg::utils::build_info;
use quest_rpg::utils::event_log::EventLog;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Paths overridden on the command line.
#[derive(Debug, Default, PartialEq)]
struct CliOptions {
    save_path: Option<PathBuf>,
    log_path: Option<PathBuf>,
}

fn main() -> io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("QUEST_RPG_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();
    let options = match parse_args(&args) {
        Ok(CliCommand::Play(options)) => options,
        Ok(CliCommand::Version) => {
            println!("{}", build_info::version_string());
            return Ok(());
        }
        Ok(CliCommand::Help) => {
            print_help();
            return Ok(());
        }
        Err(message) => {
            eprintln!("{}", message);
            eprintln!("Run 'quest-rpg --help' for usage.");
            std::process::exit(1);
        }
    };

    let saves = match options.save_path {
        Some(path) => SaveManager::with_path(path),
        None => SaveManager::new()?,
    };
    let log = match options.log_path {
        Some(path) => EventLog::with_path(path)?,
        None => EventLog::new()?,
    };
    tracing::info!(save = %saves.path().display(), log = %log.path().display(), "starting");

    let stdin = io::stdin();
    let console = Console::new(stdin.lock(), io::stdout());
    let mut menu = Menu::new(console, saves, log, rand::thread_rng());
    menu.run();

    Ok(())
}

/// What the command line asked for.
#[derive(Debug, PartialEq)]
enum CliCommand {
    Play(CliOptions),
    Version,
    Help,
}

fn parse_args(args: &[String]) -> Result<CliCommand, String> {
    let mut options = CliOptions::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            flag @ ("--save" | "--log") => {
                let Some(value) = args.get(i + 1) else {
                    return Err(format!("Missing path after {}", flag));
                };
                let path = Some(PathBuf::from(value));
                if flag == "--save" {
                    options.save_path = path;
                } else {
                    options.log_path = path;
                }
                i += 1;
            }
            "--version" | "-v" => return Ok(CliCommand::Version),
            "--help" | "-h" => return Ok(CliCommand::Help),
            other => return Err(format!("Unknown option: {}", other)),
        }
        i += 1;
    }

    Ok(CliCommand::Play(options))
}

fn print_help() {
    println!("Quest RPG - Turn-Based Text RPG\n");
    println!("Usage: quest-rpg [options]\n");
    println!("Options:");
    println!("  --save <PATH>  Save file (default: ~/.quest-rpg/save.json)");
    println!("  --log <PATH>   Event log (default: ~/.quest-rpg/quest.log)");
    println!("  --version      Show version information");
    println!("  --help         Show this help message");
    println!();
    println!("Set QUEST_RPG_LOG=debug for diagnostic output on stderr.");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        std::iter::once("quest-rpg")
            .chain(list.iter().copied())
            .map(String::from)
            .collect()
    }

    #[test]
    fn test_no_args_plays_with_defaults() {
        assert_eq!(
            parse_args(&args(&[])),
            Ok(CliCommand::Play(CliOptions::default()))
        );
    }

    #[test]
    fn test_save_and_log_paths() {
        let parsed = parse_args(&args(&["--save", "a.json", "--log", "b.log"]));
        assert_eq!(
            parsed,
            Ok(CliCommand::Play(CliOptions {
                save_path: Some(PathBuf::from("a.json")),
                log_path: Some(PathBuf::from("b.log")),
            }))
        );
    }

    #[test]
    fn test_missing_path_is_an_error() {
        assert_eq!(
            parse_args(&args(&["--save"])),
            Err("Missing path after --save".to_string())
        );
        assert_eq!(
            parse_args(&args(&["--save", "a.json", "--log"])),
            Err("Missing path after --log".to_string())
        );
    }

    #[test]
    fn test_version_help_and_unknown() {
        assert_eq!(parse_args(&args(&["-v"])), Ok(CliCommand::Version));
        assert_eq!(parse_args(&args(&["--help"])), Ok(CliCommand::Help));
        assert_eq!(
            parse_args(&args(&["--turbo"])),
            Err("Unknown option: --turbo".to_string())
        );
    }
}
