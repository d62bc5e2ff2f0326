//! Main menu loop and the interactive combat controller.

use super::input::*;
use super::text::*;
use crate::character::{Character, SaveManager};
use crate::combat::{CombatEvent, EncounterOutcome, Enemy, PlayerAction, TurnController};
use crate::core::constants::DEFAULT_CHARACTER_NAME;
use crate::core::{Combatant, Dice};
use crate::mission::Mission;
use crate::utils::event_log::EventSink;
use std::io::{self, BufRead, Write};

/// Line-based terminal I/O. Write failures are logged and otherwise ignored.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn say(&mut self, text: &str) {
        if let Err(e) = writeln!(self.output, "{}", text) {
            tracing::warn!(error = %e, "failed to write to terminal");
        }
    }

    /// Prints `prompt` and reads one trimmed line. `None` on end of input.
    pub fn ask(&mut self, prompt: &str) -> Option<String> {
        let written = write!(self.output, "{}", prompt).and_then(|_| self.output.flush());
        if let Err(e) = written {
            tracing::warn!(error = %e, "failed to write prompt");
        }

        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) => None,
            Ok(_) => Some(line.trim().to_string()),
            Err(e) => {
                tracing::warn!(error = %e, "failed to read input");
                None
            }
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

/// Asks the player for each combat action. End of input means flee.
pub struct ConsoleController<'a, R, W> {
    console: &'a mut Console<R, W>,
    enemy_name: String,
}

impl<'a, R: BufRead, W: Write> ConsoleController<'a, R, W> {
    pub fn new(console: &'a mut Console<R, W>) -> Self {
        Self {
            console,
            enemy_name: "enemy".to_string(),
        }
    }

    fn choose_item(&mut self, character: &Character) -> Option<PlayerAction> {
        let choices = item_choices(character);
        if choices.is_empty() {
            self.console.say("Your bag is empty.");
            return None;
        }
        for (i, item) in choices.iter().enumerate() {
            self.console.say(&format!("  {}) {}", i + 1, item));
        }
        let line = self.console.ask("Item> ")?;
        match parse_item_choice(&line, &choices) {
            Some(item) => Some(PlayerAction::UseItem(item)),
            None => {
                self.console.say("No such item.");
                None
            }
        }
    }
}

impl<R: BufRead, W: Write> TurnController for ConsoleController<'_, R, W> {
    fn choose_action(&mut self, character: &Character, enemy: &Enemy, round: u32) -> PlayerAction {
        self.enemy_name = enemy.name().to_string();
        self.console.say("");
        self.console.say(&format!("-- Round {} --", round));
        self.console.say(&combat_status(character, enemy));
        self.console.say(&format!(
            "1) Attack  2) {} ({} MP)  3) Use item  4) Flee",
            character.special_ability_name(),
            character.special_ability_cost()
        ));

        loop {
            let Some(line) = self.console.ask("Action> ") else {
                return PlayerAction::Flee;
            };
            let input = parse_combat_input(&line);
            if let Some(action) = input.action() {
                return action;
            }
            if input == CombatInput::Item {
                if let Some(action) = self.choose_item(character) {
                    return action;
                }
                continue;
            }
            self.console.say("Choose 1-4.");
        }
    }

    fn observe(&mut self, event: &CombatEvent) {
        let line = describe_event(event, &self.enemy_name);
        self.console.say(&line);
    }
}

/// The game's main menu. Holds at most one character at a time.
pub struct Menu<R, W, L, D> {
    console: Console<R, W>,
    saves: SaveManager,
    log: L,
    dice: D,
    character: Option<Character>,
}

impl<R: BufRead, W: Write, L: EventSink, D: Dice> Menu<R, W, L, D> {
    pub fn new(console: Console<R, W>, saves: SaveManager, log: L, dice: D) -> Self {
        Self {
            console,
            saves,
            log,
            dice,
            character: None,
        }
    }

    pub fn character(&self) -> Option<&Character> {
        self.character.as_ref()
    }

    /// Runs until the player quits or input ends.
    pub fn run(&mut self) {
        self.console.say("=== Quest RPG ===");
        self.log.record("Game started");
        loop {
            self.print_menu();
            let Some(line) = self.console.ask("> ") else {
                break;
            };
            match parse_menu_choice(&line) {
                MenuChoice::CreateCharacter => self.create_character(),
                MenuChoice::StartMission => self.start_mission(),
                MenuChoice::Status => self.show_status(),
                MenuChoice::UseItem => self.use_item(),
                MenuChoice::Save => self.save(),
                MenuChoice::Load => self.load(),
                MenuChoice::Quit => break,
                MenuChoice::Other => self.console.say("Unknown option."),
            }
        }
        self.log.record("Game ended");
        self.console.say("Farewell, adventurer.");
    }

    pub fn into_parts(self) -> (Option<Character>, L, W) {
        (self.character, self.log, self.console.into_output())
    }

    fn print_menu(&mut self) {
        self.console.say("");
        self.console.say("1) Create character  2) Start mission  3) Status");
        self.console.say("4) Use item  5) Save  6) Load  7) Quit");
    }

    fn create_character(&mut self) {
        let name = match self.console.ask("Name: ") {
            Some(name) if !name.is_empty() => name,
            _ => DEFAULT_CHARACTER_NAME.to_string(),
        };
        for (i, class) in PLAYABLE_CLASSES.iter().enumerate() {
            self.console
                .say(&format!("  {}) {} - {}", i + 1, class, class.description()));
        }
        let class = parse_class_choice(&self.console.ask("Class: ").unwrap_or_default());

        let character = Character::new(name, class);
        self.log.record(&format!(
            "Created {} the {}",
            character.name(),
            character.class
        ));
        self.console.say(&character_sheet(&character));
        self.character = Some(character);
    }

    fn start_mission(&mut self) {
        let Some(character) = self.character.as_mut() else {
            self.console.say("Create or load a character first.");
            return;
        };
        if !character.is_alive() {
            self.console.say(&format!(
                "{} has fallen. Load a save or create a new character.",
                character.name()
            ));
            return;
        }

        let mission = Mission::generate(character.level, &mut self.dice);
        self.console.say(&format!(
            "Mission: {} [{}]",
            mission.name, mission.difficulty
        ));

        let mut controller = ConsoleController::new(&mut self.console);
        let result = mission.run(character, &mut controller, &mut self.log, &mut self.dice);

        self.console.say("");
        self.console.say(&encounter_summary(&result));
        if result.outcome == EncounterOutcome::Defeat {
            self.console
                .say("Your journey ends here. Load a save or create a new character.");
        }
    }

    fn show_status(&mut self) {
        match &self.character {
            Some(character) => {
                let sheet = character_sheet(character);
                self.console.say(&sheet);
            }
            None => self.console.say("No character yet."),
        }
    }

    fn use_item(&mut self) {
        let Some(character) = self.character.as_mut() else {
            self.console.say("No character yet.");
            return;
        };
        if !character.is_alive() {
            self.console.say("The fallen cannot drink potions.");
            return;
        }

        let choices = item_choices(character);
        if choices.is_empty() {
            self.console.say("Your bag is empty.");
            return;
        }
        for (i, item) in choices.iter().enumerate() {
            self.console.say(&format!("  {}) {}", i + 1, item));
        }
        let Some(item) = self
            .console
            .ask("Item> ")
            .and_then(|line| parse_item_choice(&line, &choices))
        else {
            self.console.say("No such item.");
            return;
        };

        if character.use_item(&item) {
            self.log
                .record(&format!("{} used a {}", character.name(), item));
            self.console.say(&item_effect(&item));
        } else {
            self.console.say(&format!("The {} cannot be used.", item));
        }
    }

    fn save(&mut self) {
        let Some(character) = &self.character else {
            self.console.say("Nothing to save yet.");
            return;
        };
        match self.saves.save(character) {
            Ok(()) => {
                self.log.record(&format!("Saved {}", character.name()));
                let path = self.saves.path().display().to_string();
                self.console.say(&format!("Saved to {}", path));
            }
            Err(e) => {
                tracing::warn!(error = %e, "save failed");
                self.console.say(&format!("Save failed: {}", e));
            }
        }
    }

    fn load(&mut self) {
        if !self.saves.save_exists() {
            self.console.say("No saved game found.");
            return;
        }
        match self.saves.load() {
            Ok(character) => {
                self.log.record(&format!(
                    "Loaded {} (level {})",
                    character.name(),
                    character.level
                ));
                self.console.say(&format!(
                    "Loaded {} the {} (level {})",
                    character.name(),
                    character.class,
                    character.level
                ));
                self.character = Some(character);
            }
            Err(e) => self.report_load_error(e),
        }
    }

    fn report_load_error(&mut self, e: io::Error) {
        tracing::warn!(error = %e, "load failed");
        self.console.say(&format!("Load failed: {}", e));
    }
}
