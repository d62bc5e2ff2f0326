//! Character snapshots and the JSON save file.
//!
//! The snapshot is a flat record. Every field is optional on the way in and
//! falls back to a class default on its own, so a damaged save still loads as
//! much of the character as it can.

use super::class::CharacterClass;
use super::types::Character;
use crate::core::constants::*;
use crate::core::{Combatant, Vitals};
use crate::utils::persistence;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use std::io;
use std::path::{Path, PathBuf};

/// Accepts any JSON value, keeping it only if it converts to `T`.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

/// On-disk form of a [`Character`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterSnapshot {
    #[serde(default, deserialize_with = "lenient")]
    pub name: Option<String>,
    #[serde(default, rename = "class", deserialize_with = "lenient")]
    pub class_name: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub current_health: Option<u32>,
    #[serde(default, deserialize_with = "lenient")]
    pub max_health: Option<u32>,
    #[serde(default, deserialize_with = "lenient")]
    pub level: Option<u32>,
    #[serde(default, deserialize_with = "lenient")]
    pub experience: Option<u32>,
    #[serde(default, deserialize_with = "lenient")]
    pub experience_to_next_level: Option<u32>,
    #[serde(default, deserialize_with = "lenient")]
    pub inventory: Option<Vec<String>>,
    #[serde(default, deserialize_with = "lenient")]
    pub mana: Option<u32>,
    #[serde(default, deserialize_with = "lenient")]
    pub max_mana: Option<u32>,
    #[serde(default, deserialize_with = "lenient")]
    pub base_damage: Option<u32>,
    #[serde(default, deserialize_with = "lenient")]
    pub defense: Option<u32>,
}

impl Character {
    pub fn snapshot(&self) -> CharacterSnapshot {
        CharacterSnapshot {
            name: Some(self.name().to_string()),
            class_name: Some(self.class.name().to_string()),
            current_health: Some(self.current_hp()),
            max_health: Some(self.max_hp()),
            level: Some(self.level),
            experience: Some(self.experience),
            experience_to_next_level: Some(self.experience_to_next_level),
            inventory: Some(self.inventory.clone()),
            mana: Some(self.mana),
            max_mana: Some(self.max_mana),
            base_damage: Some(self.base_damage),
            defense: Some(self.defense),
        }
    }

    /// Rebuilds a character, filling gaps from the class's base stats and
    /// clamping values back inside the character invariants.
    pub fn from_snapshot(snapshot: CharacterSnapshot) -> Character {
        let class = snapshot
            .class_name
            .as_deref()
            .map_or(CharacterClass::Warrior, CharacterClass::from_name);
        let base = class.base_stats();

        let name = snapshot
            .name
            .filter(|n| !n.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_CHARACTER_NAME.to_string());
        let max_hp = snapshot.max_health.unwrap_or(base.max_hp).max(1);
        let current_hp = snapshot.current_health.unwrap_or(max_hp);
        let max_mana = snapshot.max_mana.unwrap_or(base.max_mana).max(1);
        let mana = snapshot.mana.unwrap_or(max_mana).min(max_mana);

        Character {
            vitals: Vitals::with_current(name, current_hp, max_hp),
            class,
            level: snapshot.level.unwrap_or(STARTING_LEVEL).max(1),
            experience: snapshot.experience.unwrap_or(0),
            experience_to_next_level: snapshot
                .experience_to_next_level
                .unwrap_or(STARTING_XP_THRESHOLD)
                .max(1),
            mana,
            max_mana,
            base_damage: snapshot.base_damage.unwrap_or(base.base_damage).max(1),
            defense: snapshot.defense.unwrap_or(base.defense),
            inventory: snapshot.inventory.unwrap_or_default(),
        }
    }
}

/// Reads and writes the single-character save file.
pub struct SaveManager {
    save_path: PathBuf,
}

impl SaveManager {
    /// Save file in the default data directory (`~/.quest-rpg/save.json`).
    pub fn new() -> io::Result<Self> {
        Ok(Self {
            save_path: persistence::data_file(SAVE_FILE_NAME)?,
        })
    }

    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            save_path: path.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.save_path
    }

    pub fn save(&self, character: &Character) -> io::Result<()> {
        persistence::write_json(&self.save_path, &character.snapshot())?;
        tracing::debug!(path = %self.save_path.display(), "character saved");
        Ok(())
    }

    /// Loads the saved character.
    ///
    /// Fails only if the file is missing, unreadable or not a JSON object;
    /// individual bad fields fall back to defaults.
    pub fn load(&self) -> io::Result<Character> {
        let snapshot: CharacterSnapshot = persistence::read_json(&self.save_path)?;
        Ok(Character::from_snapshot(snapshot))
    }

    pub fn save_exists(&self) -> bool {
        self.save_path.exists()
    }
}
