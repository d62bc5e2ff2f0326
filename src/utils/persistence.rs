//! Data directory lookup and JSON file helpers.

use crate::core::constants::DATA_DIR_NAME;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// `~/.quest-rpg/`, created on first use.
pub fn data_dir() -> io::Result<PathBuf> {
    let home = dirs::home_dir().ok_or_else(|| {
        io::Error::new(io::ErrorKind::NotFound, "Could not determine home directory")
    })?;
    let dir = home.join(DATA_DIR_NAME);
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

pub fn data_file(filename: &str) -> io::Result<PathBuf> {
    Ok(data_dir()?.join(filename))
}

/// Reads `path` as JSON. Parse failures surface as `InvalidData`.
pub fn read_json<T: DeserializeOwned>(path: &Path) -> io::Result<T> {
    let json = fs::read_to_string(path)?;
    serde_json::from_str(&json).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

/// Writes `value` as pretty JSON, creating parent directories as needed.
pub fn write_json<T: Serialize>(path: &Path, value: &T) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    fs::write(path, json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("quest-rpg-persistence-{}", std::process::id()))
            .join(name)
    }

    #[test]
    fn test_data_dir_exists() {
        let dir = data_dir().expect("data_dir should succeed");
        assert!(dir.exists());
        assert!(dir.ends_with(DATA_DIR_NAME));
    }

    #[test]
    fn test_data_file_format() {
        let path = data_file("test.json").expect("data_file should succeed");
        assert!(path.ends_with(format!("{}/test.json", DATA_DIR_NAME)));
    }

    #[test]
    fn test_json_round_trip_creates_parent() {
        let path = temp_path("nested/values.json");
        let value = BTreeMap::from([("level".to_string(), 3u32)]);

        write_json(&path, &value).unwrap();
        let loaded: BTreeMap<String, u32> = read_json(&path).unwrap();
        assert_eq!(loaded, value);
    }

    #[test]
    fn test_read_json_errors() {
        let missing: io::Result<u32> = read_json(&temp_path("missing.json"));
        assert_eq!(missing.unwrap_err().kind(), io::ErrorKind::NotFound);

        let path = temp_path("bad.json");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "not json").unwrap();
        let bad: io::Result<u32> = read_json(&path);
        assert_eq!(bad.unwrap_err().kind(), io::ErrorKind::InvalidData);
    }
}
