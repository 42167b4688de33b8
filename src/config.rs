// ⚙️ Config - application settings and user preferences on disk
//
// config.json      → log level, log file, where preferences live
// preferences.json → UserPrefs (address book location)
//
// A missing file is created with defaults. A malformed one is reported and
// replaced by defaults in memory only, so the user's file is never clobbered.

use crate::model::UserPrefs;
use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

pub const DEFAULT_CONFIG_FILE: &str = "config.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    /// `tracing` filter directive, e.g. "info" or "advisor_book=debug"
    pub log_level: String,
    pub log_file: PathBuf,
    pub user_prefs_file_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_level: "info".to_string(),
            log_file: PathBuf::from("advisorbook.log"),
            user_prefs_file_path: PathBuf::from("preferences.json"),
        }
    }
}

/// What happened when a settings file was loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    Loaded,
    /// The file did not exist and defaults were written to it
    CreatedDefault,
    /// The file could not be parsed; defaults are in use
    Malformed(String),
}

/// Read `path` as JSON, falling back to `T::default()`.
///
/// Runs before logging is installed, so problems are returned as a
/// LoadOutcome for the caller to report.
pub fn load_or_default<T>(path: &Path) -> Result<(T, LoadOutcome)>
where
    T: Serialize + DeserializeOwned + Default,
{
    if !path.exists() {
        let value = T::default();
        save_json(path, &value)?;
        return Ok((value, LoadOutcome::CreatedDefault));
    }

    let content =
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;

    match serde_json::from_str(&content) {
        Ok(value) => Ok((value, LoadOutcome::Loaded)),
        Err(e) => Ok((T::default(), LoadOutcome::Malformed(e.to_string()))),
    }
}

pub fn save_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    let json = serde_json::to_string_pretty(value)?;
    fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))
}

impl Config {
    pub fn load(path: &Path) -> Result<(Config, LoadOutcome)> {
        load_or_default(path)
    }
}

/// Load preferences, logging anything unusual
pub fn load_user_prefs(path: &Path) -> Result<UserPrefs> {
    let (prefs, outcome) = load_or_default::<UserPrefs>(path)?;
    match outcome {
        LoadOutcome::Loaded => {}
        LoadOutcome::CreatedDefault => {
            warn!(path = %path.display(), "Preferences file not found, created with defaults")
        }
        LoadOutcome::Malformed(reason) => {
            warn!(path = %path.display(), %reason, "Preferences file is malformed, using defaults")
        }
    }
    Ok(prefs)
}

pub fn save_user_prefs(path: &Path, prefs: &UserPrefs) -> Result<()> {
    save_json(path, prefs)
}
