//! User settings (data directory, page size, first-run seeding).
//!
//! The settings file is `~/.config/gamevault/settings.toml`. Every field is
//! optional; a missing or unreadable file yields the defaults.

use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::query::DEFAULT_PAGE_SIZE;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub storage: StorageSettings,
    pub collection: CollectionSettings,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageSettings {
    /// Directory holding `games.json` and `wishlist.json`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CollectionSettings {
    pub page_size: usize,
    /// Install the sample collection when both collections are empty
    pub seed_sample_data: bool,
}

impl Default for CollectionSettings {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            seed_sample_data: true,
        }
    }
}

impl Settings {
    /// Pretty-printed TOML, as it would be written to disk.
    pub fn to_pretty(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

/// Canonical path to the settings file: `~/.config/gamevault/settings.toml`.
pub fn settings_path() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join("gamevault").join("settings.toml")
}

/// Platform data directory for the collections, e.g.
/// `~/.local/share/gamevault` on Linux.
pub fn default_data_dir() -> PathBuf {
    let data = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
    data.join("gamevault")
}

/// Load settings from the canonical path.
pub fn load_settings() -> Settings {
    load_settings_from(&settings_path())
}

/// Load settings from `path`, falling back to defaults.
pub fn load_settings_from(path: &Path) -> Settings {
    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) => {
            if e.kind() != io::ErrorKind::NotFound {
                log::warn!("Could not read {}: {}", path.display(), e);
            }
            return Settings::default();
        }
    };
    match toml::from_str(&contents) {
        Ok(settings) => settings,
        Err(e) => {
            log::warn!("Ignoring invalid settings in {}: {}", path.display(), e);
            Settings::default()
        }
    }
}

/// Resolve the data directory using a priority chain:
///
/// 1. CLI override (if `Some`)
/// 2. `storage.data_dir` in `settings.toml`
/// 3. The platform data directory
pub fn resolve_data_dir(cli_override: Option<PathBuf>, settings: &Settings) -> PathBuf {
    if let Some(p) = cli_override {
        return p;
    }
    if let Some(p) = settings
        .storage
        .data_dir
        .as_ref()
        .filter(|p| !p.as_os_str().is_empty())
    {
        return p.clone();
    }
    default_data_dir()
}

/// Save (or clear) `storage.data_dir` in the canonical settings file.
pub fn save_data_dir(dir: Option<&Path>) -> io::Result<()> {
    save_data_dir_at(&settings_path(), dir)
}

/// Save (or clear) `storage.data_dir` in the settings file at `settings`.
///
/// Uses `toml::Value` for a surgical update so other keys, including ones
/// this version doesn't know about, are preserved.
pub fn save_data_dir_at(settings: &Path, dir: Option<&Path>) -> io::Result<()> {
    let mut doc: toml::Value = match std::fs::read_to_string(settings) {
        Ok(contents) => contents
            .parse()
            .unwrap_or_else(|_| toml::Value::Table(Default::default())),
        Err(_) => toml::Value::Table(Default::default()),
    };

    let table = doc
        .as_table_mut()
        .ok_or_else(|| io::Error::other("settings.toml root is not a table"))?;
    let storage = table
        .entry("storage")
        .or_insert_with(|| toml::Value::Table(Default::default()));
    let storage_table = storage
        .as_table_mut()
        .ok_or_else(|| io::Error::other("[storage] is not a table"))?;

    match dir {
        Some(p) => {
            storage_table.insert(
                "data_dir".to_string(),
                toml::Value::String(p.to_string_lossy().into_owned()),
            );
        }
        None => {
            storage_table.remove("data_dir");
        }
    }

    // Write atomically
    if let Some(parent) = settings.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let serialized = toml::to_string_pretty(&doc).map_err(io::Error::other)?;
    let tmp = settings.with_extension("toml.tmp");
    std::fs::write(&tmp, &serialized)?;
    std::fs::rename(&tmp, settings)?;

    Ok(())
}

#[cfg(test)]
#[path = "tests/settings_tests.rs"]
mod tests;
