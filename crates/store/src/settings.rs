//! Persisted user preferences.

use std::path::{Path, PathBuf};

use log::warn;
use serde::{Deserialize, Serialize};

use crate::json_file::{load_json, save_json_atomic};
use crate::paths;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub sound_enabled: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            sound_enabled: true,
        }
    }
}

#[derive(Debug, Clone)]
pub struct SettingsStore {
    path: Option<PathBuf>,
    settings: Settings,
}

impl SettingsStore {
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let settings = match load_json::<Settings>(&path) {
            Ok(loaded) => loaded.unwrap_or_default(),
            Err(e) => {
                warn!("ignoring settings: {:#}", e);
                Settings::default()
            }
        };
        Self {
            path: Some(path),
            settings,
        }
    }

    pub fn open_default() -> Self {
        Self::open(paths::settings_path())
    }

    pub fn in_memory() -> Self {
        Self {
            path: None,
            settings: Settings::default(),
        }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn settings(&self) -> Settings {
        self.settings
    }

    pub fn sound_enabled(&self) -> bool {
        self.settings.sound_enabled
    }

    pub fn set_sound_enabled(&mut self, enabled: bool) {
        if self.settings.sound_enabled == enabled {
            return;
        }
        self.settings.sound_enabled = enabled;
        self.save();
    }

    /// Flip the sound preference; returns the new value
    pub fn toggle_sound(&mut self) -> bool {
        self.set_sound_enabled(!self.settings.sound_enabled);
        self.settings.sound_enabled
    }

    fn save(&self) {
        let Some(path) = &self.path else {
            return;
        };
        if let Err(e) = save_json_atomic(path, &self.settings) {
            warn!("failed to save settings: {:#}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::json_file::test_dir;

    #[test]
    fn test_defaults_to_sound_on() {
        let dir = test_dir::fresh("settings-default");
        let store = SettingsStore::open(dir.join("settings.json"));
        assert!(store.sound_enabled());
    }

    #[test]
    fn test_toggle_persists() {
        let dir = test_dir::fresh("settings-toggle");
        let path = dir.join("settings.json");

        let mut store = SettingsStore::open(&path);
        assert!(!store.toggle_sound());
        assert!(!SettingsStore::open(&path).sound_enabled());
    }

    #[test]
    fn test_missing_field_uses_default() {
        let dir = test_dir::fresh("settings-partial");
        let path = dir.join("settings.json");
        std::fs::write(&path, "{}").unwrap();
        assert!(SettingsStore::open(&path).sound_enabled());
    }

    #[test]
    fn test_corrupt_file_uses_default() {
        let dir = test_dir::fresh("settings-corrupt");
        let path = dir.join("settings.json");
        std::fs::write(&path, "{\"sound_enabled\": \"loud\"}").unwrap();
        assert_eq!(SettingsStore::open(&path).settings(), Settings::default());
    }
}
