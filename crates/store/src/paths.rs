//! Per-user data directory (`$XDG_DATA_HOME/tile-smash` or
//! `~/.local/share/tile-smash`).

use std::ffi::OsString;
use std::path::PathBuf;

pub const APP_DIR: &str = "tile-smash";
pub const HIGH_SCORES_FILE: &str = "highscores.json";
pub const SETTINGS_FILE: &str = "settings.json";

/// Directory the store files live in. Falls back to the current directory
/// when neither variable is usable.
pub fn data_dir() -> PathBuf {
    resolve_data_dir(
        std::env::var_os("XDG_DATA_HOME"),
        std::env::var_os("HOME"),
    )
}

fn resolve_data_dir(xdg_data_home: Option<OsString>, home: Option<OsString>) -> PathBuf {
    let base = match (xdg_data_home, home) {
        (Some(xdg), _) if !xdg.is_empty() => PathBuf::from(xdg),
        (_, Some(home)) if !home.is_empty() => {
            PathBuf::from(home).join(".local").join("share")
        }
        _ => return PathBuf::from("."),
    };
    base.join(APP_DIR)
}

pub fn high_scores_path() -> PathBuf {
    data_dir().join(HIGH_SCORES_FILE)
}

pub fn settings_path() -> PathBuf {
    data_dir().join(SETTINGS_FILE)
}
