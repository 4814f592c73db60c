//! Persistence for the things that outlive a game
//!
//! - [`highscores`]: the top-5 list (`highscores.json`)
//! - [`settings`]: user preferences (`settings.json`)
//!
//! Both files live in [`paths::data_dir`] and are replaced atomically on
//! every save. Nothing here returns an error to the caller: unreadable files
//! load as defaults and failed saves are logged at `warn`.

pub mod highscores;
pub mod json_file;
pub mod paths;
pub mod settings;

pub use tile_smash_types as types;

pub use highscores::{HighScore, HighScoreStore, LeaderboardRow};
pub use settings::{Settings, SettingsStore};
