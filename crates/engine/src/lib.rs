//! Game driver and presentation seams
//!
//! [`Game`] owns a [`Session`](tile_smash_core::Session) together with the
//! high-score and settings stores. The host calls [`Game::tap`],
//! [`Game::tick`], [`Game::complete_one`] and [`Game::apply`] from a single
//! thread; the driver pushes plain data into the widgets behind [`Hud`].
//!
//! # Example
//!
//! ```
//! use tile_smash_core::SessionConfig;
//! use tile_smash_engine::Game;
//! use tile_smash_store::{HighScoreStore, SettingsStore};
//!
//! let mut game = Game::new(
//!     SessionConfig::default(),
//!     42,
//!     HighScoreStore::in_memory(),
//!     SettingsStore::in_memory(),
//! )
//! .unwrap();
//!
//! game.tick(0, &mut ());
//! let report = game.tick(100_000, &mut ());
//! assert!(report.game_over_entered);
//! assert!(report.high_score_added);
//! ```

pub mod game;
pub mod hud;

pub use tile_smash_types as types;

pub use game::{Game, TickReport};
pub use hud::{CountdownGauge, Hud, ScoreBoard, ScoreDisplay};
