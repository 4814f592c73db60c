//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the game rules and session state. It has no
//! dependencies on rendering, audio or persistence, so it is:
//!
//! - **Deterministic**: Same seed produces identical boards and refills
//! - **Testable**: Unit tests for every rule
//! - **Portable**: Any presentation layer can drive it
//!
//! # Module Structure
//!
//! - [`board`]: 18x12 column-major tile grid, flood fill, removal and refill
//! - [`tile`]: a single tile and the match relation between two tiles
//! - [`session`]: one game: tap transactions, countdown, input gate
//! - [`rng`]: seeded tile kind generation
//! - [`scoring`]: match size rules and countdown math
//! - [`config`]: session configuration and its validation
//! - [`snapshot`]: plain-data view of a session for observers
//!
//! # Game Rules
//!
//! - **Tap**: the tapped tile and every tile connected to it through
//!   same-kind orthogonal neighbours are removed
//! - **Bomb**: a bomb pulls in all of its direct neighbours, whatever their kind
//! - **Gravity**: survivors fall, fresh tiles drop in from the top
//! - **Scoring**: 3 or more tiles earn `2^min(n, 16)`, 2 tiles earn nothing,
//!   a single tile recolors the whole board
//! - **Countdown**: the game ends 100 seconds after the first tick
//!
//! # Example
//!
//! ```
//! use tile_smash_core::{Session, SessionConfig};
//! use tile_smash_core::types::GridPos;
//!
//! let mut session = Session::new(SessionConfig::default(), 12345).unwrap();
//! session.tick(0);
//!
//! let outcome = session.tap(GridPos::new(0, 0)).unwrap();
//! assert!(outcome.match_count() >= 1);
//!
//! // Input stays closed until every animation is reported done
//! for _ in 0..outcome.transaction_tile_count() {
//!     session.complete_one();
//! }
//! assert!(session.accepting_input());
//! ```

pub mod board;
pub mod config;
pub mod rng;
pub mod scoring;
pub mod session;
pub mod snapshot;
pub mod tile;

pub use tile_smash_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, MatchSet, Refill, TileMove};
pub use config::{ConfigError, SessionConfig};
pub use rng::TileRng;
pub use scoring::{calculate_score, match_points, MatchRule, ScoreResult};
pub use session::{Phase, Session, TapOutcome, TickOutcome};
pub use snapshot::{board_hash, SessionSnapshot};
pub use tile::Tile;
