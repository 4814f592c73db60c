//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, persistence, presentation).
//!
//! # Board Dimensions
//!
//! The default playfield is 18 columns by 12 rows:
//!
//! - **Columns**: 18 (indexed 0-17, left to right)
//! - **Rows**: 12 (indexed 0-11, row 0 is the bottom)
//!
//! # Game Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `BOMB_ODDS` | 24 | A tile allowed to be special becomes a bomb 1 time in 24 |
//! | `COUNTDOWN_MS` | 100 000 | Length of a game |
//! | `MIN_SCORING_MATCH` | 3 | Smallest match that earns points |
//! | `MATCH_EXPONENT_CAP` | 16 | Match sizes above this score like 16 |
//! | `HIGH_SCORE_LIMIT` | 5 | Entries kept on the leaderboard |
//!
//! # Examples
//!
//! ```
//! use tile_smash_types::{TileKind, ToolbarAction, COLUMN_COUNT, ROW_COUNT};
//!
//! let kind = TileKind::from_str("purple").unwrap();
//! assert_eq!(kind, TileKind::Purple);
//! assert!(!kind.is_special());
//! assert!(TileKind::Bomb.is_special());
//!
//! assert_eq!(ToolbarAction::from_str("playPause"), Some(ToolbarAction::PlayPause));
//!
//! assert_eq!(COLUMN_COUNT, 18);
//! assert_eq!(ROW_COUNT, 12);
//! ```

/// Default number of columns (18)
pub const COLUMN_COUNT: usize = 18;

/// Default number of rows per column (12)
pub const ROW_COUNT: usize = 12;

/// One in `BOMB_ODDS` special-eligible tiles is a bomb.
pub const BOMB_ODDS: u32 = 24;

/// Game length in milliseconds (100 time units of one second each).
pub const COUNTDOWN_MS: u64 = 100_000;

/// Smallest match size that earns points.
pub const MIN_SCORING_MATCH: usize = 3;

/// Exponent cap for match scoring (`2^16` is the largest single award).
pub const MATCH_EXPONENT_CAP: u32 = 16;

/// Number of entries on the high-score list.
pub const HIGH_SCORE_LIMIT: usize = 5;

/// Tile kinds
///
/// Seven plain colors make up the palette. `Bomb` is the special kind: when a
/// bomb is expanded during matching it pulls in every direct neighbor,
/// whatever that neighbor's color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TileKind {
    Black,
    Blue,
    Green,
    Purple,
    Red,
    Yellow,
    Orange,
    Bomb,
}

impl TileKind {
    /// The plain colors a fresh tile is drawn from.
    pub const PALETTE: [TileKind; 7] = [
        TileKind::Black,
        TileKind::Blue,
        TileKind::Green,
        TileKind::Purple,
        TileKind::Red,
        TileKind::Yellow,
        TileKind::Orange,
    ];

    /// True for the bomb.
    pub fn is_special(&self) -> bool {
        matches!(self, TileKind::Bomb)
    }

    /// Parse tile kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tile_smash_types::TileKind;
    ///
    /// assert_eq!(TileKind::from_str("Red"), Some(TileKind::Red));
    /// assert_eq!(TileKind::from_str("bomb"), Some(TileKind::Bomb));
    /// assert_eq!(TileKind::from_str("teal"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "black" => Some(TileKind::Black),
            "blue" => Some(TileKind::Blue),
            "green" => Some(TileKind::Green),
            "purple" => Some(TileKind::Purple),
            "red" => Some(TileKind::Red),
            "yellow" => Some(TileKind::Yellow),
            "orange" => Some(TileKind::Orange),
            "bomb" => Some(TileKind::Bomb),
            _ => None,
        }
    }

    /// Convert to lowercase string representation (the sprite name)
    pub fn as_str(&self) -> &'static str {
        match self {
            TileKind::Black => "black",
            TileKind::Blue => "blue",
            TileKind::Green => "green",
            TileKind::Purple => "purple",
            TileKind::Red => "red",
            TileKind::Yellow => "yellow",
            TileKind::Orange => "orange",
            TileKind::Bomb => "bomb",
        }
    }
}

/// A slot on the grid. Row 0 is the bottom of a column.
///
/// Ordering is column-major (column first, then row) so sets of positions
/// iterate one column at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GridPos {
    pub column: usize,
    pub row: usize,
}

impl GridPos {
    pub fn new(row: usize, column: usize) -> Self {
        Self { column, row }
    }
}

/// Sound events reported to the audio collaborator.
///
/// The core never plays audio; it only says which cue a transaction produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundCue {
    /// Any accepted tap.
    Pop,
    /// A bomb was tapped.
    Bomb,
}

/// Toolbar and overlay actions that drive a game from the presentation side
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolbarAction {
    /// Toggle pause
    PlayPause,
    /// Toggle the sound preference
    ToggleSound,
    /// Open the leaderboard (pauses a running game)
    ShowLeaderboard,
    /// Close the leaderboard
    CloseLeaderboard,
    /// Clear the high-score list
    ResetScores,
    /// Start a fresh game after game over
    PlayAgain,
}

impl ToolbarAction {
    /// Parse action from string (case-insensitive camelCase)
    ///
    /// # Examples
    ///
    /// ```
    /// use tile_smash_types::ToolbarAction;
    ///
    /// assert_eq!(ToolbarAction::from_str("toggleSound"), Some(ToolbarAction::ToggleSound));
    /// assert_eq!(ToolbarAction::from_str("PLAYAGAIN"), Some(ToolbarAction::PlayAgain));
    /// assert_eq!(ToolbarAction::from_str("jump"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "playpause" => Some(ToolbarAction::PlayPause),
            "togglesound" => Some(ToolbarAction::ToggleSound),
            "showleaderboard" => Some(ToolbarAction::ShowLeaderboard),
            "closeleaderboard" => Some(ToolbarAction::CloseLeaderboard),
            "resetscores" => Some(ToolbarAction::ResetScores),
            "playagain" => Some(ToolbarAction::PlayAgain),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            ToolbarAction::PlayPause => "playPause",
            ToolbarAction::ToggleSound => "toggleSound",
            ToolbarAction::ShowLeaderboard => "showLeaderboard",
            ToolbarAction::CloseLeaderboard => "closeLeaderboard",
            ToolbarAction::ResetScores => "resetScores",
            ToolbarAction::PlayAgain => "playAgain",
        }
    }
}
