//! Session configuration
//!
//! A plain value handed to [`Session::new`](crate::Session::new). Anything a
//! running game may change (sound) has an explicit setter on the session;
//! nothing here is shared or observed.

use thiserror::Error;

use crate::types::{TileKind, BOMB_ODDS, COLUMN_COUNT, COUNTDOWN_MS, ROW_COUNT};

/// Rejected configuration. These are construction bugs, not runtime states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("board must have at least one column and one row (got {columns}x{rows})")]
    EmptyBoard { columns: usize, rows: usize },
    #[error("tile palette is empty")]
    EmptyPalette,
    #[error("tile palette may not contain the bomb")]
    BombInPalette,
    #[error("bomb odds must be at least 1")]
    ZeroBombOdds,
    #[error("countdown must be longer than zero")]
    ZeroCountdown,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    pub columns: usize,
    pub rows: usize,
    pub palette: Vec<TileKind>,
    /// A special-eligible tile is a bomb one time in `bomb_odds`
    pub bomb_odds: u32,
    /// Game length in milliseconds
    pub countdown_ms: u64,
    /// Whether tiles spawned by a refill may be bombs (the opening board never has any)
    pub refill_bombs: bool,
    pub sound_enabled: bool,
}

impl SessionConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.columns == 0 || self.rows == 0 {
            return Err(ConfigError::EmptyBoard {
                columns: self.columns,
                rows: self.rows,
            });
        }
        if self.palette.is_empty() {
            return Err(ConfigError::EmptyPalette);
        }
        if self.palette.iter().any(TileKind::is_special) {
            return Err(ConfigError::BombInPalette);
        }
        if self.bomb_odds == 0 {
            return Err(ConfigError::ZeroBombOdds);
        }
        if self.countdown_ms == 0 {
            return Err(ConfigError::ZeroCountdown);
        }
        Ok(())
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            columns: COLUMN_COUNT,
            rows: ROW_COUNT,
            palette: TileKind::PALETTE.to_vec(),
            bomb_odds: BOMB_ODDS,
            countdown_ms: COUNTDOWN_MS,
            refill_bombs: true,
            sound_enabled: true,
        }
    }
}
