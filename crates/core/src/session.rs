//! Session module - one game from first tick to game over
//!
//! This module ties together the board, the RNG and scoring. It runs tap
//! transactions, keeps the countdown, and gates input while the presentation
//! layer animates the last transaction.
//!
//! # Input gate
//!
//! A tap closes input and records how many tile animations the presentation
//! layer will run ([`TapOutcome::transaction_tile_count`]). Each finished
//! animation is reported with [`Session::complete_one`]; input reopens when
//! the count reaches zero. There is no timeout.

use arrayvec::ArrayVec;
use log::{debug, info};

use crate::board::{Board, MatchSet, Refill};
use crate::config::{ConfigError, SessionConfig};
use crate::rng::TileRng;
use crate::scoring::{calculate_score, countdown_expired, remaining_fraction, ScoreResult};
use crate::snapshot::{board_hash, SessionSnapshot};
use crate::tile::Tile;
use crate::types::{GridPos, SoundCue};

/// Lifecycle of a session. `GameOver` is terminal; only a restart leaves it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Running,
    GameOver,
}

/// Everything one tap changed
#[derive(Debug, Clone, PartialEq)]
pub struct TapOutcome {
    pub transaction_id: u32,
    /// The tapped tile as it was before the tap
    pub origin: Tile,
    /// A bomb was tapped; the presentation layer plays its flash
    pub bomb_triggered: bool,
    pub matches: MatchSet,
    pub removed: Vec<Tile>,
    /// Moves and spawns, with kinds as they are after any penalty recolor
    pub refill: Refill,
    pub score: ScoreResult,
    /// Session score after this tap
    pub total_score: u64,
    /// Empty when sound is disabled
    pub cues: ArrayVec<SoundCue, 2>,
}

impl TapOutcome {
    pub fn match_count(&self) -> usize {
        self.matches.len()
    }

    /// Animation completions the caller must report before input reopens
    pub fn transaction_tile_count(&self) -> usize {
        self.refill.animation_count()
    }
}

/// Result of one countdown tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickOutcome {
    pub remaining_fraction: f32,
    /// True only on the tick that ended the game
    pub game_over_entered: bool,
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct Session {
    config: SessionConfig,
    board: Board,
    rng: TileRng,
    /// Monotonic episode id (increments on restart)
    episode_id: u32,
    /// Monotonic id of accepted taps
    transaction_id: u32,
    score: u64,
    /// Unpaused time since the first tick
    elapsed_ms: u64,
    /// Clock baseline; cleared whenever the pause state flips
    last_tick_ms: Option<u64>,
    started: bool,
    phase: Phase,
    paused: bool,
    pending_completions: usize,
    last_transaction_tiles: usize,
}

impl Session {
    /// Create a new session with a freshly filled board (no bombs on the
    /// opening board)
    pub fn new(config: SessionConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(config, seed))
    }

    /// Create a session around an existing board.
    ///
    /// The board's dimensions replace the configured ones; missing tiles are
    /// filled in without bombs.
    pub fn from_board(
        mut config: SessionConfig,
        board: Board,
        seed: u64,
    ) -> Result<Self, ConfigError> {
        config.columns = board.column_count();
        config.rows = board.row_count();
        config.validate()?;

        let mut rng = TileRng::new(seed);
        let mut board = board.with_palette(&config.palette, config.bomb_odds);
        board.compact_and_refill(false, &mut rng);
        Ok(Self::with_parts(config, board, rng))
    }

    fn build(config: SessionConfig, seed: u64) -> Self {
        let mut rng = TileRng::new(seed);
        let mut board = Board::new(config.columns, config.rows)
            .with_palette(&config.palette, config.bomb_odds);
        board.compact_and_refill(false, &mut rng);
        Self::with_parts(config, board, rng)
    }

    fn with_parts(config: SessionConfig, board: Board, rng: TileRng) -> Self {
        Self {
            config,
            board,
            rng,
            episode_id: 0,
            transaction_id: 0,
            score: 0,
            elapsed_ms: 0,
            last_tick_ms: None,
            started: false,
            phase: Phase::Running,
            paused: false,
            pending_completions: 0,
            last_transaction_tiles: 0,
        }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn transaction_id(&self) -> u32 {
        self.transaction_id
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    pub fn elapsed_ms(&self) -> u64 {
        self.elapsed_ms
    }

    /// Whether the countdown has started (first tick seen)
    pub fn started(&self) -> bool {
        self.started
    }

    pub fn sound_enabled(&self) -> bool {
        self.config.sound_enabled
    }

    pub fn set_sound_enabled(&mut self, enabled: bool) {
        self.config.sound_enabled = enabled;
    }

    /// Animation completions still outstanding for the last transaction
    pub fn pending_completions(&self) -> usize {
        self.pending_completions
    }

    /// Tile animations started by the last accepted tap
    pub fn transaction_tile_count(&self) -> usize {
        self.last_transaction_tiles
    }

    /// True when a tap would be processed
    pub fn accepting_input(&self) -> bool {
        self.phase == Phase::Running && !self.paused && self.pending_completions == 0
    }

    pub fn remaining_fraction(&self) -> f32 {
        remaining_fraction(self.elapsed_ms, self.config.countdown_ms)
    }

    /// Run one tap transaction.
    ///
    /// Returns `None` (and changes nothing) when input is closed, the game is
    /// over or paused, or there is no tile at `pos`.
    pub fn tap(&mut self, pos: GridPos) -> Option<TapOutcome> {
        if !self.accepting_input() {
            debug!(
                "tap at {:?} ignored (phase {:?}, paused {}, pending {})",
                pos, self.phase, self.paused, self.pending_completions
            );
            return None;
        }
        let origin = *self.board.tile_at(pos.row, pos.column)?;

        let matches = self.board.find_matches(pos);
        let removed = self.board.remove_matches(&matches);
        let mut refill = self
            .board
            .compact_and_refill(self.config.refill_bombs, &mut self.rng);

        let score = calculate_score(matches.len());
        if score.penalty {
            self.board.recolor_all(&self.config.palette, &mut self.rng);
            self.sync_refill_kinds(&mut refill);
        }
        self.score = self.score.saturating_add(score.points);

        self.transaction_id = self.transaction_id.wrapping_add(1);
        self.last_transaction_tiles = refill.animation_count();
        self.pending_completions = self.last_transaction_tiles;

        let mut cues = ArrayVec::new();
        if self.config.sound_enabled {
            cues.push(SoundCue::Pop);
            if origin.is_bomb() {
                cues.push(SoundCue::Bomb);
            }
        }

        debug!(
            "tap #{} at {:?}: {:?} matched {} (+{}, penalty {}), {} animations pending",
            self.transaction_id,
            pos,
            origin.kind,
            matches.len(),
            score.points,
            score.penalty,
            self.pending_completions
        );

        Some(TapOutcome {
            transaction_id: self.transaction_id,
            origin,
            bomb_triggered: origin.is_bomb(),
            matches,
            removed,
            refill,
            score,
            total_score: self.score,
            cues,
        })
    }

    /// After a recolor the refill report must show the tiles' current kinds.
    fn sync_refill_kinds(&self, refill: &mut Refill) {
        for tile in &mut refill.spawned {
            if let Some(current) = self.board.tile_at(tile.row, tile.column) {
                tile.kind = current.kind;
            }
        }
        for mv in &mut refill.moved {
            if let Some(current) = self.board.tile_at(mv.to_row, mv.column) {
                mv.kind = current.kind;
            }
        }
    }

    /// Report one finished tile animation. Returns true when input is open
    /// afterwards.
    pub fn complete_one(&mut self) -> bool {
        self.pending_completions = self.pending_completions.saturating_sub(1);
        self.pending_completions == 0
    }

    /// Advance the countdown to `now_ms` (any monotonic clock).
    ///
    /// The first tick starts the countdown. Paused time is not counted. The
    /// tick that runs the countdown out ends the game.
    pub fn tick(&mut self, now_ms: u64) -> TickOutcome {
        if self.phase == Phase::GameOver {
            return TickOutcome {
                remaining_fraction: self.remaining_fraction(),
                game_over_entered: false,
            };
        }

        if let Some(last) = self.last_tick_ms {
            if !self.paused {
                self.elapsed_ms = self.elapsed_ms.saturating_add(now_ms.saturating_sub(last));
            }
        }
        self.last_tick_ms = Some(now_ms);
        self.started = true;

        let game_over_entered =
            countdown_expired(self.elapsed_ms, self.config.countdown_ms) && self.end_game();

        TickOutcome {
            remaining_fraction: self.remaining_fraction(),
            game_over_entered,
        }
    }

    /// Enter `GameOver`. Returns true only for the call that made the
    /// transition.
    pub fn end_game(&mut self) -> bool {
        if self.phase == Phase::GameOver {
            return false;
        }
        self.phase = Phase::GameOver;
        info!(
            "game over: episode {} score {} after {} taps",
            self.episode_id, self.score, self.transaction_id
        );
        true
    }

    /// Pause or resume. A flip re-baselines the clock: the next tick only
    /// records its time, so no span around the flip is counted.
    pub fn set_paused(&mut self, paused: bool) {
        if self.paused == paused {
            return;
        }
        self.paused = paused;
        self.last_tick_ms = None;
    }

    /// Toggle pause; returns the new state
    pub fn toggle_pause(&mut self) -> bool {
        self.set_paused(!self.paused);
        self.paused
    }

    /// Throw the session away and start a fresh one with the same
    /// configuration. The new board is seeded from the current RNG.
    pub fn restart(&mut self) {
        let seed = self.rng.next_seed();
        let next_episode = self.episode_id.wrapping_add(1);
        *self = Self::build(self.config.clone(), seed);
        self.episode_id = next_episode;
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        let columns = self.board.kinds();
        SessionSnapshot {
            board_hash: board_hash(&columns),
            columns,
            score: self.score,
            remaining_fraction: self.remaining_fraction(),
            phase: self.phase,
            paused: self.paused,
            accepting_input: self.accepting_input(),
            pending_completions: self.pending_completions,
            episode_id: self.episode_id,
            transaction_id: self.transaction_id,
            seed: self.seed(),
        }
    }
}
