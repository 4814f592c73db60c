//! Presentation widgets, seen from the game driver.
//!
//! Each widget is a small capability trait taking plain data. A presentation
//! layer implements the ones it has; [`Hud`] is the set the driver pushes to.
//! `()` implements all of them for headless use.

use tile_smash_store::LeaderboardRow;

pub trait CountdownGauge {
    /// `1.0` at the start of a game, `0.0` at game over
    fn set_remaining_fraction(&mut self, fraction: f32);
}

pub trait ScoreDisplay {
    fn set_score(&mut self, score: u64);
}

pub trait ScoreBoard {
    fn set_score_list(&mut self, rows: &[LeaderboardRow]);

    /// Show or hide the leaderboard popup
    fn set_open(&mut self, _open: bool) {}
}

pub trait Hud: CountdownGauge + ScoreDisplay + ScoreBoard {}

impl<T: CountdownGauge + ScoreDisplay + ScoreBoard> Hud for T {}

impl CountdownGauge for () {
    fn set_remaining_fraction(&mut self, _fraction: f32) {}
}

impl ScoreDisplay for () {
    fn set_score(&mut self, _score: u64) {}
}

impl ScoreBoard for () {
    fn set_score_list(&mut self, _rows: &[LeaderboardRow]) {}
}
