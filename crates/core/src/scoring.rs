//! Scoring module - match size rules and countdown math
//!
//! One tap scores on the size of its match:
//! - 1 tile: penalty (the whole board is recolored), no points
//! - 2 tiles: nothing happens
//! - 3 or more: `2^min(n, 16)` points

use crate::types::{MATCH_EXPONENT_CAP, MIN_SCORING_MATCH};

/// What a match of a given size does
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchRule {
    /// Single tile: recolor the board
    Penalty,
    /// Too small to reward, not punished (also used for an empty match)
    NoChange,
    /// Points awarded
    Award,
}

/// Score calculation result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScoreResult {
    pub match_count: usize,
    pub points: u64,
    pub penalty: bool,
}

impl ScoreResult {
    pub fn rule(&self) -> MatchRule {
        classify_match(self.match_count)
    }
}

pub fn classify_match(match_count: usize) -> MatchRule {
    match match_count {
        1 => MatchRule::Penalty,
        n if n >= MIN_SCORING_MATCH => MatchRule::Award,
        _ => MatchRule::NoChange,
    }
}

/// Points for a match of `match_count` tiles
pub fn match_points(match_count: usize) -> u64 {
    if match_count < MIN_SCORING_MATCH {
        return 0;
    }
    let exponent = (match_count as u64).min(MATCH_EXPONENT_CAP as u64) as u32;
    1u64 << exponent
}

pub fn calculate_score(match_count: usize) -> ScoreResult {
    ScoreResult {
        match_count,
        points: match_points(match_count),
        penalty: classify_match(match_count) == MatchRule::Penalty,
    }
}

/// Fraction of the countdown left, clamped to `[0, 1]`
pub fn remaining_fraction(elapsed_ms: u64, countdown_ms: u64) -> f32 {
    if countdown_ms == 0 {
        return 0.0;
    }
    let remaining = countdown_ms.saturating_sub(elapsed_ms);
    (remaining as f64 / countdown_ms as f64) as f32
}

/// True once the countdown has run out
pub fn countdown_expired(elapsed_ms: u64, countdown_ms: u64) -> bool {
    elapsed_ms >= countdown_ms
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_match() {
        assert_eq!(classify_match(0), MatchRule::NoChange);
        assert_eq!(classify_match(1), MatchRule::Penalty);
        assert_eq!(classify_match(2), MatchRule::NoChange);
        assert_eq!(classify_match(3), MatchRule::Award);
        assert_eq!(classify_match(40), MatchRule::Award);
    }

    #[test]
    fn test_match_points() {
        assert_eq!(match_points(0), 0);
        assert_eq!(match_points(1), 0);
        assert_eq!(match_points(2), 0);
        assert_eq!(match_points(3), 8);
        assert_eq!(match_points(4), 16);
        assert_eq!(match_points(10), 1024);
        assert_eq!(match_points(16), 65_536);
    }

    #[test]
    fn test_match_points_capped_at_sixteen() {
        assert_eq!(match_points(17), 65_536);
        assert_eq!(match_points(216), 65_536);
    }

    #[test]
    fn test_calculate_score() {
        let single = calculate_score(1);
        assert!(single.penalty);
        assert_eq!(single.points, 0);
        assert_eq!(single.rule(), MatchRule::Penalty);

        let pair = calculate_score(2);
        assert!(!pair.penalty);
        assert_eq!(pair.points, 0);

        let five = calculate_score(5);
        assert!(!five.penalty);
        assert_eq!(five.points, 32);
        assert_eq!(five.rule(), MatchRule::Award);
    }

    #[test]
    fn test_remaining_fraction() {
        assert_eq!(remaining_fraction(0, 100_000), 1.0);
        assert_eq!(remaining_fraction(50_000, 100_000), 0.5);
        assert_eq!(remaining_fraction(100_000, 100_000), 0.0);
        assert_eq!(remaining_fraction(250_000, 100_000), 0.0);
        assert_eq!(remaining_fraction(5, 0), 0.0);
    }

    #[test]
    fn test_countdown_expired() {
        assert!(!countdown_expired(99_999, 100_000));
        assert!(countdown_expired(100_000, 100_000));
        assert!(countdown_expired(100_001, 100_000));
    }
}
