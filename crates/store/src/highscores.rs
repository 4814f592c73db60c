//! Top-5 high-score list persisted as JSON.
//!
//! The file is an array of `{ "id": u64, "score": u64 }`. Load and save
//! failures never reach the caller: a bad file reads as an empty list and a
//! failed save is logged and dropped.

use std::path::{Path, PathBuf};

use log::warn;
use serde::{Deserialize, Serialize};

use crate::json_file::{load_json, save_json_atomic};
use crate::paths;
use crate::types::HIGH_SCORE_LIMIT;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighScore {
    pub id: u64,
    pub score: u64,
}

/// One line of the leaderboard popup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LeaderboardRow {
    /// 1-based
    pub rank: usize,
    pub score: u64,
    /// First row holding the score just achieved
    pub is_latest: bool,
}

#[derive(Debug, Clone)]
pub struct HighScoreStore {
    /// `None` keeps the list in memory only
    path: Option<PathBuf>,
    /// Score descending, then id ascending
    entries: Vec<HighScore>,
}

impl HighScoreStore {
    /// Load the list at `path`. Missing or unreadable files give an empty list.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = match load_json::<Vec<HighScore>>(&path) {
            Ok(Some(entries)) => entries,
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!("ignoring high scores: {:#}", e);
                Vec::new()
            }
        };
        let mut store = Self {
            path: Some(path),
            entries,
        };
        store.normalize();
        store
    }

    /// Load from the per-user data directory
    pub fn open_default() -> Self {
        Self::open(paths::high_scores_path())
    }

    pub fn in_memory() -> Self {
        Self {
            path: None,
            entries: Vec::new(),
        }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    fn normalize(&mut self) {
        self.entries
            .sort_by(|a, b| b.score.cmp(&a.score).then(a.id.cmp(&b.id)));
        self.entries.truncate(HIGH_SCORE_LIMIT);
    }

    /// Whether `score` would make the list
    pub fn qualifies(&self, score: u64) -> bool {
        self.entries.len() < HIGH_SCORE_LIMIT
            || self.entries.last().is_some_and(|lowest| score > lowest.score)
    }

    /// Offer a score. Returns true if it was added (and saved).
    ///
    /// A full list only takes a score strictly above its lowest entry, which
    /// is evicted. A tie with the lowest entry does not qualify.
    pub fn add(&mut self, score: u64) -> bool {
        if !self.qualifies(score) {
            return false;
        }
        let id = self.entries.iter().map(|e| e.id).max().map_or(1, |max| max + 1);
        self.entries.push(HighScore { id, score });
        self.normalize();
        self.save();
        true
    }

    /// Entries, best first
    pub fn scores(&self) -> &[HighScore] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Clear the list and save immediately
    pub fn reset(&mut self) {
        self.entries.clear();
        self.save();
    }

    /// Ranked rows; the first row equal to `latest` is flagged.
    pub fn leaderboard(&self, latest: Option<u64>) -> Vec<LeaderboardRow> {
        let highlight = latest.and_then(|s| self.entries.iter().position(|e| e.score == s));
        self.entries
            .iter()
            .enumerate()
            .map(|(idx, entry)| LeaderboardRow {
                rank: idx + 1,
                score: entry.score,
                is_latest: highlight == Some(idx),
            })
            .collect()
    }

    fn save(&self) {
        let Some(path) = &self.path else {
            return;
        };
        if let Err(e) = save_json_atomic(path, &self.entries) {
            warn!("failed to save high scores: {:#}", e);
        }
    }
}
