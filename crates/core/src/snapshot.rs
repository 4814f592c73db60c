use std::hash::Hasher;

use crate::session::Phase;
use crate::types::TileKind;

/// Stable 64-bit FNV-1a hasher for `board_hash`.
///
/// `DefaultHasher` output is not guaranteed stable across Rust versions.
#[derive(Debug, Clone)]
struct Fnv1aHasher {
    state: u64,
}

impl Fnv1aHasher {
    const OFFSET_BASIS: u64 = 0xcbf29ce484222325;
    const PRIME: u64 = 0x100000001b3;

    fn new() -> Self {
        Self {
            state: Self::OFFSET_BASIS,
        }
    }
}

impl Hasher for Fnv1aHasher {
    fn finish(&self) -> u64 {
        self.state
    }

    fn write(&mut self, bytes: &[u8]) {
        for &b in bytes {
            self.state ^= b as u64;
            self.state = self.state.wrapping_mul(Self::PRIME);
        }
    }
}

/// Byte for a tile kind in the board hash; 0 separates columns.
pub fn kind_code(kind: TileKind) -> u8 {
    kind as u8 + 1
}

/// FNV-1a over the column-major tile kinds, bottom to top.
pub fn board_hash(columns: &[Vec<TileKind>]) -> u64 {
    let mut hasher = Fnv1aHasher::new();
    for column in columns {
        for &kind in column {
            hasher.write_u8(kind_code(kind));
        }
        hasher.write_u8(0);
    }
    hasher.finish()
}

#[derive(Debug, Clone, PartialEq)]
pub struct SessionSnapshot {
    /// `columns[column][row]`, row 0 at the bottom
    pub columns: Vec<Vec<TileKind>>,
    pub board_hash: u64,
    pub score: u64,
    pub remaining_fraction: f32,
    pub phase: Phase,
    pub paused: bool,
    pub accepting_input: bool,
    pub pending_completions: usize,
    pub episode_id: u32,
    pub transaction_id: u32,
    pub seed: u64,
}

impl SessionSnapshot {
    pub fn game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    pub fn playable(&self) -> bool {
        !self.game_over() && !self.paused && self.accepting_input
    }
}
