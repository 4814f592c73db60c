//! RNG module - seeded tile kind generation
//!
//! Every random decision in a game (fresh tile kinds, bomb rolls, penalty
//! recolors) goes through one [`TileRng`], so the same seed replays the same
//! game. Backed by PCG32.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::types::TileKind;

/// Seeded generator for tile kinds
#[derive(Debug, Clone)]
pub struct TileRng {
    inner: Pcg32,
    seed: u64,
}

impl TileRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            inner: Pcg32::seed_from_u64(seed),
            seed,
        }
    }

    /// The seed this generator was created with
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Uniform value in `[0, max)`; `0` for an empty range
    pub fn next_range(&mut self, max: u32) -> u32 {
        if max == 0 {
            return 0;
        }
        self.inner.gen_range(0..max)
    }

    /// Uniform pick from `palette`, `None` if it is empty
    pub fn pick(&mut self, palette: &[TileKind]) -> Option<TileKind> {
        if palette.is_empty() {
            return None;
        }
        let idx = self.inner.gen_range(0..palette.len());
        palette.get(idx).copied()
    }

    /// Draw a kind for a new tile.
    ///
    /// With `bomb_odds = Some(n)` the tile is a bomb one time in `n`; the
    /// bomb roll happens before the color pick. An empty palette with no bomb
    /// roll falls back to [`TileKind::Black`].
    pub fn next_kind(&mut self, palette: &[TileKind], bomb_odds: Option<u32>) -> TileKind {
        if let Some(odds) = bomb_odds.filter(|&n| n > 0) {
            if self.next_range(odds) == 0 {
                return TileKind::Bomb;
            }
        }
        self.pick(palette).unwrap_or(TileKind::Black)
    }

    /// Seed for the next game, drawn from this generator.
    pub fn next_seed(&mut self) -> u64 {
        self.inner.gen()
    }
}

impl Default for TileRng {
    fn default() -> Self {
        Self::new(1)
    }
}
