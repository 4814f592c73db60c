//! Tile module - one grid cell's content

use crate::types::{GridPos, TileKind};

/// A tile on the board
///
/// `row` and `column` always name the tile's slot in its column list, except
/// between a removal and the following compaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tile {
    pub kind: TileKind,
    pub row: usize,
    pub column: usize,
}

impl Tile {
    pub fn new(kind: TileKind, row: usize, column: usize) -> Self {
        Self { kind, row, column }
    }

    pub fn pos(&self) -> GridPos {
        GridPos::new(self.row, self.column)
    }

    pub fn is_bomb(&self) -> bool {
        self.kind.is_special()
    }

    /// Whether expanding a match from `self` pulls in `other`.
    ///
    /// Same kind always matches; a bomb matches anything next to it. The
    /// relation is not symmetric: a plain tile does not pull in a bomb.
    pub fn pulls_in(&self, other: &Tile) -> bool {
        self.kind == other.kind || self.is_bomb()
    }
}
