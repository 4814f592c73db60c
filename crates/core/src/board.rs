//! Board module - manages the tile grid
//!
//! The board is a list of columns, each a list of tiles ordered bottom to top
//! (index 0 is the bottom row). Default size is 18 columns by 12 rows.
//!
//! A tap transaction drives the board through four steps:
//!
//! 1. [`Board::find_matches`] - worklist flood fill from the tapped slot
//! 2. [`Board::remove_matches`] - delete matched tiles from their columns
//! 3. [`Board::compact_and_refill`] - renumber survivors, top columns back up
//! 4. [`Board::recolor_all`] - only for the single-tile penalty
//!
//! Removal never leaves holes inside a column: deleting from a `Vec` shifts
//! everything above down, which is exactly gravity. Compaction only has to
//! bring each tile's `row` back in line with its index.

use std::collections::BTreeSet;

use arrayvec::ArrayVec;

use crate::rng::TileRng;
use crate::tile::Tile;
use crate::types::{GridPos, TileKind, BOMB_ODDS, COLUMN_COUNT, ROW_COUNT};

/// Positions connected to a tapped tile
///
/// Iterates column by column, bottom to top.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchSet {
    positions: BTreeSet<GridPos>,
}

impl MatchSet {
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn contains(&self, pos: &GridPos) -> bool {
        self.positions.contains(pos)
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &GridPos> {
        self.positions.iter()
    }

    /// Number of matched slots in `column`
    pub fn count_in_column(&self, column: usize) -> usize {
        self.positions
            .range(GridPos::new(0, column)..GridPos::new(0, column + 1))
            .count()
    }
}

impl FromIterator<GridPos> for MatchSet {
    fn from_iter<I: IntoIterator<Item = GridPos>>(iter: I) -> Self {
        Self {
            positions: iter.into_iter().collect(),
        }
    }
}

/// A surviving tile that slid down during compaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileMove {
    pub kind: TileKind,
    pub column: usize,
    pub from_row: usize,
    pub to_row: usize,
}

/// Everything a compaction pass changed, for the presentation layer to animate
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Refill {
    /// Survivors whose row changed, bottom-up per column
    pub moved: Vec<TileMove>,
    /// Fresh tiles, bottom-up per column
    pub spawned: Vec<Tile>,
}

impl Refill {
    /// Animations the presentation layer will run for this pass
    pub fn animation_count(&self) -> usize {
        self.moved.len() + self.spawned.len()
    }
}

/// The game board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    column_count: usize,
    row_count: usize,
    palette: Vec<TileKind>,
    bomb_odds: u32,
    /// `cells[column][row]`, row 0 at the bottom
    cells: Vec<Vec<Tile>>,
}

impl Board {
    /// Create an empty board with the default palette and bomb odds
    pub fn new(column_count: usize, row_count: usize) -> Self {
        Self {
            column_count,
            row_count,
            palette: TileKind::PALETTE.to_vec(),
            bomb_odds: BOMB_ODDS,
            cells: (0..column_count)
                .map(|_| Vec::with_capacity(row_count))
                .collect(),
        }
    }

    /// Replace the palette and bomb odds used for new tiles
    pub fn with_palette(mut self, palette: &[TileKind], bomb_odds: u32) -> Self {
        self.palette = palette.to_vec();
        self.bomb_odds = bomb_odds;
        self
    }

    /// Build a board from explicit column contents (bottom to top).
    ///
    /// Columns longer than `row_count` are truncated. The column count is
    /// `columns.len()`.
    pub fn from_columns(row_count: usize, columns: Vec<Vec<TileKind>>) -> Self {
        let mut board = Self::new(columns.len(), row_count);
        for (column_idx, kinds) in columns.into_iter().enumerate() {
            board.cells[column_idx] = kinds
                .into_iter()
                .take(row_count)
                .enumerate()
                .map(|(row, kind)| Tile::new(kind, row, column_idx))
                .collect();
        }
        board
    }

    pub fn column_count(&self) -> usize {
        self.column_count
    }

    pub fn row_count(&self) -> usize {
        self.row_count
    }

    pub fn palette(&self) -> &[TileKind] {
        &self.palette
    }

    /// Tiles of one column, bottom to top
    pub fn column(&self, column: usize) -> Option<&[Tile]> {
        self.cells.get(column).map(Vec::as_slice)
    }

    /// All tiles, column by column
    pub fn tiles(&self) -> impl Iterator<Item = &Tile> {
        self.cells.iter().flatten()
    }

    pub fn tile_count(&self) -> usize {
        self.cells.iter().map(Vec::len).sum()
    }

    /// True when every column holds exactly `row_count` tiles
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| c.len() == self.row_count)
    }

    /// Get the tile at (row, column)
    /// Returns None if out of bounds or the slot is empty
    pub fn tile_at(&self, row: usize, column: usize) -> Option<&Tile> {
        self.cells.get(column).and_then(|c| c.get(row))
    }

    fn tile_at_pos(&self, pos: GridPos) -> Option<&Tile> {
        self.tile_at(pos.row, pos.column)
    }

    /// Create a tile and place it into `column` at `row`.
    ///
    /// `row` past the top of the column appends. Tiles above an inserted
    /// tile are renumbered so rows keep matching indices. Returns `None` for
    /// an out-of-range column or a full column.
    pub fn create_tile(
        &mut self,
        row: usize,
        column: usize,
        allow_special: bool,
        rng: &mut TileRng,
    ) -> Option<Tile> {
        let odds = allow_special.then_some(self.bomb_odds);
        let cells = self.cells.get_mut(column)?;
        if cells.len() >= self.row_count {
            return None;
        }

        let kind = rng.next_kind(&self.palette, odds);
        let row = row.min(cells.len());
        cells.insert(row, Tile::new(kind, row, column));
        for (idx, tile) in cells.iter_mut().enumerate().skip(row + 1) {
            tile.row = idx;
        }
        cells.get(row).copied()
    }

    /// In-bounds orthogonal neighbours: up, down, left, right
    fn neighbours(&self, pos: GridPos) -> ArrayVec<GridPos, 4> {
        let mut out = ArrayVec::new();
        if pos.row + 1 < self.row_count {
            out.push(GridPos::new(pos.row + 1, pos.column));
        }
        if pos.row > 0 {
            out.push(GridPos::new(pos.row - 1, pos.column));
        }
        if pos.column > 0 {
            out.push(GridPos::new(pos.row, pos.column - 1));
        }
        if pos.column + 1 < self.column_count {
            out.push(GridPos::new(pos.row, pos.column + 1));
        }
        out
    }

    /// Flood fill from `origin`.
    ///
    /// A neighbour joins when the tile being expanded pulls it in (same
    /// kind, or the expanded tile is a bomb); expansion then continues from
    /// the neighbour using its own kind. Returns an empty set when there is
    /// no tile at `origin`.
    pub fn find_matches(&self, origin: GridPos) -> MatchSet {
        let mut found = BTreeSet::new();
        if self.tile_at_pos(origin).is_none() {
            return MatchSet { positions: found };
        }

        found.insert(origin);
        let mut stack = vec![origin];

        while let Some(pos) = stack.pop() {
            let Some(current) = self.tile_at_pos(pos) else {
                continue;
            };
            for next in self.neighbours(pos) {
                if found.contains(&next) {
                    continue;
                }
                let Some(candidate) = self.tile_at_pos(next) else {
                    continue;
                };
                if current.pulls_in(candidate) {
                    found.insert(next);
                    stack.push(next);
                }
            }
        }

        MatchSet { positions: found }
    }

    /// Remove every matched tile from its column.
    ///
    /// Each column is emptied from its highest matched index down so the
    /// lower indices stay valid. Survivors keep their relative order; their
    /// `row` fields are stale until [`Board::compact_and_refill`].
    /// Returns the removed tiles, column by column, bottom to top.
    pub fn remove_matches(&mut self, matches: &MatchSet) -> Vec<Tile> {
        let mut removed = Vec::with_capacity(matches.len());
        for pos in matches.iter().rev() {
            let Some(cells) = self.cells.get_mut(pos.column) else {
                continue;
            };
            if pos.row < cells.len() {
                removed.push(cells.remove(pos.row));
            }
        }
        removed.reverse();
        removed
    }

    /// Renumber survivors to their indices, then top every column up to
    /// `row_count` with fresh tiles appended above.
    ///
    /// `allow_special` lets fresh tiles roll for a bomb.
    pub fn compact_and_refill(&mut self, allow_special: bool, rng: &mut TileRng) -> Refill {
        let mut refill = Refill::default();

        for column_idx in 0..self.column_count {
            if let Some(cells) = self.cells.get_mut(column_idx) {
                for (row_idx, tile) in cells.iter_mut().enumerate() {
                    if tile.row != row_idx {
                        refill.moved.push(TileMove {
                            kind: tile.kind,
                            column: column_idx,
                            from_row: tile.row,
                            to_row: row_idx,
                        });
                        tile.row = row_idx;
                    }
                    tile.column = column_idx;
                }
            }

            // Past the top always appends; stops once the column is full
            while let Some(tile) =
                self.create_tile(self.row_count, column_idx, allow_special, rng)
            {
                refill.spawned.push(tile);
            }
        }

        refill
    }

    /// Give every tile a new kind drawn uniformly from `palette`.
    ///
    /// Positions are untouched. An empty palette leaves the board as is.
    pub fn recolor_all(&mut self, palette: &[TileKind], rng: &mut TileRng) {
        if palette.is_empty() {
            return;
        }
        for tile in self.cells.iter_mut().flatten() {
            if let Some(kind) = rng.pick(palette) {
                tile.kind = kind;
            }
        }
    }

    /// Column-major copy of the tile kinds, bottom to top
    pub fn kinds(&self) -> Vec<Vec<TileKind>> {
        self.cells
            .iter()
            .map(|c| c.iter().map(|t| t.kind).collect())
            .collect()
    }

    /// Remove every tile
    pub fn clear(&mut self) {
        for cells in &mut self.cells {
            cells.clear();
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(COLUMN_COUNT, ROW_COUNT)
    }
}
