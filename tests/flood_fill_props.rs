//! Property tests for flood fill and compaction

use std::collections::BTreeSet;

use proptest::prelude::*;
use tile_smash::core::{Board, TileRng};
use tile_smash::types::{GridPos, TileKind};

fn kind_strategy() -> impl Strategy<Value = TileKind> {
    prop_oneof![
        4 => Just(TileKind::Red),
        4 => Just(TileKind::Blue),
        4 => Just(TileKind::Green),
        1 => Just(TileKind::Bomb),
    ]
}

/// (row_count, columns, origin)
fn board_strategy() -> impl Strategy<Value = (usize, Vec<Vec<TileKind>>, GridPos)> {
    (1usize..8, 1usize..8).prop_flat_map(|(columns, rows)| {
        (
            Just(rows),
            prop::collection::vec(prop::collection::vec(kind_strategy(), rows), columns),
            (0..rows, 0..columns).prop_map(|(r, c)| GridPos::new(r, c)),
        )
    })
}

fn neighbours(pos: GridPos, columns: usize, rows: usize) -> Vec<GridPos> {
    let mut out = Vec::new();
    if pos.row + 1 < rows {
        out.push(GridPos::new(pos.row + 1, pos.column));
    }
    if pos.row > 0 {
        out.push(GridPos::new(pos.row - 1, pos.column));
    }
    if pos.column > 0 {
        out.push(GridPos::new(pos.row, pos.column - 1));
    }
    if pos.column + 1 < columns {
        out.push(GridPos::new(pos.row, pos.column + 1));
    }
    out
}

/// Straightforward recursive reference fill
fn reference_fill(kinds: &[Vec<TileKind>], rows: usize, origin: GridPos) -> BTreeSet<GridPos> {
    fn visit(
        kinds: &[Vec<TileKind>],
        rows: usize,
        pos: GridPos,
        seen: &mut BTreeSet<GridPos>,
    ) {
        let here = kinds[pos.column][pos.row];
        for next in neighbours(pos, kinds.len(), rows) {
            let there = kinds[next.column][next.row];
            if !seen.contains(&next) && (here == there || here == TileKind::Bomb) {
                seen.insert(next);
                visit(kinds, rows, next, seen);
            }
        }
    }

    let mut seen = BTreeSet::from([origin]);
    visit(kinds, rows, origin, &mut seen);
    seen
}

proptest! {
    #[test]
    fn flood_fill_matches_reference((rows, kinds, origin) in board_strategy()) {
        let board = Board::from_columns(rows, kinds.clone());
        let found: BTreeSet<GridPos> = board.find_matches(origin).iter().copied().collect();

        prop_assert!(found.contains(&origin));
        prop_assert_eq!(found, reference_fill(&kinds, rows, origin));
    }

    #[test]
    fn flood_fill_is_closed((rows, kinds, origin) in board_strategy()) {
        let board = Board::from_columns(rows, kinds.clone());
        let matches = board.find_matches(origin);

        for pos in matches.iter() {
            let here = kinds[pos.column][pos.row];
            for next in neighbours(*pos, kinds.len(), rows) {
                let there = kinds[next.column][next.row];
                if here == there || here == TileKind::Bomb {
                    prop_assert!(matches.contains(&next));
                }
            }
        }
    }

    #[test]
    fn compaction_keeps_survivor_order((rows, kinds, origin) in board_strategy(), seed in any::<u64>()) {
        let mut board = Board::from_columns(rows, kinds.clone());
        let matches = board.find_matches(origin);
        let removed = board.remove_matches(&matches);
        prop_assert_eq!(removed.len(), matches.len());

        let mut rng = TileRng::new(seed);
        let refill = board.compact_and_refill(true, &mut rng);
        prop_assert!(board.is_full());
        prop_assert_eq!(refill.spawned.len(), matches.len());

        for (column, old) in kinds.iter().enumerate() {
            let survivors: Vec<TileKind> = old
                .iter()
                .enumerate()
                .filter(|(row, _)| !matches.contains(&GridPos::new(*row, column)))
                .map(|(_, kind)| *kind)
                .collect();
            let now = board.column(column).unwrap();
            let prefix: Vec<TileKind> = now.iter().take(survivors.len()).map(|t| t.kind).collect();
            prop_assert_eq!(prefix, survivors);
            for (row, tile) in now.iter().enumerate() {
                prop_assert_eq!((tile.row, tile.column), (row, column));
            }
        }
    }
}
