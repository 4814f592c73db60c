//! Board tests - grid, matching, removal and refill

use tile_smash::core::{Board, MatchSet, TileRng};
use tile_smash::types::{GridPos, TileKind, COLUMN_COUNT, ROW_COUNT};

fn checkerboard(columns: usize, rows: usize) -> Vec<Vec<TileKind>> {
    (0..columns)
        .map(|c| {
            (0..rows)
                .map(|r| {
                    if (c + r) % 2 == 0 {
                        TileKind::Red
                    } else {
                        TileKind::Blue
                    }
                })
                .collect()
        })
        .collect()
}

fn column_kinds(board: &Board, column: usize) -> Vec<TileKind> {
    board
        .column(column)
        .map(|tiles| tiles.iter().map(|t| t.kind).collect())
        .unwrap_or_default()
}

#[test]
fn test_board_new_empty() {
    let board = Board::default();
    assert_eq!(board.column_count(), COLUMN_COUNT);
    assert_eq!(board.row_count(), ROW_COUNT);
    assert_eq!(board.tile_count(), 0);
    assert!(!board.is_full());

    for column in 0..COLUMN_COUNT {
        assert_eq!(board.column(column).map(|c| c.len()), Some(0));
    }
    assert!(board.column(COLUMN_COUNT).is_none());
}

#[test]
fn test_initial_fill() {
    let mut board = Board::default();
    let mut rng = TileRng::new(12345);
    let refill = board.compact_and_refill(false, &mut rng);

    assert!(board.is_full());
    assert_eq!(refill.spawned.len(), COLUMN_COUNT * ROW_COUNT);
    assert!(refill.moved.is_empty());
    assert!(board.tiles().all(|t| TileKind::PALETTE.contains(&t.kind)));
}

#[test]
fn test_tile_positions_match_slots() {
    let mut board = Board::default();
    let mut rng = TileRng::new(3);
    board.compact_and_refill(false, &mut rng);

    for column in 0..COLUMN_COUNT {
        for row in 0..ROW_COUNT {
            let tile = board.tile_at(row, column).unwrap();
            assert_eq!((tile.row, tile.column), (row, column));
        }
    }
}

#[test]
fn test_tile_at_out_of_bounds() {
    let board = Board::from_columns(3, checkerboard(3, 3));
    assert!(board.tile_at(3, 0).is_none());
    assert!(board.tile_at(0, 3).is_none());
    assert!(board.tile_at(usize::MAX, usize::MAX).is_none());
}

#[test]
fn test_find_matches_chain_of_four() {
    let mut columns = checkerboard(COLUMN_COUNT, ROW_COUNT);
    for row in 0..4 {
        columns[5][row] = TileKind::Green;
    }
    let board = Board::from_columns(ROW_COUNT, columns);

    let matches = board.find_matches(GridPos::new(2, 5));
    assert_eq!(matches.len(), 4);
    assert_eq!(matches.count_in_column(5), 4);
    for row in 0..4 {
        assert!(matches.contains(&GridPos::new(row, 5)));
    }
}

#[test]
fn test_find_matches_l_shape_across_columns() {
    let mut columns = checkerboard(4, 4);
    columns[0][0] = TileKind::Green;
    columns[1][0] = TileKind::Green;
    columns[2][0] = TileKind::Green;
    columns[2][1] = TileKind::Green;
    let board = Board::from_columns(4, columns);

    let matches = board.find_matches(GridPos::new(1, 2));
    assert_eq!(matches.len(), 4);
    let order: Vec<GridPos> = matches.iter().copied().collect();
    assert_eq!(
        order,
        vec![
            GridPos::new(0, 0),
            GridPos::new(0, 1),
            GridPos::new(0, 2),
            GridPos::new(1, 2),
        ]
    );
}

#[test]
fn test_bomb_chain_stops_at_plain_tiles() {
    // The bomb pulls in its neighbours; they expand by their own kind only
    let mut columns = vec![vec![TileKind::Blue; 5]; 5];
    columns[2][2] = TileKind::Bomb;
    columns[0][0] = TileKind::Red;
    let board = Board::from_columns(5, columns);

    let matches = board.find_matches(GridPos::new(2, 2));
    // Every blue tile is connected through blue neighbours
    assert_eq!(matches.len(), 24);
    assert!(!matches.contains(&GridPos::new(0, 0)));
}

#[test]
fn test_remove_compact_preserves_column_order() {
    let mut columns = checkerboard(COLUMN_COUNT, ROW_COUNT);
    for row in 0..4 {
        columns[5][row] = TileKind::Green;
    }
    let mut board = Board::from_columns(ROW_COUNT, columns);
    let before = column_kinds(&board, 5);

    let matches = board.find_matches(GridPos::new(0, 5));
    let removed = board.remove_matches(&matches);
    assert_eq!(removed.len(), 4);
    assert!(removed.iter().all(|t| t.kind == TileKind::Green));

    let mut rng = TileRng::new(99);
    let refill = board.compact_and_refill(false, &mut rng);

    assert!(board.is_full());
    assert_eq!(refill.moved.len(), ROW_COUNT - 4);
    assert_eq!(refill.spawned.len(), 4);
    assert_eq!(refill.animation_count(), ROW_COUNT);

    let after = column_kinds(&board, 5);
    assert_eq!(&after[..ROW_COUNT - 4], &before[4..]);
    for (idx, tile) in board.column(5).unwrap().iter().enumerate() {
        assert_eq!(tile.row, idx);
    }

    // Other columns untouched
    assert_eq!(column_kinds(&board, 4), checkerboard(COLUMN_COUNT, ROW_COUNT)[4]);
}

#[test]
fn test_remove_empty_match_set() {
    let mut board = Board::from_columns(3, checkerboard(3, 3));
    let removed = board.remove_matches(&MatchSet::default());
    assert!(removed.is_empty());
    assert!(board.is_full());
}

#[test]
fn test_refill_with_bombs_allowed_is_seeded() {
    let mut a = Board::new(COLUMN_COUNT, ROW_COUNT);
    let mut b = Board::new(COLUMN_COUNT, ROW_COUNT);
    let mut rng_a = TileRng::new(2024);
    let mut rng_b = TileRng::new(2024);
    a.compact_and_refill(true, &mut rng_a);
    b.compact_and_refill(true, &mut rng_b);
    assert_eq!(a.kinds(), b.kinds());
}

#[test]
fn test_initial_fill_never_has_bombs() {
    for seed in 0..50 {
        let mut board = Board::default();
        let mut rng = TileRng::new(seed);
        board.compact_and_refill(false, &mut rng);
        assert!(board.tiles().all(|t| !t.is_bomb()), "seed {}", seed);
    }
}

#[test]
fn test_clear_board() {
    let mut board = Board::from_columns(3, checkerboard(3, 3));
    board.clear();
    assert_eq!(board.tile_count(), 0);
    assert_eq!(board.column_count(), 3);
}
