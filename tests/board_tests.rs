use minesweeper::{Board, BoardConfig, BoardError, RevealOutcome, MAX_DIMENSION, MIN_DIMENSION};
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn board_with_bombs(width: usize, height: usize, bombs: &[(usize, usize)]) -> Board {
    let mut board = Board::new(BoardConfig::new(width, height, 1));
    board.place_bombs_at(bombs).unwrap();
    board
}

fn bomb_count(board: &Board) -> usize {
    board.cells().iter().filter(|c| c.has_bomb).count()
}

#[test]
fn test_place_bombs_spares_first_click() {
    let mut board = Board::new(BoardConfig::new(10, 10, 10));
    let mut rng = SmallRng::seed_from_u64(42);
    assert!(!board.bombs_placed());
    assert_eq!(bomb_count(&board), 0);

    board.place_bombs(&mut rng, 5, 5).unwrap();

    assert!(board.bombs_placed());
    assert!(!board.cell(5, 5).unwrap().has_bomb);
    assert_eq!(bomb_count(&board), 10);
}

#[test]
fn test_place_bombs_twice_fails() {
    let mut board = Board::new(BoardConfig::new(8, 8, 5));
    let mut rng = SmallRng::seed_from_u64(1);
    board.place_bombs(&mut rng, 0, 0).unwrap();
    assert_eq!(
        board.place_bombs(&mut rng, 1, 1).unwrap_err(),
        BoardError::BombsAlreadyPlaced
    );
    assert_eq!(
        board.place_bombs_at(&[(2, 2)]).unwrap_err(),
        BoardError::BombsAlreadyPlaced
    );
    assert_eq!(bomb_count(&board), 5);
}

#[test]
fn test_place_bombs_rejects_out_of_range() {
    let mut board = Board::new(BoardConfig::new(10, 10, 10));
    let mut rng = SmallRng::seed_from_u64(3);
    assert_eq!(
        board.place_bombs(&mut rng, 10, 0).unwrap_err(),
        BoardError::InvalidCoordinate { row: 10, col: 0 }
    );
    assert!(!board.bombs_placed());
}

#[test]
fn test_explicit_layout_overrides_target() {
    let board = board_with_bombs(8, 8, &[(0, 0), (0, 0), (3, 4)]);
    assert_eq!(board.bomb_target(), 2);
    assert_eq!(bomb_count(&board), 2);

    let mut board = Board::new(BoardConfig::new(8, 8, 1));
    assert_eq!(
        board.place_bombs_at(&[(8, 0)]).unwrap_err(),
        BoardError::InvalidCoordinate { row: 8, col: 0 }
    );
}

#[test]
fn test_adjacency_counts_at_edges() {
    let board = board_with_bombs(8, 8, &[(0, 0), (0, 1), (1, 0)]);
    assert_eq!(board.cell(1, 1).unwrap().adjacent_bomb_count, 3);
    assert_eq!(board.cell(0, 2).unwrap().adjacent_bomb_count, 1);
    assert_eq!(board.cell(2, 0).unwrap().adjacent_bomb_count, 1);
    assert_eq!(board.cell(2, 2).unwrap().adjacent_bomb_count, 0);
    assert_eq!(board.cell(7, 7).unwrap().adjacent_bomb_count, 0);
}

#[test]
fn test_adjacency_recompute_is_idempotent() {
    let mut board = board_with_bombs(8, 8, &[(4, 4), (5, 5)]);
    let before = board.clone();
    board.compute_adjacency_counts();
    board.compute_adjacency_counts();
    assert_eq!(board, before);
    assert_eq!(board.cell(4, 5).unwrap().adjacent_bomb_count, 2);
}

#[test]
fn test_neighbor_counts() {
    let board = Board::new(BoardConfig::new(8, 8, 1));
    assert_eq!(board.neighbors(0, 0).count(), 3);
    assert_eq!(board.neighbors(0, 4).count(), 5);
    assert_eq!(board.neighbors(7, 7).count(), 3);
    assert_eq!(board.neighbors(3, 3).count(), 8);
    assert!(board.neighbors(7, 0).all(|(r, c)| r < 8 && c < 8));
}

#[test]
fn test_flood_reveals_empty_board() {
    let mut board = board_with_bombs(8, 8, &[]);
    assert_eq!(board.bomb_target(), 0);

    assert_eq!(board.reveal(3, 3).unwrap(), RevealOutcome::Safe);
    assert_eq!(board.flood_reveal(3, 3).unwrap(), 63);
    assert_eq!(board.count_revealed(), 64);
    assert_eq!(board.count_unrevealed(), 0);
}

#[test]
fn test_numbered_cell_does_not_cascade() {
    let mut board = board_with_bombs(8, 8, &[(0, 0)]);
    assert_eq!(board.reveal(1, 1).unwrap(), RevealOutcome::Safe);
    assert_eq!(board.cell(1, 1).unwrap().adjacent_bomb_count, 1);
    assert_eq!(board.flood_reveal(1, 1).unwrap(), 0);
    assert_eq!(board.count_revealed(), 1);
}

#[test]
fn test_flood_stops_at_numbered_border() {
    let mut board = board_with_bombs(10, 10, &[(0, 0)]);
    assert_eq!(board.reveal(9, 9).unwrap(), RevealOutcome::Safe);
    board.flood_reveal(9, 9).unwrap();

    assert_eq!(board.count_revealed(), 99);
    assert!(!board.cell(0, 0).unwrap().is_revealed);
    for (r, c) in [(0, 1), (1, 0), (1, 1)] {
        let cell = board.cell(r, c).unwrap();
        assert!(cell.is_revealed);
        assert_eq!(cell.adjacent_bomb_count, 1);
    }
}

#[test]
fn test_flood_skips_flagged_cells() {
    let mut board = board_with_bombs(8, 8, &[(7, 7)]);
    assert!(board.toggle_flag(0, 5).unwrap());
    assert_eq!(
        board.reveal(0, 5).unwrap(),
        RevealOutcome::AlreadyFlaggedOrRevealed
    );

    board.reveal(0, 0).unwrap();
    board.flood_reveal(0, 0).unwrap();

    let flagged = board.cell(0, 5).unwrap();
    assert!(flagged.is_flagged && !flagged.is_revealed);
    assert_eq!(board.count_revealed(), 62);
}

#[test]
fn test_reveal_bomb_and_repeat() {
    let mut board = board_with_bombs(8, 8, &[(2, 2)]);
    assert_eq!(board.reveal(2, 2).unwrap(), RevealOutcome::HitBomb);
    assert_eq!(
        board.reveal(2, 2).unwrap(),
        RevealOutcome::AlreadyFlaggedOrRevealed
    );
    assert_eq!(
        board.reveal(0, 8).unwrap_err(),
        BoardError::InvalidCoordinate { row: 0, col: 8 }
    );
}

#[test]
fn test_toggle_flag_on_revealed_cell_is_noop() {
    let mut board = board_with_bombs(8, 8, &[(0, 0)]);
    board.reveal(4, 4).unwrap();
    assert!(!board.toggle_flag(4, 4).unwrap());
    assert!(!board.cell(4, 4).unwrap().is_flagged);
    assert_eq!(board.count_flags(), 0);
}

#[test]
fn test_toggle_flag_twice_restores_state() {
    let mut board = Board::new(BoardConfig::new(8, 8, 4));
    assert!(board.toggle_flag(3, 6).unwrap());
    assert!(!board.toggle_flag(3, 6).unwrap());
    assert_eq!(board.cell(3, 6).unwrap(), &minesweeper::Cell::default());
}

#[test]
fn test_flag_counters() {
    let mut board = board_with_bombs(8, 8, &[(1, 1), (6, 6)]);
    board.toggle_flag(1, 1).unwrap();
    board.toggle_flag(2, 2).unwrap();
    assert_eq!(board.count_flags(), 2);
    assert_eq!(board.count_flagged_bombs(), 1);
}

#[test]
fn test_reveal_all_exposes_only_bombs() {
    let mut board = board_with_bombs(8, 8, &[(1, 1), (6, 6)]);
    board.reveal(4, 0).unwrap();
    board.toggle_flag(7, 0).unwrap();
    board.toggle_flag(6, 6).unwrap();

    board.reveal_all();

    assert!(board.cell(1, 1).unwrap().is_revealed);
    assert!(board.cell(6, 6).unwrap().is_revealed);
    assert!(board.cell(4, 0).unwrap().is_revealed);
    assert!(!board.cell(5, 5).unwrap().is_revealed);
    assert_eq!(board.count_flags(), 0);
    assert_eq!(board.count_revealed(), 3);
}

#[test]
fn test_new_board_clamps_configuration() {
    let board = Board::new(BoardConfig::new(2, 100, 1000));
    assert_eq!(board.width(), MIN_DIMENSION);
    assert_eq!(board.height(), MAX_DIMENSION);
    assert_eq!(board.bomb_target(), MIN_DIMENSION * MAX_DIMENSION / 3);

    let board = Board::new(BoardConfig::new(10, 10, 0));
    assert_eq!(board.bomb_target(), 1);
}
