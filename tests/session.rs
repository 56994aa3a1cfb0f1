// Integration tests (native) for the game session state machine: move
// acceptance, no-op handling, lock gating, directional moves, and restart
// semantics. These avoid wasm-specific functionality (the timed release is
// exercised through `release_lock` directly) so they run on the host.

use slide_puzzle::{Board, Direction, GameSession, Phase, Position};

fn pos(row: u8, col: u8) -> Position {
    Position::new(row, col).expect("test coordinates in range")
}

/// One legal move from solved: the 8 slid right, blank at (2, 1).
fn one_move_from_solved() -> Board {
    Board::from_cells([1, 2, 3, 4, 5, 6, 7, 0, 8]).expect("valid arrangement")
}

/// Blank centered, so every edge-center tile is movable.
fn blank_centered() -> Board {
    Board::from_cells([1, 2, 3, 4, 0, 5, 6, 7, 8]).expect("valid arrangement")
}

#[test]
fn solving_move_transitions_to_solved_and_counts() {
    let mut session = GameSession::from_board(one_move_from_solved(), 7);
    let outcome = session.attempt_move(pos(2, 2)); // slide the 8 back left
    assert!(outcome.moved);
    assert!(outcome.solved);
    assert_eq!(session.board(), Board::SOLVED);
    assert_eq!(session.moves(), 1);
    assert_eq!(session.phase(), Phase::Solved);
}

#[test]
fn non_adjacent_clicks_are_idempotent_no_ops() {
    let mut session = GameSession::from_board(one_move_from_solved(), 7);
    let before = session.board();
    // calling twice must look exactly like calling once
    for _ in 0..2 {
        let outcome = session.attempt_move(pos(0, 0));
        assert!(!outcome.moved);
        assert_eq!(session.board(), before);
        assert_eq!(session.moves(), 0);
        assert_eq!(session.phase(), Phase::Playing);
    }
}

#[test]
fn clicking_the_blank_is_a_no_op() {
    let mut session = GameSession::from_board(one_move_from_solved(), 7);
    let outcome = session.attempt_move(pos(2, 1));
    assert!(!outcome.moved);
    assert_eq!(session.moves(), 0);
    assert!(!session.is_locked());
}

#[test]
fn moves_are_ignored_once_solved() {
    let mut session = GameSession::from_board(one_move_from_solved(), 7);
    assert!(session.attempt_move(pos(2, 2)).moved);
    session.release_lock(session.generation());
    let before = session.board();
    // 8 now sits next to the blank again, but the session is terminal
    let outcome = session.attempt_move(pos(2, 1));
    assert!(!outcome.moved);
    assert!(outcome.solved);
    assert_eq!(session.board(), before);
    assert_eq!(session.moves(), 1);
}

#[test]
fn lock_gates_back_to_back_moves() {
    let mut session = GameSession::from_board(blank_centered(), 7);
    assert!(session.attempt_move(pos(0, 1)).moved);
    assert!(session.is_locked());
    // a second, otherwise-valid move before the release is ignored
    let second = session.attempt_move(pos(1, 1));
    assert!(!second.moved);
    assert_eq!(session.moves(), 1);
    // after the timed release fires, the same move is accepted
    assert!(session.release_lock(session.generation()));
    assert!(!session.is_locked());
    assert!(session.attempt_move(pos(1, 1)).moved);
    assert_eq!(session.moves(), 2);
}

#[test]
fn directional_moves_slide_the_matching_neighbor() {
    let cases = [
        (Direction::Up, [1, 2, 3, 4, 7, 5, 6, 0, 8]),
        (Direction::Down, [1, 0, 3, 4, 2, 5, 6, 7, 8]),
        (Direction::Left, [1, 2, 3, 4, 5, 0, 6, 7, 8]),
        (Direction::Right, [1, 2, 3, 0, 4, 5, 6, 7, 8]),
    ];
    for (direction, expected) in cases {
        let mut session = GameSession::from_board(blank_centered(), 7);
        let outcome = session.attempt_directional_move(direction);
        assert!(outcome.moved, "{:?} should move a tile", direction);
        assert_eq!(session.board(), Board::from_cells(expected).unwrap());
        assert_eq!(session.moves(), 1);
    }
}

#[test]
fn directional_move_off_the_grid_is_a_no_op() {
    // four legal moves from solved, leaving the blank in the bottom-right
    // corner of an unsolved board
    let board = Board::from_cells([1, 2, 3, 4, 6, 8, 7, 5, 0]).unwrap();
    let mut session = GameSession::from_board(board, 7);
    // no tile below or right of the blank
    assert!(!session.attempt_directional_move(Direction::Up).moved);
    assert!(!session.attempt_directional_move(Direction::Left).moved);
    assert_eq!(session.moves(), 0);
    assert!(!session.is_locked());
    // the in-grid directions still work
    assert!(session.attempt_directional_move(Direction::Down).moved);
    assert_eq!(session.moves(), 1);
}

#[test]
fn restart_resets_counters_and_regenerates() {
    let mut session = GameSession::new(99);
    let generation_before = session.generation();
    let mut moved = false;
    for direction in [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ] {
        if session.attempt_directional_move(direction).moved {
            moved = true;
            break;
        }
    }
    assert!(moved, "some direction must be movable from any arrangement");
    session.restart();
    assert_eq!(session.moves(), 0);
    assert_eq!(session.phase(), Phase::Playing);
    assert!(!session.is_locked());
    assert!(session.board().is_solvable());
    assert_eq!(session.generation(), generation_before + 1);
}

#[test]
fn stale_lock_release_from_before_restart_is_ignored() {
    let mut session = GameSession::from_board(blank_centered(), 7);
    assert!(session.attempt_move(pos(1, 0)).moved);
    assert!(session.is_locked());
    let stale = session.generation();
    session.restart(); // supersedes the pending release
    assert!(!session.is_locked());
    assert!(!session.release_lock(stale));
    assert_eq!(session.moves(), 0);
    assert!(!session.is_locked());
}

#[test]
fn release_without_engaged_lock_reports_false() {
    let mut session = GameSession::new(3);
    assert!(!session.release_lock(session.generation()));
}

#[test]
fn sessions_with_equal_seeds_deal_equal_boards() {
    assert_eq!(GameSession::new(5).board(), GameSession::new(5).board());
}

#[test]
fn from_board_over_a_solved_arrangement_starts_solved() {
    let session = GameSession::from_board(Board::SOLVED, 7);
    assert_eq!(session.phase(), Phase::Solved);
}

#[test]
fn movability_query_tracks_the_blank() {
    let session = GameSession::from_board(blank_centered(), 7);
    assert!(session.is_movable(pos(0, 1)));
    assert!(!session.is_movable(pos(0, 0)));
    assert!(!session.is_movable(pos(1, 1))); // the blank itself
}
