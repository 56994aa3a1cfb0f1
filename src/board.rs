//! Core puzzle board: the 3x3 sliding-tile grid as an immutable value type.
//!
//! A `Board` is a row-major `[u8; 9]` permutation of the values 0..=8 where 0
//! marks the blank cell. Every operation that changes the arrangement returns
//! a fresh `Board`; nothing mutates in place, so snapshotting and undo fall
//! out for free. The permutation invariant is enforced at every construction
//! boundary (`from_cells` / `shuffled` / `apply_move`), which is why lookups
//! inside the grid never need to handle a missing blank.

use rand::Rng;
use rand::seq::SliceRandom;
use std::fmt;

/// Grid side length. The engine is specific to the classic 8-puzzle.
pub const GRID_SIDE: u8 = 3;
/// Total cell count (`GRID_SIDE` squared).
pub const CELL_COUNT: usize = 9;
/// Cell value representing the blank.
pub const BLANK: u8 = 0;

/// Errors from board construction and move application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// The cell values are not a permutation of 0..=8. Indicates a
    /// construction bug or malformed external input; fatal.
    InvariantViolation,
    /// `apply_move` was called for a tile that is not adjacent to the blank.
    InvalidMove,
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::InvariantViolation => {
                write!(f, "board cells are not a permutation of 0..=8")
            }
            BoardError::InvalidMove => write!(f, "tile is not adjacent to the blank"),
        }
    }
}

impl std::error::Error for BoardError {}

/// A (row, col) cell coordinate, each component in `0..GRID_SIDE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    row: u8,
    col: u8,
}

impl Position {
    /// Build a position, rejecting out-of-grid coordinates.
    pub fn new(row: u8, col: u8) -> Option<Position> {
        (row < GRID_SIDE && col < GRID_SIDE).then_some(Position { row, col })
    }

    pub fn row(&self) -> u8 {
        self.row
    }

    pub fn col(&self) -> u8 {
        self.col
    }

    fn index(&self) -> usize {
        self.row as usize * GRID_SIDE as usize + self.col as usize
    }

    fn from_index(idx: usize) -> Position {
        Position {
            row: (idx / GRID_SIDE as usize) as u8,
            col: (idx % GRID_SIDE as usize) as u8,
        }
    }
}

/// The 3x3 puzzle board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "[u8; 9]", into = "[u8; 9]")
)]
pub struct Board {
    cells: [u8; CELL_COUNT],
}

impl Board {
    /// The canonical solved arrangement: 1..=8 in row-major order, blank last.
    pub const SOLVED: Board = Board {
        cells: [1, 2, 3, 4, 5, 6, 7, 8, 0],
    };

    /// Build a board from row-major cells, verifying the permutation
    /// invariant. This is the only entry point for externally supplied
    /// arrangements.
    pub fn from_cells(cells: [u8; CELL_COUNT]) -> Result<Board, BoardError> {
        let mut seen = [false; CELL_COUNT];
        for &v in &cells {
            if v as usize >= CELL_COUNT || seen[v as usize] {
                return Err(BoardError::InvariantViolation);
            }
            seen[v as usize] = true;
        }
        Ok(Board { cells })
    }

    /// Generate a random solvable board: Fisher-Yates shuffle, retried until
    /// the arrangement passes the solvability test. Exactly half of all
    /// permutations are solvable, so this settles after ~2 attempts.
    pub fn shuffled(rng: &mut impl Rng) -> Board {
        let mut cells = Board::SOLVED.cells;
        loop {
            cells.shuffle(rng);
            let board = Board { cells };
            if board.is_solvable() {
                return board;
            }
        }
    }

    /// Row-major cell snapshot (0 is the blank).
    pub fn cells(&self) -> &[u8; CELL_COUNT] {
        &self.cells
    }

    /// Value at a cell.
    pub fn value_at(&self, pos: Position) -> u8 {
        self.cells[pos.index()]
    }

    /// Locate the blank cell (row-major scan).
    pub fn blank_position(&self) -> Position {
        for (idx, &v) in self.cells.iter().enumerate() {
            if v == BLANK {
                return Position::from_index(idx);
            }
        }
        // Every constructor enforces the permutation invariant, so a blank is
        // always present.
        unreachable!("board holds no blank cell")
    }

    /// Solvability via inversion parity: on an odd-width grid an arrangement
    /// is reachable from the solved state iff the number of out-of-order
    /// pairs among the non-blank values (row-major) is even.
    pub fn is_solvable(&self) -> bool {
        let tiles: Vec<u8> = self
            .cells
            .iter()
            .copied()
            .filter(|&v| v != BLANK)
            .collect();
        let mut inversions = 0usize;
        for i in 0..tiles.len() {
            for j in i + 1..tiles.len() {
                if tiles[i] > tiles[j] {
                    inversions += 1;
                }
            }
        }
        inversions % 2 == 0
    }

    /// Whether the tile at `pos` can slide into the blank: true iff `pos` is
    /// orthogonally adjacent to it. The blank cell itself is never movable.
    pub fn can_move(&self, pos: Position) -> bool {
        let blank = self.blank_position();
        pos.row.abs_diff(blank.row) + pos.col.abs_diff(blank.col) == 1
    }

    /// Apply a move: a new board with the tile at `pos` and the blank
    /// swapped. The caller is expected to have checked `can_move`; a
    /// non-adjacent target is a caller error, reported as `InvalidMove`
    /// without touching anything.
    pub fn apply_move(&self, pos: Position) -> Result<Board, BoardError> {
        if !self.can_move(pos) {
            return Err(BoardError::InvalidMove);
        }
        let blank = self.blank_position();
        let mut cells = self.cells;
        cells.swap(pos.index(), blank.index());
        Ok(Board { cells })
    }

    /// Whether the board equals the canonical solved arrangement.
    pub fn is_solved(&self) -> bool {
        *self == Board::SOLVED
    }
}

impl TryFrom<[u8; CELL_COUNT]> for Board {
    type Error = BoardError;

    fn try_from(cells: [u8; CELL_COUNT]) -> Result<Board, BoardError> {
        Board::from_cells(cells)
    }
}

impl From<Board> for [u8; CELL_COUNT] {
    fn from(board: Board) -> [u8; CELL_COUNT] {
        board.cells
    }
}
