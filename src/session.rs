//! Game session state machine.
//!
//! `GameSession` owns the live board, the move counter, the `Playing` /
//! `Solved` phase and the transient interaction lock. It is the single
//! mutable object in the engine; the embedding layer owns exactly one per
//! active game and drives it synchronously from its input handlers. The only
//! temporal element is the lock: an accepted move engages it, and one timed
//! release event (scheduled by the embedding layer) clears it. Releases carry
//! the generation tag they were scheduled under so a restart mid-lock
//! invalidates them.

use rand::SeedableRng;
use rand::rngs::SmallRng;

use crate::board::{BLANK, Board, Position};

/// Session phase. `Solved` is terminal until `restart`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Playing,
    Solved,
}

/// Keyboard-style move directions. A direction names the way a tile slides
/// into the blank: `Up` moves the tile below the blank upward, and so on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// (row, col) offset from the blank to the tile that would slide in this
    /// direction.
    fn blank_offset(self) -> (i8, i8) {
        match self {
            Direction::Up => (1, 0),
            Direction::Down => (-1, 0),
            Direction::Left => (0, 1),
            Direction::Right => (0, -1),
        }
    }
}

/// Result of a move command. `moved == false` is a silent no-op (blank or
/// non-adjacent target, off-grid direction, session solved or locked): board,
/// counter and phase are all untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    /// Whether a move was applied (and the move counter incremented).
    pub moved: bool,
    /// Whether the session is solved after this command.
    pub solved: bool,
}

/// A single game. Replaced wholesale by `restart`; there is no partial reset.
pub struct GameSession {
    board: Board,
    moves: u32,
    phase: Phase,
    locked: bool,
    generation: u32,
    rng: SmallRng,
}

impl GameSession {
    /// Start a session with a freshly generated board. The same seed deals
    /// the same board sequence across restarts.
    pub fn new(seed: u64) -> GameSession {
        let mut rng = SmallRng::seed_from_u64(seed);
        let board = Board::shuffled(&mut rng);
        GameSession::over_board(board, rng)
    }

    /// Start a session seeded from OS / browser entropy.
    pub fn from_entropy() -> GameSession {
        let mut rng = SmallRng::from_entropy();
        let board = Board::shuffled(&mut rng);
        GameSession::over_board(board, rng)
    }

    /// Start a session over a caller-supplied board (already validated by
    /// `Board::from_cells`). Restarts fall back to generated boards drawn
    /// from `seed`.
    pub fn from_board(board: Board, seed: u64) -> GameSession {
        GameSession::over_board(board, SmallRng::seed_from_u64(seed))
    }

    fn over_board(board: Board, rng: SmallRng) -> GameSession {
        GameSession {
            board,
            moves: 0,
            phase: GameSession::phase_of(board),
            locked: false,
            generation: 0,
            rng,
        }
    }

    fn phase_of(board: Board) -> Phase {
        if board.is_solved() {
            Phase::Solved
        } else {
            Phase::Playing
        }
    }

    fn ignored(&self) -> MoveOutcome {
        MoveOutcome {
            moved: false,
            solved: self.phase == Phase::Solved,
        }
    }

    /// Attempt to slide the tile at `pos` into the blank.
    ///
    /// No-ops (returning `moved: false`) when the session is solved or
    /// locked, when `pos` holds the blank, or when the tile is not adjacent
    /// to the blank. On success the board is replaced, the move counter
    /// increments, the interaction lock engages, and the phase transitions
    /// to `Solved` if the move completed the puzzle.
    pub fn attempt_move(&mut self, pos: Position) -> MoveOutcome {
        if self.phase == Phase::Solved || self.locked {
            return self.ignored();
        }
        if self.board.value_at(pos) == BLANK || !self.board.can_move(pos) {
            return self.ignored();
        }
        let Ok(next) = self.board.apply_move(pos) else {
            // can_move was checked above; reaching this arm is an engine bug.
            debug_assert!(false, "apply_move rejected a validated move");
            return self.ignored();
        };
        self.board = next;
        self.moves += 1;
        self.locked = true;
        if self.board.is_solved() {
            self.phase = Phase::Solved;
        }
        MoveOutcome {
            moved: true,
            solved: self.phase == Phase::Solved,
        }
    }

    /// Keyboard convenience: slide the tile that would move into the blank in
    /// `direction`. When the blank sits on the matching edge the target falls
    /// off the grid and the command is a no-op.
    pub fn attempt_directional_move(&mut self, direction: Direction) -> MoveOutcome {
        if self.phase == Phase::Solved || self.locked {
            return self.ignored();
        }
        let blank = self.board.blank_position();
        let (dr, dc) = direction.blank_offset();
        let row = blank.row() as i8 + dr;
        let col = blank.col() as i8 + dc;
        if row < 0 || col < 0 {
            return self.ignored();
        }
        match Position::new(row as u8, col as u8) {
            Some(target) => self.attempt_move(target),
            None => self.ignored(),
        }
    }

    /// Discard the current game and deal a new one: freshly generated board,
    /// zeroed move counter, cleared lock. Always permitted, including
    /// mid-lock: the generation counter advances so a pending lock release
    /// scheduled for the superseded game is ignored when it fires.
    pub fn restart(&mut self) {
        self.board = Board::shuffled(&mut self.rng);
        self.moves = 0;
        self.phase = GameSession::phase_of(self.board);
        self.locked = false;
        self.generation = self.generation.wrapping_add(1);
    }

    /// Clear the interaction lock engaged by an accepted move. `generation`
    /// must be the tag observed when the release was scheduled; a stale tag
    /// from before a restart is ignored. Returns whether the lock cleared.
    pub fn release_lock(&mut self, generation: u32) -> bool {
        if generation == self.generation && self.locked {
            self.locked = false;
            true
        } else {
            false
        }
    }

    /// Current board snapshot.
    pub fn board(&self) -> Board {
        self.board
    }

    /// Moves applied since the game was dealt.
    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_solved(&self) -> bool {
        self.phase == Phase::Solved
    }

    /// Whether the interaction lock is currently engaged.
    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// Tag identifying the current game for lock-release scheduling.
    pub fn generation(&self) -> u32 {
        self.generation
    }

    /// Whether the tile at `pos` currently qualifies as movable. Pure query
    /// for presentation highlighting and drag-start gating.
    pub fn is_movable(&self, pos: Position) -> bool {
        self.board.can_move(pos)
    }
}
