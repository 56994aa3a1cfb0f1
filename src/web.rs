//! WebAssembly surface.
//!
//! `PuzzleGame` is the handle the embedding page owns: one per active game,
//! constructed from JS, driven synchronously from the page's click / drag /
//! keyboard handlers. Commands return whether they changed anything so the
//! page knows when to re-render; queries expose the board snapshot, move
//! counter, solved flag, lock status and per-tile movability.
//!
//! The timed lock release lives here rather than in the session: after each
//! accepted move a one-shot `setTimeout` callback is scheduled, tagged with
//! the session generation current at scheduling time, so a restart before it
//! fires turns it into a no-op.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::window;

use crate::board::Position;
use crate::session::{Direction, GameSession};

/// How long the interaction lock stays engaged after an accepted move, in
/// milliseconds. Tuned to the page's tile slide transition so two accepted
/// moves cannot outrun the visual.
const LOCK_RELEASE_MS: i32 = 200;

/// Browser-facing game handle.
#[wasm_bindgen]
pub struct PuzzleGame {
    session: Rc<RefCell<GameSession>>,
}

#[wasm_bindgen]
impl PuzzleGame {
    /// New game over browser entropy.
    #[wasm_bindgen(constructor)]
    pub fn new() -> PuzzleGame {
        PuzzleGame {
            session: Rc::new(RefCell::new(GameSession::from_entropy())),
        }
    }

    /// New game with a fixed seed; the same seed deals the same boards.
    pub fn with_seed(seed: u64) -> PuzzleGame {
        PuzzleGame {
            session: Rc::new(RefCell::new(GameSession::new(seed))),
        }
    }

    /// Row-major board snapshot, 0 marking the blank. Crosses to JS as a
    /// `Uint8Array` of length 9.
    pub fn board(&self) -> Vec<u8> {
        self.session.borrow().board().cells().to_vec()
    }

    /// Moves applied since the game was dealt.
    pub fn moves(&self) -> u32 {
        self.session.borrow().moves()
    }

    pub fn is_solved(&self) -> bool {
        self.session.borrow().is_solved()
    }

    pub fn is_locked(&self) -> bool {
        self.session.borrow().is_locked()
    }

    /// Whether the tile at (row, col) can currently slide into the blank.
    /// Out-of-grid coordinates report false.
    pub fn is_movable(&self, row: u8, col: u8) -> bool {
        match Position::new(row, col) {
            Some(pos) => self.session.borrow().is_movable(pos),
            None => false,
        }
    }

    /// Attempt to slide the tile at (row, col). Returns whether a move was
    /// applied; user no-ops (blank or non-adjacent tile, solved or locked
    /// session) return `false`. An applied move engages the interaction lock
    /// and schedules its timed release.
    pub fn attempt_move(&self, row: u8, col: u8) -> Result<bool, JsValue> {
        let pos = Position::new(row, col)
            .ok_or_else(|| JsValue::from_str("position out of range"))?;
        let outcome = self.session.borrow_mut().attempt_move(pos);
        if outcome.moved {
            schedule_lock_release(&self.session)?;
        }
        Ok(outcome.moved)
    }

    /// Keyboard move. Accepts "up" / "down" / "left" / "right" or the DOM
    /// `KeyboardEvent.key` names "ArrowUp" etc. Returns whether a move was
    /// applied; a blank on the matching edge is a no-op.
    pub fn attempt_directional_move(&self, direction: &str) -> Result<bool, JsValue> {
        let dir = parse_direction(direction)
            .ok_or_else(|| JsValue::from_str("unknown direction"))?;
        let outcome = self.session.borrow_mut().attempt_directional_move(dir);
        if outcome.moved {
            schedule_lock_release(&self.session)?;
        }
        Ok(outcome.moved)
    }

    /// Abandon the current game and deal a new board. A lock release pending
    /// from the superseded game is ignored when it fires.
    pub fn restart(&self) {
        self.session.borrow_mut().restart();
    }
}

impl Default for PuzzleGame {
    fn default() -> Self {
        PuzzleGame::new()
    }
}

fn parse_direction(name: &str) -> Option<Direction> {
    match name {
        "up" | "Up" | "ArrowUp" => Some(Direction::Up),
        "down" | "Down" | "ArrowDown" => Some(Direction::Down),
        "left" | "Left" | "ArrowLeft" => Some(Direction::Left),
        "right" | "Right" | "ArrowRight" => Some(Direction::Right),
        _ => None,
    }
}

/// Schedule the one-shot lock release for the move just accepted. The
/// closure frees itself after firing; the generation tag makes a release
/// that outlives its game harmless.
fn schedule_lock_release(session: &Rc<RefCell<GameSession>>) -> Result<(), JsValue> {
    let win = window().ok_or_else(|| JsValue::from_str("no window"))?;
    let generation = session.borrow().generation();
    let session = Rc::clone(session);
    let cb = Closure::once_into_js(move || {
        session.borrow_mut().release_lock(generation);
    });
    win.set_timeout_with_callback_and_timeout_and_arguments_0(
        cb.unchecked_ref(),
        LOCK_RELEASE_MS,
    )?;
    Ok(())
}
