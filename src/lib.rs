//! Slide Puzzle core crate.
//!
//! The state-and-rules engine for a browser 8-puzzle: board generation with
//! a solvability guarantee, move validation and application, solved-state
//! detection, and per-game session bookkeeping (move counter, solved phase,
//! interaction lock). Rendering and input wiring live in the embedding page,
//! which drives the engine through the [`PuzzleGame`] handle.

use wasm_bindgen::prelude::*;

pub mod board;
pub mod session;
mod web;

pub use board::{BLANK, Board, BoardError, CELL_COUNT, GRID_SIDE, Position};
pub use session::{Direction, GameSession, MoveOutcome, Phase};
pub use web::PuzzleGame;

// Optional small allocator for size (feature gated)
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}
