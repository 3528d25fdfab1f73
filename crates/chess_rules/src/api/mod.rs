//! Public API for the rule engine
//!
//! [`GameState`] owns the board for one game and is the only thing that
//! changes it once play has started.
//!
//! ## Module Organization
//!
//! - `game` - Game lifecycle (new_game, from_position, reset)
//! - `moves` - Move execution and validation (attempt_move, legal_destinations)
//! - `state` - Status and queries (status, current_turn, is_in_check, force_end)

mod game;
mod moves;
mod state;


use crate::board::Board;
use crate::captured::CapturedPieces;
use crate::history::MoveHistory;
use crate::types::Color;

pub use game::new_game;
pub use moves::MoveOutcome;
pub use state::{EndReason, GameStatus};

/// One game: board, side to move, status and bookkeeping
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub(crate) board: Board,
    pub(crate) turn: Color,
    pub(crate) status: GameStatus,
    pub(crate) perspective: Color,
    pub(crate) history: MoveHistory,
    pub(crate) captured: CapturedPieces,
}
