//! Chess rule engine
//!
//! Owns the board, validates moves against per-piece movement rules, detects
//! check, executes moves (castling included) and alternates turns. There is no
//! search, evaluation or I/O here. Rendering, input and clocks belong to the
//! embedding application, which talks to the engine through [`GameState`].
//!
//! # Coordinates
//!
//! A [`Square`] is `(file, rank)` with both in `0..8`. Rank index 0 is chess
//! rank 8 (Black's back rank) and rank index 7 is chess rank 1, so `e2` is
//! `(4, 6)`. White pawns advance toward rank index 0.
//!
//! # Example
//!
//! ```
//! use chess_rules::{new_game, MoveOutcome, Square};
//!
//! let mut game = new_game(true);
//! let e2 = Square::parse("e2").unwrap();
//! let e4 = Square::parse("e4").unwrap();
//!
//! let outcome = game.attempt_move(e2, e4).unwrap();
//! assert_eq!(outcome, MoveOutcome::Accepted { capture: None, castled: false });
//! ```
//!
//! # Not implemented
//!
//! Checkmate and stalemate detection, en passant, promotion and draw rules.
//! A game only ends through [`GameState::force_end`].

pub mod api;
pub mod board;
pub mod captured;
pub mod error;
pub mod history;
mod make_unmake;
pub mod move_gen;
pub mod types;

pub use api::{new_game, EndReason, GameState, GameStatus, MoveOutcome};
pub use board::Board;
pub use captured::CapturedPieces;
pub use error::{ChessRulesError, ChessRulesResult};
pub use history::{MoveHistory, MoveRecord};
pub use move_gen::{CastleSide, PlannedMove};
pub use types::*;
