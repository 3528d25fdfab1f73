//! Game status and state queries
//!
//! [`GameStatus`] starts as `InProgress` and moves to a terminal value once.
//! Only timeouts can end a game here: they are detected by the embedding
//! clock and reported through [`GameState::force_end`]. The checkmate and
//! draw variants exist so that callers can match on a complete result type.

use std::fmt;

use tracing::{info, warn};

use super::GameState;
use crate::board::Board;
use crate::captured::CapturedPieces;
use crate::error::ChessRulesResult;
use crate::history::MoveHistory;
use crate::move_gen::attack;
use crate::types::*;

/// Why a game was ended from outside the rules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EndReason {
    WhiteRanOutOfTime,
    BlackRanOutOfTime,
}

impl EndReason {
    /// Timeout reason for the side whose flag fell
    pub fn for_flagged(color: Color) -> Self {
        match color {
            Color::White => EndReason::WhiteRanOutOfTime,
            Color::Black => EndReason::BlackRanOutOfTime,
        }
    }

    /// The side that lost
    pub fn loser(self) -> Color {
        match self {
            EndReason::WhiteRanOutOfTime => Color::White,
            EndReason::BlackRanOutOfTime => Color::Black,
        }
    }
}

/// Lifecycle of one game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GameStatus {
    #[default]
    InProgress,
    WhiteWinsByCheckmate,
    BlackWinsByCheckmate,
    Draw,
    Ended(EndReason),
}

impl GameStatus {
    pub fn is_game_over(&self) -> bool {
        *self != GameStatus::InProgress
    }

    /// Winning color, `None` while playing or for a draw
    pub fn winner(&self) -> Option<Color> {
        match self {
            GameStatus::WhiteWinsByCheckmate => Some(Color::White),
            GameStatus::BlackWinsByCheckmate => Some(Color::Black),
            GameStatus::Ended(reason) => Some(reason.loser().opponent()),
            GameStatus::InProgress | GameStatus::Draw => None,
        }
    }

    pub fn is_draw(&self) -> bool {
        *self == GameStatus::Draw
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, GameStatus::Ended(_))
    }

    pub fn is_checkmate(&self) -> bool {
        matches!(
            self,
            GameStatus::WhiteWinsByCheckmate | GameStatus::BlackWinsByCheckmate
        )
    }

    /// Human-readable result line
    pub fn message(&self) -> &'static str {
        match self {
            GameStatus::InProgress => "Game in progress",
            GameStatus::WhiteWinsByCheckmate => "White wins by checkmate!",
            GameStatus::BlackWinsByCheckmate => "Black wins by checkmate!",
            GameStatus::Draw => "Draw!",
            GameStatus::Ended(EndReason::WhiteRanOutOfTime) => "White ran out of time. Black wins!",
            GameStatus::Ended(EndReason::BlackRanOutOfTime) => "Black ran out of time. White wins!",
        }
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl GameState {
    /// Side to move
    pub fn current_turn(&self) -> Color {
        self.turn
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Is `color`'s king attacked in the current position?
    pub fn is_in_check(&self, color: Color) -> ChessRulesResult<bool> {
        attack::is_in_check(&self.board, color)
    }

    /// End the game from outside the rules (flag fall)
    ///
    /// Has no effect once the game is already over.
    pub fn force_end(&mut self, reason: EndReason) {
        if self.status.is_game_over() {
            warn!(
                "[GAME] Ignoring force_end({:?}): game already over ({:?})",
                reason, self.status
            );
            return;
        }
        self.status = GameStatus::Ended(reason);
        info!("[GAME] Game ended: {}", self.status.message());
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Color drawn at the bottom of the board
    pub fn perspective(&self) -> Color {
        self.perspective
    }

    pub fn history(&self) -> &MoveHistory {
        &self.history
    }

    pub fn captured(&self) -> &CapturedPieces {
        &self.captured
    }
}
