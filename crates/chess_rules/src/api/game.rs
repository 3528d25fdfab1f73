//! Game lifecycle management
//!
//! Creating games from the standard layout or from a composed position, and
//! resetting them.

use tracing::info;

use super::{GameState, GameStatus};
use crate::board::Board;
use crate::captured::CapturedPieces;
use crate::error::{ChessRulesError, ChessRulesResult};
use crate::history::MoveHistory;
use crate::types::*;

/// Start a game from the standard position with White to move
///
/// `player_is_white` only decides which side is drawn at the bottom.
pub fn new_game(player_is_white: bool) -> GameState {
    let perspective = if player_is_white {
        Color::White
    } else {
        Color::Black
    };
    info!("[GAME] New game, {} at the bottom", perspective);

    GameState {
        board: Board::standard(),
        turn: Color::White,
        status: GameStatus::InProgress,
        perspective,
        history: MoveHistory::default(),
        captured: CapturedPieces::default(),
    }
}

impl GameState {
    /// Start a game from an arbitrary position
    ///
    /// The position must be consistent and hold exactly one king per color.
    pub fn from_position(board: Board, turn: Color) -> ChessRulesResult<Self> {
        board.check_consistency()?;
        for color in [Color::White, Color::Black] {
            let kings = board
                .pieces_of(color)
                .filter(|piece| piece.kind == PieceKind::King)
                .count();
            match kings {
                0 => return Err(ChessRulesError::MissingKing { color }),
                1 => {}
                _ => return Err(ChessRulesError::DuplicateKing { color }),
            }
        }

        Ok(GameState {
            board,
            turn,
            status: GameStatus::InProgress,
            perspective: Color::White,
            history: MoveHistory::starting_with(turn),
            captured: CapturedPieces::default(),
        })
    }

    /// Change which side is drawn at the bottom
    pub fn with_perspective(mut self, perspective: Color) -> Self {
        self.perspective = perspective;
        self
    }

    /// Back to the standard starting position, keeping the perspective
    pub fn reset(&mut self) {
        *self = new_game(self.perspective == Color::White);
    }
}
