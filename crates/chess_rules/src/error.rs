//! Error types for the rule engine
//!
//! Illegal moves are not errors: they come back as [`crate::MoveOutcome`]
//! variants. Everything in here is either bad caller input (square notation)
//! or an internal-consistency defect in the engine itself.

use thiserror::Error;

use crate::types::{Color, PieceId, Square};

/// Errors that can occur in the rule engine
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChessRulesError {
    /// Square notation could not be parsed
    #[error("Invalid square: {notation:?} (expected a file a-h followed by a rank 1-8)")]
    InvalidSquare { notation: String },

    /// A color has no king on the board
    #[error("Internal consistency violation: no {color} king on the board")]
    MissingKing { color: Color },

    /// A color has more than one king on the board
    #[error("Internal consistency violation: more than one {color} king on the board")]
    DuplicateKing { color: Color },

    /// The grid and the live-piece set disagree about a square
    #[error("Internal consistency violation: grid and live pieces disagree at {square}")]
    DanglingSquare { square: Square },

    /// A move tried to capture a king
    #[error("Internal consistency violation: attempted to capture the king on {square}")]
    KingCapture { square: Square },

    /// Piece id not present in the arena
    #[error("Unknown piece id {id:?}")]
    UnknownPiece { id: PieceId },

    /// Position composition put two pieces on one square
    #[error("Square {square} is already occupied")]
    SquareOccupied { square: Square },

    /// Every `PieceId` has been handed out; the arena never reuses ids
    #[error("Piece arena is full ({capacity} pieces)")]
    ArenaFull { capacity: usize },
}

impl ChessRulesError {
    /// True for errors that indicate an engine defect rather than bad input
    pub fn is_internal(&self) -> bool {
        matches!(
            self,
            ChessRulesError::MissingKing { .. }
                | ChessRulesError::DuplicateKing { .. }
                | ChessRulesError::DanglingSquare { .. }
                | ChessRulesError::KingCapture { .. }
                | ChessRulesError::UnknownPiece { .. }
        )
    }
}

/// Result type alias for rule engine operations
pub type ChessRulesResult<T> = Result<T, ChessRulesError>;
