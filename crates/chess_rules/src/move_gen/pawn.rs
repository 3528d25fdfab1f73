//! Pawn movement
//!
//! Direction comes from the pawn's color ([`Color::forward`]) and nothing
//! else. Which side of the screen a player sits on has no say here.
//!
//! - one step forward onto an empty square;
//! - two steps forward from an unmoved pawn, same file, with both the
//!   intermediate and the destination square empty;
//! - one step diagonally forward, only as a capture.
//!
//! En passant and promotion are not part of this rule set.

use crate::board::Board;
use crate::types::*;

/// Pawn geometry: one or two steps forward onto empty squares, or a diagonal capture
pub fn is_valid_pawn_move(board: &Board, pawn: &Piece, from: Square, to: Square) -> bool {
    let direction = pawn.color.forward();
    let (df, dr) = from.delta_to(to);

    // Forward push
    if df == 0 && dr == direction {
        return board.is_empty(to);
    }

    // Double push from an unmoved pawn
    if df == 0 && dr == 2 * direction {
        if pawn.has_moved {
            return false;
        }
        let Some(intermediate) = from.offset(0, direction) else {
            return false;
        };
        return board.is_empty(intermediate) && board.is_empty(to);
    }

    // Diagonal capture
    if df.abs() == 1 && dr == direction {
        return board.color_at(to) == Some(pawn.color.opponent());
    }

    false
}
