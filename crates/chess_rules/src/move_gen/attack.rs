//! Attack and check detection
//!
//! A piece attacks a square when its raw movement rules would let it move
//! there: shared preconditions plus variant geometry, with no turn or
//! self-check filtering. Two exceptions:
//!
//! - kings never attack. Two kings can never stand next to each other, so a
//!   king can never be the piece giving check;
//! - castling is never an attack.
//!
//! Everything in this module takes `&Board` and is safe to call on a
//! speculative position.

use super::{follows_geometry, passes_shared_preconditions};
use crate::board::Board;
use crate::error::{ChessRulesError, ChessRulesResult};
use crate::types::*;

/// Does `piece` attack `target`?
pub fn attacks(board: &Board, piece: &Piece, target: Square) -> bool {
    if piece.kind == PieceKind::King {
        return false;
    }
    passes_shared_preconditions(board, piece.color, piece.square, target)
        && follows_geometry(board, piece, piece.square, target)
}

/// Is `square` attacked by any live piece of `by_color`?
pub fn is_square_attacked(board: &Board, square: Square, by_color: Color) -> bool {
    board
        .pieces_of(by_color)
        .any(|piece| attacks(board, piece, square))
}

/// Is `color`'s king attacked?
///
/// # Errors
///
/// [`ChessRulesError::MissingKing`] when `color` has no king on the board,
/// which means an earlier mutation corrupted the position.
pub fn is_in_check(board: &Board, color: Color) -> ChessRulesResult<bool> {
    let king_square = board
        .find_king(color)
        .ok_or(ChessRulesError::MissingKing { color })?;
    Ok(is_square_attacked(board, king_square, color.opponent()))
}

/// Ids of every enemy piece currently attacking `color`'s king
pub fn attackers_of(board: &Board, color: Color) -> ChessRulesResult<Vec<PieceId>> {
    let king_square = board
        .find_king(color)
        .ok_or(ChessRulesError::MissingKing { color })?;
    Ok(board
        .pieces_of(color.opponent())
        .filter(|piece| attacks(board, piece, king_square))
        .map(|piece| piece.id)
        .collect())
}
