//! Rook movement
//!
//! Rooks move any distance along a file or a rank and cannot jump.

use super::sliding;
use crate::board::Board;
use crate::types::Square;

/// Rook geometry: along a rank or file with nothing in between
pub fn is_valid_rook_move(board: &Board, from: Square, to: Square) -> bool {
    sliding::rook_reaches(board, from, to)
}
