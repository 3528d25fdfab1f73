//! Queen movement
//!
//! A queen move is legal when it would be legal for a rook or for a bishop
//! standing on the same square. Both ray casts are reused as-is.

use super::{bishop, rook};
use crate::board::Board;
use crate::types::Square;

/// Queen geometry: a clear rook or bishop line
pub fn is_valid_queen_move(board: &Board, from: Square, to: Square) -> bool {
    rook::is_valid_rook_move(board, from, to) || bishop::is_valid_bishop_move(board, from, to)
}
