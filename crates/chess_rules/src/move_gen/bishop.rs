//! Bishop movement
//!
//! Bishops move any distance along a diagonal and cannot jump.

use super::sliding;
use crate::board::Board;
use crate::types::Square;

/// Bishop geometry: along a diagonal with nothing in between
pub fn is_valid_bishop_move(board: &Board, from: Square, to: Square) -> bool {
    sliding::bishop_reaches(board, from, to)
}
