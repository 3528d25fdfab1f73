//! Ray casts shared by the sliding pieces
//!
//! Rooks, bishops and queens all move along a straight line and are blocked
//! by the first occupied square *before* the destination. The destination
//! itself is handled by the shared preconditions (empty or enemy).

use crate::board::Board;
use crate::types::Square;

/// Same file or same rank
#[inline]
pub fn is_straight_line(from: Square, to: Square) -> bool {
    from != to && (from.file() == to.file() || from.rank() == to.rank())
}

/// `|Δfile| == |Δrank|`
#[inline]
pub fn is_diagonal(from: Square, to: Square) -> bool {
    let (df, dr) = from.delta_to(to);
    df != 0 && df.abs() == dr.abs()
}

/// Every square strictly between `from` and `to` is empty
///
/// Callers must have checked that the two squares share a line or a
/// diagonal, otherwise the step never lands on `to`.
pub fn is_path_clear(board: &Board, from: Square, to: Square) -> bool {
    let (df, dr) = from.delta_to(to);
    let step = (df.signum(), dr.signum());

    let mut current = from.offset(step.0, step.1);
    while let Some(square) = current {
        if square == to {
            return true;
        }
        if !board.is_empty(square) {
            return false;
        }
        current = square.offset(step.0, step.1);
    }

    // Ran off the board without meeting `to`: not on a common line.
    false
}

/// Rook-style reach: straight line with nothing in between
#[inline]
pub fn rook_reaches(board: &Board, from: Square, to: Square) -> bool {
    is_straight_line(from, to) && is_path_clear(board, from, to)
}

/// Bishop-style reach: diagonal with nothing in between
#[inline]
pub fn bishop_reaches(board: &Board, from: Square, to: Square) -> bool {
    is_diagonal(from, to) && is_path_clear(board, from, to)
}
