//! King movement and castling
//!
//! ## Normal moves
//!
//! One square in any direction, and never onto a square next to the enemy
//! king (the 8-neighbourhood, diagonals included). That second rule applies
//! whether or not the king is currently in check.
//!
//! ## Castling
//!
//! The king moves two squares toward a rook and the rook hops over to the
//! square the king passed. Requirements:
//!
//! - the king has not moved;
//! - the destination is on the king's rank, exactly two files away, empty and
//!   not next to the enemy king;
//! - the rook on the matching corner (file 7 kingside, file 0 queenside, same
//!   rank) is a rook of the king's color that has not moved;
//! - that rook can reach its post-castle square by its own geometry, and the
//!   square is empty.
//!
//! Squares the king crosses are *not* tested for attack and castling out of
//! check is not refused here. The only safety test is the one every move gets:
//! after the whole castle is applied, the king must not be in check.

use super::sliding;
use crate::board::Board;
use crate::types::*;

/// Which rook a castle uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CastleSide {
    KingSide,
    QueenSide,
}

impl CastleSide {
    /// File the castling rook starts on
    pub fn rook_file(self) -> u8 {
        match self {
            CastleSide::KingSide => 7,
            CastleSide::QueenSide => 0,
        }
    }

    /// File direction the king travels
    pub fn step(self) -> i8 {
        match self {
            CastleSide::KingSide => 1,
            CastleSide::QueenSide => -1,
        }
    }

    /// `O-O` or `O-O-O`
    pub fn notation(self) -> &'static str {
        match self {
            CastleSide::KingSide => "O-O",
            CastleSide::QueenSide => "O-O-O",
        }
    }
}

/// Rook half of a validated castle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CastlePlan {
    pub side: CastleSide,
    pub rook: PieceId,
    pub rook_from: Square,
    pub rook_to: Square,
}

/// Is `square` next to (or on) the king of `color`'s opponent?
pub fn is_adjacent_to_enemy_king(board: &Board, color: Color, square: Square) -> bool {
    board
        .find_king(color.opponent())
        .is_some_and(|enemy| enemy.chebyshev_distance(square) <= 1)
}

/// Single-square king step
pub fn is_valid_king_step(board: &Board, color: Color, from: Square, to: Square) -> bool {
    from.chebyshev_distance(to) == 1 && !is_adjacent_to_enemy_king(board, color, to)
}

/// Validate a castle by `king` from `from` to `to`
pub fn plan_castle(board: &Board, king: &Piece, from: Square, to: Square) -> Option<CastlePlan> {
    if king.kind != PieceKind::King || king.has_moved {
        return None;
    }

    let (df, dr) = from.delta_to(to);
    if dr != 0 || df.abs() != 2 {
        return None;
    }
    let side = if df > 0 {
        CastleSide::KingSide
    } else {
        CastleSide::QueenSide
    };

    let rook_from = Square::new(side.rook_file(), from.rank())?;
    let rook = board.piece_at(rook_from)?;
    if rook.kind != PieceKind::Rook || rook.color != king.color || rook.has_moved {
        return None;
    }

    // The rook lands on the square the king passes over.
    let rook_to = from.offset(side.step(), 0)?;

    if !board.is_empty(to) || !board.is_empty(rook_to) {
        return None;
    }
    if !sliding::rook_reaches(board, rook_from, rook_to) {
        return None;
    }
    if is_adjacent_to_enemy_king(board, king.color, to) {
        return None;
    }

    Some(CastlePlan {
        side,
        rook: rook.id,
        rook_from,
        rook_to,
    })
}
