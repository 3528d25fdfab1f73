//! Move validation
//!
//! Decides whether the piece on `origin` may move to `destination`, in three
//! layers:
//!
//! 1. Shared preconditions, enforced once for every variant:
//!    origin ≠ destination, and the destination is empty or holds an enemy.
//! 2. Variant geometry, one module per piece kind. Sliding pieces share the
//!    ray casts in [`sliding`]. The queen is rook-or-bishop and has no
//!    geometry of its own.
//! 3. Castling, a king-initiated compound move planned in [`king`].
//!
//! Nothing here looks at whose turn it is or whether the mover's own king
//! ends up in check. That is the job of [`crate::api`], which uses
//! [`plan_move`] and then tests the result with [`attack::is_in_check`].

pub mod attack;
pub mod bishop;
pub mod king;
pub mod knight;
pub mod pawn;
pub mod queen;
pub mod rook;
pub mod sliding;

#[cfg(test)]
mod tests;

use crate::board::Board;
use crate::types::*;

pub use king::{CastlePlan, CastleSide};

/// A move that passed validation, with every id it touches resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlannedMove {
    pub mover: PieceId,
    pub from: Square,
    pub to: Square,
    /// Piece standing on `to` before the move
    pub captured: Option<PieceId>,
    pub castle: Option<CastlePlan>,
}

/// Shared preconditions for every variant
///
/// The destination must differ from the origin and must not hold a piece of
/// the mover's own color.
#[inline]
pub fn passes_shared_preconditions(
    board: &Board,
    color: Color,
    origin: Square,
    destination: Square,
) -> bool {
    if origin == destination {
        return false;
    }
    board.color_at(destination) != Some(color)
}

/// Raw variant geometry for `piece`, assuming the shared preconditions hold
///
/// Castling is not included. For kings this is the one-square step with the
/// no-adjacent-kings rule.
pub fn follows_geometry(board: &Board, piece: &Piece, origin: Square, destination: Square) -> bool {
    match piece.kind {
        PieceKind::Pawn => pawn::is_valid_pawn_move(board, piece, origin, destination),
        PieceKind::Knight => knight::is_valid_knight_move(origin, destination),
        PieceKind::Bishop => bishop::is_valid_bishop_move(board, origin, destination),
        PieceKind::Rook => rook::is_valid_rook_move(board, origin, destination),
        PieceKind::Queen => queen::is_valid_queen_move(board, origin, destination),
        PieceKind::King => king::is_valid_king_step(board, piece.color, origin, destination),
    }
}

/// Validate a move and resolve the pieces it touches
///
/// Returns `None` when there is no piece on `origin` or the move breaks the
/// piece's rules. Turn order and self-check are not considered.
pub fn plan_move(board: &Board, origin: Square, destination: Square) -> Option<PlannedMove> {
    let piece = board.piece_at(origin)?;

    if piece.kind == PieceKind::King {
        if let Some(castle) = king::plan_castle(board, piece, origin, destination) {
            return Some(PlannedMove {
                mover: piece.id,
                from: origin,
                to: destination,
                captured: None,
                castle: Some(castle),
            });
        }
    }

    if !passes_shared_preconditions(board, piece.color, origin, destination) {
        return None;
    }
    if !follows_geometry(board, piece, origin, destination) {
        return None;
    }

    Some(PlannedMove {
        mover: piece.id,
        from: origin,
        to: destination,
        captured: board.id_at(destination),
        castle: None,
    })
}

/// Is moving the piece on `origin` to `destination` legal for that piece?
///
/// Includes castling for kings. Does not consider turn order or self-check.
pub fn is_legal_move(board: &Board, origin: Square, destination: Square) -> bool {
    plan_move(board, origin, destination).is_some()
}

/// Every destination the piece on `origin` may reach by its own rules
pub fn possible_destinations(board: &Board, origin: Square) -> Vec<Square> {
    Square::all()
        .filter(|destination| is_legal_move(board, origin, *destination))
        .collect()
}
