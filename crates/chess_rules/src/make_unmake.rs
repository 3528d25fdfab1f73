//! Move making and unmaking for speculative application
//!
//! [`make_move`] applies a [`PlannedMove`] to the board and returns the undo
//! information that [`unmake_move`] needs to restore it. The round trip is
//! exact: the captured piece comes back with its own id on its own square,
//! and castling moves the rook back as well. `has_moved` flags are not
//! touched here. They only change when a move is committed.

use crate::board::Board;
use crate::move_gen::PlannedMove;
use crate::types::*;

/// Information needed to undo a move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct UndoInfo {
    pub mover: PieceId,
    pub from: Square,
    pub to: Square,
    pub captured: Option<PieceId>,
    /// `(rook, rook_from, rook_to)` for castles
    pub rook: Option<(PieceId, Square, Square)>,
}

/// Apply `planned` to the board (returns undo information)
///
/// `planned` must come from [`crate::move_gen::plan_move`] on this same
/// board state.
pub(crate) fn make_move(board: &mut Board, planned: &PlannedMove) -> UndoInfo {
    let undo = UndoInfo {
        mover: planned.mover,
        from: planned.from,
        to: planned.to,
        captured: planned.captured,
        rook: planned
            .castle
            .map(|castle| (castle.rook, castle.rook_from, castle.rook_to)),
    };

    board.clear(planned.from);
    if let Some(victim) = board.clear(planned.to) {
        board.capture(victim);
    }
    board.place(planned.mover, planned.to);

    if let Some((rook, rook_from, rook_to)) = undo.rook {
        board.clear(rook_from);
        board.place(rook, rook_to);
    }

    undo
}

/// Undo a move made by [`make_move`]
pub(crate) fn unmake_move(board: &mut Board, undo: UndoInfo) {
    if let Some((rook, rook_from, rook_to)) = undo.rook {
        board.clear(rook_to);
        board.place(rook, rook_from);
    }

    board.clear(undo.to);
    board.place(undo.mover, undo.from);

    if let Some(victim) = undo.captured {
        board.restore(victim);
        board.place(victim, undo.to);
    }
}
