//! Move execution and validation
//!
//! [`GameState::attempt_move`] is the only way the position changes during a
//! game. A candidate move is planned, applied speculatively, tested for
//! self-check and then either committed or rolled back exactly.

use tracing::{debug, error};

use super::GameState;
use crate::board::Board;
use crate::error::{ChessRulesError, ChessRulesResult};
use crate::history::MoveRecord;
use crate::make_unmake::{make_move, unmake_move, UndoInfo};
use crate::move_gen::{attack, plan_move, possible_destinations, PlannedMove};
use crate::types::*;

/// Result of a move attempt
///
/// Everything except `Accepted` leaves the game untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The move was committed and the turn passed to the other side
    Accepted {
        /// Piece removed from play, as it stood before the capture
        capture: Option<Piece>,
        castled: bool,
    },
    /// No piece on the origin, or it belongs to the side not on move
    NotYourTurn,
    /// The piece's movement rules forbid this destination
    IllegalGeometry,
    /// The move would leave the mover's own king attacked
    LeavesKingInCheck,
    /// The game has already ended
    GameOver,
}

impl MoveOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, MoveOutcome::Accepted { .. })
    }
}

/// Apply `planned` and test whether `color`'s king is attacked afterwards
///
/// On error the board is rolled back before returning.
fn speculate(
    board: &mut Board,
    planned: &PlannedMove,
    color: Color,
) -> ChessRulesResult<(UndoInfo, bool)> {
    let undo = make_move(board, planned);
    match attack::is_in_check(board, color) {
        Ok(in_check) => Ok((undo, in_check)),
        Err(err) => {
            unmake_move(board, undo);
            Err(err)
        }
    }
}

/// Refuse plans that would take a king off the board
fn guard_king_capture(board: &Board, planned: &PlannedMove) -> ChessRulesResult<()> {
    let Some(victim) = planned.captured else {
        return Ok(());
    };
    let piece = board
        .piece(victim)
        .ok_or(ChessRulesError::UnknownPiece { id: victim })?;
    if piece.kind == PieceKind::King {
        return Err(ChessRulesError::KingCapture { square: planned.to });
    }
    Ok(())
}

impl GameState {
    /// Try to move the piece on `origin` to `destination` for the side to move
    ///
    /// Illegal moves come back as `Ok` with a rejecting [`MoveOutcome`] and
    /// leave the game exactly as it was.
    ///
    /// # Errors
    ///
    /// Internal-consistency violations: a missing king, or a move that would
    /// capture a king. The board is rolled back before the error is returned.
    pub fn attempt_move(
        &mut self,
        origin: Square,
        destination: Square,
    ) -> ChessRulesResult<MoveOutcome> {
        if self.status.is_game_over() {
            debug!("[RULES] {}-{} rejected: game is over", origin, destination);
            return Ok(MoveOutcome::GameOver);
        }

        let mover = match self.board.piece_at(origin) {
            Some(piece) if piece.color == self.turn => *piece,
            _ => {
                debug!(
                    "[RULES] {}-{} rejected: no {} piece on {}",
                    origin, destination, self.turn, origin
                );
                return Ok(MoveOutcome::NotYourTurn);
            }
        };

        let Some(planned) = plan_move(&self.board, origin, destination) else {
            debug!(
                "[RULES] {} {} {}-{} rejected: illegal geometry",
                mover.color, mover.kind, origin, destination
            );
            return Ok(MoveOutcome::IllegalGeometry);
        };

        if let Err(err) = guard_king_capture(&self.board, &planned) {
            error!("[RULES] {}", err);
            return Err(err);
        }
        let capture = planned
            .captured
            .and_then(|id| self.board.piece(id).copied());

        let (undo, in_check) = match speculate(&mut self.board, &planned, self.turn) {
            Ok(result) => result,
            Err(err) => {
                error!("[RULES] {}", err);
                return Err(err);
            }
        };
        if in_check {
            unmake_move(&mut self.board, undo);
            debug!(
                "[RULES] {} {} {}-{} rejected: leaves king in check",
                mover.color, mover.kind, origin, destination
            );
            return Ok(MoveOutcome::LeavesKingInCheck);
        }

        let gives_check = match attack::is_in_check(&self.board, self.turn.opponent()) {
            Ok(gives_check) => gives_check,
            Err(err) => {
                unmake_move(&mut self.board, undo);
                error!("[RULES] {}", err);
                return Err(err);
            }
        };

        self.commit(&planned, mover, capture, gives_check)
    }

    /// Make a speculatively applied move permanent
    fn commit(
        &mut self,
        planned: &PlannedMove,
        mover: Piece,
        capture: Option<Piece>,
        gives_check: bool,
    ) -> ChessRulesResult<MoveOutcome> {
        self.board.piece_mut(planned.mover)?.has_moved = true;
        if let Some(castle) = planned.castle {
            self.board.piece_mut(castle.rook)?.has_moved = true;
        }

        if let Some(victim) = capture {
            self.captured.add_capture(victim.color, victim.kind);
        }

        let record = MoveRecord {
            piece: mover.kind,
            color: mover.color,
            from: planned.from,
            to: planned.to,
            captured: capture.map(|victim| victim.kind),
            castle: planned.castle.map(|castle| castle.side),
            is_check: gives_check,
        };
        debug!("[RULES] {} plays {}", mover.color, record.notation());
        self.history.add_move(record);

        self.turn = self.turn.opponent();

        Ok(MoveOutcome::Accepted {
            capture,
            castled: planned.castle.is_some(),
        })
    }

    /// Every destination for which [`GameState::attempt_move`] would accept
    /// a move from `origin`
    ///
    /// Empty when the game is over or `origin` holds no piece of the side to
    /// move. Works on a scratch copy of the board.
    pub fn legal_destinations(&self, origin: Square) -> ChessRulesResult<Vec<Square>> {
        if self.status.is_game_over() || self.board.color_at(origin) != Some(self.turn) {
            return Ok(Vec::new());
        }

        let mut scratch = self.board.clone();
        let mut legal = Vec::new();
        for destination in possible_destinations(&self.board, origin) {
            let Some(planned) = plan_move(&scratch, origin, destination) else {
                continue;
            };
            if guard_king_capture(&scratch, &planned).is_err() {
                continue;
            }
            let (undo, in_check) = speculate(&mut scratch, &planned, self.turn)?;
            unmake_move(&mut scratch, undo);
            if !in_check {
                legal.push(destination);
            }
        }
        Ok(legal)
    }
}
