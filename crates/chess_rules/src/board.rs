//! Board storage
//!
//! The board owns every piece record in an arena (`Vec<Piece>`, indexed by
//! [`PieceId`]) plus an 8×8 grid of optional ids. A piece is *live* while it
//! has not been captured. Operations here are raw data access with no
//! rule knowledge. Legality lives in [`crate::move_gen`].
//!
//! Invariant kept by every caller in this crate: the ids referenced by the
//! grid are exactly the live pieces, and each live piece's `square` points
//! back at the grid cell holding it. [`Board::check_consistency`] verifies it.

use crate::error::{ChessRulesError, ChessRulesResult};
use crate::types::*;

/// 8×8 board plus the piece arena
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// `grid[rank][file]`
    grid: [[Option<PieceId>; 8]; 8],
    pieces: Vec<Piece>,
    live: Vec<bool>,
}

impl Default for Board {
    fn default() -> Self {
        Board::empty()
    }
}

impl Board {
    /// Board with no pieces, for composing positions
    pub fn empty() -> Self {
        Board {
            grid: [[None; 8]; 8],
            pieces: Vec::with_capacity(32),
            live: Vec::with_capacity(32),
        }
    }

    /// Standard 32-piece starting layout
    pub fn standard() -> Self {
        let mut board = Board::empty();
        for color in [Color::Black, Color::White] {
            for (file, kind) in PieceKind::BACK_RANK.iter().enumerate() {
                board.spawn(color, *kind, file as u8, color.home_rank());
            }
            for file in 0..8 {
                board.spawn(color, PieceKind::Pawn, file, color.pawn_rank());
            }
        }
        board
    }

    /// Starting-layout placement: at most 32 ids on distinct squares
    fn spawn(&mut self, color: Color, kind: PieceKind, file: u8, rank: u8) {
        debug_assert!(self.pieces.len() < 32);
        if let Some(square) = Square::new(file, rank) {
            debug_assert!(self.grid_at(square).is_none());
            let id = PieceId(self.pieces.len() as u8);
            self.push_piece(id, color, kind, square);
        }
    }

    /// Largest number of pieces a board can ever hold, captured ones included
    pub const CAPACITY: usize = u8::MAX as usize + 1;

    /// Add a new, unmoved piece to an empty square
    ///
    /// Ids are never reused, so a board accepts at most [`Board::CAPACITY`]
    /// additions over its lifetime, removed pieces included.
    pub fn add_piece(
        &mut self,
        color: Color,
        kind: PieceKind,
        square: Square,
    ) -> ChessRulesResult<PieceId> {
        if self.grid_at(square).is_some() {
            return Err(ChessRulesError::SquareOccupied { square });
        }
        let index = u8::try_from(self.pieces.len()).map_err(|_| ChessRulesError::ArenaFull {
            capacity: Board::CAPACITY,
        })?;

        let id = PieceId(index);
        self.push_piece(id, color, kind, square);
        Ok(id)
    }

    fn push_piece(&mut self, id: PieceId, color: Color, kind: PieceKind, square: Square) {
        self.pieces.push(Piece {
            id,
            color,
            kind,
            has_moved: false,
            square,
        });
        self.live.push(true);
        self.grid[square.rank() as usize][square.file() as usize] = Some(id);
    }

    #[inline]
    fn grid_at(&self, square: Square) -> Option<PieceId> {
        self.grid[square.rank() as usize][square.file() as usize]
    }

    /// Piece occupying `square`, if any
    pub fn piece_at(&self, square: Square) -> Option<&Piece> {
        self.grid_at(square).and_then(|id| self.pieces.get(id.index()))
    }

    /// Id of the piece occupying `square`, if any
    #[inline]
    pub fn id_at(&self, square: Square) -> Option<PieceId> {
        self.grid_at(square)
    }

    /// Piece record by id, live or captured
    pub fn piece(&self, id: PieceId) -> Option<&Piece> {
        self.pieces.get(id.index())
    }

    pub(crate) fn piece_mut(&mut self, id: PieceId) -> ChessRulesResult<&mut Piece> {
        self.pieces
            .get_mut(id.index())
            .ok_or(ChessRulesError::UnknownPiece { id })
    }

    #[inline]
    pub fn is_empty(&self, square: Square) -> bool {
        self.grid_at(square).is_none()
    }

    /// Color of the piece on `square`, `None` when empty
    pub fn color_at(&self, square: Square) -> Option<Color> {
        self.piece_at(square).map(|piece| piece.color)
    }

    pub fn is_live(&self, id: PieceId) -> bool {
        self.live.get(id.index()).copied().unwrap_or(false)
    }

    /// Put `id` on `square` and update its back-reference
    ///
    /// Raw mutation: the previous occupant of `square` (if any) is simply
    /// overwritten in the grid, and the piece's old square is not cleared.
    pub fn place(&mut self, id: PieceId, square: Square) {
        if let Some(piece) = self.pieces.get_mut(id.index()) {
            piece.square = square;
            self.grid[square.rank() as usize][square.file() as usize] = Some(id);
        }
    }

    /// Empty `square`, returning the id that was there
    pub fn clear(&mut self, square: Square) -> Option<PieceId> {
        self.grid[square.rank() as usize][square.file() as usize].take()
    }

    /// Drop `id` from the live set (it stays in the arena)
    pub fn capture(&mut self, id: PieceId) {
        if let Some(live) = self.live.get_mut(id.index()) {
            *live = false;
        }
    }

    /// Put a captured piece back into the live set
    pub fn restore(&mut self, id: PieceId) {
        if let Some(live) = self.live.get_mut(id.index()) {
            *live = true;
        }
    }

    /// Remove whatever stands on `square` from play
    pub fn remove_piece(&mut self, square: Square) -> Option<PieceId> {
        let id = self.clear(square)?;
        self.capture(id);
        Some(id)
    }

    /// Every piece still in play, in id order
    pub fn live_pieces(&self) -> impl Iterator<Item = &Piece> + '_ {
        self.pieces
            .iter()
            .zip(self.live.iter())
            .filter(|(_, live)| **live)
            .map(|(piece, _)| piece)
    }

    /// Live pieces of one color
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = &Piece> + '_ {
        self.live_pieces().filter(move |piece| piece.color == color)
    }

    /// Every piece ever added, captured ones included
    pub fn all_pieces(&self) -> &[Piece] {
        &self.pieces
    }

    /// Square of `color`'s king
    ///
    /// `None` means the one-king-per-color invariant is broken.
    pub fn find_king(&self, color: Color) -> Option<Square> {
        self.pieces_of(color)
            .find(|piece| piece.kind == PieceKind::King)
            .map(|piece| piece.square)
    }

    /// Squares that currently hold a piece, rank 0 first
    pub fn occupied_squares(&self) -> Vec<Square> {
        Square::all().filter(|sq| !self.is_empty(*sq)).collect()
    }

    /// Verify that the grid and the live set describe the same pieces
    pub fn check_consistency(&self) -> ChessRulesResult<()> {
        for square in Square::all() {
            if let Some(id) = self.grid_at(square) {
                let piece = self.piece(id).ok_or(ChessRulesError::UnknownPiece { id })?;
                if !self.is_live(id) || piece.square != square {
                    return Err(ChessRulesError::DanglingSquare { square });
                }
            }
        }

        for piece in self.live_pieces() {
            if self.grid_at(piece.square) != Some(piece.id) {
                return Err(ChessRulesError::DanglingSquare {
                    square: piece.square,
                });
            }
        }

        Ok(())
    }
}
