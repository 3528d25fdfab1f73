//! Captured pieces tracking
//!
//! Records what each side has taken and derives the material balance from
//! the standard piece values (see [`PieceKind::value`]). Positive advantage
//! means White is ahead.

use crate::types::{Color, PieceKind};

/// Pieces captured by each side
#[derive(Debug, Default, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CapturedPieces {
    /// Black pieces that White has captured
    pub white_captured: Vec<PieceKind>,
    /// White pieces that Black has captured
    pub black_captured: Vec<PieceKind>,
}

impl CapturedPieces {
    /// Record a capture of a `captured_color` piece
    pub fn add_capture(&mut self, captured_color: Color, kind: PieceKind) {
        match captured_color {
            Color::White => self.black_captured.push(kind),
            Color::Black => self.white_captured.push(kind),
        }
    }

    /// Pieces taken *by* `color`
    pub fn taken_by(&self, color: Color) -> &[PieceKind] {
        match color {
            Color::White => &self.white_captured,
            Color::Black => &self.black_captured,
        }
    }

    /// Material difference in pawns, White minus Black
    pub fn material_advantage(&self) -> i32 {
        let white: i32 = self.white_captured.iter().map(|k| k.value()).sum();
        let black: i32 = self.black_captured.iter().map(|k| k.value()).sum();
        white - black
    }

    pub fn clear(&mut self) {
        self.white_captured.clear();
        self.black_captured.clear();
    }
}
