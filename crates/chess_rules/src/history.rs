//! Move history tracking
//!
//! Keeps a chronological record of every committed move. The front-end uses
//! it for the `history` command and for exporting a finished game.
//!
//! Notation is plain coordinate notation with a piece letter (`Ng1-f3`,
//! `e4xd5`, `O-O`), plus a `+` suffix when the move gave check. It is not SAN:
//! no disambiguation is needed because both squares are always written.

use crate::move_gen::CastleSide;
use crate::types::{Color, PieceKind, Square};

/// One committed move
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoveRecord {
    pub piece: PieceKind,
    pub color: Color,
    pub from: Square,
    pub to: Square,
    pub captured: Option<PieceKind>,
    pub castle: Option<CastleSide>,
    /// The move left the opponent's king attacked
    pub is_check: bool,
}

impl MoveRecord {
    pub fn is_castling(&self) -> bool {
        self.castle.is_some()
    }

    /// Coordinate notation for display
    pub fn notation(&self) -> String {
        let mut text = match self.castle {
            Some(side) => side.notation().to_string(),
            None => {
                let letter = match self.piece {
                    PieceKind::Pawn => String::new(),
                    other => other.letter().to_string(),
                };
                let separator = if self.captured.is_some() { 'x' } else { '-' };
                format!("{letter}{}{separator}{}", self.from, self.to)
            }
        };
        if self.is_check {
            text.push('+');
        }
        text
    }
}

/// Ordered list of every move made since the game started
///
/// Index 0 is the first move of the side that started, index 1 the reply,
/// and so on. Full moves are numbered from White's move, so a game that
/// opens with Black to move begins with `1. ... <reply>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveHistory {
    moves: Vec<MoveRecord>,
    first_to_move: Color,
}

impl Default for MoveHistory {
    fn default() -> Self {
        MoveHistory::starting_with(Color::White)
    }
}

impl MoveHistory {
    /// Empty history for a game where `color` makes the first move
    pub fn starting_with(color: Color) -> Self {
        MoveHistory {
            moves: Vec::new(),
            first_to_move: color,
        }
    }

    pub fn first_to_move(&self) -> Color {
        self.first_to_move
    }

    pub fn add_move(&mut self, record: MoveRecord) {
        self.moves.push(record);
    }

    pub fn last_move(&self) -> Option<&MoveRecord> {
        self.moves.last()
    }

    /// Number of half-moves (plies) played
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Plies White would have played had the game started from move 1
    fn skipped_plies(&self) -> usize {
        match self.first_to_move {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    /// Full-move number of the move about to be played (starts at 1)
    pub fn full_move_number(&self) -> usize {
        (self.moves.len() + self.skipped_plies()) / 2 + 1
    }

    pub fn iter(&self) -> impl Iterator<Item = &MoveRecord> + '_ {
        self.moves.iter()
    }

    pub fn records(&self) -> &[MoveRecord] {
        &self.moves
    }

    /// Drop every move, keeping the starting color
    pub fn clear(&mut self) {
        self.moves.clear();
    }

    /// Numbered move list, one full move per line: `1. e2-e4 e7-e5`
    pub fn to_move_list(&self) -> String {
        let skipped = self.skipped_plies();
        let mut lines = Vec::new();
        let (opening, rest) = self.moves.split_at(skipped.min(self.moves.len()));
        if let Some(reply) = opening.first() {
            lines.push(format!("1. ... {}", reply.notation()));
        }
        for (i, pair) in rest.chunks(2).enumerate() {
            let number = i + 1 + skipped;
            let white = pair[0].notation();
            lines.push(match pair.get(1) {
                Some(black) => format!("{}. {} {}", number, white, black.notation()),
                None => format!("{}. {}", number, white),
            });
        }
        lines.join("\n")
    }
}
