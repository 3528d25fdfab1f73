//! # Core Value Types
//!
//! Small `Copy` types shared by the board, the movement rules and the game
//! state machine.
//!
//! ## Coordinates
//!
//! A [`Square`] is addressed by `(file, rank)`, both in `0..8`. Rank index 0
//! is the Black back rank (chess rank 8) and rank index 7 is the White back
//! rank (chess rank 1):
//!
//! ```text
//!   rank 0  a8 b8 c8 d8 e8 f8 g8 h8   <- Black pieces start here
//!   rank 1  a7 ...
//!   ...
//!   rank 6  a2 ...
//!   rank 7  a1 b1 c1 d1 e1 f1 g1 h1   <- White pieces start here
//! ```
//!
//! So `e2` is `(4, 6)` and `e4` is `(4, 4)`. The scheme is fixed. Which side
//! of a rendered board is "home" is a display concern (see
//! [`crate::GameState::perspective`]) and never changes these coordinates.
//!
//! ## Piece identity
//!
//! Every piece gets a [`PieceId`] when it is added to the board. The id is its
//! index in the board's piece arena, so it is stable for the life of the game
//! and two pieces can never share one.

use std::fmt;
use std::str::FromStr;

use crate::error::{ChessRulesError, ChessRulesResult};

/// Side to move / owner of a piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Color {
    #[default]
    White,
    Black,
}

impl Color {
    /// The other side
    #[inline]
    pub fn opponent(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Rank step a pawn of this color takes when it advances
    ///
    /// White moves toward rank index 0, Black toward rank index 7. This is a
    /// property of the color alone.
    #[inline]
    pub fn forward(self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    /// Rank index of this color's back rank
    #[inline]
    pub fn home_rank(self) -> u8 {
        match self {
            Color::White => 7,
            Color::Black => 0,
        }
    }

    /// Rank index of this color's pawn rank in the starting position
    #[inline]
    pub fn pawn_rank(self) -> u8 {
        match self {
            Color::White => 6,
            Color::Black => 1,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Color::White => "White",
            Color::Black => "Black",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The six piece variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// Back rank layout from file a to file h
    pub const BACK_RANK: [PieceKind; 8] = [
        PieceKind::Rook,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Queen,
        PieceKind::King,
        PieceKind::Bishop,
        PieceKind::Knight,
        PieceKind::Rook,
    ];

    /// Material value in pawns. The king has no material value.
    pub fn value(self) -> i32 {
        match self {
            PieceKind::Pawn => 1,
            PieceKind::Knight => 3,
            PieceKind::Bishop => 3,
            PieceKind::Rook => 5,
            PieceKind::Queen => 9,
            PieceKind::King => 0,
        }
    }

    /// Upper-case letter used in notation and board diagrams
    pub fn letter(self) -> char {
        match self {
            PieceKind::Pawn => 'P',
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
            PieceKind::Rook => 'R',
            PieceKind::Queen => 'Q',
            PieceKind::King => 'K',
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            PieceKind::Pawn => "pawn",
            PieceKind::Knight => "knight",
            PieceKind::Bishop => "bishop",
            PieceKind::Rook => "rook",
            PieceKind::Queen => "queen",
            PieceKind::King => "king",
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One of the 64 board squares
///
/// Construction goes through [`Square::new`] or [`Square::parse`], so a
/// `Square` value is always on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Square {
    file: u8,
    rank: u8,
}

impl Square {
    /// Create a square from `(file, rank)` indices, `None` when off the board
    #[inline]
    pub const fn new(file: u8, rank: u8) -> Option<Square> {
        if file < 8 && rank < 8 {
            Some(Square { file, rank })
        } else {
            None
        }
    }

    #[inline]
    pub fn file(self) -> u8 {
        self.file
    }

    #[inline]
    pub fn rank(self) -> u8 {
        self.rank
    }

    /// Linear index `rank * 8 + file`
    #[inline]
    pub fn index(self) -> usize {
        self.rank as usize * 8 + self.file as usize
    }

    /// Step by a signed `(file, rank)` offset, `None` when the result leaves the board
    pub fn offset(self, file_delta: i8, rank_delta: i8) -> Option<Square> {
        let file = (self.file as i8).checked_add(file_delta)?;
        let rank = (self.rank as i8).checked_add(rank_delta)?;
        if (0..8).contains(&file) && (0..8).contains(&rank) {
            Square::new(file as u8, rank as u8)
        } else {
            None
        }
    }

    /// Signed `(file, rank)` delta from `self` to `to`
    #[inline]
    pub fn delta_to(self, to: Square) -> (i8, i8) {
        (
            to.file as i8 - self.file as i8,
            to.rank as i8 - self.rank as i8,
        )
    }

    /// King-move distance between two squares
    #[inline]
    pub fn chebyshev_distance(self, to: Square) -> u8 {
        let (df, dr) = self.delta_to(to);
        df.unsigned_abs().max(dr.unsigned_abs())
    }

    /// All 64 squares, rank 0 first
    pub fn all() -> impl Iterator<Item = Square> {
        (0..8u8).flat_map(|rank| (0..8u8).map(move |file| Square { file, rank }))
    }

    /// Parse algebraic notation such as `e2`
    pub fn parse(notation: &str) -> ChessRulesResult<Square> {
        let invalid = || ChessRulesError::InvalidSquare {
            notation: notation.to_string(),
        };

        let mut chars = notation.trim().chars();
        let (Some(file), Some(rank), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(invalid());
        };

        let file = file.to_ascii_lowercase();
        if !('a'..='h').contains(&file) || !('1'..='8').contains(&rank) {
            return Err(invalid());
        }

        let file = file as u8 - b'a';
        let chess_rank = rank as u8 - b'0';
        Square::new(file, 8 - chess_rank).ok_or_else(invalid)
    }

    /// File letter `a`..`h`
    pub fn file_char(self) -> char {
        (b'a' + self.file) as char
    }

    /// Rank digit `1`..`8`
    pub fn rank_char(self) -> char {
        (b'0' + (8 - self.rank)) as char
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file_char(), self.rank_char())
    }
}

impl FromStr for Square {
    type Err = ChessRulesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Square::parse(s)
    }
}

/// Stable identity of a piece: its index in the board's arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PieceId(pub(crate) u8);

impl PieceId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// A piece record as owned by the board
///
/// `square` is a back-reference kept in sync by [`crate::Board::place`].
/// The board's grid is the source of truth for occupancy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Piece {
    pub id: PieceId,
    pub color: Color,
    pub kind: PieceKind,
    pub has_moved: bool,
    pub square: Square,
}

impl Piece {
    /// Letter for diagrams: upper case for White, lower case for Black
    pub fn symbol(&self) -> char {
        match self.color {
            Color::White => self.kind.letter(),
            Color::Black => self.kind.letter().to_ascii_lowercase(),
        }
    }
}
