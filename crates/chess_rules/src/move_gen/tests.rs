//! Move validation test suite
//!
//! Exercises the per-piece rules and check detection on hand-built
//! positions, without going through the turn/self-check state machine.
//!
//! # Test Organization
//!
//! - `test_shared_*` - preconditions common to every piece
//! - `test_pawn_*`, `test_knight_*`, `test_bishop_*`, `test_rook_*`,
//!   `test_queen_*`, `test_king_*` - variant geometry
//! - `test_castle_*` - castling eligibility
//! - `test_check_*` - attack and check detection

use super::*;
use crate::board::Board;
use crate::move_gen::attack::{attackers_of, is_in_check, is_square_attacked};
use crate::types::{Color, PieceKind, Square};

fn sq(notation: &str) -> Square {
    Square::parse(notation).unwrap()
}

/// Build a board from `(kind, color, square)` triples
fn create_test_board(pieces: &[(PieceKind, Color, &str)]) -> Board {
    let mut board = Board::empty();
    for &(kind, color, square) in pieces {
        board.add_piece(color, kind, sq(square)).unwrap();
    }
    board
}

fn legal(board: &Board, from: &str, to: &str) -> bool {
    is_legal_move(board, sq(from), sq(to))
}

use Color::{Black, White};
use PieceKind::*;

// ============================================================================
// Shared Preconditions
// ============================================================================

#[test]
fn test_shared_no_null_move() {
    let board = create_test_board(&[(Queen, White, "d4")]);
    assert!(!legal(&board, "d4", "d4"));
}

#[test]
fn test_shared_no_friendly_fire() {
    //! A piece can never land on its own side, for any variant
    let board = create_test_board(&[
        (Rook, White, "a1"),
        (Pawn, White, "a4"),
        (Knight, White, "b1"),
        (Pawn, White, "c3"),
    ]);
    assert!(!legal(&board, "a1", "a4"));
    assert!(!legal(&board, "b1", "c3"));
}

#[test]
fn test_empty_origin_is_never_legal() {
    let board = create_test_board(&[(King, White, "e1")]);
    assert!(!legal(&board, "e4", "e5"));
    assert!(plan_move(&board, sq("e4"), sq("e5")).is_none());
}

// ============================================================================
// Pawn Movement
// ============================================================================

#[test]
fn test_pawn_single_forward_move() {
    //! White pawns advance toward rank 8, Black pawns toward rank 1
    let board = create_test_board(&[(Pawn, White, "e2"), (Pawn, Black, "d7")]);
    assert!(legal(&board, "e2", "e3"));
    assert!(legal(&board, "d7", "d6"));
    assert!(!legal(&board, "e2", "e1"), "Pawns never retreat");
    assert!(!legal(&board, "d7", "d8"), "Pawns never retreat");
}

#[test]
fn test_pawn_double_move_from_start() {
    let board = create_test_board(&[(Pawn, White, "e2"), (Pawn, Black, "d7")]);
    assert!(legal(&board, "e2", "e4"));
    assert!(legal(&board, "d7", "d5"));
    assert!(!legal(&board, "e2", "e5"), "Three squares is never legal");
}

#[test]
fn test_pawn_double_move_after_moving() {
    //! The two-square advance depends on the has_moved flag, not the rank
    let mut board = create_test_board(&[(Pawn, White, "e2")]);
    let id = board.id_at(sq("e2")).unwrap();
    board.piece_mut(id).unwrap().has_moved = true;

    assert!(legal(&board, "e2", "e3"));
    assert!(!legal(&board, "e2", "e4"));
}

#[test]
fn test_pawn_blocked() {
    //! Forward moves need empty squares, including the one jumped over
    let board = create_test_board(&[
        (Pawn, White, "e2"),
        (Knight, Black, "e3"),
        (Pawn, White, "d2"),
        (Bishop, Black, "d4"),
    ]);
    assert!(!legal(&board, "e2", "e3"), "Pawns cannot capture straight ahead");
    assert!(!legal(&board, "e2", "e4"), "Cannot jump the blocker");
    assert!(legal(&board, "d2", "d3"));
    assert!(!legal(&board, "d2", "d4"), "Double move destination occupied");
}

#[test]
fn test_pawn_diagonal_capture() {
    let board = create_test_board(&[
        (Pawn, White, "e4"),
        (Pawn, Black, "d5"),
        (Pawn, White, "f5"),
    ]);
    assert!(legal(&board, "e4", "d5"), "Capture enemy diagonally");
    assert!(!legal(&board, "e4", "f5"), "No capturing own pieces");
}

#[test]
fn test_pawn_diagonal_onto_empty_square() {
    //! No en passant: a diagonal step needs a victim
    let board = create_test_board(&[(Pawn, White, "e5"), (Pawn, Black, "d5")]);
    assert!(!legal(&board, "e5", "d6"));
}

#[test]
fn test_pawn_backward_capture_illegal() {
    let board = create_test_board(&[(Pawn, Black, "e5"), (Knight, White, "d6")]);
    assert!(!legal(&board, "e5", "d6"));
}

// ============================================================================
// Knight Movement
// ============================================================================

#[test]
fn test_knight_l_shapes() {
    let board = create_test_board(&[(Knight, White, "d4")]);
    let expected = ["b3", "b5", "c2", "c6", "e2", "e6", "f3", "f5"];
    let mut reachable: Vec<String> = possible_destinations(&board, sq("d4"))
        .into_iter()
        .map(|s| s.to_string())
        .collect();
    reachable.sort();
    assert_eq!(reachable, expected);
}

#[test]
fn test_knight_jumps_over_pieces() {
    let board = create_test_board(&[
        (Knight, Black, "b8"),
        (Pawn, Black, "b7"),
        (Pawn, Black, "c7"),
        (Pawn, Black, "a7"),
    ]);
    assert!(legal(&board, "b8", "c6"));
    assert!(legal(&board, "b8", "a6"));
}

#[test]
fn test_knight_corner() {
    let board = create_test_board(&[(Knight, White, "a1")]);
    assert_eq!(possible_destinations(&board, sq("a1")).len(), 2);
}

// ============================================================================
// Bishop, Rook, Queen
// ============================================================================

#[test]
fn test_bishop_diagonal_only() {
    let board = create_test_board(&[(Bishop, White, "c1")]);
    assert!(legal(&board, "c1", "h6"));
    assert!(legal(&board, "c1", "a3"));
    assert!(!legal(&board, "c1", "c4"));
    assert!(!legal(&board, "c1", "d3"));
}

#[test]
fn test_bishop_blocked_path() {
    let board = create_test_board(&[(Bishop, White, "c1"), (Pawn, Black, "e3")]);
    assert!(legal(&board, "c1", "e3"), "Capture the blocker itself");
    assert!(!legal(&board, "c1", "f4"), "Cannot pass through");
}

#[test]
fn test_rook_lines() {
    let board = create_test_board(&[(Rook, White, "a1"), (Pawn, White, "a5")]);
    assert!(legal(&board, "a1", "h1"));
    assert!(legal(&board, "a1", "a4"));
    assert!(!legal(&board, "a1", "a6"), "Blocked by own pawn");
    assert!(!legal(&board, "a1", "b2"), "Rooks do not move diagonally");
}

#[test]
fn test_rook_capture_stops_ray() {
    let board = create_test_board(&[(Rook, Black, "h8"), (Knight, White, "h4")]);
    assert!(legal(&board, "h8", "h4"));
    assert!(!legal(&board, "h8", "h3"));
}

#[test]
fn test_queen_combines_rook_and_bishop() {
    let board = create_test_board(&[(Queen, White, "d1"), (Pawn, White, "d2")]);
    assert!(legal(&board, "d1", "h5"), "Diagonal");
    assert!(legal(&board, "d1", "a1"), "Rank");
    assert!(!legal(&board, "d1", "d5"), "File blocked");
    assert!(!legal(&board, "d1", "e3"), "Knight jump is not a queen move");
}

// ============================================================================
// King Movement
// ============================================================================

#[test]
fn test_king_single_steps() {
    let board = create_test_board(&[(King, White, "e4"), (King, Black, "a8")]);
    assert_eq!(possible_destinations(&board, sq("e4")).len(), 8);
    assert!(!legal(&board, "e4", "e6"));
}

#[test]
fn test_king_cannot_approach_enemy_king() {
    //! Kings may never stand on neighbouring squares, diagonals included
    let board = create_test_board(&[(King, White, "e4"), (King, Black, "e6")]);
    assert!(!legal(&board, "e4", "e5"));
    assert!(!legal(&board, "e4", "d5"));
    assert!(!legal(&board, "e4", "f5"));
    assert!(legal(&board, "e4", "e3"));
    assert!(legal(&board, "e4", "d4"));
}

#[test]
fn test_king_may_capture_undefended_neighbour() {
    let board = create_test_board(&[
        (King, White, "e1"),
        (Rook, Black, "e2"),
        (King, Black, "a8"),
    ]);
    assert!(legal(&board, "e1", "e2"));
}

// ============================================================================
// Castling
// ============================================================================

fn castle_board() -> Board {
    create_test_board(&[
        (King, White, "e1"),
        (Rook, White, "h1"),
        (Rook, White, "a1"),
        (King, Black, "e8"),
    ])
}

#[test]
fn test_castle_kingside_plan() {
    let board = castle_board();
    let planned = plan_move(&board, sq("e1"), sq("g1")).unwrap();
    let castle = planned.castle.unwrap();
    assert_eq!(castle.side, CastleSide::KingSide);
    assert_eq!(castle.rook_from, sq("h1"));
    assert_eq!(castle.rook_to, sq("f1"));
    assert_eq!(planned.captured, None);
}

#[test]
fn test_castle_queenside_plan() {
    let board = castle_board();
    let castle = plan_move(&board, sq("e1"), sq("c1")).unwrap().castle.unwrap();
    assert_eq!(castle.side, CastleSide::QueenSide);
    assert_eq!(castle.rook_from, sq("a1"));
    assert_eq!(castle.rook_to, sq("d1"));
}

#[test]
fn test_castle_blocked_by_piece_between() {
    let mut board = castle_board();
    board.add_piece(White, Knight, sq("b1")).unwrap();
    board.add_piece(Black, Bishop, sq("g1")).unwrap();

    assert!(!legal(&board, "e1", "c1"), "b1 blocks the rook path");
    assert!(!legal(&board, "e1", "g1"), "Destination occupied");
}

#[test]
fn test_castle_requires_unmoved_king_and_rook() {
    let mut board = castle_board();
    let rook = board.id_at(sq("h1")).unwrap();
    board.piece_mut(rook).unwrap().has_moved = true;
    assert!(!legal(&board, "e1", "g1"));
    assert!(legal(&board, "e1", "c1"));

    let king = board.id_at(sq("e1")).unwrap();
    board.piece_mut(king).unwrap().has_moved = true;
    assert!(!legal(&board, "e1", "c1"));
}

#[test]
fn test_castle_requires_own_rook_on_corner() {
    let board = create_test_board(&[
        (King, White, "e1"),
        (Rook, Black, "h1"),
        (Knight, White, "a1"),
        (King, Black, "e8"),
    ]);
    assert!(!legal(&board, "e1", "g1"));
    assert!(!legal(&board, "e1", "c1"));
}

#[test]
fn test_castle_transit_squares_not_checked_for_attack() {
    //! Only the rook's path matters; an attacked f1 does not stop the plan
    let board = create_test_board(&[
        (King, White, "e1"),
        (Rook, White, "h1"),
        (Rook, Black, "f8"),
        (King, Black, "a8"),
    ]);
    assert!(legal(&board, "e1", "g1"));
}

// ============================================================================
// Check Detection
// ============================================================================

#[test]
fn test_check_by_rook_on_open_file() {
    let board = create_test_board(&[
        (King, White, "e1"),
        (Rook, Black, "e8"),
        (King, Black, "a8"),
    ]);
    assert!(is_in_check(&board, White).unwrap());
    assert!(!is_in_check(&board, Black).unwrap());
    assert_eq!(
        attackers_of(&board, White).unwrap(),
        vec![board.id_at(sq("e8")).unwrap()]
    );
}

#[test]
fn test_check_blocked_ray() {
    let board = create_test_board(&[
        (King, White, "e1"),
        (Pawn, White, "e2"),
        (Rook, Black, "e8"),
        (King, Black, "a8"),
    ]);
    assert!(!is_in_check(&board, White).unwrap());
}

#[test]
fn test_check_by_pawn_diagonal_only() {
    let board = create_test_board(&[
        (King, White, "e4"),
        (Pawn, Black, "d5"),
        (Pawn, Black, "e5"),
        (King, Black, "a8"),
    ]);
    let attackers = attackers_of(&board, White).unwrap();
    assert_eq!(attackers, vec![board.id_at(sq("d5")).unwrap()]);
}

#[test]
fn test_check_by_knight() {
    let board = create_test_board(&[
        (King, Black, "e8"),
        (Pawn, Black, "e7"),
        (Pawn, Black, "d7"),
        (Knight, White, "f6"),
        (King, White, "e1"),
    ]);
    assert!(is_in_check(&board, Black).unwrap());
}

#[test]
fn test_kings_never_attack() {
    let board = create_test_board(&[(King, White, "e4"), (King, Black, "e5")]);
    assert!(!is_in_check(&board, White).unwrap());
    assert!(!is_in_check(&board, Black).unwrap());
}

#[test]
fn test_check_missing_king_is_an_error() {
    let board = create_test_board(&[(Rook, Black, "e8")]);
    assert_eq!(
        is_in_check(&board, White),
        Err(crate::ChessRulesError::MissingKing { color: White })
    );
}

#[test]
fn test_square_attacked_by_color() {
    //! Sliding pieces cover empty squares along their rays up to the first blocker
    let board = create_test_board(&[
        (King, White, "e1"),
        (Pawn, White, "c3"),
        (Bishop, Black, "b4"),
        (King, Black, "h8"),
    ]);
    assert!(!is_square_attacked(&board, sq("d2"), Black), "c3 blocks the b4-e1 diagonal");
    assert!(is_square_attacked(&board, sq("a5"), Black));
    assert!(is_square_attacked(&board, sq("c3"), Black), "The blocker itself is attacked");
    assert!(!is_square_attacked(&board, sq("d2"), White), "Kings never attack");
}
