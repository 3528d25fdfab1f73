//! Game Flow Integration Tests
//!
//! Full games through the public API:
//! - Opening scenarios
//! - Castling and check handling
//! - Rollback exactness
//! - Turn alternation over a real game

use chess_rules::{
    new_game, Board, ChessRulesResult, Color, EndReason, GameState, GameStatus, MoveOutcome,
    PieceKind, Square,
};

fn sq(notation: &str) -> Square {
    Square::parse(notation).unwrap()
}

fn play(game: &mut GameState, from: &str, to: &str) -> MoveOutcome {
    game.attempt_move(sq(from), sq(to)).unwrap()
}

/// Compose a game from `(kind, color, square)` triples
fn position(pieces: &[(PieceKind, Color, &str)], turn: Color) -> ChessRulesResult<GameState> {
    let mut board = Board::empty();
    for &(kind, color, square) in pieces {
        board.add_piece(color, kind, sq(square))?;
    }
    GameState::from_position(board, turn)
}

const QUIET: MoveOutcome = MoveOutcome::Accepted {
    capture: None,
    castled: false,
};

// ============================================================================
// Opening Scenarios
// ============================================================================

#[test]
fn test_opening_pawn_double_step() {
    let mut game = new_game(true);
    assert_eq!(play(&mut game, "e2", "e4"), QUIET);
    assert_eq!(
        game.board().piece_at(sq("e4")).map(|p| (p.color, p.kind)),
        Some((Color::White, PieceKind::Pawn))
    );
    assert!(game.board().is_empty(sq("e2")));
}

#[test]
fn test_opening_pawn_triple_step_rejected() {
    let mut game = new_game(true);
    assert_eq!(play(&mut game, "e2", "e5"), MoveOutcome::IllegalGeometry);
    assert_eq!(game.current_turn(), Color::White);
}

#[test]
fn test_black_knight_jumps_over_pawns() {
    //! b7 and c7 are occupied; the knight does not care
    let mut game = new_game(false);
    play(&mut game, "d2", "d4");
    assert!(!game.board().is_empty(sq("b7")));
    assert!(!game.board().is_empty(sq("c7")));
    assert_eq!(play(&mut game, "b8", "c6"), QUIET);
}

// ============================================================================
// Castling and Check
// ============================================================================

#[test]
fn test_castle_kingside_from_real_game() {
    let mut game = new_game(true);
    for (from, to) in [
        ("e2", "e4"),
        ("e7", "e5"),
        ("g1", "f3"),
        ("b8", "c6"),
        ("f1", "c4"),
        ("g8", "f6"),
    ] {
        assert_eq!(play(&mut game, from, to), QUIET, "{from}-{to}");
    }

    assert_eq!(
        play(&mut game, "e1", "g1"),
        MoveOutcome::Accepted {
            capture: None,
            castled: true
        }
    );
    assert_eq!(
        game.board().piece_at(sq("f1")).map(|p| p.kind),
        Some(PieceKind::Rook)
    );
    assert_eq!(
        game.board().piece_at(sq("g1")).map(|p| p.kind),
        Some(PieceKind::King)
    );
    assert!(game.board().is_empty(sq("h1")));
    assert_eq!(game.history().last_move().map(|m| m.notation()), Some("O-O".to_string()));
}

#[test]
fn test_castle_with_bare_king_and_rook() {
    let mut game = position(
        &[
            (PieceKind::King, Color::White, "e1"),
            (PieceKind::Rook, Color::White, "h1"),
            (PieceKind::King, Color::Black, "e8"),
        ],
        Color::White,
    )
    .unwrap();
    assert!(play(&mut game, "e1", "g1").is_accepted());
    assert!(game.board().piece_at(sq("f1")).is_some_and(|p| p.has_moved));
}

#[test]
fn test_unrelated_move_while_in_check() {
    let mut game = position(
        &[
            (PieceKind::King, Color::White, "e1"),
            (PieceKind::Pawn, Color::White, "h2"),
            (PieceKind::Rook, Color::Black, "e8"),
            (PieceKind::King, Color::Black, "a8"),
        ],
        Color::White,
    )
    .unwrap();
    let before = game.clone();

    assert_eq!(play(&mut game, "h2", "h3"), MoveOutcome::LeavesKingInCheck);
    assert_eq!(game, before);
    assert!(play(&mut game, "e1", "d1").is_accepted());
}

#[test]
fn test_scholars_mate_position_reports_check() {
    //! Checkmate is never declared; the game stays in progress
    let mut game = new_game(true);
    for (from, to) in [
        ("e2", "e4"),
        ("e7", "e5"),
        ("f1", "c4"),
        ("b8", "c6"),
        ("d1", "h5"),
        ("g8", "f6"),
        ("h5", "f7"),
    ] {
        assert!(play(&mut game, from, to).is_accepted(), "{from}-{to}");
    }

    assert!(game.is_in_check(Color::Black).unwrap());
    assert_eq!(game.status(), GameStatus::InProgress);
    assert_eq!(
        game.history().last_move().map(|m| m.notation()),
        Some("Qh5xf7+".to_string())
    );
    assert_eq!(play(&mut game, "e8", "f7"), MoveOutcome::LeavesKingInCheck);
    assert_eq!(play(&mut game, "a7", "a6"), MoveOutcome::LeavesKingInCheck);
}

// ============================================================================
// Rollback and Turn Alternation
// ============================================================================

#[test]
fn test_rollback_restores_captured_piece_identity() {
    let mut game = position(
        &[
            (PieceKind::King, Color::Black, "e8"),
            (PieceKind::Bishop, Color::Black, "e7"),
            (PieceKind::Knight, Color::White, "d6"),
            (PieceKind::Queen, Color::White, "e1"),
            (PieceKind::King, Color::White, "h1"),
        ],
        Color::Black,
    )
    .unwrap();
    let knight = *game.board().piece_at(sq("d6")).unwrap();
    let before = game.clone();

    assert_eq!(play(&mut game, "e7", "d6"), MoveOutcome::LeavesKingInCheck);
    assert_eq!(game.board().piece_at(sq("d6")), Some(&knight));
    assert!(game.board().is_live(knight.id));
    assert_eq!(game, before);
}

#[test]
fn test_turn_alternation_over_a_game() {
    let mut game = new_game(true);
    let moves = [
        ("d2", "d4"),
        ("d7", "d5"),
        ("c2", "c4"),
        ("d5", "c4"),
        ("e2", "e3"),
        ("b7", "b5"),
        ("a2", "a4"),
        ("c7", "c6"),
    ];

    let mut expected = Color::White;
    for (from, to) in moves {
        assert_eq!(game.current_turn(), expected);
        assert!(play(&mut game, from, to).is_accepted(), "{from}-{to}");
        expected = expected.opponent();
        assert_eq!(game.current_turn(), expected);

        // The piece that just moved belongs to the side no longer on move
        assert_eq!(play(&mut game, to, from), MoveOutcome::NotYourTurn);
        assert_eq!(game.current_turn(), expected);
    }

    assert_eq!(game.history().len(), moves.len());
    assert_eq!(game.captured().taken_by(Color::Black), &[PieceKind::Pawn]);
    assert!(game.board().check_consistency().is_ok());
}

#[test]
fn test_timeout_ends_game() {
    let mut game = new_game(true);
    play(&mut game, "e2", "e4");
    game.force_end(EndReason::for_flagged(game.current_turn()));

    assert_eq!(game.status().winner(), Some(Color::White));
    assert_eq!(play(&mut game, "e7", "e5"), MoveOutcome::GameOver);
}
