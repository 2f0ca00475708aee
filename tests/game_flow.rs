//! Multi-ply sequences driven through move text, the applicator and FEN.

use chess_rules::game_state::chess_types::{Action, Board, Color, MoveKind, Square};
use chess_rules::move_generation::legal_move_apply::{apply_move, classify_move};
use chess_rules::move_generation::legal_move_generator::{game_status, is_legal, GameStatus};
use chess_rules::utils::fen_generator::generate_fen;
use chess_rules::utils::fen_parser::parse_fen;
use chess_rules::utils::long_algebraic::{format_action, parse_action};

/// Plays `moves` from `board`, asserting each one is legal.
fn play(mut board: Board, moves: &[&str]) -> Board {
    for text in moves {
        let action = parse_action(&board, text).expect("move text should parse");
        assert!(is_legal(&board, &action), "{text} should be legal");
        board = apply_move(&board, &action);
    }
    board
}

#[test]
fn fools_mate_is_checkmate() {
    let board = play(Board::standard(), &["f2f3", "e7e5", "g2g4", "d8h4"]);
    assert_eq!(game_status(&board, Color::Light), GameStatus::Checkmate);
}

#[test]
fn en_passant_is_only_available_on_the_next_ply() {
    let board = play(Board::standard(), &["e2e4", "a7a6", "e4e5", "d7d5"]);
    let capture = parse_action(&board, "e5d6").expect("move text should parse");
    assert!(is_legal(&board, &capture));
    assert_eq!(classify_move(&board, &capture), MoveKind::EnPassant);

    let after_capture = apply_move(&board, &capture);
    assert_eq!(after_capture.piece_at(Square::at(3, 4)), None);

    let delayed = play(board, &["g1f3", "a6a5"]);
    let late = parse_action(&delayed, "e5d6").expect("move text should parse");
    assert!(!is_legal(&delayed, &late));
}

#[test]
fn castling_relocates_the_rook_and_spends_both_rights() {
    let start = parse_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").expect("FEN should parse");
    let board = play(start.board, &["e1g1"]);
    assert_eq!(
        generate_fen(&board, Color::Dark),
        "r3k2r/8/8/8/8/8/8/R4RK1 b kq - 0 1"
    );

    let board = play(board, &["e8c8"]);
    assert_eq!(
        generate_fen(&board, Color::Light),
        "2kr3r/8/8/8/8/8/8/R4RK1 w - - 0 1"
    );
}

#[test]
fn capturing_a_home_rook_removes_that_castle() {
    let start = parse_fen("r3k2r/8/8/8/8/8/6B1/R3K2R w KQkq - 0 1").expect("FEN should parse");
    let board = play(start.board, &["g2a8"]);
    assert!(board.castling_rights(Color::Dark).long_rook_moved);
    assert!(!board.castling_rights(Color::Dark).short_rook_moved);

    let king = board.piece_at(Square::at(4, 7)).expect("dark king");
    let long_castle = Action::new(king, Square::at(2, 7));
    assert!(!is_legal(&board, &long_castle));
}

#[test]
fn promotion_auto_queens_and_is_written_with_suffix() {
    let start = parse_fen("7k/P7/8/8/8/8/8/K7 w - - 0 1").expect("FEN should parse");
    let action = parse_action(&start.board, "a7a8").expect("move text should parse");
    assert_eq!(format_action(&action), "Pa7a8=Q");
    assert_eq!(
        classify_move(&start.board, &action),
        MoveKind::Promotion { capture: false }
    );
    let board = apply_move(&start.board, &action);
    assert_eq!(generate_fen(&board, Color::Dark), "Q6k/8/8/8/8/8/8/K7 b - - 0 1");
    assert_eq!(game_status(&board, Color::Dark), GameStatus::Ongoing);
}

#[test]
fn double_step_is_written_into_the_fen() {
    let board = play(Board::standard(), &["e2e4"]);
    assert_eq!(
        generate_fen(&board, Color::Dark),
        "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1"
    );
}
