//! Legal move queries.
//!
//! `legal_moves(piece, board)` runs every validator chain of the piece's
//! role against the board and collects the squares that survive. Everything
//! else here (all actions of a side, game status, the `MoveGenerator`
//! implementation used by perft) is derived from that single query.

use crate::game_state::chess_types::{Action, Board, Color, Piece, Square};
use crate::move_generation::legal_move_apply::{apply_move, classify_move};
use crate::move_generation::legal_move_checks::is_in_check;
use crate::move_generation::move_generator::{GeneratedMove, MoveGenerator};
use crate::move_generation::rule_tables::legal_rules;

/// Outcome of a position for the side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Ongoing,
    Checkmate,
    Stalemate,
}

/// Legal destinations for `piece` on `board`, in rule-table order.
///
/// Never fails; an empty result means the piece has no legal move. The piece
/// does not have to stand on `board`: it is evaluated as if it did.
pub fn legal_moves(piece: &Piece, board: &Board) -> Vec<Square> {
    legal_rules(piece.role())
        .iter()
        .filter_map(|rule| rule.resolve(piece, board))
        .collect()
}

/// Membership test for a single requested move.
pub fn is_legal(board: &Board, action: &Action) -> bool {
    board.piece_at(action.from.square) == Some(action.from)
        && legal_moves(&action.from, board).contains(&action.destination)
}

/// Every legal action for `side`.
pub fn all_legal_actions(board: &Board, side: Color) -> Vec<Action> {
    board
        .pieces_of(side)
        .flat_map(|piece| {
            legal_moves(&piece, board)
                .into_iter()
                .map(move |destination| Action::new(piece, destination))
        })
        .collect()
}

/// Whether `side` has at least one legal action.
pub fn has_legal_action(board: &Board, side: Color) -> bool {
    board.pieces_of(side).any(|piece| {
        legal_rules(piece.role())
            .iter()
            .any(|rule| rule.resolve(&piece, board).is_some())
    })
}

/// Checkmate and stalemate are both "no legal action"; they differ only in
/// whether the king is attacked.
pub fn game_status(board: &Board, side: Color) -> GameStatus {
    if has_legal_action(board, side) {
        GameStatus::Ongoing
    } else if is_in_check(board, side) {
        GameStatus::Checkmate
    } else {
        GameStatus::Stalemate
    }
}

pub struct LegalMoveGenerator;

impl MoveGenerator for LegalMoveGenerator {
    fn generate_legal_moves(&self, board: &Board, side: Color) -> Vec<GeneratedMove> {
        all_legal_actions(board, side)
            .into_iter()
            .map(|action| GeneratedMove {
                kind: classify_move(board, &action),
                board_after: apply_move(board, &action),
                action,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::PieceKind;

    #[test]
    fn twenty_moves_from_the_standard_position() {
        let board = Board::standard();
        assert_eq!(all_legal_actions(&board, Color::Light).len(), 20);
        assert_eq!(all_legal_actions(&board, Color::Dark).len(), 20);
        assert_eq!(
            LegalMoveGenerator
                .generate_legal_moves(&board, Color::Light)
                .len(),
            20
        );
    }

    #[test]
    fn back_rank_mate_is_checkmate() {
        let board = Board::with_pieces([
            Piece::new(Color::Dark, PieceKind::King, Square::at(6, 7)),
            Piece::new(Color::Dark, PieceKind::Pawn, Square::at(5, 6)),
            Piece::new(Color::Dark, PieceKind::Pawn, Square::at(6, 6)),
            Piece::new(Color::Dark, PieceKind::Pawn, Square::at(7, 6)),
            Piece::new(Color::Light, PieceKind::Rook, Square::at(0, 7)),
            Piece::new(Color::Light, PieceKind::King, Square::at(6, 0)),
        ])
        .expect("board should build");
        assert_eq!(game_status(&board, Color::Dark), GameStatus::Checkmate);
        assert_eq!(game_status(&board, Color::Light), GameStatus::Ongoing);
    }

    #[test]
    fn cornered_king_without_moves_is_stalemate() {
        let board = Board::with_pieces([
            Piece::new(Color::Dark, PieceKind::King, Square::at(7, 7)),
            Piece::new(Color::Light, PieceKind::Queen, Square::at(5, 6)),
            Piece::new(Color::Light, PieceKind::King, Square::at(5, 5)),
        ])
        .expect("board should build");
        assert_eq!(game_status(&board, Color::Dark), GameStatus::Stalemate);
    }

    #[test]
    fn is_legal_rejects_pieces_not_on_the_board() {
        let board = Board::standard();
        let ghost = Piece::new(Color::Light, PieceKind::Queen, Square::at(4, 4));
        assert!(!is_legal(&board, &Action::new(ghost, Square::at(4, 5))));

        let pawn = board.piece_at(Square::at(4, 1)).expect("e2 pawn");
        assert!(is_legal(&board, &Action::new(pawn, Square::at(4, 3))));
        assert!(!is_legal(&board, &Action::new(pawn, Square::at(4, 4))));
    }
}
