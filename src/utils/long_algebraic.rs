use crate::chess_errors::{RulesError, RulesResult};
use crate::game_state::chess_types::*;
use crate::utils::algebraic::algebraic_to_square;

/// Formats an action as `<Role><from><to>`, e.g. `Pe2e4` or `Ng1f3`.
/// A pawn reaching its far rank gets `=Q`, matching auto-promotion.
pub fn format_action(action: &Action) -> String {
    let piece = action.from;
    let mut out = format!("{}{}{}", piece.kind.letter(), piece.square, action.destination);
    if piece.kind == PieceKind::Pawn && action.destination.rank() == piece.color.promotion_rank() {
        out.push_str("=Q");
    }
    out
}

/// Parses `e2e4`, `Pe2e4`, `e7e8q` or `Pe7e8=Q` against `board`.
///
/// The piece is read from the origin square. A role letter, if given, must
/// match it. Any promotion suffix other than a queen is rejected since the
/// engine always promotes to a queen.
pub fn parse_action(board: &Board, text: &str) -> RulesResult<Action> {
    let invalid = || RulesError::InvalidAlgebraic(text.to_owned());

    if !text.is_ascii() {
        return Err(invalid());
    }
    let (role, rest) = match text.chars().next() {
        Some(ch) if ch.is_ascii_uppercase() => {
            (Some(PieceKind::from_letter(ch).ok_or_else(invalid)?), &text[1..])
        }
        _ => (None, text),
    };

    let squares = rest.get(0..4).ok_or_else(invalid)?;
    let suffix = &rest[4..];
    if !matches!(suffix, "" | "q" | "Q" | "=Q" | "=q") {
        return Err(invalid());
    }

    let from = algebraic_to_square(&squares[0..2]).map_err(|_| invalid())?;
    let destination = algebraic_to_square(&squares[2..4]).map_err(|_| invalid())?;

    let piece = board.piece_at(from).ok_or(RulesError::EmptyOrigin(from))?;
    if role.is_some_and(|kind| kind != piece.kind) {
        return Err(RulesError::ActionMismatch(from));
    }

    Ok(Action::new(piece, destination))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pawn_push_formats_with_role_letter() {
        let board = Board::standard();
        let pawn = board.piece_at(Square::at(4, 1)).expect("e2 pawn");
        assert_eq!(format_action(&Action::new(pawn, Square::at(4, 3))), "Pe2e4");
    }

    #[test]
    fn promotion_carries_queen_suffix() {
        let pawn = Piece::new(Color::Light, PieceKind::Pawn, Square::at(4, 6));
        assert_eq!(format_action(&Action::new(pawn, Square::at(4, 7))), "Pe7e8=Q");
    }

    #[test]
    fn parse_reads_piece_from_board() {
        let board = Board::standard();
        let action = parse_action(&board, "g1f3").expect("g1f3 should parse");
        assert_eq!(action.from.kind, PieceKind::Knight);
        assert_eq!(action.destination, Square::at(5, 2));
        assert_eq!(
            parse_action(&board, "Ng1f3").expect("Ng1f3 should parse"),
            action
        );
    }

    #[test]
    fn parse_rejects_bad_text_and_mismatched_roles() {
        let board = Board::standard();
        assert!(matches!(parse_action(&board, "e2"), Err(RulesError::InvalidAlgebraic(_))));
        assert!(matches!(parse_action(&board, "e7e8n"), Err(RulesError::InvalidAlgebraic(_))));
        assert!(matches!(parse_action(&board, "Xe2e4"), Err(RulesError::InvalidAlgebraic(_))));
        assert_eq!(
            parse_action(&board, "e4e5"),
            Err(RulesError::EmptyOrigin(Square::at(4, 3)))
        );
        assert_eq!(
            parse_action(&board, "Bg1f3"),
            Err(RulesError::ActionMismatch(Square::at(6, 0)))
        );
    }
}
