//! Piece-list notation used by board front-ends.
//!
//! A piece is written `<RoleLetter><file letter><rank digit>`, for example
//! `Pe2` or `qd8`. An upper-case role letter is a light piece, lower-case is
//! dark. The engine itself only deals in [`Piece`] values; this is purely an
//! adapter.

use crate::chess_errors::{RulesError, RulesResult};
use crate::game_state::chess_types::{Board, Color, Piece, PieceKind};
use crate::utils::algebraic::algebraic_to_square;

pub fn parse_piece(token: &str) -> RulesResult<Piece> {
    let invalid = || RulesError::InvalidPieceNotation(token.to_owned());

    let mut chars = token.chars();
    let letter = chars.next().ok_or_else(invalid)?;
    let kind = PieceKind::from_letter(letter).ok_or_else(invalid)?;
    let color = if letter.is_ascii_uppercase() {
        Color::Light
    } else {
        Color::Dark
    };
    let square = algebraic_to_square(chars.as_str()).map_err(|_| invalid())?;

    Ok(Piece::new(color, kind, square))
}

pub fn format_piece(piece: &Piece) -> String {
    let letter = match piece.color {
        Color::Light => piece.kind.letter(),
        Color::Dark => piece.kind.letter().to_ascii_lowercase(),
    };
    format!("{letter}{}", piece.square)
}

/// Decodes a list of tokens into a board.
pub fn parse_piece_list<'a, I>(tokens: I) -> RulesResult<Board>
where
    I: IntoIterator<Item = &'a str>,
{
    let pieces = tokens
        .into_iter()
        .map(parse_piece)
        .collect::<RulesResult<Vec<Piece>>>()?;
    Board::with_pieces(pieces)
}

/// Encodes every piece on `board`, in square order.
pub fn format_piece_list(board: &Board) -> Vec<String> {
    board.pieces().map(|p| format_piece(&p)).collect()
}
