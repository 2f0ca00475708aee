//! FEN-to-Board parser.
//!
//! Only the fields the rules engine models are read: piece placement, side
//! to move, castling availability and the en-passant target. Halfmove and
//! fullmove clocks are accepted and ignored.

use crate::chess_errors::{RulesError, RulesResult};
use crate::game_state::chess_types::*;
use crate::utils::algebraic::algebraic_to_square;

/// A decoded FEN: the board plus the side to move, which the engine itself
/// does not track.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FenPosition {
    pub board: Board,
    pub side_to_move: Color,
}

pub fn parse_fen(fen: &str) -> RulesResult<FenPosition> {
    let mut parts = fen.split_whitespace();

    let placement = parts.next().ok_or_else(|| invalid("missing board layout"))?;
    let side_part = parts.next().unwrap_or("w");
    let castling_part = parts.next().unwrap_or("-");
    let en_passant_part = parts.next().unwrap_or("-");

    // Clocks are optional; anything beyond them is malformed.
    if parts.nth(2).is_some() {
        return Err(invalid("FEN has extra trailing fields"));
    }

    let side_to_move = parse_side_to_move(side_part)?;
    let mut board = parse_placement(placement)?;
    for color in [Color::Light, Color::Dark] {
        board = board.with_castling_rights(color, parse_castling_rights(castling_part, color)?);
    }
    board = board.with_en_passant_file(parse_en_passant_file(en_passant_part)?);

    Ok(FenPosition {
        board,
        side_to_move,
    })
}

/// Parses the placement field alone (`rnbqkbnr/pppppppp/8/...`).
pub fn parse_placement(placement: &str) -> RulesResult<Board> {
    let ranks: Vec<&str> = placement.split('/').collect();
    if ranks.len() != 8 {
        return Err(invalid("board layout must contain 8 ranks"));
    }

    let mut pieces = Vec::with_capacity(32);
    for (fen_rank_idx, rank_str) in ranks.iter().enumerate() {
        let rank = 7 - fen_rank_idx as u8;
        let mut file = 0u8;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(invalid(&format!("invalid empty-square count '{ch}'")));
                }
                file += empty_count as u8;
                if file > 8 {
                    return Err(invalid("board rank has too many files"));
                }
                continue;
            }

            let kind = PieceKind::from_letter(ch)
                .filter(|_| ch.is_ascii_alphabetic())
                .ok_or_else(|| invalid(&format!("invalid piece character '{ch}'")))?;
            let color = if ch.is_ascii_uppercase() {
                Color::Light
            } else {
                Color::Dark
            };
            if file >= 8 {
                return Err(invalid("board rank has too many files"));
            }
            pieces.push(Piece::new(color, kind, Square::at(file, rank)));
            file += 1;
        }

        if file != 8 {
            return Err(invalid("board rank does not sum to 8 files"));
        }
    }

    Board::with_pieces(pieces)
}

fn parse_side_to_move(side_part: &str) -> RulesResult<Color> {
    match side_part {
        "w" => Ok(Color::Light),
        "b" => Ok(Color::Dark),
        _ => Err(invalid(&format!("invalid side-to-move field: {side_part}"))),
    }
}

/// A missing `K`/`Q` (or `k`/`q`) marks that rook as moved. The king flag is
/// left clear so that the remaining castle stays available.
fn parse_castling_rights(castling_part: &str, color: Color) -> RulesResult<CastlingRights> {
    if let Some(ch) = castling_part
        .chars()
        .find(|ch| !matches!(ch, 'K' | 'Q' | 'k' | 'q' | '-'))
    {
        return Err(invalid(&format!("invalid castling rights character: {ch}")));
    }

    let (short, long) = match color {
        Color::Light => ('K', 'Q'),
        Color::Dark => ('k', 'q'),
    };
    Ok(CastlingRights {
        king_moved: false,
        short_rook_moved: !castling_part.contains(short),
        long_rook_moved: !castling_part.contains(long),
    })
}

fn parse_en_passant_file(en_passant_part: &str) -> RulesResult<Option<u8>> {
    if en_passant_part == "-" {
        return Ok(None);
    }
    let square = algebraic_to_square(en_passant_part)
        .map_err(|_| invalid(&format!("invalid en-passant square: {en_passant_part}")))?;
    Ok(Some(square.file()))
}

fn invalid(message: &str) -> RulesError {
    RulesError::InvalidFen(message.to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_rules::{STARTING_PLACEMENT, STARTING_POSITION_FEN};

    #[test]
    fn starting_fen_matches_standard_board() {
        let position = parse_fen(STARTING_POSITION_FEN).expect("starting FEN should parse");
        assert_eq!(position.side_to_move, Color::Light);
        assert_eq!(position.board, Board::standard());
        assert_eq!(
            parse_placement(STARTING_PLACEMENT).expect("placement should parse"),
            Board::standard()
        );
    }

    #[test]
    fn empty_placement_is_an_empty_board() {
        let board = parse_placement("8/8/8/8/8/8/8/8").expect("empty board should parse");
        assert_eq!(board, Board::empty());
    }

    #[test]
    fn castling_and_en_passant_fields_are_read() {
        let position = parse_fen("4k3/8/8/3pP3/8/8/8/R3K2R w Q d6 0 3").expect("FEN should parse");
        let light = position.board.castling_rights(Color::Light);
        assert!(light.short_rook_moved);
        assert!(!light.long_rook_moved);
        assert!(!light.king_moved);
        assert!(position.board.castling_rights(Color::Dark).short_rook_moved);
        assert_eq!(position.board.en_passant_file(), Some(3));
    }

    #[test]
    fn long_runs_of_empty_counts_are_rejected_without_wrapping() {
        let overlong_rank = "8".repeat(40);
        let placement = format!("{overlong_rank}/8/8/8/8/8/8/8");
        assert!(parse_placement(&placement).is_err());
    }

    #[test]
    fn malformed_fens_are_rejected() {
        assert!(parse_placement("8/8/8").is_err());
        assert!(parse_placement("9/8/8/8/8/8/8/8").is_err());
        assert!(parse_placement("7x/8/8/8/8/8/8/8").is_err());
        assert!(parse_placement("ppppppppp/8/8/8/8/8/8/8").is_err());
        assert!(parse_placement("44/8/8/8/8/8/8/8").is_err());
        assert!(parse_fen("8/8/8/8/8/8/8/8 x - - 0 1").is_err());
        assert!(parse_fen("8/8/8/8/8/8/8/8 w KX - 0 1").is_err());
        assert!(parse_fen("8/8/8/8/8/8/8/8 w - - 0 1 extra").is_err());
    }
}
