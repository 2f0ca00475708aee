//! Square conversions for algebraic coordinates (for example `e4`).

use crate::chess_errors::{RulesError, RulesResult};
use crate::game_state::chess_types::Square;

/// Convert algebraic notation (for example: "e4") to a square.
#[inline]
pub fn algebraic_to_square(text: &str) -> RulesResult<Square> {
    let bytes = text.as_bytes();
    if bytes.len() != 2 {
        return Err(RulesError::InvalidAlgebraic(text.to_owned()));
    }

    let file = bytes[0].to_ascii_lowercase();
    let rank = bytes[1];
    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(RulesError::InvalidAlgebraic(text.to_owned()));
    }

    Square::new(file - b'a', rank - b'1')
}

/// Convert a square to algebraic notation (for example: "e4").
#[inline]
pub fn square_to_algebraic(square: Square) -> String {
    square.to_string()
}

#[cfg(test)]
mod tests {
    use super::{algebraic_to_square, square_to_algebraic};
    use crate::game_state::chess_types::Square;

    #[test]
    fn corner_squares_convert_both_ways() {
        assert_eq!(algebraic_to_square("a1").expect("a1 should parse"), Square::at(0, 0));
        assert_eq!(algebraic_to_square("h8").expect("h8 should parse"), Square::at(7, 7));
        assert_eq!(square_to_algebraic(Square::at(4, 3)), "e4");
    }

    #[test]
    fn malformed_squares_are_rejected() {
        assert!(algebraic_to_square("i1").is_err());
        assert!(algebraic_to_square("a9").is_err());
        assert!(algebraic_to_square("a10").is_err());
        assert!(algebraic_to_square("").is_err());
    }
}
