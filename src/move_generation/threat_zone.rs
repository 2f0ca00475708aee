//! Threat zones: which squares each side attacks.
//!
//! Attack sets come from the `attacks` rule table (geometry plus occupancy,
//! never king safety), so building a zone is bounded work over at most 32
//! pieces and cannot recurse back into legality.

use crate::game_state::chess_types::{Board, Color, Piece, Square};
use crate::move_generation::rule_tables::attack_rules;

/// Per-square bitmask of attacking sides (`1 << color.index()`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThreatZone {
    attacked_by: [u8; 64],
}

impl ThreatZone {
    /// Accumulates the attack sets of every piece on `board`.
    pub fn compute(board: &Board) -> Self {
        let mut zone = Self::compute_for(board, Color::Light);
        zone.mark(board, Color::Dark);
        zone
    }

    /// Zone restricted to the pieces of `attacker`.
    pub fn compute_for(board: &Board, attacker: Color) -> Self {
        let mut zone = Self { attacked_by: [0u8; 64] };
        zone.mark(board, attacker);
        zone
    }

    fn mark(&mut self, board: &Board, attacker: Color) {
        let side_bit = 1u8 << attacker.index();
        for piece in board.pieces_of(attacker) {
            for square in attacked_squares(&piece, board) {
                self.attacked_by[square.index()] |= side_bit;
            }
        }
    }

    #[inline]
    pub fn is_attacked(&self, square: Square, by: Color) -> bool {
        self.attacked_by[square.index()] & (1u8 << by.index()) != 0
    }
}

/// Squares `piece` attacks on `board`, king safety ignored.
pub fn attacked_squares<'a>(
    piece: &'a Piece,
    board: &'a Board,
) -> impl Iterator<Item = Square> + 'a {
    attack_rules(piece.role())
        .iter()
        .filter_map(move |rule| rule.resolve(piece, board))
}

/// Short-circuiting single-square query; equivalent to building the zone for
/// `attacker` and testing `square`.
pub fn is_square_attacked(board: &Board, square: Square, attacker: Color) -> bool {
    board
        .pieces_of(attacker)
        .any(|piece| attacked_squares(&piece, board).any(|sq| sq == square))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::PieceKind;

    fn piece(color: Color, kind: PieceKind, file: u8, rank: u8) -> Piece {
        Piece::new(color, kind, Square::at(file, rank))
    }

    #[test]
    fn rook_attack_stops_at_first_piece_and_includes_it() {
        let board = Board::with_pieces([
            piece(Color::Dark, PieceKind::Rook, 0, 7),
            piece(Color::Dark, PieceKind::Pawn, 0, 4),
        ])
        .expect("board should build");
        let zone = ThreatZone::compute(&board);
        assert!(zone.is_attacked(Square::at(0, 5), Color::Dark));
        assert!(zone.is_attacked(Square::at(0, 4), Color::Dark));
        assert!(!zone.is_attacked(Square::at(0, 3), Color::Dark));
        assert!(!zone.is_attacked(Square::at(0, 5), Color::Light));
    }

    #[test]
    fn pawns_attack_empty_diagonals_but_not_forward() {
        let board = Board::with_pieces([piece(Color::Light, PieceKind::Pawn, 4, 1)])
            .expect("board should build");
        let zone = ThreatZone::compute(&board);
        assert!(zone.is_attacked(Square::at(3, 2), Color::Light));
        assert!(zone.is_attacked(Square::at(5, 2), Color::Light));
        assert!(!zone.is_attacked(Square::at(4, 2), Color::Light));
        let attacked = Square::all().filter(|sq| zone.is_attacked(*sq, Color::Light));
        assert_eq!(attacked.count(), 2);
    }

    #[test]
    fn both_sides_may_attack_the_same_square() {
        let board = Board::with_pieces([
            piece(Color::Light, PieceKind::Knight, 1, 0),
            piece(Color::Dark, PieceKind::Bishop, 5, 5),
        ])
        .expect("board should build");
        let zone = ThreatZone::compute(&board);
        let c3 = Square::at(2, 2);
        assert!(zone.is_attacked(c3, Color::Light));
        assert!(zone.is_attacked(c3, Color::Dark));
    }

    #[test]
    fn single_square_query_agrees_with_zone() {
        let board = Board::standard();
        let zone = ThreatZone::compute_for(&board, Color::Dark);
        for square in Square::all() {
            assert_eq!(
                zone.is_attacked(square, Color::Dark),
                is_square_attacked(&board, square, Color::Dark),
                "mismatch on {square}"
            );
        }
    }
}
