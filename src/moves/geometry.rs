//! Per-role dispatch over the geometry generators.

use crate::game_state::chess_types::{Color, MoveRole, Piece, Square};
use crate::moves::bishop_moves::bishop_candidates;
use crate::moves::king_moves::king_candidates;
use crate::moves::knight_moves::knight_candidates;
use crate::moves::move_descriptions::Candidate;
use crate::moves::pawn_moves::pawn_candidates;
use crate::moves::queen_moves::queen_candidates;
use crate::moves::rook_moves::rook_candidates;

/// Raw candidates for a movement role, independent of any board.
pub fn candidates_for(role: MoveRole) -> Vec<Candidate> {
    match role {
        MoveRole::LightPawn => pawn_candidates(Color::Light),
        MoveRole::DarkPawn => pawn_candidates(Color::Dark),
        MoveRole::Knight => knight_candidates(),
        MoveRole::Bishop => bishop_candidates(),
        MoveRole::Rook => rook_candidates(),
        MoveRole::Queen => queen_candidates(),
        MoveRole::King => king_candidates(),
    }
}

/// Raw destination of every candidate of `piece`; `None` marks a candidate
/// that falls off the board and is rejected by the inside-board check.
pub fn raw_destinations(piece: &Piece) -> Vec<Option<Square>> {
    candidates_for(piece.role())
        .iter()
        .map(|c| c.destination_from(piece.square))
        .collect()
}
