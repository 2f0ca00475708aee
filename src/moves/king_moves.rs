//! King geometry.
//!
//! Eight adjacent steps plus two synthetic two-file offsets along the rank
//! that stand for castling. Whether a castle is actually possible is decided
//! entirely by the castling validators.

use crate::game_state::chess_types::{CastleSide, Delta};
use crate::moves::move_descriptions::Candidate;

pub const KING_STEPS: [Delta; 8] = [
    (1, 1),
    (1, 0),
    (1, -1),
    (0, -1),
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, 1),
];

pub const SHORT_CASTLE_DELTA: Delta = (2, 0);
pub const LONG_CASTLE_DELTA: Delta = (-2, 0);

pub fn king_candidates() -> Vec<Candidate> {
    let mut candidates: Vec<Candidate> = KING_STEPS.iter().copied().map(Candidate::Jump).collect();
    candidates.push(Candidate::Castle(CastleSide::Long, LONG_CASTLE_DELTA));
    candidates.push(Candidate::Castle(CastleSide::Short, SHORT_CASTLE_DELTA));
    candidates
}
