//! Knight geometry: the eight fixed L-shaped jumps.

use crate::game_state::chess_types::Delta;
use crate::moves::move_descriptions::Candidate;

pub const KNIGHT_JUMPS: [Delta; 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

pub fn knight_candidates() -> Vec<Candidate> {
    KNIGHT_JUMPS.iter().copied().map(Candidate::Jump).collect()
}
