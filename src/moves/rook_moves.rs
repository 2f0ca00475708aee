use crate::game_state::chess_types::Delta;
use crate::moves::move_descriptions::{ray_paths, Candidate};

pub const ROOK_DIRECTIONS: [Delta; 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];

/// Four orthogonal rays, each expanded to its seven cumulative paths.
pub fn rook_candidates() -> Vec<Candidate> {
    ROOK_DIRECTIONS.iter().copied().flat_map(ray_paths).collect()
}
