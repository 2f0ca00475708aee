use crate::game_state::chess_types::Delta;
use crate::moves::move_descriptions::{ray_paths, Candidate};

pub const BISHOP_DIRECTIONS: [Delta; 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

pub fn bishop_candidates() -> Vec<Candidate> {
    BISHOP_DIRECTIONS.iter().copied().flat_map(ray_paths).collect()
}
