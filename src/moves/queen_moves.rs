//! Queen geometry: union of the rook and bishop rays.

use crate::moves::bishop_moves::bishop_candidates;
use crate::moves::move_descriptions::Candidate;
use crate::moves::rook_moves::rook_candidates;

pub fn queen_candidates() -> Vec<Candidate> {
    let mut candidates = rook_candidates();
    candidates.extend(bishop_candidates());
    candidates
}

#[cfg(test)]
mod tests {
    use super::queen_candidates;
    use crate::game_state::chess_types::Square;

    #[test]
    fn queen_from_d4_reaches_twenty_seven_squares() {
        let d4 = Square::at(3, 3);
        let reachable = queen_candidates()
            .iter()
            .filter_map(|c| c.destination_from(d4))
            .count();
        assert_eq!(reachable, 27);
    }
}
