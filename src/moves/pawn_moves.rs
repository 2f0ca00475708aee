//! Pawn geometry for both sides.
//!
//! Forward is `+rank` for the light side and `-rank` for the dark side; the
//! two directions are built once into separate candidate lists so the rule
//! tables never branch on color at query time.

use crate::game_state::chess_types::{Color, Delta};
use crate::moves::move_descriptions::Candidate;

/// Diagonal capture offsets for a pawn of `color`.
#[inline]
pub const fn pawn_capture_deltas(color: Color) -> [Delta; 2] {
    let forward = color.forward();
    [(-1, forward), (1, forward)]
}

pub fn pawn_candidates(color: Color) -> Vec<Candidate> {
    let forward = color.forward();
    let [left, right] = pawn_capture_deltas(color);
    vec![
        Candidate::PawnPush((0, forward)),
        Candidate::PawnCapture(right),
        Candidate::PawnCapture(left),
        Candidate::PawnDoublePush {
            through: (0, forward),
            to: (0, 2 * forward),
        },
    ]
}
