//! Raw move candidates emitted by the geometry generators.
//!
//! A candidate says where a piece could go and what kind of step it is, but
//! nothing about occupancy. The rule tables turn each candidate into a
//! validator chain that knows about blockers, captures and king safety.

use crate::game_state::chess_types::{CastleSide, Delta, Square};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Candidate {
    /// Single fixed offset (knight jump, king step).
    Jump(Delta),
    /// Every offset along a ray up to and including the destination, nearest
    /// first. Rays are never truncated here.
    Slide(Vec<Delta>),
    /// Pawn step onto an empty square.
    PawnPush(Delta),
    /// Pawn double step: `through` must be empty as well as `to`.
    PawnDoublePush { through: Delta, to: Delta },
    /// Pawn diagonal: direct capture or en passant.
    PawnCapture(Delta),
    /// Synthetic two-file king step standing for castling.
    Castle(CastleSide, Delta),
}

impl Candidate {
    /// Offset of the destination from the origin.
    pub fn destination_delta(&self) -> Delta {
        match self {
            Candidate::Jump(d)
            | Candidate::PawnPush(d)
            | Candidate::PawnCapture(d)
            | Candidate::Castle(_, d) => *d,
            Candidate::PawnDoublePush { to, .. } => *to,
            Candidate::Slide(path) => path.last().copied().unwrap_or((0, 0)),
        }
    }

    /// Raw destination from `origin`, `None` when it leaves the board.
    #[inline]
    pub fn destination_from(&self, origin: Square) -> Option<Square> {
        origin.offset(self.destination_delta())
    }

    /// Whether the candidate can attack its destination (pushes and castling
    /// never do).
    #[inline]
    pub fn attacks(&self) -> bool {
        matches!(
            self,
            Candidate::Jump(_) | Candidate::Slide(_) | Candidate::PawnCapture(_)
        )
    }
}

/// Expands a ray direction into its seven cumulative paths: one step, two
/// steps and so on up to the longest ray on an 8x8 board.
pub fn ray_paths(direction: Delta) -> impl Iterator<Item = Candidate> {
    (1..=7i8).map(move |length| {
        Candidate::Slide(
            (1..=length)
                .map(|step| (direction.0 * step, direction.1 * step))
                .collect(),
        )
    })
}
