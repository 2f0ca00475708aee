use crate::game_state::chess_types::{Action, Board, Color};
use crate::move_generation::legal_move_apply::apply_unchecked;
use crate::move_generation::threat_zone::is_square_attacked;

/// Whether `color`'s king is attacked. A side without a king is never in
/// check.
#[inline]
pub fn is_in_check(board: &Board, color: Color) -> bool {
    let Some(king_sq) = board.king_square(color) else {
        return false;
    };
    is_square_attacked(board, king_sq, color.opposite())
}

/// Whether the mover's king is safe once `action` has been played.
///
/// The hypothetical position is produced by the move applicator on a fresh
/// copy, so en-passant removals and castling rook moves are accounted for
/// and the caller's board is never touched.
pub fn king_safe_after(board: &Board, action: &Action) -> bool {
    let next = apply_unchecked(board, action);
    !is_in_check(&next, action.from.color)
}
