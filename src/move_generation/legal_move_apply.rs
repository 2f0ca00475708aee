//! Move application.
//!
//! `apply_move(board, action)` produces the next board from a copy of the
//! prior one: it clears the origin, drops the piece on its destination
//! (overwriting any capture), removes an en-passant victim, relocates the
//! castling rook, auto-promotes pawns to queens on the far rank, records a
//! double step's file for en passant and sets the monotonic castling flags.

use log::trace;

use crate::chess_errors::{RulesError, RulesResult};
use crate::game_state::chess_rules::{castled_rook_square, rook_home};
use crate::game_state::chess_types::*;

/// Applies an action drawn from `legal_moves`.
///
/// # Panics
///
/// When the action's piece does not stand on its origin square. That is a
/// caller bug, not a user-input problem; use [`try_apply_move`] to get an
/// error instead.
pub fn apply_move(board: &Board, action: &Action) -> Board {
    match try_apply_move(board, action) {
        Ok(next) => next,
        Err(err) => panic!("apply_move called with an action not taken from this board: {err}"),
    }
}

/// Fallible variant of [`apply_move`] for tooling that handles untrusted
/// actions.
pub fn try_apply_move(board: &Board, action: &Action) -> RulesResult<Board> {
    let origin = action.from.square;
    let standing = board.piece_at(origin).ok_or(RulesError::EmptyOrigin(origin))?;
    if standing != action.from {
        return Err(RulesError::ActionMismatch(origin));
    }
    Ok(apply_unchecked(board, action))
}

/// Derives the side effects of `action` on `board`.
pub fn classify_move(board: &Board, action: &Action) -> MoveKind {
    let piece = action.from;
    let destination = action.destination;
    let (file_delta, _) = piece.square.delta_to(destination);
    let capture = board
        .piece_at(destination)
        .is_some_and(|p| p.color != piece.color);

    match piece.kind {
        PieceKind::King if file_delta == 2 => MoveKind::Castle(CastleSide::Short),
        PieceKind::King if file_delta == -2 => MoveKind::Castle(CastleSide::Long),
        PieceKind::Pawn if destination.rank() == piece.color.promotion_rank() => {
            MoveKind::Promotion { capture }
        }
        PieceKind::Pawn if file_delta != 0 && board.piece_at(destination).is_none() => {
            MoveKind::EnPassant
        }
        _ if capture => MoveKind::Capture,
        _ => MoveKind::Normal,
    }
}

/// Applies `action` without checking that its piece is on the board. Used by
/// the king-safety check, which may be asked about a piece that is not
/// placed on the board it is evaluated against.
pub(crate) fn apply_unchecked(board: &Board, action: &Action) -> Board {
    let piece = action.from;
    let color = piece.color;
    let origin = piece.square;
    let destination = action.destination;
    let kind = classify_move(board, action);

    let mut next = board.clone();
    next.clear(origin);
    let captured = next.clear(destination);

    match kind {
        MoveKind::EnPassant => {
            next.clear(Square::at(destination.file(), origin.rank()));
        }
        MoveKind::Castle(side) => {
            if let Some(rook) = next.clear(rook_home(color, side)) {
                next.put(rook.moved_to(castled_rook_square(color, side)));
            }
        }
        _ => {}
    }

    let landed = match kind {
        MoveKind::Promotion { .. } => Piece::new(color, PieceKind::Queen, destination),
        _ => piece.moved_to(destination),
    };
    next.put(landed);

    let double_step = piece.kind == PieceKind::Pawn
        && origin.rank().abs_diff(destination.rank()) == 2
        && origin.file() == destination.file();
    next.set_en_passant_file(double_step.then_some(origin.file()));

    update_castling_rights(&mut next, &piece, captured);

    trace!("applied {}{origin}{destination} as {kind:?}", piece.kind.letter());
    next
}

fn update_castling_rights(next: &mut Board, piece: &Piece, captured: Option<Piece>) {
    let color = piece.color;
    match piece.kind {
        PieceKind::King => next.castling_rights_mut(color).king_moved = true,
        PieceKind::Rook => mark_rook_home(next, color, piece.square),
        _ => {}
    }

    // A rook taken on its home square costs its owner that castle too.
    if let Some(victim) = captured.filter(|p| p.kind == PieceKind::Rook) {
        mark_rook_home(next, victim.color, victim.square);
    }
}

fn mark_rook_home(next: &mut Board, color: Color, square: Square) {
    if square == rook_home(color, CastleSide::Short) {
        next.castling_rights_mut(color).short_rook_moved = true;
    } else if square == rook_home(color, CastleSide::Long) {
        next.castling_rights_mut(color).long_rook_moved = true;
    }
}
