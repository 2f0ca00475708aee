//! Composable move validators.
//!
//! A [`Check`] is one predicate evaluated at `origin + delta`. A [`Step`] is
//! a delta-parameterised validator built from checks with the OR combinator.
//! A [`Validator`] is bound to a concrete delta and composes with the AND
//! combinator (`and`), which re-derives the delta from whatever square the
//! previous stage resolved, and the ALL combinator (`All`), which folds a
//! path of per-square validators and yields the last square only when every
//! stage accepted.
//!
//! Resolving a validator either yields the destination square or rejects.

use log::trace;

use crate::game_state::chess_rules::{
    castled_king_square, castling_gap_files, castling_guarded_files, king_home, rook_home,
};
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_checks::king_safe_after;
use crate::move_generation::threat_zone::ThreatZone;

/// Atomic predicate evaluated against the square at `origin + delta`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Check {
    /// Accepts any on-board square, occupied or not.
    Inside,
    /// Rejects a square holding a piece of the mover's side.
    NoFriend,
    /// Requires an empty square.
    Empty,
    /// Requires an enemy piece on the square.
    Enemy,
    /// Requires an empty square and a mover still on its pawn start rank.
    EmptyOnStartRank,
    /// En-passant capture onto the previous ply's double-step file.
    EnPassant,
    ShortCastle,
    LongCastle,
    /// Rejects moves that leave the mover's own king attacked.
    KingSafe,
}

impl Check {
    pub fn apply(self, delta: Delta, piece: &Piece, board: &Board) -> Option<Square> {
        let destination = piece.square.offset(delta)?;
        let occupant = board.piece_at(destination);
        let accepted = match self {
            Check::Inside => true,
            Check::NoFriend => occupant.map_or(true, |p| p.color != piece.color),
            Check::Empty => occupant.is_none(),
            Check::Enemy => occupant.is_some_and(|p| p.color != piece.color),
            Check::EmptyOnStartRank => {
                occupant.is_none() && piece.square.rank() == piece.color.pawn_start_rank()
            }
            Check::EnPassant => en_passant_allowed(piece, destination, board),
            Check::ShortCastle => castle_allowed(piece, destination, board, CastleSide::Short),
            Check::LongCastle => castle_allowed(piece, destination, board, CastleSide::Long),
            Check::KingSafe => king_safe_after(board, &Action::new(*piece, destination)),
        };
        accepted.then_some(destination)
    }
}

/// A validator still waiting for its delta.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    Is(Check),
    /// First stage that accepts wins.
    Or(Box<Step>, Box<Step>),
}

impl Step {
    pub fn or(self, other: Step) -> Step {
        Step::Or(Box::new(self), Box::new(other))
    }

    pub fn apply(&self, delta: Delta, piece: &Piece, board: &Board) -> Option<Square> {
        match self {
            Step::Is(check) => check.apply(delta, piece, board),
            Step::Or(first, second) => first
                .apply(delta, piece, board)
                .or_else(|| second.apply(delta, piece, board)),
        }
    }
}

impl From<Check> for Step {
    fn from(check: Check) -> Self {
        Step::Is(check)
    }
}

/// A validator bound to a concrete candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validator {
    Probe(Step, Delta),
    And(Box<Validator>, Step),
    All(Vec<Validator>),
}

impl Validator {
    pub fn probe(step: impl Into<Step>, delta: Delta) -> Self {
        Validator::Probe(step.into(), delta)
    }

    /// AND combinator: feeds the resolved square of `self` into `step`.
    #[must_use]
    pub fn and(self, step: impl Into<Step>) -> Self {
        Validator::And(Box::new(self), step.into())
    }

    pub fn resolve(&self, piece: &Piece, board: &Board) -> Option<Square> {
        match self {
            Validator::Probe(step, delta) => step.apply(*delta, piece, board),
            Validator::And(first, step) => {
                let reached = first.resolve(piece, board)?;
                step.apply(piece.square.delta_to(reached), piece, board)
            }
            Validator::All(stages) => {
                let mut last = None;
                for stage in stages {
                    last = Some(stage.resolve(piece, board)?);
                }
                last
            }
        }
    }
}

/// The victim stands beside the capturer, on the destination file and the
/// capturer's own rank. Only the file of the last double step is recorded,
/// so that file is all the timing check can compare.
fn en_passant_allowed(piece: &Piece, destination: Square, board: &Board) -> bool {
    if piece.kind != PieceKind::Pawn
        || board.en_passant_file() != Some(destination.file())
        || board.piece_at(destination).is_some()
    {
        return false;
    }
    let victim_square = Square::at(destination.file(), piece.square.rank());
    board
        .piece_at(victim_square)
        .is_some_and(|p| p.kind == PieceKind::Pawn && p.color != piece.color)
}

fn castle_allowed(piece: &Piece, destination: Square, board: &Board, side: CastleSide) -> bool {
    let color = piece.color;
    if piece.kind != PieceKind::King
        || piece.square != king_home(color)
        || destination != castled_king_square(color, side)
    {
        return false;
    }

    if !board.castling_rights(color).may_castle(side) {
        trace!("{color:?} {side:?} castle rejected: rights lost");
        return false;
    }

    let rook_in_place = board
        .piece_at(rook_home(color, side))
        .is_some_and(|p| p.kind == PieceKind::Rook && p.color == color);
    let rank = color.back_rank();
    let gap_clear = castling_gap_files(side)
        .iter()
        .all(|&file| board.piece_at(Square::at(file, rank)).is_none());
    if !rook_in_place || !gap_clear {
        trace!("{color:?} {side:?} castle rejected: rook missing or path blocked");
        return false;
    }

    let enemy = color.opposite();
    let zone = ThreatZone::compute_for(board, enemy);
    let path_safe = castling_guarded_files(side)
        .iter()
        .all(|&file| !zone.is_attacked(Square::at(file, rank), enemy));
    if !path_safe {
        trace!("{color:?} {side:?} castle rejected: castling path is attacked");
    }
    path_safe
}
