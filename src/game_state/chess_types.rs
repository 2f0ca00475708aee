//! Core value types shared by every layer of the rules engine.
//!
//! Squares are addressed as `(file, rank)` with `file 0 == a` and
//! `rank 0 == 1`, so the light side's back rank is rank 0 and light pawns
//! advance towards rank 7. All types here are small `Copy` values; the only
//! aggregate is [`crate::game_state::board::Board`].

use std::fmt;

use crate::chess_errors::{RulesError, RulesResult};

pub use crate::game_state::board::Board;

/// File/rank offset applied to a square by the geometry generators.
pub type Delta = (i8, i8);

/// One of the two opposing sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Light,
    Dark,
}

impl Color {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::Light => 0,
            Color::Dark => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::Light => Color::Dark,
            Color::Dark => Color::Light,
        }
    }

    /// Rank holding this side's king and rooks at the start of the game.
    #[inline]
    pub const fn back_rank(self) -> u8 {
        match self {
            Color::Light => 0,
            Color::Dark => 7,
        }
    }

    /// Rank a pawn of this side must reach to promote.
    #[inline]
    pub const fn promotion_rank(self) -> u8 {
        match self {
            Color::Light => 7,
            Color::Dark => 0,
        }
    }

    /// Rank pawns of this side start on, the only rank allowing a double step.
    #[inline]
    pub const fn pawn_start_rank(self) -> u8 {
        match self {
            Color::Light => 1,
            Color::Dark => 6,
        }
    }

    /// Direction of a pawn step for this side.
    #[inline]
    pub const fn forward(self) -> i8 {
        match self {
            Color::Light => 1,
            Color::Dark => -1,
        }
    }
}

/// Piece kind; color is carried separately on [`Piece`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            PieceKind::Pawn => 0,
            PieceKind::Knight => 1,
            PieceKind::Bishop => 2,
            PieceKind::Rook => 3,
            PieceKind::Queen => 4,
            PieceKind::King => 5,
        }
    }

    /// Upper-case role letter used by the piece notation and move text.
    #[inline]
    pub const fn letter(self) -> char {
        match self {
            PieceKind::Pawn => 'P',
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
            PieceKind::Rook => 'R',
            PieceKind::Queen => 'Q',
            PieceKind::King => 'K',
        }
    }

    /// Inverse of [`PieceKind::letter`], case-insensitive.
    pub fn from_letter(letter: char) -> Option<Self> {
        match letter.to_ascii_uppercase() {
            'P' => Some(PieceKind::Pawn),
            'N' => Some(PieceKind::Knight),
            'B' => Some(PieceKind::Bishop),
            'R' => Some(PieceKind::Rook),
            'Q' => Some(PieceKind::Queen),
            'K' => Some(PieceKind::King),
            _ => None,
        }
    }
}

/// Movement role keyed into the rule tables. Pawns are split by side so that
/// their forward direction is baked into the table rather than branched on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveRole {
    LightPawn,
    DarkPawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl MoveRole {
    pub const ALL: [MoveRole; 7] = [
        MoveRole::LightPawn,
        MoveRole::DarkPawn,
        MoveRole::Knight,
        MoveRole::Bishop,
        MoveRole::Rook,
        MoveRole::Queen,
        MoveRole::King,
    ];

    #[inline]
    pub const fn of(color: Color, kind: PieceKind) -> Self {
        match (kind, color) {
            (PieceKind::Pawn, Color::Light) => MoveRole::LightPawn,
            (PieceKind::Pawn, Color::Dark) => MoveRole::DarkPawn,
            (PieceKind::Knight, _) => MoveRole::Knight,
            (PieceKind::Bishop, _) => MoveRole::Bishop,
            (PieceKind::Rook, _) => MoveRole::Rook,
            (PieceKind::Queen, _) => MoveRole::Queen,
            (PieceKind::King, _) => MoveRole::King,
        }
    }

    #[inline]
    pub const fn index(self) -> usize {
        match self {
            MoveRole::LightPawn => 0,
            MoveRole::DarkPawn => 1,
            MoveRole::Knight => 2,
            MoveRole::Bishop => 3,
            MoveRole::Rook => 4,
            MoveRole::Queen => 5,
            MoveRole::King => 6,
        }
    }
}

/// A board coordinate. Both components are always in `0..=7`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    file: u8,
    rank: u8,
}

impl Square {
    /// Checked constructor.
    pub fn new(file: u8, rank: u8) -> RulesResult<Self> {
        if file > 7 || rank > 7 {
            return Err(RulesError::SquareOutOfBounds { file, rank });
        }
        Ok(Self { file, rank })
    }

    /// Constructor for constants and tests; panics outside the board.
    pub const fn at(file: u8, rank: u8) -> Self {
        assert!(file < 8 && rank < 8, "square outside the board");
        Self { file, rank }
    }

    #[inline]
    pub const fn from_index(index: usize) -> Self {
        Self {
            file: (index % 8) as u8,
            rank: (index / 8) as u8,
        }
    }

    #[inline]
    pub const fn file(self) -> u8 {
        self.file
    }

    #[inline]
    pub const fn rank(self) -> u8 {
        self.rank
    }

    /// Position in the `file + rank * 8` board array.
    #[inline]
    pub const fn index(self) -> usize {
        self.file as usize + self.rank as usize * 8
    }

    /// Square reached by `delta`, or `None` when it falls off the board.
    #[inline]
    pub fn offset(self, delta: Delta) -> Option<Square> {
        let file = self.file as i8 + delta.0;
        let rank = self.rank as i8 + delta.1;
        if (0..8).contains(&file) && (0..8).contains(&rank) {
            Some(Self {
                file: file as u8,
                rank: rank as u8,
            })
        } else {
            None
        }
    }

    /// Offset that takes `self` to `to`.
    #[inline]
    pub fn delta_to(self, to: Square) -> Delta {
        (
            to.file as i8 - self.file as i8,
            to.rank as i8 - self.rank as i8,
        )
    }

    pub fn all() -> impl Iterator<Item = Square> {
        (0..64).map(Square::from_index)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}",
            char::from(b'a' + self.file),
            char::from(b'1' + self.rank)
        )
    }
}

/// A piece standing on a square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub square: Square,
    pub color: Color,
    pub kind: PieceKind,
}

impl Piece {
    #[inline]
    pub const fn new(color: Color, kind: PieceKind, square: Square) -> Self {
        Self {
            square,
            color,
            kind,
        }
    }

    #[inline]
    pub const fn role(&self) -> MoveRole {
        MoveRole::of(self.color, self.kind)
    }

    /// The same piece relocated to `square`.
    #[inline]
    pub const fn moved_to(self, square: Square) -> Self {
        Self { square, ..self }
    }
}

/// Which rook a castling move uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CastleSide {
    Short,
    Long,
}

/// Per-side history flags gating castling. Once set, a flag never clears.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct CastlingRights {
    pub king_moved: bool,
    pub short_rook_moved: bool,
    pub long_rook_moved: bool,
}

impl CastlingRights {
    /// Rights of a side that has already lost both castles.
    pub const NONE: CastlingRights = CastlingRights {
        king_moved: true,
        short_rook_moved: true,
        long_rook_moved: true,
    };

    #[inline]
    pub const fn rook_moved(&self, side: CastleSide) -> bool {
        match side {
            CastleSide::Short => self.short_rook_moved,
            CastleSide::Long => self.long_rook_moved,
        }
    }

    #[inline]
    pub const fn may_castle(&self, side: CastleSide) -> bool {
        !self.king_moved && !self.rook_moved(side)
    }
}

/// One ply: the piece being moved and where it lands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Action {
    pub from: Piece,
    pub destination: Square,
}

impl Action {
    #[inline]
    pub const fn new(from: Piece, destination: Square) -> Self {
        Self { from, destination }
    }
}

/// Side effects implied by an action, derived from the prior board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveKind {
    Normal,
    Capture,
    EnPassant,
    Castle(CastleSide),
    Promotion { capture: bool },
}

impl MoveKind {
    #[inline]
    pub const fn is_capture(self) -> bool {
        matches!(
            self,
            MoveKind::Capture | MoveKind::EnPassant | MoveKind::Promotion { capture: true }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn square_offset_stays_on_board() {
        let h8 = Square::at(7, 7);
        assert_eq!(h8.offset((1, 0)), None);
        assert_eq!(h8.offset((0, 1)), None);
        assert_eq!(h8.offset((-7, -7)), Some(Square::at(0, 0)));
    }

    #[test]
    fn square_index_matches_file_plus_rank_times_eight() {
        let e4 = Square::at(4, 3);
        assert_eq!(e4.index(), 28);
        assert_eq!(Square::from_index(28), e4);
        assert_eq!(e4.to_string(), "e4");
    }

    #[test]
    fn checked_square_rejects_out_of_range() {
        assert!(Square::new(8, 0).is_err());
        assert!(Square::new(0, 8).is_err());
        assert!(Square::new(7, 7).is_ok());
    }

    #[test]
    fn pawn_roles_split_by_color() {
        assert_eq!(MoveRole::of(Color::Light, PieceKind::Pawn), MoveRole::LightPawn);
        assert_eq!(MoveRole::of(Color::Dark, PieceKind::Pawn), MoveRole::DarkPawn);
        assert_eq!(MoveRole::of(Color::Dark, PieceKind::Rook), MoveRole::Rook);
    }
}
