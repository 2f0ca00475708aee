//! Canonical chess-rule constants.
//!
//! Home squares for castling and the standard starting lineup.

use crate::game_state::chess_types::{CastleSide, Color, Square};

/// Standard starting position, placement field of a FEN string.
pub const STARTING_PLACEMENT: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

/// Standard starting position as a full FEN string.
pub const STARTING_POSITION_FEN: &str =
    "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

pub const KING_HOME_FILE: u8 = 4;
pub const SHORT_ROOK_HOME_FILE: u8 = 7;
pub const LONG_ROOK_HOME_FILE: u8 = 0;

#[inline]
pub const fn king_home(color: Color) -> Square {
    Square::at(KING_HOME_FILE, color.back_rank())
}

#[inline]
pub const fn rook_home(color: Color, side: CastleSide) -> Square {
    let file = match side {
        CastleSide::Short => SHORT_ROOK_HOME_FILE,
        CastleSide::Long => LONG_ROOK_HOME_FILE,
    };
    Square::at(file, color.back_rank())
}

/// Square the king lands on when castling.
#[inline]
pub const fn castled_king_square(color: Color, side: CastleSide) -> Square {
    let file = match side {
        CastleSide::Short => 6,
        CastleSide::Long => 2,
    };
    Square::at(file, color.back_rank())
}

/// Square the rook lands on when castling.
#[inline]
pub const fn castled_rook_square(color: Color, side: CastleSide) -> Square {
    let file = match side {
        CastleSide::Short => 5,
        CastleSide::Long => 3,
    };
    Square::at(file, color.back_rank())
}

/// Files strictly between king and rook; all must be empty to castle.
#[inline]
pub const fn castling_gap_files(side: CastleSide) -> &'static [u8] {
    match side {
        CastleSide::Short => &[5, 6],
        CastleSide::Long => &[1, 2, 3],
    }
}

/// Back-rank files that must not be attacked for a castle: every square the
/// king stands on or crosses, and on the long side the b-file square the
/// rook crosses as well.
#[inline]
pub const fn castling_guarded_files(side: CastleSide) -> &'static [u8] {
    match side {
        CastleSide::Short => &[4, 5, 6],
        CastleSide::Long => &[4, 3, 2, 1],
    }
}
