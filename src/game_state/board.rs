//! Immutable position representation.
//!
//! `Board` stores a 64-entry piece array indexed by `file + rank * 8`, the
//! en-passant file left by the previous ply and per-side castling flags.
//! Boards are values: the only code that writes into one is the move
//! applicator, and it always works on a fresh clone, never on the caller's
//! board.

use std::fmt;

use crate::chess_errors::{RulesError, RulesResult};
use crate::game_state::chess_types::*;
use crate::utils::render_game_state::render_board;

const BACK_RANK_LINEUP: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Board {
    squares: [Option<Piece>; 64],
    en_passant_file: Option<u8>,
    castling_rights: [CastlingRights; 2],
}

impl Default for Board {
    fn default() -> Self {
        Self {
            squares: [None; 64],
            en_passant_file: None,
            castling_rights: [CastlingRights::default(); 2],
        }
    }
}

impl Board {
    /// Board with no pieces, no en-passant file and full castling rights.
    #[inline]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Standard starting position.
    pub fn standard() -> Self {
        let mut board = Self::empty();
        for (file, kind) in BACK_RANK_LINEUP.iter().copied().enumerate() {
            let file = file as u8;
            for color in [Color::Light, Color::Dark] {
                board.put(Piece::new(color, kind, Square::at(file, color.back_rank())));
                board.put(Piece::new(
                    color,
                    PieceKind::Pawn,
                    Square::at(file, color.pawn_start_rank()),
                ));
            }
        }
        board
    }

    /// Builds a board from a piece list.
    ///
    /// Fails when two pieces share a square or a side has more than one king.
    /// A side without a king is accepted; its king is then never in danger.
    pub fn with_pieces<I>(pieces: I) -> RulesResult<Self>
    where
        I: IntoIterator<Item = Piece>,
    {
        let mut board = Self::empty();
        let mut kings = [0u8; 2];
        for piece in pieces {
            if board.piece_at(piece.square).is_some() {
                return Err(RulesError::SquareOccupied(piece.square));
            }
            if piece.kind == PieceKind::King {
                kings[piece.color.index()] += 1;
                if kings[piece.color.index()] > 1 {
                    return Err(RulesError::DuplicateKing(piece.color));
                }
            }
            board.put(piece);
        }
        Ok(board)
    }

    /// Copy of this board with the given en-passant file.
    #[must_use]
    pub fn with_en_passant_file(&self, file: Option<u8>) -> Self {
        let mut next = self.clone();
        next.en_passant_file = file.filter(|f| *f < 8);
        next
    }

    /// Copy of this board with `color`'s castling flags replaced.
    #[must_use]
    pub fn with_castling_rights(&self, color: Color, rights: CastlingRights) -> Self {
        let mut next = self.clone();
        next.castling_rights[color.index()] = rights;
        next
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.squares[square.index()]
    }

    /// All pieces, ordered by square index.
    pub fn pieces(&self) -> impl Iterator<Item = Piece> + '_ {
        self.squares.iter().flatten().copied()
    }

    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = Piece> + '_ {
        self.pieces().filter(move |p| p.color == color)
    }

    /// Square of `color`'s king, if it has one.
    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.pieces_of(color)
            .find(|p| p.kind == PieceKind::King)
            .map(|p| p.square)
    }

    /// File of the pawn that double-stepped on the previous ply.
    #[inline]
    pub fn en_passant_file(&self) -> Option<u8> {
        self.en_passant_file
    }

    #[inline]
    pub fn castling_rights(&self, color: Color) -> CastlingRights {
        self.castling_rights[color.index()]
    }

    // --- Applicator-only writers. Callers outside the crate never see a
    // board change after it has been handed out. ---

    #[inline]
    pub(crate) fn put(&mut self, piece: Piece) {
        self.squares[piece.square.index()] = Some(piece);
    }

    #[inline]
    pub(crate) fn clear(&mut self, square: Square) -> Option<Piece> {
        self.squares[square.index()].take()
    }

    #[inline]
    pub(crate) fn set_en_passant_file(&mut self, file: Option<u8>) {
        self.en_passant_file = file;
    }

    #[inline]
    pub(crate) fn castling_rights_mut(&mut self, color: Color) -> &mut CastlingRights {
        &mut self.castling_rights[color.index()]
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", render_board(self))?;
        write!(
            f,
            "en_passant_file={:?} light={:?} dark={:?}",
            self.en_passant_file, self.castling_rights[0], self.castling_rights[1]
        )
    }
}
