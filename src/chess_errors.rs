//! Errors used throughout the rules engine.
//!
//! Engine queries (`legal_moves`, threat zones) are total and never fail;
//! a destination missing from the legal set is a normal negative answer.
//! `RulesError` covers the other category: broken caller contracts and
//! malformed adapter input (piece notation, FEN, algebraic squares). All
//! operations are pure, so retrying with the same input reproduces the
//! same error and callers are not expected to recover beyond reporting it.

use thiserror::Error;

use crate::game_state::chess_types::{Color, Square};

/// Unified error type for the rules engine and its adapters.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RulesError {
    /// A file or rank outside `0..=7`.
    #[error("square ({file}, {rank}) is outside the board")]
    SquareOutOfBounds { file: u8, rank: u8 },

    /// Two pieces were placed on the same square while building a board.
    #[error("square {0} is already occupied")]
    SquareOccupied(Square),

    /// A board was built with more than one king for a side.
    #[error("{0:?} has more than one king")]
    DuplicateKing(Color),

    /// An action names an origin square holding no piece.
    #[error("no piece stands on {0}")]
    EmptyOrigin(Square),

    /// An action's piece does not match what stands on its origin square.
    #[error("action piece does not match the board at {0}")]
    ActionMismatch(Square),

    /// A `<Role><file><rank>` piece token could not be decoded.
    #[error("invalid piece notation: {0}")]
    InvalidPieceNotation(String),

    /// A FEN string (or its placement field) could not be decoded.
    #[error("invalid FEN: {0}")]
    InvalidFen(String),

    /// An algebraic square or move text could not be decoded.
    #[error("invalid algebraic text: {0}")]
    InvalidAlgebraic(String),

    /// A parallel perft branch panicked.
    #[error("perft worker thread panicked")]
    WorkerPanicked,
}

/// Result alias used by fallible engine and adapter functions.
pub type RulesResult<T> = Result<T, RulesError>;
