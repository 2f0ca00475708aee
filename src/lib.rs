//! Crate root module declarations for the chess rules engine.
//!
//! This file exposes the board model, the per-role movement geometry, the
//! validator pipeline with its threat zones and move applicator, and the
//! text adapters (piece notation, FEN, algebraic) so binaries, tests, and
//! external tooling can import stable module paths.

pub mod chess_errors;

pub mod game_state {
    pub mod board;
    pub mod chess_rules;
    pub mod chess_types;
}

pub mod moves {
    pub mod bishop_moves;
    pub mod geometry;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod move_descriptions;
    pub mod pawn_moves;
    pub mod queen_moves;
    pub mod rook_moves;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod move_generator;
    pub mod perft;
    pub mod rule_tables;
    pub mod threat_zone;
    pub mod validators;
}

pub mod utils {
    pub mod algebraic;
    pub mod fen_generator;
    pub mod fen_parser;
    pub mod long_algebraic;
    pub mod piece_notation;
    pub mod render_game_state;
}

pub use chess_errors::{RulesError, RulesResult};
pub use game_state::chess_types::{Action, Board, Color, Piece, PieceKind, Square};
pub use move_generation::legal_move_apply::apply_move;
pub use move_generation::legal_move_generator::legal_moves;
pub use move_generation::threat_zone::ThreatZone;
