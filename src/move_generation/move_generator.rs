use crate::game_state::chess_types::{Action, Board, Color, MoveKind};

/// One legal ply together with its classification and resulting board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedMove {
    pub action: Action,
    pub kind: MoveKind,
    pub board_after: Board,
}

/// Source of legal plies for a side. Perft and the play harnesses are
/// written against this seam.
pub trait MoveGenerator: Send + Sync {
    fn generate_legal_moves(&self, board: &Board, side: Color) -> Vec<GeneratedMove>;
}
