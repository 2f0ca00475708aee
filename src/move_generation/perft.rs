//! Perft: exhaustive legal move counting.
//!
//! Counts leaf nodes and their move classifications to a fixed depth. The
//! parallel variant fans out one worker thread per root move; each branch
//! owns its own `Board` value, so no locking is involved.

use std::sync::Arc;
use std::thread;

use log::debug;

use crate::chess_errors::{RulesError, RulesResult};
use crate::game_state::chess_types::{Board, Color, MoveKind};
use crate::move_generation::legal_move_checks::is_in_check;
use crate::move_generation::legal_move_generator::{has_legal_action, LegalMoveGenerator};
use crate::move_generation::move_generator::{GeneratedMove, MoveGenerator};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub en_passant: usize,
    pub castles: usize,
    pub promotions: usize,
    pub checks: usize,
    pub checkmates: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passant += rhs.en_passant;
        self.castles += rhs.castles;
        self.promotions += rhs.promotions;
        self.checks += rhs.checks;
        self.checkmates += rhs.checkmates;
    }
}

/// Perft with the rules engine's own generator.
pub fn perft_legal(board: &Board, side: Color, depth: u8) -> PerftCounts {
    perft(&LegalMoveGenerator, board, side, depth)
}

pub fn perft<G: MoveGenerator>(
    generator: &G,
    board: &Board,
    side: Color,
    depth: u8,
) -> PerftCounts {
    if depth == 0 {
        return PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        };
    }

    let mut total = PerftCounts::default();
    for mv in generator.generate_legal_moves(board, side) {
        perft_recurse(generator, &mv, side.opposite(), depth, 1, &mut total);
    }
    total
}

pub fn perft_parallel(
    generator: Arc<dyn MoveGenerator>,
    board: &Board,
    side: Color,
    depth: u8,
) -> RulesResult<PerftCounts> {
    if depth == 0 {
        return Ok(PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        });
    }

    let root_moves = generator.generate_legal_moves(board, side);
    debug!("perft_parallel: {} root moves at depth {depth}", root_moves.len());

    let mut handles = Vec::with_capacity(root_moves.len());
    for mv in root_moves {
        let generator_ref = Arc::clone(&generator);
        handles.push(thread::spawn(move || {
            let mut local = PerftCounts::default();
            perft_recurse(generator_ref.as_ref(), &mv, side.opposite(), depth, 1, &mut local);
            local
        }));
    }

    let mut total = PerftCounts::default();
    for handle in handles {
        let local = handle.join().map_err(|_| RulesError::WorkerPanicked)?;
        total.merge(local);
    }
    Ok(total)
}

/// `to_move` is the side replying to `mv`.
fn perft_recurse<G: MoveGenerator + ?Sized>(
    generator: &G,
    mv: &GeneratedMove,
    to_move: Color,
    search_depth: u8,
    current_depth: u8,
    counts: &mut PerftCounts,
) {
    if current_depth == search_depth {
        count_leaf(mv, to_move, counts);
        return;
    }

    for child in generator.generate_legal_moves(&mv.board_after, to_move) {
        perft_recurse(
            generator,
            &child,
            to_move.opposite(),
            search_depth,
            current_depth + 1,
            counts,
        );
    }
}

fn count_leaf(mv: &GeneratedMove, to_move: Color, counts: &mut PerftCounts) {
    counts.nodes += 1;
    if mv.kind.is_capture() {
        counts.captures += 1;
    }
    match mv.kind {
        MoveKind::EnPassant => counts.en_passant += 1,
        MoveKind::Castle(_) => counts.castles += 1,
        MoveKind::Promotion { .. } => counts.promotions += 1,
        _ => {}
    }
    if is_in_check(&mv.board_after, to_move) {
        counts.checks += 1;
        if !has_legal_action(&mv.board_after, to_move) {
            counts.checkmates += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::{Action, CastleSide, Piece, PieceKind, Square};

    /// Two root moves, each with a fixed reply list, independent of the board.
    struct MockMoveGenerator;

    fn scripted(kind: MoveKind, board_after: Board) -> GeneratedMove {
        let piece = Piece::new(Color::Light, PieceKind::Pawn, Square::at(0, 1));
        GeneratedMove {
            action: Action::new(piece, Square::at(0, 2)),
            kind,
            board_after,
        }
    }

    impl MoveGenerator for MockMoveGenerator {
        fn generate_legal_moves(&self, board: &Board, side: Color) -> Vec<GeneratedMove> {
            match (side, board.en_passant_file()) {
                (Color::Light, None) => vec![
                    scripted(MoveKind::Normal, board.with_en_passant_file(Some(1))),
                    scripted(MoveKind::Capture, board.with_en_passant_file(Some(2))),
                ],
                (Color::Dark, Some(1)) => vec![
                    scripted(MoveKind::EnPassant, Board::empty()),
                    scripted(MoveKind::Castle(CastleSide::Long), Board::empty()),
                ],
                (Color::Dark, Some(2)) => vec![scripted(
                    MoveKind::Promotion { capture: true },
                    Board::empty(),
                )],
                _ => Vec::new(),
            }
        }
    }

    #[test]
    fn perft_depth_zero_counts_single_node() {
        let counts = perft(&MockMoveGenerator, &Board::empty(), Color::Light, 0);
        assert_eq!(
            counts,
            PerftCounts {
                nodes: 1,
                ..PerftCounts::default()
            }
        );
    }

    #[test]
    fn perft_depth_two_aggregates_leaf_metrics() {
        let counts = perft(&MockMoveGenerator, &Board::empty(), Color::Light, 2);
        assert_eq!(
            counts,
            PerftCounts {
                nodes: 3,
                captures: 2,
                en_passant: 1,
                castles: 1,
                promotions: 1,
                checks: 0,
                checkmates: 0,
            }
        );
    }

    #[test]
    fn parallel_perft_matches_single_threaded() {
        let board = Board::standard();
        let single = perft_legal(&board, Color::Light, 2);
        let parallel = perft_parallel(Arc::new(LegalMoveGenerator), &board, Color::Light, 2)
            .expect("parallel perft should run");
        assert_eq!(single, parallel);
        assert_eq!(single.nodes, 400);
    }
}
