//! Random self-play driver.
//!
//! Each ply picks a random piece of the side to move, asks the engine for its
//! legal destinations and plays one of them at random. Every query is timed
//! so the run doubles as a latency probe for `legal_moves`.
//!
//! Usage:
//! `cargo run --release --bin random_plays -- --plies 1000 --seed 7`

use anyhow::bail;
use chrono::Utc;
use clap::Parser;
use log::{debug, info};
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;

use chess_rules::game_state::chess_types::{Action, Board, Color, Piece, Square};
use chess_rules::move_generation::legal_move_apply::apply_move;
use chess_rules::move_generation::legal_move_generator::{game_status, legal_moves, GameStatus};
use chess_rules::utils::long_algebraic::format_action;
use chess_rules::utils::piece_notation::format_piece_list;

#[derive(Parser)]
#[clap(author, version, about)]
struct Cli {
    /// Maximum number of plies to play.
    #[clap(long, default_value = "500")]
    plies: usize,
    /// Seed for the move picker; equal seeds replay the same game.
    #[clap(long, default_value = "2")]
    seed: u64,
}

#[derive(Default)]
struct QueryStats {
    micros: Vec<i64>,
}

impl QueryStats {
    fn timed(&mut self, piece: &Piece, board: &Board) -> Vec<Square> {
        let started = Utc::now();
        let destinations = legal_moves(piece, board);
        let elapsed = Utc::now() - started;
        self.micros.push(elapsed.num_microseconds().unwrap_or(i64::MAX));
        destinations
    }

    fn report(&mut self) {
        if self.micros.is_empty() {
            println!("queries=0");
            return;
        }
        self.micros.sort_unstable();
        let count = self.micros.len();
        let total: i64 = self.micros.iter().sum();
        let percentile = |p: usize| self.micros[(count * p / 100).min(count - 1)];
        println!(
            "queries={count} mean_us={:.1} p50_us={} p99_us={} max_us={}",
            total as f64 / count as f64,
            percentile(50),
            percentile(99),
            self.micros[count - 1]
        );
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let mut rng = StdRng::seed_from_u64(cli.seed);
    let mut stats = QueryStats::default();
    let mut board = Board::standard();
    let mut side = Color::Light;
    let mut transcript = Vec::with_capacity(cli.plies);

    info!("random play: up to {} plies, seed {}", cli.plies, cli.seed);

    for ply in 0..cli.plies {
        let status = game_status(&board, side);
        if status != GameStatus::Ongoing {
            info!("{side:?} to move: {status:?} after {ply} plies");
            break;
        }

        // Keep drawing pieces until one can move; the status check above
        // guarantees that some piece can.
        let mut pieces: Vec<Piece> = board.pieces_of(side).collect();
        let action = loop {
            let Some(&piece) = pieces.choose(&mut rng) else {
                bail!("{side:?} has no movable piece despite an ongoing game");
            };
            let destinations = stats.timed(&piece, &board);
            match destinations.choose(&mut rng) {
                Some(&destination) => break Action::new(piece, destination),
                None => pieces.retain(|p| *p != piece),
            }
        };

        debug!("ply {ply}: {}", format_action(&action));
        transcript.push(action);
        board = apply_move(&board, &action);
        side = side.opposite();
    }

    let moves: Vec<String> = transcript
        .chunks(2)
        .enumerate()
        .map(|(i, pair)| {
            let text: Vec<String> = pair.iter().map(format_action).collect();
            format!("{}.{}", i + 1, text.join(" "))
        })
        .collect();
    println!("{}", moves.join(" "));
    println!("final: {}", format_piece_list(&board).join(" "));
    stats.report();
    Ok(())
}
