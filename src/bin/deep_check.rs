//! Perft runner for the rules engine.
//!
//! Usage:
//! `cargo run --release --bin deep_check`
//! `cargo run --release --bin deep_check -- --depth 4 --parallel`
//! `cargo run --release --bin deep_check -- --fen "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1"`

use std::sync::Arc;

use anyhow::Context;
use chrono::Utc;
use clap::Parser;
use log::info;

use chess_rules::game_state::chess_rules::STARTING_POSITION_FEN;
use chess_rules::move_generation::legal_move_generator::LegalMoveGenerator;
use chess_rules::move_generation::perft::{perft_legal, perft_parallel};
use chess_rules::utils::fen_parser::parse_fen;

#[derive(Parser)]
#[clap(author, version, about)]
struct Cli {
    /// Number of plies to expand from the root position.
    #[clap(long, default_value = "3")]
    depth: u8,
    /// Root position as a FEN string; the standard lineup if omitted.
    #[clap(long, value_name = "FEN")]
    fen: Option<String>,
    /// Expand each root move on its own worker thread.
    #[clap(long)]
    parallel: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let fen = cli.fen.as_deref().unwrap_or(STARTING_POSITION_FEN);
    let position = parse_fen(fen).with_context(|| format!("could not parse FEN `{fen}`"))?;
    info!("deep check from {fen} to depth {}", cli.depth);

    let started = Utc::now();
    let counts = if cli.parallel {
        perft_parallel(
            Arc::new(LegalMoveGenerator),
            &position.board,
            position.side_to_move,
            cli.depth,
        )?
    } else {
        perft_legal(&position.board, position.side_to_move, cli.depth)
    };
    let elapsed_ms = (Utc::now() - started).num_milliseconds().max(1);

    println!(
        "depth={} nodes={} captures={} en_passant={} castles={} promotions={} checks={} checkmates={}",
        cli.depth,
        counts.nodes,
        counts.captures,
        counts.en_passant,
        counts.castles,
        counts.promotions,
        counts.checks,
        counts.checkmates
    );
    println!(
        "elapsed_ms={elapsed_ms} nps={}",
        counts.nodes as i64 * 1000 / elapsed_ms
    );
    Ok(())
}
