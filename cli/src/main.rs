use std::io;

use anyhow::Context;
use clap::Parser;
use clap_verbosity_flag::{Verbosity, WarnLevel};
use minesweep_core::{new_game, CellCount, GameConfig, MAX_SIZE};

use session::{Session, SessionEnd};

mod command;
mod render;
mod session;

/// Clear the board containing hidden mines, without detonating any of them.
///
/// Reveal a cell by typing its column letter and row number (`b3`), toggle a mark with a
/// leading `!` (`!b3`), leave with `q`.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Board size (width and height)
    #[arg(
        short,
        long,
        default_value_t = 6,
        value_parser = clap::value_parser!(u8).range(1..=i64::from(MAX_SIZE))
    )]
    size: u8,

    /// Number of mines, more than fit fills the whole board
    #[arg(short, long, default_value_t = 6)]
    mines: CellCount,

    /// Seed for the mine layout, random when omitted
    #[arg(long)]
    seed: Option<u64>,

    #[command(flatten)]
    verbosity: Verbosity<WarnLevel>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(args.verbosity.tracing_level_filter())
        .with_writer(io::stderr)
        .init();

    let config = GameConfig::new(args.size, args.mines).context("Invalid board configuration")?;
    let seed = args.seed.unwrap_or_else(rand::random);
    let board = new_game(config, seed);

    let placed = board.minefield().game_config();
    log::info!(
        "Starting {}x{} game with {} mines, seed {}",
        placed.size(),
        placed.size(),
        placed.mines(),
        seed
    );

    let mut session = Session::new(board, io::stdin().lock(), io::stdout().lock());
    let end = session.run().context("Terminal I/O failed")?;

    match end {
        SessionEnd::Won | SessionEnd::Lost => log::info!("Game over: {:?}", end),
        SessionEnd::Quit => log::info!(
            "Quit with {} of {} mines marked",
            session.board().marked_count(),
            session.board().total_mines()
        ),
    }
    Ok(())
}
