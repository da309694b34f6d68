use anyhow::{Context, Result};
use clap::Parser;
use ghost_distance::{ghost_distances, load_board};
use log::{debug, info};
use std::path::PathBuf;

/// Calculate distances from Pacman to ghosts.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the board file (.npy, or comma-separated text)
    #[arg(long)]
    board: PathBuf,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    let board = load_board(&args.board)
        .with_context(|| format!("Failed to load board from {}", args.board.display()))?;
    debug!("Board:\n{}", board);

    let report = ghost_distances(&board)
        .with_context(|| format!("Invalid board {}", args.board.display()))?;
    info!("{} reachable ghost(s)", report.entries.len());

    println!("{}", report);
    Ok(())
}
