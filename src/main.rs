//! CLI for maze generation requests
//!
//! Prints the maze and its A* solution as JSON on stdout. Progress goes to
//! stderr through `log`; set `RUST_LOG` to change verbosity.

use std::time::Instant;

use anyhow::Context;
use astar_maze::generate_and_solve;
use clap::Parser;
use log::{error, info};
use rand::{rngs::StdRng, SeedableRng};

/// Random maze with its shortest path and search trace, as JSON
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Maze size in cells; the grid is 2 * SIZE + 1 wide
    #[arg(default_value_t = 15)]
    size: usize,

    /// Random seed, for reproducible mazes
    #[arg(long, env = "MAZE_SEED")]
    seed: Option<u64>,

    /// Indent JSON output
    #[arg(long)]
    pretty: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    info!("maze generation requested - Size: {0}x{0}", args.size);
    let started = Instant::now();

    let random = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let report = generate_and_solve(args.size, random)
        .inspect_err(|e| error!("maze generation failed - Size: {}, Error: {e}", args.size))?;

    let json = if args.pretty {
        report.to_json_pretty()
    } else {
        report.to_json()
    }
    .context("Could not serialize maze")?;
    println!("{json}");

    info!(
        "maze generated successfully - Size: {0}x{0}, Execution Time: {1}ms, Path Length: {2} cells, Explored Nodes: {3}",
        args.size,
        started.elapsed().as_millis(),
        report.path_len(),
        report.explored_len(),
    );
    Ok(())
}
