//! CLI for drawing mazes on the terminal

use astar_maze::maze_generator::MazeGenerator;
use astar_maze::pathfinding::search;
use astar_maze::render::{playback, render, Overlay};
use clap::Parser;
use log::{debug, info};

/// Draw a random maze, optionally with its A* solution
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Maze size in cells
    #[arg(long, default_value_t = 15)]
    size: usize,

    /// Random seed
    #[arg(long, env = "MAZE_SEED")]
    seed: Option<u64>,

    /// Show explored cells and the shortest path
    #[arg(short, long)]
    solve: bool,

    /// Animate the search on the terminal
    #[arg(short, long)]
    playback: bool,

    /// Playback frame length in milliseconds
    #[arg(short, long, default_value_t = 50)]
    frame_length: u64,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let grid = MazeGenerator::new(args.seed).generate(args.size)?;
    debug!("generated {}x{} grid", grid.rows(), grid.cols());

    if !(args.solve || args.playback) {
        println!("{}", render(&grid, &Overlay::default()));
        return Ok(());
    }

    let outcome = search(&grid, grid.entry(), grid.exit());
    if args.playback {
        playback(&grid, &outcome, args.frame_length);
    } else {
        println!("{}", render(&grid, &Overlay::from_outcome(&outcome)));
    }
    info!(
        "The shortest path is {} steps, {} cells explored.",
        outcome.path.len().saturating_sub(1),
        outcome.explored.len()
    );
    Ok(())
}
