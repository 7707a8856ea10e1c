//! Terminal drawing of mazes and search playback

use std::collections::HashSet;
use std::thread;
use std::time::Duration;

use itertools::Itertools;

use crate::grid::{CellState, Coordinate, Grid};
use crate::pathfinding::SearchOutcome;

const S_WALL: char = '🟫';
const S_PATH: char = '🟩';
const S_ENTRY: char = '🏃';
const S_EXIT: char = '❎';
const S_EXPLORED: char = '🟨';
const S_ROUTE: char = '🟥';

/// Cells highlighted on top of the grid
#[derive(Default, Debug)]
pub struct Overlay {
    pub explored: HashSet<Coordinate>,
    pub route: HashSet<Coordinate>,
}

impl Overlay {
    /// Highlight the whole search outcome
    pub fn from_outcome(outcome: &SearchOutcome) -> Self {
        Self {
            explored: outcome.explored.iter().copied().collect(),
            route: outcome.path.iter().copied().collect(),
        }
    }
}

/// Draw `grid` as one character per cell, rows separated by newlines
///
/// Entry and exit are always drawn with their own symbol; route cells take
/// precedence over explored cells.
pub fn render(grid: &Grid, overlay: &Overlay) -> String {
    grid.rows_iter()
        .enumerate()
        .map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .map(|(col, state)| symbol(grid, overlay, Coordinate::new(row, col), *state))
                .join("")
        })
        .join("\n")
}

fn symbol(grid: &Grid, overlay: &Overlay, cell: Coordinate, state: CellState) -> char {
    if cell == grid.entry() {
        S_ENTRY
    } else if cell == grid.exit() {
        S_EXIT
    } else if overlay.route.contains(&cell) {
        S_ROUTE
    } else if overlay.explored.contains(&cell) {
        S_EXPLORED
    } else {
        match state {
            CellState::Wall => S_WALL,
            CellState::Path => S_PATH,
        }
    }
}

/// Replay the search on the terminal
///
/// Settled cells appear one frame at a time in trace order, then the path is
/// drawn in the same way.
///
/// ## Arguments
/// - `grid`: Solved maze.
/// - `outcome`: Search result on `grid`.
/// - `step_ms`: Time step for each frame, milliseconds.
pub fn playback(grid: &Grid, outcome: &SearchOutcome, step_ms: u64) {
    fn print_frame(grid: &Grid, overlay: &Overlay) {
        print!("\x1B[2J\x1B[1;1H");
        println!("{}", render(grid, overlay));
    }

    let mut overlay = Overlay::default();
    print_frame(grid, &overlay);

    for cell in &outcome.explored {
        thread::sleep(Duration::from_millis(step_ms));
        overlay.explored.insert(*cell);
        print_frame(grid, &overlay);
    }
    for cell in &outcome.path {
        thread::sleep(Duration::from_millis(step_ms));
        overlay.route.insert(*cell);
        print_frame(grid, &overlay);
    }
}

#[cfg(test)]
mod tests {
    use crate::grid::{CellState, Coordinate, Grid};
    use crate::pathfinding::search;
    use crate::render::{render, Overlay};

    #[test]
    fn draws_plain_maze() {
        let mut grid = Grid::new(1).unwrap();
        grid.set(Coordinate::new(0, 1), CellState::Path);
        grid.set(Coordinate::new(1, 1), CellState::Path);
        grid.set(Coordinate::new(2, 1), CellState::Path);

        assert_eq!(
            render(&grid, &Overlay::default()),
            "🟫🏃🟫\n🟫🟩🟫\n🟫❎🟫"
        );
    }

    #[test]
    fn draws_route_over_explored_cells() {
        let mut grid = Grid::new(2).unwrap();
        for cell in [(0, 1), (1, 1), (1, 2), (1, 3), (2, 3), (3, 3), (4, 3)] {
            grid.set(Coordinate::new(cell.0, cell.1), CellState::Path);
        }
        let outcome = search(&grid, grid.entry(), grid.exit());
        let mut overlay = Overlay::from_outcome(&outcome);
        overlay.explored.insert(Coordinate::new(3, 1));

        assert_eq!(
            render(&grid, &overlay),
            "🟫🏃🟫🟫🟫\n🟫🟥🟥🟥🟫\n🟫🟫🟫🟥🟫\n🟫🟨🟫🟥🟫\n🟫🟫🟫❎🟫"
        );
    }
}
