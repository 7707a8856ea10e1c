//! Map generation

use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};

use crate::error::Result;
use crate::grid::{CellState, Coordinate, Grid};

/// Maze generator driven by an explicit random source
///
/// The same seed always yields the same grid.
pub struct MazeGenerator<R = StdRng> {
    random: R,
}

impl MazeGenerator<StdRng> {
    /// Generator over a [`StdRng`], seeded from `seed` or from OS entropy
    pub fn new(seed: Option<u64>) -> Self {
        Self::from_rng(if let Some(state) = seed {
            StdRng::seed_from_u64(state)
        } else {
            StdRng::from_entropy()
        })
    }
}

impl<R: Rng> MazeGenerator<R> {
    /// Generator over a caller-owned random source (`&mut R` works too)
    pub fn from_rng(random: R) -> Self {
        Self { random }
    }

    /// Generate imperfect maze (maze with loops) of `size` x `size` cells
    ///
    /// The grid is `2 * size + 1` cells wide. Carving starts at (1, 1); entry
    /// (0, 1) and exit (last row, second to last column) are always open and
    /// connected.
    ///
    /// Fails only if `size` is rejected by [`Grid::new`].
    pub fn generate(&mut self, size: usize) -> Result<Grid> {
        let mut grid = Grid::new(size)?;
        self.carve_passages(&mut grid);
        Self::open_entry_and_exit(&mut grid);
        self.insert_loops(&mut grid);
        Ok(grid)
    }

    /// Carve a spanning tree over the odd cells (recursive backtracker)
    ///
    /// Uses an explicit stack, so large mazes do not exhaust the call stack.
    fn carve_passages(&mut self, grid: &mut Grid) {
        let start = Coordinate::new(1, 1);
        grid.set(start, CellState::Path);
        let mut stack = vec![start];

        while let Some(&current) = stack.last() {
            let candidates: Vec<Coordinate> = grid
                .cell_neighbors(current, 2)
                .filter(|n| grid.is_interior(*n) && grid.get(*n) == Some(CellState::Wall))
                .collect();

            if let Some(&next) = candidates.choose(&mut self.random) {
                // Remove wall between current cell and neighbor
                let between = Coordinate::new(
                    (current.row + next.row) / 2,
                    (current.col + next.col) / 2,
                );
                grid.set(between, CellState::Path);
                grid.set(next, CellState::Path);
                stack.push(next);
            } else {
                stack.pop();
            }
        }
    }

    fn open_entry_and_exit(grid: &mut Grid) {
        let (entry, exit) = (grid.entry(), grid.exit());
        grid.set(entry, CellState::Path);
        grid.set(exit, CellState::Path);
    }

    /// Knock out random walls between two passages to create loops
    ///
    /// Makes `rows * cols / 20` attempts. An attempt on a cell that is already
    /// a passage, or lacks passages on two opposite sides, is simply skipped,
    /// so the attempt count is an upper bound on the walls removed.
    ///
    /// Returns the number of walls removed.
    fn insert_loops(&mut self, grid: &mut Grid) -> usize {
        let attempts = grid.rows() * grid.cols() / 20;
        let mut opened = 0;

        for _ in 0..attempts {
            let cell = Coordinate::new(
                self.random.gen_range(1..grid.rows() - 1),
                self.random.gen_range(1..grid.cols() - 1),
            );
            if grid.get(cell) == Some(CellState::Wall) && Self::joins_passages(grid, cell) {
                grid.set(cell, CellState::Path);
                opened += 1;
            }
        }
        opened
    }

    /// True if `cell` has passages both above and below, or both left and right
    fn joins_passages(grid: &Grid, cell: Coordinate) -> bool {
        let vertical = grid.is_path(Coordinate::new(cell.row - 1, cell.col))
            && grid.is_path(Coordinate::new(cell.row + 1, cell.col));
        let horizontal = grid.is_path(Coordinate::new(cell.row, cell.col - 1))
            && grid.is_path(Coordinate::new(cell.row, cell.col + 1));
        vertical || horizontal
    }
}
