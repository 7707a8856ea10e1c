//! Generate a random maze and find the shortest way through it
//!
//! A maze of size `n` is a `(2n + 1) x (2n + 1)` grid of walls and passages,
//! entered at the top (row 0, column 1) and left at the bottom (last row,
//! second to last column). It is carved with a randomized depth-first search,
//! then a few extra walls are knocked out to create loops. A* search with the
//! Manhattan heuristic finds the shortest path and records the order in which
//! it settled cells, so the search can be replayed step by step.
//!
//! # Examples
//! ```
//! use astar_maze::generate_and_solve;
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let report = generate_and_solve(1, StdRng::seed_from_u64(0)).unwrap();
//! assert_eq!((report.rows, report.cols), (3, 3));
//! assert_eq!(report.grid, vec![vec![1, 0, 1], vec![1, 0, 1], vec![1, 0, 1]]);
//! assert_eq!(report.path_len(), 3);
//! println!("{}", report.to_json().unwrap());
//! ```
//!
//! The pieces can also be used separately:
//! ```
//! use astar_maze::maze_generator::MazeGenerator;
//! use astar_maze::pathfinding::search;
//!
//! let grid = MazeGenerator::new(Some(42)).generate(15).unwrap();
//! let outcome = search(&grid, grid.entry(), grid.exit());
//! assert_eq!(outcome.path.first(), Some(&grid.entry()));
//! assert_eq!(outcome.path.last(), Some(&grid.exit()));
//! ```

use rand::Rng;

pub mod error;
pub mod grid;
pub mod maze_generator;
pub mod pathfinding;
pub mod render;
pub mod report;

pub use error::MazeError;
pub use grid::{CellState, Coordinate, Grid};
pub use maze_generator::MazeGenerator;
pub use pathfinding::{search, SearchOutcome};
pub use report::MazeReport;

/// Handle one maze request: generate a maze of `size` and solve it
///
/// The random source is owned by this call; pass `&mut rng` to keep using it
/// afterwards. Fails only for an invalid `size`.
pub fn generate_and_solve<R: Rng>(size: usize, random: R) -> error::Result<MazeReport> {
    let grid = MazeGenerator::from_rng(random).generate(size)?;
    let outcome = search(&grid, grid.entry(), grid.exit());
    Ok(MazeReport::new(&grid, outcome))
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use rand::{rngs::StdRng, SeedableRng};

    use crate::{generate_and_solve, Coordinate, MazeError};

    #[test]
    fn zero_size_request_fails() {
        let result = generate_and_solve(0, StdRng::seed_from_u64(0));
        assert!(matches!(
            result,
            Err(MazeError::InvalidArgument { size: 0, .. })
        ));
    }

    #[test]
    fn smallest_maze_goes_straight_down() {
        let report = generate_and_solve(1, StdRng::seed_from_u64(3)).unwrap();
        assert_eq!(
            report.path,
            vec![
                Coordinate::new(0, 1),
                Coordinate::new(1, 1),
                Coordinate::new(2, 1)
            ]
        );
        assert_eq!(report.explored, report.path);
    }

    #[test]
    fn same_seed_same_report() {
        let a = generate_and_solve(30, StdRng::seed_from_u64(2024)).unwrap();
        let b = generate_and_solve(30, StdRng::seed_from_u64(2024)).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.to_json().unwrap(), b.to_json().unwrap());
    }

    #[test]
    fn default_size_request() {
        let report = generate_and_solve(15, StdRng::seed_from_u64(1)).unwrap();
        assert_eq!(report.grid.len(), 31);
        assert!(report.grid.iter().all(|row| row.len() == 31));
        assert_eq!(report.path.first(), Some(&Coordinate::new(0, 1)));
        assert_eq!(report.path.last(), Some(&Coordinate::new(30, 29)));
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn every_maze_is_solvable(size in 1usize..25, seed in any::<u64>()) {
            let report = generate_and_solve(size, StdRng::seed_from_u64(seed)).unwrap();
            prop_assert_eq!(report.rows, 2 * size + 1);
            prop_assert_eq!(report.cols, 2 * size + 1);
            prop_assert!(report.path_len() >= 3);
            for cell in &report.path {
                prop_assert_eq!(report.grid[cell.row][cell.col], 0);
                prop_assert!(report.explored.contains(cell));
            }
        }
    }
}
