//! Output document handed to the front end

use serde::{Deserialize, Serialize};

use crate::grid::{Coordinate, Grid};
use crate::pathfinding::SearchOutcome;

/// Generated maze together with its solution
///
/// Serializes to
/// `{"rows":..,"cols":..,"grid":[[..]],"explored":[{"x":..,"y":..}],"path":[..]}`
/// with grid cells `0` for passage and `1` for wall, `x` the row and `y` the
/// column of a cell.
#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Debug)]
pub struct MazeReport {
    pub rows: usize,
    pub cols: usize,
    pub grid: Vec<Vec<u8>>,
    /// Settled cells in search order; drives the animation
    pub explored: Vec<Coordinate>,
    /// Shortest path from entry to exit, empty if there is none
    pub path: Vec<Coordinate>,
}

impl MazeReport {
    pub fn new(grid: &Grid, outcome: SearchOutcome) -> Self {
        Self {
            rows: grid.rows(),
            cols: grid.cols(),
            grid: grid.to_codes(),
            explored: outcome.explored,
            path: outcome.path,
        }
    }

    /// Compact JSON, one line
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Number of cells on the solution path
    pub fn path_len(&self) -> usize {
        self.path.len()
    }

    /// Number of cells the search settled
    pub fn explored_len(&self) -> usize {
        self.explored.len()
    }
}
