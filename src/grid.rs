//! Wall/passage matrix of a maze

use serde::{Deserialize, Serialize};

use crate::error::{MazeError, Result};

/// Location in the grid
///
/// Ordering compares `row` first, then `col`. Serialized as `{"x": row, "y": col}`,
/// which is the axis naming the front end expects.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Coordinate {
    #[serde(rename = "x")]
    pub row: usize,
    #[serde(rename = "y")]
    pub col: usize,
}

impl Coordinate {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Step `stride` cells into direction `(d_row, d_col)`
    ///
    /// Returns `None` if the step would go below zero.
    fn offset(self, (d_row, d_col): (isize, isize), stride: usize) -> Option<Self> {
        let stride = isize::try_from(stride).ok()?;
        Some(Self {
            row: self.row.checked_add_signed(d_row * stride)?,
            col: self.col.checked_add_signed(d_col * stride)?,
        })
    }
}

/// State of a single grid cell
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum CellState {
    Wall,
    Path,
}

impl CellState {
    /// Numeric code used in the serialized grid: 0 = path, 1 = wall
    pub const fn code(self) -> u8 {
        match self {
            CellState::Path => 0,
            CellState::Wall => 1,
        }
    }
}

/// Square maze grid of `(2n + 1) x (2n + 1)` cells
///
/// Maze cells sit on odd coordinates, the cells between them are walls or
/// carved passages. Row and column 0 and `dimension - 1` form the border.
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct Grid {
    dimension: usize,
    cells: Vec<Vec<CellState>>,
}

impl Grid {
    /// Neighbor directions as (d_row, d_col): down, right, up, left
    ///
    /// Both carving and search walk neighbors in this order, so it fixes the
    /// exploration trace for a given grid.
    pub const DIRECTIONS: [(isize, isize); 4] = [(1, 0), (0, 1), (-1, 0), (0, -1)];

    /// Allocate a grid for maze size `size`, every cell a wall
    ///
    /// Fails with [`MazeError::InvalidArgument`] if `size < 1` or the grid
    /// would not be addressable.
    pub fn new(size: usize) -> Result<Self> {
        if size < 1 {
            return Err(MazeError::InvalidArgument {
                size,
                reason: "must be at least 1",
            });
        }
        let dimension = size
            .checked_mul(2)
            .and_then(|d| d.checked_add(1))
            .filter(|d| d.checked_mul(*d).is_some())
            .ok_or(MazeError::InvalidArgument {
                size,
                reason: "is too large",
            })?;

        Ok(Self {
            dimension,
            cells: (0..dimension)
                .map(|_| (0..dimension).map(|_| CellState::Wall).collect())
                .collect(),
        })
    }

    pub fn rows(&self) -> usize {
        self.dimension
    }

    pub fn cols(&self) -> usize {
        self.dimension
    }

    /// Fixed entry opening on the top border
    pub fn entry(&self) -> Coordinate {
        Coordinate::new(0, 1)
    }

    /// Fixed exit opening on the bottom border
    pub fn exit(&self) -> Coordinate {
        Coordinate::new(self.dimension - 1, self.dimension - 2)
    }

    pub fn in_bounds(&self, coord: Coordinate) -> bool {
        coord.row < self.dimension && coord.col < self.dimension
    }

    /// True if `coord` lies inside the outer border
    pub fn is_interior(&self, coord: Coordinate) -> bool {
        (1..self.dimension - 1).contains(&coord.row) && (1..self.dimension - 1).contains(&coord.col)
    }

    /// Cell state at `coord`, `None` outside the grid
    pub fn get(&self, coord: Coordinate) -> Option<CellState> {
        self.cells.get(coord.row)?.get(coord.col).copied()
    }

    pub fn is_path(&self, coord: Coordinate) -> bool {
        self.get(coord) == Some(CellState::Path)
    }

    /// Overwrite the cell at `coord`
    ///
    /// # Panics
    /// If `coord` is outside the grid.
    pub fn set(&mut self, coord: Coordinate, state: CellState) {
        assert!(
            self.in_bounds(coord),
            "cell {coord:?} outside {0}x{0} grid",
            self.dimension
        );
        self.cells[coord.row][coord.col] = state;
    }

    /// In-bounds neighbors `stride` cells away, in [`Self::DIRECTIONS`] order
    pub fn cell_neighbors(
        &self,
        coord: Coordinate,
        stride: usize,
    ) -> impl Iterator<Item = Coordinate> + '_ {
        Self::DIRECTIONS
            .into_iter()
            .filter_map(move |dir| coord.offset(dir, stride))
            .filter(move |n| self.in_bounds(*n))
    }

    /// Grid as rows of cell codes, see [`CellState::code`]
    pub fn to_codes(&self) -> Vec<Vec<u8>> {
        self.cells
            .iter()
            .map(|row| row.iter().map(|c| c.code()).collect())
            .collect()
    }

    /// Iterate over rows of cells
    pub fn rows_iter(&self) -> impl Iterator<Item = &[CellState]> {
        self.cells.iter().map(Vec::as_slice)
    }

    /// Number of passage cells
    pub fn count_paths(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|c| **c == CellState::Path)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use crate::error::MazeError;
    use crate::grid::{CellState, Coordinate, Grid};

    #[test]
    fn new_grid_is_all_walls() {
        let grid = Grid::new(3).unwrap();
        assert_eq!(grid.rows(), 7);
        assert_eq!(grid.cols(), 7);
        assert_eq!(grid.count_paths(), 0);
        assert_eq!(grid.exit(), Coordinate::new(6, 5));
    }

    #[test]
    fn zero_size_is_rejected() {
        assert!(matches!(
            Grid::new(0),
            Err(MazeError::InvalidArgument { size: 0, .. })
        ));
    }

    #[test]
    fn overflowing_size_is_rejected() {
        assert!(Grid::new(usize::MAX / 2).is_err());
    }

    #[test]
    fn get_outside_returns_none() {
        let grid = Grid::new(1).unwrap();
        assert_eq!(grid.get(Coordinate::new(1, 1)), Some(CellState::Wall));
        assert_eq!(grid.get(Coordinate::new(3, 0)), None);
        assert!(!grid.in_bounds(Coordinate::new(0, 3)));
    }

    #[test]
    #[should_panic(expected = "outside 3x3 grid")]
    fn set_outside_panics() {
        let mut grid = Grid::new(1).unwrap();
        grid.set(Coordinate::new(3, 1), CellState::Path);
    }

    #[test]
    fn neighbors_follow_direction_order() {
        let grid = Grid::new(2).unwrap();
        let neighbors: Vec<_> = grid.cell_neighbors(Coordinate::new(2, 2), 1).collect();
        assert_eq!(
            neighbors,
            vec![
                Coordinate::new(3, 2),
                Coordinate::new(2, 3),
                Coordinate::new(1, 2),
                Coordinate::new(2, 1),
            ]
        );
    }

    #[test]
    fn neighbors_skip_out_of_bounds() {
        let grid = Grid::new(2).unwrap();
        let neighbors: Vec<_> = grid.cell_neighbors(Coordinate::new(1, 1), 2).collect();
        assert_eq!(
            neighbors,
            vec![Coordinate::new(3, 1), Coordinate::new(1, 3)]
        );
    }

    #[test]
    fn coordinates_order_by_row_then_column() {
        assert!(Coordinate::new(0, 5) < Coordinate::new(1, 0));
        assert!(Coordinate::new(2, 1) < Coordinate::new(2, 3));
    }

    #[test]
    fn coordinate_serializes_with_front_end_axes() {
        let json = serde_json::to_string(&Coordinate::new(4, 7)).unwrap();
        assert_eq!(json, r#"{"x":4,"y":7}"#);
    }
}
