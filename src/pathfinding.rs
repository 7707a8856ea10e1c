//! A* shortest path search with a replayable exploration trace

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet};

use crate::grid::{Coordinate, Grid};

/// Result of one search
#[derive(PartialEq, Eq, Clone, Debug, Default)]
pub struct SearchOutcome {
    /// Shortest path from start to goal, inclusive. Empty if the goal is unreachable.
    pub path: Vec<Coordinate>,
    /// Cells in the order they were settled; every cell appears once
    pub explored: Vec<Coordinate>,
}

impl SearchOutcome {
    pub fn found(&self) -> bool {
        !self.path.is_empty()
    }
}

/// Open-set entry
///
/// Ordered so that [`BinaryHeap`] pops the lowest `f` first; on equal `f`, the
/// entry pushed earlier (lower `seq`) wins.
#[derive(PartialEq, Eq, Debug)]
struct SearchNode {
    pos: Coordinate,
    /// Steps taken from start
    g: usize,
    /// Manhattan distance to goal
    h: usize,
    parent: Option<Coordinate>,
    seq: usize,
}

impl SearchNode {
    fn f(&self) -> usize {
        self.g + self.h
    }
}

impl Ord for SearchNode {
    fn cmp(&self, other: &Self) -> Ordering {
        other.f().cmp(&self.f()).then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for SearchNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Manhattan distance `|d_row| + |d_col|`
///
/// Exact for 4-directional unit steps on an open grid, never an overestimate
/// when walls are present.
pub fn manhattan(a: Coordinate, b: Coordinate) -> usize {
    a.row.abs_diff(b.row) + a.col.abs_diff(b.col)
}

/// Find the shortest path from `start` to `goal` over passage cells
///
/// Neighbors are expanded in [`Grid::DIRECTIONS`] order (down, right, up, left)
/// and equal-`f` ties go to the earlier queued entry, so the outcome is fully
/// determined by the grid.
///
/// The open set uses lazy deletion: a cheaper route to a queued cell pushes a
/// second entry instead of updating the first one. An entry popped for a cell
/// that is already settled is stale and gets discarded. Settled cells are never
/// reopened; with unit step costs and a consistent heuristic the first
/// settlement is final.
///
/// # Panics
/// If `start` or `goal` lies outside the grid.
pub fn search(grid: &Grid, start: Coordinate, goal: Coordinate) -> SearchOutcome {
    assert!(grid.in_bounds(start), "search start {start:?} outside grid");
    assert!(grid.in_bounds(goal), "search goal {goal:?} outside grid");

    let mut open = BinaryHeap::new();
    let mut closed = HashSet::new();
    let mut best_g = HashMap::from([(start, 0)]);
    let mut came_from = HashMap::new();
    let mut explored = Vec::new();
    let mut seq = 0;

    open.push(SearchNode {
        pos: start,
        g: 0,
        h: manhattan(start, goal),
        parent: None,
        seq,
    });

    while let Some(current) = open.pop() {
        // Stale entry of an already settled cell
        if !closed.insert(current.pos) {
            continue;
        }
        explored.push(current.pos);
        if let Some(parent) = current.parent {
            came_from.insert(current.pos, parent);
        }

        if current.pos == goal {
            return SearchOutcome {
                path: reconstruct_path(&came_from, goal),
                explored,
            };
        }

        for neighbor in grid.cell_neighbors(current.pos, 1) {
            if !grid.is_path(neighbor) || closed.contains(&neighbor) {
                continue;
            }
            let g = current.g + 1;
            if best_g.get(&neighbor).is_some_and(|&known| known <= g) {
                continue;
            }
            best_g.insert(neighbor, g);

            seq += 1;
            open.push(SearchNode {
                pos: neighbor,
                g,
                h: manhattan(neighbor, goal),
                parent: Some(current.pos),
                seq,
            });
        }
    }

    SearchOutcome {
        path: Vec::new(),
        explored,
    }
}

/// Follow predecessor links back from `goal`, return the path start first
fn reconstruct_path(came_from: &HashMap<Coordinate, Coordinate>, goal: Coordinate) -> Vec<Coordinate> {
    let mut path = vec![goal];
    let mut current = goal;
    while let Some(&prev) = came_from.get(&current) {
        path.push(prev);
        current = prev;
    }
    path.reverse();
    path
}
