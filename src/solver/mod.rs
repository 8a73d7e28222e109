use crate::{cell::Cell, error::MazeError, maze_grid::MazeGrid, search::FxIndexSet};
use itertools::Itertools;
use log::{debug, info};
use std::time::{Duration, Instant};

pub mod astar;
pub mod bfs;
pub mod dfs;

/// Cells examined during one solver run, in the order the solver marked them.
pub type VisitedSet = FxIndexSet<Cell>;

/// Outcome of a single solver invocation. A missing path is a normal outcome, not an error.
#[derive(Clone, Debug)]
pub struct SearchResult {
    pub path: Option<Vec<Cell>>,
    pub visited: VisitedSet,
    pub elapsed: Duration,
}

impl SearchResult {
    pub fn found(&self) -> bool {
        self.path.is_some()
    }

    /// Number of cells on the path, start and end included.
    pub fn path_len(&self) -> Option<usize> {
        self.path.as_ref().map(Vec::len)
    }

    pub fn explored(&self) -> usize {
        self.visited.len()
    }
}

pub trait MazeSolver {
    /// Short display name, e.g. `BFS`.
    fn name(&self) -> &'static str;

    /// The raw traversal. Both endpoints are known to be open cells of `grid`.
    fn search(&self, grid: &MazeGrid, start: Cell, end: Cell) -> (Option<Vec<Cell>>, VisitedSet);

    /// Validates the endpoints, then times a single [search](Self::search).
    fn solve(&self, grid: &MazeGrid, start: Cell, end: Cell) -> Result<SearchResult, MazeError> {
        grid.check_endpoint(start)?;
        grid.check_endpoint(end)?;
        let before = Instant::now();
        let (path, visited) = self.search(grid, start, end);
        let elapsed = before.elapsed();
        match &path {
            Some(path) => {
                debug_assert!(is_valid_path(grid, start, end, path));
                debug!(
                    "{}: {} steps from {} to {}, explored {} cells in {:.2?}",
                    self.name(),
                    path.len(),
                    start,
                    end,
                    visited.len(),
                    elapsed
                );
            }
            None => info!(
                "{}: {} is not reachable from {}, explored {} cells in {:.2?}",
                self.name(),
                end,
                start,
                visited.len(),
                elapsed
            ),
        }
        Ok(SearchResult {
            path,
            visited,
            elapsed,
        })
    }
}

/// Checks that `path` runs from `start` to `end` over open, 4-adjacent cells without repeating one.
pub fn is_valid_path(grid: &MazeGrid, start: Cell, end: Cell, path: &[Cell]) -> bool {
    path.first() == Some(&start)
        && path.last() == Some(&end)
        && path.iter().all(|c| grid.is_open(*c))
        && path.iter().tuple_windows().all(|(a, b)| a.is_adjacent(b))
        && path.iter().all_unique()
}
