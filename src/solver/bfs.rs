use std::collections::VecDeque;

use crate::{cell::Cell, maze_grid::MazeGrid, search::traverse};

use super::{MazeSolver, VisitedSet};

/// Breadth-first search with a queue frontier. Returns a path with the fewest possible steps.
#[derive(Clone, Copy, Debug, Default)]
pub struct BreadthFirstSolver;

impl MazeSolver for BreadthFirstSolver {
    fn name(&self) -> &'static str {
        "BFS"
    }

    fn search(&self, grid: &MazeGrid, start: Cell, end: Cell) -> (Option<Vec<Cell>>, VisitedSet) {
        traverse::<_, VecDeque<usize>, _, _, _>(&start, |c| grid.open_neighbours(*c), |c| *c == end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Asserts that the optimal 5 cell solution is found around a central wall.
    #[test]
    fn solve_simple_problem() {
        let grid = MazeGrid::from_rows(&["...", ".#.", "..."]).unwrap();
        let start = Cell::new(0, 0);
        let end = Cell::new(2, 2);
        let result = BreadthFirstSolver.solve(&grid, start, end).unwrap();
        assert_eq!(result.path_len(), Some(5));
    }

    #[test]
    fn takes_the_short_way_round() {
        let grid = MazeGrid::from_rows(&["...", ".#.", ".#.", "..."]).unwrap();
        let start = Cell::new(0, 1);
        let end = Cell::new(1, 2);
        let path = BreadthFirstSolver.solve(&grid, start, end).unwrap().path.unwrap();
        assert_eq!(path, vec![Cell::new(0, 1), Cell::new(0, 2), Cell::new(1, 2)]);
    }

    #[test]
    fn test_complex() {
        // |S.#.......|
        // |..#.####..|
        // |..#....#..|
        // |.####..#..|
        // |......#..G|
        let grid = MazeGrid::from_rows(&[
            "..#.......",
            "..#.####..",
            "..#....#..",
            ".####..#..",
            "......#...",
        ])
        .unwrap();
        let start = Cell::new(0, 0);
        let end = Cell::new(4, 9);
        let result = BreadthFirstSolver.solve(&grid, start, end).unwrap();
        assert_eq!(result.path_len(), Some(26));
    }
}
