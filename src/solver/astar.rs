use crate::{cell::Cell, maze_grid::MazeGrid, search::astar};

use super::{MazeSolver, VisitedSet};

/// A* with the [Manhattan distance](https://en.wikipedia.org/wiki/Taxicab_geometry) to the goal
/// as heuristic. Every move costs one step, so the heuristic is admissible and consistent and
/// the returned path is as short as the one found by breadth-first search.
#[derive(Clone, Copy, Debug, Default)]
pub struct AstarSolver;

impl AstarSolver {
    pub fn heuristic(&self, cell: &Cell, goal: &Cell) -> usize {
        cell.manhattan_distance(goal)
    }
}

impl MazeSolver for AstarSolver {
    fn name(&self) -> &'static str {
        "A*"
    }

    fn search(&self, grid: &MazeGrid, start: Cell, end: Cell) -> (Option<Vec<Cell>>, VisitedSet) {
        let (found, closed) = astar(
            &start,
            |c| grid.open_neighbours(*c).into_iter().map(|n| (n, 1)),
            |c| self.heuristic(c, &end),
            |c| *c == end,
        );
        (found.map(|(path, _cost)| path), closed)
    }
}
