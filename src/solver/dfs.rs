use crate::{cell::Cell, maze_grid::MazeGrid, search::traverse};

use super::{MazeSolver, VisitedSet};

/// Depth-first search with a stack frontier. Terminates on every grid but gives no guarantee
/// about the length of the path it finds.
#[derive(Clone, Copy, Debug, Default)]
pub struct DepthFirstSolver;

impl MazeSolver for DepthFirstSolver {
    fn name(&self) -> &'static str {
        "DFS"
    }

    fn search(&self, grid: &MazeGrid, start: Cell, end: Cell) -> (Option<Vec<Cell>>, VisitedSet) {
        traverse::<_, Vec<usize>, _, _, _>(&start, |c| grid.open_neighbours(*c), |c| *c == end)
    }
}
