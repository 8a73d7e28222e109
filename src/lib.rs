//! # maze_pathfinding
//!
//! Generates grid mazes by
//! [randomized backtracking](https://en.wikipedia.org/wiki/Maze_generation_algorithm#Randomized_depth-first_search)
//! and compares three ways of solving them on the resulting 4-connected grid:
//! [depth-first search](https://en.wikipedia.org/wiki/Depth-first_search),
//! [breadth-first search](https://en.wikipedia.org/wiki/Breadth-first_search) and
//! [A*](https://en.wikipedia.org/wiki/A*_search_algorithm) with the Manhattan distance as heuristic.
//! Every solver reports its path (if any), the cells it explored and the time it took.
//! Pre-computes [connected components](https://en.wikipedia.org/wiki/Component_(graph_theory))
//! of the open cells so reachability can be checked without searching.
//!
//! ```
//! use maze_pathfinding::{generate, solve_astar, solve_bfs};
//!
//! let maze = generate(21, 21, Some(7), true, 0.15).unwrap();
//! let bfs = solve_bfs(&maze.grid, maze.start, maze.end).unwrap();
//! let astar = solve_astar(&maze.grid, maze.start, maze.end).unwrap();
//! assert_eq!(bfs.path_len(), astar.path_len());
//! ```
pub mod cell;
pub mod comparison;
pub mod error;
pub mod generator;
pub mod maze_grid;
pub mod render;
pub mod search;
pub mod solver;

pub use cell::{Cell, Direction};
pub use comparison::{Comparison, SolverRun};
pub use error::MazeError;
pub use generator::{generate_with_rng, GeneratorConfig, Maze};
pub use maze_grid::{MazeGrid, Tile};
pub use render::render_solution;
pub use solver::{
    astar::AstarSolver, bfs::BreadthFirstSolver, dfs::DepthFirstSolver, MazeSolver,
    SearchResult, VisitedSet,
};

pub const DEFAULT_WIDTH: usize = 20;
pub const DEFAULT_HEIGHT: usize = 20;
pub const DEFAULT_EXTRA_PATHS_RATIO: f64 = 0.15;

/// Inline capacity of neighbour lists; a cell has at most four on a 4-grid.
pub const N_SMALLVEC_SIZE: usize = 4;

/// Generates a `width` by `height` maze with start `(0, 0)` and end `(height - 1, width - 1)`.
/// See [GeneratorConfig] for the meaning of the remaining parameters.
pub fn generate(
    width: usize,
    height: usize,
    seed: Option<u64>,
    multiple_solutions: bool,
    extra_paths_ratio: f64,
) -> Result<Maze, MazeError> {
    GeneratorConfig::new(width, height)
        .with_seed(seed)
        .with_multiple_solutions(multiple_solutions)
        .with_extra_paths_ratio(extra_paths_ratio)
        .generate()
}

pub fn solve_dfs(grid: &MazeGrid, start: Cell, end: Cell) -> Result<SearchResult, MazeError> {
    DepthFirstSolver.solve(grid, start, end)
}

pub fn solve_bfs(grid: &MazeGrid, start: Cell, end: Cell) -> Result<SearchResult, MazeError> {
    BreadthFirstSolver.solve(grid, start, end)
}

pub fn solve_astar(grid: &MazeGrid, start: Cell, end: Cell) -> Result<SearchResult, MazeError> {
    AstarSolver.solve(grid, start, end)
}
