use crate::{
    error::MazeError,
    generator::Maze,
    solver::{
        astar::AstarSolver, bfs::BreadthFirstSolver, dfs::DepthFirstSolver, MazeSolver,
        SearchResult,
    },
};
use core::fmt;
use itertools::Itertools;
use log::warn;

/// The result of one solver on the compared maze.
#[derive(Clone, Debug)]
pub struct SolverRun {
    pub name: &'static str,
    pub result: SearchResult,
}

impl fmt::Display for SolverRun {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.result.path_len() {
            Some(len) => write!(f, "{}: {} steps", self.name, len)?,
            None => write!(f, "{}: no path found", self.name)?,
        }
        write!(
            f,
            " | explored {} cells | {:.6}s",
            self.result.explored(),
            self.result.elapsed.as_secs_f64()
        )
    }
}

/// Side by side results of several solvers on the same maze.
#[derive(Clone, Debug)]
pub struct Comparison {
    pub runs: Vec<SolverRun>,
}

impl Comparison {
    /// Runs DFS, BFS and A*, in that order.
    pub fn run(maze: &Maze) -> Result<Comparison, MazeError> {
        Self::run_with(maze, &[&DepthFirstSolver, &BreadthFirstSolver, &AstarSolver])
    }

    pub fn run_with(maze: &Maze, solvers: &[&dyn MazeSolver]) -> Result<Comparison, MazeError> {
        let runs = solvers
            .iter()
            .map(|solver| {
                maze.solve(*solver).map(|result| SolverRun {
                    name: solver.name(),
                    result,
                })
            })
            .collect::<Result<Vec<_>, MazeError>>()?;
        let comparison = Comparison { runs };
        if !comparison.optimal_lengths_agree() {
            warn!("Optimal solvers disagree on the path length");
        }
        Ok(comparison)
    }

    pub fn get(&self, name: &str) -> Option<&SolverRun> {
        self.runs.iter().find(|r| r.name == name)
    }

    pub fn any_found(&self) -> bool {
        self.runs.iter().any(|r| r.result.found())
    }

    /// BFS and A* are both optimal, so when both ran their path lengths must match.
    pub fn optimal_lengths_agree(&self) -> bool {
        match (self.get(BreadthFirstSolver.name()), self.get(AstarSolver.name())) {
            (Some(bfs), Some(astar)) => bfs.result.path_len() == astar.result.path_len(),
            _ => true,
        }
    }
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{}", self.runs.iter().join("\n"))
    }
}
