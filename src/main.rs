use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use maze_pathfinding::{
    render_solution, AstarSolver, BreadthFirstSolver, Comparison, DepthFirstSolver,
    GeneratorConfig, MazeSolver, DEFAULT_EXTRA_PATHS_RATIO, DEFAULT_HEIGHT, DEFAULT_WIDTH,
};

#[derive(Parser, Debug)]
#[command(
    name = "maze-compare",
    version,
    about = "Generate a maze and compare DFS, BFS and A* on it"
)]
struct Cli {
    /// Maze width in cells (at least 2)
    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    width: usize,

    /// Maze height in cells (at least 2)
    #[arg(long, default_value_t = DEFAULT_HEIGHT)]
    height: usize,

    /// Seed for reproducible mazes. Without one every run differs.
    #[arg(short, long)]
    seed: Option<u64>,

    /// Keep the carved maze as is, without opening extra walls
    #[arg(long)]
    single_solution: bool,

    /// Fraction of removable walls to open for alternate routes, in [0, 1)
    #[arg(long, default_value_t = DEFAULT_EXTRA_PATHS_RATIO)]
    extra_paths_ratio: f64,

    /// Carve a corridor to the end if it would otherwise be unreachable
    #[arg(long)]
    ensure_connected: bool,

    /// Also mark the cells each solver explored
    #[arg(long)]
    show_explored: bool,

    /// Which solver(s) to run
    #[arg(long, value_enum, default_value_t = Algorithm::All)]
    solver: Algorithm,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum Algorithm {
    All,
    Dfs,
    Bfs,
    Astar,
}

impl Algorithm {
    fn solvers(self) -> Vec<&'static dyn MazeSolver> {
        let all: [&'static dyn MazeSolver; 3] =
            [&DepthFirstSolver, &BreadthFirstSolver, &AstarSolver];
        match self {
            Algorithm::All => all.to_vec(),
            Algorithm::Dfs => vec![all[0]],
            Algorithm::Bfs => vec![all[1]],
            Algorithm::Astar => vec![all[2]],
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let config = GeneratorConfig::new(cli.width, cli.height)
        .with_seed(cli.seed)
        .with_multiple_solutions(!cli.single_solution)
        .with_extra_paths_ratio(cli.extra_paths_ratio)
        .with_ensure_connected(cli.ensure_connected);
    let maze = config.generate().context("generating maze")?;
    let comparison =
        Comparison::run_with(&maze, &cli.solver.solvers()).context("solving maze")?;

    println!("Start: {}, End: {}", maze.start, maze.end);
    for run in &comparison.runs {
        println!("\n{}", run.name);
        print!(
            "{}",
            render_solution(
                &maze.grid,
                maze.start,
                maze.end,
                Some(&run.result),
                cli.show_explored
            )
        );
    }
    println!();
    if !comparison.any_found() {
        println!("No solution found! The maze might be unsolvable.");
    }
    print!("{}", comparison);
    Ok(())
}
