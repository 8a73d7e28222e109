use criterion::{criterion_group, criterion_main, Criterion};
use maze_pathfinding::{
    AstarSolver, BreadthFirstSolver, DepthFirstSolver, GeneratorConfig, Maze, MazeSolver,
};
use std::hint::black_box;

const SIZES: [usize; 2] = [50, 200];

fn bench_mazes() -> Vec<(usize, Maze)> {
    SIZES
        .iter()
        .map(|&n| {
            let maze = GeneratorConfig::new(n, n)
                .with_seed(Some(0))
                .with_ensure_connected(true)
                .generate()
                .expect("benchmark maze parameters are valid");
            (n, maze)
        })
        .collect()
}

fn maze_bench_solver<S: MazeSolver>(c: &mut Criterion, solver: S) {
    for (n, maze) in bench_mazes() {
        c.bench_function(format!("{n}x{n}, {}", solver.name()).as_str(), |b| {
            b.iter(|| black_box(solver.solve(&maze.grid, maze.start, maze.end)))
        });
    }
}

fn maze_bench_dfs(c: &mut Criterion) {
    maze_bench_solver(c, DepthFirstSolver);
}

fn maze_bench_bfs(c: &mut Criterion) {
    maze_bench_solver(c, BreadthFirstSolver);
}

fn maze_bench_astar(c: &mut Criterion) {
    maze_bench_solver(c, AstarSolver);
}

criterion_group!(benches, maze_bench_dfs, maze_bench_bfs, maze_bench_astar);
criterion_main!(benches);
