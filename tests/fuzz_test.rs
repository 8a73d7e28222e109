/// Fuzzes the solvers by checking for many random grids that a path is found exactly when the goal
/// is reachable by being part of the same connected component, and that every returned path is
/// valid. BFS and A* must also agree on the length of the path.
use maze_pathfinding::{
    solver::is_valid_path, AstarSolver, BreadthFirstSolver, Cell, DepthFirstSolver, MazeGrid,
    MazeSolver, Tile,
};
use rand::prelude::*;

fn random_grid(w: usize, h: usize, rng: &mut StdRng) -> MazeGrid {
    let mut grid = MazeGrid::new(w, h, Tile::Open);
    for row in 0..h {
        for col in 0..w {
            if rng.gen_bool(0.4) {
                grid.set(Cell::new(row, col), Tile::Wall);
            }
        }
    }
    grid.update();
    grid
}

fn visualize_grid(grid: &MazeGrid, start: &Cell, end: &Cell) {
    for row in 0..grid.height() {
        for col in 0..grid.width() {
            let p = Cell::new(row, col);
            if *start == p {
                print!("S");
            } else if *end == p {
                print!("G");
            } else if grid.is_open(p) {
                print!(".");
            } else {
                print!("#");
            }
        }
        println!();
    }
}

#[test]
fn fuzz() {
    const N: usize = 10;
    const N_GRIDS: usize = 2000;
    let mut rng = StdRng::seed_from_u64(0);
    let solvers: [&dyn MazeSolver; 3] = [&DepthFirstSolver, &BreadthFirstSolver, &AstarSolver];

    let start = Cell::new(0, 0);
    let end = Cell::new(N - 1, N - 1);
    for _ in 0..N_GRIDS {
        let mut grid = random_grid(N, N, &mut rng);
        grid.set(start, Tile::Open);
        grid.set(end, Tile::Open);
        let reachable = grid.reachable(start, end);
        for solver in solvers {
            let result = solver.solve(&grid, start, end).unwrap();
            // Show the grid if a path is not found
            if result.found() != reachable {
                println!("{} disagrees with the components", solver.name());
                visualize_grid(&grid, &start, &end);
            }
            assert_eq!(result.found(), reachable);
            if let Some(path) = &result.path {
                assert!(is_valid_path(&grid, start, end, path));
                assert!(path.iter().all(|c| result.visited.contains(c)));
            } else {
                let mut visited = result.visited.iter().copied().collect::<Vec<_>>();
                visited.sort();
                assert_eq!(visited, grid.component_cells(start));
            }
        }
    }
}

#[test]
fn fuzz_distance() {
    const N: usize = 12;
    const N_GRIDS: usize = 2000;
    let mut rng = StdRng::seed_from_u64(1);

    for _ in 0..N_GRIDS {
        let grid = random_grid(N, N, &mut rng);
        let open = grid.open_cells().collect::<Vec<_>>();
        let (Some(&start), Some(&end)) = (open.choose(&mut rng), open.choose(&mut rng)) else {
            continue;
        };
        let bfs = BreadthFirstSolver.solve(&grid, start, end).unwrap();
        let astar = AstarSolver.solve(&grid, start, end).unwrap();
        let dfs = DepthFirstSolver.solve(&grid, start, end).unwrap();
        if bfs.path_len() != astar.path_len() {
            println!("BFS path: {:?}\nA* path: {:?}\n", bfs.path, astar.path);
            visualize_grid(&grid, &start, &end);
        }
        assert_eq!(bfs.path_len(), astar.path_len());
        if let (Some(bfs_len), Some(dfs_len)) = (bfs.path_len(), dfs.path_len()) {
            assert!(bfs_len <= dfs_len);
            // No path can be shorter than the Manhattan distance
            assert!(bfs_len > start.manhattan_distance(&end));
        }
    }
}
