use maze_pathfinding::{
    generate, solve_astar, solve_bfs, solve_dfs, solver::is_valid_path, Cell, Comparison,
    GeneratorConfig, MazeError, MazeGrid,
};

#[test]
fn properties_hold_on_generated_mazes() {
    for seed in 0..100 {
        let width = 5 + (seed as usize % 17);
        let height = 4 + (seed as usize % 11);
        let maze = generate(width, height, Some(seed), true, 0.15).unwrap();
        assert!(maze.grid.is_open(maze.start));
        assert!(maze.grid.is_open(maze.end));

        let dfs = solve_dfs(&maze.grid, maze.start, maze.end).unwrap();
        let bfs = solve_bfs(&maze.grid, maze.start, maze.end).unwrap();
        let astar = solve_astar(&maze.grid, maze.start, maze.end).unwrap();
        for result in [&dfs, &bfs, &astar] {
            assert_eq!(result.found(), maze.is_solvable(), "seed {seed}");
            match &result.path {
                Some(path) => {
                    assert!(is_valid_path(&maze.grid, maze.start, maze.end, path));
                    assert!(path.iter().all(|c| result.visited.contains(c)));
                }
                None => {
                    let mut visited = result.visited.iter().copied().collect::<Vec<_>>();
                    visited.sort();
                    assert_eq!(visited, maze.grid.component_cells(maze.start));
                }
            }
        }
        assert_eq!(bfs.path_len(), astar.path_len(), "seed {seed}");
    }
}

#[test]
fn same_seed_gives_identical_grid() {
    let a = generate(31, 19, Some(2024), true, 0.2).unwrap();
    let b = generate(31, 19, Some(2024), true, 0.2).unwrap();
    assert_eq!(a.grid.tiles(), b.grid.tiles());
    assert_eq!(a.grid.to_string(), b.grid.to_string());
}

#[test]
fn zero_ratio_equals_single_solution() {
    let single = generate(16, 16, Some(3), false, 0.15).unwrap();
    let zero = generate(16, 16, Some(3), true, 0.0).unwrap();
    assert_eq!(single.grid, zero.grid);
}

#[test]
fn one_by_one_is_rejected_but_trivially_solvable() {
    assert_eq!(
        generate(1, 1, Some(0), true, 0.15).unwrap_err(),
        MazeError::InvalidSize {
            width: 1,
            height: 1
        }
    );
    let grid = MazeGrid::from_rows(&["."]).unwrap();
    let cell = Cell::new(0, 0);
    for result in [
        solve_dfs(&grid, cell, cell).unwrap(),
        solve_bfs(&grid, cell, cell).unwrap(),
        solve_astar(&grid, cell, cell).unwrap(),
    ] {
        assert_eq!(result.path, Some(vec![cell]));
    }
}

#[test]
fn two_by_two_open_grid() {
    let grid = MazeGrid::from_rows(&["..", ".."]).unwrap();
    let start = Cell::new(0, 0);
    let end = Cell::new(1, 1);
    let via_right = vec![start, Cell::new(0, 1), end];
    let via_down = vec![start, Cell::new(1, 0), end];
    for result in [
        solve_dfs(&grid, start, end).unwrap(),
        solve_bfs(&grid, start, end).unwrap(),
        solve_astar(&grid, start, end).unwrap(),
    ] {
        let path = result.path.unwrap();
        assert!(path == via_right || path == via_down);
    }
}

#[test]
fn comparison_on_connected_mazes() {
    for seed in 0..25 {
        let maze = GeneratorConfig::new(30, 20)
            .with_seed(Some(seed))
            .with_ensure_connected(true)
            .generate()
            .unwrap();
        let comparison = Comparison::run(&maze).unwrap();
        assert!(comparison.runs.iter().all(|r| r.result.found()));
        assert!(comparison.optimal_lengths_agree());
        let dfs_len = comparison.get("DFS").unwrap().result.path_len().unwrap();
        let bfs_len = comparison.get("BFS").unwrap().result.path_len().unwrap();
        assert!(bfs_len <= dfs_len);
    }
}
