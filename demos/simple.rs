use maze_pathfinding::{render_solution, solve_astar, Cell, MazeGrid};

// In this example a path is found on a grid with shape
// S..#
// .#.#
// .#..
// ...G
// S marks the start
// G marks the end
fn main() {
    let grid = MazeGrid::from_rows(&["...#", ".#.#", ".#..", "...."]).unwrap();
    let start = Cell::new(0, 0);
    let end = Cell::new(3, 3);
    let result = solve_astar(&grid, start, end).unwrap();
    if let Some(path) = &result.path {
        println!("A path has been found:");
        for p in path {
            println!("{}", p);
        }
    }
    print!("{}", render_solution(&grid, start, end, Some(&result), true));
}
