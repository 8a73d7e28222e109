use maze_pathfinding::{generate, render_solution, Comparison};

// Generates a seeded 20x20 maze and prints how DFS, BFS and A* solve it, first with only the
// paths marked and then with the explored cells as well.
fn main() {
    let maze = generate(20, 20, Some(42), true, 0.15).unwrap();
    let comparison = Comparison::run(&maze).unwrap();
    if !comparison.any_found() {
        println!("No solution found! The maze might be unsolvable.");
    }
    print!("{}", comparison);

    for show_explored in [false, true] {
        for run in &comparison.runs {
            println!("\n{}", run.name);
            print!(
                "{}",
                render_solution(
                    &maze.grid,
                    maze.start,
                    maze.end,
                    Some(&run.result),
                    show_explored
                )
            );
        }
    }
}
