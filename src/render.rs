use crate::{cell::Cell, maze_grid::MazeGrid, solver::SearchResult};

pub const START_CHAR: char = 'S';
pub const END_CHAR: char = 'G';
pub const PATH_CHAR: char = '*';
pub const EXPLORED_CHAR: char = 'o';

/// Draws the grid one text row per grid row. `#` is a wall and `.` an open cell. The solver's
/// path is drawn with `*` and, if `show_explored` is set, the other explored cells with `o`.
/// Start and end are always drawn as `S` and `G`.
pub fn render_solution(
    grid: &MazeGrid,
    start: Cell,
    end: Cell,
    result: Option<&SearchResult>,
    show_explored: bool,
) -> String {
    let mut canvas = (0..grid.height())
        .map(|row| {
            (0..grid.width())
                .map(|col| grid.tile(Cell::new(row, col)).map_or(' ', |t| t.as_char()))
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();
    let mut mark = |cell: &Cell, c: char| {
        if let Some(slot) = canvas.get_mut(cell.row).and_then(|r| r.get_mut(cell.col)) {
            *slot = c;
        }
    };
    if let Some(result) = result {
        if show_explored {
            result.visited.iter().for_each(|c| mark(c, EXPLORED_CHAR));
        }
        if let Some(path) = &result.path {
            path.iter().for_each(|c| mark(c, PATH_CHAR));
        }
    }
    mark(&start, START_CHAR);
    mark(&end, END_CHAR);

    let mut out = String::with_capacity((grid.width() + 1) * grid.height());
    for row in canvas {
        out.extend(row);
        out.push('\n');
    }
    out
}
