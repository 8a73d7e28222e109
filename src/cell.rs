use core::fmt;
use smallvec::SmallVec;

/// One of the four axis-aligned moves on the maze grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    /// The fixed order in which the solvers examine neighbours.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];

    /// Row and column delta of a single step in this direction.
    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Right => (0, 1),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
        }
    }
}

/// A `(row, col)` coordinate on a maze grid. Whether it lies inside a grid is decided by the grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    pub const fn new(row: usize, col: usize) -> Cell {
        Cell { row, col }
    }

    pub fn manhattan_distance(&self, other: &Cell) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }

    /// Steps once in `dir`, returning [None] when that would leave a `width` by `height` grid.
    pub fn step(&self, dir: Direction, width: usize, height: usize) -> Option<Cell> {
        let (dr, dc) = dir.delta();
        let row = self.row.checked_add_signed(dr)?;
        let col = self.col.checked_add_signed(dc)?;
        (row < height && col < width).then_some(Cell::new(row, col))
    }

    /// The in-bounds members of the von Neumann neighbourhood, in [Direction::ALL] order.
    pub fn neumann_neighborhood(&self, width: usize, height: usize) -> SmallVec<[Cell; 4]> {
        Direction::ALL
            .iter()
            .filter_map(|&dir| self.step(dir, width, height))
            .collect()
    }

    /// True if the two cells differ by exactly one unit along exactly one axis.
    pub fn is_adjacent(&self, other: &Cell) -> bool {
        self.manhattan_distance(other) == 1
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
