use crate::cell::Cell;
use crate::error::MazeError;
use crate::N_SMALLVEC_SIZE;
use core::fmt;
use core::str::FromStr;
use log::debug;
use petgraph::unionfind::UnionFind;
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Tile {
    Open,
    Wall,
}

impl Tile {
    pub fn is_open(self) -> bool {
        self == Tile::Open
    }

    pub fn as_char(self) -> char {
        match self {
            Tile::Open => '.',
            Tile::Wall => '#',
        }
    }
}

/// [MazeGrid] stores the raw [Tile] values of a maze in row-major order and maintains
/// information about 4-connected components of open cells using a [UnionFind] structure.
///
/// Opening a cell joins its component with those of its open neighbours straight away.
/// Walling a cell in can split a component, so it only flags the components as dirty;
/// call [update](Self::update) before querying reachability after doing so.
#[derive(Clone, Debug)]
pub struct MazeGrid {
    width: usize,
    height: usize,
    tiles: Vec<Tile>,
    components: UnionFind<usize>,
    components_dirty: bool,
}

impl MazeGrid {
    pub fn new(width: usize, height: usize, fill: Tile) -> MazeGrid {
        let mut grid = MazeGrid {
            width,
            height,
            tiles: vec![fill; width * height],
            components: UnionFind::new(width * height),
            components_dirty: false,
        };
        if fill.is_open() {
            grid.generate_components();
        }
        grid
    }

    /// Parses a grid from text rows, where `#` is a wall and `.` is open.
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<MazeGrid, MazeError> {
        let height = rows.len();
        let width = rows.first().map_or(0, |r| r.as_ref().chars().count());
        if width == 0 || height == 0 {
            return Err(MazeError::InvalidSize { width, height });
        }
        let mut tiles = Vec::with_capacity(width * height);
        for (row, line) in rows.iter().enumerate() {
            let line = line.as_ref();
            let found = line.chars().count();
            if found != width {
                return Err(MazeError::RaggedRows {
                    row,
                    expected: width,
                    found,
                });
            }
            for (col, c) in line.chars().enumerate() {
                tiles.push(match c {
                    '.' => Tile::Open,
                    '#' => Tile::Wall,
                    found => return Err(MazeError::Parse { row, col, found }),
                });
            }
        }
        let mut grid = MazeGrid {
            width,
            height,
            tiles,
            components: UnionFind::new(width * height),
            components_dirty: false,
        };
        grid.generate_components();
        Ok(grid)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Raw tiles in row-major order.
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn in_bounds(&self, cell: Cell) -> bool {
        cell.row < self.height && cell.col < self.width
    }

    pub fn get_ix(&self, cell: Cell) -> usize {
        cell.row * self.width + cell.col
    }

    pub fn tile(&self, cell: Cell) -> Option<Tile> {
        self.in_bounds(cell).then(|| self.tiles[self.get_ix(cell)])
    }

    /// True if the cell is inside the grid and open.
    pub fn is_open(&self, cell: Cell) -> bool {
        self.tile(cell).is_some_and(Tile::is_open)
    }

    /// Updates a position on the grid. Joins newly connected components and flags the components
    /// as dirty if components are (potentially) broken apart into multiple.
    ///
    /// Panics if the cell is out of bounds.
    pub fn set(&mut self, cell: Cell, tile: Tile) {
        let ix = self.get_ix(cell);
        match tile {
            Tile::Wall => {
                if self.tiles[ix].is_open() {
                    self.components_dirty = true;
                }
            }
            Tile::Open => {
                for n in self.open_neighbours(cell) {
                    let n_ix = self.get_ix(n);
                    self.components.union(ix, n_ix);
                }
            }
        }
        self.tiles[ix] = tile;
    }

    /// The open members of the von Neumann neighbourhood, ordered up, right, down, left.
    pub fn open_neighbours(&self, cell: Cell) -> SmallVec<[Cell; N_SMALLVEC_SIZE]> {
        cell.neumann_neighborhood(self.width, self.height)
            .into_iter()
            .filter(|n| self.is_open(*n))
            .collect()
    }

    pub fn count_open_neighbours(&self, cell: Cell) -> usize {
        cell.neumann_neighborhood(self.width, self.height)
            .iter()
            .filter(|n| self.is_open(**n))
            .count()
    }

    pub fn open_cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.tiles
            .iter()
            .enumerate()
            .filter(|(_, t)| t.is_open())
            .map(|(ix, _)| Cell::new(ix / self.width, ix % self.width))
    }

    /// Checks that a solver endpoint lies inside the grid on an open cell.
    pub fn check_endpoint(&self, cell: Cell) -> Result<(), MazeError> {
        match self.tile(cell) {
            None => Err(MazeError::OutOfBounds {
                cell,
                width: self.width,
                height: self.height,
            }),
            Some(Tile::Wall) => Err(MazeError::BlockedEndpoint(cell)),
            Some(Tile::Open) => Ok(()),
        }
    }

    /// Retrieves the component id a given [Cell] belongs to.
    pub fn get_component(&self, cell: Cell) -> usize {
        self.components.find(self.get_ix(cell))
    }

    /// Checks if start and goal are open cells on the same component.
    pub fn reachable(&self, start: Cell, goal: Cell) -> bool {
        debug_assert!(!self.components_dirty, "components queried while dirty");
        self.is_open(start)
            && self.is_open(goal)
            && self
                .components
                .equiv(self.get_ix(start), self.get_ix(goal))
    }

    pub fn unreachable(&self, start: Cell, goal: Cell) -> bool {
        !self.reachable(start, goal)
    }

    /// All open cells on the component of `cell`, in row-major order.
    pub fn component_cells(&self, cell: Cell) -> Vec<Cell> {
        self.open_cells()
            .filter(|c| self.reachable(cell, *c))
            .collect()
    }

    /// Regenerates the components if they are marked as dirty.
    pub fn update(&mut self) {
        if self.components_dirty {
            debug!("Components are dirty: regenerating components");
            self.generate_components();
        }
    }

    /// Generates a new [UnionFind] structure and links up open grid neighbours to the same components.
    pub fn generate_components(&mut self) {
        self.components = UnionFind::new(self.width * self.height);
        self.components_dirty = false;
        for row in 0..self.height {
            for col in 0..self.width {
                let cell = Cell::new(row, col);
                if !self.is_open(cell) {
                    continue;
                }
                let ix = self.get_ix(cell);
                // Right and down suffice since every pair is seen from its top-left member
                for n in [Cell::new(row, col + 1), Cell::new(row + 1, col)] {
                    if self.is_open(n) {
                        let n_ix = self.get_ix(n);
                        self.components.union(ix, n_ix);
                    }
                }
            }
        }
    }
}

impl PartialEq for MazeGrid {
    fn eq(&self, other: &Self) -> bool {
        self.width == other.width && self.height == other.height && self.tiles == other.tiles
    }
}

impl Eq for MazeGrid {}

impl FromStr for MazeGrid {
    type Err = MazeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows = s
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect::<Vec<_>>();
        MazeGrid::from_rows(&rows)
    }
}

impl fmt::Display for MazeGrid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in self.tiles.chunks(self.width.max(1)) {
            let line = row.iter().map(|t| t.as_char()).collect::<String>();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
