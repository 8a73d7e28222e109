use crate::{
    cell::{Cell, Direction},
    error::MazeError,
    maze_grid::{MazeGrid, Tile},
    solver::{MazeSolver, SearchResult},
    DEFAULT_EXTRA_PATHS_RATIO, DEFAULT_HEIGHT, DEFAULT_WIDTH,
};
use log::{debug, info, warn};
use rand::{
    rngs::StdRng,
    seq::{index, SliceRandom},
    Rng, SeedableRng,
};

/// A generated maze: the grid plus its designated start and end cells.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Maze {
    pub grid: MazeGrid,
    pub start: Cell,
    pub end: Cell,
}

impl Maze {
    /// Runs `solver` from [start](Self::start) to [end](Self::end).
    pub fn solve<S: MazeSolver + ?Sized>(&self, solver: &S) -> Result<SearchResult, MazeError> {
        solver.solve(&self.grid, self.start, self.end)
    }

    /// Checks if start and end are on the same component.
    pub fn is_solvable(&self) -> bool {
        self.grid.reachable(self.start, self.end)
    }
}

/// Parameters of a maze generation run.
#[derive(Clone, Debug, PartialEq)]
pub struct GeneratorConfig {
    pub width: usize,
    pub height: usize,
    /// Makes generation reproducible. Without one the random source is seeded from the OS.
    pub seed: Option<u64>,
    /// Open extra walls after carving so that more than one route may exist.
    pub multiple_solutions: bool,
    /// Fraction of the removable walls to open when `multiple_solutions` is set.
    pub extra_paths_ratio: f64,
    /// Carve a corridor to the end cell if carving left it disconnected from the start.
    pub ensure_connected: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            seed: None,
            multiple_solutions: true,
            extra_paths_ratio: DEFAULT_EXTRA_PATHS_RATIO,
            ensure_connected: false,
        }
    }
}

impl GeneratorConfig {
    pub fn new(width: usize, height: usize) -> Self {
        GeneratorConfig {
            width,
            height,
            ..Default::default()
        }
    }

    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_multiple_solutions(mut self, multiple_solutions: bool) -> Self {
        self.multiple_solutions = multiple_solutions;
        self
    }

    pub fn with_extra_paths_ratio(mut self, extra_paths_ratio: f64) -> Self {
        self.extra_paths_ratio = extra_paths_ratio;
        self
    }

    pub fn with_ensure_connected(mut self, ensure_connected: bool) -> Self {
        self.ensure_connected = ensure_connected;
        self
    }

    pub fn validate(&self) -> Result<(), MazeError> {
        if self.width < 2 || self.height < 2 || self.width.checked_mul(self.height).is_none() {
            return Err(MazeError::InvalidSize {
                width: self.width,
                height: self.height,
            });
        }
        if !(0.0..1.0).contains(&self.extra_paths_ratio) {
            return Err(MazeError::InvalidRatio(self.extra_paths_ratio));
        }
        Ok(())
    }

    /// Generates a maze with a random source built from [seed](Self::seed).
    pub fn generate(&self) -> Result<Maze, MazeError> {
        self.validate()?;
        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        generate_with_rng(self, &mut rng)
    }
}

/// Generates a maze drawing all randomness from `rng`. The `seed` of the config is ignored.
///
/// The end cell is forced open after carving, together with the cell above it when none of its
/// neighbours is open. This can still leave it disconnected from the start unless
/// [ensure_connected](GeneratorConfig::ensure_connected) is set. Such a maze is a valid
/// output; solvers report it as having no path.
pub fn generate_with_rng<R: Rng + ?Sized>(
    config: &GeneratorConfig,
    rng: &mut R,
) -> Result<Maze, MazeError> {
    config.validate()?;
    let (width, height) = (config.width, config.height);
    let mut grid = MazeGrid::new(width, height, Tile::Wall);
    let start = Cell::new(0, 0);
    let end = Cell::new(height - 1, width - 1);

    let carved = carve(&mut grid, start, rng);
    debug!("Carved {} of {} cells", carved, width * height);
    grid.set(end, Tile::Open);
    if open_above_isolated(&mut grid, end) {
        debug!("End {} was isolated, opened the cell above it", end);
    }

    if config.ensure_connected && grid.unreachable(start, end) {
        let opened = connect_end(&mut grid, start, end);
        debug!("Opened a corridor of {} cells to reach {}", opened, end);
    }

    let extra = if config.multiple_solutions {
        add_extra_paths(&mut grid, config.extra_paths_ratio, rng)
    } else {
        0
    };

    info!(
        "Generated {}x{} maze with {} open cells ({} extra openings)",
        width,
        height,
        grid.open_cells().count(),
        extra
    );
    let maze = Maze { grid, start, end };
    if !maze.is_solvable() {
        warn!("End {} is not reachable from start {}", end, start);
    }
    Ok(maze)
}

struct CarveFrame {
    cell: Cell,
    directions: [Direction; 4],
    next: usize,
}

fn enter<R: Rng + ?Sized>(grid: &mut MazeGrid, cell: Cell, rng: &mut R) -> CarveFrame {
    grid.set(cell, Tile::Open);
    let mut directions = Direction::ALL;
    directions.shuffle(rng);
    CarveFrame {
        cell,
        directions,
        next: 0,
    }
}

/// Randomized backtracking from `start`. A wall cell is carved into only while it has at most one
/// open neighbour, which keeps the carved cells a tree. Frames on the explicit stack resume
/// their remaining directions exactly where a recursive carve would.
fn carve<R: Rng + ?Sized>(grid: &mut MazeGrid, start: Cell, rng: &mut R) -> usize {
    let (width, height) = (grid.width(), grid.height());
    let mut stack = Vec::with_capacity(width * height);
    stack.push(enter(grid, start, rng));
    let mut carved = 1;
    while let Some(frame) = stack.last_mut() {
        let Some(&dir) = frame.directions.get(frame.next) else {
            stack.pop();
            continue;
        };
        frame.next += 1;
        let Some(n) = frame.cell.step(dir, width, height) else {
            continue;
        };
        if !grid.is_open(n) && grid.count_open_neighbours(n) <= 1 {
            stack.push(enter(grid, n, rng));
            carved += 1;
        }
    }
    carved
}

/// Opens the cell above `cell` if `cell` has no open neighbour.
fn open_above_isolated(grid: &mut MazeGrid, cell: Cell) -> bool {
    if cell.row == 0 || grid.count_open_neighbours(cell) > 0 {
        return false;
    }
    grid.set(Cell::new(cell.row - 1, cell.col), Tile::Open);
    true
}

/// Opens cells upwards from `end`, then leftwards along the top row, until the corridor
/// touches the component of `start`.
fn connect_end(grid: &mut MazeGrid, start: Cell, end: Cell) -> usize {
    let mut opened = 0;
    let mut cell = end;
    while grid.unreachable(start, cell) {
        cell = if cell.row > 0 {
            Cell::new(cell.row - 1, cell.col)
        } else if cell.col > 0 {
            Cell::new(cell.row, cell.col - 1)
        } else {
            break;
        };
        if !grid.is_open(cell) {
            grid.set(cell, Tile::Open);
            opened += 1;
        }
    }
    opened
}

/// Opens `round(ratio * n)` of the `n` interior walls that have at least two open neighbours,
/// sampled uniformly without replacement.
fn add_extra_paths<R: Rng + ?Sized>(grid: &mut MazeGrid, ratio: f64, rng: &mut R) -> usize {
    let (width, height) = (grid.width(), grid.height());
    let removable = (1..height.saturating_sub(1))
        .flat_map(|row| (1..width.saturating_sub(1)).map(move |col| Cell::new(row, col)))
        .filter(|c| !grid.is_open(*c) && grid.count_open_neighbours(*c) >= 2)
        .collect::<Vec<_>>();
    let amount = ((removable.len() as f64 * ratio).round() as usize).min(removable.len());
    if amount == 0 {
        return 0;
    }
    debug!("Opening {} of {} removable walls", amount, removable.len());
    for i in index::sample(rng, removable.len(), amount).into_iter() {
        grid.set(removable[i], Tile::Open);
    }
    amount
}
