use crate::cell::Cell;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum MazeError {
    #[error("maze dimensions must be at least 2x2, got {width}x{height}")]
    InvalidSize { width: usize, height: usize },
    #[error("extra paths ratio must lie in [0, 1), got {0}")]
    InvalidRatio(f64),
    #[error("cell {cell} lies outside the {width}x{height} grid")]
    OutOfBounds {
        cell: Cell,
        width: usize,
        height: usize,
    },
    #[error("endpoint {0} is a wall")]
    BlockedEndpoint(Cell),
    #[error("unexpected character {found:?} at row {row}, column {col}")]
    Parse { row: usize, col: usize, found: char },
    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        found: usize,
    },
}
