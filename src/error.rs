use std::io;

use thiserror::Error;

////////////////////////////////////////////////////////////////////////////////

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PercolationError {
    #[error("invalid argument: {name} must be positive, got {value}")]
    InvalidArgument { name: &'static str, value: usize },
    #[error("site ({row}, {col}) is outside the {size}x{size} grid")]
    OutOfBounds { row: usize, col: usize, size: usize },
}

////////////////////////////////////////////////////////////////////////////////

/// Failures while reading a grid description (size followed by row/col pairs).
#[derive(Error, Debug)]
pub enum InputError {
    #[error("failed to read input")]
    Io(#[from] io::Error),
    #[error("line {line}: '{token}' is not a non-negative integer")]
    BadToken { line: usize, token: String },
    #[error("input is empty, expected the grid size first")]
    MissingSize,
    #[error("coordinate row {row} has no matching column")]
    DanglingCoordinate { row: usize },
    #[error(transparent)]
    Percolation(#[from] PercolationError),
}
