use std::fmt;

use crate::grid::Cell;

/// Errors reported by the checked grid operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// A translated shape cell falls outside the grid.
    OutOfBounds {
        row: i64,
        col: i64,
        rows: usize,
        cols: usize,
    },
    /// A translated shape cell lands on an occupied cell.
    Occupied { row: usize, col: usize, found: Cell },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::OutOfBounds {
                row,
                col,
                rows,
                cols,
            } => write!(f, "cell ({row}, {col}) is outside the {rows}x{cols} grid"),
            GridError::Occupied { row, col, found } => {
                write!(f, "cell ({row}, {col}) is already {}", found.name())
            }
        }
    }
}

impl std::error::Error for GridError {}

/// Errors that can occur when building a shape mask.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShapeError {
    /// Rows have different lengths.
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// A character other than `#`, `.` or space was found.
    InvalidChar { ch: char, row: usize, col: usize },
}

impl fmt::Display for ShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ragged {
                row,
                expected,
                found,
            } => write!(
                f,
                "shape row {row} has {found} cells, expected {expected}"
            ),
            Self::InvalidChar { ch, row, col } => {
                write!(f, "shape contains invalid char {ch:?} at ({row}, {col})")
            }
        }
    }
}

impl std::error::Error for ShapeError {}
