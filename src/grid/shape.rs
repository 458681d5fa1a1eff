use crate::grid::ShapeError;

/// The four shapes used by the demo layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShapeKind {
    T,
    X,
    Horizontal,
    Vertical,
}

impl ShapeKind {
    pub fn shape(self) -> Shape {
        match self {
            ShapeKind::T => Shape::from_mask(&T),
            ShapeKind::X => Shape::from_mask(&X),
            ShapeKind::Horizontal => Shape::from_mask(&HORIZONTAL),
            ShapeKind::Vertical => Shape::from_mask(&VERTICAL),
        }
    }
}

/// A rectangular boolean mask. `true` cells are part of the shape, `false`
/// cells are gaps that never touch the grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Shape {
    rows: usize,
    cols: usize,
    mask: Vec<bool>,
}

impl Shape {
    /// Builds a shape from row-major rows. All rows must have the same length.
    pub fn new(rows: Vec<Vec<bool>>) -> Result<Self, ShapeError> {
        let cols = rows.first().map_or(0, Vec::len);
        let mut mask = Vec::with_capacity(rows.len() * cols);
        for (row, cells) in rows.iter().enumerate() {
            if cells.len() != cols {
                return Err(ShapeError::Ragged {
                    row,
                    expected: cols,
                    found: cells.len(),
                });
            }
            mask.extend_from_slice(cells);
        }
        Ok(Self {
            rows: rows.len(),
            cols,
            mask,
        })
    }

    /// Parses an ASCII mask: `#` is occupied, `.` or a space is a gap, one
    /// line per row.
    pub fn parse(text: &str) -> Result<Self, ShapeError> {
        let mut rows = Vec::new();
        for (row, line) in text.lines().enumerate() {
            let mut cells = Vec::with_capacity(line.len());
            for (col, ch) in line.chars().enumerate() {
                match ch {
                    '#' => cells.push(true),
                    '.' | ' ' => cells.push(false),
                    _ => return Err(ShapeError::InvalidChar { ch, row, col }),
                }
            }
            rows.push(cells);
        }
        Self::new(rows)
    }

    fn from_mask<const R: usize, const C: usize>(mask: &[[bool; C]; R]) -> Self {
        Self {
            rows: R,
            cols: C,
            mask: mask.iter().flatten().copied().collect(),
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn is_set(&self, i: usize, j: usize) -> bool {
        i < self.rows && j < self.cols && self.mask[i * self.cols + j]
    }

    /// Offsets `(i, j)` of the occupied cells, row-major.
    pub fn occupied(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let cols = self.cols;
        self.mask
            .iter()
            .enumerate()
            .filter(|(_, set)| **set)
            .map(move |(idx, _)| (idx / cols, idx % cols))
    }

    /// Occupied cells translated so the shape's top-left lies on `(row, col)`.
    ///
    /// Widened to `i64` so anchors near the `i32` limits cannot overflow.
    pub fn translated(&self, row: i32, col: i32) -> impl Iterator<Item = (i64, i64)> + '_ {
        self.occupied()
            .map(move |(i, j)| (i64::from(row) + i as i64, i64::from(col) + j as i64))
    }
}

const T: [[bool; 3]; 2] = [[true, true, true], [false, true, false]];
const X: [[bool; 3]; 3] = [
    [true, false, true],
    [false, true, false],
    [true, false, true],
];
const HORIZONTAL: [[bool; 3]; 1] = [[true, true, true]];
const VERTICAL: [[bool; 1]; 3] = [[true], [true], [true]];
