use std::fmt;

use log::trace;

use crate::grid::{Cell, GridError, Shape};
use crate::render::{render_text, Palette};

/// Fixed-size occupancy grid of [`Cell`] labels, stored row-major.
///
/// Cells only change through [`clear_all`](Grid::clear_all),
/// [`place`](Grid::place) and [`remove`](Grid::remove) (or their checked
/// variants). `place` and `remove` are unchecked: callers are expected to run
/// [`can_place`](Grid::can_place) with the same arguments first.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Creates a `rows` x `cols` grid with every cell set to [`Cell::Empty`].
    ///
    /// # Panics
    ///
    /// Panics if `rows * cols` overflows `usize`.
    pub fn new(rows: usize, cols: usize) -> Self {
        let len = rows
            .checked_mul(cols)
            .unwrap_or_else(|| panic!("a {rows}x{cols} grid has too many cells"));
        Self {
            rows,
            cols,
            cells: vec![Cell::Empty; len],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    fn idx(&self, row: i64, col: i64) -> Option<usize> {
        let r = usize::try_from(row).ok()?;
        let c = usize::try_from(col).ok()?;
        if r >= self.rows || c >= self.cols {
            return None;
        }
        Some(r * self.cols + c)
    }

    // Out-of-range targets are a broken caller precondition.
    fn idx_unchecked(&self, row: i64, col: i64) -> usize {
        match self.idx(row, col) {
            Some(idx) => idx,
            None => panic!(
                "cell ({row}, {col}) is outside the {}x{} grid",
                self.rows, self.cols
            ),
        }
    }

    /// Returns the label at `(row, col)`, or `None` when out of bounds.
    pub fn get(&self, row: i32, col: i32) -> Option<Cell> {
        self.cell_at(row.into(), col.into())
    }

    fn cell_at(&self, row: i64, col: i64) -> Option<Cell> {
        self.idx(row, col).map(|idx| self.cells[idx])
    }

    /// The cells of one row, left to right.
    ///
    /// # Panics
    ///
    /// Panics if `row >= self.rows()`.
    pub fn row_cells(&self, row: usize) -> &[Cell] {
        assert!(row < self.rows, "row {row} is outside the {}x{} grid", self.rows, self.cols);
        let start = row * self.cols;
        &self.cells[start..start + self.cols]
    }

    pub fn iter_rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        (0..self.rows).map(|r| self.row_cells(r))
    }

    pub fn count(&self, label: Cell) -> usize {
        self.cells.iter().filter(|c| **c == label).count()
    }

    /// Sets every cell to `label`.
    pub fn clear_all(&mut self, label: Cell) {
        self.cells.fill(label);
    }

    /// True iff every occupied cell of `shape`, anchored at `(row, col)`, lands
    /// on an in-bounds [`Cell::Empty`] cell. Gaps in the mask are ignored.
    pub fn can_place(&self, shape: &Shape, row: i32, col: i32) -> bool {
        self.first_conflict(shape, row, col).is_none()
    }

    fn first_conflict(&self, shape: &Shape, row: i32, col: i32) -> Option<GridError> {
        for (r, c) in shape.translated(row, col) {
            match self.cell_at(r, c) {
                None => {
                    return Some(GridError::OutOfBounds {
                        row: r,
                        col: c,
                        rows: self.rows,
                        cols: self.cols,
                    });
                }
                Some(found) if !found.is_empty() => {
                    return Some(GridError::Occupied {
                        row: r as usize,
                        col: c as usize,
                        found,
                    });
                }
                Some(_) => {}
            }
        }
        None
    }

    /// Stamps `label` onto every occupied cell of `shape` anchored at
    /// `(row, col)`, overwriting whatever is there.
    ///
    /// # Panics
    ///
    /// Panics if any occupied cell falls outside the grid. Callers should
    /// check [`can_place`](Grid::can_place) first.
    pub fn place(&mut self, shape: &Shape, label: Cell, row: i32, col: i32) {
        self.stamp(shape, label, row, col);
    }

    /// Sets every occupied cell of `shape` anchored at `(row, col)` to
    /// [`Cell::Empty`].
    ///
    /// The labels underneath are not inspected, so removing at the wrong
    /// anchor erases whatever other shape lives there.
    ///
    /// # Panics
    ///
    /// Panics if any occupied cell falls outside the grid.
    pub fn remove(&mut self, shape: &Shape, row: i32, col: i32) {
        self.stamp(shape, Cell::Empty, row, col);
    }

    fn stamp(&mut self, shape: &Shape, label: Cell, row: i32, col: i32) {
        trace!("stamp {:?} at ({row}, {col})", label);
        for (r, c) in shape.translated(row, col) {
            let idx = self.idx_unchecked(r, c);
            self.cells[idx] = label;
        }
    }

    /// Checked [`place`](Grid::place): fails on the first out-of-bounds or
    /// occupied target and leaves the grid untouched.
    pub fn try_place(
        &mut self,
        shape: &Shape,
        label: Cell,
        row: i32,
        col: i32,
    ) -> Result<(), GridError> {
        if let Some(err) = self.first_conflict(shape, row, col) {
            return Err(err);
        }
        self.stamp(shape, label, row, col);
        Ok(())
    }

    /// Checked [`remove`](Grid::remove): validates bounds only, labels are
    /// still cleared unconditionally.
    pub fn try_remove(&mut self, shape: &Shape, row: i32, col: i32) -> Result<(), GridError> {
        if let Some((r, c)) = shape
            .translated(row, col)
            .find(|&(r, c)| self.idx(r, c).is_none())
        {
            return Err(GridError::OutOfBounds {
                row: r,
                col: c,
                rows: self.rows,
                cols: self.cols,
            });
        }
        self.stamp(shape, Cell::Empty, row, col);
        Ok(())
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render_text(self, &Palette::default(), f)
    }
}
