use log::{debug, info};

use crate::grid::{Cell, Grid, Shape, ShapeKind};
use crate::input::Action;

/// Fixed obstacles stamped before the player appears: shape, label, anchor.
pub const LAYOUT: [(ShapeKind, Cell, i32, i32); 5] = [
    (ShapeKind::T, Cell::Red, 0, 0),
    (ShapeKind::X, Cell::Magenta, 3, 10),
    (ShapeKind::Horizontal, Cell::Blue, 1, 13),
    (ShapeKind::Horizontal, Cell::Green, 5, 0),
    (ShapeKind::Vertical, Cell::Blue, 9, 9),
];

pub const PLAYER_KIND: ShapeKind = ShapeKind::T;
pub const PLAYER_LABEL: Cell = Cell::Red;

/// Owns the grid and the player-controlled shape.
pub struct Demo {
    grid: Grid,
    player: Shape,
    label: Cell,
    row: i32,
    col: i32,
}

impl Demo {
    /// Builds the starting board. The grid must be at least
    /// [`DEMO_MIN_ROWS`](crate::config::DEMO_MIN_ROWS) x
    /// [`DEMO_MIN_COLS`](crate::config::DEMO_MIN_COLS).
    pub fn new(rows: usize, cols: usize) -> Self {
        let mut grid = Grid::new(rows, cols);
        grid.clear_all(Cell::Empty);
        for (kind, label, row, col) in LAYOUT {
            grid.place(&kind.shape(), label, row, col);
        }

        // The player starts on top of the static T in the corner.
        let player = PLAYER_KIND.shape();
        grid.place(&player, PLAYER_LABEL, 0, 0);
        info!("demo ready on a {rows}x{cols} grid");

        Self {
            grid,
            player,
            label: PLAYER_LABEL,
            row: 0,
            col: 0,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn anchor(&self) -> (i32, i32) {
        (self.row, self.col)
    }

    /// Lifts the player, moves it by the action's delta if the new spot is
    /// free, then puts it back down. Returns whether the anchor changed.
    pub fn step(&mut self, action: Action) -> bool {
        let (dr, dc) = action.delta();
        self.grid.remove(&self.player, self.row, self.col);

        let (next_row, next_col) = (self.row + dr, self.col + dc);
        let moved = (dr, dc) != (0, 0) && self.grid.can_place(&self.player, next_row, next_col);
        if moved {
            self.row = next_row;
            self.col = next_col;
        } else if (dr, dc) != (0, 0) {
            debug!("blocked at ({next_row}, {next_col})");
        }

        self.grid.place(&self.player, self.label, self.row, self.col);
        moved
    }
}
