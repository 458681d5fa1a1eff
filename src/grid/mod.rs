pub mod board;
pub mod cell;
pub mod error;
pub mod shape;

pub use board::Grid;
pub use cell::Cell;
pub use error::{GridError, ShapeError};
pub use shape::{Shape, ShapeKind};
