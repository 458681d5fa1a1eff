//! A fixed-size grid of typed cells with shape collision testing, plus a
//! small terminal demo that moves a shape around with the arrow keys.

pub mod app;
pub mod config;
pub mod demo;
pub mod grid;
pub mod input;
pub mod render;
pub mod ui;

pub use grid::{Cell, Grid, GridError, Shape, ShapeError, ShapeKind};
pub use render::{render_text, Glyph, Palette, UNKNOWN_GLYPH};
