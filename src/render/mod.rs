use std::fmt;

use ratatui::style::Color;

use crate::grid::{Cell, Grid};

/// How a single cell is drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Glyph {
    pub ch: char,
    pub color: Color,
}

impl Glyph {
    pub const fn new(ch: char, color: Color) -> Self {
        Self { ch, color }
    }
}

/// Drawn for any label the palette has no entry for.
pub const UNKNOWN_GLYPH: Glyph = Glyph::new('?', Color::Gray);

/// Label to glyph lookup shared by the text and terminal renderers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Palette {
    entries: [Option<Glyph>; Cell::COUNT],
}

impl Default for Palette {
    fn default() -> Self {
        Self::blank()
            .with(Cell::Empty, Glyph::new('\u{2588}', Color::White))
            .with(Cell::Red, Glyph::new('\u{2591}', Color::Red))
            .with(Cell::Magenta, Glyph::new('\u{2592}', Color::Magenta))
            .with(Cell::Green, Glyph::new('\u{2593}', Color::Green))
            .with(Cell::Blue, Glyph::new('\u{2591}', Color::Blue))
    }
}

impl Palette {
    /// A palette with no entries; every label renders as [`UNKNOWN_GLYPH`].
    pub fn blank() -> Self {
        Self {
            entries: [None; Cell::COUNT],
        }
    }

    pub fn with(mut self, cell: Cell, glyph: Glyph) -> Self {
        self.entries[cell.index()] = Some(glyph);
        self
    }

    pub fn without(mut self, cell: Cell) -> Self {
        self.entries[cell.index()] = None;
        self
    }

    pub fn glyph(&self, cell: Cell) -> Glyph {
        self.entries[cell.index()].unwrap_or(UNKNOWN_GLYPH)
    }
}

/// Writes the grid as plain text, one glyph per cell and one line per row.
pub fn render_text<W: fmt::Write>(grid: &Grid, palette: &Palette, out: &mut W) -> fmt::Result {
    for row in grid.iter_rows() {
        for cell in row {
            out.write_char(palette.glyph(*cell).ch)?;
        }
        out.write_char('\n')?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::ShapeKind;

    #[test]
    fn default_palette_covers_every_label() {
        let palette = Palette::default();
        for cell in Cell::ALL {
            assert_ne!(palette.glyph(cell), UNKNOWN_GLYPH, "{cell:?}");
        }
    }

    #[test]
    fn missing_entry_renders_sentinel() {
        let palette = Palette::default().without(Cell::Blue);
        assert_eq!(palette.glyph(Cell::Blue), UNKNOWN_GLYPH);
        assert_eq!(Palette::blank().glyph(Cell::Empty).ch, '?');
    }

    #[test]
    fn text_has_one_line_per_row() {
        let mut grid = Grid::new(2, 3);
        grid.place(&ShapeKind::Horizontal.shape(), Cell::Green, 1, 0);

        let mut out = String::new();
        render_text(&grid, &Palette::default(), &mut out).unwrap();
        assert_eq!(out, "\u{2588}\u{2588}\u{2588}\n\u{2593}\u{2593}\u{2593}\n");
        assert_eq!(grid.to_string(), out);
    }

    #[test]
    fn unknown_labels_do_not_fault() {
        let mut grid = Grid::new(1, 3);
        grid.place(&ShapeKind::Horizontal.shape(), Cell::Magenta, 0, 0);

        let mut out = String::new();
        let palette = Palette::default().without(Cell::Magenta);
        render_text(&grid, &palette, &mut out).unwrap();
        assert_eq!(out, "???\n");
    }
}
