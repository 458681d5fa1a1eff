use ratatui::prelude::*;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

use crate::config::{CELL_W, FOOTER};
use crate::demo::Demo;
use crate::grid::Grid;
use crate::render::Palette;

const TITLE: &str = "CELL GRID";

/// Terminal size needed to show the whole board plus border and footer.
/// Saturates at `u16::MAX` so oversized boards always ask for a resize.
pub fn min_area(grid: &Grid) -> (u16, u16) {
    let w = grid
        .cols()
        .saturating_mul(CELL_W)
        .max(FOOTER.chars().count())
        .saturating_add(2);
    let h = grid.rows().saturating_add(1 + 2);
    (to_u16(w), to_u16(h))
}

fn to_u16(n: usize) -> u16 {
    u16::try_from(n).unwrap_or(u16::MAX)
}

pub fn draw_demo(frame: &mut Frame, demo: &Demo, palette: &Palette) {
    let area = frame.size();
    let (min_w, min_h) = min_area(demo.grid());

    if area.width < min_w || area.height < min_h {
        let msg = Paragraph::new(format!("RESIZE PANE (min {}x{})", min_w, min_h))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title(TITLE));
        frame.render_widget(msg, area);
        return;
    }

    // Outer "cabinet" frame.
    let cabinet = Block::default()
        .title(TITLE)
        .border_type(BorderType::Thick)
        .borders(Borders::ALL)
        .title_alignment(Alignment::Left);
    let inner = cabinet.inner(area);
    frame.render_widget(cabinet, area);

    let grid = demo.grid();
    let stack = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(to_u16(grid.rows())),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(inner);

    let board_rect = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(to_u16(grid.cols() * CELL_W)),
            Constraint::Min(0),
        ])
        .split(stack[1])[1];

    frame.render_widget(Paragraph::new(grid_lines(grid, palette)), board_rect);

    let footer = Paragraph::new(FOOTER).alignment(Alignment::Center);
    frame.render_widget(footer, stack[2]);
}

fn grid_lines(grid: &Grid, palette: &Palette) -> Vec<Line<'static>> {
    grid.iter_rows()
        .map(|row| {
            let spans: Vec<Span> = row
                .iter()
                .map(|cell| {
                    let glyph = palette.glyph(*cell);
                    let text: String = std::iter::repeat(glyph.ch).take(CELL_W).collect();
                    Span::styled(text, Style::default().fg(glyph.color))
                })
                .collect();
            Line::from(spans)
        })
        .collect()
}
