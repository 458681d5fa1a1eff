use std::io::{stdout, Stdout};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen};
use log::{debug, info};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use crate::config::Config;
use crate::demo::Demo;
use crate::input::{action_for_key, Action};
use crate::render::Palette;
use crate::ui::draw_demo;

type Term = Terminal<CrosstermBackend<Stdout>>;

pub fn run(config: Config) -> Result<()> {
    let mut tui = TuiGuard::new().context("failed to set up the terminal")?;
    run_loop(tui.terminal_mut(), config)
}

fn run_loop(terminal: &mut Term, config: Config) -> Result<()> {
    let mut demo = Demo::new(config.rows, config.cols);
    let palette = Palette::default();

    loop {
        terminal.draw(|frame| draw_demo(frame, &demo, &palette))?;

        // Block until the next key; no timers run in between.
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        let action = action_for_key(key.code);
        debug!("key {:?} -> {:?}", key.code, action);
        if action == Action::Quit {
            info!("quit requested at {:?}", demo.anchor());
            break;
        }
        demo.step(action);
    }
    Ok(())
}

struct TuiGuard {
    terminal: Term,
}

impl TuiGuard {
    fn new() -> Result<Self> {
        enable_raw_mode()?;
        let mut stdout = stdout();
        undo_on_err(execute!(stdout, EnterAlternateScreen), || {
            let _ = disable_raw_mode();
        })?;
        // From here on the guard's Drop restores both raw mode and the screen.
        let backend = CrosstermBackend::new(stdout);
        let terminal = undo_on_err(Terminal::new(backend), || {
            let _ = disable_raw_mode();
            let _ = execute!(std::io::stdout(), LeaveAlternateScreen);
        })?;
        let mut guard = Self { terminal };
        guard.terminal.hide_cursor()?;
        Ok(guard)
    }

    fn terminal_mut(&mut self) -> &mut Term {
        &mut self.terminal
    }
}

/// Runs `undo` when `result` is an error, then hands the result back.
fn undo_on_err<T, E>(
    result: std::result::Result<T, E>,
    undo: impl FnOnce(),
) -> std::result::Result<T, E> {
    if result.is_err() {
        undo();
    }
    result
}

impl Drop for TuiGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}
