//! Demo driver walks: the player slides around and stops at walls and shapes.

use crossterm::event::KeyCode;

use cell_grid::config::{GRID_COLS, GRID_ROWS};
use cell_grid::demo::Demo;
use cell_grid::input::action_for_key;
use cell_grid::{render_text, Cell, Palette};

fn press(demo: &mut Demo, keys: &[KeyCode]) {
    for key in keys {
        demo.step(action_for_key(*key));
    }
}

#[test]
fn test_player_stops_at_x_shape() {
    let mut demo = Demo::new(GRID_ROWS, GRID_COLS);
    // Drop below the blue bar on row 1 first, then run right.
    press(&mut demo, &[KeyCode::Down, KeyCode::Down]);
    assert_eq!(demo.anchor(), (2, 0));
    press(&mut demo, &[KeyCode::Right; 12]);
    // One more step would put the T stem on the X corner at (3, 10).
    assert_eq!(demo.anchor(), (2, 8));
    assert_eq!(demo.grid().get(3, 9), Some(Cell::Red));
    assert_eq!(demo.grid().count(Cell::Red), 4);
    assert_eq!(demo.grid().count(Cell::Magenta), 5);
}

#[test]
fn test_player_never_overwrites_obstacles() {
    let mut demo = Demo::new(GRID_ROWS, GRID_COLS);
    let keys = [
        KeyCode::Right,
        KeyCode::Down,
        KeyCode::Down,
        KeyCode::Down,
        KeyCode::Down,
        KeyCode::Right,
        KeyCode::Right,
        KeyCode::Char('x'),
        KeyCode::Down,
        KeyCode::Down,
        KeyCode::Down,
        KeyCode::Right,
        KeyCode::Right,
        KeyCode::Right,
        KeyCode::Right,
        KeyCode::Up,
        KeyCode::Left,
    ];
    for key in keys {
        demo.step(action_for_key(key));
        let grid = demo.grid();
        assert_eq!(grid.count(Cell::Red), 4, "after {key:?}");
        assert_eq!(grid.count(Cell::Magenta), 5, "after {key:?}");
        assert_eq!(grid.count(Cell::Green), 3, "after {key:?}");
        assert_eq!(grid.count(Cell::Blue), 6, "after {key:?}");
    }
}

#[test]
fn test_text_render_of_start_board() {
    let demo = Demo::new(GRID_ROWS, GRID_COLS);
    let mut out = String::new();
    render_text(demo.grid(), &Palette::default(), &mut out).unwrap();

    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), GRID_ROWS);
    assert!(lines.iter().all(|l| l.chars().count() == GRID_COLS));
    assert!(lines[0].starts_with("\u{2591}\u{2591}\u{2591}\u{2588}"));
    assert!(lines[5].starts_with("\u{2593}\u{2593}\u{2593}\u{2588}"));
}
