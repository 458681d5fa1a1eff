use crossterm::event::KeyCode;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    /// Shift the player by `(rows, cols)`.
    Move(i32, i32),
    Quit,
    /// Any other key. Still triggers a remove/re-place at the same anchor.
    Noop,
}

impl Action {
    pub fn delta(self) -> (i32, i32) {
        match self {
            Action::Move(dr, dc) => (dr, dc),
            Action::Quit | Action::Noop => (0, 0),
        }
    }
}

pub fn action_for_key(code: KeyCode) -> Action {
    match code {
        KeyCode::Left => Action::Move(0, -1),
        KeyCode::Right => Action::Move(0, 1),
        KeyCode::Up => Action::Move(-1, 0),
        KeyCode::Down => Action::Move(1, 0),
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => Action::Quit,
        _ => Action::Noop,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrows_map_to_deltas() {
        assert_eq!(action_for_key(KeyCode::Left).delta(), (0, -1));
        assert_eq!(action_for_key(KeyCode::Right).delta(), (0, 1));
        assert_eq!(action_for_key(KeyCode::Up).delta(), (-1, 0));
        assert_eq!(action_for_key(KeyCode::Down).delta(), (1, 0));
    }

    #[test]
    fn quit_keys() {
        assert_eq!(action_for_key(KeyCode::Esc), Action::Quit);
        assert_eq!(action_for_key(KeyCode::Char('q')), Action::Quit);
        assert_eq!(action_for_key(KeyCode::Char('Q')), Action::Quit);
    }

    #[test]
    fn other_keys_are_noop() {
        assert_eq!(action_for_key(KeyCode::Char(' ')), Action::Noop);
        assert_eq!(action_for_key(KeyCode::Enter), Action::Noop);
        assert_eq!(Action::Noop.delta(), (0, 0));
    }
}
