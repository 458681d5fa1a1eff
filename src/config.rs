use std::env;

use log::warn;

// Demo board size.
pub const GRID_ROWS: usize = 12;
pub const GRID_COLS: usize = 18;
// Smallest board the static demo layout fits on.
pub const DEMO_MIN_ROWS: usize = 12;
pub const DEMO_MIN_COLS: usize = 16;
// Largest board worth drawing in a terminal; bigger values are clamped.
pub const MAX_ROWS: usize = 500;
pub const MAX_COLS: usize = 500;
pub const ROWS_ENV: &str = "CELL_GRID_ROWS";
pub const COLS_ENV: &str = "CELL_GRID_COLS";
pub const CELL_W: usize = 2; // each cell is drawn two characters wide
pub const FOOTER: &str = "Use arrow keys to move and escape or 'q' to quit.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Config {
    pub rows: usize,
    pub cols: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rows: GRID_ROWS,
            cols: GRID_COLS,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_vars(env::var(ROWS_ENV).ok(), env::var(COLS_ENV).ok())
    }

    pub fn from_vars(rows: Option<String>, cols: Option<String>) -> Self {
        Self {
            rows: parse_dim(ROWS_ENV, rows, GRID_ROWS, DEMO_MIN_ROWS, MAX_ROWS),
            cols: parse_dim(COLS_ENV, cols, GRID_COLS, DEMO_MIN_COLS, MAX_COLS),
        }
    }
}

fn parse_dim(name: &str, raw: Option<String>, default: usize, min: usize, max: usize) -> usize {
    let Some(raw) = raw else {
        return default;
    };
    match raw.trim().parse::<usize>() {
        Ok(n) if n > max => {
            warn!("{name}={n} is above the maximum of {max}, clamping");
            max
        }
        Ok(n) if n >= min => n,
        Ok(n) => {
            warn!("{name}={n} is below the minimum of {min}, using {default}");
            default
        }
        Err(e) => {
            warn!("{name}={raw:?} is not a number ({e}), using {default}");
            default
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_vars_use_defaults() {
        assert_eq!(Config::from_vars(None, None), Config::default());
    }

    #[test]
    fn valid_overrides_apply() {
        let cfg = Config::from_vars(Some("20".into()), Some(" 30 ".into()));
        assert_eq!(cfg, Config { rows: 20, cols: 30 });
    }

    #[test]
    fn bad_values_fall_back() {
        let cfg = Config::from_vars(Some("abc".into()), Some("4".into()));
        assert_eq!(cfg, Config::default());
        let cfg = Config::from_vars(Some("0".into()), None);
        assert_eq!(cfg.rows, GRID_ROWS);
    }

    #[test]
    fn huge_values_are_clamped() {
        let cfg = Config::from_vars(Some("1000000".into()), Some("32767".into()));
        assert_eq!(cfg, Config { rows: MAX_ROWS, cols: MAX_COLS });
        // Out of usize range entirely is a parse error, not a clamp.
        let cfg = Config::from_vars(None, Some("99999999999999999999999".into()));
        assert_eq!(cfg.cols, GRID_COLS);
    }
}
