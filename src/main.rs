use anyhow::Result;
use log::info;

use cell_grid::app;
use cell_grid::config::Config;

fn main() -> Result<()> {
    // Logs go to stderr; redirect it (`2>grid.log`) to keep the board clean.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = Config::from_env();
    info!("starting with {}x{} grid", config.rows, config.cols);
    app::run(config)
}
