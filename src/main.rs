//! Piece queue + reserve menu (default binary).
//!
//! Reads menu choices from stdin and prints the queue and reserve after every
//! action. See [`tetris_reserve::config`] for the environment variables and
//! flags it understands.

use std::io;

use anyhow::Result;
use tracing::info;

use tetris_reserve::app;
use tetris_reserve::config::AppConfig;
use tetris_reserve::core::{RandomGenerator, Session};
use tetris_reserve::input::MenuReader;
use tetris_reserve::logging;
use tetris_reserve::term::TextRenderer;

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = AppConfig::from_env().apply_args(&args)?;
    logging::init(&config.log_filter)?;

    let seed = config.resolve_seed();
    info!(seed, color = config.color, "starting");

    let mut session = Session::new(RandomGenerator::new(seed));
    let stdin = io::stdin();
    let mut input = MenuReader::new(stdin.lock());
    let mut renderer = TextRenderer::stdout(config.color);

    app::run(&mut session, &mut input, &mut renderer)?;
    Ok(())
}
