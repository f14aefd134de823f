//! Terminal Snake runner (default binary).
//!
//! Fixed 30x20 board, 120 ms ticks, no command-line options. Logging goes to
//! stderr and is off unless `RUST_LOG` asks for it, so the frame on stdout
//! stays clean.

use anyhow::Result;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use tracing::info;
use tracing_subscriber::EnvFilter;

use tui_snake::app::{self, RunOptions};
use tui_snake::core::GameState;
use tui_snake::term::{CrosstermDriver, TerminalDriver};
use tui_snake::types::GameConfig;

fn main() -> Result<()> {
    init_tracing();

    let config = GameConfig::default();
    let mut game = GameState::new(config, SmallRng::from_entropy());

    let mut term = CrosstermDriver::new();
    term.enter_raw_mode();

    let result = app::run(&mut term, &mut game, &RunOptions::new(config.tick()));

    let farewell = term.write_line("").and_then(|_| term.write_line("Bye."));
    // Always try to restore terminal state.
    term.restore();

    let summary = result?;
    farewell?;
    info!(
        frames = summary.frames,
        restarts = summary.restarts,
        score = summary.final_score,
        "exited"
    );
    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("off"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
