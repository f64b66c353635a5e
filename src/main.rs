//! Terminal block-stacking game (default binary).
//!
//! Reads config from the environment, sets up file logging if asked to, then
//! runs the start screen, rounds and replay prompt until the player leaves.
//! The highest score of the session is printed after the terminal is restored.

use anyhow::Result;
use tracing::{error, info};

use tui_blocks::engine::{Session, SessionReport};
use tui_blocks::frontend::TerminalFrontend;
use tui_blocks::{logging, Config};

fn main() -> Result<()> {
    let config = Config::from_env()?;
    logging::init(&config)?;

    let seed = config.resolve_seed();
    info!(seed, "starting");

    let mut frontend = TerminalFrontend::new();
    frontend.enter()?;

    let result = run(&mut frontend, seed);

    // Always try to restore terminal state.
    let _ = frontend.exit();

    match result {
        Ok(report) => {
            info!(rounds = report.rounds, high_score = report.high_score, end = ?report.end, "session ended");
            println!("HIGHEST SCORE: {}", report.high_score);
            Ok(())
        }
        Err(e) => {
            error!(error = %e, "session failed");
            Err(e)
        }
    }
}

fn run(frontend: &mut TerminalFrontend, seed: u32) -> Result<SessionReport> {
    Session::new(seed).run(frontend)
}
