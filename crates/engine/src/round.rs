//! One round: from the first spawn until game over or a quit key.
//!
//! Each tick runs in a fixed order:
//! 1. pause for the current tick length
//! 2. gravity (fall, or lock and mark full rows)
//! 3. drain and apply every queued command, in arrival order
//! 4. draw
//!
//! When a lock marks rows, the marked frame is drawn and the rows are removed
//! one at a time with `LINE_CLEAR_PAUSE_MS` between them. The next piece
//! spawns before step 3, so input read in the same tick already moves it.

use std::time::Duration;

use anyhow::Result;
use tracing::{debug, info};

use crate::core::{GameState, TickEvent};
use crate::frontend::Frontend;
use crate::types::{InputCommand, LINE_CLEAR_PAUSE_MS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundOutcome {
    /// The next piece could not spawn.
    GameOver { score: u32 },
    /// The player pressed a quit key.
    Quit { score: u32 },
}

impl RoundOutcome {
    pub fn score(self) -> u32 {
        match self {
            RoundOutcome::GameOver { score } | RoundOutcome::Quit { score } => score,
        }
    }
}

pub fn play_round<F: Frontend>(frontend: &mut F, state: &mut GameState) -> Result<RoundOutcome> {
    let mut commands: Vec<InputCommand> = Vec::with_capacity(8);
    frontend.draw(state)?;

    loop {
        frontend.pause(Duration::from_millis(u64::from(state.tick_ms())))?;

        match state.tick() {
            TickEvent::Fell | TickEvent::Cleared { .. } => {}
            TickEvent::Locked { full_rows } => {
                debug!(
                    pieces = state.pieces_locked(),
                    tick_ms = state.tick_ms(),
                    spawned = ?state.active().map(|p| p.kind.letter()),
                    "piece locked"
                );
                if !full_rows.is_empty() {
                    frontend.draw(state)?;
                    clear_marked_rows(frontend, state)?;
                }
            }
            TickEvent::GameOver => {}
        }

        if state.game_over() {
            frontend.draw(state)?;
            info!(
                score = state.score(),
                pieces = state.pieces_locked(),
                rows = state.rows_cleared(),
                "game over"
            );
            return Ok(RoundOutcome::GameOver {
                score: state.score(),
            });
        }

        commands.clear();
        frontend.drain_commands(&mut commands)?;
        for command in commands.drain(..) {
            match command {
                InputCommand::Quit => {
                    info!(score = state.score(), "round quit");
                    return Ok(RoundOutcome::Quit {
                        score: state.score(),
                    });
                }
                InputCommand::Action(action) => {
                    let applied = state.apply_action(action);
                    debug!(action = action.as_str(), applied, "action");
                }
            }
        }

        frontend.draw(state)?;
    }
}

/// Remove the pending rows one by one so each removal is visible.
fn clear_marked_rows<F: Frontend>(frontend: &mut F, state: &mut GameState) -> Result<()> {
    let pause = Duration::from_millis(u64::from(LINE_CLEAR_PAUSE_MS));
    while state.is_clearing() {
        frontend.pause(pause)?;
        let Some(row) = state.clear_next_row() else {
            break;
        };
        info!(row, score = state.score(), "row cleared");
        if state.is_clearing() {
            frontend.draw(state)?;
        }
    }
    Ok(())
}
