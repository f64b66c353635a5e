//! The seam between the game loop and the terminal.

use std::time::Duration;

use anyhow::Result;

use crate::core::GameState;
use crate::types::{InputCommand, PromptKey};

/// Everything the loop needs from the outside world.
pub trait Frontend {
    /// Show the start screen and block until a key is pressed.
    ///
    /// Returns `false` if the player asked to quit instead.
    fn wait_for_start(&mut self) -> Result<bool>;

    /// Append every pending command to `out` without blocking.
    fn drain_commands(&mut self, out: &mut Vec<InputCommand>) -> Result<()>;

    /// Present the current state of a round.
    fn draw(&mut self, state: &GameState) -> Result<()>;

    /// Show the play-again screen and block for one key.
    fn prompt(&mut self, final_score: u32, high_score: u32, reprompt: bool) -> Result<PromptKey>;

    fn pause(&mut self, duration: Duration) -> Result<()>;
}

#[cfg(test)]
pub(crate) mod testing {
    use std::collections::VecDeque;

    use super::*;

    /// Frontend fed from fixed scripts; records what the loop asked of it.
    #[derive(Default)]
    pub struct ScriptedFrontend {
        /// Commands returned per drain, one entry per tick.
        pub ticks: VecDeque<Vec<InputCommand>>,
        /// Send `Quit` once `ticks` runs dry.
        pub quit_when_idle: bool,
        pub prompt_keys: VecDeque<PromptKey>,
        /// Decline the start screen once this many have been accepted.
        pub decline_start_after: Option<usize>,
        pub starts: usize,

        pub pauses: Vec<Duration>,
        pub draws: usize,
        pub clearing_draws: usize,
        pub prompts: Vec<(u32, u32, bool)>,
    }

    impl Frontend for ScriptedFrontend {
        fn wait_for_start(&mut self) -> Result<bool> {
            let accepted = self.starts;
            self.starts += 1;
            Ok(self.decline_start_after != Some(accepted))
        }

        fn drain_commands(&mut self, out: &mut Vec<InputCommand>) -> Result<()> {
            match self.ticks.pop_front() {
                Some(cmds) => out.extend(cmds),
                None if self.quit_when_idle => out.push(InputCommand::Quit),
                None => {}
            }
            Ok(())
        }

        fn draw(&mut self, state: &GameState) -> Result<()> {
            self.draws += 1;
            if state.is_clearing() {
                self.clearing_draws += 1;
            }
            Ok(())
        }

        fn prompt(&mut self, final_score: u32, high_score: u32, reprompt: bool) -> Result<PromptKey> {
            self.prompts.push((final_score, high_score, reprompt));
            Ok(self.prompt_keys.pop_front().unwrap_or(PromptKey::Quit))
        }

        fn pause(&mut self, duration: Duration) -> Result<()> {
            self.pauses.push(duration);
            Ok(())
        }
    }
}
