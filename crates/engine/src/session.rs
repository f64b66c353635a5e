//! Replay loop: start screen and round, then the play-again prompt, repeated
//! for as long as the player answers yes.
//!
//! The session owns the only cross-round state, a [`ScoreBoard`].

use anyhow::Result;
use tracing::{debug, info};

use crate::core::{GameState, ScoreBoard};
use crate::frontend::Frontend;
use crate::round::{play_round, RoundOutcome};
use crate::types::{PromptKey, ReplayAnswer};

/// Odd constant used to spread per-round seeds.
const SEED_STRIDE: u32 = 0x9E37_79B9;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// Answered `n` at the prompt.
    Declined,
    /// Pressed a quit key.
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionReport {
    pub high_score: u32,
    pub rounds: u32,
    pub end: SessionEnd,
}

#[derive(Debug, Clone)]
pub struct Session {
    seed: u32,
    board: ScoreBoard,
}

impl Session {
    pub fn new(seed: u32) -> Self {
        Self {
            seed,
            board: ScoreBoard::new(),
        }
    }

    pub fn board(&self) -> &ScoreBoard {
        &self.board
    }

    /// Seed for the next round; round 0 uses the session seed as-is.
    fn round_seed(&self) -> u32 {
        self.seed
            .wrapping_add(self.board.rounds().wrapping_mul(SEED_STRIDE))
    }

    pub fn run<F: Frontend>(&mut self, frontend: &mut F) -> Result<SessionReport> {
        loop {
            if !frontend.wait_for_start()? {
                return Ok(self.report(SessionEnd::Quit));
            }

            let seed = self.round_seed();
            info!(round = self.board.rounds() + 1, seed, "round started");

            let mut state = GameState::new(seed);
            let outcome = play_round(frontend, &mut state)?;
            let score = outcome.score();
            if self.board.record(score) {
                info!(score, "new high score");
            }

            if let RoundOutcome::Quit { .. } = outcome {
                return Ok(self.report(SessionEnd::Quit));
            }

            match ask_replay(frontend, score, self.board.high_score())? {
                Some(ReplayAnswer::Yes) => info!("replay"),
                Some(ReplayAnswer::No) => {
                    info!("replay declined");
                    return Ok(self.report(SessionEnd::Declined));
                }
                None => return Ok(self.report(SessionEnd::Quit)),
            }
        }
    }

    fn report(&self, end: SessionEnd) -> SessionReport {
        SessionReport {
            high_score: self.board.high_score(),
            rounds: self.board.rounds(),
            end,
        }
    }
}

/// Prompt until the answer is yes or no. `None` means quit.
fn ask_replay<F: Frontend>(
    frontend: &mut F,
    final_score: u32,
    high_score: u32,
) -> Result<Option<ReplayAnswer>> {
    let mut reprompt = false;
    loop {
        match frontend.prompt(final_score, high_score, reprompt)? {
            PromptKey::Quit => return Ok(None),
            PromptKey::Char(c) => {
                if let Some(answer) = ReplayAnswer::from_char(c) {
                    return Ok(Some(answer));
                }
                debug!(key = %c, "unrecognised answer");
            }
            PromptKey::Other => debug!("unrecognised answer"),
        }
        reprompt = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frontend::testing::ScriptedFrontend;

    #[test]
    fn declining_start_plays_nothing() {
        let mut frontend = ScriptedFrontend {
            decline_start_after: Some(0),
            ..Default::default()
        };
        let report = Session::new(1).run(&mut frontend).unwrap();
        assert_eq!(
            report,
            SessionReport {
                high_score: 0,
                rounds: 0,
                end: SessionEnd::Quit
            }
        );
        assert_eq!(frontend.draws, 0);
    }

    #[test]
    fn bad_answers_reprompt_until_yes_or_no() {
        let mut frontend = ScriptedFrontend::default();
        frontend.prompt_keys.extend([
            PromptKey::Char('x'),
            PromptKey::Other,
            PromptKey::Char('Y'),
            PromptKey::Char('n'),
        ]);

        let report = Session::new(5).run(&mut frontend).unwrap();
        assert_eq!(report.rounds, 2);
        assert_eq!(report.end, SessionEnd::Declined);

        let flags: Vec<bool> = frontend.prompts.iter().map(|p| p.2).collect();
        assert_eq!(flags, vec![false, true, true, false]);
        // The start screen comes back before every round.
        assert_eq!(frontend.starts, 2);
    }

    #[test]
    fn quit_at_second_start_screen_ends_session() {
        let mut frontend = ScriptedFrontend {
            decline_start_after: Some(1),
            ..Default::default()
        };
        frontend.prompt_keys.push_back(PromptKey::Char('y'));

        let report = Session::new(3).run(&mut frontend).unwrap();
        assert_eq!(report.rounds, 1);
        assert_eq!(report.end, SessionEnd::Quit);
        assert_eq!(frontend.starts, 2);
    }

    #[test]
    fn quit_at_prompt_ends_session() {
        let mut frontend = ScriptedFrontend::default();
        frontend.prompt_keys.push_back(PromptKey::Quit);

        let report = Session::new(5).run(&mut frontend).unwrap();
        assert_eq!(report.rounds, 1);
        assert_eq!(report.end, SessionEnd::Quit);
    }

    #[test]
    fn rounds_use_distinct_seeds() {
        let mut session = Session::new(42);
        let first = session.round_seed();
        session.board.record(0);
        assert_ne!(session.round_seed(), first);
        assert_eq!(first, 42);
    }
}
