//! Process-scoped score accumulator.
//!
//! A round owns its own score; the replay loop owns one `ScoreBoard` and feeds it
//! each finished round. Nothing is persisted.

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoreBoard {
    high_score: u32,
    rounds: u32,
}

impl ScoreBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a finished round. Returns true if it set a new high score.
    pub fn record(&mut self, score: u32) -> bool {
        self.rounds += 1;
        if score > self.high_score {
            self.high_score = score;
            return true;
        }
        false
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    pub fn rounds(&self) -> u32 {
        self.rounds
    }
}
