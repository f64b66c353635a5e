//! Game loop and session driver.
//!
//! The engine owns the timing and ordering of a round (pause, input, gravity,
//! draw) and the replay loop around rounds. All terminal I/O goes through the
//! [`Frontend`] trait so the loop can be driven by a script in tests.

pub mod frontend;
pub mod round;
pub mod session;

pub use tui_blocks_core as core;
pub use tui_blocks_types as types;

pub use frontend::Frontend;
pub use round::{play_round, RoundOutcome};
pub use session::{Session, SessionEnd, SessionReport};
