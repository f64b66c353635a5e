//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`crate::types::InputCommand`] and
//! [`crate::types::PromptKey`], and drains the terminal's event queue without
//! blocking so the game loop never waits on the keyboard.

pub mod drain;
pub mod map;

pub use tui_blocks_types as types;

pub use drain::{drain_events, drain_pending};
pub use map::{handle_key_event, map_play_key, map_prompt_key, should_quit};
