//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer. It renders into a plain
//! framebuffer which is then flushed to the terminal as a full redraw.
//!
//! - `game_view` draws the field, the active piece and the side panel
//! - `screens` draws the start screen and the play-again prompt
//! - `renderer` owns the terminal (raw mode, alternate screen)

pub mod fb;
pub mod game_view;
pub mod renderer;
pub mod screens;

pub use tui_blocks_core as core;
pub use tui_blocks_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::{encode_full_into, TerminalRenderer};
pub use screens::{render_game_over, render_start};
