//! TUI Blocks (workspace facade crate).
//!
//! Re-exports the workspace crates as `tui_blocks::{core,engine,input,term,types}`
//! and hosts the pieces the binary wires together: environment config, log
//! setup and the crossterm-backed [`frontend::TerminalFrontend`].

pub mod config;
pub mod frontend;
pub mod logging;

pub use tui_blocks_core as core;
pub use tui_blocks_engine as engine;
pub use tui_blocks_input as input;
pub use tui_blocks_term as term;
pub use tui_blocks_types as types;

pub use config::Config;
