//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the rules of the game: the piece catalog, rotation, the
//! walled field with its collision checker and line-clear engine, and the
//! per-round state machine. It has **zero dependencies** on terminals or timing:
//!
//! - **Deterministic**: the same seed produces the same piece sequence
//! - **Testable**: every rule is reachable without a terminal
//! - **Allocation-free**: fixed-size arrays and `ArrayVec` on the hot path
//!
//! # Module Structure
//!
//! - [`pieces`]: 4x4 piece masks and the rotation mapper
//! - [`field`]: 12x18 walled field, collision checks, row marking and removal
//! - [`game_state`]: active piece, next piece, score, difficulty, phases
//! - [`rng`]: uniform random piece selection
//! - [`score_board`]: high score across rounds of one process
//! - [`snapshot`]: per-frame copy of what a view draws
//!
//! # Example
//!
//! ```
//! use tui_blocks_core::{GameState, TickEvent};
//! use tui_blocks_types::GameAction;
//!
//! let mut game = GameState::new(12345);
//!
//! // Inputs are no-ops when the move does not fit.
//! game.apply_action(GameAction::MoveLeft);
//! game.apply_action(GameAction::RotateCw);
//!
//! // Gravity.
//! let event = game.tick();
//! assert!(matches!(event, TickEvent::Fell | TickEvent::Locked { .. }));
//! assert_eq!(game.score(), 0);
//! ```

pub mod field;
pub mod game_state;
pub mod pieces;
pub mod rng;
pub mod score_board;
pub mod snapshot;

pub use tui_blocks_types as types;

// Re-export commonly used types for convenience
pub use field::Field;
pub use game_state::{ActivePiece, GameState, Phase, TickEvent};
pub use pieces::{get_shape, piece_mask, rotate, Mask4};
pub use rng::SimpleRng;
pub use score_board::ScoreBoard;
pub use snapshot::GameSnapshot;
