//! Snapshot types - a copy of everything a frontend draws in one frame.
//!
//! Views render from a snapshot rather than from `GameState`, so a frame can be
//! built (or tweaked in tests) without touching the round itself.

use crate::game_state::ActivePiece;
use crate::types::{FieldCell, PieceKind, FIELD_HEIGHT, FIELD_WIDTH};

pub type FieldGrid = [[FieldCell; FIELD_WIDTH as usize]; FIELD_HEIGHT as usize];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    pub field: FieldGrid,
    pub active: Option<ActivePiece>,
    pub next: PieceKind,
    pub score: u32,
    pub clearing: bool,
    pub game_over: bool,
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            field: [[FieldCell::Empty; FIELD_WIDTH as usize]; FIELD_HEIGHT as usize],
            active: None,
            next: PieceKind::I,
            score: 0,
            clearing: false,
            game_over: false,
        }
    }
}

impl GameSnapshot {
    /// Field cell with the active piece drawn on top
    pub fn cell_at(&self, x: u8, y: u8) -> FieldCell {
        if let Some(active) = self.active {
            if active
                .cells()
                .iter()
                .any(|&(cx, cy)| cx == x as i8 && cy == y as i8)
            {
                return FieldCell::Piece(active.kind);
            }
        }
        self.field
            .get(y as usize)
            .and_then(|row| row.get(x as usize))
            .copied()
            .unwrap_or(FieldCell::Empty)
    }
}
