//! Game state module - one round of play
//!
//! This module ties together the field, the piece catalog and the RNG.
//! A round moves through three phases:
//!
//! - **Falling**: gravity and input move the active piece
//! - **Clearing**: a piece locked and completed rows are marked; rows are purged one
//!   at a time so a frontend can show each step
//! - **GameOver**: a freshly spawned piece did not fit
//!
//! The round owns its score. Nothing here sleeps or does I/O; the caller decides
//! how long a tick lasts (see [`GameState::tick_ms`]).

use arrayvec::ArrayVec;

use crate::field::Field;
use crate::pieces::get_shape;
use crate::rng::SimpleRng;
use crate::snapshot::GameSnapshot;
use crate::types::*;

/// Active falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActivePiece {
    pub kind: PieceKind,
    pub rotation: Rotation,
    pub x: i8,
    pub y: i8,
}

impl ActivePiece {
    /// Create a piece at the spawn anchor with no rotation
    pub fn spawn(kind: PieceKind) -> Self {
        Self {
            kind,
            rotation: Rotation::Deg0,
            x: SPAWN_X,
            y: SPAWN_Y,
        }
    }

    /// Get the shape (mino offsets) for current rotation
    pub fn shape(&self) -> [(i8, i8); 4] {
        get_shape(self.kind, self.rotation)
    }

    /// Absolute field coordinates of the four minos
    pub fn cells(&self) -> [(i8, i8); 4] {
        self.shape().map(|(dx, dy)| (self.x + dx, self.y + dy))
    }

    /// Check the piece against the field's collision checker
    pub fn fits(&self, field: &Field) -> bool {
        field.fits(self.kind, self.rotation, self.x, self.y)
    }
}

/// Round phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Falling,
    Clearing,
    GameOver,
}

/// What a single gravity tick did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TickEvent {
    /// The active piece moved down one row
    Fell,
    /// The piece locked; `full_rows` (top to bottom) are now pending clear.
    /// When empty, the next piece has already spawned.
    Locked { full_rows: ArrayVec<u8, 4> },
    /// A tick during `Clearing` purged the remaining rows and respawned
    Cleared { rows: u8 },
    /// The round is over
    GameOver,
}

/// Complete state of one round
#[derive(Debug, Clone)]
pub struct GameState {
    field: Field,
    active: Option<ActivePiece>,
    next: PieceKind,
    rng: SimpleRng,
    phase: Phase,
    /// Rows marked `Cleared`, top to bottom
    pending_rows: ArrayVec<u8, 4>,
    score: u32,
    /// Difficulty counter; shortens the tick, capped at `SPEED_COUNTER_MAX`
    speed_counter: u32,
    pieces_locked: u32,
    rows_cleared: u32,
}

impl GameState {
    /// Start a round on an empty field with the given RNG seed
    pub fn new(seed: u32) -> Self {
        let mut rng = SimpleRng::new(seed);
        let current = rng.next_piece();
        let next = rng.next_piece();
        Self::from_parts(Field::new(), current, next, rng)
    }

    /// Start a round from an explicit field and piece pair.
    ///
    /// `current` spawns immediately; if it does not fit the round is already over.
    pub fn from_parts(field: Field, current: PieceKind, next: PieceKind, rng: SimpleRng) -> Self {
        let mut state = Self {
            field,
            active: None,
            next,
            rng,
            phase: Phase::Falling,
            pending_rows: ArrayVec::new(),
            score: 0,
            speed_counter: 0,
            pieces_locked: 0,
            rows_cleared: 0,
        };
        state.place(current);
        state
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    pub fn is_clearing(&self) -> bool {
        self.phase == Phase::Clearing
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn speed_counter(&self) -> u32 {
        self.speed_counter
    }

    pub fn pieces_locked(&self) -> u32 {
        self.pieces_locked
    }

    pub fn rows_cleared(&self) -> u32 {
        self.rows_cleared
    }

    pub fn next_piece(&self) -> PieceKind {
        self.next
    }

    pub fn active(&self) -> Option<ActivePiece> {
        self.active
    }

    pub fn field(&self) -> &Field {
        &self.field
    }

    pub fn pending_rows(&self) -> &[u8] {
        &self.pending_rows
    }

    /// Current tick length: shrinks by `TICK_STEP_MS` per lock down to `MIN_TICK_MS`
    pub fn tick_ms(&self) -> u32 {
        BASE_TICK_MS - TICK_STEP_MS * self.speed_counter
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.field.write_grid(&mut out.field);
        out.active = self.active;
        out.next = self.next;
        out.score = self.score;
        out.clearing = self.is_clearing();
        out.game_over = self.game_over();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Put `kind` at the spawn anchor, ending the round if it collides
    fn place(&mut self, kind: PieceKind) -> bool {
        let piece = ActivePiece::spawn(kind);
        if !piece.fits(&self.field) {
            self.active = None;
            self.phase = Phase::GameOver;
            return false;
        }
        self.active = Some(piece);
        self.phase = Phase::Falling;
        true
    }

    /// Next piece becomes current and a new next piece is drawn
    fn respawn(&mut self) -> bool {
        let kind = self.next;
        self.next = self.rng.next_piece();
        self.place(kind)
    }

    /// Try to move the active piece; the move is discarded if it does not fit
    pub fn try_move(&mut self, dx: i8, dy: i8) -> bool {
        let Some(active) = self.active else {
            return false;
        };
        if self.phase != Phase::Falling {
            return false;
        }

        let moved = ActivePiece {
            x: active.x + dx,
            y: active.y + dy,
            ..active
        };
        if moved.fits(&self.field) {
            self.active = Some(moved);
            return true;
        }
        false
    }

    /// Try to rotate the active piece 90° clockwise in place (no kicks)
    pub fn try_rotate(&mut self) -> bool {
        let Some(active) = self.active else {
            return false;
        };
        if self.phase != Phase::Falling {
            return false;
        }

        let rotated = ActivePiece {
            rotation: active.rotation.rotate_cw(),
            ..active
        };
        if rotated.fits(&self.field) {
            self.active = Some(rotated);
            return true;
        }
        false
    }

    /// Apply a game action; rejected actions are silent no-ops
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft => self.try_move(-1, 0),
            GameAction::MoveRight => self.try_move(1, 0),
            GameAction::SoftDrop => self.try_move(0, 1),
            GameAction::RotateCw => self.try_rotate(),
        }
    }

    /// Burn the active piece in, bump difficulty and mark full rows
    fn lock_piece(&mut self) -> ArrayVec<u8, 4> {
        let Some(active) = self.active.take() else {
            return ArrayVec::new();
        };

        self.field
            .lock_piece(active.kind, active.rotation, active.x, active.y);
        self.pieces_locked += 1;
        if self.speed_counter < SPEED_COUNTER_MAX {
            self.speed_counter += 1;
        }

        let full_rows = self.field.mark_full_rows(active.y);
        if full_rows.is_empty() {
            self.respawn();
        } else {
            self.pending_rows = full_rows.clone();
            self.phase = Phase::Clearing;
        }
        full_rows
    }

    /// Remove the topmost pending row, award its score and, after the last
    /// pending row, spawn the next piece.
    ///
    /// Returns the removed row, or `None` outside the clearing phase.
    pub fn clear_next_row(&mut self) -> Option<u8> {
        if self.phase != Phase::Clearing || self.pending_rows.is_empty() {
            return None;
        }

        let row = self.pending_rows.remove(0);
        self.field.clear_row(row);
        self.score += ROW_CLEAR_SCORE;
        self.rows_cleared += 1;

        if self.pending_rows.is_empty() {
            self.respawn();
        }
        Some(row)
    }

    /// One gravity step
    pub fn tick(&mut self) -> TickEvent {
        match self.phase {
            Phase::GameOver => TickEvent::GameOver,
            Phase::Clearing => {
                let mut rows = 0u8;
                while self.clear_next_row().is_some() {
                    rows += 1;
                }
                if self.game_over() {
                    TickEvent::GameOver
                } else {
                    TickEvent::Cleared { rows }
                }
            }
            Phase::Falling => {
                if self.try_move(0, 1) {
                    return TickEvent::Fell;
                }
                let full_rows = self.lock_piece();
                if self.game_over() {
                    TickEvent::GameOver
                } else {
                    TickEvent::Locked { full_rows }
                }
            }
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}
