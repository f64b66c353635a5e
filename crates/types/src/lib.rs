//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, the session loop).
//!
//! # Field Dimensions
//!
//! - **Width**: 12 columns (indexed 0-11), columns 0 and 11 are walls
//! - **Height**: 18 rows (indexed 0-17), row 17 is the floor wall
//! - **Spawn anchor**: (6, 0), top-left corner of the piece's 4x4 mask
//!
//! # Timing Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `BASE_TICK_MS` | 500 | Tick length of a fresh round |
//! | `TICK_STEP_MS` | 10 | Tick shortening per locked piece |
//! | `SPEED_COUNTER_MAX` | 40 | Locks after which the tick stops shrinking |
//! | `LINE_CLEAR_PAUSE_MS` | 500 | Pause after each removed row |
//!
//! # Examples
//!
//! ```
//! use tui_blocks_types::{PieceKind, Rotation, ReplayAnswer, FIELD_WIDTH, FIELD_HEIGHT};
//!
//! let piece = PieceKind::from_index(0).unwrap();
//! assert_eq!(piece, PieceKind::I);
//!
//! // Rotation values wrap modulo 4, negatives included.
//! assert_eq!(Rotation::from_index(5), Rotation::Deg90);
//! assert_eq!(Rotation::from_index(-1), Rotation::Deg270);
//!
//! assert_eq!(ReplayAnswer::from_char('Y'), Some(ReplayAnswer::Yes));
//!
//! assert_eq!(FIELD_WIDTH, 12);
//! assert_eq!(FIELD_HEIGHT, 18);
//! ```

/// Field width in cells, wall columns included
pub const FIELD_WIDTH: u8 = 12;

/// Field height in cells, floor row included
pub const FIELD_HEIGHT: u8 = 18;

/// Spawn anchor column (top-middle of the field)
pub const SPAWN_X: i8 = (FIELD_WIDTH / 2) as i8;

/// Spawn anchor row
pub const SPAWN_Y: i8 = 0;

/// Tick length at the start of a round
pub const BASE_TICK_MS: u32 = 500;

/// Tick shortening applied per locked piece
pub const TICK_STEP_MS: u32 = 10;

/// Number of locks after which the tick length stops shrinking
pub const SPEED_COUNTER_MAX: u32 = 40;

/// Shortest tick the game ever runs at (100ms)
pub const MIN_TICK_MS: u32 = BASE_TICK_MS - TICK_STEP_MS * SPEED_COUNTER_MAX;

/// Pause after each removed row so the clear is visible
pub const LINE_CLEAR_PAUSE_MS: u32 = 500;

/// Points awarded once per cleared row
pub const ROW_CLEAR_SCORE: u32 = 25;


/// The seven piece kinds, in catalog order
///
/// The catalog index doubles as the piece identity used for colouring:
/// - **I** (0): straight bar
/// - **T** (1)
/// - **O** (2): 2x2 square
/// - **Z** (3)
/// - **S** (4): mirror of Z
/// - **L** (5)
/// - **J** (6): mirror of L
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    T,
    O,
    Z,
    S,
    L,
    J,
}

impl PieceKind {
    /// All kinds in catalog order
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::T,
        PieceKind::O,
        PieceKind::Z,
        PieceKind::S,
        PieceKind::L,
        PieceKind::J,
    ];

    /// Catalog index (0-6)
    pub fn index(self) -> u8 {
        match self {
            PieceKind::I => 0,
            PieceKind::T => 1,
            PieceKind::O => 2,
            PieceKind::Z => 3,
            PieceKind::S => 4,
            PieceKind::L => 5,
            PieceKind::J => 6,
        }
    }

    /// Look up a kind by catalog index
    pub fn from_index(index: u8) -> Option<Self> {
        Self::ALL.get(index as usize).copied()
    }

    /// Single uppercase letter, used in logs
    pub fn letter(self) -> char {
        match self {
            PieceKind::I => 'I',
            PieceKind::T => 'T',
            PieceKind::O => 'O',
            PieceKind::Z => 'Z',
            PieceKind::S => 'S',
            PieceKind::L => 'L',
            PieceKind::J => 'J',
        }
    }
}

/// Clockwise rotation in 90° steps
///
/// The cycle goes: Deg0 → Deg90 → Deg180 → Deg270 → Deg0
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Rotation {
    #[default]
    Deg0,
    Deg90,
    Deg180,
    Deg270,
}

impl Rotation {
    /// Map any integer rotation count onto one of the four states (modulo 4)
    pub fn from_index(r: i32) -> Self {
        match r.rem_euclid(4) {
            0 => Rotation::Deg0,
            1 => Rotation::Deg90,
            2 => Rotation::Deg180,
            _ => Rotation::Deg270,
        }
    }

    /// Number of clockwise quarter turns (0-3)
    pub fn index(self) -> u8 {
        match self {
            Rotation::Deg0 => 0,
            Rotation::Deg90 => 1,
            Rotation::Deg180 => 2,
            Rotation::Deg270 => 3,
        }
    }

    /// Rotate clockwise (90°)
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_blocks_types::Rotation;
    ///
    /// assert_eq!(Rotation::Deg0.rotate_cw(), Rotation::Deg90);
    /// assert_eq!(Rotation::Deg270.rotate_cw(), Rotation::Deg0);
    /// ```
    pub fn rotate_cw(self) -> Self {
        match self {
            Rotation::Deg0 => Rotation::Deg90,
            Rotation::Deg90 => Rotation::Deg180,
            Rotation::Deg180 => Rotation::Deg270,
            Rotation::Deg270 => Rotation::Deg0,
        }
    }

    /// Source cell inside an unrotated 4x4 mask for target cell `(px, py)`.
    ///
    /// Each arm is one named transform of the 4x4 index space.
    pub fn source_cell(self, px: u8, py: u8) -> (u8, u8) {
        match self {
            Rotation::Deg0 => (px, py),
            Rotation::Deg90 => (py, 3 - px),
            Rotation::Deg180 => (3 - px, 3 - py),
            Rotation::Deg270 => (3 - py, px),
        }
    }
}

/// Game actions accepted while a piece is falling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Move piece one extra row down
    SoftDrop,
    /// Rotate piece 90° clockwise
    RotateCw,
}

impl GameAction {
    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::SoftDrop => "softDrop",
            GameAction::RotateCw => "rotateCw",
        }
    }
}

/// A cell on the field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FieldCell {
    #[default]
    Empty,
    /// Burned-in cell of a locked piece
    Piece(PieceKind),
    /// Interior cell of a full row waiting to be removed
    Cleared,
    /// Permanent border
    Wall,
}

impl FieldCell {
    pub fn is_empty(self) -> bool {
        matches!(self, FieldCell::Empty)
    }
}

/// Answer to the play-again prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplayAnswer {
    Yes,
    No,
}

impl ReplayAnswer {
    /// Accepts a single `y`/`n` (either case); anything else is `None`
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'y' | 'Y' => Some(ReplayAnswer::Yes),
            'n' | 'N' => Some(ReplayAnswer::No),
            _ => None,
        }
    }
}

/// A decoded key press during play
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputCommand {
    Action(GameAction),
    /// Leave the game immediately
    Quit,
}

/// A decoded key press at the play-again prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptKey {
    Char(char),
    /// Any non-character key; re-prompts
    Other,
    Quit,
}
