//! Pieces module - the seven 4x4 piece masks and the rotation mapper
//!
//! Every piece lives in a 4x4 mask stored row-major as 16 flags. Rotation never
//! rebuilds the catalog: it maps a target cell `(px, py)` of the rotated piece back
//! to an index into the unrotated mask.

use crate::types::{PieceKind, Rotation};

/// Offset of a single mino relative to the piece anchor
pub type MinoOffset = (i8, i8);

/// Shape of a piece - 4 mino offsets from the anchor
pub type PieceShape = [MinoOffset; 4];

/// 4x4 boolean matrix, row-major (`index = py * 4 + px`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Mask4 {
    cells: [bool; 16],
}

impl Mask4 {
    /// Build from a 16-byte pattern where `X` is filled and anything else is empty
    pub const fn from_pattern(pattern: &[u8; 16]) -> Self {
        let mut cells = [false; 16];
        let mut i = 0;
        while i < 16 {
            cells[i] = pattern[i] == b'X';
            i += 1;
        }
        Self { cells }
    }

    /// Flag at a flat index (0-15)
    #[inline(always)]
    pub fn at_index(&self, index: usize) -> bool {
        self.cells[index]
    }

    /// Flag at `(px, py)`, both in 0..4
    #[inline(always)]
    pub fn at(&self, px: u8, py: u8) -> bool {
        self.cells[(py as usize) * 4 + px as usize]
    }

    /// Number of filled cells
    pub fn count(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    /// The mask as it appears after `rotation` clockwise quarter turns
    pub fn rotated(&self, rotation: Rotation) -> Mask4 {
        let mut cells = [false; 16];
        for py in 0..4u8 {
            for px in 0..4u8 {
                cells[(py as usize) * 4 + px as usize] =
                    self.at_index(rotate(px, py, rotation.index() as i32));
            }
        }
        Mask4 { cells }
    }

    /// Iterate filled cells as `(px, py)` of the rotated piece
    pub fn filled(&self) -> impl Iterator<Item = (u8, u8)> + '_ {
        (0..16u8)
            .filter(move |&i| self.cells[i as usize])
            .map(|i| (i % 4, i / 4))
    }
}

/// Piece catalog, indexed by [`PieceKind::index`]
pub const CATALOG: [Mask4; 7] = [
    Mask4::from_pattern(b"..X...X...X...X."), // I
    Mask4::from_pattern(b"..X..XX...X....."), // T
    Mask4::from_pattern(b".....XX..XX....."), // O
    Mask4::from_pattern(b"..X..XX..X......"), // Z
    Mask4::from_pattern(b".X...XX...X....."), // S
    Mask4::from_pattern(b".X...X...XX....."), // L
    Mask4::from_pattern(b"..X...X..XX....."), // J
];

/// Unrotated mask for a piece kind
pub fn piece_mask(kind: PieceKind) -> &'static Mask4 {
    &CATALOG[kind.index() as usize]
}

/// Rotation mapper: flat index into an unrotated 4x4 mask for cell `(px, py)`
/// of the piece turned `rotation` quarter turns clockwise.
///
/// `rotation` is taken modulo 4, so any integer (negative included) is accepted.
///
/// ```
/// use tui_blocks_core::pieces::rotate;
///
/// assert_eq!(rotate(1, 2, 0), 9);
/// assert_eq!(rotate(0, 0, 1), 12);
/// assert_eq!(rotate(0, 0, 2), 15);
/// assert_eq!(rotate(0, 0, 3), 3);
/// assert_eq!(rotate(0, 0, 7), 3);
/// ```
pub fn rotate(px: u8, py: u8, rotation: i32) -> usize {
    let (sx, sy) = Rotation::from_index(rotation).source_cell(px, py);
    (sy as usize) * 4 + sx as usize
}

/// Get the shape (mino offsets) for a piece kind and rotation
pub fn get_shape(kind: PieceKind, rotation: Rotation) -> PieceShape {
    let mask = piece_mask(kind);
    let mut shape = [(0, 0); 4];
    let mut n = 0;
    for py in 0..4u8 {
        for px in 0..4u8 {
            if n < shape.len() && mask.at_index(rotate(px, py, rotation.index() as i32)) {
                shape[n] = (px as i8, py as i8);
                n += 1;
            }
        }
    }
    shape
}
