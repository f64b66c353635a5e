//! Field module - the walled play grid
//!
//! The field is a 12x18 grid stored as a flat row-major array.
//! Columns 0 and 11 and the bottom row are permanent walls; row 0 is open so
//! pieces can spawn there.
//! Coordinates: (x, y) where x grows to the right and y grows downward.

use arrayvec::ArrayVec;

use crate::pieces::{piece_mask, rotate};
use crate::types::{FieldCell, PieceKind, Rotation, FIELD_HEIGHT, FIELD_WIDTH};

/// Total number of cells on the field
const FIELD_SIZE: usize = (FIELD_WIDTH as usize) * (FIELD_HEIGHT as usize);

/// The play field - walls plus interior cells
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    /// Flat array of cells, row-major order (y * WIDTH + x)
    cells: [FieldCell; FIELD_SIZE],
}

impl Field {
    /// Create an empty field surrounded by walls on the left, right and bottom
    pub fn new() -> Self {
        let mut cells = [FieldCell::Empty; FIELD_SIZE];
        for y in 0..FIELD_HEIGHT as usize {
            for x in 0..FIELD_WIDTH as usize {
                if Self::is_wall_position(x, y) {
                    cells[y * FIELD_WIDTH as usize + x] = FieldCell::Wall;
                }
            }
        }
        Self { cells }
    }

    fn is_wall_position(x: usize, y: usize) -> bool {
        x == 0 || x == FIELD_WIDTH as usize - 1 || y == FIELD_HEIGHT as usize - 1
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= FIELD_WIDTH as i8 || y < 0 || y >= FIELD_HEIGHT as i8 {
            return None;
        }
        Some((y as usize) * (FIELD_WIDTH as usize) + (x as usize))
    }

    pub fn width(&self) -> u8 {
        FIELD_WIDTH
    }

    pub fn height(&self) -> u8 {
        FIELD_HEIGHT
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<FieldCell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set an interior cell.
    /// Returns false if out of bounds or if the position is a wall.
    pub fn set(&mut self, x: i8, y: i8, cell: FieldCell) -> bool {
        match Self::index(x, y) {
            Some(_) if Self::is_wall_position(x as usize, y as usize) => false,
            Some(idx) if cell != FieldCell::Wall => {
                self.cells[idx] = cell;
                true
            }
            _ => false,
        }
    }

    /// Check if position is inside the field and empty
    pub fn is_free(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(FieldCell::Empty))
    }

    /// Collision checker: can `kind` at `rotation` sit with its mask anchored at `(x, y)`?
    ///
    /// Every filled cell of the rotated mask must land inside the field on an
    /// empty cell. Walls, locked pieces, pending-clear markers and anything out of
    /// bounds reject the placement.
    pub fn fits(&self, kind: PieceKind, rotation: Rotation, x: i8, y: i8) -> bool {
        let mask = piece_mask(kind);
        for py in 0..4u8 {
            for px in 0..4u8 {
                if !mask.at_index(rotate(px, py, rotation.index() as i32)) {
                    continue;
                }
                if !self.is_free(x + px as i8, y + py as i8) {
                    return false;
                }
            }
        }
        true
    }

    /// Burn a piece into the field.
    ///
    /// Cells outside the interior are skipped; callers lock only placements that
    /// passed [`Field::fits`].
    pub fn lock_piece(&mut self, kind: PieceKind, rotation: Rotation, x: i8, y: i8) {
        let mask = piece_mask(kind);
        for py in 0..4u8 {
            for px in 0..4u8 {
                if mask.at_index(rotate(px, py, rotation.index() as i32)) {
                    self.set(x + px as i8, y + py as i8, FieldCell::Piece(kind));
                }
            }
        }
    }

    /// Interior rows are every row above the floor
    pub fn is_interior_row(y: i8) -> bool {
        y >= 0 && y < FIELD_HEIGHT as i8 - 1
    }

    /// A row is full when every interior (non-wall) cell is non-empty
    pub fn is_row_full(&self, y: i8) -> bool {
        if !Self::is_interior_row(y) {
            return false;
        }
        let start = (y as usize) * FIELD_WIDTH as usize;
        self.cells[start + 1..start + FIELD_WIDTH as usize - 1]
            .iter()
            .all(|cell| !cell.is_empty())
    }

    /// Mark every full row among the 4 rows starting at `top` as pending clear.
    ///
    /// Returns the marked rows, top to bottom.
    pub fn mark_full_rows(&mut self, top: i8) -> ArrayVec<u8, 4> {
        let mut marked = ArrayVec::new();
        for y in top..top.saturating_add(4) {
            if self.is_row_full(y) {
                let start = (y as usize) * FIELD_WIDTH as usize;
                for cell in &mut self.cells[start + 1..start + FIELD_WIDTH as usize - 1] {
                    *cell = FieldCell::Cleared;
                }
                marked.push(y as u8);
            }
        }
        marked
    }

    /// Remove row `y` and shift the interior of every row above down by one.
    ///
    /// Row 0 becomes empty. Walls are never touched.
    /// Returns false if `y` is not an interior row.
    pub fn clear_row(&mut self, y: u8) -> bool {
        if !Self::is_interior_row(y as i8) {
            return false;
        }

        let width = FIELD_WIDTH as usize;
        let y = y as usize;

        for row in (1..=y).rev() {
            let src_start = (row - 1) * width + 1;
            let dst_start = row * width + 1;
            self.cells
                .copy_within(src_start..src_start + width - 2, dst_start);
        }

        for cell in &mut self.cells[1..width - 1] {
            *cell = FieldCell::Empty;
        }

        true
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[FieldCell] {
        &self.cells
    }

    /// Write the field into a 2D grid (used by snapshots)
    pub fn write_grid(&self, out: &mut [[FieldCell; FIELD_WIDTH as usize]; FIELD_HEIGHT as usize]) {
        for (y, row) in out.iter_mut().enumerate() {
            let start = y * FIELD_WIDTH as usize;
            row.copy_from_slice(&self.cells[start..start + FIELD_WIDTH as usize]);
        }
    }
}

impl Default for Field {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_index_calculation() {
        assert_eq!(Field::index(0, 0), Some(0));
        assert_eq!(Field::index(11, 0), Some(11));
        assert_eq!(Field::index(0, 1), Some(12));
        assert_eq!(Field::index(11, 17), Some(215));
        assert_eq!(Field::index(-1, 0), None);
        assert_eq!(Field::index(12, 0), None);
        assert_eq!(Field::index(0, 18), None);
    }

    #[test]
    fn test_walls_on_three_sides() {
        let field = Field::new();
        for y in 0..FIELD_HEIGHT as i8 {
            assert_eq!(field.get(0, y), Some(FieldCell::Wall));
            assert_eq!(field.get(11, y), Some(FieldCell::Wall));
        }
        for x in 0..FIELD_WIDTH as i8 {
            assert_eq!(field.get(x, 17), Some(FieldCell::Wall));
        }
        for x in 1..11 {
            assert_eq!(field.get(x, 0), Some(FieldCell::Empty));
        }
    }

    #[test]
    fn test_set_refuses_walls() {
        let mut field = Field::new();
        assert!(!field.set(0, 5, FieldCell::Empty));
        assert!(!field.set(5, 17, FieldCell::Piece(PieceKind::T)));
        assert!(!field.set(5, 5, FieldCell::Wall));
        assert!(field.set(5, 5, FieldCell::Piece(PieceKind::T)));
        assert_eq!(field.get(5, 5), Some(FieldCell::Piece(PieceKind::T)));
    }

    #[test]
    fn test_clear_row_keeps_walls() {
        let mut field = Field::new();
        field.set(3, 4, FieldCell::Piece(PieceKind::L));
        assert!(field.clear_row(16));
        assert_eq!(field.get(3, 5), Some(FieldCell::Piece(PieceKind::L)));
        assert_eq!(field.get(3, 4), Some(FieldCell::Empty));
        for y in 0..FIELD_HEIGHT as i8 {
            assert_eq!(field.get(0, y), Some(FieldCell::Wall));
            assert_eq!(field.get(11, y), Some(FieldCell::Wall));
        }
        assert!(!field.clear_row(17));
    }

    #[test]
    fn test_mark_full_rows_ignores_floor() {
        let mut field = Field::new();
        let marked = field.mark_full_rows(14);
        assert!(marked.is_empty());
        assert_eq!(field, Field::new());
    }
}
