//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{get_shape, GameSnapshot};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{FieldCell, PieceKind, Rotation, FIELD_HEIGHT, FIELD_WIDTH};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Gap between the field and the side panel, in columns.
const PANEL_GAP: u16 = 4;

/// Widest panel line is "NEXT BLOCK:".
const PANEL_W: u16 = 12;

/// Rows from the panel top to the "NEXT BLOCK:" label and to the preview.
const NEXT_LABEL_ROW: u16 = 3;
const PREVIEW_ROW: u16 = 5;

const FIELD_BG: Rgb = Rgb::new(0, 0, 0);

/// A lightweight terminal renderer for the field, the active piece, the
/// next-piece preview and the score.
pub struct GameView {
    /// Field cell width in terminal columns.
    cell_w: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self { cell_w: 2 }
    }
}

impl GameView {
    /// Width of the drawn field in terminal columns.
    pub fn field_px_width(&self) -> u16 {
        (FIELD_WIDTH as u16) * self.cell_w
    }

    /// Top-left corner of the field, centering field and panel in the viewport.
    pub fn origin(&self, viewport: Viewport) -> (u16, u16) {
        let total_w = self.field_px_width() + PANEL_GAP + PANEL_W;
        let x = viewport.width.saturating_sub(total_w) / 2;
        let y = viewport.height.saturating_sub(FIELD_HEIGHT as u16) / 2;
        (x, y)
    }

    /// Render a snapshot into an existing framebuffer.
    ///
    /// Every call repaints the whole frame.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let (start_x, start_y) = self.origin(viewport);

        // Field and active piece.
        for y in 0..FIELD_HEIGHT {
            for x in 0..FIELD_WIDTH {
                let (ch, style) = cell_glyph(snap.cell_at(x, y));
                self.fill_cell(fb, start_x, start_y, x as u16, y as u16, ch, style);
            }
        }

        let panel_x = start_x + self.field_px_width() + PANEL_GAP;
        self.draw_side_panel(fb, snap, panel_x, start_y);

        if snap.game_over {
            self.draw_overlay_text(fb, start_x, start_y, "GAME OVER");
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn fill_cell(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        cell_x: u16,
        cell_y: u16,
        ch: char,
        style: CellStyle,
    ) {
        let px = start_x + cell_x * self.cell_w;
        let py = start_y + cell_y;
        fb.fill_rect(px, py, self.cell_w, 1, ch, style);
    }

    fn draw_side_panel(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, x: u16, y: u16) {
        if x >= fb.width() {
            return;
        }

        let label = CellStyle::default().bold();
        let value = CellStyle::default();

        fb.put_str(x, y, "SCORE:", label);
        fb.put_u32(x + 7, y, snap.score, value);

        fb.put_str(x, y + NEXT_LABEL_ROW, "NEXT BLOCK:", label);
        for (px, py) in get_shape(snap.next, Rotation::Deg0) {
            let (ch, style) = cell_glyph(FieldCell::Piece(snap.next));
            self.fill_cell(fb, x, y + PREVIEW_ROW, px as u16, py as u16, ch, style);
        }
    }

    fn draw_overlay_text(&self, fb: &mut FrameBuffer, start_x: u16, start_y: u16, text: &str) {
        let mid_y = start_y.saturating_add(FIELD_HEIGHT as u16 / 2);
        let text_w = text.chars().count() as u16;
        let x = start_x.saturating_add(self.field_px_width().saturating_sub(text_w) / 2);
        let style = CellStyle::new(Rgb::new(255, 255, 255), FIELD_BG).bold();
        fb.put_str(x, mid_y, text, style);
    }
}

/// Piece colour by identity.
pub fn piece_color(kind: PieceKind) -> Rgb {
    match kind {
        PieceKind::I => Rgb::new(60, 90, 220),
        PieceKind::T => Rgb::new(60, 180, 80),
        PieceKind::O => Rgb::new(60, 200, 200),
        PieceKind::Z => Rgb::new(210, 60, 60),
        PieceKind::S => Rgb::new(190, 80, 200),
        PieceKind::L => Rgb::new(220, 200, 60),
        PieceKind::J => Rgb::new(150, 150, 150),
    }
}

/// Glyph and style for a field cell.
pub fn cell_glyph(cell: FieldCell) -> (char, CellStyle) {
    match cell {
        FieldCell::Empty => (' ', CellStyle::new(FIELD_BG, FIELD_BG)),
        FieldCell::Piece(kind) => ('█', CellStyle::new(piece_color(kind), FIELD_BG)),
        FieldCell::Cleared => ('=', CellStyle::new(Rgb::new(200, 200, 200), FIELD_BG).bold()),
        FieldCell::Wall => ('+', CellStyle::new(Rgb::new(255, 135, 0), FIELD_BG)),
    }
}
