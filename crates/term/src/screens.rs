//! Text screens shown outside of play: the start screen and the
//! game-over / play-again prompt.

use crate::fb::{CellStyle, FrameBuffer};
use crate::game_view::Viewport;

const START_LINES: [&str; 7] = [
    "TUI BLOCKS",
    "",
    "Controls:",
    "'Z' - Rotate clockwise",
    "'Arrow keys' - Move left, right and down",
    "'Q' - Quit",
    "",
];

const START_HINT: &str = "Press any key to start...";
const PROMPT: &str = "Would you like to play again (y/n)";
const REPROMPT: &str = "Please answer 'y' or 'n'.";

/// Left-aligned block of lines placed in the middle of the viewport.
fn put_block(fb: &mut FrameBuffer, viewport: Viewport, lines: &[(&str, CellStyle)]) {
    let width = lines
        .iter()
        .map(|(s, _)| s.chars().count())
        .max()
        .unwrap_or(0) as u16;
    let x = viewport.width.saturating_sub(width) / 2;
    let y0 = viewport.height.saturating_sub(lines.len() as u16) / 2;
    for (i, (line, style)) in lines.iter().enumerate() {
        fb.put_str(x, y0 + i as u16, line, *style);
    }
}

pub fn render_start(viewport: Viewport, fb: &mut FrameBuffer) {
    fb.resize(viewport.width, viewport.height);
    fb.clear(CellStyle::default().into_cell(' '));

    let normal = CellStyle::default();
    let mut lines: Vec<(&str, CellStyle)> = Vec::with_capacity(START_LINES.len() + 2);
    lines.push((START_LINES[0], normal.bold()));
    lines.extend(START_LINES[1..].iter().map(|s| (*s, normal)));
    lines.push(("", normal));
    lines.push((START_HINT, normal));
    put_block(fb, viewport, &lines);
}

/// Final score, session high score and the y/n question.
///
/// `reprompt` adds a hint line after an answer that was neither yes nor no.
pub fn render_game_over(
    viewport: Viewport,
    fb: &mut FrameBuffer,
    final_score: u32,
    high_score: u32,
    reprompt: bool,
) {
    fb.resize(viewport.width, viewport.height);
    fb.clear(CellStyle::default().into_cell(' '));

    let normal = CellStyle::default();
    let final_line = format!("FINAL SCORE: {final_score}");
    let high_line = format!("HIGHEST SCORE: {high_score}");
    let mut lines: Vec<(&str, CellStyle)> = vec![
        ("GAME OVER!!", normal.bold()),
        (final_line.as_str(), normal),
        (high_line.as_str(), normal),
        ("", normal),
        (PROMPT, normal),
    ];
    if reprompt {
        lines.push((REPROMPT, normal));
    }
    put_block(fb, viewport, &lines);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn screen_text(fb: &FrameBuffer) -> String {
        (0..fb.height())
            .map(|y| fb.row_text(y).trim_end().to_string())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn start_screen_lists_controls() {
        let vp = Viewport::new(60, 20);
        let mut fb = FrameBuffer::new(1, 1);
        render_start(vp, &mut fb);
        let text = screen_text(&fb);
        assert!(text.contains("TUI BLOCKS"));
        assert!(text.contains("'Z' - Rotate clockwise"));
        assert!(text.contains("Press any key to start..."));
    }

    #[test]
    fn game_over_shows_scores_and_prompt() {
        let vp = Viewport::new(60, 20);
        let mut fb = FrameBuffer::new(1, 1);
        render_game_over(vp, &mut fb, 75, 150, false);
        let text = screen_text(&fb);
        assert!(text.contains("FINAL SCORE: 75"));
        assert!(text.contains("HIGHEST SCORE: 150"));
        assert!(text.contains("Would you like to play again (y/n)"));
        assert!(!text.contains("Please answer"));

        render_game_over(vp, &mut fb, 75, 150, true);
        assert!(screen_text(&fb).contains("Please answer 'y' or 'n'."));
    }
}
