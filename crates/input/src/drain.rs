//! Non-blocking drain of buffered terminal events.
//!
//! Every key press waiting in the terminal's queue is decoded in arrival order.
//! Nothing is left behind for the next tick, so a burst of presses is applied in
//! one tick instead of trickling out over several.

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};

use crate::map::map_play_key;
use crate::types::InputCommand;

/// Drain every pending terminal event without blocking.
pub fn drain_pending(out: &mut Vec<InputCommand>) -> io::Result<()> {
    drain_events(
        || {
            if event::poll(Duration::ZERO)? {
                event::read().map(Some)
            } else {
                Ok(None)
            }
        },
        out,
    )
}

/// Drain events from `next` until it reports an empty queue.
///
/// Key presses (and terminal auto-repeats) are mapped; releases, unknown keys and
/// non-key events are consumed and dropped.
pub fn drain_events(
    mut next: impl FnMut() -> io::Result<Option<Event>>,
    out: &mut Vec<InputCommand>,
) -> io::Result<()> {
    while let Some(ev) = next()? {
        if let Event::Key(key) = ev {
            if key.kind == KeyEventKind::Release {
                continue;
            }
            if let Some(cmd) = map_play_key(key) {
                out.push(cmd);
            }
        }
    }
    Ok(())
}
