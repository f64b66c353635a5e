//! Crossterm-backed [`Frontend`]: real keyboard, real terminal, real sleeps.

use std::thread;
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};

use crate::core::{GameSnapshot, GameState};
use crate::engine::Frontend;
use crate::input::{drain_pending, map_prompt_key, should_quit};
use crate::term::{render_game_over, render_start, FrameBuffer, GameView, TerminalRenderer, Viewport};
use crate::types::{InputCommand, PromptKey};

pub struct TerminalFrontend {
    renderer: TerminalRenderer,
    view: GameView,
    fb: FrameBuffer,
    snap: GameSnapshot,
}

impl TerminalFrontend {
    pub fn new() -> Self {
        Self {
            renderer: TerminalRenderer::new(),
            view: GameView::default(),
            fb: FrameBuffer::new(0, 0),
            snap: GameSnapshot::default(),
        }
    }

    /// Switch the terminal into game mode.
    pub fn enter(&mut self) -> Result<()> {
        self.renderer.enter()
    }

    /// Restore the terminal.
    pub fn exit(&mut self) -> Result<()> {
        self.renderer.exit()
    }

    fn viewport(&self) -> Viewport {
        let (w, h) = self.renderer.size();
        Viewport::new(w, h)
    }

    /// Throw away anything typed before the current screen appeared.
    fn discard_pending(&mut self) -> Result<()> {
        while event::poll(Duration::ZERO)? {
            event::read()?;
        }
        Ok(())
    }
}

impl Default for TerminalFrontend {
    fn default() -> Self {
        Self::new()
    }
}

/// Block until a key press (or auto-repeat) arrives.
fn read_key() -> Result<KeyEvent> {
    loop {
        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Release {
                return Ok(key);
            }
        }
    }
}

impl Frontend for TerminalFrontend {
    fn wait_for_start(&mut self) -> Result<bool> {
        let viewport = self.viewport();
        render_start(viewport, &mut self.fb);
        self.renderer.draw(&self.fb)?;
        self.discard_pending()?;
        Ok(!should_quit(read_key()?))
    }

    fn drain_commands(&mut self, out: &mut Vec<InputCommand>) -> Result<()> {
        drain_pending(out)?;
        Ok(())
    }

    fn draw(&mut self, state: &GameState) -> Result<()> {
        let viewport = self.viewport();
        state.snapshot_into(&mut self.snap);
        self.view.render_into(&self.snap, viewport, &mut self.fb);
        self.renderer.draw(&self.fb)
    }

    fn prompt(&mut self, final_score: u32, high_score: u32, reprompt: bool) -> Result<PromptKey> {
        let viewport = self.viewport();
        render_game_over(viewport, &mut self.fb, final_score, high_score, reprompt);
        self.renderer.draw(&self.fb)?;
        if !reprompt {
            self.discard_pending()?;
        }
        Ok(map_prompt_key(read_key()?))
    }

    fn pause(&mut self, duration: Duration) -> Result<()> {
        thread::sleep(duration);
        Ok(())
    }
}
