//! Render collaborators
//!
//! The simulation hands out `RenderFrame`s; a `Renderer` turns them into
//! output. No window or GPU here: frames go to any `io::Write` as HUD text
//! or JSON lines.

pub mod frame;

use std::io::Write;

use serde::{Deserialize, Serialize};

pub use frame::{RenderFrame, game_over_message};

/// Output errors
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("write failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("frame encoding failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Frame output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FrameFormat {
    /// HUD lines only
    #[default]
    Text,
    /// One JSON frame per line
    Json,
}

/// Consumes frames. Must not feed anything back into game state.
pub trait Renderer {
    fn draw(&mut self, frame: &RenderFrame) -> Result<(), RenderError>;

    /// Shown once when the session ends
    fn game_over(&mut self, score: u32) -> Result<(), RenderError>;
}

/// Prints the HUD the way the window would show it
pub struct TextRenderer<W: Write> {
    out: W,
}

impl<W: Write> TextRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    #[cfg(test)]
    fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Renderer for TextRenderer<W> {
    fn draw(&mut self, frame: &RenderFrame) -> Result<(), RenderError> {
        let [score, time] = frame.hud_lines();
        writeln!(
            self.out,
            "[{:>4}] {} | {} | {} at ({}, {}) | item at ({}, {})",
            frame.tick,
            score,
            time,
            frame.wolf_name,
            frame.wolf.x,
            frame.wolf.y,
            frame.item.x,
            frame.item.y
        )?;
        Ok(())
    }

    fn game_over(&mut self, score: u32) -> Result<(), RenderError> {
        writeln!(self.out, "Game Over: {}", game_over_message(score))?;
        self.out.flush()?;
        Ok(())
    }
}

/// Streams frames as JSON lines
pub struct JsonRenderer<W: Write> {
    out: W,
}

impl<W: Write> JsonRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    #[cfg(test)]
    fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Renderer for JsonRenderer<W> {
    fn draw(&mut self, frame: &RenderFrame) -> Result<(), RenderError> {
        serde_json::to_writer(&mut self.out, frame)?;
        writeln!(self.out)?;
        Ok(())
    }

    fn game_over(&mut self, score: u32) -> Result<(), RenderError> {
        let message = serde_json::json!({
            "game_over": true,
            "score": score,
            "message": game_over_message(score),
        });
        serde_json::to_writer(&mut self.out, &message)?;
        writeln!(self.out)?;
        self.out.flush()?;
        Ok(())
    }
}

/// Build the renderer for a format
pub fn for_format<'a, W: Write + 'a>(format: FrameFormat, out: W) -> Box<dyn Renderer + 'a> {
    match format {
        FrameFormat::Text => Box::new(TextRenderer::new(out)),
        FrameFormat::Json => Box::new(JsonRenderer::new(out)),
    }
}
