//! TerminalRenderer: flushes a framebuffer to a real terminal.
//!
//! Diffs against the previous frame and repaints only changed runs. Color
//! capability is probed once at startup and carried in the config; with
//! color off, tones degrade to the terminal default and only glyphs differ.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{self, Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
    terminal, QueueableCommand,
};

use crate::term::fb::{FrameBuffer, Tone};

/// Rendering capabilities resolved once at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RendererConfig {
    pub color_enabled: bool,
}

impl RendererConfig {
    /// Probe the live terminal.
    pub fn detect() -> Self {
        Self {
            color_enabled: style::available_color_count() >= 8,
        }
    }

    pub fn monochrome() -> Self {
        Self {
            color_enabled: false,
        }
    }
}

pub struct TerminalRenderer {
    stdout: io::Stdout,
    config: RendererConfig,
    last: Option<FrameBuffer>,
}

impl TerminalRenderer {
    pub fn new(config: RendererConfig) -> Self {
        Self {
            stdout: io::stdout(),
            config,
            last: None,
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.stdout.queue(terminal::EnterAlternateScreen)?;
        self.stdout.queue(cursor::Hide)?;
        self.stdout.queue(terminal::DisableLineWrap)?;
        self.stdout.flush()?;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.stdout.queue(ResetColor)?;
        self.stdout.queue(SetAttribute(Attribute::Reset))?;
        self.stdout.queue(terminal::EnableLineWrap)?;
        self.stdout.queue(cursor::Show)?;
        self.stdout.queue(terminal::LeaveAlternateScreen)?;
        self.stdout.flush()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Force the next draw to be a full redraw.
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    /// Draw a framebuffer, swapping it into internal state.
    ///
    /// Callers keep one `FrameBuffer` and pass it in every frame; the
    /// renderer diffs against the previous frame and swaps buffers so the
    /// caller can reuse the old allocation.
    pub fn draw_swap(&mut self, fb: &mut FrameBuffer) -> Result<()> {
        if self.last.is_none() {
            self.last = Some(FrameBuffer::new(fb.width(), fb.height()));
        }

        let mut prev = self.last.take().unwrap();
        let needs_full = prev.width() != fb.width() || prev.height() != fb.height();

        if needs_full {
            self.full_redraw(fb)?;
            prev.resize(fb.width(), fb.height());
        } else {
            self.diff_redraw(fb, &prev)?;
        }

        std::mem::swap(&mut prev, fb);
        self.last = Some(prev);
        Ok(())
    }

    fn full_redraw(&mut self, fb: &FrameBuffer) -> Result<()> {
        self.stdout
            .queue(terminal::Clear(terminal::ClearType::All))?;
        self.stdout.queue(cursor::MoveTo(0, 0))?;

        let mut current_tone: Option<Tone> = None;
        for y in 0..fb.height() {
            for x in 0..fb.width() {
                let cell = fb.get(x, y).unwrap_or_default();
                if current_tone != Some(cell.tone) {
                    self.apply_tone(cell.tone)?;
                    current_tone = Some(cell.tone);
                }
                self.stdout.queue(Print(cell.ch))?;
            }
            if y + 1 < fb.height() {
                self.stdout.queue(Print("\r\n"))?;
            }
        }

        self.stdout.queue(ResetColor)?;
        self.stdout.queue(SetAttribute(Attribute::Reset))?;
        self.stdout.flush()?;
        Ok(())
    }

    fn diff_redraw(&mut self, next: &FrameBuffer, prev: &FrameBuffer) -> Result<()> {
        let mut current_tone: Option<Tone> = None;

        for_each_changed_run(prev, next, |x, y, len| {
            self.stdout.queue(cursor::MoveTo(x, y))?;
            for dx in 0..len {
                let cell = next.get(x + dx, y).unwrap_or_default();
                if current_tone != Some(cell.tone) {
                    self.apply_tone(cell.tone)?;
                    current_tone = Some(cell.tone);
                }
                self.stdout.queue(Print(cell.ch))?;
            }
            Ok(())
        })?;

        self.stdout.queue(ResetColor)?;
        self.stdout.queue(SetAttribute(Attribute::Reset))?;
        self.stdout.flush()?;
        Ok(())
    }

    fn apply_tone(&mut self, tone: Tone) -> Result<()> {
        self.stdout.queue(SetAttribute(Attribute::Reset))?;
        if !self.config.color_enabled {
            self.stdout.queue(ResetColor)?;
            return Ok(());
        }
        self.stdout.queue(SetForegroundColor(tone_color(tone)))?;
        if matches!(tone, Tone::Selected | Tone::Title) {
            self.stdout.queue(SetAttribute(Attribute::Bold))?;
        }
        if tone == Tone::Dim {
            self.stdout.queue(SetAttribute(Attribute::Dim))?;
        }
        Ok(())
    }
}

fn tone_color(tone: Tone) -> Color {
    match tone {
        Tone::Text => Color::White,
        Tone::Dim => Color::DarkGrey,
        Tone::Player => Color::Green,
        Tone::Obstacle => Color::Red,
        Tone::Collectible => Color::Yellow,
        Tone::Sky => Color::Cyan,
        Tone::Title => Color::Yellow,
        Tone::Accent => Color::Yellow,
        Tone::Selected => Color::Magenta,
    }
}

fn for_each_changed_run(
    prev: &FrameBuffer,
    next: &FrameBuffer,
    mut f: impl FnMut(u16, u16, u16) -> Result<()>,
) -> Result<()> {
    if prev.width() != next.width() || prev.height() != next.height() {
        // Size changed: treat everything as dirty in a single pass.
        for y in 0..next.height() {
            f(0, y, next.width())?;
        }
        return Ok(());
    }

    let w = next.width();
    let h = next.height();

    for y in 0..h {
        let mut x = 0;
        while x < w {
            let a = prev.get(x, y).unwrap_or_default();
            let b = next.get(x, y).unwrap_or_default();
            if a == b {
                x += 1;
                continue;
            }

            let start = x;
            x += 1;
            while x < w {
                let a2 = prev.get(x, y).unwrap_or_default();
                let b2 = next.get(x, y).unwrap_or_default();
                if a2 == b2 {
                    break;
                }
                x += 1;
            }
            f(start, y, x - start)?;
        }
    }

    Ok(())
}
