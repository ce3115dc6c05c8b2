//! Flushes framebuffers to the real terminal.
//!
//! A frame is written in full when there is nothing to compare against (first
//! frame, resize). Otherwise only the spans of a row that differ from the
//! previous frame are rewritten.

use std::io::{self, Write};
use std::ops::Range;

use anyhow::Result;

use crossterm::{
    cursor,
    style::{Attribute, Attributes, Color, Colors, Print, SetAttribute, SetAttributes, SetColors},
    terminal, QueueableCommand,
};

use crate::fb::{CellStyle, FrameBuffer, Glyph, Rgb};

impl From<Rgb> for Color {
    fn from(c: Rgb) -> Self {
        Color::Rgb {
            r: c.r,
            g: c.g,
            b: c.b,
        }
    }
}

/// Escape-sequence writer that remembers the style it last selected.
struct Pen<'a> {
    out: &'a mut Vec<u8>,
    style: Option<CellStyle>,
}

impl<'a> Pen<'a> {
    fn new(out: &'a mut Vec<u8>) -> Self {
        Self { out, style: None }
    }

    fn move_to(&mut self, x: u16, y: u16) -> io::Result<()> {
        self.out.queue(cursor::MoveTo(x, y))?;
        Ok(())
    }

    fn write(&mut self, glyphs: &[Glyph]) -> io::Result<()> {
        for g in glyphs {
            if self.style != Some(g.style) {
                self.select(g.style)?;
            }
            self.out.queue(Print(g.ch))?;
        }
        Ok(())
    }

    fn select(&mut self, style: CellStyle) -> io::Result<()> {
        let mut attrs = Attributes::default();
        if style.bold {
            attrs.set(Attribute::Bold);
        }
        if style.dim {
            attrs.set(Attribute::Dim);
        }
        self.out
            .queue(SetAttribute(Attribute::Reset))?
            .queue(SetColors(Colors::new(style.fg.into(), style.bg.into())))?
            .queue(SetAttributes(attrs))?;
        self.style = Some(style);
        Ok(())
    }

    /// Leave the terminal in its default style if anything was styled.
    fn lift(&mut self) -> io::Result<()> {
        if self.style.is_some() {
            self.out.queue(SetAttribute(Attribute::Reset))?;
        }
        Ok(())
    }
}

/// Column ranges where `next` differs from `prev`, left to right.
///
/// Both rows must have the same length.
fn changed_spans<'a>(
    prev: &'a [Glyph],
    next: &'a [Glyph],
) -> impl Iterator<Item = Range<usize>> + 'a {
    let mut x = 0;
    std::iter::from_fn(move || {
        let start = x + prev[x..].iter().zip(&next[x..]).position(|(a, b)| a != b)?;
        let len = prev[start..]
            .iter()
            .zip(&next[start..])
            .take_while(|(a, b)| a != b)
            .count();
        x = start + len;
        Some(start..x)
    })
}

/// Encode a complete redraw of `fb` into `out`.
pub fn encode_full_into(fb: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    let mut pen = Pen::new(out);
    for y in 0..fb.height() {
        pen.move_to(0, y)?;
        pen.write(fb.row(y))?;
    }
    pen.lift()?;
    Ok(())
}

/// Encode what it takes to turn `prev` on screen into `next`.
///
/// Falls back to a full redraw when the sizes differ. Identical frames encode
/// to nothing.
pub fn encode_diff_into(prev: &FrameBuffer, next: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    if prev.width() != next.width() || prev.height() != next.height() {
        return encode_full_into(next, out);
    }

    let mut pen = Pen::new(out);
    for y in 0..next.height() {
        let row = next.row(y);
        for span in changed_spans(prev.row(y), row) {
            // Spans start inside a row of at most u16::MAX columns.
            pen.move_to(span.start as u16, y)?;
            pen.write(&row[span])?;
        }
    }
    pen.lift()?;
    Ok(())
}

/// Owns the terminal session and the last frame shown.
pub struct TerminalRenderer {
    stdout: io::Stdout,
    shown: Option<FrameBuffer>,
    bytes: Vec<u8>,
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            shown: None,
            bytes: Vec::with_capacity(16 * 1024),
        }
    }

    /// Raw mode, alternate screen, hidden cursor.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.bytes.clear();
        self.bytes
            .queue(terminal::EnterAlternateScreen)?
            .queue(cursor::Hide)?
            .queue(terminal::DisableLineWrap)?;
        self.flush()
    }

    /// Restore the terminal. Safe to call after a partial `enter`.
    pub fn exit(&mut self) -> Result<()> {
        self.bytes.clear();
        self.bytes
            .queue(SetAttribute(Attribute::Reset))?
            .queue(terminal::EnableLineWrap)?
            .queue(cursor::Show)?
            .queue(terminal::LeaveAlternateScreen)?;
        self.flush()?;
        terminal::disable_raw_mode()?;
        self.shown = None;
        Ok(())
    }

    /// Next draw repaints everything (after a resize).
    pub fn invalidate(&mut self) {
        self.shown = None;
    }

    /// Show `fb`, then swap it with the previously shown frame.
    ///
    /// The caller keeps passing the same buffer every frame; after the call it
    /// holds stale contents and must be cleared before drawing again.
    pub fn draw_swap(&mut self, fb: &mut FrameBuffer) -> Result<()> {
        self.bytes.clear();
        let mut shown = match self.shown.take() {
            Some(prev) => {
                encode_diff_into(&prev, fb, &mut self.bytes)?;
                prev
            }
            None => {
                encode_full_into(fb, &mut self.bytes)?;
                FrameBuffer::new(fb.width(), fb.height())
            }
        };
        self.flush()?;

        std::mem::swap(&mut shown, fb);
        self.shown = Some(shown);
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.stdout.write_all(&self.bytes)?;
        self.stdout.flush()?;
        Ok(())
    }
}
