//! TerminalRenderer: flushes a framebuffer to a real terminal.

use std::io::{self, Write};

use anyhow::Result;
use crossterm::{
    cursor,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal, QueueableCommand,
};

use crate::fb::{CellStyle, FrameBuffer, Rgb};

pub struct TerminalRenderer {
    stdout: io::Stdout,
    last: Option<FrameBuffer>,
    buf: Vec<u8>,
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
            last: None,
            buf: Vec::with_capacity(16 * 1024),
        }
    }

    /// Raw mode plus alternate screen. Pair with [`exit`](Self::exit).
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.flush_buf()
    }

    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Force a full redraw next time (e.g. after a resize).
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    /// Draw `fb`, rewriting only rows that differ from the previous frame.
    pub fn draw(&mut self, fb: &FrameBuffer) -> Result<()> {
        self.buf.clear();
        encode_frame_into(self.last.as_ref(), fb, &mut self.buf)?;
        self.flush_buf()?;

        match &mut self.last {
            Some(last) => last.clone_from(fb),
            None => self.last = Some(fb.clone()),
        }
        Ok(())
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

/// Encode the commands that turn `prev` into `next` on screen.
///
/// With no previous frame, or a size change, the screen is cleared and every
/// row is written.
pub fn encode_frame_into(prev: Option<&FrameBuffer>, next: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    let prev = prev.filter(|p| p.width() == next.width() && p.height() == next.height());
    if prev.is_none() {
        out.queue(terminal::Clear(terminal::ClearType::All))?;
    }

    let mut current: Option<CellStyle> = None;
    for y in 0..next.height() {
        let Some(row) = next.row(y) else { break };
        if prev.and_then(|p| p.row(y)) == Some(row) {
            continue;
        }
        out.queue(cursor::MoveTo(0, y))?;
        for cell in row {
            if current != Some(cell.style) {
                apply_style(out, cell.style)?;
                current = Some(cell.style);
            }
            out.queue(Print(cell.ch))?;
        }
    }

    out.queue(ResetColor)?;
    out.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}

fn apply_style(out: &mut Vec<u8>, style: CellStyle) -> Result<()> {
    out.queue(SetAttribute(Attribute::Reset))?;
    out.queue(SetForegroundColor(to_color(style.fg)))?;
    out.queue(SetBackgroundColor(to_color(style.bg)))?;
    if style.bold {
        out.queue(SetAttribute(Attribute::Bold))?;
    }
    if style.dim {
        out.queue(SetAttribute(Attribute::Dim))?;
    }
    Ok(())
}

fn to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode(prev: Option<&FrameBuffer>, next: &FrameBuffer) -> String {
        let mut out = Vec::new();
        encode_frame_into(prev, next, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn first_frame_clears_and_writes_everything() {
        let mut fb = FrameBuffer::new(3, 2);
        fb.put_str(0, 0, "abc", CellStyle::default());
        fb.put_str(0, 1, "xyz", CellStyle::default());

        let text = encode(None, &fb);
        assert!(text.contains("\x1b[2J"));
        assert!(text.contains('a') && text.contains('z'));
    }

    #[test]
    fn unchanged_rows_are_skipped() {
        let mut prev = FrameBuffer::new(3, 2);
        prev.put_str(0, 0, "abc", CellStyle::default());
        prev.put_str(0, 1, "xyz", CellStyle::default());
        let mut next = prev.clone();
        next.put_char(1, 1, 'Q', CellStyle::default());

        let text = encode(Some(&prev), &next);
        assert!(!text.contains("\x1b[2J"));
        assert!(!text.contains('a'));
        assert!(text.contains('Q'));
    }

    #[test]
    fn size_change_forces_full_redraw() {
        let prev = FrameBuffer::new(3, 2);
        let next = FrameBuffer::new(4, 2);
        assert!(encode(Some(&prev), &next).contains("\x1b[2J"));
    }
}
