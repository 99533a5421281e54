//! `TerminalTarget`: rewrites a single terminal line per frame.
//!
//! Each frame is queued into a scratch buffer and flushed to the writer in
//! one `write_all`, so the prefix, body and line clear land together and
//! the line never shows a half-drawn frame.

use super::DisplayTarget;
use crate::buffer::Rgb;
use crate::cycler::Frame;
use crossterm::{
    cursor::MoveToColumn,
    queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{Clear, ClearType},
};
use std::io::{self, Stdout, Write};

/// Shows frames on the writer's current line.
pub struct TerminalTarget<W: Write> {
    writer: W,
    /// Scratch buffer reused across frames.
    output: Vec<u8>,
    body_fg: Option<Rgb>,
}

const fn to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

impl TerminalTarget<Stdout> {
    /// Target the process's stdout.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> TerminalTarget<W> {
    /// Wrap a writer.
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            output: Vec::with_capacity(256),
            body_fg: None,
        }
    }

    /// Draw the body in a fixed color instead of the terminal default.
    #[must_use]
    pub fn with_body_color(mut self, color: Rgb) -> Self {
        self.body_fg = Some(color);
        self
    }

    /// Borrow the underlying writer.
    pub const fn get_ref(&self) -> &W {
        &self.writer
    }

    /// Unwrap the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> DisplayTarget for TerminalTarget<W> {
    fn show(&mut self, frame: &Frame) -> io::Result<()> {
        self.output.clear();
        queue!(
            &mut self.output,
            MoveToColumn(0),
            SetForegroundColor(to_color(frame.prefix_color())),
            Print(frame.prefix()),
            ResetColor,
        )?;
        if let Some(fg) = self.body_fg {
            queue!(&mut self.output, SetForegroundColor(to_color(fg)))?;
        }
        queue!(
            &mut self.output,
            Print(frame.body()),
            ResetColor,
            Clear(ClearType::UntilNewLine),
        )?;

        self.writer.write_all(&self.output)?;
        self.writer.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cycler::FrameKind;

    fn shown(target: TerminalTarget<Vec<u8>>) -> String {
        String::from_utf8(target.into_inner()).unwrap()
    }

    #[test]
    fn test_writes_colored_prefix_then_body() {
        let mut target = TerminalTarget::new(Vec::new());
        let frame = Frame::new("root@kali:~# ", Rgb::GREEN, "OSI", FrameKind::Live);
        target.show(&frame).unwrap();

        let out = shown(target);
        let color = out.find("\x1b[38;2;0;255;0m").unwrap();
        let prefix = out.find("root@kali:~# ").unwrap();
        let body = out.find("OSI").unwrap();
        assert!(color < prefix && prefix < body);
        assert!(out.ends_with("\x1b[K"));
    }

    #[test]
    fn test_body_color() {
        let mut target = TerminalTarget::new(Vec::new()).with_body_color(Rgb::new(1, 2, 3));
        target
            .show(&Frame::new("$ ", Rgb::GREEN, "x", FrameKind::Live))
            .unwrap();
        assert!(shown(target).contains("\x1b[38;2;1;2;3mx"));
    }

    #[test]
    fn test_each_frame_rewrites_line() {
        let mut target = TerminalTarget::new(Vec::new());
        for body in ["O", "OS"] {
            target
                .show(&Frame::new("$ ", Rgb::GREEN, body, FrameKind::Live))
                .unwrap();
        }
        assert_eq!(shown(target).matches("\x1b[K").count(), 2);
    }
}
