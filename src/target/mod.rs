//! Display targets: where rendered frames go.
//!
//! The cycler only produces [`Frame`]s. A [`DisplayTarget`] is the single
//! surface the host gives it to show them on:
//!
//! - [`MarkupTarget`]: keeps the latest frame as HTML markup
//! - [`TerminalTarget`]: rewrites one terminal line in place
//! - [`RecordingTarget`]: keeps every frame, in order
//! - [`Banner`](crate::widget::Banner): draws into a cell [`Buffer`](crate::Buffer)

mod terminal;

pub use terminal::TerminalTarget;

use crate::cycler::Frame;
use std::io;

/// A surface that shows one frame at a time.
pub trait DisplayTarget {
    /// Replace the displayed content with `frame`.
    fn show(&mut self, frame: &Frame) -> io::Result<()>;
}

impl<T: DisplayTarget + ?Sized> DisplayTarget for &mut T {
    fn show(&mut self, frame: &Frame) -> io::Result<()> {
        (**self).show(frame)
    }
}

impl<T: DisplayTarget + ?Sized> DisplayTarget for Box<T> {
    fn show(&mut self, frame: &Frame) -> io::Result<()> {
        (**self).show(frame)
    }
}

/// Holds the markup of the most recent frame.
#[derive(Debug, Default, Clone)]
pub struct MarkupTarget {
    markup: String,
    writes: usize,
}

impl MarkupTarget {
    /// Create an empty markup target.
    pub fn new() -> Self {
        Self::default()
    }

    /// The current markup.
    pub fn markup(&self) -> &str {
        &self.markup
    }

    /// How many frames have been shown.
    pub const fn writes(&self) -> usize {
        self.writes
    }
}

impl DisplayTarget for MarkupTarget {
    fn show(&mut self, frame: &Frame) -> io::Result<()> {
        self.markup = frame.markup();
        self.writes += 1;
        Ok(())
    }
}

/// Records every frame shown.
#[derive(Debug, Default, Clone)]
pub struct RecordingTarget {
    frames: Vec<Frame>,
}

impl RecordingTarget {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// All frames, oldest first.
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// The most recent frame.
    pub fn last(&self) -> Option<&Frame> {
        self.frames.last()
    }

    /// Bodies of all frames, oldest first.
    pub fn bodies(&self) -> Vec<&str> {
        self.frames.iter().map(Frame::body).collect()
    }
}

impl DisplayTarget for RecordingTarget {
    fn show(&mut self, frame: &Frame) -> io::Result<()> {
        self.frames.push(frame.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::Rgb;
    use crate::cycler::FrameKind;

    fn frame(body: &str) -> Frame {
        Frame::new("root@kali:~# ", Rgb::GREEN, body, FrameKind::Live)
    }

    #[test]
    fn test_markup_target_keeps_latest() {
        let mut target = MarkupTarget::new();
        target.show(&frame("O")).unwrap();
        target.show(&frame("OS")).unwrap();
        assert_eq!(
            target.markup(),
            "<span style=\"color: #0f0; opacity: 1;\">root@kali:~# </span>OS"
        );
        assert_eq!(target.writes(), 2);
    }

    #[test]
    fn test_recording_target_keeps_order() {
        let mut target = RecordingTarget::new();
        for body in ["O", "OS", "O"] {
            target.show(&frame(body)).unwrap();
        }
        assert_eq!(target.bodies(), vec!["O", "OS", "O"]);
        assert_eq!(target.last().map(Frame::body), Some("O"));
    }

    fn show_via<T: DisplayTarget>(mut target: T, body: &str) {
        target.show(&frame(body)).unwrap();
    }

    #[test]
    fn test_show_through_mut_ref_and_box() {
        let mut recorder = RecordingTarget::new();
        show_via(&mut recorder, "A");
        show_via(Box::new(MarkupTarget::new()) as Box<dyn DisplayTarget>, "B");
        assert_eq!(recorder.bodies(), vec!["A"]);
    }
}
