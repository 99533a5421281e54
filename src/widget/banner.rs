//! Banner Widget: one line showing the latest cycler frame.

use super::traits::Widget;
use crate::buffer::{grapheme_width, Buffer, Cell, Modifiers, Rgb};
use crate::cycler::{Frame, FrameKind};
use crate::layout::Rect;
use crate::target::DisplayTarget;
use std::io;
use unicode_segmentation::UnicodeSegmentation;

/// Configuration for the banner widget.
#[derive(Debug, Clone)]
pub struct BannerConfig {
    /// Body text color.
    pub body_fg: Rgb,
    /// Body color while a glitch frame is shown.
    pub glitch_fg: Rgb,
    /// Background color.
    pub bg: Rgb,
    /// Modifiers applied to the prefix.
    pub prefix_modifiers: Modifiers,
}

impl Default for BannerConfig {
    fn default() -> Self {
        Self {
            body_fg: Rgb::WHITE,
            glitch_fg: Rgb::WHITE,
            bg: Rgb::BLACK,
            prefix_modifiers: Modifiers::BOLD,
        }
    }
}

/// A single-line banner fed by a display target.
#[derive(Debug)]
pub struct Banner {
    frame: Option<Frame>,
    bounds: Rect,
    config: BannerConfig,
    dirty: bool,
}

impl Banner {
    /// Create a banner occupying the first row of `bounds`.
    pub fn new(bounds: Rect) -> Self {
        Self::with_config(bounds, BannerConfig::default())
    }

    /// Create a banner with custom configuration.
    pub const fn with_config(bounds: Rect, config: BannerConfig) -> Self {
        Self {
            frame: None,
            bounds,
            config,
            dirty: true,
        }
    }

    /// The frame currently displayed.
    pub const fn frame(&self) -> Option<&Frame> {
        self.frame.as_ref()
    }

    /// Draw `text` from column `x`, stopping at `right`. Returns the next column.
    #[allow(clippy::too_many_arguments)]
    fn draw_segment(
        buffer: &mut Buffer,
        mut x: u16,
        y: u16,
        right: u16,
        text: &str,
        fg: Rgb,
        bg: Rgb,
        modifiers: Modifiers,
    ) -> u16 {
        for grapheme in text.graphemes(true) {
            let width = u16::from(grapheme_width(grapheme));
            // A wide grapheme that would straddle the edge is dropped.
            if x.saturating_add(width) > right {
                break;
            }
            x += u16::from(buffer.set_grapheme(x, y, grapheme, fg, bg, modifiers));
        }
        x
    }
}

impl Widget for Banner {
    fn bounds(&self) -> Rect {
        self.bounds
    }

    fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
        self.dirty = true;
    }

    fn render(&self, buffer: &mut Buffer) {
        if self.bounds.is_empty() {
            return;
        }
        let (x, y) = (self.bounds.x, self.bounds.y);
        let right = self.bounds.right().min(buffer.width());

        buffer.fill_rect(x, y, self.bounds.width, 1, &Cell::blank().with_bg(self.config.bg));

        let Some(frame) = &self.frame else { return };
        let body_fg = match frame.kind() {
            FrameKind::Live => self.config.body_fg,
            FrameKind::Glitch => self.config.glitch_fg,
        };

        let col = Self::draw_segment(
            buffer,
            x,
            y,
            right,
            frame.prefix(),
            frame.prefix_color(),
            self.config.bg,
            self.config.prefix_modifiers,
        );
        Self::draw_segment(
            buffer,
            col,
            y,
            right,
            frame.body(),
            body_fg,
            self.config.bg,
            Modifiers::empty(),
        );
    }

    fn needs_redraw(&self) -> bool {
        self.dirty
    }

    fn clear_redraw(&mut self) {
        self.dirty = false;
    }
}

impl DisplayTarget for Banner {
    fn show(&mut self, frame: &Frame) -> io::Result<()> {
        if self.frame.as_ref() != Some(frame) {
            self.frame = Some(frame.clone());
            self.dirty = true;
        }
        Ok(())
    }
}
