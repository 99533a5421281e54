//! Frame: one rendering of the banner.

use crate::buffer::Rgb;

/// Whether a frame shows the true text or a glitch corruption of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FrameKind {
    /// Prefix followed by the visible text.
    Live,
    /// Prefix followed by a corrupted copy of the visible text.
    Glitch,
}

/// A rendered banner: a colored prefix segment followed by plain body text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Frame {
    prefix: String,
    prefix_color: Rgb,
    body: String,
    kind: FrameKind,
}

impl Frame {
    /// Build a frame.
    pub fn new(prefix: &str, prefix_color: Rgb, body: impl Into<String>, kind: FrameKind) -> Self {
        Self {
            prefix: prefix.to_string(),
            prefix_color,
            body: body.into(),
            kind,
        }
    }

    /// The fixed prefix.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Color of the prefix segment.
    pub const fn prefix_color(&self) -> Rgb {
        self.prefix_color
    }

    /// Text after the prefix.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Live or glitch.
    pub const fn kind(&self) -> FrameKind {
        self.kind
    }

    /// Prefix and body as one plain string.
    pub fn text(&self) -> String {
        format!("{}{}", self.prefix, self.body)
    }

    /// HTML markup: the prefix in a colored span, then the body.
    ///
    /// Both segments are escaped; glitch symbols include `<`, `>` and `&`.
    pub fn markup(&self) -> String {
        format!(
            "<span style=\"color: {}; opacity: 1;\">{}</span>{}",
            self.prefix_color.to_css_hex(),
            escape_html(&self.prefix),
            escape_html(&self.body),
        )
    }
}

fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}
