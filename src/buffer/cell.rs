//! Cell: One column of a banner line.
//!
//! A cell holds a single grapheme cluster plus its styling. Wide graphemes
//! (CJK, most emoji) occupy two columns; the second column holds a
//! continuation cell with zero display width.

use bitflags::bitflags;

/// True-color RGB representation.
#[derive(Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Rgb {
    /// Red channel (0-255)
    pub r: u8,
    /// Green channel (0-255)
    pub g: u8,
    /// Blue channel (0-255)
    pub b: u8,
}

impl Rgb {
    /// Create a new RGB color.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Black (0, 0, 0)
    pub const BLACK: Self = Self::new(0, 0, 0);
    /// White (255, 255, 255)
    pub const WHITE: Self = Self::new(255, 255, 255);
    /// Terminal green (0, 255, 0), the default prompt color.
    pub const GREEN: Self = Self::new(0, 255, 0);
    /// Default foreground (white)
    pub const DEFAULT_FG: Self = Self::WHITE;
    /// Default background (black)
    pub const DEFAULT_BG: Self = Self::BLACK;

    /// Create from a 24-bit hex color (e.g., 0xFF5500).
    #[inline]
    pub const fn from_u32(hex: u32) -> Self {
        Self::new(
            ((hex >> 16) & 0xFF) as u8,
            ((hex >> 8) & 0xFF) as u8,
            (hex & 0xFF) as u8,
        )
    }

    /// Parse a CSS-style hex color: `#rgb` or `#rrggbb` (leading `#` optional).
    pub fn parse_hex(s: &str) -> Option<Self> {
        let digits = s.strip_prefix('#').unwrap_or(s);
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        match digits.len() {
            3 => {
                let v = u32::from_str_radix(digits, 16).ok()?;
                #[allow(clippy::cast_possible_truncation)]
                let nibble = |shift: u32| ((v >> shift) & 0xF) as u8 * 0x11;
                Some(Self::new(nibble(8), nibble(4), nibble(0)))
            }
            6 => u32::from_str_radix(digits, 16).ok().map(Self::from_u32),
            _ => None,
        }
    }

    /// Format as a CSS hex color, using the short `#rgb` form when exact.
    pub fn to_css_hex(self) -> String {
        let short = |c: u8| c % 0x11 == 0;
        if short(self.r) && short(self.g) && short(self.b) {
            format!("#{:x}{:x}{:x}", self.r / 0x11, self.g / 0x11, self.b / 0x11)
        } else {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        }
    }
}

impl std::fmt::Debug for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

bitflags! {
    /// Text style modifiers.
    ///
    /// # Example
    /// ```
    /// use typecycler::Modifiers;
    /// let style = Modifiers::BOLD | Modifiers::ITALIC;
    /// assert!(style.contains(Modifiers::BOLD));
    /// ```
    #[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Modifiers: u8 {
        /// Bold text
        const BOLD = 0b0000_0001;
        /// Dim/faint text
        const DIM = 0b0000_0010;
        /// Italic text
        const ITALIC = 0b0000_0100;
        /// Underlined text
        const UNDERLINE = 0b0000_1000;
        /// Reversed colors (fg/bg swapped)
        const REVERSED = 0b0010_0000;
    }
}

impl std::fmt::Debug for Modifiers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        bitflags::parser::to_writer(self, f)
    }
}

/// A single terminal cell.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Cell {
    /// The grapheme cluster shown in this column (empty for continuations).
    grapheme: String,
    /// Display width (0 = continuation, 1 = normal, 2 = wide).
    display_width: u8,
    fg: Rgb,
    bg: Rgb,
    modifiers: Modifiers,
}

/// Columns a grapheme occupies in a cell grid: 1 or 2.
pub(crate) fn grapheme_width(grapheme: &str) -> u8 {
    match unicode_width::UnicodeWidthStr::width(grapheme) {
        0 | 1 => 1,
        _ => 2,
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::blank()
    }
}

impl Cell {
    /// A blank cell (space with default colors).
    pub fn blank() -> Self {
        Self {
            grapheme: String::from(" "),
            display_width: 1,
            fg: Rgb::DEFAULT_FG,
            bg: Rgb::DEFAULT_BG,
            modifiers: Modifiers::empty(),
        }
    }

    /// Create a cell from a grapheme cluster.
    ///
    /// The width is clamped to one or two columns, so long emoji sequences
    /// and zero-width clusters still fill exactly the cells they are given.
    pub fn from_grapheme(grapheme: &str) -> Self {
        Self {
            grapheme: grapheme.to_string(),
            display_width: grapheme_width(grapheme),
            ..Self::blank()
        }
    }

    /// Create the trailing half of a wide grapheme.
    pub fn continuation() -> Self {
        Self {
            grapheme: String::new(),
            display_width: 0,
            ..Self::blank()
        }
    }

    /// The grapheme stored in this cell.
    #[inline]
    pub fn grapheme(&self) -> &str {
        &self.grapheme
    }

    /// Check if this is a wide-character continuation.
    #[inline]
    pub const fn is_continuation(&self) -> bool {
        self.display_width == 0
    }

    /// Display width (0, 1, or 2).
    #[inline]
    pub const fn display_width(&self) -> u8 {
        self.display_width
    }

    /// Foreground color.
    #[inline]
    pub const fn fg(&self) -> Rgb {
        self.fg
    }

    /// Background color.
    #[inline]
    pub const fn bg(&self) -> Rgb {
        self.bg
    }

    /// Text modifiers.
    #[inline]
    pub const fn modifiers(&self) -> Modifiers {
        self.modifiers
    }

    /// Set the foreground color (builder pattern).
    #[inline]
    #[must_use]
    pub const fn with_fg(mut self, fg: Rgb) -> Self {
        self.fg = fg;
        self
    }

    /// Set the background color (builder pattern).
    #[inline]
    #[must_use]
    pub const fn with_bg(mut self, bg: Rgb) -> Self {
        self.bg = bg;
        self
    }

    /// Set the modifiers (builder pattern).
    #[inline]
    #[must_use]
    pub const fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }
}

impl std::fmt::Debug for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cell")
            .field("grapheme", &self.grapheme)
            .field("width", &self.display_width)
            .field("fg", &self.fg)
            .field("bg", &self.bg)
            .field("modifiers", &self.modifiers)
            .finish()
    }
}
