//! Rect: the region of a buffer a banner occupies.

/// A rectangle defined by position and size.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    /// X coordinate (column) of the top-left corner.
    pub x: u16,
    /// Y coordinate (row) of the top-left corner.
    pub y: u16,
    /// Width in columns.
    pub width: u16,
    /// Height in rows.
    pub height: u16,
}

impl Rect {
    /// Create a new rectangle.
    #[inline]
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self { x, y, width, height }
    }

    /// A single row starting at (x, y).
    #[inline]
    pub const fn line(x: u16, y: u16, width: u16) -> Self {
        Self::new(x, y, width, 1)
    }

    /// Check if the rectangle is empty.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Get the right edge (exclusive).
    #[inline]
    pub const fn right(&self) -> u16 {
        self.x.saturating_add(self.width)
    }
}

impl std::fmt::Debug for Rect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Rect({}, {} {}x{})", self.x, self.y, self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_line() {
        let rect = Rect::line(2, 3, 10);
        assert_eq!(rect.height, 1);
        assert_eq!(rect.right(), 12);
        assert!(!rect.is_empty());
        assert!(Rect::line(0, 0, 0).is_empty());
    }

    #[test]
    fn test_rect_right_saturates() {
        assert_eq!(Rect::line(u16::MAX - 1, 0, 10).right(), u16::MAX);
    }
}
