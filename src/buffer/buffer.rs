//! Buffer: A grid of cells a banner is drawn into.
//!
//! Cells are stored in row-major order in one contiguous `Vec`.

use super::cell::{Cell, Modifiers, Rgb};

/// A grid of cells representing (part of) the terminal screen.
#[derive(Clone)]
pub struct Buffer {
    cells: Vec<Cell>,
    width: u16,
    height: u16,
}

impl Buffer {
    /// Create a new buffer with the given dimensions.
    ///
    /// # Panics
    /// Panics if width or height is 0.
    pub fn new(width: u16, height: u16) -> Self {
        assert!(width > 0 && height > 0, "Buffer dimensions must be non-zero");
        let size = (width as usize) * (height as usize);
        Self {
            cells: vec![Cell::blank(); size],
            width,
            height,
        }
    }

    /// Buffer width in columns.
    #[inline]
    pub const fn width(&self) -> u16 {
        self.width
    }

    #[inline]
    fn index_of(&self, x: u16, y: u16) -> Option<usize> {
        if x < self.width && y < self.height {
            Some((y as usize) * (self.width as usize) + (x as usize))
        } else {
            None
        }
    }

    /// Get a reference to a cell at (x, y).
    #[inline]
    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        self.index_of(x, y).map(|i| &self.cells[i])
    }

    /// Set a grapheme at (x, y).
    ///
    /// Wide graphemes also write a continuation cell at (x+1, y).
    /// Returns the display width written, or 0 if out of bounds.
    pub fn set_grapheme(
        &mut self,
        x: u16,
        y: u16,
        grapheme: &str,
        fg: Rgb,
        bg: Rgb,
        modifiers: Modifiers,
    ) -> u8 {
        let Some(idx) = self.index_of(x, y) else {
            return 0;
        };

        let cell = Cell::from_grapheme(grapheme)
            .with_fg(fg)
            .with_bg(bg)
            .with_modifiers(modifiers);
        let width = cell.display_width();
        self.cells[idx] = cell;

        if width == 2 {
            if let Some(next_idx) = self.index_of(x.saturating_add(1), y) {
                self.cells[next_idx] = Cell::continuation().with_bg(bg);
            }
        }

        width
    }

    /// Fill a rectangular region with a cell.
    pub fn fill_rect(&mut self, x: u16, y: u16, width: u16, height: u16, cell: &Cell) {
        for row in y..y.saturating_add(height).min(self.height) {
            for col in x..x.saturating_add(width).min(self.width) {
                if let Some(idx) = self.index_of(col, row) {
                    self.cells[idx] = cell.clone();
                }
            }
        }
    }

    /// The text of row `y`, continuation cells skipped.
    pub fn row_text(&self, y: u16) -> String {
        if y >= self.height {
            return String::new();
        }
        let start = (y as usize) * (self.width as usize);
        self.cells[start..start + self.width as usize]
            .iter()
            .filter(|c| !c.is_continuation())
            .map(Cell::grapheme)
            .collect()
    }
}

impl std::fmt::Debug for Buffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Buffer")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[should_panic(expected = "non-zero")]
    fn test_buffer_zero_width() {
        Buffer::new(0, 1);
    }

    #[test]
    fn test_buffer_bounds() {
        let mut buffer = Buffer::new(10, 2);
        assert!(buffer.get(9, 1).is_some());
        assert!(buffer.get(10, 1).is_none());
        let out = buffer.set_grapheme(0, 2, "x", Rgb::WHITE, Rgb::BLACK, Modifiers::empty());
        assert_eq!(out, 0);
    }

    #[test]
    fn test_buffer_wide_grapheme() {
        let mut buffer = Buffer::new(10, 1);
        let width = buffer.set_grapheme(2, 0, "日", Rgb::WHITE, Rgb::BLACK, Modifiers::empty());
        assert_eq!(width, 2);
        assert!(buffer.get(3, 0).unwrap().is_continuation());
        assert_eq!(buffer.row_text(0), format!("  日{}", " ".repeat(6)));
    }

    #[test]
    fn test_buffer_fill_rect() {
        let mut buffer = Buffer::new(4, 2);
        buffer.fill_rect(1, 0, 2, 1, &Cell::from_grapheme("#"));
        assert_eq!(buffer.row_text(0), " ## ");
        assert_eq!(buffer.row_text(1), "    ");
        buffer.fill_rect(3, 1, 10, 10, &Cell::from_grapheme("#"));
        assert_eq!(buffer.row_text(1), "   #");
    }

    #[test]
    fn test_buffer_overwide_cluster_takes_two_columns() {
        let mut buffer = Buffer::new(4, 1);
        let width = buffer.set_grapheme(0, 0, "日本", Rgb::WHITE, Rgb::BLACK, Modifiers::empty());
        assert_eq!(width, 2);
        assert!(buffer.get(1, 0).unwrap().is_continuation());
        assert_eq!(buffer.get(2, 0).unwrap().grapheme(), " ");
    }
}
