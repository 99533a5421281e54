//! Layout module: placement of banner widgets within a buffer.

mod rect;

pub use rect::Rect;
