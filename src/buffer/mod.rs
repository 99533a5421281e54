//! Buffer module: the cell grid a banner widget draws into.
//!
//! - [`Cell`]: one column holding a grapheme and its style
//! - [`Buffer`]: a grid of cells
//! - [`Rgb`]: true-color representation
//! - [`Modifiers`]: text style bitflags

mod cell;
#[allow(clippy::module_inception)]
mod buffer;

pub use cell::{Cell, Modifiers, Rgb};
pub(crate) use cell::grapheme_width;
pub use buffer::Buffer;
