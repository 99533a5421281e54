//! Widgets: buffer-backed display targets.
//!
//! [`Banner`] is both a [`Widget`] and a
//! [`DisplayTarget`](crate::target::DisplayTarget): a cycler writes frames
//! into it, and the host composes it into a [`Buffer`](crate::Buffer)
//! alongside whatever else is on screen.

mod banner;
mod traits;

pub use banner::{Banner, BannerConfig};
pub use traits::Widget;
