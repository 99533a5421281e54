//! # Typecycler
//!
//! A self-looping "typewriter" text animator for terminal and web banners.
//!
//! A [`TextCycler`] types a phrase one grapheme at a time after a fixed,
//! colored prefix, holds it, deletes it, pauses, and moves on to the next
//! phrase forever. While typing it occasionally runs a short glitch: a few
//! frames with random characters swapped for symbols, then a restore.
//!
//! ## Core Concepts
//!
//! - **Pure state machine**: [`TextCycler`] never sleeps; each step returns
//!   the frame to show and the delay before the next step
//! - **Pluggable randomness**: every random draw goes through a
//!   [`RandomSource`], so runs can be seeded or fully scripted
//! - **Display targets**: frames go to a [`DisplayTarget`] (HTML markup, a
//!   terminal line, a cell [`Buffer`] via [`Banner`], or a recorder)
//! - **Explicit cancellation**: a [`CyclerActor`] runs until `dispose`
//!
//! ## Example
//!
//! ```
//! use std::time::Duration;
//! use typecycler::{Driver, MarkupTarget, ScriptedRandom, TextCycler};
//!
//! let cycler = TextCycler::new("root@kali:~# ", ["OSINT", "VAPT"], ScriptedRandom::constant(0.5))?;
//! let mut driver = Driver::new(cycler, MarkupTarget::new());
//! driver.start()?;
//! driver.advance_to(Duration::from_millis(140))?;
//! assert!(driver.target().markup().ends_with("</span>OSI"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod actor;
pub mod buffer;
pub mod config;
pub mod cycler;
pub mod error;
pub mod layout;
pub mod random;
pub mod target;
pub mod widget;

// Re-exports for convenience
pub use actor::{CyclerActor, Driver};
pub use buffer::{Buffer, Cell, Modifiers, Rgb};
pub use config::CyclerConfig;
pub use cycler::{Frame, FrameKind, GlitchSettings, GlitchStart, GlitchTick, Mode, StepOutcome, TextCycler, Timing};
pub use error::{CyclerError, Result};
pub use layout::Rect;
pub use random::{RandomSource, ScriptedRandom, SeededRandom, ThreadRandom};
pub use target::{DisplayTarget, MarkupTarget, RecordingTarget, TerminalTarget};
pub use widget::{Banner, BannerConfig, Widget};
