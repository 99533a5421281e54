//! Glitch: a short burst of corrupted frames over the visible text.
//!
//! A glitch fires from inside a step and then runs on its own chain of
//! delayed continuations, interleaved with the step chain:
//!
//! ```text
//! t0            t0+40ms       t0+80ms       t0+120ms
//! corrupt #1    corrupt #2    corrupt #3    restore true text
//! ```
//!
//! The corrupted frames always corrupt the text captured when the glitch
//! fired. The restore renders whatever is visible by then.

use super::frame::{Frame, FrameKind};
use crate::config::GLITCH_ALPHABET;
use crate::error::{CyclerError, Result};
use crate::random::RandomSource;
use std::time::Duration;
use unicode_segmentation::UnicodeSegmentation;

/// Glitch tuning.
#[derive(Debug, Clone, PartialEq)]
pub struct GlitchSettings {
    /// Chance per step that a glitch starts.
    pub probability: f64,
    /// Corrupted frames per glitch.
    pub iterations: u8,
    /// Total duration, split evenly across iterations.
    pub duration: Duration,
    /// Chance each character is replaced.
    pub char_probability: f64,
    /// Replacement symbols.
    pub alphabet: Vec<char>,
}

impl Default for GlitchSettings {
    fn default() -> Self {
        Self {
            probability: 0.08,
            iterations: 3,
            duration: Duration::from_millis(120),
            char_probability: 0.3,
            alphabet: GLITCH_ALPHABET.chars().collect(),
        }
    }
}

impl GlitchSettings {
    /// Settings that never fire.
    pub fn disabled() -> Self {
        Self {
            probability: 0.0,
            ..Self::default()
        }
    }

    /// Reject settings the glitch sequence cannot run with.
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.probability) {
            return Err(CyclerError::InvalidConfig(format!(
                "glitch probability {} outside [0, 1]",
                self.probability
            )));
        }
        if !(0.0..=1.0).contains(&self.char_probability) {
            return Err(CyclerError::InvalidConfig(format!(
                "glitch char probability {} outside [0, 1]",
                self.char_probability
            )));
        }
        if self.iterations == 0 {
            return Err(CyclerError::InvalidConfig(
                "glitch needs at least one iteration".to_string(),
            ));
        }
        if self.alphabet.is_empty() {
            return Err(CyclerError::InvalidConfig(
                "glitch alphabet must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Suspension between corrupted frames.
    pub fn interval(&self) -> Duration {
        self.duration / u32::from(self.iterations.max(1))
    }

    /// Build a corrupted copy of `text`.
    ///
    /// Each grapheme is independently replaced by a random alphabet symbol
    /// with probability `char_probability`. The result has the same number
    /// of graphemes as `text`.
    pub fn corrupt<R: RandomSource + ?Sized>(&self, text: &str, random: &mut R) -> String {
        let mut out = String::with_capacity(text.len());
        for grapheme in text.graphemes(true) {
            if random.next_f64() < self.char_probability {
                out.push(self.random_symbol(random));
            } else {
                out.push_str(grapheme);
            }
        }
        out
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
    fn random_symbol<R: RandomSource + ?Sized>(&self, random: &mut R) -> char {
        let len = self.alphabet.len();
        let idx = (random.next_f64() * len as f64) as usize;
        self.alphabet[idx.min(len - 1)]
    }
}

/// What a glitch continuation produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GlitchTick {
    /// Another corrupted frame; the next continuation is due after `next_in`.
    Frame {
        /// The corrupted frame.
        frame: Frame,
        /// Delay until the next continuation.
        next_in: Duration,
    },
    /// The sequence is over; show the true rendering again.
    Restore(Frame),
}

/// A corrupted frame emitted inline when a glitch fires.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlitchStart {
    /// The first corrupted frame.
    pub frame: Frame,
    /// Delay until the first continuation.
    pub next_in: Duration,
}

/// An in-flight glitch.
#[derive(Debug, Clone)]
pub(crate) struct Glitch {
    /// Visible text when the glitch fired.
    source: String,
    emitted: u8,
}

impl Glitch {
    pub(crate) fn new(source: &str) -> Self {
        Self {
            source: source.to_string(),
            emitted: 0,
        }
    }

    /// Emit the next corrupted frame, or `None` once all iterations ran.
    pub(crate) fn next_frame<R: RandomSource + ?Sized>(
        &mut self,
        prefix: &str,
        prefix_color: crate::buffer::Rgb,
        settings: &GlitchSettings,
        random: &mut R,
    ) -> Option<Frame> {
        if self.emitted >= settings.iterations {
            return None;
        }
        self.emitted += 1;
        let body = settings.corrupt(&self.source, random);
        Some(Frame::new(prefix, prefix_color, body, FrameKind::Glitch))
    }
}
