//! Text cycler: the type/hold/delete/pause state machine.
//!
//! A [`TextCycler`] owns a fixed prefix and a cyclic list of phrases. Each
//! call to [`TextCycler::step`] grows or shrinks the visible text by one
//! grapheme and reports how long the host should wait before the next step:
//!
//! ```text
//!            type 70ms           full: hold 3000ms
//!   "" ──▶ "O" ──▶ … ──▶ "OSINT" ─────────────────┐
//!    ▲                                             ▼
//!    │  empty: pause 700ms, next phrase     Deleting, 40ms
//!    └──────────────────────────── "" ◀── … ◀── "OSIN"
//! ```
//!
//! The cycler never sleeps and never schedules anything itself; a host
//! loop such as [`Driver`](crate::actor::Driver) calls `step` and
//! `glitch_tick` at the returned delays.
//!
//! # Example
//!
//! ```
//! use typecycler::{Mode, ScriptedRandom, TextCycler};
//!
//! let mut cycler = TextCycler::new("$ ", ["ab"], ScriptedRandom::constant(0.5)).unwrap();
//! assert_eq!(cycler.step().frame.body(), "a");
//! assert_eq!(cycler.step().frame.body(), "ab");
//! assert_eq!(cycler.mode(), Mode::Deleting);
//! ```

mod frame;
mod glitch;
mod phrase;

pub use frame::{Frame, FrameKind};
pub use glitch::{GlitchSettings, GlitchStart, GlitchTick};

use crate::buffer::Rgb;
use crate::config::CyclerConfig;
use crate::error::{CyclerError, Result};
use crate::random::{RandomSource, ThreadRandom};
use glitch::Glitch;
use phrase::Phrase;
use std::time::Duration;

/// Direction of the animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    /// Growing the visible text toward the current phrase.
    #[default]
    Typing,
    /// Shrinking the visible text toward empty.
    Deleting,
}

/// Step cadence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    /// Delay after a non-final typing step.
    pub type_delay: Duration,
    /// Delay after a non-final deleting step.
    pub delete_delay: Duration,
    /// Hold once a phrase is fully typed.
    pub hold: Duration,
    /// Pause once a phrase is fully erased.
    pub pause: Duration,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            type_delay: Duration::from_millis(70),
            delete_delay: Duration::from_millis(40),
            hold: Duration::from_millis(3000),
            pause: Duration::from_millis(700),
        }
    }
}

/// Result of one step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepOutcome {
    /// The true rendering after this step.
    pub frame: Frame,
    /// How long to wait before the next step.
    pub delay: Duration,
    /// Set when this step fired a glitch.
    pub glitch: Option<GlitchStart>,
}

/// A self-looping typewriter over a fixed prefix and a cyclic phrase list.
#[derive(Debug)]
pub struct TextCycler<R = ThreadRandom> {
    prefix: String,
    prefix_color: Rgb,
    phrases: Vec<Phrase>,
    index: usize,
    /// Visible length in graphemes.
    visible: usize,
    mode: Mode,
    delay: Duration,
    timing: Timing,
    glitch_settings: GlitchSettings,
    glitch: Option<Glitch>,
    random: R,
}

impl<R: RandomSource> TextCycler<R> {
    /// Create a cycler with default timing, glitch tuning and prefix color.
    ///
    /// Fails with [`CyclerError::InvalidConfig`] if `phrases` is empty.
    pub fn new<I>(prefix: impl Into<String>, phrases: I, random: R) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let phrases: Vec<Phrase> = phrases
            .into_iter()
            .map(|p| Phrase::new(p.into()))
            .collect();
        if phrases.is_empty() {
            return Err(CyclerError::InvalidConfig(
                "phrase list must not be empty".to_string(),
            ));
        }

        let timing = Timing::default();
        Ok(Self {
            prefix: prefix.into(),
            prefix_color: Rgb::GREEN,
            phrases,
            index: 0,
            visible: 0,
            mode: Mode::Typing,
            delay: timing.type_delay,
            timing,
            glitch_settings: GlitchSettings::default(),
            glitch: None,
            random,
        })
    }

    /// Create a cycler from a validated configuration.
    pub fn from_config(config: &CyclerConfig, random: R) -> Result<Self> {
        config.validate()?;
        let prefix_color = config.prefix_rgb()?;
        let cycler = Self::new(config.prefix.clone(), config.phrases.iter().cloned(), random)?
            .with_timing(config.timing.into())
            .with_prefix_color(prefix_color);
        cycler.with_glitch((&config.glitch).into())
    }

    /// Replace the step cadence.
    #[must_use]
    pub const fn with_timing(mut self, timing: Timing) -> Self {
        self.delay = timing.type_delay;
        self.timing = timing;
        self
    }

    /// Replace the prefix color.
    #[must_use]
    pub const fn with_prefix_color(mut self, color: Rgb) -> Self {
        self.prefix_color = color;
        self
    }

    /// Replace the glitch tuning.
    pub fn with_glitch(mut self, settings: GlitchSettings) -> Result<Self> {
        settings.validate()?;
        self.glitch_settings = settings;
        Ok(self)
    }

    /// The fixed prefix.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Number of phrases.
    pub fn phrase_count(&self) -> usize {
        self.phrases.len()
    }

    /// Index of the phrase currently being typed or deleted.
    pub const fn current_phrase_index(&self) -> usize {
        self.index
    }

    /// The phrase currently being typed or deleted.
    pub fn current_phrase(&self) -> &str {
        self.phrases[self.index].as_str()
    }

    /// The animated text currently shown after the prefix.
    pub fn visible_text(&self) -> &str {
        self.phrases[self.index].head(self.visible)
    }

    /// Current direction.
    pub const fn mode(&self) -> Mode {
        self.mode
    }

    /// Delay computed by the most recent step.
    pub const fn step_delay(&self) -> Duration {
        self.delay
    }

    /// Whether a glitch sequence is in flight.
    pub const fn is_glitching(&self) -> bool {
        self.glitch.is_some()
    }

    /// The step cadence.
    pub const fn timing(&self) -> Timing {
        self.timing
    }

    /// The glitch tuning.
    pub const fn glitch_settings(&self) -> &GlitchSettings {
        &self.glitch_settings
    }

    /// Render the prefix followed by the visible text.
    pub fn render(&self) -> Frame {
        Frame::new(&self.prefix, self.prefix_color, self.visible_text(), FrameKind::Live)
    }

    /// Advance the state machine by one step.
    pub fn step(&mut self) -> StepOutcome {
        let target_len = self.phrases[self.index].len();
        self.visible = match self.mode {
            Mode::Typing => (self.visible + 1).min(target_len),
            Mode::Deleting => self.visible.saturating_sub(1),
        };

        let frame = self.render();
        let glitch = self.maybe_glitch();

        let mode = self.mode;
        self.delay = match mode {
            Mode::Typing if self.visible == target_len => {
                self.mode = Mode::Deleting;
                self.timing.hold
            }
            Mode::Typing => self.timing.type_delay,
            Mode::Deleting if self.visible == 0 => {
                self.mode = Mode::Typing;
                self.index = (self.index + 1) % self.phrases.len();
                tracing::debug!(phrase = self.index, "advancing to next phrase");
                self.timing.pause
            }
            Mode::Deleting => self.timing.delete_delay,
        };

        StepOutcome {
            frame,
            delay: self.delay,
            glitch,
        }
    }

    /// Run the next continuation of the in-flight glitch.
    ///
    /// Returns `None` when no glitch is in flight.
    pub fn glitch_tick(&mut self) -> Option<GlitchTick> {
        let glitch = self.glitch.as_mut()?;
        let next = glitch.next_frame(
            &self.prefix,
            self.prefix_color,
            &self.glitch_settings,
            &mut self.random,
        );
        Some(match next {
            Some(frame) => GlitchTick::Frame {
                frame,
                next_in: self.glitch_settings.interval(),
            },
            None => {
                self.glitch = None;
                GlitchTick::Restore(self.render())
            }
        })
    }

    fn maybe_glitch(&mut self) -> Option<GlitchStart> {
        // The roll is drawn every step, even when a glitch cannot start.
        let roll = self.random.next_f64();
        if roll >= self.glitch_settings.probability || self.visible == 0 || self.glitch.is_some() {
            return None;
        }

        tracing::debug!(text = self.visible_text(), "glitch triggered");
        let mut glitch = Glitch::new(self.visible_text());
        let frame = glitch.next_frame(
            &self.prefix,
            self.prefix_color,
            &self.glitch_settings,
            &mut self.random,
        )?;
        self.glitch = Some(glitch);
        Some(GlitchStart {
            frame,
            next_in: self.glitch_settings.interval(),
        })
    }
}
