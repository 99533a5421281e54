//! Cycler configuration, loadable from TOML.
//!
//! Every field has a default matching the stock hero banner, so a config
//! file only needs to name what it overrides:
//!
//! ```toml
//! prefix = "guest@host:~$ "
//! phrases = ["Rust", "Systems"]
//!
//! [timing]
//! hold_ms = 1500
//! ```

use crate::buffer::Rgb;
use crate::cycler::{GlitchSettings, Timing};
use crate::error::{CyclerError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Symbols a glitch may substitute for a visible character.
pub const GLITCH_ALPHABET: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?";

/// Top-level cycler configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CyclerConfig {
    /// Fixed lead-in rendered before every frame.
    pub prefix: String,
    /// Phrases typed and deleted in order, cyclically.
    pub phrases: Vec<String>,
    /// Prefix color as `#rgb` or `#rrggbb`.
    pub prefix_color: String,
    /// Step cadence.
    pub timing: TimingConfig,
    /// Glitch effect tuning.
    pub glitch: GlitchConfig,
}

impl Default for CyclerConfig {
    fn default() -> Self {
        Self {
            prefix: "root@kali:~# ".to_string(),
            phrases: [
                "Digital Forensics",
                "OSINT",
                "Malware Analysis",
                "DFIR",
                "Bug Bounty",
                "Content Creation",
                "Incident Response",
                "SOC Analyst",
                "SIEM Management",
                "VAPT",
                "Penetration Testing",
                "Cybersecurity",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
            prefix_color: "#0f0".to_string(),
            timing: TimingConfig::default(),
            glitch: GlitchConfig::default(),
        }
    }
}

/// Step delays in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    /// Delay after a non-final typing step.
    pub type_ms: u64,
    /// Delay after a non-final deleting step.
    pub delete_ms: u64,
    /// Hold once a phrase is fully typed.
    pub hold_ms: u64,
    /// Pause once a phrase is fully erased.
    pub pause_ms: u64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            type_ms: 70,
            delete_ms: 40,
            hold_ms: 3000,
            pause_ms: 700,
        }
    }
}

impl From<TimingConfig> for Timing {
    fn from(config: TimingConfig) -> Self {
        Self {
            type_delay: Duration::from_millis(config.type_ms),
            delete_delay: Duration::from_millis(config.delete_ms),
            hold: Duration::from_millis(config.hold_ms),
            pause: Duration::from_millis(config.pause_ms),
        }
    }
}

/// Glitch effect tuning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlitchConfig {
    /// Chance per step that a glitch starts.
    pub probability: f64,
    /// Corrupted frames per glitch.
    pub iterations: u8,
    /// Total glitch duration in milliseconds, split evenly across iterations.
    pub duration_ms: u64,
    /// Chance each character is replaced in a corrupted frame.
    pub char_probability: f64,
    /// Replacement symbols.
    pub alphabet: String,
}

impl Default for GlitchConfig {
    fn default() -> Self {
        Self {
            probability: 0.08,
            iterations: 3,
            duration_ms: 120,
            char_probability: 0.3,
            alphabet: GLITCH_ALPHABET.to_string(),
        }
    }
}

impl From<&GlitchConfig> for GlitchSettings {
    fn from(config: &GlitchConfig) -> Self {
        Self {
            probability: config.probability,
            iterations: config.iterations,
            duration: Duration::from_millis(config.duration_ms),
            char_probability: config.char_probability,
            alphabet: config.alphabet.chars().collect(),
        }
    }
}

impl CyclerConfig {
    /// Parse a TOML document and validate it.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a TOML config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&content)
    }

    /// Check the values a cycler cannot run with.
    pub fn validate(&self) -> Result<()> {
        if self.phrases.is_empty() {
            return Err(CyclerError::InvalidConfig(
                "phrase list must not be empty".to_string(),
            ));
        }
        self.prefix_rgb()?;
        GlitchSettings::from(&self.glitch).validate()
    }

    /// The prefix color as [`Rgb`].
    pub fn prefix_rgb(&self) -> Result<Rgb> {
        Rgb::parse_hex(&self.prefix_color).ok_or_else(|| {
            CyclerError::InvalidConfig(format!("bad prefix color {:?}", self.prefix_color))
        })
    }
}
