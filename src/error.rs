//! Error types for the text cycler.

use thiserror::Error;

/// Errors returned while building or driving a [`TextCycler`](crate::TextCycler).
#[derive(Error, Debug)]
pub enum CyclerError {
    /// The cycler was configured with values it cannot animate
    /// (e.g. an empty phrase list).
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Writing a frame to a display target failed.
    #[error("display target error: {0}")]
    Io(#[from] std::io::Error),

    /// A TOML configuration document could not be parsed.
    #[error("config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),
}

/// Result type for cycler operations.
pub type Result<T> = std::result::Result<T, CyclerError>;
