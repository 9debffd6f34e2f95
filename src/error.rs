//! Crate error type.
//!
//! Only parsing entry points return these. State mutators and event
//! handlers are total and log instead of failing.

use thiserror::Error;

/// Errors produced while parsing colors, profiles or SVG markup.
#[derive(Debug, Error)]
pub enum Error {
    /// Color text that is not `#RGB`, `#RRGGBB` or `#AARRGGBB`.
    #[error("invalid color: {0:?}")]
    InvalidColor(String),

    /// Profile JSON that could not be read or written.
    #[error("profile error: {0}")]
    Profile(#[from] serde_json::Error),

    /// SVG markup that could not be parsed or rasterized.
    #[error("svg error: {0}")]
    Svg(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
