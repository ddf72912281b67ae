//! Error types for accessible-pairs-core.

use std::fmt;
use thiserror::Error;

/// A single sRGB channel, used to point at the offending value in errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    /// Red channel
    Red,
    /// Green channel
    Green,
    /// Blue channel
    Blue,
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Red => write!(f, "red"),
            Self::Green => write!(f, "green"),
            Self::Blue => write!(f, "blue"),
        }
    }
}

/// Errors raised while validating colors or contrast settings.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ColorError {
    /// A channel is non-finite or lies outside [0.0, 1.0].
    #[error("invalid color input: {channel} channel is {value} (expected a number in [0, 1])")]
    InvalidColorInput {
        /// Offending channel.
        channel: Channel,
        /// Value as read from the source.
        value: f64,
    },

    /// Hex string contains non-hex characters.
    #[error("invalid hex characters")]
    InvalidHex,

    /// Hex string has the wrong number of digits.
    #[error("invalid hex string length {0} (expected 6)")]
    InvalidLength(usize),

    /// Minimum contrast threshold is non-finite or negative.
    #[error("invalid contrast threshold: {0}")]
    InvalidThreshold(f64),
}
