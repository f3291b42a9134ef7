//! Error types for color conversions.

use thiserror::Error;

use crate::{
    color::{Channels, Component},
    difference::Weights,
};

/// Error type for color conversions and color differences.
#[derive(Error, Clone, Debug, PartialEq)]
pub enum Error {
    /// An RGB channel was given a value outside of [0, 255].
    #[error("{channel} channel out of range: {value} is not in [0, 255]")]
    ChannelOutOfRange {
        /// Name of the offending channel.
        channel: &'static str,
        /// The rejected value.
        value: Component,
    },

    /// An RGB channel was given a value with a fractional part.
    #[error("{channel} channel must be an integer, got {value}")]
    NonIntegerChannel {
        /// Name of the offending channel.
        channel: &'static str,
        /// The rejected value.
        value: Component,
    },

    /// A conversion back to 8-bit RGB produced channels that can not be
    /// displayed.
    #[error("color is outside of the sRGB gamut: {channels:?} of {rgb:?}")]
    OutOfGamut {
        /// The channels outside of [0, 255].
        channels: Channels,
        /// The unclamped, rounded channel values.
        rgb: [i32; 3],
    },

    /// A NaN or infinite component was passed where a real value is required,
    /// or a color difference overflowed.
    #[error("color has a NaN or infinite component")]
    NonFinite,

    /// A CIEDE2000 weighting factor was zero, negative or not finite.
    #[error("weighting factors must be finite and greater than zero, got {0:?}")]
    InvalidWeights(Weights),

    /// Text could not be parsed as a color.
    #[error("invalid color {0:?}: expected three comma separated channels")]
    Parse(String),

    /// Text could not be parsed as weighting factors.
    #[error("invalid weights {0:?}: expected three comma separated factors `kl,kc,kh`")]
    ParseWeights(String),
}

/// Result type for color conversions.
pub type Result<T> = std::result::Result<T, Error>;
