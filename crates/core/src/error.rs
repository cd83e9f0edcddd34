//! Error types for gradient construction and queries.

use thiserror::Error;

/// Errors produced by gradient operations.
///
/// Every failure is a deterministic input-validation error raised
/// synchronously; nothing is retried or swallowed.
#[derive(Debug, Error)]
pub enum GradientError {
    /// Fewer than 2 color stops were supplied.
    #[error("invalid number of stops ({0}): a gradient requires at least 2")]
    InvalidStopCount(usize),

    /// One construction call mixed positioned and unpositioned stops.
    #[error("cannot mix positioned and unpositioned color stops")]
    MixedStopFormat,

    /// A stop or sample position was outside [0, 1].
    #[error("position {0} out of range [0, 1]")]
    PositionOutOfRange(f64),

    /// Stop positions were not strictly increasing.
    #[error("stop positions not strictly increasing: {prev} followed by {next}")]
    PositionOutOfOrder { prev: f64, next: f64 },

    /// A sequence was requested with fewer than 2 steps, or fewer steps
    /// than there are stops.
    #[error("invalid number of steps ({steps}) for a gradient with {stops} stops")]
    InvalidStepCount { steps: usize, stops: usize },

    /// A color input could not be parsed.
    #[error("invalid color: {0}")]
    InvalidColor(String),
}
