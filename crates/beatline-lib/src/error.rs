use thiserror::Error;

/// The single failure kind of the detection pipeline.
///
/// Each variant names the rule an input broke. Stages return it instead of a
/// partial result, so a caller chaining stages with `?` stops at the first bad input.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvalidInput {
    #[error("signal is empty")]
    EmptySignal,
    #[error("sample {index} is not a finite number")]
    NonFiniteSample { index: usize },
    #[error("threshold must be a finite number, got {0}")]
    InvalidThreshold(f64),
    #[error("threshold ratio must lie in (0, 1], got {0}")]
    InvalidRatio(f64),
    #[error("sample rate must be greater than zero")]
    InvalidSampleRate,
    #[error("RR floor must be a finite, non-negative number of milliseconds, got {0}")]
    InvalidFloor(f64),
    #[error("marker {index} must be 0 or 1, got {value}")]
    InvalidMarker { index: usize, value: u8 },
    #[error("length mismatch: {markers} markers vs {timestamps} timestamps")]
    LengthMismatch { markers: usize, timestamps: usize },
}
