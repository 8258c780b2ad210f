use crate::{detectors::validate::check_signal, error::InvalidInput};

/// Share of the signal maximum a sample must reach to count as an R-peak candidate.
pub const DEFAULT_THRESHOLD_RATIO: f64 = 0.8;

/// Detection threshold with the default ratio, `0.8 × max(signal)`.
pub fn estimate_threshold(signal: &[f64]) -> Result<f64, InvalidInput> {
    calculate_threshold(signal, DEFAULT_THRESHOLD_RATIO)
}

/// Detection threshold `ratio × max(signal)`, found in one left-to-right pass.
///
/// `ratio` is the detection sensitivity and must lie in `(0, 1]`.
pub fn calculate_threshold(signal: &[f64], ratio: f64) -> Result<f64, InvalidInput> {
    check_signal(signal)?;
    if !ratio.is_finite() || ratio <= 0.0 || ratio > 1.0 {
        return Err(InvalidInput::InvalidRatio(ratio));
    }
    let mut maximum = signal[0];
    for &sample in &signal[1..] {
        if sample > maximum {
            maximum = sample;
        }
    }
    Ok(maximum * ratio)
}
