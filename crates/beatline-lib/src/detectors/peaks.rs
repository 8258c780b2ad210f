use crate::{detectors::validate::check_signal, error::InvalidInput};

/// Mark every local maximum that reaches `threshold`.
///
/// Returns one marker per sample: `1` for a peak, `0` otherwise. A sample is a
/// peak when it is `>= threshold` and
///
/// * first sample: strictly above its right neighbor;
/// * interior sample: strictly above the right neighbor, at least the left one;
/// * last sample: at least its left neighbor.
///
/// Ties resolve to the right, so a flat top above the threshold is marked once,
/// at the sample where it starts to fall. A lone sample has no neighbors and
/// only needs to reach the threshold.
pub fn detect_maximums(signal: &[f64], threshold: f64) -> Result<Vec<u8>, InvalidInput> {
    check_signal(signal)?;
    if !threshold.is_finite() {
        return Err(InvalidInput::InvalidThreshold(threshold));
    }

    let last = signal.len() - 1;
    let mut markers = Vec::with_capacity(signal.len());
    for (i, &value) in signal.iter().enumerate() {
        let is_maximum = value >= threshold
            && match i {
                _ if last == 0 => true,
                0 => value > signal[1],
                _ if i == last => value >= signal[i - 1],
                _ => signal[i + 1] < value && signal[i - 1] <= value,
            };
        markers.push(u8::from(is_maximum));
    }
    Ok(markers)
}
