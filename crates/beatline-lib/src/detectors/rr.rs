use crate::{
    detectors::validate::{check_markers, check_signal},
    error::InvalidInput,
};

/// Shortest plausible RR interval (ms). Anything shorter is a double detection
/// or a noise spike (the floor corresponds to a 150 bpm ceiling).
pub const DEFAULT_RR_FLOOR_MS: f64 = 400.0;

/// RR intervals with the default 400 ms floor.
pub fn extract_rr(markers: &[u8], times: &[f64]) -> Result<Vec<f64>, InvalidInput> {
    calculate_rr(markers, times, DEFAULT_RR_FLOOR_MS)
}

/// Time between consecutive marked peaks, keeping only intervals above `floor_ms`.
///
/// `markers` and `times` are positionally aligned per-sample sequences. The
/// first marked peak has no predecessor and contributes no interval.
pub fn calculate_rr(
    markers: &[u8],
    times: &[f64],
    floor_ms: f64,
) -> Result<Vec<f64>, InvalidInput> {
    check_markers(markers)?;
    check_signal(times)?;
    if markers.len() != times.len() {
        return Err(InvalidInput::LengthMismatch {
            markers: markers.len(),
            timestamps: times.len(),
        });
    }
    if !floor_ms.is_finite() || floor_ms < 0.0 {
        return Err(InvalidInput::InvalidFloor(floor_ms));
    }

    let marked_times: Vec<f64> = markers
        .iter()
        .zip(times)
        .filter(|(&m, _)| m == 1)
        .map(|(_, &t)| t)
        .collect();

    let mut raw = Vec::with_capacity(marked_times.len());
    raw.push(0.0);
    raw.extend(marked_times.windows(2).map(|w| w[1] - w[0]));

    Ok(raw.into_iter().filter(|&rr| rr > floor_ms).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detectors::timestamps::calculate_times;

    #[test]
    fn differences_consecutive_peak_times() {
        let markers = [1, 0, 0, 1, 0, 0, 1];
        let times = calculate_times(&[0.0; 7], 1000).unwrap();
        assert_eq!(times, vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        assert_eq!(calculate_rr(&markers, &times, 2.0).unwrap(), vec![3.0, 3.0]);
        // The default floor rejects these millisecond gaps
        assert!(extract_rr(&markers, &times).unwrap().is_empty());
    }

    #[test]
    fn drops_intervals_at_or_below_floor() {
        let markers = [1, 1, 1, 1, 1];
        let times = [0.0, 800.0, 1200.0, 1601.0, 2400.0];
        assert_eq!(
            extract_rr(&markers, &times).unwrap(),
            vec![800.0, 401.0, 799.0]
        );
    }

    #[test]
    fn every_interval_exceeds_floor() {
        let markers: Vec<u8> = (0..5000)
            .map(|i| u8::from(i % 450 == 0 || i % 1013 == 0))
            .collect();
        let times = calculate_times(&vec![0.0; markers.len()], 1000).unwrap();
        let rr = extract_rr(&markers, &times).unwrap();
        assert!(!rr.is_empty());
        assert!(rr.iter().all(|&v| v > DEFAULT_RR_FLOOR_MS));
    }

    #[test]
    fn fewer_than_two_peaks_give_no_intervals() {
        let times = [0.0, 500.0, 1000.0];
        assert!(extract_rr(&[0, 0, 0], &times).unwrap().is_empty());
        assert!(extract_rr(&[0, 1, 0], &times).unwrap().is_empty());
    }

    #[test]
    fn rejects_length_mismatch() {
        assert_eq!(
            extract_rr(&[1, 0, 1], &[0.0, 1.0]),
            Err(InvalidInput::LengthMismatch {
                markers: 3,
                timestamps: 2
            })
        );
    }

    #[test]
    fn rejects_non_binary_markers() {
        assert_eq!(
            extract_rr(&[1, 3, 0], &[0.0, 1.0, 2.0]),
            Err(InvalidInput::InvalidMarker { index: 1, value: 3 })
        );
    }

    #[test]
    fn rejects_empty_and_non_finite_inputs() {
        assert_eq!(extract_rr(&[], &[]), Err(InvalidInput::EmptySignal));
        assert_eq!(
            extract_rr(&[1, 1], &[0.0, f64::NAN]),
            Err(InvalidInput::NonFiniteSample { index: 1 })
        );
        assert_eq!(
            calculate_rr(&[1, 1], &[0.0, 1.0], -1.0),
            Err(InvalidInput::InvalidFloor(-1.0))
        );
    }
}
