use crate::{detectors::validate::check_signal, error::InvalidInput};

/// Millisecond offset of every sample from the first one: `i × 1000 / sample_rate`.
pub fn calculate_times(signal: &[f64], sample_rate: u32) -> Result<Vec<f64>, InvalidInput> {
    check_signal(signal)?;
    if sample_rate == 0 {
        return Err(InvalidInput::InvalidSampleRate);
    }
    let rate = sample_rate as f64;
    Ok((0..signal.len())
        .map(|i| i as f64 * 1000.0 / rate)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_millisecond_per_sample_at_1khz() {
        let times = calculate_times(&[0.0; 7], 1000).unwrap();
        assert_eq!(times, vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    }

    #[test]
    fn starts_at_zero_and_increases() {
        let times = calculate_times(&[1.0; 100], 360).unwrap();
        assert_eq!(times.len(), 100);
        assert_eq!(times[0], 0.0);
        assert!(times.windows(2).all(|w| w[1] > w[0]));
        assert!((times[36] - 100.0).abs() < 1e-9);
    }

    #[test]
    fn single_sample() {
        assert_eq!(calculate_times(&[3.0], 250).unwrap(), vec![0.0]);
    }

    #[test]
    fn rejects_zero_sample_rate() {
        assert_eq!(
            calculate_times(&[1.0, 2.0], 0),
            Err(InvalidInput::InvalidSampleRate)
        );
    }

    #[test]
    fn rejects_empty_signal() {
        assert_eq!(calculate_times(&[], 1000), Err(InvalidInput::EmptySignal));
    }
}
