use crate::error::InvalidInput;

/// True iff `signal` is non-empty and every sample is finite.
pub fn is_valid_signal(signal: &[f64]) -> bool {
    check_signal(signal).is_ok()
}

/// Same rule as [`is_valid_signal`], naming the first violation.
pub fn check_signal(signal: &[f64]) -> Result<(), InvalidInput> {
    if signal.is_empty() {
        return Err(InvalidInput::EmptySignal);
    }
    match signal.iter().position(|s| !s.is_finite()) {
        Some(index) => Err(InvalidInput::NonFiniteSample { index }),
        None => Ok(()),
    }
}

/// A marker sequence must be non-empty and hold only 0 and 1.
pub fn check_markers(markers: &[u8]) -> Result<(), InvalidInput> {
    if markers.is_empty() {
        return Err(InvalidInput::EmptySignal);
    }
    match markers.iter().position(|&m| m > 1) {
        Some(index) => Err(InvalidInput::InvalidMarker {
            index,
            value: markers[index],
        }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_finite_non_empty_signal() {
        assert!(is_valid_signal(&[0.1, -2.0, 3.5]));
        assert!(check_signal(&[42.0]).is_ok());
    }

    #[test]
    fn rejects_empty_signal() {
        assert!(!is_valid_signal(&[]));
        assert_eq!(check_signal(&[]), Err(InvalidInput::EmptySignal));
    }

    #[test]
    fn rejects_non_finite_samples() {
        assert_eq!(
            check_signal(&[1.0, f64::NAN, 2.0]),
            Err(InvalidInput::NonFiniteSample { index: 1 })
        );
        assert!(!is_valid_signal(&[f64::INFINITY]));
    }

    #[test]
    fn markers_must_be_binary() {
        assert!(check_markers(&[0, 1, 1, 0]).is_ok());
        assert_eq!(
            check_markers(&[0, 1, 2]),
            Err(InvalidInput::InvalidMarker { index: 2, value: 2 })
        );
        assert_eq!(check_markers(&[]), Err(InvalidInput::EmptySignal));
    }
}
