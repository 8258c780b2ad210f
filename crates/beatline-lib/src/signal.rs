use crate::error::InvalidInput;
use num_traits::ToPrimitive;
use serde::{Deserialize, Serialize};

/// Single-lead ECG recording, fully buffered.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EcgSignal {
    /// Samples per second
    pub sample_rate: u32,
    /// Raw samples, in acquisition order
    pub samples: Vec<f64>,
}

impl EcgSignal {
    pub fn new(sample_rate: u32, samples: Vec<f64>) -> Self {
        Self {
            sample_rate,
            samples,
        }
    }

    /// Build a signal from any primitive numeric samples (integer ADC counts included).
    pub fn from_samples<T: ToPrimitive>(
        sample_rate: u32,
        samples: &[T],
    ) -> Result<Self, InvalidInput> {
        let samples = samples
            .iter()
            .enumerate()
            .map(|(index, s)| s.to_f64().ok_or(InvalidInput::NonFiniteSample { index }))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(sample_rate, samples))
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
    /// Recording length in milliseconds; zero for a zero sample rate.
    pub fn duration_ms(&self) -> f64 {
        if self.sample_rate == 0 {
            return 0.0;
        }
        self.samples.len() as f64 * 1000.0 / self.sample_rate as f64
    }
}

/// Point events on a timeline (R-peak sample indices)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Events {
    pub indices: Vec<usize>,
}

impl Events {
    pub fn from_indices(indices: Vec<usize>) -> Self {
        Self { indices }
    }

    /// Positions of the `1` entries of a peak marker sequence.
    pub fn from_markers(markers: &[u8]) -> Self {
        let indices = markers
            .iter()
            .enumerate()
            .filter(|(_, &m)| m == 1)
            .map(|(i, _)| i)
            .collect();
        Self { indices }
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

/// RR intervals (milliseconds)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RRSeries {
    pub rr_ms: Vec<f64>,
}

impl RRSeries {
    pub fn new(rr_ms: Vec<f64>) -> Self {
        Self { rr_ms }
    }
    pub fn len(&self) -> usize {
        self.rr_ms.len()
    }
    pub fn is_empty(&self) -> bool {
        self.rr_ms.is_empty()
    }
}
