use crate::signal::RRSeries;
use serde::{Deserialize, Serialize};

/// Successive differences above this count towards pNN50 (ms).
const NN50_MS: f64 = 50.0;

/// Time-domain HRV summary, all durations in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HrvTime {
    pub n: usize,
    pub mean_rr_ms: f64,
    pub sdnn_ms: f64,
    pub rmssd_ms: f64,
    pub pnn50: f64,
    pub mean_hr_bpm: f64,
}

pub fn hrv_time(rr: &RRSeries) -> HrvTime {
    let rr = &rr.rr_ms;
    let n = rr.len();
    let mean_rr_ms = if n > 0 {
        rr.iter().sum::<f64>() / n as f64
    } else {
        0.0
    };
    let sdnn_ms = if n > 1 {
        let mean = mean_rr_ms;
        (rr.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (n as f64 - 1.0)).sqrt()
    } else {
        0.0
    };
    let rmssd_ms = if n > 1 {
        let diffs = rr.windows(2).map(|w| (w[1] - w[0]).powi(2));
        (diffs.sum::<f64>() / (n as f64 - 1.0)).sqrt()
    } else {
        0.0
    };
    let pnn50 = if n > 1 {
        let count = rr
            .windows(2)
            .filter(|w| (w[1] - w[0]).abs() > NN50_MS)
            .count();
        (count as f64) / (n as f64 - 1.0)
    } else {
        0.0
    };
    let mean_hr_bpm = if mean_rr_ms > 0.0 {
        60_000.0 / mean_rr_ms
    } else {
        0.0
    };

    HrvTime {
        n,
        mean_rr_ms,
        sdnn_ms,
        rmssd_ms,
        pnn50,
        mean_hr_bpm,
    }
}
