use crate::{
    config::PipelineConfig,
    detectors::{
        peaks::detect_maximums, rr::calculate_rr, threshold::calculate_threshold,
        timestamps::calculate_times,
    },
    error::InvalidInput,
    metrics::hrv::{hrv_time, HrvTime},
    signal::{EcgSignal, Events, RRSeries},
};
use log::debug;
use serde::{Deserialize, Serialize};

/// Everything the pipeline derives from one recording.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RrPipelineResult {
    pub sample_rate: u32,
    pub sample_count: usize,
    pub threshold: f64,
    pub peaks: Events,
    pub rr: RRSeries,
    pub hrv: HrvTime,
}

/// Threshold → peaks, timestamps → RR intervals, then a time-domain HRV summary.
///
/// The first stage to reject its input ends the run with that stage's error.
pub fn run_rr_pipeline(
    signal: &EcgSignal,
    cfg: &PipelineConfig,
) -> Result<RrPipelineResult, InvalidInput> {
    let samples = &signal.samples;
    let threshold = calculate_threshold(samples, cfg.threshold_ratio)?;
    debug!("threshold {:.4} (ratio {})", threshold, cfg.threshold_ratio);

    let markers = detect_maximums(samples, threshold)?;
    let times = calculate_times(samples, signal.sample_rate)?;
    let peaks = Events::from_markers(&markers);
    debug!("{} peak candidates in {} samples", peaks.len(), samples.len());

    let rr = RRSeries::new(calculate_rr(&markers, &times, cfg.rr_floor_ms)?);
    debug!("{} RR intervals above {} ms", rr.len(), cfg.rr_floor_ms);
    let hrv = hrv_time(&rr);

    Ok(RrPipelineResult {
        sample_rate: signal.sample_rate,
        sample_count: samples.len(),
        threshold,
        peaks,
        rr,
        hrv,
    })
}
