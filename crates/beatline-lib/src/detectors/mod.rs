//! R-peak detection and RR extraction.
//!
//! Four pure stages, each validating its own input:
//! [`threshold`] → [`peaks`], then [`timestamps`] + [`peaks`] → [`rr`].
//! [`pipeline`] chains them for a whole recording.

pub mod peaks;
pub mod pipeline;
pub mod rr;
pub mod threshold;
pub mod timestamps;
pub mod validate;

pub use peaks::detect_maximums;
pub use pipeline::{run_rr_pipeline, RrPipelineResult};
pub use rr::{calculate_rr, extract_rr, DEFAULT_RR_FLOOR_MS};
pub use threshold::{calculate_threshold, estimate_threshold, DEFAULT_THRESHOLD_RATIO};
pub use timestamps::calculate_times;
pub use validate::{check_markers, check_signal, is_valid_signal};
