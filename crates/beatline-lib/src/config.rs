use crate::detectors::{rr::DEFAULT_RR_FLOOR_MS, threshold::DEFAULT_THRESHOLD_RATIO};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Tunables of the RR extraction pipeline.
///
/// Every field is optional in a TOML file; missing ones take the defaults below.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PipelineConfig {
    /// Samples per second of the recording.
    pub sample_rate: u32,
    /// Detection sensitivity: share of the signal maximum a peak must reach.
    pub threshold_ratio: f64,
    /// Shortest accepted RR interval (ms).
    pub rr_floor_ms: f64,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            sample_rate: 1000,
            threshold_ratio: DEFAULT_THRESHOLD_RATIO,
            rr_floor_ms: DEFAULT_RR_FLOOR_MS,
        }
    }
}

pub fn parse_config(text: &str) -> Result<PipelineConfig> {
    let cfg: PipelineConfig = toml::from_str(text).context("parsing pipeline config")?;
    Ok(cfg)
}

pub fn read_config(path: &Path) -> Result<PipelineConfig> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    parse_config(&contents).with_context(|| format!("in {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn empty_file_gives_defaults() {
        let cfg = parse_config("").unwrap();
        assert_eq!(cfg, PipelineConfig::default());
        assert_eq!(cfg.sample_rate, 1000);
        assert_eq!(cfg.threshold_ratio, 0.8);
        assert_eq!(cfg.rr_floor_ms, 400.0);
    }

    #[test]
    fn partial_override() {
        let cfg = parse_config("sample_rate = 250\nrr_floor_ms = 300.0\n").unwrap();
        assert_eq!(cfg.sample_rate, 250);
        assert_eq!(cfg.rr_floor_ms, 300.0);
        assert_eq!(cfg.threshold_ratio, 0.8);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(parse_config("treshold_ratio = 0.7").is_err());
    }

    #[test]
    fn reads_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "threshold_ratio = 0.6").unwrap();
        let cfg = read_config(file.path()).unwrap();
        assert_eq!(cfg.threshold_ratio, 0.6);
    }

    #[test]
    fn missing_file_names_the_path() {
        let err = read_config(Path::new("/nonexistent/beatline.toml")).unwrap_err();
        assert!(format!("{err}").contains("/nonexistent/beatline.toml"));
    }
}
