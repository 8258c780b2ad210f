//! Backend-agnostic figures; the CLI renders them with plotters.

use crate::signal::{EcgSignal, Events, RRSeries};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Axis {
    pub label: Option<String>,
}

#[derive(Debug, Copy, Clone, Serialize, Deserialize)]
pub struct Color(pub u32);

impl Color {
    pub fn rgb(self) -> (u8, u8, u8) {
        (
            ((self.0 >> 16) & 0xFF) as u8,
            ((self.0 >> 8) & 0xFF) as u8,
            (self.0 & 0xFF) as u8,
        )
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineSeries {
    pub name: String,
    pub points: Vec<[f64; 2]>,
    pub color: Color,
}

/// Isolated markers, e.g. detected R-peaks over the raw trace.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PointSeries {
    pub name: String,
    pub points: Vec<[f64; 2]>,
    pub radius: u32,
    pub color: Color,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Series {
    Line(LineSeries),
    Points(PointSeries),
}

impl Series {
    pub fn points(&self) -> &[[f64; 2]] {
        match self {
            Series::Line(line) => &line.points,
            Series::Points(points) => &points.points,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Figure {
    pub title: Option<String>,
    pub x: Axis,
    pub y: Axis,
    pub series: Vec<Series>,
}

impl Figure {
    pub fn new(title: &str, x_label: &str, y_label: &str) -> Self {
        Self {
            title: Some(title.into()),
            x: Axis {
                label: Some(x_label.into()),
            },
            y: Axis {
                label: Some(y_label.into()),
            },
            series: Vec::new(),
        }
    }

    pub fn add_series(&mut self, series: Series) {
        self.series.push(series);
    }

    /// `(x_min, x_max, y_min, y_max)` over every series; unit square when empty.
    pub fn bounds(&self) -> (f64, f64, f64, f64) {
        let mut it = self.series.iter().flat_map(|s| s.points().iter());
        let Some(first) = it.next() else {
            return (0.0, 1.0, 0.0, 1.0);
        };
        let init = (first[0], first[0], first[1], first[1]);
        let (x0, x1, y0, y1) = it.fold(init, |(x0, x1, y0, y1), p| {
            (x0.min(p[0]), x1.max(p[0]), y0.min(p[1]), y1.max(p[1]))
        });
        // plotters needs a non-degenerate range
        let widen = |lo: f64, hi: f64| if hi > lo { (lo, hi) } else { (lo - 0.5, hi + 0.5) };
        let (x0, x1) = widen(x0, x1);
        let (y0, y1) = widen(y0, y1);
        (x0, x1, y0, y1)
    }
}

pub fn decimate_points(points: &[[f64; 2]], max_points: usize) -> Vec<[f64; 2]> {
    if points.len() <= max_points {
        return points.to_vec();
    }
    let bucket_size = points.len() as f64 / max_points as f64;
    let mut result = Vec::with_capacity(max_points);
    for i in 0..max_points {
        let start = (i as f64 * bucket_size).floor() as usize;
        if start >= points.len() {
            break;
        }
        result.push(points[start]);
    }
    result
}

/// RR tachogram: interval length against beat number.
pub fn figure_from_rr(rr: &RRSeries) -> Figure {
    let mut fig = Figure::new("RR intervals", "beat", "RR (ms)");
    let points: Vec<[f64; 2]> = rr
        .rr_ms
        .iter()
        .enumerate()
        .map(|(i, value)| [i as f64, *value])
        .collect();
    fig.add_series(Series::Line(LineSeries {
        name: "RR".into(),
        points: decimate_points(&points, 1024),
        color: Color(0xFF0077),
    }));
    fig
}

/// Raw trace against time (ms) with the detected peaks overlaid.
pub fn figure_from_signal(signal: &EcgSignal, peaks: &Events, max_points: usize) -> Figure {
    let dt = 1000.0 / signal.sample_rate.max(1) as f64;
    let trace: Vec<[f64; 2]> = signal
        .samples
        .iter()
        .enumerate()
        .map(|(i, value)| [i as f64 * dt, *value])
        .collect();
    let marks: Vec<[f64; 2]> = peaks
        .indices
        .iter()
        .filter_map(|&i| signal.samples.get(i).map(|&v| [i as f64 * dt, v]))
        .collect();

    let mut fig = Figure::new("ECG", "time (ms)", "amplitude");
    fig.add_series(Series::Line(LineSeries {
        name: "ECG".into(),
        points: decimate_points(&trace, max_points),
        color: Color(0x1F77B4),
    }));
    fig.add_series(Series::Points(PointSeries {
        name: "R-peaks".into(),
        points: marks,
        radius: 4,
        color: Color(0xD62728),
    }));
    fig
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decimation_caps_point_count() {
        let points: Vec<[f64; 2]> = (0..5000).map(|i| [i as f64, 0.0]).collect();
        let out = decimate_points(&points, 100);
        assert_eq!(out.len(), 100);
        assert_eq!(out[0], [0.0, 0.0]);
        assert_eq!(decimate_points(&points[..10], 100).len(), 10);
    }

    #[test]
    fn tachogram_has_one_point_per_interval() {
        let fig = figure_from_rr(&RRSeries::new(vec![800.0, 820.0, 790.0]));
        assert_eq!(fig.series.len(), 1);
        assert_eq!(fig.series[0].points(), &[[0.0, 800.0], [1.0, 820.0], [2.0, 790.0]]);
        assert_eq!(fig.bounds(), (0.0, 2.0, 790.0, 820.0));
    }

    #[test]
    fn signal_figure_places_peaks_in_milliseconds() {
        let signal = EcgSignal::new(500, vec![0.0, 1.0, 0.0, 2.0]);
        let fig = figure_from_signal(&signal, &Events::from_indices(vec![1, 3, 9]), 1000);
        assert_eq!(fig.series[1].points(), &[[2.0, 1.0], [6.0, 2.0]]);
    }

    #[test]
    fn empty_figure_bounds_are_usable() {
        let fig = figure_from_rr(&RRSeries::default());
        assert_eq!(fig.bounds(), (0.0, 1.0, 0.0, 1.0));
        let flat = figure_from_rr(&RRSeries::new(vec![800.0]));
        assert_eq!(flat.bounds(), (-0.5, 0.5, 799.5, 800.5));
    }

    #[test]
    fn color_splits_into_channels() {
        assert_eq!(Color(0xFF0077).rgb(), (0xFF, 0x00, 0x77));
    }
}
