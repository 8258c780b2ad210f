use anyhow::{anyhow, Context, Result};
use beatline_lib::{
    config::{read_config, PipelineConfig},
    detectors::{
        peaks::detect_maximums,
        pipeline::{run_rr_pipeline, RrPipelineResult},
        threshold::calculate_threshold,
    },
    io::text as text_io,
    metrics::hrv::hrv_time,
    plot::{figure_from_rr, figure_from_signal, Figure, Series},
    signal::{EcgSignal, Events, RRSeries},
};
use clap::{Args, Parser, Subcommand, ValueEnum};
use log::info;
use plotters::prelude::*;
use serde::Serialize;
use std::{
    io::{self, Read},
    path::{Path, PathBuf},
};

#[derive(Parser)]
#[command(
    name = "beatline",
    version,
    about = "Beatline: R-peak detection and RR interval extraction for single-lead ECG"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Recording source plus pipeline overrides shared by the signal subcommands.
#[derive(Args)]
struct SignalArgs {
    /// Raw ECG export (first line is metadata); stdin when omitted
    #[arg(long)]
    input: Option<PathBuf>,
    /// TOML file with sample_rate / threshold_ratio / rr_floor_ms
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long)]
    sample_rate: Option<u32>,
    #[arg(long)]
    threshold_ratio: Option<f64>,
    #[arg(long)]
    rr_floor_ms: Option<f64>,
}

impl SignalArgs {
    /// Defaults, then the config file, then explicit flags.
    fn pipeline_config(&self) -> Result<PipelineConfig> {
        let mut cfg = match &self.config {
            Some(path) => read_config(path)?,
            None => PipelineConfig::default(),
        };
        if let Some(sample_rate) = self.sample_rate {
            cfg.sample_rate = sample_rate;
        }
        if let Some(ratio) = self.threshold_ratio {
            cfg.threshold_ratio = ratio;
        }
        if let Some(floor) = self.rr_floor_ms {
            cfg.rr_floor_ms = floor;
        }
        Ok(cfg)
    }

    fn load(&self) -> Result<(EcgSignal, PipelineConfig)> {
        let cfg = self.pipeline_config()?;
        match &self.input {
            Some(path) => info!("Opening {} with ECG signal", path.display()),
            None => info!("Reading ECG signal from stdin"),
        }
        let samples = read_ecg(self.input.as_deref())?;
        info!("Read ECG file. It has {} values!", samples.len());
        Ok((EcgSignal::new(cfg.sample_rate, samples), cfg))
    }
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
    Csv,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum PlotKind {
    /// RR interval against beat number
    Tachogram,
    /// Raw trace with detected R-peaks
    Signal,
}

#[derive(Subcommand)]
enum Commands {
    /// Run threshold → peaks → timestamps → RR intervals on a raw ECG export
    Extract {
        #[command(flatten)]
        signal: SignalArgs,
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },
    /// Report the detection threshold and R-peak sample indices as JSON
    Peaks {
        #[command(flatten)]
        signal: SignalArgs,
    },
    /// Compute time-domain HRV from newline-delimited RR intervals (ms)
    Hrv {
        #[arg(long)]
        input: Option<PathBuf>,
    },
    /// Render the RR tachogram or the annotated trace to a PNG via plotters
    Plot {
        #[command(flatten)]
        signal: SignalArgs,
        #[arg(long)]
        out: PathBuf,
        #[arg(long, value_enum, default_value = "tachogram")]
        kind: PlotKind,
    },
}

#[derive(Serialize)]
struct PeakReport {
    sample_rate: u32,
    sample_count: usize,
    threshold: f64,
    peaks: Events,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    match cli.command {
        Commands::Extract { signal, format } => cmd_extract(&signal, format)?,
        Commands::Peaks { signal } => cmd_peaks(&signal)?,
        Commands::Hrv { input } => cmd_hrv(input.as_deref())?,
        Commands::Plot { signal, out, kind } => cmd_plot(&signal, &out, kind)?,
    }
    Ok(())
}

fn read_stdin() -> Result<String> {
    let mut buf = String::new();
    io::stdin()
        .read_to_string(&mut buf)
        .context("reading stdin")?;
    Ok(buf)
}

fn read_ecg(input: Option<&Path>) -> Result<Vec<f64>> {
    match input {
        Some(path) => text_io::read_ecg_raw(path),
        None => text_io::parse_ecg_raw(&read_stdin()?),
    }
}

fn read_samples(input: Option<&Path>) -> Result<Vec<f64>> {
    match input {
        Some(path) => text_io::read_f64_series(path),
        None => text_io::parse_f64_series(&read_stdin()?),
    }
}

fn run_pipeline(signal: &EcgSignal, cfg: &PipelineConfig) -> Result<RrPipelineResult> {
    info!("Detecting threshold, maximums and RR intervals");
    let result = run_rr_pipeline(signal, cfg).context("ECG signal rejected")?;
    if result.rr.is_empty() {
        return Err(anyhow!(
            "Unable to extract RR intervals from ECG signal ({} peaks detected)",
            result.peaks.len()
        ));
    }
    info!(
        "Extracted {} RR intervals from ECG raw signal",
        result.rr.len()
    );
    Ok(result)
}

fn cmd_extract(args: &SignalArgs, format: OutputFormat) -> Result<()> {
    let (signal, cfg) = args.load()?;
    let result = run_pipeline(&signal, &cfg)?;
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string(&result)?),
        OutputFormat::Csv => {
            let mut writer = csv::Writer::from_writer(io::stdout());
            writer.write_record(["index", "rr_ms"])?;
            for (i, rr) in result.rr.rr_ms.iter().enumerate() {
                writer.write_record([i.to_string(), rr.to_string()])?;
            }
            writer.flush()?;
        }
        OutputFormat::Text => {
            println!("ECG maximum threshold is {}", result.threshold);
            println!("Detected {} peaks", result.peaks.len());
            println!(
                "Extracted {} RR intervals from ECG raw signal",
                result.rr.len()
            );
            println!("Mean heart rate {:.1} bpm", result.hrv.mean_hr_bpm);
        }
    }
    Ok(())
}

fn cmd_peaks(args: &SignalArgs) -> Result<()> {
    let (signal, cfg) = args.load()?;
    let threshold = calculate_threshold(&signal.samples, cfg.threshold_ratio)?;
    info!("ECG maximum threshold is {}", threshold);
    let markers = detect_maximums(&signal.samples, threshold)?;
    let report = PeakReport {
        sample_rate: signal.sample_rate,
        sample_count: signal.len(),
        threshold,
        peaks: Events::from_markers(&markers),
    };
    println!("{}", serde_json::to_string(&report)?);
    Ok(())
}

fn cmd_hrv(input: Option<&Path>) -> Result<()> {
    let rr = RRSeries::new(read_samples(input)?);
    let m = hrv_time(&rr);
    println!("{}", serde_json::to_string(&m)?);
    Ok(())
}

fn cmd_plot(args: &SignalArgs, out: &Path, kind: PlotKind) -> Result<()> {
    let (signal, cfg) = args.load()?;
    let result = run_pipeline(&signal, &cfg)?;
    let fig = match kind {
        PlotKind::Tachogram => figure_from_rr(&result.rr),
        PlotKind::Signal => figure_from_signal(&signal, &result.peaks, 4096),
    };
    draw_plotters_figure(out, &fig)?;
    info!("Wrote {}", out.display());
    Ok(())
}

fn draw_plotters_figure(path: &Path, fig: &Figure) -> Result<()> {
    let backend = BitMapBackend::new(path, (1024, 480));
    let root = backend.into_drawing_area();
    root.fill(&WHITE)?;
    let (x_min, x_max, y_min, y_max) = fig.bounds();
    let mut chart = ChartBuilder::on(&root)
        .margin(10)
        .caption(
            fig.title.clone().unwrap_or_else(|| "Plot".into()),
            ("sans-serif", 24),
        )
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(x_min..x_max, y_min..y_max)?;
    chart
        .configure_mesh()
        .x_desc(fig.x.label.clone().unwrap_or_default())
        .y_desc(fig.y.label.clone().unwrap_or_default())
        .draw()?;
    for series in &fig.series {
        match series {
            Series::Line(line) => {
                let (r, g, b) = line.color.rgb();
                chart.draw_series(LineSeries::new(
                    line.points.iter().map(|p| (p[0], p[1])),
                    &RGBColor(r, g, b),
                ))?;
            }
            Series::Points(points) => {
                let (r, g, b) = points.color.rgb();
                let style = RGBColor(r, g, b).filled();
                chart.draw_series(
                    points
                        .points
                        .iter()
                        .map(|p| Circle::new((p[0], p[1]), points.radius, style)),
                )?;
            }
        }
    }
    root.present()?;
    Ok(())
}
