use std::{io::Write as _, path::PathBuf};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "epicycle", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print Fourier coefficients as JSON.
    Coeffs(CoeffsArgs),
    /// Print partial-sum traces for one or more truncation orders.
    Trace(TraceArgs),
    /// Print precomputed epicycle chains for a range of animation frames as JSON.
    Frames(FramesArgs),
}

#[derive(Args, Debug)]
struct SourceArgs {
    /// Built-in parametric curve.
    #[arg(long, value_enum, conflicts_with = "svg")]
    preset: Option<PresetChoice>,

    /// SVG document whose paths form the curve.
    #[arg(long)]
    svg: Option<PathBuf>,

    /// Analysis config JSON (defaults apply to missing fields).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the config's truncation order K.
    #[arg(long, allow_negative_numbers = true)]
    order: Option<i64>,

    /// Override the config's sample count.
    #[arg(long)]
    samples: Option<usize>,

    /// Compute coefficients on a worker pool.
    #[arg(long)]
    parallel: bool,
}

#[derive(Args, Debug)]
struct CoeffsArgs {
    #[command(flatten)]
    source: SourceArgs,

    /// List terms by descending magnitude instead of ascending index.
    #[arg(long)]
    ranked: bool,
}

#[derive(Args, Debug)]
struct TraceArgs {
    #[command(flatten)]
    source: SourceArgs,

    /// Truncation orders to trace.
    #[arg(long, value_delimiter = ',', default_values_t = [3usize, 7, 15, 30])]
    orders: Vec<usize>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = TraceFormat::Json)]
    format: TraceFormat,
}

#[derive(Args, Debug)]
struct FramesArgs {
    #[command(flatten)]
    source: SourceArgs,

    /// Frames per full traversal of the curve.
    #[arg(long, default_value_t = 360)]
    frames_per_cycle: u64,

    /// First frame (inclusive).
    #[arg(long, default_value_t = 0)]
    start: u64,

    /// Last frame (exclusive); defaults to one full cycle after `start`.
    #[arg(long)]
    end: Option<u64>,

    /// Number of terms (magnitude mode) or maximum |n| (order mode) to chain.
    #[arg(long, default_value_t = 15)]
    terms: usize,

    /// How terms are picked for the chain.
    #[arg(long, value_enum, default_value_t = ModeChoice::Magnitude)]
    mode: ModeChoice,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum PresetChoice {
    Heart,
    Flower,
    Spiral,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum TraceFormat {
    Json,
    Svg,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ModeChoice {
    Order,
    Magnitude,
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();
    match cli.cmd {
        Command::Coeffs(args) => cmd_coeffs(args),
        Command::Trace(args) => cmd_trace(args),
        Command::Frames(args) => cmd_frames(args),
    }
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

struct Analysis {
    cfg: epicycle::AnalysisConfig,
    samples: epicycle::Samples,
    coeffs: epicycle::Coefficients,
}

fn analyze(args: &SourceArgs) -> anyhow::Result<Analysis> {
    let mut cfg = match &args.config {
        Some(path) => epicycle::AnalysisConfig::load(path)?,
        None => epicycle::AnalysisConfig::default(),
    };
    if let Some(order) = args.order {
        cfg.order = order;
    }
    if let Some(samples) = args.samples {
        cfg.sample_count = samples;
    }
    if args.parallel {
        cfg.threading.parallel = true;
    }
    cfg.validate()?;

    let source = read_source(args, &cfg)?;
    let samples = epicycle::sample(&source, cfg.sample_count)?;
    let coeffs =
        epicycle::compute_coefficients_with(samples.as_slice(), cfg.order, &cfg.threading)?;
    tracing::info!(
        samples = samples.len(),
        coefficients = coeffs.len(),
        "analysis complete"
    );

    Ok(Analysis {
        cfg,
        samples,
        coeffs,
    })
}

fn read_source(
    args: &SourceArgs,
    cfg: &epicycle::AnalysisConfig,
) -> anyhow::Result<epicycle::CurveSource> {
    if let Some(path) = &args.svg {
        return epicycle::load_svg(path, cfg.granularity)
            .with_context(|| format!("load curve from '{}'", path.display()));
    }

    let preset = match args.preset.unwrap_or(PresetChoice::Heart) {
        PresetChoice::Heart => epicycle::Preset::Heart,
        PresetChoice::Flower => epicycle::Preset::Flower,
        PresetChoice::Spiral => epicycle::Preset::Spiral,
    };
    Ok(preset.source())
}

fn cmd_coeffs(args: CoeffsArgs) -> anyhow::Result<()> {
    let analysis = analyze(&args.source)?;
    if args.ranked {
        write_json(&epicycle::ranked(&analysis.coeffs))
    } else {
        write_json(&analysis.coeffs)
    }
}

fn cmd_trace(args: TraceArgs) -> anyhow::Result<()> {
    if args.orders.is_empty() {
        anyhow::bail!("at least one order is required");
    }
    let analysis = analyze(&args.source)?;
    let steps = analysis.cfg.trace_steps;

    if args.format == TraceFormat::Svg {
        let mut out = std::io::stdout().lock();
        writeln!(out, "original: {}", analysis.samples.to_bez_path().to_svg())?;
        for &order in &args.orders {
            let path = epicycle::trace_path(&analysis.coeffs, order, steps)?;
            writeln!(out, "N={order}: {}", path.to_svg())?;
        }
        return Ok(());
    }

    #[derive(serde::Serialize)]
    struct Trace {
        order: usize,
        points: Vec<epicycle::Point>,
    }

    #[derive(serde::Serialize)]
    struct TraceDoc {
        original: Vec<epicycle::Point>,
        traces: Vec<Trace>,
    }

    let mut traces = Vec::with_capacity(args.orders.len());
    for &order in &args.orders {
        let points = epicycle::trace_partial_sum(&analysis.coeffs, order, steps)?
            .into_iter()
            .map(epicycle::to_point)
            .collect();
        traces.push(Trace { order, points });
    }

    write_json(&TraceDoc {
        original: analysis.samples.to_points(),
        traces,
    })
}

fn cmd_frames(args: FramesArgs) -> anyhow::Result<()> {
    let analysis = analyze(&args.source)?;
    let mode = match args.mode {
        ModeChoice::Order => epicycle::SelectMode::Order,
        ModeChoice::Magnitude => epicycle::SelectMode::Magnitude,
    };
    let terms = epicycle::select(&analysis.coeffs, args.terms, mode);

    let end = args
        .end
        .unwrap_or_else(|| args.start.saturating_add(args.frames_per_cycle));
    let range =
        epicycle::FrameRange::new(epicycle::FrameIndex(args.start), epicycle::FrameIndex(end))?;

    let frames = epicycle::precompute_frames(
        &terms,
        range,
        args.frames_per_cycle,
        analysis.cfg.min_radius,
        &analysis.cfg.threading,
    )?;
    write_json(&frames)
}

fn write_json<T: serde::Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    let mut out = std::io::stdout().lock();
    serde_json::to_writer_pretty(&mut out, value).context("write json to stdout")?;
    writeln!(out)?;
    Ok(())
}
