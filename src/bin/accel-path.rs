use std::io::Write as _;
use std::path::PathBuf;

use accel_path::{
    ArcLengthSource, CurvePath, FrameSample, FrameSpan, MotionConfig, PathFollower, TimeUnit,
    sample_span,
};
use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "accel-path", version)]
struct Cli {
    /// Log every recompute to stderr.
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Step a follower over a frame range and print one row per frame.
    Simulate(SimulateArgs),
    /// List supported time units and their frame rates.
    Units,
}

#[derive(Parser, Debug)]
struct SimulateArgs {
    /// Follower configuration JSON. Defaults are used when omitted.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Fixed path length.
    #[arg(long, conflicts_with = "path", required_unless_present = "path")]
    arc_length: Option<f64>,

    /// SVG path data for the followed curve (adds x/y columns).
    #[arg(long)]
    path: Option<String>,

    /// Host time unit.
    #[arg(long, default_value = "film")]
    time_unit: String,

    /// First frame.
    #[arg(long)]
    from: f64,

    /// Last frame (inclusive).
    #[arg(long)]
    to: f64,

    /// Frame increment.
    #[arg(long, default_value_t = 1.0)]
    step: f64,

    /// Output format.
    #[arg(long, value_enum, default_value_t = Format::Csv)]
    format: Format,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Csv,
    Json,
}

#[derive(serde::Serialize)]
struct Row<'a> {
    #[serde(flatten)]
    sample: &'a FrameSample,
    point: Option<[f64; 2]>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    match cli.cmd {
        Command::Simulate(args) => cmd_simulate(args),
        Command::Units => cmd_units(),
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn cmd_simulate(args: SimulateArgs) -> anyhow::Result<()> {
    let config = match &args.config {
        Some(p) => MotionConfig::from_path(p)?,
        None => MotionConfig::default(),
    };
    let unit: TimeUnit = args.time_unit.parse()?;
    let span = FrameSpan::new(args.from, args.to, args.step)?;

    let curve = args
        .path
        .as_deref()
        .map(CurvePath::from_svg)
        .transpose()
        .context("parse --path")?;
    let arc_length = match (&curve, args.arc_length) {
        (Some(c), _) => c.arc_length(),
        (None, Some(len)) => len,
        (None, None) => anyhow::bail!("either --arc-length or --path is required"),
    };

    let mut follower = PathFollower::new(config)?;
    let samples = sample_span(&mut follower, span, arc_length, unit.fps())
        .with_context(|| format!("simulate {}..={} at {unit}", span.start(), span.end()))?;

    let mut out = std::io::stdout().lock();
    match args.format {
        Format::Csv => {
            write!(out, "time,phase,u,velocity,distance")?;
            if curve.is_some() {
                write!(out, ",x,y")?;
            }
            writeln!(out)?;
            for s in &samples {
                let e = &s.evaluation;
                write!(
                    out,
                    "{},{},{},{},{}",
                    s.time,
                    e.phase().as_str(),
                    e.u(),
                    e.velocity(),
                    e.distance()
                )?;
                if let Some(c) = &curve {
                    let p = c.point_at(e.u())?;
                    write!(out, ",{},{}", p.x, p.y)?;
                }
                writeln!(out)?;
            }
        }
        Format::Json => {
            let rows = samples
                .iter()
                .map(|sample| {
                    let point = match &curve {
                        Some(c) => c.point_at(sample.evaluation.u()).map(|p| Some([p.x, p.y])),
                        None => Ok(None),
                    }?;
                    Ok(Row { sample, point })
                })
                .collect::<accel_path::AccelPathResult<Vec<_>>>()?;
            serde_json::to_writer_pretty(&mut out, &rows).context("write JSON rows")?;
            writeln!(out)?;
        }
    }
    Ok(())
}

fn cmd_units() -> anyhow::Result<()> {
    let mut out = std::io::stdout().lock();
    for unit in TimeUnit::ALL {
        writeln!(out, "{:<12} {}", unit.identifier(), unit.fps())?;
    }
    Ok(())
}
