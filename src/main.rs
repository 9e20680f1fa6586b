//! archdiagram - render the deployment architecture diagram.
//!
//! Usage:
//!   archdiagram                              # architecture.png + architecture.svg in .
//!   archdiagram --topology topo.json         # custom diagram (and canvas)
//!   archdiagram --out-dir docs --format svg  # only the vector image, under docs/

use anyhow::{Context, Result};
use archdiagram::{default_diagram, load_topology, render, CanvasConfig, DEFAULT_STEM};
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::error;

/// Render a deployment-topology diagram to PNG and SVG
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// JSON topology file (defaults to the built-in deployment topology)
    #[arg(short, long, env = "ARCHDIAGRAM_TOPOLOGY")]
    topology: Option<PathBuf>,

    /// Directory to write images into
    #[arg(short, long, default_value = ".")]
    out_dir: PathBuf,

    /// Output file stem
    #[arg(short, long, default_value = DEFAULT_STEM)]
    name: String,

    /// Output format; repeat for several (png, svg)
    #[arg(short, long = "format", value_name = "FORMAT", default_values_t = ["png".to_string(), "svg".to_string()])]
    formats: Vec<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "ARCHDIAGRAM_LOG_LEVEL", default_value = "info")]
    log_level: String,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&args.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match run(&args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

/// Returns `Ok(false)` when some requested format was rejected.
fn run(args: &Args) -> Result<bool> {
    let (diagram, canvas) = match &args.topology {
        Some(path) => load_topology(path)
            .with_context(|| format!("loading topology from {}", path.display()))?,
        None => (default_diagram(), CanvasConfig::default()),
    };

    let targets: Vec<PathBuf> = args
        .formats
        .iter()
        .map(|f| args.out_dir.join(format!("{}.{}", args.name, f)))
        .collect();

    let report = render(&diagram, &canvas, &targets).context("rendering diagram")?;

    for rejected in &report.rejected {
        error!("{}: {}", rejected.path.display(), rejected.error);
    }

    Ok(report.is_complete())
}
