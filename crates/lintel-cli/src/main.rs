//! Lintel CLI - best-practices scanner for changed source files.
//!
//! Reads a JSON array of file paths, analyzes each file, and writes a
//! report to stdout. Logs go to stderr so the JSON output stays clean for
//! downstream tooling.
//!
//! Exit codes: 0 when every file was analyzed (issues found or not),
//! 1 when at least one file failed analysis, 2 when the input list or
//! configuration could not be read at all.

mod formatters;
mod input;
mod report;

use anyhow::{Context, Result};
use clap::Parser;
use lintel_core::Engine;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::warn;

#[derive(Parser, Debug)]
#[command(name = "lintel")]
#[command(about = "Best-practices scanner for changed source files", long_about = None)]
struct Cli {
    /// JSON array of paths to analyze, a file containing one, or `-` for stdin
    ///
    /// Examples:
    ///   lintel '["src/app.js","lib/b.py"]'  # inline list
    ///   lintel changed-files.json           # read the list from a file
    ///   echo '["src/app.js"]' | lintel      # read the list from stdin
    #[arg(value_name = "FILES", default_value = "-")]
    files: String,

    /// Directory that input paths are resolved against
    #[arg(long, value_name = "DIR", default_value = ".")]
    root: PathBuf,

    /// Configuration file path (defaults to `lintel.toml` in the root)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Output format
    #[arg(short, long = "output", value_enum, default_value = "json")]
    format: OutputFormat,

    /// Verbose logging (repeat for more detail)
    #[arg(short = 'v', action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum OutputFormat {
    Json,
    Human,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli).await {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::from(2)
        }
    }
}

async fn run(cli: Cli) -> Result<ExitCode> {
    let config = match &cli.config {
        Some(path) => lintel_config::load(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => {
            lintel_config::load_or_default(&cli.root).context("failed to load lintel.toml")?
        }
    };

    let paths = input::read_paths(&cli.files)?;
    if paths.is_empty() {
        warn!("no files to analyze, emitting an empty report");
    }

    let engine = Engine::with_runner(config.limits, config.runner.to_runner_options())
        .with_root(&cli.root);
    let outcome = engine.analyze_files(&paths).await;
    let report = report::Report::from_run(outcome);

    let formatter: &dyn formatters::Formatter = match cli.format {
        OutputFormat::Json => &formatters::JsonFormatter,
        OutputFormat::Human => &formatters::HumanFormatter,
    };
    formatter.format(&report);

    if report.summary.failed > 0 {
        Ok(ExitCode::from(1))
    } else {
        Ok(ExitCode::SUCCESS)
    }
}

fn init_tracing(verbose: u8) {
    use tracing_subscriber::EnvFilter;

    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("lintel={level},lintel_core={level}")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
