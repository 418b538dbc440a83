//! CLI entry point for the performance report tool.
//!
//! Reads one or more CSV files, averages `performance` per `position` and
//! prints the ranked result to stdout.

use anyhow::Result;
use clap::Parser;
use perf_report::output::{OutputFormat, write_report};
use perf_report::{ReportKind, generate_report, load_sources};
use std::ffi::OsStr;
use std::io::{self, IsTerminal};
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "perf_report")]
#[command(about = "Build ranked reports from employee CSV files", long_about = None)]
struct Cli {
    /// CSV files to read, in the order given
    #[arg(long, value_name = "FILE", num_args = 1.., required = true)]
    files: Vec<PathBuf>,

    /// Report to build
    #[arg(long, value_enum)]
    report: ReportKind,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Grid)]
    format: OutputFormat,

    /// Log debug output to stderr
    #[arg(short, long, default_value_t = false)]
    verbose: bool,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    let cli = Cli::parse();
    let _guard = init_tracing(cli.verbose);

    let records = load_sources(cli.files.as_slice())?;
    info!(
        sources = cli.files.len(),
        records = records.len(),
        "Sources loaded"
    );

    let report = generate_report(cli.report, &records)?;
    if report.is_empty() {
        info!(report = %report.kind, "No aggregatable rows");
    }

    let mut out = io::stdout().lock();
    write_report(&mut out, &report, cli.format)?;

    Ok(())
}

/// Logging setup: stderr always, plus a JSON rolling log file when
/// `LOG_FILE_PATH` is set. The returned guard flushes the file on drop.
fn init_tracing(verbose: bool) -> Option<WorkerGuard> {
    let stderr_filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env("RUST_LOG").unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_ansi(io::stderr().is_terminal())
        .with_writer(io::stderr)
        .with_filter(stderr_filter);

    let (json_layer, guard) = match std::env::var("LOG_FILE_PATH") {
        Ok(log_file_path) => {
            let log_path = Path::new(&log_file_path);
            let log_dir = log_path
                .parent()
                .filter(|dir| !dir.as_os_str().is_empty())
                .unwrap_or(Path::new("."));
            let log_file_name = log_path
                .file_name()
                .unwrap_or(OsStr::new("perf_report.log"));

            let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
            let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

            let layer = fmt::layer()
                .json()
                .with_current_span(true)
                .with_span_list(true)
                .with_writer(non_blocking_file)
                .with_filter(
                    EnvFilter::try_from_env("RUST_LOG_JSON")
                        .unwrap_or_else(|_| EnvFilter::new("debug")),
                );
            (Some(layer), Some(guard))
        }
        Err(_) => (None, None),
    };

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    guard
}
