//! Command-line interface for dirsnap.
//!
//! Parses the flags, writes the snapshot to the output file and logs every
//! step to stderr. Exits with 1 when the output file cannot be created or the
//! snapshot fails.

use dirsnap::cli::Cli;
use dirsnap::{SnapError, SnapshotConfig, TracingDiagnostics, write_snapshot_file};
use std::io::IsTerminal;
use std::path::Path;
use std::process::exit;

fn init_logging() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .with_max_level(tracing::Level::INFO)
        .init();
}

fn log_settings(cli: &Cli, config: &SnapshotConfig) {
    if cli.input.is_some() {
        tracing::info!("Input directory: {} (specified)", cli.input_dir().display());
    } else {
        tracing::info!("Input directory: {} (default)", cli.input_dir().display());
    }
    if !cli.ignored.is_empty() {
        tracing::warn!("Ignoring extra arguments: {:?}", cli.ignored);
    }
    tracing::info!("Output file: {}", config.output.display());
    tracing::info!("Exclude patterns: {:?}", config.exclude);
    tracing::info!("Include extensions: {:?}", config.extensions);
    tracing::info!("Exclude noise: {}", config.exclude_noise);
}

fn main() {
    init_logging();
    let raw: Vec<String> = std::env::args_os()
        .map(|a| a.to_string_lossy().into_owned())
        .collect();
    tracing::info!("Raw command-line arguments: {:?}", raw);

    let cli = Cli::parse_normalized();
    let config = cli.to_config();
    log_settings(&cli, &config);

    tracing::info!("Starting snapshot generation");
    run(cli.input_dir(), &config);
}

fn run(input: &Path, config: &SnapshotConfig) {
    match write_snapshot_file(input, config, &TracingDiagnostics) {
        Ok(summary) => {
            match serde_json::to_string(&summary) {
                Ok(json) => tracing::info!("Summary: {}", json),
                Err(e) => tracing::warn!("Summary unavailable: {}", e),
            }
            tracing::info!("Snapshot successfully written to {}", config.output.display());
        }
        Err(e @ SnapError::CreateOutput { .. }) => {
            tracing::error!("Error creating output file: {}", e);
            eprintln!("Error: {}", e);
            exit(1);
        }
        Err(e) => {
            tracing::error!("Error generating snapshot: {}", e);
            eprintln!("Error: {}", e);
            exit(1);
        }
    }
}
