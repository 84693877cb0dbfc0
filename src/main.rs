//! CLI entry point for the datafetch tool.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use datafetch_core::{
    DEFAULT_BASE_URL, DEFAULT_OUTPUT_DIR, Dataset, HttpClient, Pipeline, prepare_output_dir,
};
use tracing::{debug, info};

mod app_config;
mod cli;

use app_config::{FileConfig, load_file_config};
use cli::Args;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments first (before tracing, so --help works without logs)
    let args = Args::parse();

    let file_config = load_file_config(args.config.as_deref())?.unwrap_or_default();

    // Priority: RUST_LOG env var > quiet flag > verbose flag > config verbosity > default (info)
    let default_level = log_level(&args, &file_config);
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    debug!(?args, ?file_config, "configuration resolved");
    info!("Datafetch starting");

    let output_dir = args
        .output_dir
        .or(file_config.output_dir)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR));
    let base_url = args
        .base_url
        .or(file_config.base_url)
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
    let connect_timeout = args
        .connect_timeout
        .or(file_config.connect_timeout_secs)
        .map(Duration::from_secs);
    let read_timeout = args
        .read_timeout
        .or(file_config.read_timeout_secs)
        .map(Duration::from_secs);

    prepare_output_dir(&output_dir)
        .await
        .with_context(|| format!("Failed to prepare output directory '{}'", output_dir.display()))?;

    let client = HttpClient::with_timeouts(connect_timeout, read_timeout);
    let pipeline = Pipeline::new(client, &output_dir);
    let datasets = Dataset::catalogue(&base_url);
    info!(
        output_dir = %pipeline.output_dir().display(),
        datasets = datasets.len(),
        "Fetching datasets"
    );

    // Per-dataset failures are logged by the pipeline and never change the exit code.
    let stats = pipeline.run(&datasets).await;
    debug!(failures = ?stats.failures(), "run finished");

    Ok(())
}

fn log_level(args: &Args, file_config: &FileConfig) -> &'static str {
    if args.quiet {
        return "error";
    }
    match args.verbose {
        0 => file_config
            .verbosity
            .map_or("info", app_config::VerbositySetting::filter),
        1 => "debug",
        _ => "trace",
    }
}
