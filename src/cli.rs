//! CLI argument definitions using clap derive macros.

use std::path::PathBuf;

use clap::Parser;

/// Fetch reference datasets and write per-format summary reports.
///
/// Downloads a text, CSV, spreadsheet and JSON dataset, saves each one to the
/// output directory and writes a summary report next to it.
#[derive(Parser, Debug)]
#[command(name = "datafetch")]
#[command(author, version, about)]
pub struct Args {
    /// Increase output verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(short, long)]
    pub quiet: bool,

    /// Directory raw datasets and reports are written to [default: data]
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Base URL the dataset files are fetched from
    #[arg(short, long)]
    pub base_url: Option<String>,

    /// Path to a config file (defaults to $XDG_CONFIG_HOME/datafetch/config.toml)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// HTTP connect timeout in seconds (1-3600; unset waits indefinitely)
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..=3600))]
    pub connect_timeout: Option<u64>,

    /// Whole-request timeout in seconds (1-3600; unset waits indefinitely)
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..=3600))]
    pub read_timeout: Option<u64>,
}
