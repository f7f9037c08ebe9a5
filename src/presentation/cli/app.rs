use clap::Parser;
use std::path::PathBuf;

/// sentinel: single-shot hardware health check
///
/// Samples CPU, memory, disk, network reachability, and battery state,
/// raises throttled desktop alerts, then exits until the next
/// scheduled invocation.
#[derive(Parser, Debug)]
#[command(name = "sentinel")]
#[command(version, about, long_about)]
pub struct Cli {
    /// Path to custom config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
