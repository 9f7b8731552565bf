//! Command-line argument parsing for the scenario player
//!
//! Supports:
//! - Replaying a YAML scenario file
//! - Overriding the config file
//! - JSON output for tooling

use clap::Parser;
use std::path::PathBuf;

/// Replay drawer stack scenarios and print the resulting panel layout
#[derive(Parser, Debug)]
#[command(name = "drawer-stack", version, about = "Replay drawer stack scenarios")]
pub struct CliArgs {
    /// Scenario file to replay (YAML)
    #[arg(value_name = "SCENARIO")]
    pub scenario: PathBuf,

    /// Config file to use instead of ~/.config/drawer-stack/config.yaml
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Print one JSON report per step instead of text
    #[arg(long)]
    pub json: bool,

    /// Only print the state after the final step
    #[arg(short, long)]
    pub quiet: bool,
}
