//! hokku: heuristic haiku analysis from the command line

use anyhow::Result;
use clap::Parser;
use hokku_cli::commands::Commands;

/// Estimate 5-7-5 conformance and literary markers of English haiku
#[derive(Debug, Parser)]
#[command(name = "hokku", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<()> {
    Cli::parse().command.execute()
}
