//! wenan command-line entry point

use clap::Parser;
use wenan_cli::commands::Commands;

/// Marketing copy generation and speech-sized text segmentation
#[derive(Debug, Parser)]
#[command(name = "wenan", version, about, propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() {
    let cli = Cli::parse();
    if let Err(error) = cli.command.execute() {
        eprintln!("Error: {error:#}");
        std::process::exit(1);
    }
}
