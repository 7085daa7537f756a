//! fraglink binary entry point

use clap::Parser;
use fraglink_cli::commands::Commands;

/// Reassemble fixed-width numeric tokens into an overlap chain
#[derive(Debug, Parser)]
#[command(name = "fraglink", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() {
    let cli = Cli::parse();
    if let Err(err) = cli.command.execute() {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}
