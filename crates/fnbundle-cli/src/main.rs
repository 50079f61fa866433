//! fnbundle - Command-line assembler for function deployment bundles.

mod cli;
mod commands;
mod error;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    match &cli.command {
        cli::Commands::Pack(args) => commands::pack::execute(args, cli.quiet),
    }
}
