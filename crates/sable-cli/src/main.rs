//! Sable CLI - Command-line interface for the Sable analysis engine
//!
//! Checks, evaluates, formats and graphs programs written in the Sable
//! expression language.

mod cli;
mod commands;
mod logging;
mod output;

use clap::Parser;
use cli::Cli;
use commands::Commands;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let _guard = logging::init_logging(&cli);
    cli.configure_colors();

    match cli.command {
        Commands::Check(args) => args.run(),
        Commands::Run(args) => args.run(),
        Commands::Fmt(args) => args.run(),
        Commands::Cfg(args) => args.run(),
    }
}
