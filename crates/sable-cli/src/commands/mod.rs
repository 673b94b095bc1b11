//! CLI command implementations

pub mod cfg;
pub mod check;
pub mod fmt;
pub mod run;

pub use cfg::CfgArgs;
pub use check::CheckArgs;
pub use fmt::FmtArgs;
pub use run::RunArgs;

use std::path::Path;

use anyhow::{Context, Result};
use clap::{Subcommand, ValueEnum};
use colored::Colorize;
use sable_core::ast::Stmt;
use sable_core::config::{Config, ConfigResult, find_config_file, load_config_with_warnings};
use sable_core::program::load_program;
use tracing::debug;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Report unresolved names and unreachable statements
    Check(CheckArgs),

    /// Evaluate a program and print its result
    Run(RunArgs),

    /// Print a program as indented source text
    Fmt(FmtArgs),

    /// Print the control-flow graph and its reachable statements
    Cfg(CfgArgs),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Pretty,
    Json,
}

/// Loads the program at `path` together with the `sable.toml` governing it.
/// Config warnings go to stderr; an unreadable or invalid config is an error.
pub(crate) fn load(path: &Path) -> Result<(Stmt, Config)> {
    let program =
        load_program(path).with_context(|| format!("could not load {}", path.display()))?;

    let config_dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let config_result = match find_config_file(config_dir) {
        Some(config_path) => load_config_with_warnings(&config_path)
            .with_context(|| format!("invalid config {}", config_path.display()))?,
        None => ConfigResult::default(),
    };
    for warning in &config_result.warnings {
        eprintln!("{} {}", "warning:".yellow().bold(), warning);
    }
    debug!(program = %path.display(), "program loaded");

    Ok((program, config_result.config))
}
