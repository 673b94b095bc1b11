//! Check command - reports unresolved names and unreachable statements

use std::path::PathBuf;
use std::process;

use anyhow::Result;
use clap::Args;
use sable_core::analysis::AnalysisEngine;
use sable_core::diagnostic::Severity;
use tracing::info;

use super::OutputFormat;
use crate::output::json::JsonFormatter;
use crate::output::pretty::PrettyFormatter;

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Program to analyze, in JSON form
    #[arg(value_name = "PROGRAM")]
    pub program: PathBuf,

    /// Output format for diagnostics
    #[arg(short, long, value_enum, default_value = "pretty")]
    pub format: OutputFormat,

    /// Fail on warnings (exit code 1)
    #[arg(long)]
    pub fail_on_warnings: bool,
}

impl CheckArgs {
    pub fn run(&self) -> Result<()> {
        let (program, config) = super::load(&self.program)?;

        let engine = AnalysisEngine::with_config(&config);
        let analysis = engine.analyze(&program);
        info!(
            diagnostics = analysis.diagnostics.len(),
            resolved = analysis.resolved,
            "check finished"
        );

        let name = self.program.display().to_string();
        match self.format {
            OutputFormat::Json => println!("{}", JsonFormatter::new().format(&analysis, &name)),
            OutputFormat::Pretty => print!("{}", PrettyFormatter::new().format(&analysis, &name)),
        }

        let has_errors = analysis.has_errors();
        let has_warnings = analysis.count(Severity::Warning) > 0 && self.fail_on_warnings;

        if has_errors || has_warnings {
            process::exit(1);
        }

        Ok(())
    }
}
