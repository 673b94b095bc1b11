//! Cfg command - prints the control-flow graph and its reachability

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use sable_core::build_cfg;

use super::OutputFormat;
use crate::output::json::JsonFormatter;
use crate::output::pretty::PrettyFormatter;

#[derive(Args, Debug)]
pub struct CfgArgs {
    /// Program to graph, in JSON form
    #[arg(value_name = "PROGRAM")]
    pub program: PathBuf,

    /// Output format for the graph
    #[arg(short, long, value_enum, default_value = "pretty")]
    pub format: OutputFormat,
}

impl CfgArgs {
    pub fn run(&self) -> Result<()> {
        let (program, _) = super::load(&self.program)?;
        let cfg = build_cfg(&program);

        match self.format {
            OutputFormat::Json => println!("{}", JsonFormatter::new().format_cfg(&cfg)),
            OutputFormat::Pretty => print!("{}", PrettyFormatter::new().format_cfg(&cfg)),
        }

        Ok(())
    }
}
