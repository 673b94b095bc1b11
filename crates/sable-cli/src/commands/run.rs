//! Run command - evaluates a program

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use sable_core::eval::{Environment, evaluate};

#[derive(Args, Debug)]
pub struct RunArgs {
    /// Program to evaluate, in JSON form
    #[arg(value_name = "PROGRAM")]
    pub program: PathBuf,
}

impl RunArgs {
    pub fn run(&self) -> Result<()> {
        let (program, _) = super::load(&self.program)?;

        let (mut scopes, global) = Environment::with_root();
        let result = evaluate(&program, &mut scopes, global)
            .with_context(|| format!("evaluation of {} failed", self.program.display()))?;

        match result {
            Some(value) => println!("{}", value),
            None => println!("{}", "(no value)".dimmed()),
        }

        Ok(())
    }
}
