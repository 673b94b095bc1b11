//! Fmt command - prints a program as indented source text

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use sable_core::unparse::Unparser;

#[derive(Args, Debug)]
pub struct FmtArgs {
    /// Program to format, in JSON form
    #[arg(value_name = "PROGRAM")]
    pub program: PathBuf,

    /// Spaces per nesting level (overrides sable.toml)
    #[arg(long, value_name = "N")]
    pub indent: Option<usize>,
}

impl FmtArgs {
    pub fn run(&self) -> Result<()> {
        let (program, config) = super::load(&self.program)?;
        let indent = self.indent.unwrap_or(config.unparse.indent);

        println!("{}", program.accept(&mut Unparser::with_indent(indent), 0));

        Ok(())
    }
}
