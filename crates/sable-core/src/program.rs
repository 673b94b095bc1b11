//! Loading programs from their JSON interchange form
//!
//! A program is a JSON array of statements, read as the root block.
//!
//! ```json
//! [
//!   {"assignment": {"target": "x", "value": {"literal": 2}}},
//!   {"return": {"binary": {"op": "times", "left": {"variable": "x"}, "right": {"literal": 0.5}}}}
//! ]
//! ```

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::ast::{Block, Stmt};

#[derive(Debug, thiserror::Error)]
pub enum ProgramError {
    #[error("Failed to read program '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid program '{path}': {source}")]
    InvalidFile {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("Invalid program: {0}")]
    Invalid(#[from] serde_json::Error),
}

/// Parses a program. The result is always a block.
pub fn from_json(source: &str) -> Result<Stmt, ProgramError> {
    let block: Block = serde_json::from_str(source)?;
    debug!(statements = block.len(), "program parsed");
    Ok(Stmt::Block(block))
}

pub fn load_program(path: &Path) -> Result<Stmt, ProgramError> {
    let content = std::fs::read_to_string(path).map_err(|e| ProgramError::ReadError {
        path: path.to_path_buf(),
        source: e,
    })?;

    from_json(&content).map_err(|e| match e {
        ProgramError::Invalid(source) => ProgramError::InvalidFile {
            path: path.to_path_buf(),
            source,
        },
        other => other,
    })
}
