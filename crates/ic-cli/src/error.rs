//! CLI-facing error type. Wraps the I/O and JSON failures that can happen
//! before the translator ever sees a [`ic_core::ast::Program`].

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("failed to read input from '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write output to '{path}': {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("input is not a valid program AST: {0}")]
    InvalidAst(#[from] serde_json::Error),
}
