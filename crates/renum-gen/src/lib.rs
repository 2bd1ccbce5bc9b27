//! Reverse-lookup generation engine:
//! - `scan` - find constants bound to a target type in parsed files
//! - `extract` - canonical literal text for matched definitions
//! - `generate` - render the lookup map and accessor function
//! - `format` - canonicalize through gofmt, degrading to raw output
//! - `orchestrate` - drive generation across packages and requested types
//!
//! The engine is a pure library: fatal conditions come back as `Error`
//! values and formatting problems as warnings in the run report; the CLI
//! decides what to print and how to exit.

use std::path::PathBuf;

pub mod extract;
pub mod format;
pub mod generate;
pub mod orchestrate;
pub mod scan;

#[cfg(test)]
mod scan_tests;

pub use format::FormatOutcome;
pub use orchestrate::{Config, RunReport, generate_all};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An explicit single output file cannot collect matches that span
    /// multiple packages.
    #[error(
        "cannot write to single file ({}) when matching types are found in multiple packages",
        .output.display()
    )]
    OutputConflict { output: PathBuf },

    /// One or more requested types matched in no package.
    #[error("no values defined for types: {}", .0.join(" "))]
    TypesNotFound(Vec<String>),

    /// The scanner matched a constant the semantic model does not know.
    /// Should never occur on well-formed input.
    #[error("no value for constant {0}")]
    MissingDef(String),

    #[error("writing {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
