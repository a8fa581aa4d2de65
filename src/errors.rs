use std::path::PathBuf;
use thiserror::Error;

use crate::exitcode;

/// Failures of the dump pipeline. These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum DumpError {
    #[error("cannot read {path}: {source}")]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid UTF-8 in {path}: undecodable byte after offset {valid_up_to}")]
    Decoding { path: PathBuf, valid_up_to: usize },

    #[error("failed to write output: {source}")]
    Output {
        #[source]
        source: std::io::Error,
    },
}

pub type DumpResult<T> = Result<T, DumpError>;

impl DumpError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            DumpError::FileAccess { .. } => exitcode::NOINPUT,
            DumpError::Decoding { .. } => exitcode::DATAERR,
            DumpError::Output { .. } => exitcode::IOERR,
        }
    }
}
