//! CLI failures that are not lexical diagnostics.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("cannot find file '{}'", .0.display())]
    NotFound(PathBuf),
    #[error("error reading '{}': {source}", path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to write output: {0}")]
    Write(#[from] io::Error),
    #[error("missing file path")]
    MissingPath,
    #[error("option `{0}` needs a value")]
    MissingValue(&'static str),
    #[error("invalid chunk size `{0}`: expected a positive integer")]
    InvalidChunkSize(String),
    #[error("unknown option `{0}`")]
    UnknownOption(String),
}

impl CliError {
    /// Classify a failure to open or read `path`.
    pub fn read(path: impl Into<PathBuf>, source: io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            io::ErrorKind::NotFound => CliError::NotFound(path),
            _ => CliError::Read { path, source },
        }
    }
}
