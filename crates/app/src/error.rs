//! Errors surfaced by the command-line tool.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    /// Reading the input file failed
    #[error("could not read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Writing the output file failed
    #[error("could not write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The codec rejected the data in `path`
    #[error("{path}: {source}")]
    Codec {
        path: PathBuf,
        #[source]
        source: canonhuff_core::Error,
    },

    /// Codec error on generated data (no file involved)
    #[error(transparent)]
    Demo(#[from] canonhuff_core::Error),

    /// Demo output differs from its input
    #[error("round trip mismatch: {expected} bytes in, {actual} bytes out")]
    Mismatch { expected: usize, actual: usize },

    /// Configuration incomplete for the requested command
    #[error("configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, AppError>;
