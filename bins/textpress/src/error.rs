//! Error type for a textpress run.

use std::path::PathBuf;
use textpress_compression::{CompressionError, Engine};
use thiserror::Error;

/// Result type alias for a textpress run.
pub type Result<T> = std::result::Result<T, RunError>;

/// Everything that ends a run with a non-zero exit status.
#[derive(Debug, Error)]
pub enum RunError {
    /// No positional input argument
    #[error("no input file was provided")]
    NoInput,

    /// The input file could not be read
    #[error("invalid input file was provided: {}", path.display())]
    ReadInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The engine rejected its level or failed while encoding
    #[error("{engine} compression failed")]
    Compression {
        engine: Engine,
        #[source]
        source: CompressionError,
    },

    /// The selection prompt could not read an answer
    #[error("no selection could be read for the output file")]
    Prompt(#[source] std::io::Error),

    /// An output path was given but no engine ran
    #[error("no compression algorithm was selected, nothing to write")]
    NothingToWrite,

    /// The output file could not be written
    #[error("could not write output file: {}", path.display())]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
