//! Error types for the compression crate.

use crate::Engine;
use thiserror::Error;

/// Result type alias for compression operations.
pub type Result<T> = std::result::Result<T, CompressionError>;

/// Errors that can occur during compression operations.
#[derive(Debug, Error)]
pub enum CompressionError {
    /// The engine does not accept the requested level
    #[error("incorrect level {level} for {engine} (accepted: {min}-{max})")]
    InvalidLevel {
        engine: Engine,
        level: u32,
        min: u32,
        max: u32,
    },

    /// IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}
