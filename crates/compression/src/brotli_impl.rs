//! Brotli compression implementation.

use crate::{CompressionError, Engine, Result};
use std::io::{Read, Write};

/// Lowest quality the brotli encoder accepts.
pub const BROTLI_MIN_QUALITY: u32 = 0;
/// Highest quality the brotli encoder accepts.
pub const BROTLI_MAX_QUALITY: u32 = 11;
/// Quality used when no preset is recognized.
pub const BROTLI_DEFAULT_QUALITY: u32 = 6;

const BUFFER_SIZE: usize = 4096;
const LG_WINDOW_SIZE: u32 = 22;

/// Compress data using Brotli.
///
/// # Arguments
/// * `data` - Data to compress
/// * `quality` - Compression quality (0-11)
///
/// # Errors
/// Returns [`CompressionError::InvalidLevel`] when `quality` is above 11.
pub fn brotli_compress(data: &[u8], quality: u32) -> Result<Vec<u8>> {
    if quality > BROTLI_MAX_QUALITY {
        return Err(CompressionError::InvalidLevel {
            engine: Engine::Brotli,
            level: quality,
            min: BROTLI_MIN_QUALITY,
            max: BROTLI_MAX_QUALITY,
        });
    }

    let mut output = Vec::new();

    {
        let mut encoder =
            brotli::CompressorWriter::new(&mut output, BUFFER_SIZE, quality, LG_WINDOW_SIZE);
        encoder.write_all(data)?;
        encoder.flush()?;
    }

    Ok(output)
}

/// Decompress Brotli data.
pub fn brotli_decompress(data: &[u8]) -> Result<Vec<u8>> {
    let mut output = Vec::new();
    let mut decoder = brotli::Decompressor::new(data, BUFFER_SIZE);
    decoder.read_to_end(&mut output)?;
    Ok(output)
}
