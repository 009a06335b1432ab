//! Gzip compression implementation.

use crate::{CompressionError, Engine, Result};
use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;
use std::io::{Read, Write};

/// Lowest level the gzip encoder accepts.
pub const GZIP_MIN_LEVEL: u32 = 0;
/// Highest level the gzip encoder accepts.
pub const GZIP_MAX_LEVEL: u32 = 9;

/// Compress data using Gzip.
///
/// # Arguments
/// * `data` - Data to compress
/// * `level` - Compression level (0-9)
///
/// # Errors
/// Returns [`CompressionError::InvalidLevel`] when `level` is above 9.
pub fn gzip_compress(data: &[u8], level: u32) -> Result<Vec<u8>> {
    if level > GZIP_MAX_LEVEL {
        return Err(CompressionError::InvalidLevel {
            engine: Engine::Gzip,
            level,
            min: GZIP_MIN_LEVEL,
            max: GZIP_MAX_LEVEL,
        });
    }

    let mut encoder = GzEncoder::new(Vec::new(), Compression::new(level));
    encoder.write_all(data)?;
    Ok(encoder.finish()?)
}

/// Decompress Gzip data.
pub fn gzip_decompress(data: &[u8]) -> Result<Vec<u8>> {
    let mut decoder = GzDecoder::new(data);
    let mut output = Vec::new();
    decoder.read_to_end(&mut output)?;
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gzip_roundtrip() {
        let original = b"Hello, Gzip!";
        let compressed = gzip_compress(original, 6).unwrap();
        let decompressed = gzip_decompress(&compressed).unwrap();
        assert_eq!(original.as_slice(), decompressed.as_slice());
    }

    #[test]
    fn test_gzip_header_magic() {
        let compressed = gzip_compress(b"magic", 9).unwrap();
        assert_eq!(&compressed[..2], &[0x1f, 0x8b]);
    }

    #[test]
    fn test_rejects_level_above_max() {
        let err = gzip_compress(b"data", 10).unwrap_err();
        assert!(matches!(
            err,
            CompressionError::InvalidLevel { engine: Engine::Gzip, level: 10, .. }
        ));
        assert_eq!(err.to_string(), "incorrect level 10 for gzip (accepted: 0-9)");
    }

    #[test]
    fn test_decompress_garbage_fails() {
        assert!(gzip_decompress(b"not gzip at all").is_err());
    }
}
