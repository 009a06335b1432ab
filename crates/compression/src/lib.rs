//! Gzip and Brotli compression for textpress.
//!
//! This crate provides:
//! - The two supported engines and their level constants
//! - Named level presets (`speed`, `size`, default)
//! - Timed compression into an in-memory [`CompressedResult`]

mod brotli_impl;
mod error;
mod gzip;
mod level;

pub use brotli_impl::{
    brotli_compress, brotli_decompress, BROTLI_DEFAULT_QUALITY, BROTLI_MAX_QUALITY,
    BROTLI_MIN_QUALITY,
};
pub use error::{CompressionError, Result};
pub use gzip::{gzip_compress, gzip_decompress, GZIP_MAX_LEVEL, GZIP_MIN_LEVEL};
pub use level::LevelPreset;

use flate2::Compression;
use std::fmt;
use std::time::{Duration, Instant};

/// Compression engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Engine {
    /// Brotli compression (best ratio)
    Brotli,
    /// Gzip compression (widely supported)
    Gzip,
}

impl Engine {
    /// Lowercase identifier, as used in the selection menu.
    pub fn name(&self) -> &'static str {
        match self {
            Engine::Brotli => "brotli",
            Engine::Gzip => "gzip",
        }
    }

    /// Heading printed above the engine's report.
    pub fn label(&self) -> &'static str {
        match self {
            Engine::Brotli => "Brotli",
            Engine::Gzip => "GZIP",
        }
    }

    /// Numeric level this engine uses for a preset.
    pub fn level(&self, preset: LevelPreset) -> u32 {
        match (self, preset) {
            (Engine::Brotli, LevelPreset::Size) => BROTLI_MAX_QUALITY,
            (Engine::Brotli, LevelPreset::Speed) => BROTLI_MIN_QUALITY,
            (Engine::Brotli, LevelPreset::Default) => BROTLI_DEFAULT_QUALITY,
            (Engine::Gzip, LevelPreset::Size) => Compression::best().level(),
            (Engine::Gzip, LevelPreset::Speed) => Compression::fast().level(),
            (Engine::Gzip, LevelPreset::Default) => Compression::default().level(),
        }
    }
}

impl fmt::Display for Engine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Output of running one engine over the input.
#[derive(Debug, Clone)]
pub struct CompressedResult {
    pub engine: Engine,
    pub data: Vec<u8>,
    pub elapsed: Duration,
}

impl CompressedResult {
    /// Compressed length in bytes.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// Compress data with an engine at the level its preset maps to, timing the call.
pub fn compress(data: &[u8], engine: Engine, preset: LevelPreset) -> Result<CompressedResult> {
    compress_with_level(data, engine, engine.level(preset))
}

/// Compress data with an explicit numeric level, timing the call.
pub fn compress_with_level(data: &[u8], engine: Engine, level: u32) -> Result<CompressedResult> {
    let start = Instant::now();
    let compressed = match engine {
        Engine::Brotli => brotli_compress(data, level)?,
        Engine::Gzip => gzip_compress(data, level)?,
    };
    let elapsed = start.elapsed();

    tracing::debug!(
        engine = %engine,
        level,
        input_bytes = data.len(),
        output_bytes = compressed.len(),
        elapsed_us = elapsed.as_micros() as u64,
        "compressed"
    );

    Ok(CompressedResult {
        engine,
        data: compressed,
        elapsed,
    })
}

/// Decompress data produced by an engine.
pub fn decompress(data: &[u8], engine: Engine) -> Result<Vec<u8>> {
    match engine {
        Engine::Brotli => brotli_decompress(data),
        Engine::Gzip => gzip_decompress(data),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn sample_text() -> Vec<u8> {
        let mut text = String::new();
        for i in 0..2000 {
            text.push_str(&format!("line {} of a fairly repetitive sample, value={}\n", i, i * 7 % 13));
        }
        text.into_bytes()
    }

    #[test]
    fn test_level_mapping_gzip() {
        assert_eq!(Engine::Gzip.level(LevelPreset::Size), 9);
        assert_eq!(Engine::Gzip.level(LevelPreset::Speed), 1);
        assert_eq!(Engine::Gzip.level(LevelPreset::Default), 6);
    }

    #[test]
    fn test_level_mapping_brotli() {
        assert_eq!(Engine::Brotli.level(LevelPreset::Size), 11);
        assert_eq!(Engine::Brotli.level(LevelPreset::Speed), 0);
        assert_eq!(Engine::Brotli.level(LevelPreset::Default), 6);
    }

    #[test]
    fn test_compress_records_engine() {
        let result = compress(b"hello hello hello", Engine::Brotli, LevelPreset::Size).unwrap();
        assert_eq!(result.engine, Engine::Brotli);
        assert_eq!(result.len(), result.data.len());
    }

    #[test]
    fn test_compress_with_invalid_level() {
        assert!(compress_with_level(b"x", Engine::Gzip, 42).is_err());
        assert!(compress_with_level(b"x", Engine::Brotli, 42).is_err());
    }

    #[test]
    fn test_speed_not_smaller_than_size() {
        let data = sample_text();
        for engine in [Engine::Brotli, Engine::Gzip] {
            let fast = compress(&data, engine, LevelPreset::Speed).unwrap();
            let small = compress(&data, engine, LevelPreset::Size).unwrap();
            assert!(
                fast.len() >= small.len(),
                "{}: speed {} < size {}",
                engine,
                fast.len(),
                small.len()
            );
        }
    }

    #[test]
    fn test_engine_display() {
        assert_eq!(Engine::Brotli.to_string(), "brotli");
        assert_eq!(Engine::Gzip.label(), "GZIP");
    }

    proptest! {
        #[test]
        fn prop_roundtrip(data in proptest::collection::vec(any::<u8>(), 0..4096)) {
            for engine in [Engine::Brotli, Engine::Gzip] {
                let result = compress(&data, engine, LevelPreset::Default).unwrap();
                let restored = decompress(&result.data, engine).unwrap();
                prop_assert_eq!(&restored, &data);
            }
        }
    }
}
