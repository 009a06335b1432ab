//! Immutable per-run settings built from the parsed command line.

use crate::error::{Result, RunError};
use crate::Cli;
use std::path::PathBuf;
use textpress_compression::{Engine, LevelPreset};

/// Settings for one run. Built once, then only read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Engines to run, in report order
    pub engines: Vec<Engine>,
    pub level: LevelPreset,
    pub input: PathBuf,
    pub output: Option<PathBuf>,
}

impl Config {
    /// Validate the parsed arguments. Fails only when no input path was given.
    pub fn from_cli(cli: Cli) -> Result<Self> {
        let input = cli.input.ok_or(RunError::NoInput)?;

        let mut engines = Vec::with_capacity(2);
        if cli.brotli {
            engines.push(Engine::Brotli);
        }
        if cli.gzip {
            engines.push(Engine::Gzip);
        }

        Ok(Self {
            engines,
            level: LevelPreset::parse(&cli.level),
            input,
            output: cli.output,
        })
    }
}
