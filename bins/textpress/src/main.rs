//! textpress - compresses a file with brotli and/or gzip
//!
//! Reports the compressed size and the time each engine took, and optionally
//! writes one of the compressed buffers to an output file.

use clap::{ArgAction, Parser};
use std::path::PathBuf;
use std::process::ExitCode;
use textpress_cli::output::Status;

mod chooser;
mod config;
mod error;
mod logging;
mod runner;

use chooser::PromptChooser;
use config::Config;
use error::RunError;

#[derive(Parser, Debug)]
#[command(name = "textpress")]
#[command(about = "Compresses text files with brotli or gzip")]
#[command(long_about = "Compresses text files with brotli or gzip. The first argument is the input file, the optional second argument is the output file.")]
#[command(version)]
pub struct Cli {
    /// File to compress
    pub input: Option<PathBuf>,

    /// Where to write the compressed bytes
    pub output: Option<PathBuf>,

    /// Select brotli compression
    #[arg(short, long)]
    pub brotli: bool,

    /// Select gzip compression (turn off with --gzip=false)
    #[arg(
        short,
        long,
        action = ArgAction::Set,
        num_args = 0..=1,
        require_equals = true,
        default_value_t = true,
        default_missing_value = "true"
    )]
    pub gzip: bool,

    /// Select compression to best speed or size
    #[arg(short, long, default_value = "size")]
    pub level: String,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = logging::init(cli.verbose) {
        eprintln!("warning: {}", e);
    }

    let result = Config::from_cli(cli).and_then(|config| {
        let mut chooser = PromptChooser::stdio();
        runner::run(&config, &mut chooser)
    });

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            report(&e);
            ExitCode::FAILURE
        }
    }
}

fn report(err: &RunError) {
    tracing::debug!(error = ?err, "run failed");
    Status::error(&err.to_string());
    if let Some(cause) = std::error::Error::source(err) {
        Status::cause(&cause.to_string());
    }
}
