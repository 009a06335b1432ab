//! The compression pipeline: read, compress per engine, report, write.

use crate::chooser::Chooser;
use crate::config::Config;
use crate::error::{Result, RunError};
use std::fs;
use std::io::Write;
use std::path::Path;
use textpress_cli::output::{format_duration, format_size, Status};
use textpress_compression::{compress, CompressedResult, Engine};
use tracing::{debug, warn};

/// Permission bits for the written file, before the umask.
#[cfg(unix)]
pub const OUTPUT_MODE: u32 = 0o777;

/// Run one invocation end to end.
pub fn run(config: &Config, chooser: &mut dyn Chooser) -> Result<()> {
    let data = fs::read(&config.input).map_err(|source| RunError::ReadInput {
        path: config.input.clone(),
        source,
    })?;
    debug!(path = %config.input.display(), bytes = data.len(), level = %config.level, "read input");

    if config.engines.is_empty() {
        warn!("no compression algorithm selected");
    }

    let results = compress_all(&data, config)?;
    for result in &results {
        print_report(result);
    }

    if let Some(output) = &config.output {
        let chosen = select_output_buffer(&results, chooser)?;
        write_output(output, &chosen.data)?;
        debug!(engine = %chosen.engine, path = %output.display(), bytes = chosen.len(), "wrote output");
    }

    Ok(())
}

/// Run every configured engine over `data`, in order.
pub fn compress_all(data: &[u8], config: &Config) -> Result<Vec<CompressedResult>> {
    config
        .engines
        .iter()
        .map(|&engine| {
            compress(data, engine, config.level)
                .map_err(|source| RunError::Compression { engine, source })
        })
        .collect()
}

fn print_report(result: &CompressedResult) {
    Status::header(&format!("{} compression:", result.engine.label()));
    println!("{}", format_size(result.len() as u64));
    println!("In {}", format_duration(result.elapsed));
}

/// Pick the buffer to persist.
///
/// A single result is returned as is. With two, the chooser decides: `1`
/// selects the first engine and any other number the second.
pub fn select_output_buffer<'a>(
    results: &'a [CompressedResult],
    chooser: &mut dyn Chooser,
) -> Result<&'a CompressedResult> {
    match results {
        [] => Err(RunError::NothingToWrite),
        [only] => Ok(only),
        [first, second, ..] => {
            let engines: Vec<Engine> = results.iter().map(|r| r.engine).collect();
            let choice = chooser.choose(&engines).map_err(RunError::Prompt)?;
            Ok(if choice == 1 { first } else { second })
        }
    }
}

/// Create or truncate `path` and write `data` to it.
pub fn write_output(path: &Path, data: &[u8]) -> Result<()> {
    let to_error = |source: std::io::Error| RunError::WriteOutput {
        path: path.to_path_buf(),
        source,
    };

    let mut options = fs::OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(OUTPUT_MODE);
    }

    let mut file = options.open(path).map_err(to_error)?;
    file.write_all(data).map_err(to_error)?;
    file.flush().map_err(to_error)
}
