//! Terminal output utilities
//!
//! Everything here writes to standard output so a run's report and its
//! errors can be captured from a single stream.

use owo_colors::{OwoColorize, Stream::Stdout};
use std::time::Duration;

/// Status message helpers
pub struct Status;

impl Status {
    /// Print an error message
    pub fn error(message: &str) {
        println!(
            "{}",
            format!("error: {}", message).if_supports_color(Stdout, |m| m.red())
        );
    }

    /// Print the underlying cause of a previous error
    pub fn cause(message: &str) {
        println!("{}", message.if_supports_color(Stdout, |m| m.dimmed()));
    }

    /// Print a header
    pub fn header(message: &str) {
        println!("{}", message.if_supports_color(Stdout, |m| m.bold()));
    }
}

const KB: u64 = 1000;
const MB: u64 = KB * 1000;
const GB: u64 = MB * 1000;

/// Format a byte count with decimal units.
///
/// The value is the unrounded quotient in its shortest form, so
/// `1_500_000` becomes `1.5MB` and `2_000_000_000` becomes `2GB`.
pub fn format_size(bytes: u64) -> String {
    if bytes >= GB {
        format!("{}GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{}MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{}KB", bytes as f64 / KB as f64)
    } else {
        format!("{}B", bytes)
    }
}

/// Format a duration for display, keeping full precision in the chosen unit.
pub fn format_duration(duration: Duration) -> String {
    let nanos = duration.as_nanos();
    if nanos < 1_000 {
        format!("{}ns", nanos)
    } else if nanos < 1_000_000 {
        format!("{}µs", nanos as f64 / 1e3)
    } else if nanos < 1_000_000_000 {
        format!("{}ms", nanos as f64 / 1e6)
    } else if duration.as_secs() < 60 {
        format!("{}s", duration.as_secs_f64())
    } else {
        let mins = duration.as_secs() / 60;
        let remaining_secs = duration.as_secs_f64() - (mins * 60) as f64;
        format!("{}m{}s", mins, remaining_secs)
    }
}
