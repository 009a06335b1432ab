//! Picking which compressed buffer to write when more than one engine ran.

use std::io::{self, BufRead, Write};
use textpress_compression::Engine;

/// Asks for a numbered choice among engines.
pub trait Chooser {
    /// Return the number picked. `1` is the first engine; callers decide what
    /// any other value means.
    fn choose(&mut self, engines: &[Engine]) -> io::Result<i64>;
}

/// Prints a numbered menu and reads lines until one parses as an integer.
pub struct PromptChooser<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> PromptChooser<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl PromptChooser<io::StdinLock<'static>, io::Stdout> {
    /// Prompt on the process's stdout and read from its stdin.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Chooser for PromptChooser<R, W> {
    fn choose(&mut self, engines: &[Engine]) -> io::Result<i64> {
        writeln!(self.output, "You selected more than one compression algorithm")?;
        for (i, engine) in engines.iter().enumerate() {
            writeln!(self.output, "{}: {}", i + 1, engine.name())?;
        }
        write!(
            self.output,
            "Select which you would like to write to the output file: "
        )?;
        self.output.flush()?;

        let mut line = String::new();
        loop {
            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                return Err(io::Error::new(
                    io::ErrorKind::UnexpectedEof,
                    "input closed before a selection was entered",
                ));
            }

            match line.trim().parse::<i64>() {
                Ok(choice) => {
                    tracing::debug!(choice, "selection entered");
                    return Ok(choice);
                }
                Err(_) => {
                    writeln!(self.output, "Please enter a valid integer!")?;
                    self.output.flush()?;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOTH: [Engine; 2] = [Engine::Brotli, Engine::Gzip];

    fn prompt(input: &str) -> (io::Result<i64>, String) {
        let mut output = Vec::new();
        let result = PromptChooser::new(input.as_bytes(), &mut output).choose(&BOTH);
        (result, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_menu_lists_engines() {
        let (choice, output) = prompt("1\n");
        assert_eq!(choice.unwrap(), 1);
        assert!(output.contains("1: brotli\n2: gzip\n"));
        assert!(output.ends_with("Select which you would like to write to the output file: "));
    }

    #[test]
    fn test_retries_until_integer() {
        let (choice, output) = prompt("abc\n\n2.5\n 2 \n");
        assert_eq!(choice.unwrap(), 2);
        assert_eq!(output.matches("Please enter a valid integer!").count(), 3);
    }

    #[test]
    fn test_any_integer_is_accepted() {
        let (choice, _) = prompt("-7\n");
        assert_eq!(choice.unwrap(), -7);
    }

    #[test]
    fn test_eof_is_an_error() {
        let (choice, output) = prompt("nope\n");
        assert_eq!(choice.unwrap_err().kind(), io::ErrorKind::UnexpectedEof);
        assert!(output.contains("Please enter a valid integer!"));
    }

    #[test]
    fn test_last_line_without_newline() {
        let (choice, _) = prompt("1");
        assert_eq!(choice.unwrap(), 1);
    }
}
