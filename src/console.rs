//! Line-oriented terminal input and output.
//!
//! The driver never touches stdin/stdout directly; it goes through a
//! [`Console`] so tests can script input and capture output.

use std::io::{self, BufRead, Write};

/// Source of input lines and sink for game text.
pub trait Console {
    /// Reads one line without its trailing newline. `None` at end of input.
    fn read_line(&mut self) -> io::Result<Option<String>>;

    /// Writer for game text.
    fn out(&mut self) -> &mut dyn Write;
}

/// [`Console`] over any buffered reader and writer.
#[derive(Debug)]
pub struct TextConsole<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> TextConsole<R, W> {
    /// Creates a console from an input and an output.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Consumes the console, returning the output (captured text in tests).
    pub fn into_output(self) -> W {
        self.output
    }
}

impl TextConsole<io::StdinLock<'static>, io::Stdout> {
    /// Console bound to the process's stdin and stdout.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console for TextConsole<R, W> {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    fn out(&mut self) -> &mut dyn Write {
        &mut self.output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_lines_until_eof() {
        let mut console = TextConsole::new("5\r\nabc\n".as_bytes(), Vec::new());
        assert_eq!(console.read_line().unwrap(), Some("5".to_string()));
        assert_eq!(console.read_line().unwrap(), Some("abc".to_string()));
        assert_eq!(console.read_line().unwrap(), None);
    }

    #[test]
    fn test_output_is_captured() {
        let mut console = TextConsole::new(io::empty(), Vec::new());
        write!(console.out(), "hello").unwrap();
        assert_eq!(console.into_output(), b"hello");
    }
}
