use crate::error::{Error, Result};

use std::io::{BufRead, Lines};

/// Line-by-line reader for files read as a sequence of blocks
///
/// Keeps the current line and its number so that errors can point back at
/// the offending line.
pub(crate) struct LineReader<R: BufRead> {
    lines: Lines<R>,
    cached_line: String,
    line_number: usize,
}

impl<R: BufRead> LineReader<R> {
    /// Create a new reader from any buffered source
    pub(crate) fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            cached_line: String::new(),
            line_number: 0,
        }
    }

    /// Advances to the next line, saving it to the cache and returning a ref
    pub(crate) fn next_line(&mut self) -> Result<&str> {
        self.cached_line = self.lines.next().ok_or(Error::EndOfFile)??;
        self.line_number += 1;
        Ok(self.cached_line.as_str())
    }

    /// Skip `n` lines, all of which must exist
    pub(crate) fn skip_lines(&mut self, n: usize) -> Result<()> {
        for _ in 0..n {
            self.next_line()?;
        }
        Ok(())
    }

    /// One-based number of the current line
    pub(crate) fn line_number(&self) -> usize {
        self.line_number
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_lines() {
        let mut reader = LineReader::new("a\nb\nc\n".as_bytes());
        assert_eq!(reader.next_line().unwrap(), "a");
        reader.skip_lines(1).unwrap();
        assert_eq!(reader.next_line().unwrap(), "c");
        assert_eq!(reader.line_number(), 3);
        assert!(matches!(reader.next_line(), Err(Error::EndOfFile)));
    }
}
