//! Byte stream to command line assembly
//!
//! Serial links deliver commands a few bytes at a time. The reader
//! collects bytes until `\n` or `\r` and hands out the finished line.

use heapless::Vec;

/// Longest accepted line, including the command name
pub const MAX_LINE_LEN: usize = 80;

/// Line assembly error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LineError {
    /// Line exceeded [`MAX_LINE_LEN`] bytes and was discarded
    TooLong,
    /// Line is not valid UTF-8
    InvalidUtf8,
}

/// Assembles newline-terminated lines from single bytes
#[derive(Debug, Default)]
pub struct LineReader {
    buffer: Vec<u8, MAX_LINE_LEN>,
    overflowed: bool,
    complete: bool,
}

impl LineReader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop any partial line
    pub fn reset(&mut self) {
        self.buffer.clear();
        self.overflowed = false;
        self.complete = false;
    }

    /// Feed a single byte
    ///
    /// Returns `Ok(Some(line))` when a terminator completes a non-empty
    /// line, `Ok(None)` when more bytes are needed. The returned line is
    /// valid until the next call.
    pub fn feed(&mut self, byte: u8) -> Result<Option<&str>, LineError> {
        if self.complete {
            self.reset();
        }

        match byte {
            b'\n' | b'\r' => {
                if self.overflowed {
                    self.reset();
                    return Err(LineError::TooLong);
                }
                if self.buffer.is_empty() {
                    return Ok(None);
                }
                self.complete = true;
                match core::str::from_utf8(&self.buffer) {
                    Ok(line) => Ok(Some(line)),
                    Err(_) => Err(LineError::InvalidUtf8),
                }
            }
            _ => {
                if self.buffer.push(byte).is_err() {
                    self.overflowed = true;
                }
                Ok(None)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use std::string::String;
    use std::vec;
    use std::vec::Vec;

    type Line = Result<String, LineError>;

    fn ok(line: &str) -> Line {
        Ok(String::from(line))
    }

    fn feed_all(reader: &mut LineReader, bytes: &[u8]) -> Vec<Line> {
        let mut lines = Vec::new();
        for &b in bytes {
            match reader.feed(b) {
                Ok(Some(line)) => lines.push(ok(line)),
                Ok(None) => {}
                Err(e) => lines.push(Err(e)),
            }
        }
        lines
    }

    #[test]
    fn test_lines_split_on_any_terminator() {
        let mut reader = LineReader::new();
        let lines = feed_all(&mut reader, b"cycle\r\nwrite hi\n\ntime\r");
        assert_eq!(lines, vec![ok("cycle"), ok("write hi"), ok("time")]);
    }

    #[test]
    fn test_partial_line_waits() {
        let mut reader = LineReader::new();
        assert!(feed_all(&mut reader, b"spec").is_empty());
        assert_eq!(feed_all(&mut reader, b"trum\n"), vec![ok("spectrum")]);
    }

    #[test]
    fn test_overlong_line_discarded() {
        let mut reader = LineReader::new();
        let mut bytes = vec![b'x'; MAX_LINE_LEN + 5];
        bytes.push(b'\n');
        bytes.extend_from_slice(b"chase\n");
        assert_eq!(
            feed_all(&mut reader, &bytes),
            vec![Err(LineError::TooLong), ok("chase")]
        );
    }

    #[test]
    fn test_invalid_utf8() {
        let mut reader = LineReader::new();
        assert_eq!(
            feed_all(&mut reader, &[0xff, 0xfe, b'\n', b'a', b'\n']),
            vec![Err(LineError::InvalidUtf8), ok("a")]
        );
    }
}
