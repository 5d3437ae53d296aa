//! # Line Sources
//!
//! The terminal only ever asks its input for whole lines. Numeric answers are
//! parsed from the line locally, so the rest of a line can never leak into the
//! next read.
//!
//! Any [`BufRead`] is a [`LineSource`]: `io::stdin().lock()` for real sessions,
//! `io::Cursor` for tests, `BufReader<File>` for scripted input.

use std::io::{self, BufRead};

/// A line-oriented input stream.
pub trait LineSource {
    /// Reads the next line without its `\n` / `\r\n` terminator.
    ///
    /// - `Ok(Some(""))` is an empty line.
    /// - `Ok(None)` means the stream is exhausted.
    /// - A line that is not valid UTF-8 is consumed and reported as
    ///   [`io::ErrorKind::InvalidData`].
    fn read_line(&mut self) -> io::Result<Option<String>>;
}

impl<R: BufRead> LineSource for R {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut raw = Vec::new();
        if self.read_until(b'\n', &mut raw)? == 0 {
            return Ok(None);
        }

        if raw.last() == Some(&b'\n') {
            raw.pop();
            if raw.last() == Some(&b'\r') {
                raw.pop();
            }
        }

        String::from_utf8(raw)
            .map(Some)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }
}
