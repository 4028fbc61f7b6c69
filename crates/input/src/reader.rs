//! Line reader for the menu prompt.

use std::io::BufRead;

use anyhow::Result;

use crate::map::parse_choice;
use crate::types::MenuChoice;

/// One prompt's worth of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    Choice(MenuChoice),
    /// A line that is not a menu number (trimmed)
    Invalid(String),
    /// Input closed
    Eof,
}

pub struct MenuReader<R> {
    inner: R,
    buf: Vec<u8>,
}

impl<R: BufRead> MenuReader<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            buf: Vec::with_capacity(16),
        }
    }

    /// Read the next line and classify it.
    ///
    /// Bytes that are not UTF-8 are decoded lossily and end up as
    /// [`InputEvent::Invalid`]; only I/O failures are errors.
    pub fn next_event(&mut self) -> Result<InputEvent> {
        self.buf.clear();
        if self.inner.read_until(b'\n', &mut self.buf)? == 0 {
            return Ok(InputEvent::Eof);
        }

        let line = String::from_utf8_lossy(&self.buf);
        Ok(match parse_choice(&line) {
            Some(choice) => InputEvent::Choice(choice),
            None => InputEvent::Invalid(line.trim().to_string()),
        })
    }
}
