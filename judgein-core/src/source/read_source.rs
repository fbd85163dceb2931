use std::io::{BufRead, ErrorKind};

use crate::source::Source;
use crate::ScanResult;

/// Pulls bytes out of any [`BufRead`], e.g. a buffered file or locked standard input.
pub struct ReadSource<R> {
    input: R,
}

impl<R: BufRead> ReadSource<R> {
    pub fn new(input: R) -> Self {
        Self { input }
    }
}

impl<R: BufRead> Source for ReadSource<R> {
    fn next_byte(&mut self) -> ScanResult<Option<u8>> {
        loop {
            let byte = match self.input.fill_buf() {
                Ok(buf) => buf.first().copied(),
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            };
            if byte.is_some() {
                self.input.consume(1);
            }
            return Ok(byte);
        }
    }
}
