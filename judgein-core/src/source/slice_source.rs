use crate::source::Source;
use crate::ScanResult;

pub struct SliceSource<'input> {
    input: &'input [u8],
    pos: usize,
}

impl<'input> SliceSource<'input> {
    pub fn new(input: &'input [u8]) -> SliceSource<'input> {
        SliceSource { input, pos: 0 }
    }

    /// Raw bytes not yet handed out.
    #[must_use]
    pub fn remaining(&self) -> &'input [u8] {
        &self.input[self.pos..]
    }
}

impl<'input> From<&'input str> for SliceSource<'input> {
    fn from(value: &'input str) -> Self {
        SliceSource::new(value.as_bytes())
    }
}

impl<'input> From<&'input [u8]> for SliceSource<'input> {
    fn from(value: &'input [u8]) -> Self {
        SliceSource::new(value)
    }
}

impl Source for SliceSource<'_> {
    #[cfg_attr(not(feature = "no-inline"), inline)]
    fn next_byte(&mut self) -> ScanResult<Option<u8>> {
        let byte = self.input.get(self.pos).copied();
        if byte.is_some() {
            self.pos += 1;
        }
        Ok(byte)
    }
}
