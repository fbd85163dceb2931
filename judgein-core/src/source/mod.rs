use crate::ScanResult;

pub use read_source::ReadSource;
pub use slice_source::SliceSource;

mod read_source;
mod slice_source;

///
/// A source of raw input bytes, pulled strictly one at a time and never rewound.
///
/// Sources do no normalisation of their own: carriage returns and every other byte
/// are handed to the [`Cursor`](crate::Cursor) unchanged, which decides what is visible.
///
/// # Methods
/// - `next_byte() -> ScanResult<Option<u8>>`: Returns the next raw byte and advances past it,
///   or `Ok(None)` once the underlying data is exhausted. Failures of the underlying
///   transport are reported as [`Violation::Io`](crate::Violation::Io).
pub trait Source {
    fn next_byte(&mut self) -> ScanResult<Option<u8>>;
}

impl<S: Source + ?Sized> Source for &mut S {
    #[cfg_attr(not(feature = "no-inline"), inline)]
    fn next_byte(&mut self) -> ScanResult<Option<u8>> {
        (**self).next_byte()
    }
}

impl<S: Source + ?Sized> Source for Box<S> {
    #[cfg_attr(not(feature = "no-inline"), inline)]
    fn next_byte(&mut self) -> ScanResult<Option<u8>> {
        (**self).next_byte()
    }
}
