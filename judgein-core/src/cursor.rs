//! One-character look-ahead over a [`Source`].
//!
//! Carriage returns never become visible: `peek` drops every `\r` byte it pulls,
//! so `"12\r\n"` and `"12\n"` look identical to everything above the cursor.

use crate::char_utils::CARRIAGE_RETURN;
use crate::source::Source;
use crate::{ScanResult, Violation};

/// Location of the next unread visible character.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Position {
    /// Visible characters consumed so far.
    pub offset: usize,
    /// 1-based.
    pub line: u32,
    /// 1-based.
    pub col: u32,
}

impl Default for Position {
    fn default() -> Self {
        Position {
            offset: 0,
            line: 1,
            col: 1,
        }
    }
}

impl core::fmt::Display for Position {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}:{}", self.line, self.col)
    }
}

pub struct Cursor<S> {
    source: Option<S>,
    lookahead: Option<u8>,
    pos: Position,
}

impl<S: Source> Cursor<S> {
    pub fn new(source: S) -> Self {
        Cursor {
            source: Some(source),
            lookahead: None,
            pos: Position::default(),
        }
    }

    /// A cursor with no stream behind it; every `peek` reports end of stream.
    pub fn detached() -> Self {
        Cursor {
            source: None,
            lookahead: None,
            pos: Position::default(),
        }
    }

    /// Returns the next visible character without consuming it.
    ///
    /// Fails with [`Violation::EndOfStream`] once the source is exhausted, or with
    /// [`Violation::Io`] if the source itself fails.
    #[cfg_attr(not(feature = "no-inline"), inline)]
    pub fn peek(&mut self) -> ScanResult<u8> {
        let Some(source) = self.source.as_mut() else {
            return Err(Violation::EndOfStream);
        };
        if let Some(chr) = self.lookahead {
            return Ok(chr);
        }
        loop {
            match source.next_byte()? {
                Some(CARRIAGE_RETURN) => continue,
                Some(chr) => {
                    self.lookahead = Some(chr);
                    return Ok(chr);
                }
                None => return Err(Violation::EndOfStream),
            }
        }
    }

    /// Returns the peeked character and clears the look-ahead slot.
    #[cfg_attr(not(feature = "no-inline"), inline)]
    pub fn consume(&mut self) -> ScanResult<u8> {
        let chr = self.peek()?;
        self.lookahead = None;
        self.pos.offset += 1;
        if chr == b'\n' {
            self.pos.line += 1;
            self.pos.col = 1;
        } else {
            self.pos.col += 1;
        }
        Ok(chr)
    }

    /// Non-destructive end-of-stream check. A character found stays in the look-ahead slot.
    pub fn at_end(&mut self) -> ScanResult<bool> {
        match self.peek() {
            Ok(_) => Ok(false),
            Err(Violation::EndOfStream) => Ok(true),
            Err(e) => Err(e),
        }
    }

    /// Like `peek`, but turns end of stream into `None`.
    #[cfg_attr(not(feature = "no-inline"), inline)]
    pub fn peek_opt(&mut self) -> ScanResult<Option<u8>> {
        match self.peek() {
            Ok(chr) => Ok(Some(chr)),
            Err(Violation::EndOfStream) => Ok(None),
            Err(e) => Err(e),
        }
    }

    #[must_use]
    pub fn position(&self) -> Position {
        self.pos
    }

    /// Drops the source, which closes any file handle it owns. Safe to call repeatedly.
    pub fn close(&mut self) {
        self.source = None;
    }

    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.source.is_none()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::source::SliceSource;
    use crate::{Cursor, Position, Violation};

    #[test]
    fn test_peek_is_repeatable() {
        let mut cursor = Cursor::new(SliceSource::from("ab"));
        assert_eq!(cursor.peek(), Ok(b'a'));
        assert_eq!(cursor.peek(), Ok(b'a'));
        assert_eq!(cursor.consume(), Ok(b'a'));
        assert_eq!(cursor.peek(), Ok(b'b'));
        assert_eq!(cursor.consume(), Ok(b'b'));
        assert_eq!(cursor.peek(), Err(Violation::EndOfStream));
        assert_eq!(cursor.consume(), Err(Violation::EndOfStream));
    }

    #[test]
    fn test_consume_without_peek() {
        let mut cursor = Cursor::new(SliceSource::from("xy"));
        assert_eq!(cursor.consume(), Ok(b'x'));
        assert_eq!(cursor.consume(), Ok(b'y'));
    }

    #[test]
    fn test_carriage_returns_invisible() {
        let mut cursor = Cursor::new(SliceSource::from("\r\r1\r\r\r\n\r"));
        assert_eq!(cursor.consume(), Ok(b'1'));
        assert_eq!(cursor.consume(), Ok(b'\n'));
        assert_eq!(cursor.at_end(), Ok(true));
    }

    #[test]
    fn test_at_end_keeps_lookahead() {
        let mut cursor = Cursor::new(SliceSource::from("z"));
        assert_eq!(cursor.at_end(), Ok(false));
        assert_eq!(cursor.at_end(), Ok(false));
        assert_eq!(cursor.consume(), Ok(b'z'));
        assert_eq!(cursor.at_end(), Ok(true));
        assert_eq!(cursor.peek_opt(), Ok(None));
    }

    #[test]
    fn test_position() {
        let mut cursor = Cursor::new(SliceSource::from("a\r\nbc"));
        cursor.consume().unwrap();
        cursor.consume().unwrap();
        cursor.consume().unwrap();
        assert_eq!(
            cursor.position(),
            Position {
                offset: 3,
                line: 2,
                col: 2
            }
        );
        assert_eq!(cursor.position().to_string(), "2:2");
    }

    #[test]
    fn test_close_idempotent() {
        let mut cursor = Cursor::new(SliceSource::from("abc"));
        assert_eq!(cursor.peek(), Ok(b'a'));
        cursor.close();
        cursor.close();
        assert!(cursor.is_closed());
        assert_eq!(cursor.peek(), Err(Violation::EndOfStream));

        assert_eq!(cursor.consume(), Err(Violation::EndOfStream));
        assert_eq!(cursor.at_end(), Ok(true));

        let mut detached: Cursor<SliceSource> = Cursor::detached();
        assert!(detached.is_closed());
        detached.close();
        assert_eq!(detached.at_end(), Ok(true));
    }
}
