//! Typed token readers.
//!
//! Every reader takes the longest run of characters of its class off the cursor,
//! converts it and checks it, leaving the cursor on the first character it did not
//! take. The first violation is returned straight away; nothing is ever pushed back.

use std::fs::File;
use std::io::{self, BufRead, BufReader, StdinLock};
use std::path::Path;

use tracing::{debug, trace};

use crate::char_utils::{
    is_break, is_float_char, is_integer_char, is_line_char, is_space, is_word_char,
};
use crate::source::{ReadSource, SliceSource, Source};
use crate::{Cursor, Expected, Position, ScanConfig, ScanResult, Violation, WhitespaceMode};

use self::number::{parse_float, parse_integer};
use self::pattern::PatternCache;

mod number;
mod pattern;


pub struct Scanner<S> {
    cursor: Cursor<S>,
    config: ScanConfig,
    patterns: PatternCache,
    byte_patterns: PatternCache,
    /// Standard mode only: whether the next blank skip may cross a line break.
    skip_to_next_line: bool,
}

impl<'input> Scanner<SliceSource<'input>> {
    pub fn new_from_str(input: &'input str, config: ScanConfig) -> Self {
        Scanner::new(SliceSource::from(input), config)
    }

    pub fn new_from_bytes(input: &'input [u8], config: ScanConfig) -> Self {
        Scanner::new(SliceSource::from(input), config)
    }
}

impl<R: BufRead> Scanner<ReadSource<R>> {
    pub fn new_from_reader(input: R, config: ScanConfig) -> Self {
        Scanner::new(ReadSource::new(input), config)
    }
}

impl Scanner<ReadSource<BufReader<File>>> {
    /// Opens `path` for reading. Failing to open is reported to the caller as is.
    pub fn new_from_path<P: AsRef<Path>>(path: P, config: ScanConfig) -> io::Result<Self> {
        let file = File::open(path.as_ref())?;
        debug!(path = %path.as_ref().display(), "opened input");
        Ok(Scanner::new_from_reader(BufReader::new(file), config))
    }
}

impl Scanner<ReadSource<StdinLock<'static>>> {
    /// Reads the process's standard input, holding its lock for the scanner's lifetime.
    pub fn new_stdin(config: ScanConfig) -> Self {
        Scanner::new_from_reader(io::stdin().lock(), config)
    }
}

impl<S: Source> Scanner<S> {
    pub fn new(source: S, config: ScanConfig) -> Self {
        Scanner::with_cursor(Cursor::new(source), config)
    }

    /// A scanner with no stream attached. It reads as an empty stream.
    pub fn detached(config: ScanConfig) -> Self {
        Scanner::with_cursor(Cursor::detached(), config)
    }

    fn with_cursor(cursor: Cursor<S>, config: ScanConfig) -> Self {
        Scanner {
            cursor,
            config,
            patterns: PatternCache::text(),
            byte_patterns: PatternCache::bytes(),
            skip_to_next_line: true,
        }
    }

    #[must_use]
    pub fn config(&self) -> ScanConfig {
        self.config
    }

    #[must_use]
    pub fn position(&self) -> Position {
        self.cursor.position()
    }

    pub fn peek(&mut self) -> ScanResult<u8> {
        self.cursor.peek()
    }

    pub fn consume(&mut self) -> ScanResult<u8> {
        self.cursor.consume()
    }

    pub fn at_end(&mut self) -> ScanResult<bool> {
        self.cursor.at_end()
    }

    /// Releases the stream. Calling it again, or on a detached scanner, does nothing.
    pub fn close(&mut self) {
        if !self.cursor.is_closed() {
            trace!(position = %self.cursor.position(), "closing input");
        }
        self.cursor.close();
    }

    pub fn read_int(&mut self, min: i32, max: i32) -> ScanResult<i32> {
        self.read_integer(min, max)
    }

    pub fn read_any_int(&mut self) -> ScanResult<i32> {
        self.read_integer(i32::MIN, i32::MAX)
    }

    pub fn read_long(&mut self, min: i64, max: i64) -> ScanResult<i64> {
        self.read_integer(min, max)
    }

    pub fn read_any_long(&mut self) -> ScanResult<i64> {
        self.read_integer(i64::MIN, i64::MAX)
    }

    /// Inclusive bounds.
    pub fn read_float(&mut self, min: f64, max: f64) -> ScanResult<f64> {
        self.skip_blanks()?;
        let token = self.take_ascii(is_float_char)?;
        let Some(value) = parse_float(&token) else {
            return self.fail(Violation::FloatParsing { token });
        };
        if !(min <= value && value <= max) {
            return self.fail(Violation::FloatRange { value, min, max });
        }
        trace!(value, "read float");
        Ok(value)
    }

    pub fn read_any_float(&mut self) -> ScanResult<f64> {
        self.read_float(f64::NEG_INFINITY, f64::INFINITY)
    }

    /// Reads up to the next whitespace character and requires the whole word to match `pattern`.
    pub fn read_word_matching(&mut self, pattern: &str) -> ScanResult<String> {
        let word = self.read_word()?;
        self.require_match(pattern, word)
    }

    pub fn read_word(&mut self) -> ScanResult<String> {
        self.skip_blanks()?;
        let bytes = self.take_bytes(is_word_char)?;
        let word = self.decode(bytes)?;
        trace!(word = %word, "read word");
        Ok(word)
    }

    pub fn read_char_matching(&mut self, pattern: &str) -> ScanResult<u8> {
        let chr = self.read_char()?;
        let matched = self.byte_patterns.get(pattern).map(|p| p.is_full_match(&[chr]));
        match matched {
            Ok(true) => Ok(chr),
            Ok(false) => self.fail(Violation::Pattern {
                pattern: String::from(pattern),
                token: chr.escape_ascii().to_string(),
            }),
            Err(e) => self.fail(e),
        }
    }

    pub fn read_char(&mut self) -> ScanResult<u8> {
        self.skip_blanks()?;
        match self.cursor.consume() {
            Ok(chr) => {
                trace!(chr = %chr.escape_ascii(), "read char");
                Ok(chr)
            }
            Err(Violation::EndOfStream) => {
                self.fail(Violation::whitespace(Expected::Character, None))
            }
            Err(e) => Err(e),
        }
    }

    /// Reads up to, but not including, the next `\n` and requires the whole line to match.
    pub fn read_line_matching(&mut self, pattern: &str) -> ScanResult<String> {
        let line = self.read_line()?;
        self.require_match(pattern, line)
    }

    pub fn read_line(&mut self) -> ScanResult<String> {
        self.skip_blanks()?;
        let bytes = self.take_bytes(is_line_char)?;
        let line = self.decode(bytes)?;
        trace!(len = line.len(), "read line");
        Ok(line)
    }

    pub fn read_space(&mut self) -> ScanResult<()> {
        if self.config.whitespace == WhitespaceMode::Standard {
            return Ok(());
        }
        self.expect_char(b' ', Expected::Space)
    }

    pub fn read_newline(&mut self) -> ScanResult<()> {
        if self.config.whitespace == WhitespaceMode::Identical {
            return self.expect_char(b'\n', Expected::Newline);
        }
        self.skip_blanks()?;
        self.skip_to_next_line = true;
        if self.cursor.at_end()? {
            return Ok(());
        }
        self.expect_char(b'\n', Expected::Newline)
    }

    /// Succeeds only if nothing but (in standard mode) whitespace is left.
    pub fn read_eof(&mut self) -> ScanResult<()> {
        self.skip_to_next_line = true;
        self.skip_blanks()?;
        match self.cursor.consume() {
            Err(Violation::EndOfStream) => {
                trace!(position = %self.cursor.position(), "reached end of stream");
                Ok(())
            }
            Ok(chr) => self.fail(Violation::whitespace(Expected::EndOfStream, Some(chr))),
            Err(e) => Err(e),
        }
    }

    fn read_integer<T>(&mut self, min: T, max: T) -> ScanResult<T>
    where
        T: core::str::FromStr + PartialOrd + Copy + Into<i64>,
    {
        self.skip_blanks()?;
        let token = self.take_ascii(is_integer_char)?;
        let Some(value) = parse_integer::<T>(&token) else {
            return self.fail(Violation::IntegerParsing { token });
        };
        if !(min <= value && value <= max) {
            return self.fail(Violation::IntegerRange {
                value: value.into(),
                min: min.into(),
                max: max.into(),
            });
        }
        trace!(token = %token, "read integer");
        Ok(value)
    }

    fn expect_char(&mut self, expected_chr: u8, expected: Expected) -> ScanResult<()> {
        match self.cursor.consume() {
            Ok(chr) if chr == expected_chr => Ok(()),
            Ok(chr) => self.fail(Violation::whitespace(expected, Some(chr))),
            Err(Violation::EndOfStream) => self.fail(Violation::whitespace(expected, None)),
            Err(e) => Err(e),
        }
    }

    /// No-op in identical mode.
    fn skip_blanks(&mut self) -> ScanResult<()> {
        if self.config.whitespace == WhitespaceMode::Identical {
            return Ok(());
        }
        while let Some(chr) = self.cursor.peek_opt()? {
            if !is_space(chr) || (is_break(chr) && !self.skip_to_next_line) {
                break;
            }
            self.cursor.consume()?;
        }
        self.skip_to_next_line = false;
        Ok(())
    }

    fn take_bytes(&mut self, class: fn(u8) -> bool) -> ScanResult<Vec<u8>> {
        let mut token = Vec::new();
        while let Some(chr) = self.cursor.peek_opt()? {
            if !class(chr) {
                break;
            }
            token.push(chr);
            self.cursor.consume()?;
        }
        Ok(token)
    }

    /// For the numeric classes, which are pure ASCII.
    fn take_ascii(&mut self, class: fn(u8) -> bool) -> ScanResult<String> {
        let mut token = String::new();
        while let Some(chr) = self.cursor.peek_opt()? {
            if !class(chr) {
                break;
            }
            token.push(char::from(chr));
            self.cursor.consume()?;
        }
        Ok(token)
    }

    fn decode(&self, bytes: Vec<u8>) -> ScanResult<String> {
        match String::from_utf8(bytes) {
            Ok(text) => Ok(text),
            Err(e) => self.fail(e.utf8_error().into()),
        }
    }

    fn require_match(&mut self, pattern: &str, token: String) -> ScanResult<String> {
        match self.patterns.get(pattern).map(|p| p.is_full_match(token.as_bytes())) {
            Ok(true) => Ok(token),
            Ok(false) => self.fail(Violation::Pattern {
                pattern: String::from(pattern),
                token,
            }),
            Err(e) => self.fail(e),
        }
    }

    #[cold]
    fn fail<T>(&self, violation: Violation) -> ScanResult<T> {
        debug!(
            position = %self.cursor.position(),
            kind = ?violation.kind(),
            "{violation}"
        );
        Err(violation)
    }
}
