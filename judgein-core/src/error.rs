use std::io;
use std::str::Utf8Error;

/// A specialized `Result` type where the error is hard-wired to [`Violation`].
///
/// [`Violation`]: enum.Violation.html
pub type ScanResult<T> = Result<T, Violation>;

/// What a whitespace-position check wanted to see.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Expected {
    Space,
    Newline,
    EndOfStream,
    /// Any character at all (single-character readers).
    Character,
}

impl core::fmt::Display for Expected {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Expected::Space => f.write_str("a space"),
            Expected::Newline => f.write_str("a newline"),
            Expected::EndOfStream => f.write_str("end of stream"),
            Expected::Character => f.write_str("a character"),
        }
    }
}

/// Coarse classification of a [`Violation`].
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum ViolationKind {
    /// Not a failure on its own, the stream simply has no more bytes.
    EndOfStream,
    /// The token has the wrong shape.
    Presentation,
    /// The token is well formed but breaks a constraint.
    Requirement,
    /// The scanner itself could not do its job (I/O, bad pattern).
    Internal,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Violation {
    #[error("unexpected end of stream")]
    EndOfStream,

    #[error("malformed integer token {token:?}")]
    IntegerParsing { token: String },
    #[error("malformed floating-point token {token:?}")]
    FloatParsing { token: String },
    #[error("expected {expected}, found {}", describe_found(.found))]
    Whitespace {
        expected: Expected,
        /// `None` when the stream ended instead.
        found: Option<u8>,
    },
    /// Token bytes are not valid UTF-8.
    #[error("token is not valid UTF-8: {0}")]
    NonDecodable(Utf8Error),

    #[error("integer {value} outside of [{min}, {max}]")]
    IntegerRange { value: i64, min: i64, max: i64 },
    #[error("floating-point value {value} outside of [{min}, {max}]")]
    FloatRange { value: f64, min: f64, max: f64 },
    #[error("token {token:?} does not match /{pattern}/")]
    Pattern { pattern: String, token: String },

    #[error("I/O error: {0}")]
    Io(String),
    #[error("invalid pattern /{pattern}/: {reason}")]
    InvalidPattern { pattern: String, reason: String },
}

fn describe_found(found: &Option<u8>) -> String {
    match found {
        None => String::from("end of stream"),
        Some(byte) => format!("{:?}", char::from(*byte)),
    }
}

impl Violation {
    #[must_use]
    pub fn kind(&self) -> ViolationKind {
        match self {
            Violation::EndOfStream => ViolationKind::EndOfStream,
            Violation::IntegerParsing { .. }
            | Violation::FloatParsing { .. }
            | Violation::Whitespace { .. }
            | Violation::NonDecodable(_) => ViolationKind::Presentation,
            Violation::IntegerRange { .. }
            | Violation::FloatRange { .. }
            | Violation::Pattern { .. } => ViolationKind::Requirement,
            Violation::Io(_) | Violation::InvalidPattern { .. } => ViolationKind::Internal,
        }
    }

    #[must_use]
    pub fn is_end_of_stream(&self) -> bool {
        matches!(self, Violation::EndOfStream)
    }

    pub(crate) fn whitespace(expected: Expected, found: Option<u8>) -> Self {
        Violation::Whitespace { expected, found }
    }
}

impl From<io::Error> for Violation {
    /// Creates a new `Violation::Io` from the given error
    #[cfg_attr(not(feature = "no-inline"), inline)]
    fn from(error: io::Error) -> Violation {
        Violation::Io(error.to_string())
    }
}

impl From<Utf8Error> for Violation {
    /// Creates a new `Violation::NonDecodable` from the given error
    #[cfg_attr(not(feature = "no-inline"), inline)]
    fn from(error: Utf8Error) -> Violation {
        Violation::NonDecodable(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kinds() {
        assert_eq!(Violation::EndOfStream.kind(), ViolationKind::EndOfStream);
        let int = Violation::IntegerParsing {
            token: String::from("abc"),
        };
        assert_eq!(int.kind(), ViolationKind::Presentation);
        let range = Violation::IntegerRange {
            value: 2000,
            min: 0,
            max: 1000,
        };
        assert_eq!(range.kind(), ViolationKind::Requirement);
        let ws = Violation::whitespace(Expected::Newline, Some(b'x'));
        assert_eq!(ws.kind(), ViolationKind::Presentation);
        let io = Violation::from(io::Error::new(io::ErrorKind::Other, "boom"));
        assert_eq!(io.kind(), ViolationKind::Internal);
    }

    #[test]
    fn test_display() {
        let range = Violation::IntegerRange {
            value: 2000,
            min: 0,
            max: 1000,
        };
        assert_eq!(range.to_string(), "integer 2000 outside of [0, 1000]");
        let ws = Violation::whitespace(Expected::EndOfStream, Some(b'e'));
        assert_eq!(ws.to_string(), "expected end of stream, found 'e'");
    }
}
