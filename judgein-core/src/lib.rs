//! Strict scanning core for judge input validators.
//!
//! A [`Scanner`] wraps a byte [`Source`] behind a one-character look-ahead [`Cursor`] and
//! offers typed readers (integers, floats, words, characters, lines, exact whitespace and
//! end of stream). Each reader either returns its value or the first [`Violation`] found;
//! callers are expected to stop at that point.
//!
//! ```
//! use judgein_core::{ScanConfig, Scanner};
//!
//! let mut scanner = Scanner::new_from_str("3 1000000000000\n", ScanConfig::validator());
//! let n = scanner.read_int(1, 10).unwrap();
//! scanner.read_space().unwrap();
//! let big = scanner.read_long(0, 1_000_000_000_000).unwrap();
//! scanner.read_newline().unwrap();
//! scanner.read_eof().unwrap();
//! assert_eq!((n, big), (3, 1_000_000_000_000));
//! ```

pub use config::{Role, ScanConfig, WhitespaceMode};
pub use cursor::{Cursor, Position};
pub use error::{Expected, ScanResult, Violation, ViolationKind};
pub use scanner::Scanner;
pub use source::{ReadSource, SliceSource, Source};
pub use verdict::Verdict;

mod char_utils;
mod config;
mod cursor;
pub mod error;
mod scanner;
pub mod source;
mod verdict;
