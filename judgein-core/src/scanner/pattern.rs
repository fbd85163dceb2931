use hashbrown::hash_map::EntryRef;
use hashbrown::HashMap;
use regex::bytes::{Regex, RegexBuilder};

use crate::{ScanResult, Violation};

/// A regular expression that must match a whole token, not just part of it.
pub(crate) struct Pattern {
    regex: Regex,
}

impl Pattern {
    /// With `unicode` off, `.` and negated classes match any single byte.
    pub(crate) fn new(source: &str, unicode: bool) -> ScanResult<Pattern> {
        let anchored = format!(r"\A(?:{source})\z");
        match RegexBuilder::new(&anchored).unicode(unicode).build() {
            Ok(regex) => Ok(Pattern { regex }),
            Err(e) => Err(Violation::InvalidPattern {
                pattern: String::from(source),
                reason: e.to_string(),
            }),
        }
    }

    #[must_use]
    pub(crate) fn is_full_match(&self, token: &[u8]) -> bool {
        self.regex.is_match(token)
    }
}

/// Patterns arrive as plain strings on every call, so each is compiled once per scanner.
pub(crate) struct PatternCache {
    compiled: HashMap<Box<str>, Pattern>,
    unicode: bool,
}

impl PatternCache {
    /// For words and lines, matched as UTF-8 text.
    pub(crate) fn text() -> Self {
        PatternCache {
            compiled: HashMap::new(),
            unicode: true,
        }
    }

    /// For single characters, which are raw bytes.
    pub(crate) fn bytes() -> Self {
        PatternCache {
            compiled: HashMap::new(),
            unicode: false,
        }
    }

    pub(crate) fn get(&mut self, source: &str) -> ScanResult<&Pattern> {
        let unicode = self.unicode;
        match self.compiled.entry_ref(source) {
            EntryRef::Occupied(entry) => Ok(entry.into_mut()),
            EntryRef::Vacant(entry) => Ok(entry.insert(Pattern::new(source, unicode)?)),
        }
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.compiled.len()
    }
}
