pub(crate) const CARRIAGE_RETURN: u8 = b'\r';

/// Same set as C `isspace` in the default locale.
#[inline]
#[must_use]
pub(crate) fn is_space(c: u8) -> bool {
    matches!(c, b' ' | b'\t' | b'\n' | 0x0B | 0x0C | b'\r')
}

#[inline]
#[must_use]
pub(crate) fn is_break(c: u8) -> bool {
    c == b'\n'
}

#[inline]
#[must_use]
pub(crate) fn is_integer_char(c: u8) -> bool {
    c.is_ascii_digit() || c == b'-'
}

#[inline]
#[must_use]
pub(crate) fn is_float_char(c: u8) -> bool {
    is_integer_char(c) || c == b'.'
}

#[inline]
#[must_use]
pub(crate) fn is_word_char(c: u8) -> bool {
    !is_space(c)
}

#[inline]
#[must_use]
pub(crate) fn is_line_char(c: u8) -> bool {
    !is_break(c)
}
