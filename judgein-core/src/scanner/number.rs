use core::str::FromStr;

/// `-?[0-9]+(\.[0-9]+)?`
#[must_use]
pub(crate) fn is_decimal_literal(token: &[u8]) -> bool {
    let digits = |s: &[u8]| s.iter().take_while(|c| c.is_ascii_digit()).count();

    let rest = token.strip_prefix(b"-").unwrap_or(token);
    let whole = digits(rest);
    if whole == 0 {
        return false;
    }
    match &rest[whole..] {
        [] => true,
        [b'.', frac @ ..] => !frac.is_empty() && digits(frac) == frac.len(),
        _ => false,
    }
}

/// Base-10 integer of type `T`; `None` on a malformed token or overflow of `T`.
#[must_use]
pub(crate) fn parse_integer<T: FromStr>(token: &str) -> Option<T> {
    // `FromStr` for integers takes a leading `+`, the grammar does not.
    if token.starts_with('+') {
        return None;
    }
    token.parse().ok()
}

/// `None` on a malformed token or a literal too large to be finite.
#[must_use]
pub(crate) fn parse_float(token: &str) -> Option<f64> {
    if !is_decimal_literal(token.as_bytes()) {
        return None;
    }
    token.parse::<f64>().ok().filter(|value| value.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_decimal_literal() {
        for ok in ["0", "-0", "007", "3.25", "-5.5", "10.0"] {
            assert!(is_decimal_literal(ok.as_bytes()), "{ok}");
        }
        for bad in ["", "-", ".", ".5", "5.", "-.5", "1.2.3", "1-2", "--1", "+1"] {
            assert!(!is_decimal_literal(bad.as_bytes()), "{bad}");
        }
    }

    #[test]
    fn test_parse_integer() {
        assert_eq!(parse_integer::<i32>("123"), Some(123));
        assert_eq!(parse_integer::<i32>("-0"), Some(0));
        assert_eq!(parse_integer::<i32>("2147483648"), None);
        assert_eq!(parse_integer::<i64>("2147483648"), Some(2_147_483_648));
        assert_eq!(parse_integer::<i64>("9223372036854775808"), None);
        assert_eq!(parse_integer::<i32>("-"), None);
        assert_eq!(parse_integer::<i32>("1-2"), None);
        assert_eq!(parse_integer::<i32>("+5"), None);
        assert_eq!(parse_integer::<i32>(""), None);
    }

    #[test]
    fn test_parse_float() {
        assert_eq!(parse_float("3.25"), Some(3.25));
        assert_eq!(parse_float("-5.5"), Some(-5.5));
        assert_eq!(parse_float("12"), Some(12.0));
        assert_eq!(parse_float(".5"), None);
        assert_eq!(parse_float(&"9".repeat(400)), None);
    }

    proptest! {
        #[test]
        fn integers_survive_formatting(value in any::<i64>()) {
            prop_assert_eq!(parse_integer::<i64>(&value.to_string()), Some(value));
        }

        #[test]
        fn fixed_point_floats_are_literals(whole in 0u32..1_000_000, frac in 0u32..1000, neg in any::<bool>()) {
            let sign = if neg { "-" } else { "" };
            let text = format!("{sign}{whole}.{frac:03}");
            prop_assert!(is_decimal_literal(text.as_bytes()));
            let expected: f64 = text.parse().unwrap();
            prop_assert_eq!(parse_float(&text), Some(expected));
        }
    }
}
