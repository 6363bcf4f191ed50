use std::num::ParseFloatError;
use std::str::FromStr;

use crate::error::{ParseError, Result};

/// The two float widths, and the one property the parser needs from them.
pub(crate) trait Float: FromStr<Err = ParseFloatError> + Copy + Default {
    fn is_infinite(self) -> bool;
}

impl Float for f32 {
    #[inline]
    fn is_infinite(self) -> bool {
        f32::is_infinite(self)
    }
}

impl Float for f64 {
    #[inline]
    fn is_infinite(self) -> bool {
        f64::is_infinite(self)
    }
}

/// A finite literal that rounds to infinity at `T`'s width is an error;
/// an explicit `inf`/`infinity` literal is not. Only the infinities may be
/// signed; `+nan` and `-nan` are rejected.
pub(crate) fn parse_float<T: Float>(raw: &str) -> Result<T> {
    if is_signed_nan(raw) {
        return Err(ParseError::SignedNan);
    }
    let value: T = raw.parse()?;
    if value.is_infinite() && !names_infinity(raw) {
        return Err(ParseError::FloatOutOfRange);
    }
    Ok(value)
}

fn is_signed_nan(raw: &str) -> bool {
    raw.strip_prefix(['+', '-'])
        .is_some_and(|unsigned| unsigned.eq_ignore_ascii_case("nan"))
}

fn names_infinity(raw: &str) -> bool {
    let unsigned = raw.strip_prefix(['+', '-']).unwrap_or(raw);
    unsigned.eq_ignore_ascii_case("inf") || unsigned.eq_ignore_ascii_case("infinity")
}

/// Length of the longest prefix of `s` shaped like a float literal, or
/// `None` when there is no such prefix.
pub(crate) fn float_prefix_len(s: &str) -> Option<usize> {
    let bytes = s.as_bytes();
    let mut i = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        i += 1;
    }

    for word in ["infinity", "inf", "nan"] {
        if word == "nan" && i > 0 {
            continue;
        }
        let end = i + word.len();
        if s.get(i..end).is_some_and(|w| w.eq_ignore_ascii_case(word)) {
            return Some(end);
        }
    }

    let digits_start = i;
    while bytes.get(i).is_some_and(u8::is_ascii_digit) {
        i += 1;
    }
    let mut saw_digits = i > digits_start;
    if bytes.get(i) == Some(&b'.') {
        i += 1;
        let fraction_start = i;
        while bytes.get(i).is_some_and(u8::is_ascii_digit) {
            i += 1;
        }
        saw_digits |= i > fraction_start;
    }
    if !saw_digits {
        return None;
    }

    if matches!(bytes.get(i), Some(b'e' | b'E')) {
        let mut j = i + 1;
        if matches!(bytes.get(j), Some(b'+' | b'-')) {
            j += 1;
        }
        let exponent_start = j;
        while bytes.get(j).is_some_and(u8::is_ascii_digit) {
            j += 1;
        }
        if j > exponent_start {
            i = j;
        }
    }
    Some(i)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_decimal_forms() {
        assert_eq!(parse_float::<f64>("1.0"), Ok(1.0));
        assert_eq!(parse_float::<f64>("-2.5e3"), Ok(-2500.0));
        assert_eq!(parse_float::<f64>(".5"), Ok(0.5));
        assert_eq!(parse_float::<f32>("3"), Ok(3.0));
    }

    #[test]
    fn explicit_infinity_is_accepted() {
        assert_eq!(parse_float::<f64>("inf"), Ok(f64::INFINITY));
        assert_eq!(parse_float::<f32>("-Infinity"), Ok(f32::NEG_INFINITY));
        assert!(parse_float::<f64>("NaN").unwrap().is_nan());
    }

    #[test]
    fn signed_nan_is_rejected() {
        for raw in ["+nan", "-NaN", "+NAN"] {
            assert_eq!(parse_float::<f32>(raw), Err(ParseError::SignedNan), "{raw}");
            assert_eq!(parse_float::<f64>(raw), Err(ParseError::SignedNan), "{raw}");
        }
        assert_eq!(float_prefix_len("+NaNi"), None);
        assert_eq!(float_prefix_len("-nan"), None);
    }

    #[test]
    fn overflow_depends_on_width() {
        assert_eq!(parse_float::<f32>("1e39"), Err(ParseError::FloatOutOfRange));
        assert_eq!(parse_float::<f64>("1e39"), Ok(1e39));
        assert_eq!(parse_float::<f64>("1e309"), Err(ParseError::FloatOutOfRange));
    }

    #[test]
    fn rejects_non_numeric() {
        assert!(matches!(
            parse_float::<f64>("not an int"),
            Err(ParseError::InvalidFloat(_))
        ));
        assert!(parse_float::<f64>("1.0.0").is_err());
        assert!(parse_float::<f64>("").is_err());
    }

    #[test]
    fn prefix_lengths() {
        assert_eq!(float_prefix_len("10+10i"), Some(2));
        assert_eq!(float_prefix_len("+10i"), Some(3));
        assert_eq!(float_prefix_len("1.5e-3i"), Some(6));
        assert_eq!(float_prefix_len("1ei"), Some(1));
        assert_eq!(float_prefix_len("-Infi"), Some(4));
        assert_eq!(float_prefix_len("NaN+1i"), Some(3));
        assert_eq!(float_prefix_len("i"), None);
        assert_eq!(float_prefix_len("."), None);
    }
}
