use num_complex::Complex;

use super::float::{Float, float_prefix_len, parse_float};
use crate::error::{ParseError, Result};

/// Parses `a`, `bi`, `a+bi` or `a-bi`, optionally wrapped in one pair of
/// parentheses. Each component follows the float rule for `T`, so a
/// component that overflows the width fails the whole literal.
pub(crate) fn parse_complex<T: Float>(raw: &str) -> Result<Complex<T>> {
    let mut s = raw
        .strip_prefix('(')
        .and_then(|inner| inner.strip_suffix(')'))
        .unwrap_or(raw);

    let (first, rest) = split_component::<T>(s)?;
    s = rest;
    if s.is_empty() {
        return Ok(Complex::new(first, T::default()));
    }

    match s.as_bytes()[0] {
        b'i' if s.len() == 1 => return Ok(Complex::new(T::default(), first)),
        b'+' if !s[1..].starts_with('+') => s = &s[1..],
        b'+' | b'-' => {}
        _ => return Err(ParseError::InvalidComplex),
    }

    let (imaginary, rest) = split_component::<T>(s)?;
    if rest != "i" {
        return Err(ParseError::InvalidComplex);
    }
    Ok(Complex::new(first, imaginary))
}

fn split_component<T: Float>(s: &str) -> Result<(T, &str)> {
    let len = float_prefix_len(s).ok_or(ParseError::InvalidComplex)?;
    let (number, rest) = s.split_at(len);
    let value = parse_float::<T>(number).map_err(|err| match err {
        ParseError::FloatOutOfRange => err,
        _ => ParseError::InvalidComplex,
    })?;
    Ok((value, rest))
}
