use std::time::Duration;

use crate::error::{ParseError, Result};

/// Totals are held in nanoseconds and may not exceed `i64::MAX`.
const MAX_NANOS: u64 = i64::MAX as u64;
const OVERFLOW_BOUND: u64 = 1 << 63;

fn unit_nanos(unit: &str) -> Option<u64> {
    Some(match unit {
        "ns" => 1,
        "us" | "µs" | "μs" => 1_000,
        "ms" => 1_000_000,
        "s" => 1_000_000_000,
        "m" => 60 * 1_000_000_000,
        "h" => 60 * 60 * 1_000_000_000,
        _ => return None,
    })
}

/// Parses a signed sequence of `<number><unit>` groups such as `10s`,
/// `1h30m` or `1.5ms`. A bare `0` needs no unit. Negative totals other than
/// zero cannot be represented and are rejected.
pub(crate) fn parse_duration(raw: &str) -> Result<Duration> {
    let (negative, mut s) = match raw.as_bytes().first() {
        Some(b'-') => (true, &raw[1..]),
        Some(b'+') => (false, &raw[1..]),
        _ => (false, raw),
    };

    if s == "0" {
        return Ok(Duration::ZERO);
    }
    if s.is_empty() {
        return Err(ParseError::InvalidDuration("missing value"));
    }

    let mut total: u64 = 0;
    while !s.is_empty() {
        if !s.starts_with(|c: char| c == '.' || c.is_ascii_digit()) {
            return Err(ParseError::InvalidDuration("expected a number"));
        }

        let (whole, rest) =
            leading_int(s).ok_or(ParseError::InvalidDuration("number too large"))?;
        let has_whole = rest.len() != s.len();
        s = rest;

        let (mut fraction, mut scale, mut has_fraction) = (0, 1.0, false);
        if let Some(after_dot) = s.strip_prefix('.') {
            let (digits, digits_scale, rest) = leading_fraction(after_dot);
            fraction = digits;
            scale = digits_scale;
            has_fraction = rest.len() != after_dot.len();
            s = rest;
        }
        if !has_whole && !has_fraction {
            return Err(ParseError::InvalidDuration("expected a number"));
        }

        let unit_len = s
            .find(|c: char| c == '.' || c.is_ascii_digit())
            .unwrap_or(s.len());
        if unit_len == 0 {
            return Err(ParseError::InvalidDuration("missing unit"));
        }
        let (unit, rest) = s.split_at(unit_len);
        s = rest;
        let unit = unit_nanos(unit).ok_or(ParseError::InvalidDuration("unknown unit"))?;

        if whole > OVERFLOW_BOUND / unit {
            return Err(ParseError::InvalidDuration("overflow"));
        }
        let mut value = whole * unit;
        if fraction > 0 {
            value += (fraction as f64 * (unit as f64 / scale)) as u64;
            if value > OVERFLOW_BOUND {
                return Err(ParseError::InvalidDuration("overflow"));
            }
        }
        total = total
            .checked_add(value)
            .filter(|sum| *sum <= OVERFLOW_BOUND)
            .ok_or(ParseError::InvalidDuration("overflow"))?;
    }

    if negative {
        return if total == 0 {
            Ok(Duration::ZERO)
        } else {
            Err(ParseError::InvalidDuration("negative duration"))
        };
    }
    if total > MAX_NANOS {
        return Err(ParseError::InvalidDuration("overflow"));
    }
    Ok(Duration::from_nanos(total))
}

/// Leading decimal digits of `s`, or `None` once the value passes `2^63`.
fn leading_int(s: &str) -> Option<(u64, &str)> {
    let end = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
    let mut value: u64 = 0;
    for digit in s[..end].bytes() {
        if value > OVERFLOW_BOUND / 10 {
            return None;
        }
        value = value * 10 + u64::from(digit - b'0');
        if value > OVERFLOW_BOUND {
            return None;
        }
    }
    Some((value, &s[end..]))
}

/// Digits after the decimal point as `(value, 10^digits_kept, rest)`.
/// Digits past the point of overflow are consumed but dropped.
fn leading_fraction(s: &str) -> (u64, f64, &str) {
    let end = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
    let mut value: u64 = 0;
    let mut scale = 1.0;
    let mut overflow = false;
    for digit in s[..end].bytes() {
        if overflow {
            continue;
        }
        if value > MAX_NANOS / 10 {
            overflow = true;
            continue;
        }
        let next = value * 10 + u64::from(digit - b'0');
        if next > OVERFLOW_BOUND {
            overflow = true;
            continue;
        }
        value = next;
        scale *= 10.0;
    }
    (value, scale, &s[end..])
}
