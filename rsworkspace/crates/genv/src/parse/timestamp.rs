use chrono::{DateTime, NaiveDateTime, Timelike, Utc};

use crate::error::{ParseError, Result};

/// HTTP-date layout after the weekday and its `", "`, e.g.
/// `30 May 2024 20:06:14`.
const HTTP_DATE: &str = "%d %b %Y %H:%M:%S";

/// `Thu, 30 May 2024 20:06:14` is 25 bytes once the zone is removed.
const STAMP_LEN: usize = 25;
const DIGITS: [usize; 12] = [5, 6, 12, 13, 14, 15, 17, 18, 20, 21, 23, 24];
const WEEKDAYS: [&[u8]; 7] = [b"Mon", b"Tue", b"Wed", b"Thu", b"Fri", b"Sat", b"Sun"];

/// Parses `Thu, 30 May 2024 20:06:14 GMT`. `UTC` is taken as a spelling of
/// the same zone; any other zone is rejected rather than guessed at.
///
/// Every field is fixed width. The weekday must be a weekday name but is
/// not checked against the date.
pub(crate) fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>> {
    let stamp = raw
        .strip_suffix(" GMT")
        .or_else(|| raw.strip_suffix(" UTC"))
        .ok_or(ParseError::UnsupportedZone)?;
    if !has_http_date_shape(stamp.as_bytes()) {
        return Err(ParseError::MalformedTimestamp);
    }

    let naive = NaiveDateTime::parse_from_str(&stamp[5..], HTTP_DATE)?;
    if naive.nanosecond() >= 1_000_000_000 {
        return Err(ParseError::MalformedTimestamp);
    }
    Ok(naive.and_utc())
}

fn has_http_date_shape(b: &[u8]) -> bool {
    b.len() == STAMP_LEN
        && WEEKDAYS.iter().any(|day| b[..3].eq_ignore_ascii_case(day))
        && &b[3..5] == b", "
        && [7, 11, 16].iter().all(|&i| b[i] == b' ')
        && [19, 22].iter().all(|&i| b[i] == b':')
        && DIGITS.iter().all(|&i| b[i].is_ascii_digit())
}
