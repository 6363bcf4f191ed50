use std::num::ParseIntError;
use std::str::FromStr;

use crate::error::{ParseError, Result};

/// Base-10 digits only. The width check comes from `T` itself.
pub(crate) fn parse_unsigned<T>(raw: &str) -> Result<T>
where
    T: FromStr<Err = ParseIntError>,
{
    if raw.starts_with('+') {
        return Err(ParseError::SignedUnsigned);
    }
    Ok(raw.parse()?)
}

pub(crate) fn parse_signed<T>(raw: &str) -> Result<T>
where
    T: FromStr<Err = ParseIntError>,
{
    Ok(raw.parse()?)
}
