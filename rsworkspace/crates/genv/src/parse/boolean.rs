use crate::error::{ParseError, Result};

/// Accepts `1 t T TRUE true True` and `0 f F FALSE false False`, nothing else.
pub(crate) fn parse_bool(raw: &str) -> Result<bool> {
    match raw {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Ok(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Ok(false),
        _ => Err(ParseError::InvalidBool),
    }
}
