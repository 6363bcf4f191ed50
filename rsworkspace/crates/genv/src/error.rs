//! Why a present value could not be converted.
//!
//! These never reach callers of the lookup functions; the dispatcher turns
//! every one of them into the zero value and only reports it through
//! `tracing`. Variants do not carry the raw input, since environment values
//! are often credentials.

use std::num::{ParseFloatError, ParseIntError};

use thiserror::Error;

pub(crate) type Result<T> = std::result::Result<T, ParseError>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("not a boolean literal")]
    InvalidBool,

    #[error("invalid integer: {0}")]
    InvalidInt(#[from] ParseIntError),

    #[error("unsigned integer must not carry a sign")]
    SignedUnsigned,

    #[error("invalid float: {0}")]
    InvalidFloat(#[from] ParseFloatError),

    #[error("float literal out of range")]
    FloatOutOfRange,

    #[error("NaN must not carry a sign")]
    SignedNan,

    #[error("invalid complex number")]
    InvalidComplex,

    #[error("invalid duration: {0}")]
    InvalidDuration(&'static str),

    #[error("invalid timestamp: {0}")]
    InvalidTimestamp(#[from] chrono::ParseError),

    #[error("timestamp zone must be GMT")]
    UnsupportedZone,

    #[error("timestamp does not match the HTTP-date layout")]
    MalformedTimestamp,
}
