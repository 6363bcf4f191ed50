//! The closed set of types a lookup can produce.
//!
//! [`EnvValue`] is sealed: the set below is the whole set, and each member
//! is bound to exactly one parser. The zero value of a type is its
//! [`Default`].

use std::time::Duration;

use chrono::{DateTime, Utc};
use num_complex::{Complex32, Complex64};

use crate::error::Result;
use crate::parse;

pub(crate) mod sealed {
    pub trait Sealed: Sized {
        fn from_env_str(raw: &str) -> crate::error::Result<Self>;
    }
}

/// A type that can be read from an environment variable.
///
/// | Type | Accepted text | Zero value |
/// |------|---------------|------------|
/// | `String` | anything | `""` |
/// | `bool` | `1 t T TRUE true True`, `0 f F FALSE false False` | `false` |
/// | `u8`, `u16`, `u32`, `u64`, `usize` | base-10 digits | `0` |
/// | `i8`, `i16`, `i32`, `i64`, `isize` | optional sign, base-10 digits | `0` |
/// | `f32`, `f64` | decimal float, `inf`, `nan` | `0.0` |
/// | [`Complex32`], [`Complex64`] | `a+bi`, `a-bi`, `a`, `bi`, optionally in parentheses | `0+0i` |
/// | [`Duration`] | `300ms`, `1h30m`, `1.5s`, … | [`Duration::ZERO`] |
/// | [`DateTime<Utc>`] | `Thu, 30 May 2024 20:06:14 GMT` | Unix epoch |
pub trait EnvValue: sealed::Sealed + Default {}

macro_rules! env_value {
    ($($ty:ty => $parse:expr;)*) => {
        $(
            impl sealed::Sealed for $ty {
                #[inline]
                fn from_env_str(raw: &str) -> Result<Self> {
                    $parse(raw)
                }
            }

            impl EnvValue for $ty {}
        )*
    };
}

env_value! {
    String => |raw: &str| Ok(raw.to_owned());
    bool => parse::parse_bool;
    usize => parse::parse_unsigned;
    u8 => parse::parse_unsigned;
    u16 => parse::parse_unsigned;
    u32 => parse::parse_unsigned;
    u64 => parse::parse_unsigned;
    isize => parse::parse_signed;
    i8 => parse::parse_signed;
    i16 => parse::parse_signed;
    i32 => parse::parse_signed;
    i64 => parse::parse_signed;
    f32 => parse::parse_float;
    f64 => parse::parse_float;
    Complex32 => parse::parse_complex;
    Complex64 => parse::parse_complex;
    Duration => parse::parse_duration;
    DateTime<Utc> => parse::parse_timestamp;
}
