//! One parser per supported type. Each takes a non-empty raw value and
//! either converts it or reports why it could not.

mod boolean;
mod complex;
mod duration;
mod float;
mod int;
mod timestamp;

pub(crate) use boolean::parse_bool;
pub(crate) use complex::parse_complex;
pub(crate) use duration::parse_duration;
pub(crate) use float::parse_float;
pub(crate) use int::{parse_signed, parse_unsigned};
pub(crate) use timestamp::parse_timestamp;
