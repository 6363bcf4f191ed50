//! Typed environment variable lookups.
//!
//! Ask for a key and a type; get back a value of that type, always.
//!
//! | Call | Variable unset or empty | Variable not convertible |
//! |------|-------------------------|--------------------------|
//! | [`get::<T>`](get) | zero value of `T` | zero value of `T` |
//! | [`get_with_default::<T>`](get_with_default) | the given default | zero value of `T` |
//!
//! The supported types and their accepted text are listed on [`EnvValue`].
//!
//! # Quick Start
//!
//! ```
//! use std::time::Duration;
//!
//! let port: u16 = genv::get_with_default("GENV_DOC_PORT", 8080);
//! let verbose: bool = genv::get("GENV_DOC_VERBOSE");
//! let timeout = genv::get_with_default("GENV_DOC_TIMEOUT", Duration::from_secs(30));
//! # assert_eq!(port, 8080);
//! # assert!(!verbose);
//! # assert_eq!(timeout, Duration::from_secs(30));
//! ```
//!
//! # Testing
//!
//! The `_from` variants take any [`ReadEnv`], so code under test can be
//! handed an [`InMemoryEnv`]* instead of the process environment.
//!
//! *Available with `#[cfg(test)]` or the `"test-support"` feature.
//!
//! # Diagnostics
//!
//! Lookups never fail. A value that is present but not convertible is
//! reported as a `tracing` debug event carrying the key and target type,
//! never the value itself.

pub mod env;
mod error;
mod lookup;
mod parse;
mod value;

#[cfg(any(test, feature = "test-support"))]
pub use env::InMemoryEnv;
pub use env::{ReadEnv, SystemEnv};
pub use lookup::{get, get_from, get_with_default, get_with_default_from};
pub use value::EnvValue;

pub use chrono::{DateTime, Utc};
pub use num_complex::{Complex32, Complex64};
