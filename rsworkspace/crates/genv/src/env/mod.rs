//! Where raw values come from.
//!
//! Lookups never call `std::env` directly; they go through [`ReadEnv`] so
//! the same conversion code runs against the process environment in
//! production and against an [`InMemoryEnv`] in tests.
//!
//! ```
//! use genv::env::{ReadEnv, SystemEnv};
//!
//! fn listen_port<E: ReadEnv>(env: &E) -> u16 {
//!     genv::get_with_default_from(env, "LISTEN_PORT", 8080)
//! }
//!
//! let port = listen_port(&SystemEnv);
//! ```
//!
//! ```ignore
//! use genv::env::InMemoryEnv;
//!
//! let env = InMemoryEnv::new();
//! env.set("LISTEN_PORT", "9090"); // &self — no `mut` needed
//!
//! assert_eq!(listen_port(&env), 9090);
//! ```

mod in_memory;
mod read_env;
mod system;

#[cfg(any(test, feature = "test-support"))]
pub use in_memory::InMemoryEnv;
pub use read_env::{ReadEnv, read_raw};
pub use system::SystemEnv;
