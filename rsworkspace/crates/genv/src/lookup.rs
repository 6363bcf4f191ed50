use std::any::type_name;

use tracing::{debug, trace};

use crate::env::{ReadEnv, SystemEnv, read_raw};
use crate::value::EnvValue;

/// Reads `key` from the process environment as a `T`.
///
/// Returns the zero value of `T` when the variable is unset, empty, or
/// cannot be converted.
///
/// ```
/// let workers: u16 = genv::get("GENV_DOC_UNSET_WORKERS");
/// assert_eq!(workers, 0);
/// ```
pub fn get<T: EnvValue>(key: &str) -> T {
    get_from(&SystemEnv, key)
}

/// Reads `key` from the process environment as a `T`, returning `default`
/// when the variable is unset or empty.
///
/// `default` is returned as-is and is never parsed or checked. A value that
/// is present but cannot be converted yields the zero value of `T`, **not**
/// `default`.
///
/// ```
/// use std::time::Duration;
///
/// let timeout = genv::get_with_default("GENV_DOC_UNSET_TIMEOUT", Duration::from_secs(100));
/// assert_eq!(timeout, Duration::from_secs(100));
/// ```
pub fn get_with_default<T: EnvValue>(key: &str, default: T) -> T {
    get_with_default_from(&SystemEnv, key, default)
}

/// [`get`] against an injected environment.
pub fn get_from<E, T>(env: &E, key: &str) -> T
where
    E: ReadEnv + ?Sized,
    T: EnvValue,
{
    let raw = read_raw(env, key);
    resolve(key, &raw)
}

/// [`get_with_default`] against an injected environment.
pub fn get_with_default_from<E, T>(env: &E, key: &str, default: T) -> T
where
    E: ReadEnv + ?Sized,
    T: EnvValue,
{
    let raw = read_raw(env, key);
    if raw.is_empty() {
        trace!(key, "environment variable absent, using caller default");
        return default;
    }
    resolve(key, &raw)
}

fn resolve<T: EnvValue>(key: &str, raw: &str) -> T {
    if raw.is_empty() {
        trace!(key, "environment variable absent, using zero value");
        return T::default();
    }

    match T::from_env_str(raw) {
        Ok(value) => value,
        Err(err) => {
            debug!(
                key,
                target_type = type_name::<T>(),
                error = %err,
                "environment variable not convertible, using zero value"
            );
            T::default()
        }
    }
}
