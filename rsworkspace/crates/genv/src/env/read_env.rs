use std::env;

/// Source of raw environment values.
///
/// # Thread Safety
///
/// Does **not** require `Send + Sync`. Add the bounds at your call site:
///
/// ```ignore
/// fn spawn_work<E: ReadEnv + Send + Sync + 'static>(env: Arc<E>) { … }
/// ```
pub trait ReadEnv {
    fn var(&self, key: &str) -> Result<String, env::VarError>;
}

impl<E: ReadEnv + ?Sized> ReadEnv for &E {
    #[inline]
    fn var(&self, key: &str) -> Result<String, env::VarError> {
        (**self).var(key)
    }
}

/// Raw text for `key`, or `""` when the variable is unset or not valid
/// Unicode. Callers cannot tell an unset variable from an empty one.
pub fn read_raw<E: ReadEnv + ?Sized>(env: &E, key: &str) -> String {
    env.var(key).unwrap_or_default()
}
