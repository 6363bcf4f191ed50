use std::env;

use super::ReadEnv;

/// Zero-sized type — delegates to `std::env`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemEnv;

impl ReadEnv for SystemEnv {
    #[inline]
    fn var(&self, key: &str) -> Result<String, env::VarError> {
        env::var(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_env_delegation() {
        let system_env = SystemEnv;
        let std_result = std::env::var("PATH");
        let provider_result = system_env.var("PATH");
        assert_eq!(std_result.is_ok(), provider_result.is_ok());
    }

    #[test]
    fn test_missing_variable_is_not_present() {
        assert!(matches!(
            SystemEnv.var("GENV_SYSTEM_ENV_SURELY_UNSET_4711"),
            Err(env::VarError::NotPresent)
        ));
    }

    #[test]
    fn test_system_env_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SystemEnv>();
    }
}
