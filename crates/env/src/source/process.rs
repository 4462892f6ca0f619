use std::env;
use std::ffi::OsString;

use super::EnvSource;
use crate::error::SourceError;

/// Zero-sized type that reads the real process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    #[inline]
    fn lookup(&self, name: &str) -> Result<Option<OsString>, SourceError> {
        // Names the platform cannot store can never be set.
        if name.is_empty() || name.contains(['=', '\0']) {
            return Ok(None);
        }
        Ok(env::var_os(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_process_env_delegation() {
        temp_env::with_vars([("_GENERIC_ENV_PROCESS_TEST", Some("value"))], || {
            let found = ProcessEnv.lookup("_GENERIC_ENV_PROCESS_TEST").unwrap();
            assert_eq!(found, Some(OsString::from("value")));
        });
    }

    #[test]
    #[serial]
    fn test_process_env_empty_value_is_present() {
        temp_env::with_vars([("_GENERIC_ENV_PROCESS_EMPTY", Some(""))], || {
            let found = ProcessEnv.lookup("_GENERIC_ENV_PROCESS_EMPTY").unwrap();
            assert_eq!(found, Some(OsString::new()));
        });
    }

    #[test]
    fn test_process_env_unset_is_absent() {
        assert_eq!(
            ProcessEnv.lookup("_GENERIC_ENV_NONEXISTENT_12345").unwrap(),
            None
        );
    }

    #[test]
    fn test_unrepresentable_names_are_absent() {
        for name in ["", "A=B", "NUL\0NAME", "="] {
            assert_eq!(ProcessEnv.lookup(name).unwrap(), None, "{name:?}");
        }
    }
}
