//! The environment accessor and its three failure policies.
//!
//! Responsibilities:
//! - Look a variable up once and convert the snapshot to the requested type.
//! - Surface every failure distinctly (`get_or_throw`), or absorb them into
//!   a flag (`try_get`) or a default (`get_or_default`).
//!
//! Does NOT handle:
//! - The grammar of each target type (see `value.rs`).
//! - Where values are stored (see `source/`).
//!
//! Invariants:
//! - Every call performs exactly one source lookup.
//! - The strict path rejects nullable targets; the safe paths accept them.
//! - The safe paths never return an error and never panic.

use std::ffi::OsString;

use crate::error::{ConversionError, EnvError};
use crate::source::{EnvSource, ProcessEnv};
use crate::value::EnvValue;

/// Typed reader over an [`EnvSource`].
#[derive(Debug, Clone, Default)]
pub struct Environment<S = ProcessEnv> {
    source: S,
}

impl Environment<ProcessEnv> {
    /// Accessor over the real process environment.
    pub const fn system() -> Self {
        Self { source: ProcessEnv }
    }
}

impl<S: EnvSource> Environment<S> {
    pub fn with_source(source: S) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn into_source(self) -> S {
        self.source
    }

    /// Read `name` and convert it to `T`, reporting every failure.
    ///
    /// # Errors
    ///
    /// - [`EnvError::NullArgument`] if `name` is `None`.
    /// - [`EnvError::NotFound`] if the variable is not set.
    /// - [`EnvError::SecurityFailure`] if the source denied access.
    /// - [`EnvError::InvalidCast`] if `T` is an `Option`, even for well-formed values.
    /// - [`EnvError::ConversionFormat`] if the text does not match `T`'s grammar.
    /// - [`EnvError::ConversionOverflow`] if the number is out of `T`'s range.
    pub fn get_or_throw<'a, T>(&self, name: impl Into<Option<&'a str>>) -> Result<T, EnvError>
    where
        T: EnvValue,
    {
        let name = name.into().ok_or(EnvError::NullArgument)?;
        let raw = self.read(name)?;
        if T::NULLABLE {
            return Err(EnvError::InvalidCast {
                name: name.to_string(),
                target: T::TYPE_NAME,
            });
        }
        convert(name, raw)
    }

    /// Read `name` and convert it to `T`, collapsing every failure to
    /// `(false, T::default())`.
    ///
    /// Unlike [`get_or_throw`](Self::get_or_throw), `Option<_>` targets are
    /// accepted: the value is parsed as the inner type and wrapped in `Some`.
    pub fn try_get<'a, T>(&self, name: impl Into<Option<&'a str>>) -> (bool, T)
    where
        T: EnvValue + Default,
    {
        match self.lookup_and_convert::<T>(name.into()) {
            Ok(value) => (true, value),
            Err(err) => {
                tracing::debug!(
                    name = err.name(),
                    target = T::TYPE_NAME,
                    kind = %err.kind(),
                    "environment variable unavailable, using default"
                );
                (false, T::default())
            }
        }
    }

    /// Read `name` and convert it to `T`, or return `T::default()` on any failure.
    ///
    /// For `Option<_>` targets the default is `None`.
    pub fn get_or_default<'a, T>(&self, name: impl Into<Option<&'a str>>) -> T
    where
        T: EnvValue + Default,
    {
        self.try_get(name).1
    }

    fn lookup_and_convert<T: EnvValue>(&self, name: Option<&str>) -> Result<T, EnvError> {
        let name = name.ok_or(EnvError::NullArgument)?;
        let raw = self.read(name)?;
        convert(name, raw)
    }

    fn read(&self, name: &str) -> Result<OsString, EnvError> {
        tracing::trace!(name, "reading environment variable");
        self.source
            .lookup(name)
            .map_err(|e| EnvError::from_source(name, e))?
            .ok_or_else(|| EnvError::NotFound {
                name: name.to_string(),
            })
    }
}

fn convert<T: EnvValue>(name: &str, raw: OsString) -> Result<T, EnvError> {
    let text = raw.into_string().map_err(|_| {
        EnvError::from_conversion(
            name,
            T::TYPE_NAME,
            ConversionError::Format("value is not valid unicode".to_string()),
        )
    })?;
    T::parse_env(&text).map_err(|e| EnvError::from_conversion(name, T::TYPE_NAME, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::source::MemoryEnv;

    fn fixture() -> Environment<MemoryEnv> {
        let env: MemoryEnv = [
            ("STR_VAR", "hello"),
            ("INT_VAR", "42"),
            ("BOOL_VAR", "True"),
            ("BIG_VAR", "99999999999"),
            ("EMPTY_VAR", ""),
        ]
        .into_iter()
        .collect();
        Environment::with_source(env)
    }

    fn kind<T: std::fmt::Debug>(result: Result<T, EnvError>) -> ErrorKind {
        result.expect_err("expected an error").kind()
    }

    #[test]
    fn test_get_or_throw_converts() {
        let env = fixture();
        assert_eq!(env.get_or_throw::<String>("STR_VAR").unwrap(), "hello");
        assert_eq!(env.get_or_throw::<i32>("INT_VAR").unwrap(), 42);
        assert!(env.get_or_throw::<bool>("BOOL_VAR").unwrap());
        assert_eq!(env.get_or_throw::<String>("EMPTY_VAR").unwrap(), "");
    }

    #[test]
    fn test_get_or_throw_null_name() {
        let env = fixture();
        assert_eq!(
            kind(env.get_or_throw::<bool>(None::<&str>)),
            ErrorKind::NullArgument
        );
    }

    #[test]
    fn test_get_or_throw_not_found() {
        let env = fixture();
        let err = env.get_or_throw::<bool>("NO_SUCH_VAR").unwrap_err();
        assert_eq!(
            err,
            EnvError::NotFound {
                name: "NO_SUCH_VAR".to_string()
            }
        );
    }

    #[test]
    fn test_get_or_throw_rejects_nullable_even_when_well_formed() {
        let env = fixture();
        let err = env.get_or_throw::<Option<bool>>("BOOL_VAR").unwrap_err();
        assert_eq!(
            err,
            EnvError::InvalidCast {
                name: "BOOL_VAR".to_string(),
                target: "bool",
            }
        );
    }

    #[test]
    fn test_get_or_throw_missing_nullable_is_not_found() {
        let env = fixture();
        assert_eq!(
            kind(env.get_or_throw::<Option<i32>>("NO_SUCH_VAR")),
            ErrorKind::NotFound
        );
    }

    #[test]
    fn test_get_or_throw_format_failures() {
        let env = fixture();
        assert_eq!(
            kind(env.get_or_throw::<bool>("STR_VAR")),
            ErrorKind::ConversionFormat
        );
        assert_eq!(
            kind(env.get_or_throw::<bool>("INT_VAR")),
            ErrorKind::ConversionFormat
        );
        assert_eq!(
            kind(env.get_or_throw::<i32>("STR_VAR")),
            ErrorKind::ConversionFormat
        );
        assert_eq!(
            kind(env.get_or_throw::<i32>("BOOL_VAR")),
            ErrorKind::ConversionFormat
        );
        assert_eq!(
            kind(env.get_or_throw::<i32>("EMPTY_VAR")),
            ErrorKind::ConversionFormat
        );
    }

    #[test]
    fn test_get_or_throw_overflow() {
        let env = fixture();
        assert_eq!(
            kind(env.get_or_throw::<i32>("BIG_VAR")),
            ErrorKind::ConversionOverflow
        );
        assert_eq!(env.get_or_throw::<i64>("BIG_VAR").unwrap(), 99_999_999_999);
    }

    #[test]
    fn test_get_or_throw_denied() {
        let env = fixture();
        env.source().deny("STR_VAR");
        assert_eq!(
            kind(env.get_or_throw::<String>("STR_VAR")),
            ErrorKind::SecurityFailure
        );
    }

    #[test]
    fn test_try_get_success_and_failures() {
        let env = fixture();
        assert_eq!(env.try_get::<i32>("INT_VAR"), (true, 42));
        assert_eq!(env.try_get::<i32>("NO_SUCH_VAR"), (false, 0));
        assert_eq!(env.try_get::<i32>(None::<&str>), (false, 0));
        assert_eq!(env.try_get::<i32>("STR_VAR"), (false, 0));
        assert_eq!(env.try_get::<i32>("BIG_VAR"), (false, 0));
        assert_eq!(env.try_get::<bool>("STR_VAR"), (false, false));
        assert_eq!(env.try_get::<String>(None::<&str>), (false, String::new()));
    }

    #[test]
    fn test_try_get_accepts_nullable() {
        let env = fixture();
        assert_eq!(env.try_get::<Option<bool>>("BOOL_VAR"), (true, Some(true)));
        assert_eq!(env.try_get::<Option<i32>>("NO_SUCH_VAR"), (false, None));
        assert_eq!(env.try_get::<Option<i32>>("STR_VAR"), (false, None));
    }

    #[test]
    fn test_try_get_denied() {
        let env = fixture();
        env.source().deny("INT_VAR");
        assert_eq!(env.try_get::<i32>("INT_VAR"), (false, 0));
    }

    #[test]
    fn test_get_or_default() {
        let env = fixture();
        assert_eq!(env.get_or_default::<i32>("INT_VAR"), 42);
        assert_eq!(env.get_or_default::<i32>("NO_SUCH_VAR"), 0);
        assert_eq!(env.get_or_default::<Option<i32>>("NO_SUCH_VAR"), None);
        assert_eq!(env.get_or_default::<Option<i32>>("INT_VAR"), Some(42));
        assert_eq!(env.get_or_default::<u8>("BIG_VAR"), 0);
        assert_eq!(env.get_or_default::<String>(None::<&str>), "");
    }

    #[test]
    fn test_every_call_sees_current_value() {
        let env = fixture();
        assert_eq!(env.get_or_default::<i32>("INT_VAR"), 42);
        env.source().set("INT_VAR", "7");
        assert_eq!(env.get_or_default::<i32>("INT_VAR"), 7);
        env.source().remove("INT_VAR");
        assert_eq!(env.try_get::<i32>("INT_VAR"), (false, 0));
    }

    #[cfg(unix)]
    #[test]
    fn test_non_unicode_value_is_format_failure() {
        use std::os::unix::ffi::OsStringExt;

        let env = Environment::with_source(MemoryEnv::new());
        env.source()
            .set("RAW_VAR", OsString::from_vec(vec![0x66, 0x6f, 0x80]));
        assert_eq!(
            kind(env.get_or_throw::<String>("RAW_VAR")),
            ErrorKind::ConversionFormat
        );
        assert_eq!(env.try_get::<String>("RAW_VAR"), (false, String::new()));
    }

    #[test]
    fn test_borrowed_source() {
        let vars: MemoryEnv = [("PORT", "8080")].into_iter().collect();
        let env = Environment::with_source(&vars);
        assert_eq!(env.get_or_throw::<u16>("PORT").unwrap(), 8080);
    }
}
