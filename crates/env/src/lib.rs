//! Typed access to process environment variables.
//!
//! A variable's text is converted to a caller-chosen scalar type under one
//! of three failure policies:
//!
//! | Operation | Returns | On failure |
//! |-----------|---------|------------|
//! | [`get_or_throw`] | `Result<T, EnvError>` | distinct [`EnvError`] per cause |
//! | [`try_get`] | `(bool, T)` | `(false, T::default())` |
//! | [`get_or_default`] | `T` | `T::default()` |
//!
//! Nullable targets (`Option<T>`) are rejected by [`get_or_throw`] with
//! [`EnvError::InvalidCast`] and accepted by the other two.
//!
//! ```no_run
//! let port: u16 = generic_env::get_or_throw("PORT")?;
//! let (found, debug) = generic_env::try_get::<bool>("DEBUG");
//! let workers: Option<usize> = generic_env::get_or_default("WORKERS");
//! # Ok::<(), generic_env::EnvError>(())
//! ```
//!
//! The free functions read the process environment. Use [`Environment`] with
//! a [`MemoryEnv`] (or your own [`EnvSource`]) to read from somewhere else.

mod environment;
pub mod error;
pub mod source;
pub mod value;

pub use environment::Environment;
pub use error::{ConversionError, EnvError, ErrorKind, SourceError};
pub use source::{EnvSource, LayeredEnv, MemoryEnv, ProcessEnv};
pub use value::{EnvScalar, EnvValue};

/// [`Environment::get_or_throw`] over the process environment.
pub fn get_or_throw<'a, T: EnvValue>(name: impl Into<Option<&'a str>>) -> Result<T, EnvError> {
    Environment::system().get_or_throw(name)
}

/// [`Environment::try_get`] over the process environment.
pub fn try_get<'a, T: EnvValue + Default>(name: impl Into<Option<&'a str>>) -> (bool, T) {
    Environment::system().try_get(name)
}

/// [`Environment::get_or_default`] over the process environment.
pub fn get_or_default<'a, T: EnvValue + Default>(name: impl Into<Option<&'a str>>) -> T {
    Environment::system().get_or_default(name)
}
