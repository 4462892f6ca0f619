//! Error types for environment variable access.
//!
//! Responsibilities:
//! - Define the error taxonomy surfaced by the strict accessor.
//! - Define the lower-level conversion and source errors it is built from.
//! - Classify every error into a payload-free [`ErrorKind`].
//!
//! Does NOT handle:
//! - Absorbing errors into defaults (see `environment.rs`).
//! - Parsing values (see `value.rs`).
//!
//! Invariants:
//! - Every variant except `NullArgument` names the variable it concerns.
//! - No variant carries the raw variable value, only its name and the
//!   parser's description of what went wrong.

use thiserror::Error;

/// Errors returned by [`Environment::get_or_throw`](crate::Environment::get_or_throw).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EnvError {
    /// The variable name itself was not supplied.
    #[error("environment variable name must not be null")]
    NullArgument,

    /// The name was supplied but no variable exists under it.
    #[error("cannot find environment variable by name: \"{name}\"")]
    NotFound { name: String },

    /// The strict accessor does not convert to nullable targets.
    ///
    /// `target` names the underlying scalar type.
    #[error("cannot convert environment variable \"{name}\" to nullable {target}")]
    InvalidCast { name: String, target: &'static str },

    /// The raw text does not match the target type's grammar.
    #[error("cannot convert environment variable \"{name}\" to {target}: {message}")]
    ConversionFormat {
        name: String,
        target: &'static str,
        message: String,
    },

    /// The raw text is a number outside the target type's range.
    #[error("environment variable \"{name}\" is out of range for {target}: {message}")]
    ConversionOverflow {
        name: String,
        target: &'static str,
        message: String,
    },

    /// The environment source refused access to the variable.
    #[error("access to environment variable \"{name}\" was denied: {reason}")]
    SecurityFailure { name: String, reason: String },
}

/// Payload-free classification of an [`EnvError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    NullArgument,
    NotFound,
    InvalidCast,
    ConversionFormat,
    ConversionOverflow,
    SecurityFailure,
}

impl EnvError {
    /// Returns the kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            EnvError::NullArgument => ErrorKind::NullArgument,
            EnvError::NotFound { .. } => ErrorKind::NotFound,
            EnvError::InvalidCast { .. } => ErrorKind::InvalidCast,
            EnvError::ConversionFormat { .. } => ErrorKind::ConversionFormat,
            EnvError::ConversionOverflow { .. } => ErrorKind::ConversionOverflow,
            EnvError::SecurityFailure { .. } => ErrorKind::SecurityFailure,
        }
    }

    /// Name of the variable this error concerns, if one was supplied.
    pub fn name(&self) -> Option<&str> {
        match self {
            EnvError::NullArgument => None,
            EnvError::NotFound { name }
            | EnvError::InvalidCast { name, .. }
            | EnvError::ConversionFormat { name, .. }
            | EnvError::ConversionOverflow { name, .. }
            | EnvError::SecurityFailure { name, .. } => Some(name),
        }
    }

    pub(crate) fn from_conversion(name: &str, target: &'static str, err: ConversionError) -> Self {
        match err {
            ConversionError::Format(message) => EnvError::ConversionFormat {
                name: name.to_string(),
                target,
                message,
            },
            ConversionError::Overflow(message) => EnvError::ConversionOverflow {
                name: name.to_string(),
                target,
                message,
            },
        }
    }

    pub(crate) fn from_source(name: &str, err: SourceError) -> Self {
        match err {
            SourceError::Denied(reason) => EnvError::SecurityFailure {
                name: name.to_string(),
                reason,
            },
        }
    }
}

impl ErrorKind {
    /// Stable lowercase identifier, used in logs and machine-readable output.
    pub const fn as_str(self) -> &'static str {
        match self {
            ErrorKind::NullArgument => "null_argument",
            ErrorKind::NotFound => "not_found",
            ErrorKind::InvalidCast => "invalid_cast",
            ErrorKind::ConversionFormat => "conversion_format",
            ErrorKind::ConversionOverflow => "conversion_overflow",
            ErrorKind::SecurityFailure => "security_failure",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Failure to parse raw text as a target type.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConversionError {
    #[error("{0}")]
    Format(String),

    #[error("{0}")]
    Overflow(String),
}

/// Failure reported by an [`EnvSource`](crate::EnvSource) lookup.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SourceError {
    #[error("{0}")]
    Denied(String),
}
