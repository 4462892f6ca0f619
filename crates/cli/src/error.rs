//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes that scripts can use to distinguish error types.
//! - Map `EnvError` kinds to exit codes.
//!
//! Does NOT handle:
//! - Error message formatting (handled by anyhow Display).
//!
//! Invariants:
//! - Each `ErrorKind` has its own exit code in 2-7.
//! - Exit code 1 covers everything else, including a failed `--mode try` read.

use generic_env::{EnvError, ErrorKind};

/// Structured exit codes for envget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success - the variable was read (or defaulted, in default mode).
    Success = 0,

    /// General error - bad `.env`, output failure, or an unavailable value in try mode.
    GeneralError = 1,

    /// No variable name was given.
    NullArgument = 2,

    /// The variable is not set.
    NotFound = 3,

    /// A nullable type was requested in strict mode.
    InvalidCast = 4,

    /// The value does not match the type's grammar.
    ConversionFormat = 5,

    /// The value is a number outside the type's range.
    ConversionOverflow = 6,

    /// The environment refused access to the variable.
    SecurityFailure = 7,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

impl From<ErrorKind> for ExitCode {
    fn from(kind: ErrorKind) -> Self {
        match kind {
            ErrorKind::NullArgument => ExitCode::NullArgument,
            ErrorKind::NotFound => ExitCode::NotFound,
            ErrorKind::InvalidCast => ExitCode::InvalidCast,
            ErrorKind::ConversionFormat => ExitCode::ConversionFormat,
            ErrorKind::ConversionOverflow => ExitCode::ConversionOverflow,
            ErrorKind::SecurityFailure => ExitCode::SecurityFailure,
        }
    }
}

impl From<&EnvError> for ExitCode {
    fn from(err: &EnvError) -> Self {
        Self::from(err.kind())
    }
}

/// Extension trait for anyhow::Error to extract exit codes.
pub trait ExitCodeExt {
    /// Returns ExitCode::GeneralError if no EnvError is in the chain.
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        self.chain()
            .find_map(|cause| cause.downcast_ref::<EnvError>())
            .map(ExitCode::from)
            .unwrap_or(ExitCode::GeneralError)
    }
}
