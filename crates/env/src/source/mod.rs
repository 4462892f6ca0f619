//! Where variable values come from.
//!
//! Responsibilities:
//! - Define [`EnvSource`], the single read operation the accessor needs.
//! - Provide the process-environment source, an in-memory source, and a
//!   layered source that falls back from one to the other.
//!
//! Does NOT handle:
//! - Converting values (see `value.rs`).
//! - Writing to the process environment. Nothing here mutates it.
//!
//! Invariants:
//! - A lookup is one read; callers parse from the returned snapshot.
//! - Absent (`Ok(None)`) is distinct from present-but-empty (`Ok(Some(""))`).

mod layered;
mod memory;
mod process;

use std::ffi::OsString;

use crate::error::SourceError;

pub use layered::LayeredEnv;
pub use memory::MemoryEnv;
pub use process::ProcessEnv;

/// Read access to a store of environment variables.
///
/// # Thread Safety
///
/// Does **not** require `Send + Sync`. Add the bounds at your call site.
pub trait EnvSource {
    /// Look up `name` by exact match.
    ///
    /// Returns `Ok(None)` when the variable is not set and
    /// `Err(SourceError::Denied)` when the store refuses access.
    fn lookup(&self, name: &str) -> Result<Option<OsString>, SourceError>;
}

impl<S: EnvSource + ?Sized> EnvSource for &S {
    #[inline]
    fn lookup(&self, name: &str) -> Result<Option<OsString>, SourceError> {
        (**self).lookup(name)
    }
}
