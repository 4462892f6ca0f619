//! `.env` loading into an in-memory layer.
//!
//! Responsibilities:
//! - Read `.env` from the working directory into a `MemoryEnv` that the
//!   accessor consults after the process environment.
//! - Honor the `DOTENV_DISABLED` gate.
//!
//! Does NOT handle:
//! - Writing to the process environment. File values are never exported, so
//!   they are invisible to clap `env = "..."` defaults and child processes.
//! - Searching parent directories.
//!
//! Invariants:
//! - A missing `.env` is not an error.
//! - Errors NEVER include raw .env line contents to prevent secret leakage.

use std::io::ErrorKind;
use std::path::Path;

use generic_env::MemoryEnv;
use thiserror::Error;

const DOTENV_FILE: &str = ".env";

#[derive(Error, Debug)]
pub enum DotenvError {
    /// SAFETY: only the byte index of the parse failure, never the line.
    #[error(
        "Failed to parse .env file at position {error_index}. Hint: set DOTENV_DISABLED=1 to skip .env loading"
    )]
    Parse { error_index: usize },

    #[error("Failed to read .env file: {kind}")]
    Io { kind: ErrorKind },

    #[error("Failed to load .env file. Hint: set DOTENV_DISABLED=1 to skip .env loading")]
    Unknown,
}

impl From<dotenvy::Error> for DotenvError {
    fn from(err: dotenvy::Error) -> Self {
        match err {
            dotenvy::Error::LineParse(_, idx) => DotenvError::Parse { error_index: idx },
            dotenvy::Error::Io(io_err) => DotenvError::Io {
                kind: io_err.kind(),
            },
            _ => DotenvError::Unknown,
        }
    }
}

/// Check if dotenv loading is disabled via environment variable.
fn dotenv_disabled() -> bool {
    matches!(
        generic_env::get_or_default::<String>("DOTENV_DISABLED").as_str(),
        "true" | "1"
    )
}

/// Load `./.env` unless disabled. Returns an empty layer when there is no file.
pub fn load_dotenv() -> Result<MemoryEnv, DotenvError> {
    if dotenv_disabled() {
        tracing::debug!("dotenv loading disabled");
        return Ok(MemoryEnv::new());
    }
    load_dotenv_from(Path::new(DOTENV_FILE))
}

fn load_dotenv_from(path: &Path) -> Result<MemoryEnv, DotenvError> {
    let entries = match dotenvy::from_path_iter(path) {
        Ok(entries) => entries,
        Err(dotenvy::Error::Io(io_err)) if io_err.kind() == ErrorKind::NotFound => {
            return Ok(MemoryEnv::new());
        }
        Err(e) => return Err(e.into()),
    };

    let layer = MemoryEnv::new();
    let mut count = 0usize;
    for entry in entries {
        let (name, value) = entry?;
        layer.set(name, value);
        count += 1;
    }
    tracing::debug!(path = %path.display(), count, "loaded .env");
    Ok(layer)
}
