use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::ffi::OsString;

use super::EnvSource;
use crate::error::SourceError;

/// In-memory environment for hermetic tests and injected configuration.
///
/// Backed by `RefCell`, so it is not `Sync`. Names are matched exactly
/// (case-sensitive) regardless of platform.
#[derive(Debug, Default)]
pub struct MemoryEnv {
    vars: RefCell<HashMap<String, OsString>>,
    denied: RefCell<HashSet<String>>,
}

impl MemoryEnv {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `name` to `value`, replacing any previous value.
    pub fn set(&self, name: impl Into<String>, value: impl Into<OsString>) {
        self.vars.borrow_mut().insert(name.into(), value.into());
    }

    /// Remove `name`. Returns the previous value, if any.
    pub fn remove(&self, name: &str) -> Option<OsString> {
        self.vars.borrow_mut().remove(name)
    }

    /// Make every later lookup of `name` fail with [`SourceError::Denied`].
    pub fn deny(&self, name: impl Into<String>) {
        self.denied.borrow_mut().insert(name.into());
    }

    /// Lift a previous [`deny`](Self::deny).
    pub fn allow(&self, name: &str) {
        self.denied.borrow_mut().remove(name);
    }
}

impl<K, V> FromIterator<(K, V)> for MemoryEnv
where
    K: Into<String>,
    V: Into<OsString>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let env = MemoryEnv::new();
        for (name, value) in iter {
            env.set(name, value);
        }
        env
    }
}

impl EnvSource for MemoryEnv {
    fn lookup(&self, name: &str) -> Result<Option<OsString>, SourceError> {
        if self.denied.borrow().contains(name) {
            return Err(SourceError::Denied(format!(
                "read of \"{name}\" is not permitted"
            )));
        }
        Ok(self.vars.borrow().get(name).cloned())
    }
}
