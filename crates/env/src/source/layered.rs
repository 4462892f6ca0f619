use std::ffi::OsString;

use super::EnvSource;
use crate::error::SourceError;

/// Two sources consulted in order: `primary` first, `fallback` only when
/// `primary` reports the name as absent.
///
/// A denial from `primary` is returned as-is; `fallback` is not asked.
#[derive(Debug, Clone, Default)]
pub struct LayeredEnv<P, F> {
    primary: P,
    fallback: F,
}

impl<P: EnvSource, F: EnvSource> LayeredEnv<P, F> {
    pub fn new(primary: P, fallback: F) -> Self {
        Self { primary, fallback }
    }

    pub fn primary(&self) -> &P {
        &self.primary
    }

    pub fn fallback(&self) -> &F {
        &self.fallback
    }
}

impl<P: EnvSource, F: EnvSource> EnvSource for LayeredEnv<P, F> {
    fn lookup(&self, name: &str) -> Result<Option<OsString>, SourceError> {
        match self.primary.lookup(name)? {
            Some(value) => Ok(Some(value)),
            None => self.fallback.lookup(name),
        }
    }
}
