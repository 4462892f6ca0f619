//! Command dispatch logic.
//!
//! Responsibilities:
//! - Route parsed CLI arguments to the matching accessor operation.
//! - Map the runtime `--type`/`--optional` choice onto a concrete Rust type.
//!
//! Does NOT handle:
//! - CLI structure definitions (see `args` module).
//! - Rendering (see `formatters` module).
//!
//! Invariants:
//! - Strict mode and `check` surface `EnvError` unchanged so the exit code
//!   reflects its kind.
//! - Try and default modes never fail on a missing or malformed variable.
//! - A present value never renders as `null`: non-finite floats serialize as
//!   their display text.

use anyhow::Result;
use generic_env::{ConversionError, EnvScalar, EnvSource, EnvValue, Environment};
use serde::{Serialize, Serializer};

use crate::args::{Commands, Mode, TargetType};

/// The result of one command, ready to be formatted.
#[derive(Debug, Serialize)]
pub struct Report {
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub target: &'static str,
    pub optional: bool,
    pub mode: &'static str,
    /// Unknown in default mode, where absence and default are equivalent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub found: Option<bool>,
    /// Absent for `check`. `Null` for an empty optional.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<serde_json::Value>,
}

/// `f64` that serializes `inf`, `-inf` and `NaN` as strings, since JSON has
/// no literal for them.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
struct DisplayFloat(f64);

impl EnvValue for DisplayFloat {
    const TYPE_NAME: &'static str = <f64 as EnvValue>::TYPE_NAME;

    fn parse_env(raw: &str) -> Result<Self, ConversionError> {
        f64::parse_env(raw).map(DisplayFloat)
    }
}

impl EnvScalar for DisplayFloat {}

impl Serialize for DisplayFloat {
    fn serialize<Ser: Serializer>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error> {
        if self.0.is_finite() {
            serializer.serialize_f64(self.0)
        } else {
            serializer.collect_str(&self.0)
        }
    }
}

struct Reading {
    found: Option<bool>,
    value: serde_json::Value,
}

/// Dispatch a parsed command against `env`.
pub(crate) fn run_command<S: EnvSource>(command: Commands, env: &Environment<S>) -> Result<Report> {
    match command {
        Commands::Get {
            name,
            target,
            optional,
            mode,
        } => {
            let reading = read(env, name.as_deref(), target, optional, mode)?;
            Ok(Report {
                name,
                target: target.as_str(),
                optional,
                mode: mode.as_str(),
                found: reading.found,
                value: Some(reading.value),
            })
        }
        Commands::Check { name, target } => {
            read(env, Some(&name), target, false, Mode::Strict)?;
            Ok(Report {
                name: Some(name),
                target: target.as_str(),
                optional: false,
                mode: "check",
                found: Some(true),
                value: None,
            })
        }
    }
}

fn read<S: EnvSource>(
    env: &Environment<S>,
    name: Option<&str>,
    target: TargetType,
    optional: bool,
    mode: Mode,
) -> Result<Reading> {
    macro_rules! dispatch {
        ($($variant:ident => $ty:ty),* $(,)?) => {
            match (target, optional) {
                $(
                    (TargetType::$variant, false) => read_as::<$ty, S>(env, name, mode),
                    (TargetType::$variant, true) => read_as::<Option<$ty>, S>(env, name, mode),
                )*
            }
        };
    }

    dispatch!(
        String => String,
        Bool => bool,
        I8 => i8,
        I16 => i16,
        I32 => i32,
        I64 => i64,
        U8 => u8,
        U16 => u16,
        U32 => u32,
        U64 => u64,
        F64 => DisplayFloat,
        Char => char,
    )
}

fn read_as<T, S>(env: &Environment<S>, name: Option<&str>, mode: Mode) -> Result<Reading>
where
    T: EnvValue + Default + Serialize,
    S: EnvSource,
{
    tracing::debug!(name, target = T::TYPE_NAME, mode = mode.as_str(), "reading variable");
    let (found, value) = match mode {
        Mode::Strict => (Some(true), env.get_or_throw::<T>(name)?),
        Mode::Try => {
            let (found, value) = env.try_get::<T>(name);
            (Some(found), value)
        }
        Mode::Default => (None, env.get_or_default::<T>(name)),
    };
    Ok(Reading {
        found,
        value: serde_json::to_value(value)?,
    })
}
