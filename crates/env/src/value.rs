//! Target types and their canonical textual grammars.
//!
//! Responsibilities:
//! - Define [`EnvValue`], the conversion contract every target type implements.
//! - Implement it for `String`, `bool`, `char`, every primitive integer and float.
//! - Implement it for `Option<T>` (the nullable wrapper) over any [`EnvScalar`].
//!
//! Does NOT handle:
//! - Reading variables (see `source/`).
//! - Deciding what to do with a failed conversion (see `environment.rs`).
//!
//! Invariants:
//! - Conversion is pure: the same text always yields the same result.
//! - Numeric and boolean grammars ignore surrounding whitespace; `String` and
//!   `char` take the text verbatim.
//! - Out-of-range integers are `Overflow`, every other failure is `Format`.

use std::num::{IntErrorKind, ParseIntError};

use crate::error::ConversionError;

/// A type an environment variable can be converted to.
pub trait EnvValue: Sized {
    /// Name used in error messages. For nullable targets, the underlying scalar.
    const TYPE_NAME: &'static str;

    /// Whether this is a nullable wrapper. The strict accessor rejects these.
    const NULLABLE: bool = false;

    /// Parse raw variable text into `Self`.
    fn parse_env(raw: &str) -> Result<Self, ConversionError>;
}

/// Marker for non-nullable targets.
///
/// Only scalars can be wrapped in `Option`, which keeps `Option<Option<T>>`
/// from ever being a target. Implement this alongside [`EnvValue`] to make a
/// custom type usable as `Option<YourType>`.
pub trait EnvScalar: EnvValue {}

impl EnvValue for String {
    const TYPE_NAME: &'static str = "String";

    fn parse_env(raw: &str) -> Result<Self, ConversionError> {
        Ok(raw.to_string())
    }
}

impl EnvScalar for String {}

impl EnvValue for bool {
    const TYPE_NAME: &'static str = "bool";

    fn parse_env(raw: &str) -> Result<Self, ConversionError> {
        let trimmed = raw.trim();
        if trimmed.eq_ignore_ascii_case("true") {
            Ok(true)
        } else if trimmed.eq_ignore_ascii_case("false") {
            Ok(false)
        } else {
            Err(ConversionError::Format(
                "string was not recognized as a valid boolean (expected \"true\" or \"false\")"
                    .to_string(),
            ))
        }
    }
}

impl EnvScalar for bool {}

impl EnvValue for char {
    const TYPE_NAME: &'static str = "char";

    fn parse_env(raw: &str) -> Result<Self, ConversionError> {
        raw.parse::<char>()
            .map_err(|e| ConversionError::Format(e.to_string()))
    }
}

impl EnvScalar for char {}

impl<T: EnvScalar> EnvValue for Option<T> {
    const TYPE_NAME: &'static str = T::TYPE_NAME;
    const NULLABLE: bool = true;

    fn parse_env(raw: &str) -> Result<Self, ConversionError> {
        T::parse_env(raw).map(Some)
    }
}

fn int_error(err: ParseIntError) -> ConversionError {
    match err.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
            ConversionError::Overflow(err.to_string())
        }
        _ => ConversionError::Format(err.to_string()),
    }
}

macro_rules! impl_signed {
    ($($ty:ty),* $(,)?) => {$(
        impl EnvValue for $ty {
            const TYPE_NAME: &'static str = stringify!($ty);

            fn parse_env(raw: &str) -> Result<Self, ConversionError> {
                raw.trim().parse::<$ty>().map_err(int_error)
            }
        }

        impl EnvScalar for $ty {}
    )*};
}

// A negative number is well-formed for an unsigned target, just out of range.
// `-0` is zero.
macro_rules! impl_unsigned {
    ($($ty:ty),* $(,)?) => {$(
        impl EnvValue for $ty {
            const TYPE_NAME: &'static str = stringify!($ty);

            fn parse_env(raw: &str) -> Result<Self, ConversionError> {
                let trimmed = raw.trim();
                match trimmed.strip_prefix('-') {
                    Some(magnitude) if !magnitude.starts_with(['+', '-']) => {
                        match magnitude.parse::<$ty>() {
                            Ok(0) => Ok(0),
                            Ok(_) => Err(ConversionError::Overflow(
                                "number too small to fit in target type".to_string(),
                            )),
                            Err(e) if matches!(e.kind(), IntErrorKind::PosOverflow) => Err(
                                ConversionError::Overflow(
                                    "number too small to fit in target type".to_string(),
                                ),
                            ),
                            Err(e) => Err(int_error(e)),
                        }
                    }
                    _ => trimmed.parse::<$ty>().map_err(int_error),
                }
            }
        }

        impl EnvScalar for $ty {}
    )*};
}

macro_rules! impl_float {
    ($($ty:ty),* $(,)?) => {$(
        impl EnvValue for $ty {
            const TYPE_NAME: &'static str = stringify!($ty);

            fn parse_env(raw: &str) -> Result<Self, ConversionError> {
                raw.trim()
                    .parse::<$ty>()
                    .map_err(|e| ConversionError::Format(e.to_string()))
            }
        }

        impl EnvScalar for $ty {}
    )*};
}

impl_signed!(i8, i16, i32, i64, i128, isize);
impl_unsigned!(u8, u16, u32, u64, u128, usize);
impl_float!(f32, f64);
