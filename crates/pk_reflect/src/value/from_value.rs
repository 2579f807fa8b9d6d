use thiserror::Error;

use crate::info::TypeInfo;
use crate::value::Value;

/// A failure to store a [`Value`] into a concrete type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApplyError {
    #[error("cannot assign a `{from}` value to `{to}`")]
    MismatchedTypes { from: &'static str, to: &'static str },
    #[error("expected {expected} elements, found {found}")]
    LengthMismatch { expected: usize, found: usize },
}

impl ApplyError {
    #[inline]
    pub fn mismatched(value: &Value, target: &TypeInfo) -> Self {
        Self::MismatchedTypes {
            from: value.type_name(),
            to: target.name(),
        }
    }
}

/// Strict extraction of a concrete type from a [`Value`].
///
/// No conversion happens here: a `Value::String("1")` is not an `i32`.
/// Values are converted to the declared type before they reach a
/// `FromValue` impl.
pub trait FromValue: Sized {
    fn from_value(value: Value) -> Result<Self, ApplyError>;
}

impl FromValue for Value {
    #[inline]
    fn from_value(value: Value) -> Result<Self, ApplyError> {
        Ok(value)
    }
}
