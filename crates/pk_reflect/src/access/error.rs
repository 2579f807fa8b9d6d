use alloc::borrow::Cow;
use core::error::Error;

use thiserror::Error;

use crate::convert::ConversionError;
use crate::value::Value;

/// Boxed cause attached to read and write failures.
pub type Cause = Box<dyn Error + Send + Sync>;

/// A failure to read or write a property path.
#[derive(Debug, Error)]
pub enum PropertyError {
    #[error("{0}")]
    InvalidArgument(Cow<'static, str>),
    #[error("Unknown property `{property}` on type `{owner}`")]
    NoSuchProperty { property: String, owner: &'static str },
    #[error("Property `{property}` has no read accessor on type `{owner}`")]
    UnreadableProperty { property: String, owner: &'static str },
    #[error("Property `{property}` has no write accessor on type `{owner}`")]
    UnwritableProperty { property: String, owner: &'static str },
    #[error("Null property value for `{property}` on type `{owner}`")]
    NullReference { property: String, owner: &'static str },
    #[error("Failed to read property `{property}` on type `{owner}`")]
    FailedToReadProperty {
        property: String,
        owner: &'static str,
        #[source]
        source: Cause,
    },
    #[error("Failed to set property `{property}` of type `{declared}` to `{value}`")]
    FailedToWriteProperty {
        property: String,
        declared: &'static str,
        value: Value,
        #[source]
        source: Cause,
    },
    #[error(transparent)]
    Conversion(#[from] ConversionError),
}

impl PropertyError {
    pub(crate) fn missing_name() -> Self {
        Self::InvalidArgument(Cow::Borrowed("The name of the property must be specified"))
    }

    pub(crate) fn not_simple(name: &str) -> Self {
        Self::InvalidArgument(Cow::Owned(format!(
            "Cannot set the value of an indexed or nested property: `{name}`"
        )))
    }

    pub(crate) fn not_a_sequence(name: &str, owner: &str) -> Self {
        Self::InvalidArgument(Cow::Owned(format!(
            "Property `{name}` of type `{owner}` is not an array or Collection type"
        )))
    }
}
