//! The built-in scalar converters.
//!
//! Each converter treats [`Null`](crate::value::Value::Null) and the text
//! `"null"` (any case, surrounding whitespace ignored) as absent and
//! answers with its [`DefaultPolicy`](crate::convert::DefaultPolicy).
//! Registered instances override the unregistered behaviour, which uses
//! [`DefaultPolicy::Null`](crate::convert::DefaultPolicy::Null).

// -----------------------------------------------------------------------------
// Modules

mod boolean;
mod character;
mod location;
mod number;
mod string;
mod temporal;

// -----------------------------------------------------------------------------
// Exports

pub use boolean::BooleanConverter;
pub use character::CharacterConverter;
pub use location::{PathConverter, UrlConverter};
pub use number::NumberConverter;
pub use string::StringConverter;
pub use temporal::{DEFAULT_DATE_FORMATS, DEFAULT_DATE_TIME_FORMATS};
pub use temporal::{DateConverter, DateTimeConverter};

// -----------------------------------------------------------------------------
// Dispatch

use std::sync::LazyLock;

use crate::convert::{ConversionError, Converter};
use crate::info::{ScalarKind, TypeInfo};
use crate::value::Value;

static BOOLEAN: BooleanConverter = BooleanConverter::new();
static CHARACTER: CharacterConverter = CharacterConverter::new();
static NUMBER: NumberConverter = NumberConverter::new();
static STRING: StringConverter = StringConverter::new();
static DATE_TIME: LazyLock<DateTimeConverter> = LazyLock::new(DateTimeConverter::new);
static DATE: LazyLock<DateConverter> = LazyLock::new(DateConverter::new);
static URL: UrlConverter = UrlConverter::new();
static PATH: PathConverter = PathConverter::new();

/// Converts with the unregistered built-in for `kind`.
pub(crate) fn convert_scalar(
    kind: ScalarKind,
    target: &'static TypeInfo,
    raw: Value,
) -> Result<Value, ConversionError> {
    let converter: &dyn Converter = match kind {
        ScalarKind::Bool => &BOOLEAN,
        ScalarKind::Char => &CHARACTER,
        ScalarKind::String => &STRING,
        ScalarKind::DateTime => &*DATE_TIME,
        ScalarKind::Date => &*DATE,
        ScalarKind::Url => &URL,
        ScalarKind::Path => &PATH,
        ScalarKind::I8
        | ScalarKind::I16
        | ScalarKind::I32
        | ScalarKind::I64
        | ScalarKind::U8
        | ScalarKind::U16
        | ScalarKind::U32
        | ScalarKind::U64
        | ScalarKind::F32
        | ScalarKind::F64 => &NUMBER,
    };
    converter.convert(target, raw)
}

macro_rules! impl_default_policy {
    ($ty:ty) => {
        impl $ty {
            /// Yields `value` for absent input.
            pub fn with_default(mut self, value: impl Into<$crate::value::Value>) -> Self {
                self.policy = $crate::convert::DefaultPolicy::Value(value.into());
                self
            }

            /// Yields the computed default for absent input.
            pub fn with_computed_default(mut self) -> Self {
                self.policy = $crate::convert::DefaultPolicy::Computed;
                self
            }

            #[inline]
            pub fn policy(&self) -> &$crate::convert::DefaultPolicy {
                &self.policy
            }
        }
    };
}

use impl_default_policy;
