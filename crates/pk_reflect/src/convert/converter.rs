use crate::convert::ConversionError;
use crate::info::TypeInfo;
use crate::value::Value;

/// Converts a raw value to `target`.
///
/// Closures with the matching signature are converters too:
///
/// ```
/// use pk_reflect::convert::{ConversionRegistry, ConversionError};
/// use pk_reflect::info::{TypeInfo, Typed};
/// use pk_reflect::value::Value;
///
/// let mut registry = ConversionRegistry::new();
/// registry.register::<i32>(|_: &'static TypeInfo, raw: Value| -> Result<Value, ConversionError> {
///     Ok(Value::I32(raw.to_string().len() as i32))
/// });
///
/// assert_eq!(registry.convert(i32::type_info(), "abc".into()), Ok(Value::I32(3)));
/// ```
pub trait Converter: Send + Sync + 'static {
    fn convert(&self, target: &'static TypeInfo, raw: Value) -> Result<Value, ConversionError>;
}

impl<F> Converter for F
where
    F: Fn(&'static TypeInfo, Value) -> Result<Value, ConversionError> + Send + Sync + 'static,
{
    #[inline]
    fn convert(&self, target: &'static TypeInfo, raw: Value) -> Result<Value, ConversionError> {
        self(target, raw)
    }
}

/// What a built-in converter yields for an absent input.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum DefaultPolicy {
    /// Yield [`Value::Null`].
    #[default]
    Null,
    /// Yield a fixed value.
    Value(Value),
    /// Yield the converter's computed default, such as `false`, `0` or
    /// the current time.
    Computed,
}

impl DefaultPolicy {
    /// Resolves the default, calling `computed` only for [`Computed`](Self::Computed).
    pub fn resolve(&self, computed: impl FnOnce() -> Value) -> Value {
        match self {
            Self::Null => Value::Null,
            Self::Value(value) => value.clone(),
            Self::Computed => computed(),
        }
    }
}

/// Returns `true` for `Null` and for text that reads `null` after
/// trimming, ignoring case.
///
/// ```
/// use pk_reflect::convert::is_absent;
/// use pk_reflect::value::Value;
///
/// assert!(is_absent(&Value::Null));
/// assert!(is_absent(&Value::from(" NULL ")));
/// assert!(!is_absent(&Value::from("")));
/// ```
pub fn is_absent(raw: &Value) -> bool {
    match raw {
        Value::Null => true,
        Value::String(s) => s.trim().eq_ignore_ascii_case("null"),
        _ => false,
    }
}
