use crate::convert::builtin::impl_default_policy;
use crate::convert::{ConversionError, Converter, DefaultPolicy, is_absent};
use crate::info::TypeInfo;
use crate::value::Value;

const TRUE_WORDS: [&str; 5] = ["true", "yes", "y", "on", "1"];
const FALSE_WORDS: [&str; 5] = ["false", "no", "n", "off", "0"];

/// Converts text to `bool`.
///
/// Accepts `true`/`yes`/`y`/`on`/`1` and `false`/`no`/`n`/`off`/`0`,
/// case-insensitively. The computed default is `false`.
#[derive(Debug, Clone, Default)]
pub struct BooleanConverter {
    policy: DefaultPolicy,
}

impl BooleanConverter {
    #[inline]
    pub const fn new() -> Self {
        Self {
            policy: DefaultPolicy::Null,
        }
    }

    /// Parses a single boolean word.
    ///
    /// ```
    /// use pk_reflect::convert::builtin::BooleanConverter;
    ///
    /// assert_eq!(BooleanConverter::parse(" Yes "), Ok(true));
    /// assert_eq!(
    ///     BooleanConverter::parse("tru").unwrap_err().to_string(),
    ///     "(tru) is not a valid boolean condition!",
    /// );
    /// ```
    pub fn parse(text: &str) -> Result<bool, ConversionError> {
        let word = text.trim();
        if TRUE_WORDS.iter().any(|w| word.eq_ignore_ascii_case(w)) {
            Ok(true)
        } else if FALSE_WORDS.iter().any(|w| word.eq_ignore_ascii_case(w)) {
            Ok(false)
        } else {
            Err(ConversionError::InvalidBoolean(word.to_owned()))
        }
    }
}

impl_default_policy!(BooleanConverter);

impl Converter for BooleanConverter {
    fn convert(&self, _target: &'static TypeInfo, raw: Value) -> Result<Value, ConversionError> {
        if is_absent(&raw) {
            return Ok(self.policy.resolve(|| Value::Bool(false)));
        }
        match raw {
            Value::Bool(b) => Ok(Value::Bool(b)),
            Value::String(text) => Self::parse(&text).map(Value::Bool),
            other => Self::parse(&other.to_string()).map(Value::Bool),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::BooleanConverter;
    use crate::convert::{ConversionError, Converter};
    use crate::info::Typed;
    use crate::value::Value;

    fn convert(converter: &BooleanConverter, raw: impl Into<Value>) -> Result<Value, ConversionError> {
        converter.convert(bool::type_info(), raw.into())
    }

    #[test]
    fn accepts_common_words() {
        let converter = BooleanConverter::new();
        for word in ["true", "YES", "y", "On", "1"] {
            assert_eq!(convert(&converter, word), Ok(Value::Bool(true)), "{word}");
        }
        for word in ["false", "no", "N", "OFF", "0"] {
            assert_eq!(convert(&converter, word), Ok(Value::Bool(false)), "{word}");
        }
        assert_eq!(convert(&converter, 1_i64), Ok(Value::Bool(true)));
    }

    #[test]
    fn rejects_unknown_words() {
        let err = convert(&BooleanConverter::new(), "tru").unwrap_err();
        assert_eq!(err, ConversionError::InvalidBoolean("tru".into()));
        assert_eq!(err.to_string(), "(tru) is not a valid boolean condition!");
    }

    #[test]
    fn absent_input_follows_policy() {
        assert_eq!(convert(&BooleanConverter::new(), "null"), Ok(Value::Null));
        assert_eq!(
            convert(&BooleanConverter::new().with_computed_default(), Value::Null),
            Ok(Value::Bool(false))
        );
        assert_eq!(
            convert(&BooleanConverter::new().with_default(true), " NULL"),
            Ok(Value::Bool(true))
        );
    }
}
