use crate::convert::builtin::impl_default_policy;
use crate::convert::{ConversionError, Converter, DefaultPolicy, is_absent};
use crate::info::TypeInfo;
use crate::value::Value;

/// Converts to `char` by taking the first character of the text form.
///
/// Empty text fails. The computed default is `'\0'`.
#[derive(Debug, Clone, Default)]
pub struct CharacterConverter {
    policy: DefaultPolicy,
}

impl CharacterConverter {
    #[inline]
    pub const fn new() -> Self {
        Self {
            policy: DefaultPolicy::Null,
        }
    }
}

impl_default_policy!(CharacterConverter);

impl Converter for CharacterConverter {
    fn convert(&self, target: &'static TypeInfo, raw: Value) -> Result<Value, ConversionError> {
        if is_absent(&raw) {
            return Ok(self.policy.resolve(|| Value::Char('\0')));
        }
        if let Value::Char(c) = raw {
            return Ok(Value::Char(c));
        }

        let text = raw.to_string();
        let first = text.chars().next();
        match first {
            Some(c) => Ok(Value::Char(c)),
            None => Err(ConversionError::InvalidLiteral {
                value: text,
                target: target.name(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::CharacterConverter;
    use crate::convert::{ConversionError, Converter};
    use crate::info::Typed;
    use crate::value::Value;

    #[test]
    fn takes_first_character() {
        let converter = CharacterConverter::new();
        let target = char::type_info();

        assert_eq!(converter.convert(target, "xyz".into()), Ok(Value::Char('x')));
        assert_eq!(converter.convert(target, Value::I32(42)), Ok(Value::Char('4')));
        assert!(matches!(
            converter.convert(target, "".into()),
            Err(ConversionError::InvalidLiteral { .. })
        ));
        assert_eq!(
            CharacterConverter::new()
                .with_computed_default()
                .convert(target, Value::Null),
            Ok(Value::Char('\0'))
        );
    }
}
