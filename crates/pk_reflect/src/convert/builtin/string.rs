use crate::convert::builtin::impl_default_policy;
use crate::convert::{ConversionError, Converter, DefaultPolicy, is_absent};
use crate::info::TypeInfo;
use crate::value::Value;

/// Converts any value to its text form. The computed default is `""`.
#[derive(Debug, Clone, Default)]
pub struct StringConverter {
    policy: DefaultPolicy,
}

impl StringConverter {
    #[inline]
    pub const fn new() -> Self {
        Self {
            policy: DefaultPolicy::Null,
        }
    }
}

impl_default_policy!(StringConverter);

impl Converter for StringConverter {
    fn convert(&self, _target: &'static TypeInfo, raw: Value) -> Result<Value, ConversionError> {
        if is_absent(&raw) {
            return Ok(self.policy.resolve(|| Value::String(String::new())));
        }
        match raw {
            Value::String(text) => Ok(Value::String(text)),
            other => Ok(Value::String(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::StringConverter;
    use crate::convert::Converter;
    use crate::info::Typed;
    use crate::value::Value;

    #[test]
    fn null_text_is_absent() {
        let target = String::type_info();
        assert_eq!(StringConverter::new().convert(target, "null".into()), Ok(Value::Null));
        assert_eq!(
            StringConverter::new()
                .with_computed_default()
                .convert(target, "null".into()),
            Ok(Value::from(""))
        );
        assert_eq!(
            StringConverter::new().convert(target, Value::F64(1.5)),
            Ok(Value::from("1.5"))
        );
    }
}
