use std::path::PathBuf;

use url::Url;

use crate::convert::builtin::impl_default_policy;
use crate::convert::{ConversionError, Converter, DefaultPolicy, is_absent};
use crate::info::TypeInfo;
use crate::value::Value;

// -----------------------------------------------------------------------------
// UrlConverter

/// Parses absolute URLs.
///
/// There is no computed default; [`DefaultPolicy::Computed`] yields
/// `Null`.
#[derive(Debug, Clone, Default)]
pub struct UrlConverter {
    policy: DefaultPolicy,
}

impl UrlConverter {
    #[inline]
    pub const fn new() -> Self {
        Self {
            policy: DefaultPolicy::Null,
        }
    }
}

impl_default_policy!(UrlConverter);

impl Converter for UrlConverter {
    fn convert(&self, target: &'static TypeInfo, raw: Value) -> Result<Value, ConversionError> {
        if is_absent(&raw) {
            return Ok(self.policy.resolve(|| Value::Null));
        }
        let invalid = |value: String| ConversionError::InvalidLiteral {
            value,
            target: target.name(),
        };
        match raw {
            Value::Url(url) => Ok(Value::Url(url)),
            Value::String(text) => Url::parse(text.trim())
                .map(Value::Url)
                .map_err(|_| invalid(text)),
            Value::Path(path) => Url::from_file_path(&path)
                .map(Value::Url)
                .map_err(|()| invalid(path.display().to_string())),
            other => Err(ConversionError::Incompatible {
                found: other.type_name(),
                target: target.name(),
            }),
        }
    }
}

// -----------------------------------------------------------------------------
// PathConverter

/// Converts text and `file:` URLs to filesystem paths. The computed
/// default is the empty path.
#[derive(Debug, Clone, Default)]
pub struct PathConverter {
    policy: DefaultPolicy,
}

impl PathConverter {
    #[inline]
    pub const fn new() -> Self {
        Self {
            policy: DefaultPolicy::Null,
        }
    }
}

impl_default_policy!(PathConverter);

impl Converter for PathConverter {
    fn convert(&self, target: &'static TypeInfo, raw: Value) -> Result<Value, ConversionError> {
        if is_absent(&raw) {
            return Ok(self.policy.resolve(|| Value::Path(PathBuf::new())));
        }
        match raw {
            Value::Path(path) => Ok(Value::Path(path)),
            Value::String(text) => Ok(Value::Path(PathBuf::from(text))),
            Value::Url(url) => url.to_file_path().map(Value::Path).map_err(|()| {
                ConversionError::InvalidLiteral {
                    value: url.to_string(),
                    target: target.name(),
                }
            }),
            other => Err(ConversionError::Incompatible {
                found: other.type_name(),
                target: target.name(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use url::Url;

    use super::{PathConverter, UrlConverter};
    use crate::convert::{ConversionError, Converter};
    use crate::info::Typed;
    use crate::value::Value;

    #[test]
    fn urls_parse_or_fail() {
        let converter = UrlConverter::new();
        let target = Url::type_info();

        let value = converter.convert(target, " https://example.com/a ".into()).unwrap();
        assert_eq!(value.to_string(), "https://example.com/a");
        assert!(matches!(
            converter.convert(target, "not a url".into()),
            Err(ConversionError::InvalidLiteral { .. })
        ));
    }

    #[test]
    fn url_has_no_computed_default() {
        let converter = UrlConverter::new().with_computed_default();
        assert_eq!(converter.convert(Url::type_info(), Value::Null), Ok(Value::Null));
    }

    #[test]
    fn paths_from_text() {
        let converter = PathConverter::new();
        assert_eq!(
            converter.convert(PathBuf::type_info(), "/var/log".into()),
            Ok(Value::Path(PathBuf::from("/var/log")))
        );
        assert_eq!(
            PathConverter::new()
                .with_computed_default()
                .convert(PathBuf::type_info(), Value::Null),
            Ok(Value::Path(PathBuf::new()))
        );
    }
}
