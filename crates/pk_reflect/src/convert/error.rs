use thiserror::Error;

/// A failure to convert a raw value to a target type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    #[error("({0}) is not a valid boolean condition!")]
    InvalidBoolean(String),
    /// An index or numeric text that is not a plain digit string.
    #[error("`{0}` is not a valid number")]
    NumberFormat(String),
    #[error("cannot convert `{value}` to `{target}`")]
    InvalidLiteral { value: String, target: &'static str },
    #[error("`{value}` is out of range for `{target}`")]
    OutOfRange { value: String, target: &'static str },
    #[error("a `{found}` value cannot be converted to `{target}`")]
    Incompatible { found: &'static str, target: &'static str },
    #[error("cannot instantiate `{target}` from `{value}`")]
    NotInstantiable { value: String, target: &'static str },
    #[error("no `{target}` constant matches `{key}`")]
    UnknownConstant { key: String, target: &'static str },
}
