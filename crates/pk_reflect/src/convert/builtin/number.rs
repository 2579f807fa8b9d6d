use crate::convert::builtin::impl_default_policy;
use crate::convert::{ConversionError, Converter, DefaultPolicy, is_absent};
use crate::info::{ScalarKind, TypeInfo};
use crate::value::Value;

/// Converts between numeric types and from numeric text.
///
/// Integers narrow with a range check. Floats truncate toward zero when
/// the target is an integer. `true`/`false` read as `1`/`0`. Text is
/// trimmed and must parse as an integer for integer targets. The
/// computed default is zero of the target type.
#[derive(Debug, Clone, Default)]
pub struct NumberConverter {
    policy: DefaultPolicy,
}

impl NumberConverter {
    #[inline]
    pub const fn new() -> Self {
        Self {
            policy: DefaultPolicy::Null,
        }
    }
}

impl_default_policy!(NumberConverter);

#[derive(Debug, Clone, Copy)]
enum Numeric {
    Int(i128),
    Float(f64),
}

fn zero(kind: Option<ScalarKind>) -> Value {
    match kind {
        Some(ScalarKind::I8) => Value::I8(0),
        Some(ScalarKind::I16) => Value::I16(0),
        Some(ScalarKind::I64) => Value::I64(0),
        Some(ScalarKind::U8) => Value::U8(0),
        Some(ScalarKind::U16) => Value::U16(0),
        Some(ScalarKind::U32) => Value::U32(0),
        Some(ScalarKind::U64) => Value::U64(0),
        Some(ScalarKind::F32) => Value::F32(0.0),
        Some(ScalarKind::F64) => Value::F64(0.0),
        _ => Value::I32(0),
    }
}

fn numeric_of(raw: &Value, integer: bool, target: &'static TypeInfo) -> Result<Numeric, ConversionError> {
    if let Some(v) = raw.as_i64() {
        return Ok(Numeric::Int(v.into()));
    }
    match raw {
        Value::U64(v) => Ok(Numeric::Int((*v).into())),
        Value::F32(v) => Ok(Numeric::Float((*v).into())),
        Value::F64(v) => Ok(Numeric::Float(*v)),
        Value::Bool(b) => Ok(Numeric::Int(i128::from(*b))),
        Value::String(text) => {
            let text = text.trim();
            let invalid = || ConversionError::InvalidLiteral {
                value: text.to_owned(),
                target: target.name(),
            };
            if integer {
                text.parse::<i128>().map(Numeric::Int).map_err(|_| invalid())
            } else {
                text.parse::<f64>().map(Numeric::Float).map_err(|_| invalid())
            }
        }
        other => Err(ConversionError::Incompatible {
            found: other.type_name(),
            target: target.name(),
        }),
    }
}

macro_rules! narrow_int {
    ($num:expr, $ty:ty, $variant:ident, $out_of_range:expr) => {
        match $num {
            Numeric::Int(v) => <$ty>::try_from(v)
                .map(Value::$variant)
                .map_err(|_| $out_of_range),
            Numeric::Float(v) => {
                let truncated = v.trunc();
                // `MAX as f64` rounds up to a power of two for the 64-bit kinds.
                if v.is_finite() && truncated >= <$ty>::MIN as f64 && truncated < <$ty>::MAX as f64 + 1.0 {
                    Ok(Value::$variant(truncated as $ty))
                } else {
                    Err($out_of_range)
                }
            }
        }
    };
}

fn narrow(
    num: Numeric,
    kind: ScalarKind,
    raw: &Value,
    target: &'static TypeInfo,
) -> Result<Value, ConversionError> {
    let out_of_range = || ConversionError::OutOfRange {
        value: raw.to_string(),
        target: target.name(),
    };
    match kind {
        ScalarKind::I8 => narrow_int!(num, i8, I8, out_of_range()),
        ScalarKind::I16 => narrow_int!(num, i16, I16, out_of_range()),
        ScalarKind::I32 => narrow_int!(num, i32, I32, out_of_range()),
        ScalarKind::I64 => narrow_int!(num, i64, I64, out_of_range()),
        ScalarKind::U8 => narrow_int!(num, u8, U8, out_of_range()),
        ScalarKind::U16 => narrow_int!(num, u16, U16, out_of_range()),
        ScalarKind::U32 => narrow_int!(num, u32, U32, out_of_range()),
        ScalarKind::U64 => narrow_int!(num, u64, U64, out_of_range()),
        ScalarKind::F32 => match num {
            Numeric::Int(v) => Ok(Value::F32(v as f32)),
            Numeric::Float(v) if v.is_finite() && v.abs() > f64::from(f32::MAX) => Err(out_of_range()),
            Numeric::Float(v) => Ok(Value::F32(v as f32)),
        },
        ScalarKind::F64 => match num {
            Numeric::Int(v) => Ok(Value::F64(v as f64)),
            Numeric::Float(v) => Ok(Value::F64(v)),
        },
        _ => Err(ConversionError::Incompatible {
            found: raw.type_name(),
            target: target.name(),
        }),
    }
}

impl Converter for NumberConverter {
    fn convert(&self, target: &'static TypeInfo, raw: Value) -> Result<Value, ConversionError> {
        let kind = target.kind().as_scalar().filter(|kind| kind.is_numeric());

        if is_absent(&raw) {
            return Ok(self.policy.resolve(|| zero(kind)));
        }

        match kind {
            Some(kind) => {
                let num = numeric_of(&raw, kind.is_integer(), target)?;
                narrow(num, kind, &raw, target)
            }
            // Abstract targets such as `Number` keep numbers as they are
            // and read text as the widest matching type.
            None => match raw {
                Value::String(_) => match numeric_of(&raw, true, target) {
                    Ok(num) => narrow(num, ScalarKind::I64, &raw, target),
                    Err(_) => {
                        let num = numeric_of(&raw, false, target)?;
                        narrow(num, ScalarKind::F64, &raw, target)
                    }
                },
                other => Ok(other),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::NumberConverter;
    use crate::convert::{ConversionError, Converter};
    use crate::info::{Number, Typed};
    use crate::value::Value;

    #[test]
    fn parses_and_narrows() {
        let converter = NumberConverter::new();

        assert_eq!(converter.convert(i32::type_info(), " 42 ".into()), Ok(Value::I32(42)));
        assert_eq!(converter.convert(u8::type_info(), Value::I64(255)), Ok(Value::U8(255)));
        assert_eq!(converter.convert(i64::type_info(), Value::F64(-2.9)), Ok(Value::I64(-2)));
        assert_eq!(converter.convert(f64::type_info(), "2.5".into()), Ok(Value::F64(2.5)));
        assert_eq!(converter.convert(u16::type_info(), Value::Bool(true)), Ok(Value::U16(1)));
    }

    #[test]
    fn reports_range_and_format_errors() {
        let converter = NumberConverter::new();

        assert!(matches!(
            converter.convert(u8::type_info(), Value::I32(256)),
            Err(ConversionError::OutOfRange { target: "u8", .. })
        ));
        assert!(matches!(
            converter.convert(i32::type_info(), "1.5".into()),
            Err(ConversionError::InvalidLiteral { .. })
        ));
        assert!(matches!(
            converter.convert(i32::type_info(), Value::F64(f64::NAN)),
            Err(ConversionError::OutOfRange { .. })
        ));
    }

    #[test]
    fn rejects_floats_at_the_upper_bound() {
        let converter = NumberConverter::new();

        assert!(matches!(
            converter.convert(i64::type_info(), Value::F64(9.223372036854775808e18)),
            Err(ConversionError::OutOfRange { target: "i64", .. })
        ));
        assert!(matches!(
            converter.convert(u64::type_info(), Value::F64(1.8446744073709552e19)),
            Err(ConversionError::OutOfRange { target: "u64", .. })
        ));
        assert!(matches!(
            converter.convert(i32::type_info(), Value::F64(2147483648.0)),
            Err(ConversionError::OutOfRange { target: "i32", .. })
        ));
        assert_eq!(
            converter.convert(i32::type_info(), Value::F64(2147483647.9)),
            Ok(Value::I32(i32::MAX))
        );
        assert_eq!(
            converter.convert(i64::type_info(), Value::F64(-9.223372036854775808e18)),
            Ok(Value::I64(i64::MIN))
        );
    }

    #[test]
    fn abstract_target_keeps_numbers() {
        let converter = NumberConverter::new();
        let target = Number::type_info();

        assert_eq!(converter.convert(target, Value::U8(3)), Ok(Value::U8(3)));
        assert_eq!(converter.convert(target, "7".into()), Ok(Value::I64(7)));
        assert_eq!(converter.convert(target, "7.5".into()), Ok(Value::F64(7.5)));
    }

    #[test]
    fn computed_default_is_typed_zero() {
        let converter = NumberConverter::new().with_computed_default();
        assert_eq!(converter.convert(f32::type_info(), Value::Null), Ok(Value::F32(0.0)));
        assert_eq!(converter.convert(u64::type_info(), "null".into()), Ok(Value::U64(0)));
    }
}
