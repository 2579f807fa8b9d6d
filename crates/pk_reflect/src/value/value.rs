use core::fmt;
use std::path::PathBuf;

use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use url::Url;

use crate::Reflect;
use crate::info::{TypeInfo, Typed};
use crate::value::{ApplyError, ObjectValue};

/// A dynamically typed property value.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Char(char),
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    F32(f32),
    F64(f64),
    String(String),
    DateTime(DateTime<Utc>),
    Date(NaiveDate),
    Url(Url),
    Path(PathBuf),
    List(Vec<Value>),
    Object(ObjectValue),
}

impl Value {
    /// Wraps a reflected value.
    #[inline]
    pub fn object<T: Reflect>(value: T) -> Self {
        Self::Object(ObjectValue::new(value))
    }

    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns the short name of the runtime type.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::List(_) => "List",
            Self::Object(object) => object.type_info().name(),
            other => other.type_info().map_or("null", TypeInfo::name),
        }
    }

    /// Returns the runtime type info of scalars and objects.
    ///
    /// `Null` and `List` have none.
    pub fn type_info(&self) -> Option<&'static TypeInfo> {
        let info = match self {
            Self::Null | Self::List(_) => return None,
            Self::Object(object) => object.type_info(),
            Self::Bool(_) => bool::type_info(),
            Self::Char(_) => char::type_info(),
            Self::I8(_) => i8::type_info(),
            Self::I16(_) => i16::type_info(),
            Self::I32(_) => i32::type_info(),
            Self::I64(_) => i64::type_info(),
            Self::U8(_) => u8::type_info(),
            Self::U16(_) => u16::type_info(),
            Self::U32(_) => u32::type_info(),
            Self::U64(_) => u64::type_info(),
            Self::F32(_) => f32::type_info(),
            Self::F64(_) => f64::type_info(),
            Self::String(_) => String::type_info(),
            Self::DateTime(_) => <DateTime<Utc>>::type_info(),
            Self::Date(_) => NaiveDate::type_info(),
            Self::Url(_) => Url::type_info(),
            Self::Path(_) => PathBuf::type_info(),
        };
        Some(info)
    }

    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    #[inline]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns any integer that fits in an `i64`.
    pub fn as_i64(&self) -> Option<i64> {
        match *self {
            Self::I8(v) => Some(v.into()),
            Self::I16(v) => Some(v.into()),
            Self::I32(v) => Some(v.into()),
            Self::I64(v) => Some(v),
            Self::U8(v) => Some(v.into()),
            Self::U16(v) => Some(v.into()),
            Self::U32(v) => Some(v.into()),
            Self::U64(v) => i64::try_from(v).ok(),
            _ => None,
        }
    }

    /// Returns any number as an `f64`.
    pub fn as_f64(&self) -> Option<f64> {
        match *self {
            Self::F32(v) => Some(v.into()),
            Self::F64(v) => Some(v),
            Self::U64(v) => Some(v as f64),
            _ => self.as_i64().map(|v| v as f64),
        }
    }

    #[inline]
    pub fn as_object(&self) -> Option<&ObjectValue> {
        match self {
            Self::Object(object) => Some(object),
            _ => None,
        }
    }

    /// Moves a wrapped `T` out of an [`Object`](Self::Object) value.
    pub fn take_object<T: Reflect + Typed>(self) -> Result<T, ApplyError> {
        match self {
            Self::Object(object) => object.take::<T>().map_err(|object| ApplyError::MismatchedTypes {
                from: object.type_info().name(),
                to: T::type_info().name(),
            }),
            other => Err(ApplyError::mismatched(&other, T::type_info())),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("null"),
            Self::Bool(v) => fmt::Display::fmt(v, f),
            Self::Char(v) => fmt::Display::fmt(v, f),
            Self::I8(v) => fmt::Display::fmt(v, f),
            Self::I16(v) => fmt::Display::fmt(v, f),
            Self::I32(v) => fmt::Display::fmt(v, f),
            Self::I64(v) => fmt::Display::fmt(v, f),
            Self::U8(v) => fmt::Display::fmt(v, f),
            Self::U16(v) => fmt::Display::fmt(v, f),
            Self::U32(v) => fmt::Display::fmt(v, f),
            Self::U64(v) => fmt::Display::fmt(v, f),
            Self::F32(v) => fmt::Display::fmt(v, f),
            Self::F64(v) => fmt::Display::fmt(v, f),
            Self::String(v) => f.write_str(v),
            Self::DateTime(v) => f.write_str(&v.to_rfc3339_opts(SecondsFormat::AutoSi, true)),
            Self::Date(v) => fmt::Display::fmt(v, f),
            Self::Url(v) => f.write_str(v.as_str()),
            Self::Path(v) => fmt::Display::fmt(&v.display(), f),
            Self::List(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    fmt::Display::fmt(item, f)?;
                }
                f.write_str("]")
            }
            Self::Object(object) => fmt::Display::fmt(object, f),
        }
    }
}

// -----------------------------------------------------------------------------
// Conversions

macro_rules! impl_from {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for Value {
                #[inline]
                fn from(value: $ty) -> Self {
                    Self::$variant(value)
                }
            }
        )*
    };
}

impl_from!(
    bool => Bool,
    char => Char,
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    f32 => F32,
    f64 => F64,
    String => String,
    DateTime<Utc> => DateTime,
    NaiveDate => Date,
    Url => Url,
    PathBuf => Path,
    ObjectValue => Object,
);

impl From<&str> for Value {
    #[inline]
    fn from(value: &str) -> Self {
        Self::String(value.to_owned())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    #[inline]
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(value: Vec<T>) -> Self {
        Self::List(value.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use crate::value::Value;

    #[test]
    fn display_matches_plain_text() {
        assert_eq!(Value::Null.to_string(), "null");
        assert_eq!(Value::from("abc").to_string(), "abc");
        assert_eq!(Value::from(vec![1_i32, 2, 3]).to_string(), "[1, 2, 3]");

        let instant = Utc.with_ymd_and_hms(2024, 2, 29, 12, 30, 0).unwrap();
        assert_eq!(Value::from(instant).to_string(), "2024-02-29T12:30:00Z");
    }

    #[test]
    fn integers_widen() {
        assert_eq!(Value::U8(7).as_i64(), Some(7));
        assert_eq!(Value::U64(u64::MAX).as_i64(), None);
        assert_eq!(Value::I16(-3).as_f64(), Some(-3.0));
        assert_eq!(Value::from("1").as_i64(), None);
    }

    #[test]
    fn options_map_to_null() {
        assert!(Value::from(None::<i32>).is_null());
        assert_eq!(Value::from(Some(5_u16)), Value::U16(5));
        assert_eq!(Value::Null.type_name(), "null");
        assert_eq!(Value::I32(1).type_name(), "i32");
    }
}
