use core::fmt;
use std::path::PathBuf;

use chrono::{DateTime, NaiveDate, Utc};
use url::Url;

use crate::info::{NonGenericTypeInfoCell, Number, ScalarKind, TypeInfo, TypeKind, Typed};
use crate::value::{ApplyError, FromValue, Value};
use crate::{Reflect, ReflectMut, ReflectRef};

macro_rules! impl_reflect_scalar {
    ($ty:ty, $variant:ident, $name:literal $(, supertype = $sup:ty)?) => {
        impl Typed for $ty {
            fn type_info() -> &'static TypeInfo {
                static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
                CELL.get_or_init(|| {
                    TypeInfo::builder::<$ty>($name, TypeKind::Scalar(ScalarKind::$variant))
                        $(.supertype(<$sup as Typed>::type_info()))?
                        .build()
                })
            }
        }

        impl Reflect for $ty {
            #[inline]
            fn reflect_type_info(&self) -> &'static TypeInfo {
                <Self as Typed>::type_info()
            }

            #[inline]
            fn reflect_ref(&self) -> ReflectRef<'_> {
                ReflectRef::Leaf(self)
            }

            #[inline]
            fn reflect_mut(&mut self) -> ReflectMut<'_> {
                ReflectMut::Leaf(self)
            }

            #[inline]
            fn to_value(&self) -> Value {
                Value::$variant(Clone::clone(self))
            }

            fn apply(&mut self, value: Value) -> Result<(), ApplyError> {
                *self = <Self as FromValue>::from_value(value)?;
                Ok(())
            }

            fn reflect_clone(&self) -> Box<dyn Reflect> {
                Box::new(Clone::clone(self))
            }

            fn reflect_partial_eq(&self, other: &dyn Reflect) -> Option<bool> {
                Some(other.downcast_ref::<Self>().is_some_and(|other| other == self))
            }

            fn reflect_debug(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Debug::fmt(self, f)
            }
        }

        impl FromValue for $ty {
            fn from_value(value: Value) -> Result<Self, ApplyError> {
                match value {
                    Value::$variant(v) => Ok(v),
                    other => Err(ApplyError::mismatched(&other, <Self as Typed>::type_info())),
                }
            }
        }
    };
}

impl_reflect_scalar!(bool, Bool, "bool");
impl_reflect_scalar!(char, Char, "char");
impl_reflect_scalar!(i8, I8, "i8", supertype = Number);
impl_reflect_scalar!(i16, I16, "i16", supertype = Number);
impl_reflect_scalar!(i32, I32, "i32", supertype = Number);
impl_reflect_scalar!(i64, I64, "i64", supertype = Number);
impl_reflect_scalar!(u8, U8, "u8", supertype = Number);
impl_reflect_scalar!(u16, U16, "u16", supertype = Number);
impl_reflect_scalar!(u32, U32, "u32", supertype = Number);
impl_reflect_scalar!(u64, U64, "u64", supertype = Number);
impl_reflect_scalar!(f32, F32, "f32", supertype = Number);
impl_reflect_scalar!(f64, F64, "f64", supertype = Number);
impl_reflect_scalar!(String, String, "String");
impl_reflect_scalar!(DateTime<Utc>, DateTime, "DateTime");
impl_reflect_scalar!(NaiveDate, Date, "Date");
impl_reflect_scalar!(Url, Url, "Url");
impl_reflect_scalar!(PathBuf, Path, "Path");

#[cfg(test)]
mod tests {
    use crate::Reflect;
    use crate::info::{ScalarKind, TypeKind, Typed};
    use crate::value::{ApplyError, Value};

    #[test]
    fn scalars_apply_matching_values_only() {
        let mut n = 1_i32;
        n.apply(Value::I32(9)).unwrap();
        assert_eq!(n, 9);

        let err = n.apply(Value::from("9")).unwrap_err();
        assert_eq!(
            err,
            ApplyError::MismatchedTypes {
                from: "String",
                to: "i32"
            }
        );
    }

    #[test]
    fn scalar_infos_are_stable() {
        assert!(core::ptr::eq(u16::type_info(), u16::type_info()));
        assert_eq!(String::type_info().kind(), TypeKind::Scalar(ScalarKind::String));
        assert_eq!(String::type_info().path(), "alloc::string::String");
    }

    #[test]
    fn dyn_equality() {
        let a: &dyn Reflect = &3_u8;
        assert_eq!(a.reflect_partial_eq(&3_u8), Some(true));
        assert_eq!(a.reflect_partial_eq(&3_i8), Some(false));
    }
}
