use core::fmt;

use crate::info::{TypeInfo, Typed};
use crate::value::{ApplyError, FromValue, Value};
use crate::{Reflect, ReflectMut, ReflectRef};

// -----------------------------------------------------------------------------
// Option

impl<T: Typed> Typed for Option<T> {
    #[inline]
    fn type_info() -> &'static TypeInfo {
        T::type_info()
    }
}

impl<T: Reflect + Typed + FromValue + Clone> Reflect for Option<T> {
    fn reflect_type_info(&self) -> &'static TypeInfo {
        match self {
            Some(value) => value.reflect_type_info(),
            None => T::type_info(),
        }
    }

    fn reflect_ref(&self) -> ReflectRef<'_> {
        match self {
            Some(value) => value.reflect_ref(),
            None => ReflectRef::Null,
        }
    }

    fn reflect_mut(&mut self) -> ReflectMut<'_> {
        match self {
            Some(value) => value.reflect_mut(),
            None => ReflectMut::Null,
        }
    }

    fn to_value(&self) -> Value {
        self.as_ref().map_or(Value::Null, Reflect::to_value)
    }

    fn apply(&mut self, value: Value) -> Result<(), ApplyError> {
        if value.is_null() {
            *self = None;
            return Ok(());
        }
        match self {
            Some(inner) => inner.apply(value),
            None => {
                *self = Some(T::from_value(value)?);
                Ok(())
            }
        }
    }

    fn reflect_clone(&self) -> Box<dyn Reflect> {
        Box::new(self.clone())
    }

    fn reflect_partial_eq(&self, other: &dyn Reflect) -> Option<bool> {
        match (self, other.downcast_ref::<Self>()) {
            (Some(a), Some(Some(b))) => a.reflect_partial_eq(b),
            (None, Some(None)) => Some(true),
            _ => Some(false),
        }
    }

    fn reflect_debug(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Some(value) => value.reflect_debug(f),
            None => f.write_str("None"),
        }
    }
}

impl<T: FromValue> FromValue for Option<T> {
    fn from_value(value: Value) -> Result<Self, ApplyError> {
        if value.is_null() {
            Ok(None)
        } else {
            T::from_value(value).map(Some)
        }
    }
}

// -----------------------------------------------------------------------------
// Box

impl<T: Typed> Typed for Box<T> {
    #[inline]
    fn type_info() -> &'static TypeInfo {
        T::type_info()
    }
}

impl<T: Reflect + Clone> Reflect for Box<T> {
    #[inline]
    fn reflect_type_info(&self) -> &'static TypeInfo {
        (**self).reflect_type_info()
    }

    #[inline]
    fn reflect_ref(&self) -> ReflectRef<'_> {
        (**self).reflect_ref()
    }

    #[inline]
    fn reflect_mut(&mut self) -> ReflectMut<'_> {
        (**self).reflect_mut()
    }

    #[inline]
    fn to_value(&self) -> Value {
        (**self).to_value()
    }

    #[inline]
    fn apply(&mut self, value: Value) -> Result<(), ApplyError> {
        (**self).apply(value)
    }

    // Clones the pointee, so objects never hold a `Box<T>`.
    fn reflect_clone(&self) -> Box<dyn Reflect> {
        (**self).reflect_clone()
    }

    fn reflect_partial_eq(&self, other: &dyn Reflect) -> Option<bool> {
        match other.downcast_ref::<Self>() {
            Some(other) => (**self).reflect_partial_eq(&**other),
            None => (**self).reflect_partial_eq(other),
        }
    }

    fn reflect_debug(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        (**self).reflect_debug(f)
    }
}

impl<T: FromValue> FromValue for Box<T> {
    #[inline]
    fn from_value(value: Value) -> Result<Self, ApplyError> {
        T::from_value(value).map(Box::new)
    }
}
