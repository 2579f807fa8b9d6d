use core::fmt;

use crate::info::{GenericTypeInfoCell, TypeInfo, TypeKind, Typed, leak_name};
use crate::value::{ApplyError, FromValue, Value};
use crate::{Reflect, ReflectMut, ReflectRef, Sequence};

// -----------------------------------------------------------------------------
// Vec

impl<T: Typed> Typed for Vec<T> {
    fn type_info() -> &'static TypeInfo {
        static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
        CELL.get_or_insert::<Self>(|| {
            let element = T::type_info();
            let name = leak_name(format!("Vec<{}>", element.name()));
            TypeInfo::builder::<Self>(name, TypeKind::Sequence { element }).build()
        })
    }
}

impl<T: Reflect + Typed + FromValue + Clone> Reflect for Vec<T> {
    #[inline]
    fn reflect_type_info(&self) -> &'static TypeInfo {
        <Self as Typed>::type_info()
    }

    #[inline]
    fn reflect_ref(&self) -> ReflectRef<'_> {
        ReflectRef::Sequence(self)
    }

    #[inline]
    fn reflect_mut(&mut self) -> ReflectMut<'_> {
        ReflectMut::Sequence(self)
    }

    fn to_value(&self) -> Value {
        Value::List(self.iter().map(Reflect::to_value).collect())
    }

    fn apply(&mut self, value: Value) -> Result<(), ApplyError> {
        *self = <Self as FromValue>::from_value(value)?;
        Ok(())
    }

    fn reflect_clone(&self) -> Box<dyn Reflect> {
        Box::new(self.clone())
    }

    fn reflect_partial_eq(&self, other: &dyn Reflect) -> Option<bool> {
        let Some(other) = other.downcast_ref::<Self>() else {
            return Some(false);
        };
        partial_eq_elements(self, other)
    }

    fn reflect_debug(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        debug_elements(self, f)
    }
}

impl<T: Reflect + Typed + FromValue + Clone> Sequence for Vec<T> {
    #[inline]
    fn element_count(&self) -> usize {
        self.len()
    }

    #[inline]
    fn element(&self, index: usize) -> Option<&dyn Reflect> {
        self.as_slice().get(index).map(|v| v as &dyn Reflect)
    }

    #[inline]
    fn element_mut(&mut self, index: usize) -> Option<&mut dyn Reflect> {
        self.as_mut_slice().get_mut(index).map(|v| v as &mut dyn Reflect)
    }

    #[inline]
    fn element_type_info(&self) -> &'static TypeInfo {
        T::type_info()
    }
}

impl<T: FromValue + Typed> FromValue for Vec<T> {
    fn from_value(value: Value) -> Result<Self, ApplyError> {
        match value {
            Value::List(items) => items.into_iter().map(T::from_value).collect(),
            other => Err(ApplyError::mismatched(&other, <Self as Typed>::type_info())),
        }
    }
}

// -----------------------------------------------------------------------------
// Array

impl<T: Typed, const N: usize> Typed for [T; N] {
    fn type_info() -> &'static TypeInfo {
        static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
        CELL.get_or_insert::<Self>(|| {
            let element = T::type_info();
            let name = leak_name(format!("[{}; {N}]", element.name()));
            TypeInfo::builder::<Self>(name, TypeKind::Sequence { element }).build()
        })
    }
}

impl<T: Reflect + Typed + FromValue + Clone, const N: usize> Reflect for [T; N] {
    #[inline]
    fn reflect_type_info(&self) -> &'static TypeInfo {
        <Self as Typed>::type_info()
    }

    #[inline]
    fn reflect_ref(&self) -> ReflectRef<'_> {
        ReflectRef::Sequence(self)
    }

    #[inline]
    fn reflect_mut(&mut self) -> ReflectMut<'_> {
        ReflectMut::Sequence(self)
    }

    fn to_value(&self) -> Value {
        Value::List(self.iter().map(Reflect::to_value).collect())
    }

    fn apply(&mut self, value: Value) -> Result<(), ApplyError> {
        *self = <Self as FromValue>::from_value(value)?;
        Ok(())
    }

    fn reflect_clone(&self) -> Box<dyn Reflect> {
        Box::new(self.clone())
    }

    fn reflect_partial_eq(&self, other: &dyn Reflect) -> Option<bool> {
        let Some(other) = other.downcast_ref::<Self>() else {
            return Some(false);
        };
        partial_eq_elements(self, other)
    }

    fn reflect_debug(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        debug_elements(self, f)
    }
}

impl<T: Reflect + Typed + FromValue + Clone, const N: usize> Sequence for [T; N] {
    #[inline]
    fn element_count(&self) -> usize {
        N
    }

    #[inline]
    fn element(&self, index: usize) -> Option<&dyn Reflect> {
        self.as_slice().get(index).map(|v| v as &dyn Reflect)
    }

    #[inline]
    fn element_mut(&mut self, index: usize) -> Option<&mut dyn Reflect> {
        self.as_mut_slice().get_mut(index).map(|v| v as &mut dyn Reflect)
    }

    #[inline]
    fn element_type_info(&self) -> &'static TypeInfo {
        T::type_info()
    }
}

impl<T: FromValue + Typed, const N: usize> FromValue for [T; N] {
    fn from_value(value: Value) -> Result<Self, ApplyError> {
        let items = match value {
            Value::List(items) => items,
            other => return Err(ApplyError::mismatched(&other, <Self as Typed>::type_info())),
        };
        let found = items.len();
        let items = items.into_iter().map(T::from_value).collect::<Result<Vec<T>, _>>()?;
        <[T; N]>::try_from(items).map_err(|_| ApplyError::LengthMismatch { expected: N, found })
    }
}

// -----------------------------------------------------------------------------
// Helpers

fn partial_eq_elements<T: Reflect>(a: &[T], b: &[T]) -> Option<bool> {
    if a.len() != b.len() {
        return Some(false);
    }
    for (x, y) in a.iter().zip(b) {
        if !x.reflect_partial_eq(y)? {
            return Some(false);
        }
    }
    Some(true)
}

fn debug_elements<T: Reflect>(items: &[T], f: &mut fmt::Formatter<'_>) -> fmt::Result {
    struct Item<'a, T>(&'a T);

    impl<T: Reflect> fmt::Debug for Item<'_, T> {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            self.0.reflect_debug(f)
        }
    }

    f.debug_list().entries(items.iter().map(Item)).finish()
}

#[cfg(test)]
mod tests {
    use crate::info::{TypeKind, Typed};
    use crate::value::{ApplyError, Value};
    use crate::{Reflect, Sequence};

    #[test]
    fn generic_infos_are_cached_per_instantiation() {
        let ints = <Vec<i32>>::type_info();
        let strings = <Vec<String>>::type_info();

        assert!(core::ptr::eq(ints, <Vec<i32>>::type_info()));
        assert_eq!(ints.name(), "Vec<i32>");
        assert_eq!(strings.name(), "Vec<String>");
        assert!(matches!(ints.kind(), TypeKind::Sequence { element } if element.name() == "i32"));
        assert_eq!(<[u8; 4]>::type_info().name(), "[u8; 4]");
    }

    #[test]
    fn elements_are_addressable() {
        let mut items = vec![1_u32, 2, 3];
        assert_eq!(items.element_count(), 3);
        assert!(items.element(3).is_none());

        items.element_mut(1).unwrap().apply(Value::U32(20)).unwrap();
        assert_eq!(items, [1, 20, 3]);
        assert_eq!(items.to_value(), Value::List(vec![Value::U32(1), Value::U32(20), Value::U32(3)]));
    }

    #[test]
    fn arrays_check_length() {
        let mut pair = [0_i8; 2];
        pair.apply(Value::List(vec![Value::I8(1), Value::I8(2)])).unwrap();
        assert_eq!(pair, [1, 2]);

        let err = pair.apply(Value::List(vec![Value::I8(1)])).unwrap_err();
        assert_eq!(err, ApplyError::LengthMismatch { expected: 2, found: 1 });
    }
}
