use core::any::Any;
use core::fmt;

use crate::PropertyHost;
use crate::info::TypeInfo;
use crate::value::{ApplyError, Value};

// -----------------------------------------------------------------------------
// Reflect

/// A value whose shape can be inspected and modified at runtime.
///
/// `Reflect` is implemented for the supported scalars, for `Option`,
/// `Box`, `Vec` and arrays of reflected values, by `#[derive(Reflect)]`
/// for property hosts, and by
/// [`impl_reflect_enumerated!`](crate::impl_reflect_enumerated) for
/// enumerated types.
///
/// `Option::None` reflects as [`ReflectRef::Null`], which is how a
/// missing intermediate object is detected while walking a path.
pub trait Reflect: Any + Send + Sync {
    /// Returns the info of the runtime type.
    ///
    /// For `Option<T>` and `Box<T>` this is the info of `T`.
    fn reflect_type_info(&self) -> &'static TypeInfo;

    fn reflect_ref(&self) -> ReflectRef<'_>;

    fn reflect_mut(&mut self) -> ReflectMut<'_>;

    /// Snapshots the value.
    fn to_value(&self) -> Value;

    /// Replaces the value in place.
    ///
    /// `value` must already have the runtime type of `self`, see
    /// [`FromValue`](crate::value::FromValue).
    fn apply(&mut self, value: Value) -> Result<(), ApplyError>;

    fn reflect_clone(&self) -> Box<dyn Reflect>;

    /// Compares with another reflected value.
    ///
    /// Returns `None` when the type does not support comparison.
    fn reflect_partial_eq(&self, _other: &dyn Reflect) -> Option<bool> {
        None
    }

    /// Debug formatting; prints the type name unless overridden.
    fn reflect_debug(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.reflect_type_info().name())
    }
}

impl dyn Reflect {
    #[inline]
    pub fn is<T: Reflect>(&self) -> bool {
        let any: &dyn Any = self;
        any.is::<T>()
    }

    #[inline]
    pub fn downcast_ref<T: Reflect>(&self) -> Option<&T> {
        let any: &dyn Any = self;
        any.downcast_ref::<T>()
    }

    #[inline]
    pub fn downcast_mut<T: Reflect>(&mut self) -> Option<&mut T> {
        let any: &mut dyn Any = self;
        any.downcast_mut::<T>()
    }

    /// Downcasts a boxed value, handing it back unchanged on mismatch.
    pub fn downcast<T: Reflect>(self: Box<Self>) -> Result<Box<T>, Box<dyn Reflect>> {
        if !self.is::<T>() {
            return Err(self);
        }
        let any: Box<dyn Any> = self;
        Ok(any
            .downcast::<T>()
            .unwrap_or_else(|_| unreachable!("type checked above")))
    }
}

impl fmt::Debug for dyn Reflect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.reflect_debug(f)
    }
}

// -----------------------------------------------------------------------------
// ReflectRef / ReflectMut

/// An immutable view of a reflected value, split by shape.
pub enum ReflectRef<'a> {
    /// An absent value.
    Null,
    /// A scalar, enumerated constant or other value without properties.
    Leaf(&'a dyn Reflect),
    Sequence(&'a dyn Sequence),
    Host(&'a dyn PropertyHost),
}

/// A mutable view of a reflected value, split by shape.
pub enum ReflectMut<'a> {
    Null,
    Leaf(&'a mut dyn Reflect),
    Sequence(&'a mut dyn Sequence),
    Host(&'a mut dyn PropertyHost),
}

impl ReflectRef<'_> {
    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

// -----------------------------------------------------------------------------
// Sequence

/// An indexable, fixed-type collection.
pub trait Sequence: Reflect {
    fn element_count(&self) -> usize;

    fn element(&self, index: usize) -> Option<&dyn Reflect>;

    fn element_mut(&mut self, index: usize) -> Option<&mut dyn Reflect>;

    /// The declared element type.
    fn element_type_info(&self) -> &'static TypeInfo;
}
