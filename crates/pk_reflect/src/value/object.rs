use core::fmt;

use crate::Reflect;
use crate::info::TypeInfo;

/// A reflected value carried inside a [`Value`](crate::value::Value).
///
/// Cloning goes through [`Reflect::reflect_clone`], equality through
/// [`Reflect::reflect_partial_eq`] (`false` when unsupported) and
/// formatting through [`Reflect::reflect_debug`].
pub struct ObjectValue(Box<dyn Reflect>);

impl ObjectValue {
    #[inline]
    pub fn new<T: Reflect>(value: T) -> Self {
        Self(Box::new(value))
    }

    #[inline]
    pub fn from_boxed(value: Box<dyn Reflect>) -> Self {
        Self(value)
    }

    #[inline]
    pub fn type_info(&self) -> &'static TypeInfo {
        self.0.reflect_type_info()
    }

    #[inline]
    pub fn as_reflect(&self) -> &dyn Reflect {
        &*self.0
    }

    #[inline]
    pub fn as_reflect_mut(&mut self) -> &mut dyn Reflect {
        &mut *self.0
    }

    #[inline]
    pub fn into_inner(self) -> Box<dyn Reflect> {
        self.0
    }

    #[inline]
    pub fn downcast_ref<T: Reflect>(&self) -> Option<&T> {
        self.0.downcast_ref::<T>()
    }

    /// Moves the wrapped value out if it is a `T`.
    pub fn take<T: Reflect>(self) -> Result<T, Self> {
        self.0.downcast::<T>().map(|boxed| *boxed).map_err(Self)
    }
}

impl Clone for ObjectValue {
    fn clone(&self) -> Self {
        Self(self.0.reflect_clone())
    }
}

impl PartialEq for ObjectValue {
    fn eq(&self, other: &Self) -> bool {
        self.0.reflect_partial_eq(other.as_reflect()).unwrap_or(false)
    }
}

impl fmt::Debug for ObjectValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.reflect_debug(f)
    }
}

impl fmt::Display for ObjectValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.reflect_debug(f)
    }
}
