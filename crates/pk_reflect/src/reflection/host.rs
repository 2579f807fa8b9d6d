use crate::reflection::{PropertyDescriptor, Reflect, ReflectRef};
use crate::value::Value;

/// A reflected value exposing named properties.
///
/// Usually implemented by `#[derive(Reflect)]`. A manual implementation
/// returns a `'static` descriptor table, typically a `static` item inside
/// [`descriptors`](PropertyHost::descriptors).
pub trait PropertyHost: Reflect {
    /// Every declared property, in declaration order.
    fn descriptors(&self) -> &'static [PropertyDescriptor];

    /// Finds a property by exact name.
    fn descriptor(&self, name: &str) -> Option<&'static PropertyDescriptor> {
        self.descriptors().iter().find(|descriptor| descriptor.name() == name)
    }
}

impl dyn PropertyHost {
    #[inline]
    pub fn downcast_ref<T: PropertyHost>(&self) -> Option<&T> {
        let reflect: &dyn Reflect = self;
        reflect.downcast_ref::<T>()
    }

    #[inline]
    pub fn downcast_mut<T: PropertyHost>(&mut self) -> Option<&mut T> {
        let reflect: &mut dyn Reflect = self;
        reflect.downcast_mut::<T>()
    }
}

/// The result of a property read.
///
/// Stored fields are lent out; computed properties return an owned
/// snapshot.
pub enum Slot<'a> {
    Borrowed(&'a dyn Reflect),
    Owned(Value),
}

impl Slot<'_> {
    pub fn is_null(&self) -> bool {
        match self {
            Self::Borrowed(value) => matches!(value.reflect_ref(), ReflectRef::Null),
            Self::Owned(value) => value.is_null(),
        }
    }

    pub fn into_value(self) -> Value {
        match self {
            Self::Borrowed(value) => value.to_value(),
            Self::Owned(value) => value,
        }
    }
}
