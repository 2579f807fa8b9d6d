use crate::Reflect;
use crate::info::Typed;
use crate::type_traits::{FromType, TypeTrait};

/// Entity types that can be instantiated from a numeric id.
///
/// Reflected hosts opt in with `#[reflect(identity)]`, which adds the
/// [`Identity`](crate::info::Identity) capability and a
/// [`TypeTraitFromId`] to the type's info.
pub trait Identifiable: Reflect + Typed + Sized {
    /// Creates a detached instance carrying only `id`.
    fn from_id(id: i64) -> Self;

    /// Returns the id, or `None` for an unsaved instance.
    fn id(&self) -> Option<i64>;
}

/// Builds instances of an [`Identifiable`] type from a numeric id.
#[derive(Clone, Copy)]
pub struct TypeTraitFromId {
    from_id: fn(i64) -> Box<dyn Reflect>,
    id_of: fn(&dyn Reflect) -> Option<i64>,
}

impl TypeTraitFromId {
    #[inline]
    pub fn from_id(&self, id: i64) -> Box<dyn Reflect> {
        (self.from_id)(id)
    }

    /// Returns the id of `value`, or `None` if it is unsaved or of
    /// another type.
    #[inline]
    pub fn id_of(&self, value: &dyn Reflect) -> Option<i64> {
        (self.id_of)(value)
    }
}

impl TypeTrait for TypeTraitFromId {}

impl<T: Identifiable> FromType<T> for TypeTraitFromId {
    fn from_type() -> Self {
        Self {
            from_id: |id| Box::new(T::from_id(id)),
            id_of: |value| value.downcast_ref::<T>().and_then(T::id),
        }
    }
}
