use core::any::Any;
use core::fmt;

use pk_utils::TypeIdMap;

/// Marker for data stored in a [`TypeTraitTable`].
pub trait TypeTrait: Any + Send + Sync {}

impl dyn TypeTrait {
    #[inline]
    pub fn downcast_ref<T: TypeTrait>(&self) -> Option<&T> {
        let any: &dyn Any = self;
        any.downcast_ref::<T>()
    }
}

/// Type traits keyed by their own `TypeId`.
#[derive(Default)]
pub struct TypeTraitTable(TypeIdMap<Box<dyn TypeTrait>>);

impl TypeTraitTable {
    #[inline]
    pub const fn new() -> Self {
        Self(TypeIdMap::new())
    }

    #[inline]
    pub fn insert<T: TypeTrait>(&mut self, data: T) {
        self.0.insert_type::<T>(Box::new(data));
    }

    #[inline]
    pub fn get<T: TypeTrait>(&self) -> Option<&T> {
        self.0.get_type::<T>().and_then(|data| data.downcast_ref::<T>())
    }

    #[inline]
    pub fn contains<T: TypeTrait>(&self) -> bool {
        self.0.get_type::<T>().is_some()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl fmt::Debug for TypeTraitTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeTraitTable").field("len", &self.0.len()).finish()
    }
}
