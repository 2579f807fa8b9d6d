use core::any::{Any, TypeId};
use std::sync::{OnceLock, PoisonError, RwLock};

use pk_utils::TypeIdMap;

use crate::info::TypeInfo;

/// Lazily initialized storage for the info of a non-generic type.
///
/// ```
/// use pk_reflect::info::{NonGenericTypeInfoCell, TypeInfo, TypeKind, Typed};
///
/// struct Marker;
///
/// impl Typed for Marker {
///     fn type_info() -> &'static TypeInfo {
///         static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
///         CELL.get_or_init(|| TypeInfo::builder::<Marker>("Marker", TypeKind::Abstract).build())
///     }
/// }
///
/// assert!(core::ptr::eq(Marker::type_info(), Marker::type_info()));
/// ```
pub struct NonGenericTypeInfoCell(OnceLock<TypeInfo>);

impl NonGenericTypeInfoCell {
    #[inline]
    pub const fn new() -> Self {
        Self(OnceLock::new())
    }

    #[inline]
    pub fn get_or_init(&'static self, f: impl FnOnce() -> TypeInfo) -> &'static TypeInfo {
        self.0.get_or_init(f)
    }
}

/// Storage for the infos of every instantiation of a generic type.
///
/// A `static` inside a generic function is shared by all of its
/// instantiations, so the cell keys the leaked infos by `TypeId`.
pub struct GenericTypeInfoCell(RwLock<TypeIdMap<&'static TypeInfo>>);

impl GenericTypeInfoCell {
    #[inline]
    pub const fn new() -> Self {
        Self(RwLock::new(TypeIdMap::new()))
    }

    /// Returns the info of `T`, building and leaking it on first use.
    ///
    /// `f` runs without the lock held, so it may request the info of
    /// other instantiations (such as an element type) from the same cell.
    pub fn get_or_insert<T: Any + ?Sized>(
        &'static self,
        f: impl FnOnce() -> TypeInfo,
    ) -> &'static TypeInfo {
        let type_id = TypeId::of::<T>();

        if let Some(info) = self.0.read().unwrap_or_else(PoisonError::into_inner).get(&type_id) {
            return *info;
        }

        let built = f();
        let mut map = self.0.write().unwrap_or_else(PoisonError::into_inner);
        if let Some(info) = map.get(&type_id) {
            return *info;
        }
        let info: &'static TypeInfo = Box::leak(Box::new(built));
        map.insert(type_id, info);
        info
    }
}

/// Leaks a formatted name for a generic instantiation.
pub(crate) fn leak_name(name: String) -> &'static str {
    Box::leak(name.into_boxed_str())
}
