use core::any::TypeId;
use core::fmt::Debug;

use crate::hash::hashbrown::hash_map::Entry;
use crate::hash::{NoOpHashMap, NoOpHashSet, NoOpHashState};

// -----------------------------------------------------------------------------
// TypeIdMap

/// A map with [`TypeId`] as the fixed key type.
///
/// Registries in `pk_reflect` key converters, renderers and type traits
/// by the `TypeId` of the type they serve, so lookups never hash more
/// than the id itself.
///
/// # Examples
///
/// ```
/// use pk_utils::TypeIdMap;
///
/// let mut map = TypeIdMap::new();
/// map.insert_type::<u32>("u32");
///
/// assert_eq!(map.get_type::<u32>(), Some(&"u32"));
/// assert!(map.get_type::<i32>().is_none());
/// ```
pub struct TypeIdMap<V>(NoOpHashMap<TypeId, V>);

impl<V> TypeIdMap<V> {
    /// Creates an empty `TypeIdMap`.
    #[inline]
    pub const fn new() -> Self {
        Self(NoOpHashMap::with_hasher(NoOpHashState))
    }

    /// Creates an empty `TypeIdMap` with the specified capacity.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self(NoOpHashMap::with_capacity_and_hasher(capacity, NoOpHashState))
    }

    /// Attempts to insert a key-value pair into the map.
    ///
    /// - Returns `true` if the key was not present and the pair was inserted.
    /// - Returns `false` if the key already exists, leaving the map unchanged.
    ///
    /// The closure `f` is only called if the key is not present.
    #[inline]
    pub fn try_insert(&mut self, type_id: TypeId, f: impl FnOnce() -> V) -> bool {
        match self.0.entry(type_id) {
            Entry::Vacant(entry) => {
                entry.insert(f());
                true
            }
            Entry::Occupied(_) => false,
        }
    }

    /// Returns a reference to the value corresponding to the key.
    #[inline]
    pub fn get(&self, type_id: &TypeId) -> Option<&V> {
        self.0.get(type_id)
    }

    /// Returns a reference to the value corresponding to the type.
    #[inline(always)]
    pub fn get_type<T: ?Sized + 'static>(&self) -> Option<&V> {
        self.get(&TypeId::of::<T>())
    }

    /// Returns a mutable reference to the value corresponding to the key.
    #[inline]
    pub fn get_mut(&mut self, type_id: &TypeId) -> Option<&mut V> {
        self.0.get_mut(type_id)
    }

    /// Inserts a key-value pair, returning the replaced value if any.
    #[inline]
    pub fn insert(&mut self, type_id: TypeId, v: V) -> Option<V> {
        self.0.insert(type_id, v)
    }

    /// Inserts a value keyed by the type `T`.
    #[inline(always)]
    pub fn insert_type<T: ?Sized + 'static>(&mut self, v: V) -> Option<V> {
        self.insert(TypeId::of::<T>(), v)
    }

    /// Removes a key from the map, returning the value if it was present.
    #[inline]
    pub fn remove(&mut self, type_id: &TypeId) -> Option<V> {
        self.0.remove(type_id)
    }

    /// Clears the map, keeping the allocated memory for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Returns `true` if the map contains a value for the specified key.
    #[inline]
    pub fn contains(&self, type_id: &TypeId) -> bool {
        self.0.contains_key(type_id)
    }

    /// Returns the number of elements in the map.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the map contains no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// An iterator visiting all key-value pairs in arbitrary order.
    #[inline]
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&TypeId, &V)> {
        self.0.iter()
    }

    /// An iterator visiting all values in arbitrary order.
    #[inline]
    pub fn values(&self) -> impl ExactSizeIterator<Item = &V> {
        self.0.values()
    }
}

impl<V> Default for TypeIdMap<V> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Clone> Clone for TypeIdMap<V> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<V: Debug> Debug for TypeIdMap<V> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        Debug::fmt(&self.0, f)
    }
}

// -----------------------------------------------------------------------------
// TypeIdSet

/// A set of [`TypeId`]s, used to track visited types during hierarchy walks.
#[derive(Clone, Debug, Default)]
pub struct TypeIdSet(NoOpHashSet<TypeId>);

impl TypeIdSet {
    /// Creates an empty `TypeIdSet`.
    #[inline]
    pub const fn new() -> Self {
        Self(NoOpHashSet::with_hasher(NoOpHashState))
    }

    /// Adds an id, returning whether it was newly inserted.
    #[inline]
    pub fn insert(&mut self, type_id: TypeId) -> bool {
        self.0.insert(type_id)
    }

    /// Returns `true` if the set contains the id.
    #[inline]
    pub fn contains(&self, type_id: &TypeId) -> bool {
        self.0.contains(type_id)
    }

    /// Returns the number of ids in the set.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }
}

#[cfg(test)]
mod tests {
    use core::any::TypeId;

    use super::{TypeIdMap, TypeIdSet};

    #[test]
    fn try_insert_keeps_first_value() {
        let mut map = TypeIdMap::new();
        assert!(map.try_insert(TypeId::of::<u8>(), || 1));
        assert!(!map.try_insert(TypeId::of::<u8>(), || 2));
        assert_eq!(map.get_type::<u8>(), Some(&1));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn insert_replaces_and_remove_reports() {
        let mut map = TypeIdMap::new();
        assert_eq!(map.insert_type::<u8>(1), None);
        assert_eq!(map.insert_type::<u8>(2), Some(1));
        assert_eq!(map.remove(&TypeId::of::<u8>()), Some(2));
        assert!(map.is_empty());
    }

    #[test]
    fn set_tracks_visits() {
        let mut set = TypeIdSet::new();
        assert!(set.insert(TypeId::of::<u8>()));
        assert!(!set.insert(TypeId::of::<u8>()));
        assert!(set.contains(&TypeId::of::<u8>()));
        assert_eq!(set.len(), 1);
    }
}
