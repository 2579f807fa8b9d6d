//! Provide hash containers keyed by [`TypeId`], re-exports *hashbrown*.
//!
//! [`TypeId`]: core::any::TypeId

// -----------------------------------------------------------------------------
// Modules

mod hasher;

// -----------------------------------------------------------------------------
// Exports

pub use hasher::{NoOpHashState, NoOpHasher};

/// A [`hashbrown::HashMap`] using [`NoOpHashState`] by default.
///
/// Only suitable for keys that are already well distributed, such as `TypeId`.
pub type NoOpHashMap<K, V> = hashbrown::HashMap<K, V, NoOpHashState>;

/// A [`hashbrown::HashSet`] using [`NoOpHashState`] by default.
pub type NoOpHashSet<K> = hashbrown::HashSet<K, NoOpHashState>;

// -----------------------------------------------------------------------------
// Re-export crates

pub use hashbrown;
