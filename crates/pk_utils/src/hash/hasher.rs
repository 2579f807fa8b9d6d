//! Provide `NoOpHasher`.
//!
//! `TypeId` already carries a high quality hash, so the hasher only
//! stores what it receives.

use core::hash::{BuildHasher, Hasher};

// -----------------------------------------------------------------------------
// NoOpHasher

/// A no-op hash that directly pass value through `u64`.
///
/// Which can be created through [`NoOpHashState::build_hasher`].
#[derive(Copy, Clone, Default, Debug)]
pub struct NoOpHasher {
    hash: u64,
}

impl Hasher for NoOpHasher {
    #[inline]
    fn finish(&self) -> u64 {
        self.hash
    }

    fn write(&mut self, bytes: &[u8]) {
        // `TypeId` hashes through `write_u64`, this path only serves other keys.
        for byte in bytes.iter().rev() {
            self.hash = self.hash.rotate_left(8).wrapping_add(*byte as u64);
        }
    }

    #[inline]
    fn write_u64(&mut self, i: u64) {
        self.hash = i;
    }
}

/// Builds [`NoOpHasher`]s.
///
/// # Examples
///
/// ```
/// use core::hash::{BuildHasher, Hasher};
/// use pk_utils::hash::NoOpHashState;
///
/// let mut hasher = NoOpHashState.build_hasher();
/// hasher.write_u64(42);
///
/// assert_eq!(hasher.finish(), 42_u64);
/// ```
#[derive(Copy, Clone, Default, Debug)]
pub struct NoOpHashState;

impl BuildHasher for NoOpHashState {
    type Hasher = NoOpHasher;

    #[inline(always)]
    fn build_hasher(&self) -> Self::Hasher {
        NoOpHasher { hash: 0 }
    }
}

#[cfg(test)]
mod tests {
    use core::any::TypeId;
    use core::hash::{BuildHasher, Hash, Hasher};

    use super::NoOpHashState;

    #[test]
    fn type_ids_keep_distinct_hashes() {
        let hash = |id: TypeId| {
            let mut hasher = NoOpHashState.build_hasher();
            id.hash(&mut hasher);
            hasher.finish()
        };

        assert_ne!(hash(TypeId::of::<u8>()), hash(TypeId::of::<i8>()));
        assert_eq!(hash(TypeId::of::<u8>()), hash(TypeId::of::<u8>()));
    }
}
