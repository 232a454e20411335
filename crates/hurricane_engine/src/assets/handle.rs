//! Resource handles
//!
//! A [`ResourceHandle`] names a slot in one particular [`super::ResourceManager`].
//! It carries the id of the cache that issued it, so resolving it against any
//! other cache misses instead of aliasing an unrelated resource.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::atomic::{AtomicU64, Ordering};

use crate::foundation::collections::{DefaultKey, TypedHandle};

static NEXT_CACHE_ID: AtomicU64 = AtomicU64::new(1);

/// Identity of a resource cache instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CacheId(u64);

impl CacheId {
    /// Allocate a process-unique cache id
    pub(crate) fn next() -> Self {
        Self(NEXT_CACHE_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// Opaque, copyable reference to a cached resource of type `T`
pub struct ResourceHandle<T> {
    cache: CacheId,
    slot: TypedHandle<T>,
}

impl<T> ResourceHandle<T> {
    pub(crate) fn new(cache: CacheId, key: DefaultKey) -> Self {
        Self {
            cache,
            slot: TypedHandle::new(key),
        }
    }

    /// The cache that issued this handle
    pub fn cache_id(&self) -> CacheId {
        self.cache
    }

    pub(crate) fn key(&self) -> DefaultKey {
        self.slot.key()
    }
}

impl<T> Clone for ResourceHandle<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for ResourceHandle<T> {}

impl<T> PartialEq for ResourceHandle<T> {
    fn eq(&self, other: &Self) -> bool {
        self.cache == other.cache && self.slot == other.slot
    }
}

impl<T> Eq for ResourceHandle<T> {}

impl<T> Hash for ResourceHandle<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.cache.hash(state);
        self.slot.hash(state);
    }
}

impl<T> fmt::Debug for ResourceHandle<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResourceHandle")
            .field("cache", &self.cache)
            .field("slot", &self.slot.key())
            .finish()
    }
}
