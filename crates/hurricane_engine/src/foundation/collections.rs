//! Specialized collection types

use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

pub use slotmap::{DefaultKey, Key, SlotMap};

/// Handle-based map using slot map for stable references
///
/// Slot keys are generational: once an entry is removed, keys that pointed at
/// it never resolve again, even after the slot is reused.
pub type HandleMap<T> = SlotMap<DefaultKey, T>;

/// Typed handle for type-safe resource references
///
/// The type parameter is only a tag. Traits are implemented by hand so that
/// handles stay `Copy` and comparable whatever `T` is.
pub struct TypedHandle<T> {
    key: DefaultKey,
    _phantom: PhantomData<fn() -> T>,
}

impl<T> TypedHandle<T> {
    /// Create a new typed handle from a key
    pub fn new(key: DefaultKey) -> Self {
        Self {
            key,
            _phantom: PhantomData,
        }
    }

    /// Create a handle that never resolves
    pub fn null() -> Self {
        Self::new(DefaultKey::null())
    }

    /// Get the underlying key
    pub fn key(&self) -> DefaultKey {
        self.key
    }

    /// Whether this is the null handle
    pub fn is_null(&self) -> bool {
        self.key.is_null()
    }
}

impl<T> Clone for TypedHandle<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for TypedHandle<T> {}

impl<T> PartialEq for TypedHandle<T> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl<T> Eq for TypedHandle<T> {}

impl<T> Hash for TypedHandle<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key.hash(state);
    }
}

impl<T> Default for TypedHandle<T> {
    fn default() -> Self {
        Self::null()
    }
}

impl<T> fmt::Debug for TypedHandle<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypedHandle")
            .field("key", &self.key)
            .field("type", &std::any::type_name::<T>())
            .finish()
    }
}
