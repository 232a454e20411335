//! Resource Manager - name-keyed owning cache for one resource type
//!
//! The manager owns every resource it holds. Callers only ever get handles
//! and short-lived borrows; a borrow cannot outlive the next mutation of the
//! manager, which the borrow checker enforces.
//!
//! **Duplicate names**: uploading under a name that is already cached
//! replaces the old resource. The old resource is dropped, handles issued for
//! it go stale and resolve to [`AssetError::NotFound`], and the returned
//! handle resolves to the new resource.
//!
//! **Stale handles**: entries are stored in a generational slot map, so a
//! handle to a deleted entry never resolves to whatever reuses its slot.

use std::collections::HashMap;
use std::path::Path;

use super::handle::{CacheId, ResourceHandle};
use super::{Asset, AssetError};
use crate::foundation::collections::{DefaultKey, HandleMap};

struct Entry<T> {
    name: String,
    resource: T,
}

/// Generic cache owning resources of type `T`, keyed by name
pub struct ResourceManager<T> {
    id: CacheId,
    label: &'static str,
    names: HashMap<String, DefaultKey>,
    entries: HandleMap<Entry<T>>,
}

impl<T> ResourceManager<T> {
    /// Create an empty manager
    ///
    /// `label` names the resource kind in log output (e.g. `"image"`).
    pub fn new(label: &'static str) -> Self {
        Self {
            id: CacheId::next(),
            label,
            names: HashMap::new(),
            entries: HandleMap::new(),
        }
    }

    /// Store `resource` under `name` and return a handle to it
    ///
    /// Replaces any resource already cached under `name`.
    pub fn upload(&mut self, name: &str, resource: T) -> Result<ResourceHandle<T>, AssetError> {
        validate_name(name)?;

        if let Some(old_key) = self.names.remove(name) {
            self.entries.remove(old_key);
            log::debug!("Replacing {} '{}'", self.label, name);
        }

        let key = self.entries.insert(Entry {
            name: name.to_string(),
            resource,
        });
        self.names.insert(name.to_string(), key);

        log::trace!("Uploaded {} '{}' ({} cached)", self.label, name, self.len());
        Ok(ResourceHandle::new(self.id, key))
    }

    /// Read `path`, decode it with `decode`, and upload the result under `name`
    ///
    /// Nothing is inserted unless both reading and decoding succeed.
    pub fn upload_from_file_with<F>(
        &mut self,
        path: impl AsRef<Path>,
        name: &str,
        decode: F,
    ) -> Result<ResourceHandle<T>, AssetError>
    where
        F: FnOnce(&[u8]) -> Result<T, AssetError>,
    {
        validate_name(name)?;
        let path = path.as_ref();

        let bytes = std::fs::read(path).map_err(|e| AssetError::LoadFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

        let resource = decode(&bytes).map_err(|e| match e {
            AssetError::LoadFailed { .. } => e,
            other => AssetError::LoadFailed {
                path: path.display().to_string(),
                reason: other.to_string(),
            },
        })?;

        log::debug!("Loaded {} '{}' from {}", self.label, name, path.display());
        self.upload(name, resource)
    }

    /// Remove the resource cached under `name`, returning it
    ///
    /// Absent names are not an error. Handles to the removed resource go stale.
    pub fn delete(&mut self, name: &str) -> Option<T> {
        let key = self.names.remove(name)?;
        let entry = self.entries.remove(key)?;
        log::debug!("Deleted {} '{}'", self.label, name);
        Some(entry.resource)
    }

    /// Drop every cached resource
    pub fn clear_all(&mut self) {
        let count = self.len();
        self.names.clear();
        self.entries.clear();
        if count > 0 {
            log::debug!("Cleared {} {} resource(s)", count, self.label);
        }
    }

    /// Remove every cached resource and hand them back with their names
    ///
    /// Used when releasing a resource needs a collaborator, such as returning
    /// GPU objects to the renderer.
    pub fn drain(&mut self) -> Vec<(String, T)> {
        self.names.clear();
        self.entries
            .drain()
            .map(|(_, entry)| (entry.name, entry.resource))
            .collect()
    }

    /// Get a handle to the resource currently cached under `name`
    ///
    /// Fails with [`AssetError::NotFound`] when nothing is cached under `name`.
    pub fn handle(&self, name: &str) -> Result<ResourceHandle<T>, AssetError> {
        self.names
            .get(name)
            .map(|key| ResourceHandle::new(self.id, *key))
            .ok_or_else(|| self.not_found(name))
    }

    /// Resolve a handle to the resource it refers to
    pub fn get(&self, handle: ResourceHandle<T>) -> Result<&T, AssetError> {
        self.entry_key(handle)
            .and_then(|key| self.entries.get(key))
            .map(|entry| &entry.resource)
            .ok_or_else(|| self.stale(handle))
    }

    /// Resolve a handle to a mutable reference
    pub fn get_mut(&mut self, handle: ResourceHandle<T>) -> Result<&mut T, AssetError> {
        match self.entry_key(handle) {
            Some(key) if self.entries.contains_key(key) => {
                Ok(&mut self.entries[key].resource)
            }
            _ => Err(self.stale(handle)),
        }
    }

    /// Resolve a resource directly by name
    pub fn get_by_name(&self, name: &str) -> Result<&T, AssetError> {
        self.names
            .get(name)
            .and_then(|key| self.entries.get(*key))
            .map(|entry| &entry.resource)
            .ok_or_else(|| self.not_found(name))
    }

    /// Resolve a resource mutably by name
    pub fn get_by_name_mut(&mut self, name: &str) -> Result<&mut T, AssetError> {
        match self.names.get(name) {
            Some(key) => self
                .entries
                .get_mut(*key)
                .map(|entry| &mut entry.resource)
                .ok_or_else(|| AssetError::NotFound(name.to_string())),
            None => Err(self.not_found(name)),
        }
    }

    /// Name the handle's resource is cached under, if it is still live
    pub fn name_of(&self, handle: ResourceHandle<T>) -> Option<&str> {
        self.entry_key(handle)
            .and_then(|key| self.entries.get(key))
            .map(|entry| entry.name.as_str())
    }

    /// Whether a resource is cached under `name`
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains_key(name)
    }

    /// Whether `handle` still resolves
    pub fn is_valid(&self, handle: ResourceHandle<T>) -> bool {
        self.get(handle).is_ok()
    }

    /// Number of cached resources
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the cache is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Names of all cached resources, in no particular order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.keys().map(String::as_str)
    }

    fn entry_key(&self, handle: ResourceHandle<T>) -> Option<DefaultKey> {
        (handle.cache_id() == self.id).then(|| handle.key())
    }

    fn not_found(&self, name: &str) -> AssetError {
        AssetError::NotFound(format!("{} '{}'", self.label, name))
    }

    fn stale(&self, handle: ResourceHandle<T>) -> AssetError {
        AssetError::NotFound(format!("{} for {:?}", self.label, handle))
    }
}

impl<T: Asset> ResourceManager<T> {
    /// Read and decode `path` as `T`, then upload it under `name`
    pub fn upload_from_file(
        &mut self,
        path: impl AsRef<Path>,
        name: &str,
    ) -> Result<ResourceHandle<T>, AssetError> {
        self.upload_from_file_with(path, name, T::from_bytes)
    }
}

impl<T> Default for ResourceManager<T> {
    fn default() -> Self {
        Self::new("resource")
    }
}

impl<T> Drop for ResourceManager<T> {
    fn drop(&mut self) {
        if !self.is_empty() {
            log::trace!("Releasing {} cached {} resource(s)", self.len(), self.label);
        }
    }
}

/// Reject names that cannot key a cache entry
pub(crate) fn validate_name(name: &str) -> Result<(), AssetError> {
    if name.is_empty() {
        Err(AssetError::InvalidName(name.to_string()))
    } else {
        Ok(())
    }
}

// ============================================================================
// UNIT TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Blob(Vec<u8>);

    impl Asset for Blob {
        fn from_bytes(bytes: &[u8]) -> Result<Self, AssetError> {
            if bytes.starts_with(b"BLOB") {
                Ok(Self(bytes[4..].to_vec()))
            } else {
                Err(AssetError::InvalidData("missing BLOB magic".to_string()))
            }
        }
    }

    fn names_of<T>(rm: &ResourceManager<T>) -> Vec<String> {
        let mut names: Vec<String> = rm.names().map(str::to_string).collect();
        names.sort();
        names
    }

    #[test]
    fn test_upload_then_resolve() {
        let mut rm = ResourceManager::new("blob");
        let handle = rm.upload("hero", Blob(vec![1, 2, 3])).unwrap();

        assert_eq!(rm.get(handle).unwrap(), &Blob(vec![1, 2, 3]));
        assert_eq!(rm.get_by_name("hero").unwrap(), &Blob(vec![1, 2, 3]));
        assert_eq!(rm.name_of(handle), Some("hero"));
        assert_eq!(rm.len(), 1);
    }

    #[test]
    fn test_empty_name_is_rejected() {
        let mut rm = ResourceManager::new("blob");
        let result = rm.upload("", Blob(vec![]));
        assert!(matches!(result, Err(AssetError::InvalidName(_))));
        assert!(rm.is_empty());
    }

    #[test]
    fn test_delete_makes_handles_stale() {
        let mut rm = ResourceManager::new("blob");
        let handle = rm.upload("hero", Blob(vec![1])).unwrap();

        assert_eq!(rm.delete("hero"), Some(Blob(vec![1])));
        assert!(rm.get(handle).unwrap_err().is_not_found());
        assert!(rm.get_by_name("hero").unwrap_err().is_not_found());
        assert!(!rm.is_valid(handle));
    }

    #[test]
    fn test_delete_absent_name_is_noop() {
        let mut rm: ResourceManager<Blob> = ResourceManager::new("blob");
        rm.upload("hero", Blob(vec![1])).unwrap();

        assert_eq!(rm.delete("villain"), None);
        assert_eq!(rm.len(), 1);
    }

    #[test]
    fn test_stale_handle_does_not_alias_reused_slot() {
        let mut rm = ResourceManager::new("blob");
        let old = rm.upload("a", Blob(vec![1])).unwrap();
        rm.delete("a");
        let new = rm.upload("b", Blob(vec![2])).unwrap();

        assert!(rm.get(old).is_err());
        assert_eq!(rm.get(new).unwrap(), &Blob(vec![2]));
    }

    #[test]
    fn test_clear_all_invalidates_everything() {
        let mut rm = ResourceManager::new("blob");
        let a = rm.upload("a", Blob(vec![1])).unwrap();
        let b = rm.upload("b", Blob(vec![2])).unwrap();

        rm.clear_all();

        assert!(rm.is_empty());
        assert!(rm.get(a).is_err());
        assert!(rm.get(b).is_err());
        assert!(rm.get_by_name("a").is_err());
        assert!(rm.handle("b").is_err());
    }

    #[test]
    fn test_duplicate_upload_replaces_and_invalidates_old_handles() {
        let mut rm = ResourceManager::new("blob");
        let old = rm.upload("hero", Blob(vec![1])).unwrap();
        let new = rm.upload("hero", Blob(vec![2])).unwrap();

        assert_ne!(old, new);
        assert!(rm.get(old).unwrap_err().is_not_found());
        assert_eq!(rm.get(new).unwrap(), &Blob(vec![2]));
        assert_eq!(rm.get_by_name("hero").unwrap(), &Blob(vec![2]));
        assert_eq!(rm.len(), 1);
    }

    #[test]
    fn test_handle_lookup_requires_existing_name() {
        let mut rm: ResourceManager<Blob> = ResourceManager::new("blob");
        assert!(rm.handle("hero").unwrap_err().is_not_found());

        let uploaded = rm.upload("hero", Blob(vec![1])).unwrap();
        assert_eq!(rm.handle("hero").unwrap(), uploaded);
    }

    #[test]
    fn test_handle_from_other_cache_does_not_resolve() {
        let mut first = ResourceManager::new("blob");
        let mut second = ResourceManager::new("blob");
        let handle = first.upload("hero", Blob(vec![1])).unwrap();
        second.upload("hero", Blob(vec![9])).unwrap();

        assert!(second.get(handle).is_err());
    }

    #[test]
    fn test_get_mut_edits_in_place() {
        let mut rm = ResourceManager::new("blob");
        let handle = rm.upload("hero", Blob(vec![1])).unwrap();

        rm.get_mut(handle).unwrap().0.push(2);
        rm.get_by_name_mut("hero").unwrap().0.push(3);

        assert_eq!(rm.get(handle).unwrap(), &Blob(vec![1, 2, 3]));
    }

    #[test]
    fn test_upload_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hero.blob");
        std::fs::write(&path, b"BLOB\x07").unwrap();

        let mut rm: ResourceManager<Blob> = ResourceManager::new("blob");
        let handle = rm.upload_from_file(&path, "hero").unwrap();
        assert_eq!(rm.get(handle).unwrap(), &Blob(vec![7]));
    }

    #[test]
    fn test_missing_file_is_load_error_without_insert() {
        let mut rm = ResourceManager::new("blob");
        rm.upload("existing", Blob(vec![1])).unwrap();

        let result = rm.upload_from_file("definitely/not/here.blob", "hero");

        assert!(result.unwrap_err().is_load_error());
        assert_eq!(names_of(&rm), vec!["existing".to_string()]);
    }

    #[test]
    fn test_corrupt_file_is_load_error_without_insert() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("corrupt.blob");
        std::fs::write(&path, b"nope").unwrap();

        let mut rm: ResourceManager<Blob> = ResourceManager::new("blob");
        let result = rm.upload_from_file(&path, "hero");

        assert!(result.unwrap_err().is_load_error());
        assert!(rm.is_empty());
    }

    #[test]
    fn test_failed_reload_keeps_previous_resource() {
        let mut rm = ResourceManager::new("blob");
        let handle = rm.upload("hero", Blob(vec![1])).unwrap();

        assert!(rm.upload_from_file("missing.blob", "hero").is_err());
        assert_eq!(rm.get(handle).unwrap(), &Blob(vec![1]));
    }

    #[test]
    fn test_drain_returns_everything() {
        let mut rm = ResourceManager::new("blob");
        let handle = rm.upload("a", Blob(vec![1])).unwrap();
        rm.upload("b", Blob(vec![2])).unwrap();

        let mut drained: Vec<String> = rm.drain().into_iter().map(|(name, _)| name).collect();
        drained.sort();

        assert_eq!(drained, vec!["a".to_string(), "b".to_string()]);
        assert!(rm.is_empty());
        assert!(rm.get(handle).is_err());
    }
}
