//! Asset management system
//!
//! Assets live in name-keyed caches ([`ResourceManager`]) that own every
//! resource and hand out lightweight [`ResourceHandle`]s. The typed managers
//! ([`ImageManager`], and [`crate::render::TextureManager`] on the GPU side)
//! add file loading on top of the generic cache.

pub mod handle;
pub mod image_loader;
pub mod image_manager;
pub mod resource_manager;

pub use handle::ResourceHandle;
pub use image_loader::Image;
pub use image_manager::ImageManager;
pub use resource_manager::ResourceManager;

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Asset trait for resources that can be decoded from raw file bytes
pub trait Asset: Sized {
    /// Load asset from raw bytes
    fn from_bytes(bytes: &[u8]) -> Result<Self, AssetError>;
}

/// Resolve a relative asset path against the configured search paths
///
/// The first search path containing the file wins. Absolute paths, and paths
/// not found under any search path, are returned unchanged.
pub fn resolve_path(search_paths: &[String], path: &Path) -> PathBuf {
    if path.is_absolute() {
        return path.to_path_buf();
    }

    search_paths
        .iter()
        .map(|search_path| Path::new(search_path).join(path))
        .find(|candidate| candidate.exists())
        .unwrap_or_else(|| path.to_path_buf())
}

/// Asset loading and lookup errors
#[derive(Error, Debug)]
pub enum AssetError {
    /// No resource under this name, or the handle is stale
    #[error("Asset not found: {0}")]
    NotFound(String),

    /// Failed to read or decode an asset file
    #[error("Failed to load asset from {path}: {reason}")]
    LoadFailed {
        /// Path that was being loaded
        path: String,
        /// Why the load failed
        reason: String,
    },

    /// Resource names must be non-empty
    #[error("Invalid resource name: {0:?}")]
    InvalidName(String),

    /// Bytes could not be decoded into the asset type
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

impl AssetError {
    /// Whether this error means the asset was never cached because loading failed
    pub fn is_load_error(&self) -> bool {
        matches!(self, Self::LoadFailed { .. })
    }

    /// Whether this error is a lookup miss
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_prefers_search_path() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("textures")).unwrap();
        std::fs::write(dir.path().join("textures").join("grass.png"), b"x").unwrap();

        let search = vec![
            dir.path().join("missing").display().to_string(),
            dir.path().display().to_string(),
        ];
        let resolved = resolve_path(&search, Path::new("textures/grass.png"));
        assert_eq!(resolved, dir.path().join("textures").join("grass.png"));
    }

    #[test]
    fn test_resolve_falls_back_to_given_path() {
        let resolved = resolve_path(&["resources".to_string()], Path::new("nowhere.png"));
        assert_eq!(resolved, PathBuf::from("nowhere.png"));
    }
}
