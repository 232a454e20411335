//! Image Manager - CPU-side cache of decoded images
//!
//! Owned by the [`crate::Engine`] and lent to scenes and game hooks; there is
//! no global instance. Relative file paths are resolved against the
//! configured asset search paths.

use std::path::Path;

use super::{resolve_path, AssetError, Image, ResourceHandle, ResourceManager};
use crate::core::config::AssetConfig;

/// Cache of decoded [`Image`]s keyed by name
pub struct ImageManager {
    search_paths: Vec<String>,
    images: ResourceManager<Image>,
}

impl ImageManager {
    /// Create an empty image manager
    pub fn new(config: &AssetConfig) -> Self {
        Self {
            search_paths: config.search_paths.clone(),
            images: ResourceManager::new("image"),
        }
    }

    /// Cache an already decoded image under `name`
    pub fn upload_image(&mut self, name: &str, image: Image) -> Result<ResourceHandle<Image>, AssetError> {
        self.images.upload(name, image)
    }

    /// Decode an image file and cache it under `name`
    pub fn upload_file(
        &mut self,
        file_path: impl AsRef<Path>,
        name: &str,
    ) -> Result<ResourceHandle<Image>, AssetError> {
        let path = resolve_path(&self.search_paths, file_path.as_ref());
        self.images.upload_from_file(path, name)
    }

    /// Remove the image cached under `name`
    pub fn delete_image(&mut self, name: &str) {
        self.images.delete(name);
    }

    /// Drop every cached image
    pub fn clear_all_images(&mut self) {
        self.images.clear_all();
    }

    /// Handle to the image cached under `name`
    pub fn image_handle(&self, name: &str) -> Result<ResourceHandle<Image>, AssetError> {
        self.images.handle(name)
    }

    /// Resolve an image handle
    pub fn image(&self, handle: ResourceHandle<Image>) -> Result<&Image, AssetError> {
        self.images.get(handle)
    }

    /// Resolve an image by name
    pub fn image_by_name(&self, name: &str) -> Result<&Image, AssetError> {
        self.images.get_by_name(name)
    }

    /// Number of cached images
    pub fn len(&self) -> usize {
        self.images.len()
    }

    /// Whether no images are cached
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// Underlying cache, for tooling and debug views
    pub fn resources(&self) -> &ResourceManager<Image> {
        &self.images
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manager_for(dir: &Path) -> ImageManager {
        ImageManager::new(&AssetConfig {
            search_paths: vec![dir.display().to_string()],
        })
    }

    #[test]
    fn test_upload_and_lookup() {
        let mut images = ImageManager::new(&AssetConfig::default());
        let handle = images
            .upload_image("white", Image::solid_color(2, 2, [255; 4]).unwrap())
            .unwrap();

        assert_eq!(images.image(handle).unwrap().width, 2);
        assert_eq!(images.image_by_name("white").unwrap().height, 2);
        assert_eq!(images.image_handle("white").unwrap(), handle);
    }

    #[test]
    fn test_upload_file_uses_search_paths() {
        let dir = tempfile::tempdir().unwrap();
        let image = Image::solid_color(3, 1, [0, 255, 0, 255]).unwrap();
        image::save_buffer(
            dir.path().join("green.png"),
            &image.data,
            image.width,
            image.height,
            image::ColorType::Rgba8,
        )
        .unwrap();

        let mut images = manager_for(dir.path());
        let handle = images.upload_file("green.png", "green").unwrap();

        assert_eq!(images.image(handle).unwrap(), &image);
    }

    #[test]
    fn test_missing_file_leaves_cache_unchanged() {
        let dir = tempfile::tempdir().unwrap();
        let mut images = manager_for(dir.path());
        images.upload_image("kept", Image::solid_color(1, 1, [0; 4]).unwrap()).unwrap();

        let result = images.upload_file("missing.png", "missing");

        assert!(result.unwrap_err().is_load_error());
        assert_eq!(images.len(), 1);
        assert!(images.image_by_name("missing").is_err());
    }

    #[test]
    fn test_delete_and_clear() {
        let mut images = ImageManager::new(&AssetConfig::default());
        let a = images.upload_image("a", Image::solid_color(1, 1, [0; 4]).unwrap()).unwrap();
        let b = images.upload_image("b", Image::solid_color(1, 1, [0; 4]).unwrap()).unwrap();

        images.delete_image("a");
        assert!(images.image(a).unwrap_err().is_not_found());
        assert!(images.image(b).is_ok());

        images.clear_all_images();
        assert!(images.image(b).is_err());
        assert!(images.is_empty());
    }
}
