//! Texture Management
//!
//! Name-keyed cache of uploaded textures. Creating a texture decodes the image
//! on the CPU and hands the pixels to the [`Renderer`]; deleting one returns
//! the texture object to the renderer. Replacing a cached name releases the
//! old texture object before the new one is stored.

use std::path::Path;

use super::{Renderer, Texture, TextureParams};
use crate::assets::resource_manager::validate_name;
use crate::assets::{resolve_path, AssetError, Image, ResourceHandle, ResourceManager};
use crate::core::config::AssetConfig;

/// Cache of GPU [`Texture`]s keyed by name
pub struct TextureManager {
    search_paths: Vec<String>,
    textures: ResourceManager<Texture>,
}

impl TextureManager {
    /// Create an empty texture manager
    pub fn new(config: &AssetConfig) -> Self {
        Self {
            search_paths: config.search_paths.clone(),
            textures: ResourceManager::new("texture"),
        }
    }

    /// Cache a texture object the renderer already created
    pub fn upload_texture(
        &mut self,
        renderer: &mut dyn Renderer,
        name: &str,
        texture: Texture,
    ) -> Result<ResourceHandle<Texture>, AssetError> {
        validate_name(name)?;
        self.delete_texture(renderer, name);
        self.textures.upload(name, texture)
    }

    /// Upload decoded pixels to the renderer and cache the result under `name`
    pub fn create_texture(
        &mut self,
        renderer: &mut dyn Renderer,
        name: &str,
        image: &Image,
        params: TextureParams,
    ) -> Result<ResourceHandle<Texture>, AssetError> {
        validate_name(name)?;

        let id = renderer
            .create_texture(image, &params)
            .map_err(|e| AssetError::InvalidData(format!("texture '{name}': {e}")))?;

        let texture = Texture {
            id,
            width: image.width,
            height: image.height,
            params,
        };
        self.upload_texture(renderer, name, texture)
    }

    /// Decode an image file, upload it, and cache the texture under `name`
    ///
    /// Fails with [`AssetError::LoadFailed`] if the file is missing, cannot be
    /// decoded, or the renderer rejects it. The cache is unchanged on failure.
    pub fn upload_texture_from_file(
        &mut self,
        renderer: &mut dyn Renderer,
        file_path: impl AsRef<Path>,
        name: &str,
        params: TextureParams,
    ) -> Result<ResourceHandle<Texture>, AssetError> {
        validate_name(name)?;
        let path = resolve_path(&self.search_paths, file_path.as_ref());

        let image = Image::from_file(&path)?;
        self.create_texture(renderer, name, &image, params)
            .map_err(|e| match e {
                AssetError::InvalidData(reason) => AssetError::LoadFailed {
                    path: path.display().to_string(),
                    reason,
                },
                other => other,
            })
    }

    /// Remove the texture cached under `name` and release its texture object
    pub fn delete_texture(&mut self, renderer: &mut dyn Renderer, name: &str) {
        if let Some(texture) = self.textures.delete(name) {
            renderer.destroy_texture(texture.id);
        }
    }

    /// Release every cached texture
    pub fn clear_all_textures(&mut self, renderer: &mut dyn Renderer) {
        let drained = self.textures.drain();
        if !drained.is_empty() {
            log::debug!("Releasing {} texture(s) from {}", drained.len(), renderer.name());
        }
        for (_, texture) in drained {
            renderer.destroy_texture(texture.id);
        }
    }

    /// Handle to the texture cached under `name`
    pub fn texture_handle(&self, name: &str) -> Result<ResourceHandle<Texture>, AssetError> {
        self.textures.handle(name)
    }

    /// Resolve a texture handle
    pub fn texture(&self, handle: ResourceHandle<Texture>) -> Result<&Texture, AssetError> {
        self.textures.get(handle)
    }

    /// Resolve a texture by name
    pub fn texture_by_name(&self, name: &str) -> Result<&Texture, AssetError> {
        self.textures.get_by_name(name)
    }

    /// Get number of loaded textures
    pub fn texture_count(&self) -> usize {
        self.textures.len()
    }

    /// Underlying cache, for tooling and debug views
    pub fn resources(&self) -> &ResourceManager<Texture> {
        &self.textures
    }
}
