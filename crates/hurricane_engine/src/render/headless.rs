//! Headless rendering backend
//!
//! Draws nothing. It hands out texture ids, tracks which are still live and
//! counts frame calls, which is enough for tools, servers and tests.

use std::collections::HashSet;

use super::{PrimitiveType, RenderError, Renderer, TextureId, TextureParams};
use crate::assets::Image;
use crate::core::config::WindowConfig;

/// Renderer that records calls instead of drawing
#[derive(Debug, Default)]
pub struct HeadlessRenderer {
    next_texture: u32,
    live_textures: HashSet<TextureId>,
    last_primitive: Option<PrimitiveType>,
    primitive_calls: u64,
    flushes: u64,
}

impl HeadlessRenderer {
    /// Create a new headless renderer
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `id` was created and not yet destroyed
    pub fn is_live(&self, id: TextureId) -> bool {
        self.live_textures.contains(&id)
    }

    /// Number of texture objects currently alive
    pub fn live_texture_count(&self) -> usize {
        self.live_textures.len()
    }

    /// Primitive mode requested most recently
    pub fn last_primitive(&self) -> Option<PrimitiveType> {
        self.last_primitive
    }

    /// Number of frames set up through `render_primitive`
    pub fn primitive_calls(&self) -> u64 {
        self.primitive_calls
    }

    /// Number of flushes
    pub fn flushes(&self) -> u64 {
        self.flushes
    }
}

impl Renderer for HeadlessRenderer {
    fn init(&mut self, window: &WindowConfig) -> Result<(), RenderError> {
        log::info!(
            "Headless renderer ready for {}x{} '{}'",
            window.width,
            window.height,
            window.title
        );
        Ok(())
    }

    fn render_primitive(&mut self, primitive: PrimitiveType) {
        self.last_primitive = Some(primitive);
        self.primitive_calls += 1;
    }

    fn create_texture(&mut self, image: &Image, _params: &TextureParams) -> Result<TextureId, RenderError> {
        if image.width == 0 || image.height == 0 {
            return Err(RenderError::TextureCreation(format!(
                "zero-sized image {}x{}",
                image.width, image.height
            )));
        }

        self.next_texture += 1;
        let id = TextureId(self.next_texture);
        self.live_textures.insert(id);
        log::trace!("Created texture {:?} ({}x{})", id, image.width, image.height);
        Ok(id)
    }

    fn destroy_texture(&mut self, id: TextureId) {
        if !self.live_textures.remove(&id) {
            log::warn!("Destroying unknown texture {:?}", id);
        }
    }

    fn flush(&mut self) {
        self.flushes += 1;
    }

    fn name(&self) -> &str {
        "headless"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_texture_ids_are_unique() {
        let mut renderer = HeadlessRenderer::new();
        let image = Image::solid_color(1, 1, [0; 4]).unwrap();
        let a = renderer.create_texture(&image, &TextureParams::default()).unwrap();
        let b = renderer.create_texture(&image, &TextureParams::default()).unwrap();

        assert_ne!(a, b);
        assert_eq!(renderer.live_texture_count(), 2);

        renderer.destroy_texture(a);
        assert!(!renderer.is_live(a));
        assert!(renderer.is_live(b));
    }

    #[test]
    fn test_zero_sized_image_is_rejected() {
        let mut renderer = HeadlessRenderer::new();
        let image = Image::solid_color(0, 4, [0; 4]).unwrap();
        assert!(renderer.create_texture(&image, &TextureParams::default()).is_err());
    }

    #[test]
    fn test_frame_calls_are_counted() {
        let mut renderer = HeadlessRenderer::new();
        renderer.render_primitive(PrimitiveType::Triangles);
        renderer.flush();

        assert_eq!(renderer.primitive_calls(), 1);
        assert_eq!(renderer.last_primitive(), Some(PrimitiveType::Triangles));
        assert_eq!(renderer.flushes(), 1);
    }
}
