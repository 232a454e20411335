//! # Rendering System
//!
//! The engine core never issues draw calls itself. It talks to a
//! [`Renderer`] through a narrow interface: a per-frame primitive-mode setup,
//! texture object creation and release, and a flush after the window swaps
//! buffers. Backends (OpenGL, Vulkan, a test recorder) implement the trait.
//!
//! ## Organization
//!
//! - **`texture`**: GPU texture records and sampling parameters
//! - **`texture_manager`**: Name-keyed texture cache built on
//!   [`crate::assets::ResourceManager`]
//! - **`effect`**: Per-model render effects
//! - **`headless`**: Backend that draws nothing, for tools and tests

pub mod effect;
pub mod headless;
pub mod texture;
pub mod texture_manager;

pub use effect::Effect;
pub use headless::HeadlessRenderer;
pub use texture::{FilterMode, Texture, TextureId, TextureParams, WrapMode};
pub use texture_manager::TextureManager;

use crate::assets::Image;
use crate::core::config::WindowConfig;
use thiserror::Error;

/// Primitive topology set up before a frame is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveType {
    /// Independent points
    Points,
    /// Independent line segments
    Lines,
    /// Independent triangles
    Triangles,
    /// Triangle strip
    TriangleStrip,
}

/// Rendering backend contract consumed by the engine core
pub trait Renderer {
    /// Prepare the backend once the window exists
    fn init(&mut self, _window: &WindowConfig) -> Result<(), RenderError> {
        Ok(())
    }

    /// Set up the primitive mode used by the frame's draw calls
    fn render_primitive(&mut self, primitive: PrimitiveType);

    /// Upload decoded pixels into a new GPU texture object
    fn create_texture(&mut self, image: &Image, params: &TextureParams) -> Result<TextureId, RenderError>;

    /// Release a texture object created by [`Renderer::create_texture`]
    fn destroy_texture(&mut self, id: TextureId);

    /// Flush queued work after the window has presented
    fn flush(&mut self);

    /// Backend name for logging
    fn name(&self) -> &str {
        "renderer"
    }
}

/// Rendering errors
#[derive(Error, Debug)]
pub enum RenderError {
    /// Backend failed to initialize
    #[error("Renderer initialization failed: {0}")]
    InitializationFailed(String),

    /// A texture could not be created
    #[error("Texture creation failed: {0}")]
    TextureCreation(String),
}
