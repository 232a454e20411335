//! Scene management system
//!
//! A [`Scene`] is one swappable unit of game state (a level, a menu). The
//! engine owns at most one current scene and at most one pending scene in a
//! [`SceneManager`], and swaps them at the start of a frame.
//!
//! ## Lifecycle
//!
//! ```text
//! load_scene ──► pending ──(start of next frame)──► current ──(replaced)──► dropped
//!                   │                                  │
//!            superseded by another                 init_scene once,
//!            load_scene: dropped                   then update/render
//!                                                  every frame
//! ```

mod scene_manager;

pub use scene_manager::SceneManager;

use crate::application::AppError;
use crate::assets::ImageManager;
use crate::audio::AudioSystem;
use crate::input::InputManager;
use crate::render::{Renderer, TextureManager};

/// Engine services lent to a scene for the duration of one call
pub struct SceneContext<'a> {
    /// Image cache
    pub images: &'a mut ImageManager,
    /// Texture cache
    pub textures: &'a mut TextureManager,
    /// Rendering backend
    pub renderer: &'a mut dyn Renderer,
    /// Input state for the current frame
    pub input: &'a InputManager,
    /// Audio settings
    pub audio: &'a mut AudioSystem,
    requested_scene: Option<Box<dyn Scene>>,
}

impl<'a> SceneContext<'a> {
    /// Bundle engine services for a scene call
    pub fn new(
        images: &'a mut ImageManager,
        textures: &'a mut TextureManager,
        renderer: &'a mut dyn Renderer,
        input: &'a InputManager,
        audio: &'a mut AudioSystem,
    ) -> Self {
        Self {
            images,
            textures,
            renderer,
            input,
            audio,
            requested_scene: None,
        }
    }

    /// Ask the engine to switch to `scene` at the start of the next frame
    ///
    /// A later request in the same call replaces an earlier one.
    pub fn load_scene(&mut self, scene: Box<dyn Scene>) {
        self.requested_scene = Some(scene);
    }

    /// Take the scene requested through [`SceneContext::load_scene`], if any
    pub fn take_requested_scene(&mut self) -> Option<Box<dyn Scene>> {
        self.requested_scene.take()
    }
}

/// A game level or state driven by the engine
///
/// Dropping the scene is its teardown.
pub trait Scene {
    /// Name used in logs
    fn name(&self) -> &str {
        "scene"
    }

    /// Called exactly once, when the scene becomes current
    fn init_scene(&mut self, ctx: &mut SceneContext<'_>) -> Result<(), AppError>;

    /// Called once per frame while current
    fn update(&mut self, ctx: &mut SceneContext<'_>, delta_time: f32) -> Result<(), AppError>;

    /// Called once per frame while current, unless a transition is in flight
    fn render(&mut self, ctx: &mut SceneContext<'_>) -> Result<(), AppError>;
}
