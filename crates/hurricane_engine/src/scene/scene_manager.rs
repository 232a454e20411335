//! Scene Manager - current/pending scene slots
//!
//! Transitions are deferred: [`SceneManager::load_scene`] only fills the
//! pending slot. The swap happens in [`SceneManager::begin_frame`], which the
//! engine calls before any other update work.
//!
//! **Render skip**: `load_scene` raises a transition flag. While it is raised
//! the current scene is not rendered. It is lowered at the end of the frame
//! that promoted the pending scene, unless yet another scene was queued during
//! that frame. A promoted scene therefore first renders on the frame after its
//! promotion. This includes the first scene, even when it was queued from
//! `Application::initialize` before the loop started.

use super::{Scene, SceneContext};
use crate::application::AppError;

/// Owner of the current and pending scene
#[derive(Default)]
pub struct SceneManager {
    current: Option<Box<dyn Scene>>,
    pending: Option<Box<dyn Scene>>,
    transition_requested: bool,
    promoted_this_frame: bool,
}

impl SceneManager {
    /// Create a manager with no scenes
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue `scene` to become current at the start of the next frame
    ///
    /// A scene already pending is dropped without being initialized.
    pub fn load_scene(&mut self, scene: Box<dyn Scene>) {
        log::debug!("Queued scene '{}'", scene.name());
        if let Some(superseded) = self.pending.replace(scene) {
            log::debug!("Dropping superseded pending scene '{}'", superseded.name());
        }
        self.transition_requested = true;
    }

    /// Promote the pending scene, if any, and initialize it
    ///
    /// Returns `true` when a promotion happened.
    pub fn begin_frame(&mut self, ctx: &mut SceneContext<'_>) -> Result<bool, AppError> {
        let Some(next) = self.pending.take() else {
            return Ok(false);
        };

        if let Some(previous) = self.current.take() {
            log::info!("Unloading scene '{}'", previous.name());
            drop(previous);
        }

        log::info!("Loading scene '{}'", next.name());
        self.promoted_this_frame = true;
        let current = self.current.insert(next);
        current.init_scene(ctx)?;
        Ok(true)
    }

    /// Update the current scene
    pub fn update(&mut self, ctx: &mut SceneContext<'_>, delta_time: f32) -> Result<(), AppError> {
        match self.current.as_mut() {
            Some(scene) => scene.update(ctx, delta_time),
            None => Ok(()),
        }
    }

    /// Render the current scene unless a transition is in flight
    ///
    /// Returns `true` if the scene was rendered.
    pub fn render(&mut self, ctx: &mut SceneContext<'_>) -> Result<bool, AppError> {
        if self.transition_requested {
            return Ok(false);
        }
        match self.current.as_mut() {
            Some(scene) => scene.render(ctx).map(|()| true),
            None => Ok(false),
        }
    }

    /// Finish the frame's transition bookkeeping
    pub fn end_frame(&mut self) {
        if self.promoted_this_frame {
            self.promoted_this_frame = false;
            if self.pending.is_none() {
                self.transition_requested = false;
            }
        }
    }

    /// Drop both scenes
    pub fn clear(&mut self) {
        if let Some(scene) = self.current.take() {
            log::info!("Unloading scene '{}'", scene.name());
        }
        if let Some(scene) = self.pending.take() {
            log::debug!("Dropping pending scene '{}'", scene.name());
        }
        self.transition_requested = false;
        self.promoted_this_frame = false;
    }

    /// Name of the current scene
    pub fn current_name(&self) -> Option<&str> {
        self.current.as_deref().map(|scene| scene.name())
    }

    /// Name of the pending scene
    pub fn pending_name(&self) -> Option<&str> {
        self.pending.as_deref().map(|scene| scene.name())
    }

    /// Whether a scene is queued
    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Whether scene rendering is currently suppressed by a transition
    pub fn is_transitioning(&self) -> bool {
        self.transition_requested
    }
}
