//! Render effects
//!
//! An effect is attached to a model or texture and wraps its draw: `apply`
//! runs before the draw, `post` after it.

use super::Renderer;

/// Effect applied around a model's draw calls
pub trait Effect {
    /// Set renderer state for the attached model
    fn apply_effect(&mut self, renderer: &mut dyn Renderer);

    /// Undo or finish the effect once the model has been drawn
    fn post_effect(&mut self, renderer: &mut dyn Renderer);

    /// Name of the material this effect implements
    fn material_name(&self) -> &str;
}
