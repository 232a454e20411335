//! Window management subsystem
//!
//! The engine drives a window through the [`WindowBackend`] trait: create it,
//! pump its events once per frame, swap buffers, tear it down. Platform
//! toolkits (SDL, GLFW, winit) live behind implementations of this trait;
//! [`HeadlessWindow`] is the built-in one for tools and tests.
//!
//! Resize and close notifications are reported as [`WindowEvent`]s from
//! [`WindowBackend::poll_events`], so they are always handled on the loop
//! thread during the input step of a frame.

pub mod headless;

pub use headless::HeadlessWindow;

use crate::core::config::WindowConfig;
use crate::input::{KeyCode, MouseButton};
use thiserror::Error;

/// Events reported by a window backend
#[derive(Debug, Clone, PartialEq)]
pub enum WindowEvent {
    /// User asked to close the window
    CloseRequested,

    /// Window client area was resized
    Resized {
        /// New width in pixels
        width: u32,
        /// New height in pixels
        height: u32,
    },

    /// Window gained (`true`) or lost (`false`) focus
    FocusChanged(bool),

    /// Key went down
    KeyDown(KeyCode),

    /// Key went up
    KeyUp(KeyCode),

    /// Mouse button event
    MouseButton {
        /// The mouse button that was pressed/released
        button: MouseButton,
        /// Whether the button was pressed (true) or released (false)
        pressed: bool,
    },

    /// Mouse movement
    MouseMoved {
        /// New X coordinate
        x: f64,
        /// New Y coordinate
        y: f64,
    },
}

/// Window backend contract consumed by the engine core
///
/// Window operations happen on the loop thread, so no `Send` bound.
pub trait WindowBackend {
    /// Create the window with the configured size, title and fullscreen mode
    fn init(&mut self, config: &WindowConfig) -> Result<(), WindowError>;

    /// Switch between windowed and fullscreen mode
    fn set_fullscreen(&mut self, fullscreen: bool);

    /// Check if the window is currently in fullscreen mode
    fn is_fullscreen(&self) -> bool;

    /// Enable or disable waiting for vertical sync on present
    fn set_vsync(&mut self, _vsync: bool) {}

    /// Collect every event that arrived since the previous poll
    fn poll_events(&mut self) -> Vec<WindowEvent>;

    /// Present the back buffer
    fn swap_buffers(&mut self);

    /// Current client area size in pixels
    fn size(&self) -> (u32, u32);

    /// Destroy the window
    fn shutdown(&mut self) {}
}

/// Window errors
#[derive(Error, Debug)]
pub enum WindowError {
    /// The platform refused to create the window
    #[error("Window creation failed: {0}")]
    CreationFailed(String),
}
