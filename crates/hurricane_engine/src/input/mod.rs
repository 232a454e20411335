//! Input management system
//!
//! [`InputManager`] turns window events into queryable key and mouse state.
//! The game loop calls [`InputManager::update`] at the start of each frame and
//! feeds it every polled event through [`InputManager::process_input`].

use std::collections::HashSet;

use crate::window::WindowEvent;

/// Input manager
#[derive(Debug, Default)]
pub struct InputManager {
    keys_down: HashSet<KeyCode>,
    keys_pressed: HashSet<KeyCode>,
    keys_released: HashSet<KeyCode>,
    buttons_down: HashSet<MouseButton>,
    mouse_position: (f64, f64),
}

impl InputManager {
    /// Create a new input manager
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new frame: forget which keys changed during the previous one
    pub fn update(&mut self) {
        self.keys_pressed.clear();
        self.keys_released.clear();
    }

    /// Apply one window event to the input state
    pub fn process_input(&mut self, event: &WindowEvent) {
        match *event {
            WindowEvent::KeyDown(key) => self.handle_key_input(key, true),
            WindowEvent::KeyUp(key) => self.handle_key_input(key, false),
            WindowEvent::MouseButton { button, pressed } => self.handle_mouse_button(button, pressed),
            WindowEvent::MouseMoved { x, y } => self.handle_mouse_move(x, y),
            WindowEvent::FocusChanged(false) => self.release_all(),
            _ => {}
        }
    }

    /// Handle key input
    pub fn handle_key_input(&mut self, key: KeyCode, pressed: bool) {
        if pressed {
            // Key repeat reports KeyDown again without an intervening KeyUp
            if self.keys_down.insert(key) {
                self.keys_pressed.insert(key);
            }
        } else if self.keys_down.remove(&key) {
            self.keys_released.insert(key);
        }
    }

    /// Handle mouse button input
    pub fn handle_mouse_button(&mut self, button: MouseButton, pressed: bool) {
        if pressed {
            self.buttons_down.insert(button);
        } else {
            self.buttons_down.remove(&button);
        }
    }

    /// Handle mouse movement
    pub fn handle_mouse_move(&mut self, x: f64, y: f64) {
        self.mouse_position = (x, y);
    }

    /// Whether `key` is currently held
    pub fn is_key_down(&self, key: KeyCode) -> bool {
        self.keys_down.contains(&key)
    }

    /// Whether `key` went down during the current frame
    pub fn was_key_pressed(&self, key: KeyCode) -> bool {
        self.keys_pressed.contains(&key)
    }

    /// Whether `key` went up during the current frame
    pub fn was_key_released(&self, key: KeyCode) -> bool {
        self.keys_released.contains(&key)
    }

    /// Whether `button` is currently held
    pub fn is_mouse_button_down(&self, button: MouseButton) -> bool {
        self.buttons_down.contains(&button)
    }

    /// Last reported cursor position
    pub fn mouse_position(&self) -> (f64, f64) {
        self.mouse_position
    }

    fn release_all(&mut self) {
        self.keys_released.extend(self.keys_down.drain());
        self.buttons_down.clear();
    }
}

/// Key codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// A key
    A,
    /// B key
    B,
    /// C key
    C,
    /// D key
    D,
    /// E key
    E,
    /// F key
    F,
    /// G key
    G,
    /// H key
    H,
    /// I key
    I,
    /// J key
    J,
    /// K key
    K,
    /// L key
    L,
    /// M key
    M,
    /// N key
    N,
    /// O key
    O,
    /// P key
    P,
    /// Q key
    Q,
    /// R key
    R,
    /// S key
    S,
    /// T key
    T,
    /// U key
    U,
    /// V key
    V,
    /// W key
    W,
    /// X key
    X,
    /// Y key
    Y,
    /// Z key
    Z,
    /// Space key
    Space,
    /// Enter key
    Enter,
    /// Escape key
    Escape,
    /// Up arrow
    Up,
    /// Down arrow
    Down,
    /// Left arrow
    Left,
    /// Right arrow
    Right,
}

/// Mouse buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Left mouse button
    Left,
    /// Right mouse button
    Right,
    /// Middle mouse button
    Middle,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_down_and_up() {
        let mut input = InputManager::new();
        input.process_input(&WindowEvent::KeyDown(KeyCode::W));

        assert!(input.is_key_down(KeyCode::W));
        assert!(input.was_key_pressed(KeyCode::W));

        input.update();
        assert!(input.is_key_down(KeyCode::W));
        assert!(!input.was_key_pressed(KeyCode::W));

        input.process_input(&WindowEvent::KeyUp(KeyCode::W));
        assert!(!input.is_key_down(KeyCode::W));
        assert!(input.was_key_released(KeyCode::W));
    }

    #[test]
    fn test_repeat_is_not_a_new_press() {
        let mut input = InputManager::new();
        input.process_input(&WindowEvent::KeyDown(KeyCode::Space));
        input.update();
        input.process_input(&WindowEvent::KeyDown(KeyCode::Space));

        assert!(!input.was_key_pressed(KeyCode::Space));
    }

    #[test]
    fn test_focus_loss_releases_everything() {
        let mut input = InputManager::new();
        input.process_input(&WindowEvent::KeyDown(KeyCode::A));
        input.process_input(&WindowEvent::MouseButton {
            button: MouseButton::Left,
            pressed: true,
        });

        input.process_input(&WindowEvent::FocusChanged(false));

        assert!(!input.is_key_down(KeyCode::A));
        assert!(input.was_key_released(KeyCode::A));
        assert!(!input.is_mouse_button_down(MouseButton::Left));
    }

    #[test]
    fn test_mouse_move() {
        let mut input = InputManager::new();
        input.process_input(&WindowEvent::MouseMoved { x: 10.0, y: 20.5 });
        assert_eq!(input.mouse_position(), (10.0, 20.5));
    }
}
