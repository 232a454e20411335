//! Headless window backend
//!
//! Has no surface. Events come from three places: a schedule keyed by poll
//! count, a channel other code can push into, and an optional frame limit
//! that raises [`WindowEvent::CloseRequested`] once reached.

use std::collections::BTreeMap;
use std::sync::mpsc::{self, Receiver, Sender};

use super::{WindowBackend, WindowError, WindowEvent};
use crate::core::config::WindowConfig;

/// Window that never shows anything
pub struct HeadlessWindow {
    size: (u32, u32),
    fullscreen: bool,
    vsync: bool,
    initialized: bool,
    polls: u64,
    frame_limit: Option<u64>,
    schedule: BTreeMap<u64, Vec<WindowEvent>>,
    sender: Sender<WindowEvent>,
    receiver: Receiver<WindowEvent>,
    swaps: u64,
}

impl HeadlessWindow {
    /// Create a headless window with no scripted events
    pub fn new() -> Self {
        let (sender, receiver) = mpsc::channel();
        Self {
            size: (0, 0),
            fullscreen: false,
            vsync: false,
            initialized: false,
            polls: 0,
            frame_limit: None,
            schedule: BTreeMap::new(),
            sender,
            receiver,
            swaps: 0,
        }
    }

    /// Request close on the `frames`-th poll
    pub fn with_frame_limit(mut self, frames: u64) -> Self {
        self.frame_limit = Some(frames);
        self
    }

    /// Deliver `event` on the `poll`-th call to `poll_events` (1-based)
    pub fn schedule(mut self, poll: u64, event: WindowEvent) -> Self {
        self.schedule.entry(poll).or_default().push(event);
        self
    }

    /// Channel for pushing events from outside the loop
    pub fn sender(&self) -> Sender<WindowEvent> {
        self.sender.clone()
    }

    /// Whether presents wait for vertical sync
    pub fn vsync(&self) -> bool {
        self.vsync
    }

    /// Number of buffer swaps so far
    pub fn swaps(&self) -> u64 {
        self.swaps
    }
}

impl Default for HeadlessWindow {
    fn default() -> Self {
        Self::new()
    }
}

impl WindowBackend for HeadlessWindow {
    fn init(&mut self, config: &WindowConfig) -> Result<(), WindowError> {
        if config.width == 0 || config.height == 0 {
            return Err(WindowError::CreationFailed(format!(
                "invalid size {}x{}",
                config.width, config.height
            )));
        }

        self.size = (config.width, config.height);
        self.fullscreen = config.fullscreen;
        self.initialized = true;
        log::debug!("Headless window '{}' created", config.title);
        Ok(())
    }

    fn set_fullscreen(&mut self, fullscreen: bool) {
        self.fullscreen = fullscreen;
    }

    fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }

    fn set_vsync(&mut self, vsync: bool) {
        self.vsync = vsync;
    }

    fn poll_events(&mut self) -> Vec<WindowEvent> {
        self.polls += 1;

        let mut events = self.schedule.remove(&self.polls).unwrap_or_default();
        events.extend(self.receiver.try_iter());

        if let Some(WindowEvent::Resized { width, height }) = events
            .iter()
            .rev()
            .find(|event| matches!(event, WindowEvent::Resized { .. }))
        {
            self.size = (*width, *height);
        }

        if self.frame_limit.is_some_and(|limit| self.polls >= limit) {
            events.push(WindowEvent::CloseRequested);
        }

        events
    }

    fn swap_buffers(&mut self) {
        self.swaps += 1;
    }

    fn size(&self) -> (u32, u32) {
        self.size
    }

    fn shutdown(&mut self) {
        if self.initialized {
            self.initialized = false;
            log::debug!("Headless window destroyed after {} frame(s)", self.swaps);
        }
    }
}
