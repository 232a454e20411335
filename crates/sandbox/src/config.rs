//! Sandbox configuration

use hurricane_engine::config::Config;
use hurricane_engine::EngineConfig;
use serde::{Deserialize, Serialize};

/// Default config file looked up in the working directory
pub const CONFIG_FILE: &str = "sandbox.toml";

/// Sandbox configuration: engine settings plus demo pacing
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SandboxConfig {
    /// Engine settings
    pub engine: EngineConfig,

    /// Demo settings
    pub demo: DemoConfig,
}

/// Demo pacing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// Frames shown on the title scene before switching to play
    pub title_frames: u32,

    /// Frame at which the headless window reports a close request
    pub frame_limit: u64,

    /// Checkerboard texture size in pixels
    pub checker_size: u32,

    /// Checkerboard cell size in pixels
    pub checker_cell: u32,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            title_frames: 30,
            frame_limit: 120,
            checker_size: 64,
            checker_cell: 8,
        }
    }
}

impl Config for SandboxConfig {}
