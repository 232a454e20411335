//! # Unified Configuration System
//!
//! All engine configuration lives here: window/video properties, frame
//! timing, audio volumes, asset search paths, input behavior and logging.
//!
//! Every section has serde defaults, so a config file only needs to name the
//! values it changes:
//!
//! ```toml
//! [window]
//! title = "Test Game"
//! fullscreen = true
//!
//! [timing]
//! max_fps = 144.0
//! ```

use serde::{Deserialize, Serialize};

pub use crate::config::{Config, ConfigError};

/// Highest value accepted for any audio volume
pub const MAX_VOLUME: u8 = 100;

/// # Window Configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Window title
    pub title: String,
    /// Window width
    pub width: u32,
    /// Window height
    pub height: u32,
    /// Whether to start in fullscreen
    pub fullscreen: bool,
    /// VSync setting
    pub vsync: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Hurricane Engine".to_string(),
            width: 1280,
            height: 720,
            fullscreen: false,
            vsync: true,
        }
    }
}

/// # Timing Configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    /// Frame-rate cap; zero disables the cap
    pub max_fps: f32,
    /// Number of frames in the FPS rolling average
    pub fps_samples: usize,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            max_fps: 60.0,
            fps_samples: crate::foundation::time::DEFAULT_FPS_SAMPLES,
        }
    }
}

/// # Audio Configuration
///
/// Volumes are percentages in `0..=100`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AudioConfig {
    /// Master volume
    pub master_volume: u8,
    /// Music volume
    pub music_volume: u8,
    /// Sound effect volume
    pub sound_volume: u8,
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            master_volume: 100,
            music_volume: 80,
            sound_volume: 80,
        }
    }
}

/// # Asset Configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetConfig {
    /// Directories searched, in order, for relative asset paths
    pub search_paths: Vec<String>,
}

impl Default for AssetConfig {
    fn default() -> Self {
        Self {
            search_paths: vec!["resources".to_string()],
        }
    }
}

/// # Input Configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Whether the Escape key requests shutdown
    pub quit_on_escape: bool,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self { quit_on_escape: true }
    }
}

/// # Logging Configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `env_logger` filter string; `RUST_LOG` is used when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,
}

/// # Engine Configuration
///
/// Top-level configuration handed to [`crate::Engine::new`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Window configuration
    pub window: WindowConfig,
    /// Frame timing configuration
    pub timing: TimingConfig,
    /// Audio volumes
    pub audio: AudioConfig,
    /// Asset system configuration
    pub assets: AssetConfig,
    /// Input behavior
    pub input: InputConfig,
    /// Logging setup
    pub logging: LoggingConfig,
}

impl EngineConfig {
    /// Set window title and size
    pub fn with_window(mut self, title: impl Into<String>, width: u32, height: u32) -> Self {
        self.window.title = title.into();
        self.window.width = width;
        self.window.height = height;
        self
    }

    /// Start in fullscreen mode
    pub fn with_fullscreen(mut self, fullscreen: bool) -> Self {
        self.window.fullscreen = fullscreen;
        self
    }

    /// Wait for vertical sync on present
    pub fn with_vsync(mut self, vsync: bool) -> Self {
        self.window.vsync = vsync;
        self
    }

    /// Set the frame-rate cap (zero for uncapped)
    pub fn with_max_fps(mut self, max_fps: f32) -> Self {
        self.timing.max_fps = max_fps;
        self
    }

    /// Add an asset search path
    pub fn with_search_path(mut self, path: impl Into<String>) -> Self {
        self.assets.search_paths.push(path.into());
        self
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.window.title.is_empty() {
            return Err(ConfigError::Invalid("window title cannot be empty".to_string()));
        }

        if self.window.width == 0 || self.window.height == 0 {
            return Err(ConfigError::Invalid(format!(
                "window size must be non-zero, got {}x{}",
                self.window.width, self.window.height
            )));
        }

        if !self.timing.max_fps.is_finite() || self.timing.max_fps < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "max_fps must be a non-negative number, got {}",
                self.timing.max_fps
            )));
        }

        if self.timing.fps_samples == 0 {
            return Err(ConfigError::Invalid("fps_samples must be at least 1".to_string()));
        }

        let volumes = [
            ("master_volume", self.audio.master_volume),
            ("music_volume", self.audio.music_volume),
            ("sound_volume", self.audio.sound_volume),
        ];
        for (name, volume) in volumes {
            if volume > MAX_VOLUME {
                return Err(ConfigError::Invalid(format!(
                    "{name} must be at most {MAX_VOLUME}, got {volume}"
                )));
            }
        }

        Ok(())
    }
}

impl Config for EngineConfig {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(EngineConfig::default().validate().is_ok());
    }

    #[test]
    fn test_zero_size_window_is_rejected() {
        let config = EngineConfig::default().with_window("Game", 0, 600);
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_loud_volume_is_rejected() {
        let mut config = EngineConfig::default();
        config.audio.music_volume = 150;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_toml_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("engine.toml");

        let config = EngineConfig::default()
            .with_window("Round Trip", 800, 600)
            .with_fullscreen(true)
            .with_max_fps(144.0);
        config.save_to_file(&path).unwrap();

        let loaded = EngineConfig::load_from_file(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_ron_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("engine.ron");

        let mut config = EngineConfig::default();
        config.logging.filter = Some("debug".to_string());
        config.save_to_file(&path).unwrap();

        let loaded = EngineConfig::load_from_file(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("partial.toml");
        std::fs::write(&path, "[window]\ntitle = \"Partial\"\n").unwrap();

        let loaded = EngineConfig::load_from_file(&path).unwrap();
        assert_eq!(loaded.window.title, "Partial");
        assert_eq!(loaded.window.width, WindowConfig::default().width);
        assert_eq!(loaded.timing, TimingConfig::default());
    }

    #[test]
    fn test_unknown_extension_is_unsupported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("engine.yaml");
        std::fs::write(&path, "window: {}").unwrap();

        let result = EngineConfig::load_from_file(&path);
        assert!(matches!(result, Err(ConfigError::UnsupportedFormat(_))));
    }

    #[test]
    fn test_missing_file_falls_back_to_default() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = EngineConfig::load_or_default(dir.path().join("absent.toml")).unwrap();
        assert_eq!(loaded, EngineConfig::default());
    }
}
