//! # Hurricane Engine
//!
//! A small 2D game engine core: name-keyed asset caches, a scene system and a
//! frame-capped main loop. Windowing and rendering sit behind traits so the
//! same game runs on a real backend or headless.
//!
//! ## Features
//!
//! - **Resource Caches**: Name-keyed image and texture caches with generational handles
//! - **Scenes**: Deferred scene transitions with one-time initialization
//! - **Main Loop**: Delta-time, smoothed FPS and an optional frame-rate cap
//! - **Configuration**: TOML or RON engine config files
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use hurricane_engine::prelude::*;
//!
//! struct MyGame;
//!
//! impl Application for MyGame {
//!     fn initialize(&mut self, engine: &mut Engine) -> Result<(), AppError> {
//!         engine.images.upload_image("grid", Image::checkerboard(64, 64, 8, [255; 4], [0, 0, 0, 255])?)?;
//!         Ok(())
//!     }
//!
//!     fn update(&mut self, engine: &mut Engine, _delta_time: f32) -> Result<(), AppError> {
//!         if engine.frame_count() > 600 {
//!             engine.quit();
//!         }
//!         Ok(())
//!     }
//!
//!     fn cleanup(&mut self, _engine: &mut Engine) {}
//! }
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut engine = Engine::new(EngineConfig::default(), Backends::headless());
//!     engine.run(&mut MyGame)?;
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

// Core engine modules
pub mod core;
pub mod config;

pub mod foundation;
pub mod assets;
pub mod render;
pub mod window;
pub mod input;
pub mod audio;
pub mod physics;
pub mod scene;

mod application;
mod engine;

pub use application::{AppError, Application};
pub use core::config::EngineConfig;
pub use engine::{Backends, Engine, EngineError, EngineState, LoopState};

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        AppError, Application,
        Backends, Engine, EngineConfig, EngineError, EngineState,
        foundation::time::{FpsCounter, Timer},
        assets::{Asset, AssetError, Image, ImageManager, ResourceHandle, ResourceManager},
        render::{Effect, PrimitiveType, Renderer, Texture, TextureManager, TextureParams},
        window::{WindowBackend, WindowEvent},
        input::{InputManager, KeyCode, MouseButton},
        scene::{Scene, SceneContext},
        config::Config,
    };
}
