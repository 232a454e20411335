//! Sandbox application

use hurricane_engine::prelude::*;

use crate::config::DemoConfig;
use crate::scenes::{TitleScene, CHECKER};

/// Loads shared assets, then lets the scenes drive the demo
pub struct SandboxApp {
    demo: DemoConfig,
    resizes: u32,
}

impl SandboxApp {
    /// Create the app from demo settings
    pub fn new(demo: DemoConfig) -> Self {
        Self { demo, resizes: 0 }
    }
}

impl Application for SandboxApp {
    fn initialize(&mut self, engine: &mut Engine) -> Result<(), AppError> {
        let board = Image::checkerboard(
            self.demo.checker_size,
            self.demo.checker_size,
            self.demo.checker_cell,
            [230, 230, 230, 255],
            [40, 40, 60, 255],
        )?;
        engine.images.upload_image(CHECKER, board)?;
        engine.load_scene(Box::new(TitleScene::new(self.demo.title_frames)));
        Ok(())
    }

    fn update(&mut self, engine: &mut Engine, _delta_time: f32) -> Result<(), AppError> {
        if engine.frame_count() > 0 && engine.frame_count() % 60 == 0 {
            log::debug!(
                "frame {} at {:.1} fps in scene {:?}",
                engine.frame_count(),
                engine.fps(),
                engine.scenes().current_name()
            );
        }
        Ok(())
    }

    fn handle_event(&mut self, engine: &mut Engine, event: &WindowEvent) -> Result<(), AppError> {
        if let WindowEvent::Resized { width, height } = event {
            self.resizes += 1;
            log::info!("Resized to {width}x{height}, window reports {:?}", engine.window().size());
        }
        Ok(())
    }

    fn cleanup(&mut self, engine: &mut Engine) {
        log::info!(
            "Sandbox finished: {} frames, {} images, {} textures, {} resizes",
            engine.frame_count(),
            engine.images.len(),
            engine.textures.texture_count(),
            self.resizes
        );
    }
}
