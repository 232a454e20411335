//! Hurricane Engine sandbox
//!
//! Runs a title scene and a play scene on headless backends, then exits when
//! the window's frame limit raises a close request.

mod app;
mod config;
mod scenes;

use hurricane_engine::config::Config;
use hurricane_engine::foundation::logging;
use hurricane_engine::render::HeadlessRenderer;
use hurricane_engine::window::HeadlessWindow;
use hurricane_engine::{Backends, Engine};

use crate::app::SandboxApp;
use crate::config::{SandboxConfig, CONFIG_FILE};

fn main() {
    let config = match SandboxConfig::load_or_default(CONFIG_FILE) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load {CONFIG_FILE}: {e}");
            std::process::exit(2);
        }
    };
    logging::init(&config.engine.logging);

    let window = HeadlessWindow::new().with_frame_limit(config.demo.frame_limit);
    let backends = Backends::new(Box::new(window), Box::new(HeadlessRenderer::new()));
    let mut engine = Engine::new(config.engine, backends);
    let mut app = SandboxApp::new(config.demo);

    if let Err(e) = engine.run(&mut app) {
        eprintln!("Sandbox error: {e}");
        std::process::exit(1);
    }
}
