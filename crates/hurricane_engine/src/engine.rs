//! Core engine implementation
//!
//! The [`Engine`] owns every subsystem and drives the main loop. One call to
//! [`Engine::tick`] is one frame:
//!
//! 1. start frame timing
//! 2. compute delta-time
//! 3. pump window events into input and the application; a quit event ends
//!    the frame here
//! 4. physics
//! 5. promote a pending scene
//! 6. scene update, then application update
//! 7. clear, scene render (skipped during a transition), application render,
//!    present
//! 8. end frame timing (frame cap, FPS average)

use crate::{
    application::{AppError, Application},
    assets::ImageManager,
    audio::AudioSystem,
    core::config::EngineConfig,
    foundation::time::{FpsCounter, Timer},
    input::{InputManager, KeyCode},
    physics::{PhysicsBackend, PhysicsSystem},
    render::{HeadlessRenderer, PrimitiveType, Renderer, TextureManager},
    scene::{Scene, SceneContext, SceneManager},
    window::{HeadlessWindow, WindowBackend, WindowEvent},
};
use thiserror::Error;

/// Engine lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    /// Constructed, subsystems not yet initialized
    Uninitialized,
    /// Main loop may run
    Running,
    /// Quit requested; the loop exits after the current frame
    ShuttingDown,
    /// Subsystems released
    Terminated,
}

/// Per-frame loop bookkeeping
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LoopState {
    /// Clock reading at the start of the previous frame, in milliseconds
    pub last_update_ms: f64,
    /// Seconds elapsed between the previous frame and this one
    pub delta_time: f32,
    /// Sum of all delta-times so far, in seconds
    pub total_time: f64,
    /// Number of completed frames
    pub frame_count: u64,
}

/// Platform collaborators handed to the engine at construction
pub struct Backends {
    /// Window and event source
    pub window: Box<dyn WindowBackend>,
    /// Rendering backend
    pub renderer: Box<dyn Renderer>,
    /// Physics stepper
    pub physics: Box<dyn PhysicsBackend>,
}

impl Backends {
    /// Use the given window and renderer with the built-in physics stepper
    pub fn new(window: Box<dyn WindowBackend>, renderer: Box<dyn Renderer>) -> Self {
        Self {
            window,
            renderer,
            physics: Box::new(PhysicsSystem::new()),
        }
    }

    /// Replace the physics stepper
    pub fn with_physics(mut self, physics: Box<dyn PhysicsBackend>) -> Self {
        self.physics = physics;
        self
    }

    /// Headless window and renderer, for tools and tests
    pub fn headless() -> Self {
        Self::new(Box::new(HeadlessWindow::new()), Box::new(HeadlessRenderer::new()))
    }
}

impl Default for Backends {
    fn default() -> Self {
        Self::headless()
    }
}

/// Main engine struct
///
/// The engine coordinates all subsystems and manages the main loop.
pub struct Engine {
    window: Box<dyn WindowBackend>,
    renderer: Box<dyn Renderer>,
    physics: Box<dyn PhysicsBackend>,

    /// Input state, refreshed once per frame
    pub input: InputManager,
    /// Audio settings
    pub audio: AudioSystem,
    /// Decoded image cache
    pub images: ImageManager,
    /// Texture cache
    pub textures: TextureManager,

    scenes: SceneManager,
    timer: Timer,
    fps: FpsCounter,
    loop_state: LoopState,
    state: EngineState,
    config: EngineConfig,
}

impl Engine {
    /// Create an engine around the given backends
    ///
    /// Nothing is initialized until [`Engine::initialize`] or [`Engine::run`].
    pub fn new(config: EngineConfig, backends: Backends) -> Self {
        Self {
            window: backends.window,
            renderer: backends.renderer,
            physics: backends.physics,
            input: InputManager::new(),
            audio: AudioSystem::new(&config.audio),
            images: ImageManager::new(&config.assets),
            textures: TextureManager::new(&config.assets),
            scenes: SceneManager::new(),
            timer: Timer::new(),
            fps: FpsCounter::new(config.timing.max_fps, config.timing.fps_samples),
            loop_state: LoopState::default(),
            state: EngineState::Uninitialized,
            config,
        }
    }

    /// Initialize window, renderer and clocks
    ///
    /// On failure the engine stays [`EngineState::Uninitialized`] and the
    /// error is logged once.
    pub fn initialize(&mut self) -> Result<(), EngineError> {
        if self.state != EngineState::Uninitialized {
            return Err(EngineError::InvalidState(format!(
                "initialize called in state {:?}",
                self.state
            )));
        }

        log::info!("Initializing engine...");
        if let Err(e) = self.init_subsystems() {
            log::error!("{e}");
            return Err(e);
        }

        self.timer.start();
        self.loop_state = LoopState {
            last_update_ms: self.timer.ticks_ms(),
            ..LoopState::default()
        };
        self.state = EngineState::Running;
        log::info!(
            "Engine running: {}x{} '{}' on {}",
            self.config.window.width,
            self.config.window.height,
            self.config.window.title,
            self.renderer.name()
        );
        Ok(())
    }

    fn init_subsystems(&mut self) -> Result<(), EngineError> {
        self.config
            .validate()
            .map_err(|e| EngineError::InitializationFailed(format!("Config: {e}")))?;
        self.window
            .init(&self.config.window)
            .map_err(|e| EngineError::InitializationFailed(format!("Window: {e}")))?;
        self.window.set_fullscreen(self.config.window.fullscreen);
        self.window.set_vsync(self.config.window.vsync);

        // Unwind in reverse order so a later initialize starts from scratch
        if let Err(e) = self.renderer.init(&self.config.window) {
            self.window.shutdown();
            return Err(EngineError::InitializationFailed(format!("Renderer: {e}")));
        }
        Ok(())
    }

    /// Run the main loop with the given application until quit
    ///
    /// Initializes the engine first if needed. An initialization failure is
    /// returned without calling any application hook, and so is a call on an
    /// engine that is already shutting down or terminated.
    pub fn run<A: Application + ?Sized>(&mut self, app: &mut A) -> Result<(), EngineError> {
        match self.state {
            EngineState::Uninitialized => self.initialize()?,
            EngineState::Running => {}
            EngineState::ShuttingDown | EngineState::Terminated => {
                return Err(EngineError::InvalidState(format!(
                    "run called in state {:?}",
                    self.state
                )));
            }
        }

        if let Err(e) = app.initialize(self) {
            let error = EngineError::ApplicationError(format!("App initialization: {e}"));
            log::error!("{error}");
            self.shutdown();
            return Err(error);
        }

        log::info!("Starting main loop...");
        let mut result = Ok(());
        while self.state == EngineState::Running {
            if let Err(e) = self.tick(app) {
                log::error!("{e}");
                result = Err(e);
                break;
            }
        }

        app.cleanup(self);
        self.shutdown();
        log::info!(
            "Engine shutdown complete after {} frames ({:.2}s)",
            self.loop_state.frame_count,
            self.loop_state.total_time
        );
        result
    }

    /// Run one frame
    pub fn tick<A: Application + ?Sized>(&mut self, app: &mut A) -> Result<(), EngineError> {
        if self.state != EngineState::Running {
            return Err(EngineError::InvalidState(format!(
                "tick called in state {:?}",
                self.state
            )));
        }

        self.fps.begin_frame();

        let now = self.timer.ticks_ms();
        #[allow(clippy::cast_possible_truncation)]
        let delta_time = ((now - self.loop_state.last_update_ms) / 1000.0) as f32;
        self.loop_state.delta_time = delta_time;
        self.loop_state.last_update_ms = now;

        if self.pump_events(app)? {
            return Ok(());
        }

        self.physics.fixed_update(delta_time);

        let requested = {
            let mut ctx = SceneContext::new(
                &mut self.images,
                &mut self.textures,
                self.renderer.as_mut(),
                &self.input,
                &mut self.audio,
            );
            self.scenes.begin_frame(&mut ctx).map_err(scene_error("init"))?;
            self.scenes.update(&mut ctx, delta_time).map_err(scene_error("update"))?;
            ctx.take_requested_scene()
        };
        if let Some(scene) = requested {
            self.scenes.load_scene(scene);
        }

        app.update(self, delta_time)
            .map_err(|e| EngineError::ApplicationError(format!("App update: {e}")))?;

        self.renderer.render_primitive(PrimitiveType::Triangles);
        let requested = {
            let mut ctx = SceneContext::new(
                &mut self.images,
                &mut self.textures,
                self.renderer.as_mut(),
                &self.input,
                &mut self.audio,
            );
            self.scenes.render(&mut ctx).map_err(scene_error("render"))?;
            ctx.take_requested_scene()
        };
        if let Some(scene) = requested {
            self.scenes.load_scene(scene);
        }
        app.render(self)
            .map_err(|e| EngineError::ApplicationError(format!("App render: {e}")))?;
        self.window.swap_buffers();
        self.renderer.flush();

        self.scenes.end_frame();
        self.fps.end();
        self.loop_state.total_time += f64::from(delta_time);
        self.loop_state.frame_count += 1;
        Ok(())
    }

    /// Drain window events; returns `true` if a quit event ended the frame
    fn pump_events<A: Application + ?Sized>(&mut self, app: &mut A) -> Result<bool, EngineError> {
        self.input.update();
        for event in self.window.poll_events() {
            self.input.process_input(&event);
            app.handle_event(self, &event)
                .map_err(|e| EngineError::ApplicationError(format!("App event: {e}")))?;

            if self.is_quit_event(&event) {
                log::info!("Quit requested by {event:?}");
                self.state = EngineState::ShuttingDown;
                return Ok(true);
            }
        }
        Ok(false)
    }

    fn is_quit_event(&self, event: &WindowEvent) -> bool {
        match event {
            WindowEvent::CloseRequested => true,
            WindowEvent::KeyDown(KeyCode::Escape) => self.config.input.quit_on_escape,
            _ => false,
        }
    }

    /// Queue a scene to become current at the start of the next frame
    pub fn load_scene(&mut self, scene: Box<dyn Scene>) {
        self.scenes.load_scene(scene);
    }

    /// Keep running (`true`) or leave the loop after this frame (`false`)
    pub fn set_run_state(&mut self, running: bool) {
        match (self.state, running) {
            (EngineState::Running, false) => {
                log::info!("Engine shutdown requested");
                self.state = EngineState::ShuttingDown;
            }
            (EngineState::ShuttingDown, true) => {
                log::info!("Engine shutdown cancelled");
                self.state = EngineState::Running;
            }
            _ => {}
        }
    }

    /// Request engine shutdown
    pub fn quit(&mut self) {
        self.set_run_state(false);
    }

    /// Release scenes, caches and the window
    ///
    /// Safe to call more than once; only the first call releases anything.
    pub fn shutdown(&mut self) {
        if matches!(self.state, EngineState::Uninitialized | EngineState::Terminated) {
            return;
        }
        self.state = EngineState::ShuttingDown;

        self.scenes.clear();
        self.images.clear_all_images();
        self.textures.clear_all_textures(self.renderer.as_mut());
        self.window.shutdown();

        self.state = EngineState::Terminated;
        log::info!("Engine terminated");
    }

    /// Texture cache together with the renderer that owns its objects
    pub fn graphics_mut(&mut self) -> (&mut TextureManager, &mut dyn Renderer) {
        (&mut self.textures, self.renderer.as_mut())
    }

    /// Get the renderer
    pub fn renderer(&self) -> &dyn Renderer {
        self.renderer.as_ref()
    }

    /// Get mutable access to the renderer
    pub fn renderer_mut(&mut self) -> &mut dyn Renderer {
        self.renderer.as_mut()
    }

    /// Get the window
    pub fn window(&self) -> &dyn WindowBackend {
        self.window.as_ref()
    }

    /// Get the scene manager
    pub fn scenes(&self) -> &SceneManager {
        &self.scenes
    }

    /// Current lifecycle state
    pub fn state(&self) -> EngineState {
        self.state
    }

    /// Whether the main loop will run another frame
    pub fn is_running(&self) -> bool {
        self.state == EngineState::Running
    }

    /// Engine configuration
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Loop bookkeeping for the most recent frame
    pub fn loop_state(&self) -> &LoopState {
        &self.loop_state
    }

    /// Get the current frame delta time
    pub fn delta_time(&self) -> f32 {
        self.loop_state.delta_time
    }

    /// Smoothed frames per second
    pub fn fps(&self) -> f32 {
        self.fps.fps()
    }

    /// Number of completed frames
    pub fn frame_count(&self) -> u64 {
        self.loop_state.frame_count
    }
}

impl Drop for Engine {
    fn drop(&mut self) {
        self.shutdown();
    }
}

fn scene_error(stage: &'static str) -> impl Fn(AppError) -> EngineError {
    move |e| EngineError::ApplicationError(format!("Scene {stage}: {e}"))
}

/// Engine-level errors
#[derive(Error, Debug)]
pub enum EngineError {
    /// Initialization error
    #[error("Engine initialization failed: {0}")]
    InitializationFailed(String),

    /// Operation not allowed in the current lifecycle state
    #[error("Invalid engine state: {0}")]
    InvalidState(String),

    /// Application error
    #[error("Application error: {0}")]
    ApplicationError(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Idle {
        updates: u32,
    }

    impl Application for Idle {
        fn initialize(&mut self, _engine: &mut Engine) -> Result<(), AppError> {
            Ok(())
        }

        fn update(&mut self, _engine: &mut Engine, _delta_time: f32) -> Result<(), AppError> {
            self.updates += 1;
            Ok(())
        }

        fn cleanup(&mut self, _engine: &mut Engine) {}
    }

    fn uncapped() -> EngineConfig {
        EngineConfig::default().with_max_fps(0.0)
    }

    #[test]
    fn test_new_engine_is_uninitialized() {
        let engine = Engine::new(uncapped(), Backends::headless());
        assert_eq!(engine.state(), EngineState::Uninitialized);
        assert_eq!(engine.frame_count(), 0);
    }

    #[test]
    fn test_initialize_twice_is_invalid() {
        let mut engine = Engine::new(uncapped(), Backends::headless());
        engine.initialize().unwrap();
        assert!(matches!(engine.initialize(), Err(EngineError::InvalidState(_))));
    }

    #[test]
    fn test_invalid_config_fails_initialization() {
        let config = uncapped().with_window("", 640, 480);
        let mut engine = Engine::new(config, Backends::headless());

        let err = engine.initialize().unwrap_err();

        assert!(matches!(err, EngineError::InitializationFailed(_)));
        assert_eq!(engine.state(), EngineState::Uninitialized);
    }

    #[test]
    fn test_tick_before_initialize_is_invalid() {
        let mut engine = Engine::new(uncapped(), Backends::headless());
        let mut app = Idle { updates: 0 };
        assert!(matches!(engine.tick(&mut app), Err(EngineError::InvalidState(_))));
        assert_eq!(app.updates, 0);
    }

    #[test]
    fn test_set_run_state_finishes_current_frame() {
        let mut engine = Engine::new(uncapped(), Backends::headless());
        engine.initialize().unwrap();
        let mut app = Idle { updates: 0 };

        engine.tick(&mut app).unwrap();
        engine.set_run_state(false);

        assert_eq!(engine.state(), EngineState::ShuttingDown);
        assert_eq!(engine.frame_count(), 1);
        assert_eq!(app.updates, 1);
    }

    #[test]
    fn test_shutdown_is_idempotent() {
        let mut engine = Engine::new(uncapped(), Backends::headless());
        engine.initialize().unwrap();

        engine.shutdown();
        engine.shutdown();

        assert_eq!(engine.state(), EngineState::Terminated);
    }
}
