//! Demo scenes: a title card that hands over to a play field

use hurricane_engine::prelude::*;

/// Name of the checkerboard image shared by both scenes
pub const CHECKER: &str = "checker";

/// Title card; switches to [`PlayScene`] after a number of frames or on Space
pub struct TitleScene {
    frames_left: u32,
    switched: bool,
}

impl TitleScene {
    /// Show the title for `frames` frames
    pub fn new(frames: u32) -> Self {
        Self {
            frames_left: frames,
            switched: false,
        }
    }
}

impl Scene for TitleScene {
    fn name(&self) -> &str {
        "title"
    }

    fn init_scene(&mut self, ctx: &mut SceneContext<'_>) -> Result<(), AppError> {
        let image = ctx.images.image_by_name(CHECKER)?;
        log::info!("Title scene ready ({}x{} backdrop)", image.width, image.height);
        Ok(())
    }

    fn update(&mut self, ctx: &mut SceneContext<'_>, _delta_time: f32) -> Result<(), AppError> {
        if self.switched {
            return Ok(());
        }

        self.frames_left = self.frames_left.saturating_sub(1);
        if self.frames_left == 0 || ctx.input.was_key_pressed(KeyCode::Space) {
            self.switched = true;
            ctx.load_scene(Box::new(PlayScene::new()));
        }
        Ok(())
    }

    fn render(&mut self, ctx: &mut SceneContext<'_>) -> Result<(), AppError> {
        ctx.renderer.render_primitive(PrimitiveType::TriangleStrip);
        Ok(())
    }
}

/// Pulses the board between two brightness levels
pub struct PulseEffect {
    phase: f32,
    passes: u64,
}

impl PulseEffect {
    fn new() -> Self {
        Self { phase: 0.0, passes: 0 }
    }

    fn advance(&mut self, delta_time: f32) {
        self.phase = (self.phase + delta_time) % 1.0;
    }

    /// Current brightness in `[0.5, 1.0]`
    pub fn brightness(&self) -> f32 {
        0.75 + 0.25 * (self.phase * std::f32::consts::TAU).sin()
    }
}

impl Effect for PulseEffect {
    fn apply_effect(&mut self, renderer: &mut dyn Renderer) {
        log::trace!("{} pulse at {:.2} on {}", self.material_name(), self.brightness(), renderer.name());
    }

    fn post_effect(&mut self, _renderer: &mut dyn Renderer) {
        self.passes += 1;
    }

    fn material_name(&self) -> &str {
        "pulse"
    }
}

/// Play field drawing the checkerboard texture
pub struct PlayScene {
    board: Option<ResourceHandle<Texture>>,
    effect: PulseEffect,
    elapsed: f32,
}

impl PlayScene {
    /// Create the scene; the texture is uploaded on init
    pub fn new() -> Self {
        Self {
            board: None,
            effect: PulseEffect::new(),
            elapsed: 0.0,
        }
    }
}

impl Default for PlayScene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene for PlayScene {
    fn name(&self) -> &str {
        "play"
    }

    fn init_scene(&mut self, ctx: &mut SceneContext<'_>) -> Result<(), AppError> {
        let image = ctx.images.image_by_name(CHECKER)?;
        let handle = ctx
            .textures
            .create_texture(ctx.renderer, CHECKER, image, TextureParams::pixel_art())?;
        self.board = Some(handle);
        log::info!("Play scene ready");
        Ok(())
    }

    fn update(&mut self, _ctx: &mut SceneContext<'_>, delta_time: f32) -> Result<(), AppError> {
        self.elapsed += delta_time;
        self.effect.advance(delta_time);
        Ok(())
    }

    fn render(&mut self, ctx: &mut SceneContext<'_>) -> Result<(), AppError> {
        let handle = self
            .board
            .ok_or_else(|| AppError::GameLogic("play scene rendered before init".to_string()))?;
        ctx.textures.texture(handle)?;

        self.effect.apply_effect(ctx.renderer);
        ctx.renderer.render_primitive(PrimitiveType::Triangles);
        self.effect.post_effect(ctx.renderer);
        Ok(())
    }
}

impl Drop for PlayScene {
    fn drop(&mut self) {
        log::info!(
            "Play scene closed after {:.2}s, {} effect passes",
            self.elapsed,
            self.effect.passes
        );
    }
}
