//! Where's the Refrigerator?
//!
//! A windowed sprite demo: one texture, four directional keys, a 60 fps cap.
//! WASD or the arrow keys slide the fridge around; Escape or closing the
//! window exits.

use anyhow::{Context, Result};
use winit::dpi::LogicalSize;

use fridge_engine::coords::Vec2;
use fridge_engine::core::{App, AppControl, FrameCtx};
use fridge_engine::device::GpuInit;
use fridge_engine::input::Key;
use fridge_engine::logging::{init_logging, LoggingConfig};
use fridge_engine::paint::Color;
use fridge_engine::render::{SpriteRenderer, SpriteTexture};
use fridge_engine::scene::SceneState;
use fridge_engine::window::{Runtime, RuntimeConfig};

const TITLE: &str = "Where's the Refrigerator?";
const WIDTH: f64 = 640.0;
const HEIGHT: f64 = 480.0;
const FPS_CAP: u32 = 60;

const SPRITE_PATH: &str = "assets/doge-freezer.png";
const SPRITE_SIZE: f32 = 526.0;

/// Movement speed per held direction, logical px/s.
const MOVE_SPEED: f32 = 160.0;

/// Decoded sprite pixels, held until the GPU exists to upload them into.
struct SpriteImage {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

struct FridgeApp {
    scene: SceneState,
    renderer: SpriteRenderer,
    image: SpriteImage,
    texture: Option<SpriteTexture>,
}

impl FridgeApp {
    fn new(image: SpriteImage) -> Self {
        Self {
            scene: SceneState::new(Vec2::zero(), MOVE_SPEED),
            renderer: SpriteRenderer::new(),
            image,
            texture: None,
        }
    }
}

impl App for FridgeApp {
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        if ctx.input_frame.keys_pressed.contains(&Key::Escape) {
            return AppControl::Exit;
        }

        let held = ctx.input.directions();
        self.scene.advance(ctx.time.delta, held);

        let position = self.scene.position();
        let renderer = &mut self.renderer;
        let image = &self.image;
        let texture = &mut self.texture;

        ctx.render(Color::BLACK, |rctx, target| {
            // Upload on first frame; the decoded pixels were validated at load.
            let texture = texture.get_or_insert_with(|| {
                SpriteTexture::from_rgba8(rctx, image.width, image.height, &image.pixels)
            });

            renderer.draw(
                rctx,
                target,
                texture,
                position,
                Vec2::new(SPRITE_SIZE, SPRITE_SIZE),
                Color::WHITE,
            );
        })
    }
}

fn load_sprite(path: &str) -> Result<SpriteImage> {
    let image = image::open(path)
        .with_context(|| format!("failed to open sprite image {path}"))?
        .to_rgba8();

    let (width, height) = image.dimensions();
    log::info!("loaded sprite {path} ({width}x{height})");

    Ok(SpriteImage {
        width,
        height,
        pixels: image.into_raw(),
    })
}

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    // Startup failure is fatal before the loop starts; no retry.
    let image = load_sprite(SPRITE_PATH)?;

    let config = RuntimeConfig {
        title: TITLE.to_string(),
        initial_size: LogicalSize::new(WIDTH, HEIGHT),
        fps_cap: FPS_CAP,
    };

    Runtime::run(config, GpuInit::default(), FridgeApp::new(image))
}
