use std::sync::Arc;

use anyhow::Context as _;
use game_core::{Arena, GameRng};
use tracing::{debug, error, info, trace, warn};
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::WindowEvent;
use winit::event_loop::ActiveEventLoop;
use winit::window::{Window, WindowId};

use crate::clock::FrameClock;
use crate::draw::DrawList;
use crate::input::InputState;
use crate::renderer::Renderer;
use crate::screens::MenuScreen;
use crate::settings::Settings;
use crate::stack::{Context, ScreenStack};
use crate::text::GlyphFont;

/// Window, renderer and screens, driven by the winit event loop
pub struct App {
    settings: Settings,
    font: GlyphFont,
    seed: Option<u64>,
    window: Option<Arc<Window>>,
    renderer: Option<Renderer>,
    input: InputState,
    clock: FrameClock,
    stack: ScreenStack,
    frames: u64,
    error: Option<anyhow::Error>,
}

impl App {
    pub fn new(settings: Settings, font: GlyphFont, seed: Option<u64>) -> Self {
        Self {
            settings,
            font,
            seed,
            window: None,
            renderer: None,
            input: InputState::new(),
            clock: FrameClock::new(),
            stack: ScreenStack::new(),
            frames: 0,
            error: None,
        }
    }

    /// Outcome of the run, once the event loop has returned
    pub fn finish(self) -> anyhow::Result<()> {
        info!(
            frames = self.frames,
            seconds = self.clock.run_time(),
            "shutting down"
        );
        match self.error {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    fn start(&mut self, event_loop: &ActiveEventLoop) -> anyhow::Result<()> {
        let window_settings = &self.settings.window;
        let attributes = Window::default_attributes()
            .with_title(window_settings.title.clone())
            .with_inner_size(PhysicalSize::new(window_settings.width, window_settings.height))
            .with_resizable(window_settings.resizable);
        let window = Arc::new(
            event_loop
                .create_window(attributes)
                .context("failed to create window")?,
        );

        let renderer = pollster::block_on(Renderer::new(window.clone(), window_settings.vsync))
            .context("failed to initialize renderer")?;
        let arena = arena_of(renderer.size);
        info!(width = arena.width, height = arena.height, "window ready");

        let rng = GameRng::seeded_or_entropy(self.seed);
        let menu = MenuScreen::new(arena, self.settings.game.clone(), rng, &self.font);
        self.stack.push(Box::new(menu));

        window.request_redraw();
        self.window = Some(window);
        self.renderer = Some(renderer);
        self.clock = FrameClock::new();
        Ok(())
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, err: anyhow::Error) {
        error!("{err:#}");
        self.error = Some(err);
        event_loop.exit();
    }

    fn frame(&mut self, event_loop: &ActiveEventLoop) {
        let Some(renderer) = self.renderer.as_mut() else {
            return;
        };

        let frame_time = self.clock.elapsed_reset();
        let ctx = Context {
            input: &self.input,
            frame_time,
            arena: arena_of(renderer.size),
            measure: &self.font,
        };
        let running = self.stack.update(&ctx);
        // Start collecting the next frame's edges
        self.input.begin_frame();
        self.frames += 1;

        if !running {
            info!("screen stack empty");
            event_loop.exit();
            return;
        }

        let mut list = DrawList::new(self.stack.clear_color());
        self.stack.draw(&mut list);
        trace!(
            screen = self.stack.top_name(),
            items = list.len(),
            frame_time,
            "draw"
        );

        match renderer.render(&list, &self.font) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                debug!("surface lost, reconfiguring");
                renderer.reconfigure();
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                self.fail(event_loop, anyhow::anyhow!("GPU out of memory"));
            }
            Err(err) => warn!("skipping frame: {err}"),
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        if let Err(err) = self.start(event_loop) {
            self.fail(event_loop, err);
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _window_id: WindowId, event: WindowEvent) {
        match &event {
            WindowEvent::CloseRequested => {
                info!("close requested");
                self.input.handle_event(&event);
                event_loop.exit();
            }
            WindowEvent::Resized(size) => {
                if let Some(renderer) = self.renderer.as_mut() {
                    renderer.resize(size.width, size.height);
                }
                self.input.handle_event(&event);
            }
            WindowEvent::RedrawRequested => self.frame(event_loop),
            _ => self.input.handle_event(&event),
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

fn arena_of((width, height): (u32, u32)) -> Arena {
    Arena::new(width as f32, height as f32)
}
