use anyhow::Result;
use glam::Vec2;
use winit::dpi::LogicalSize;

use aurora_engine::background::BackgroundRenderer;
use aurora_engine::core::{App as EngineApp, AppControl, FrameCtx};
use aurora_engine::device::GpuInit;
use aurora_engine::paint::Color;
use aurora_engine::surface::SurfaceState;
use aurora_engine::window::{CursorIcon, Runtime, RuntimeConfig};

use crate::event::MenuInput;
use crate::menu::{reduce, CameraTween, MenuEvent, MenuLayout, MenuState};
use crate::overlay::{tile_instances, TileRenderer, TileStyle};

// ── Application ───────────────────────────────────────────────────────────

/// Top-level application builder.
///
/// ```rust,ignore
/// Application::new()
///     .title("Aurora")
///     .size(1280.0, 720.0)
///     .run()?;
/// ```
pub struct Application {
    title: String,
    width: f64,
    height: f64,
    style: TileStyle,
}

impl Application {
    pub fn new() -> Self {
        Self {
            title: "aurora".to_string(),
            width: 1280.0,
            height: 720.0,
            style: TileStyle::default(),
        }
    }

    /// Set the window title.
    pub fn title(mut self, t: impl Into<String>) -> Self {
        self.title = t.into();
        self
    }

    /// Set the initial window size in logical pixels.
    pub fn size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn tile_style(mut self, style: TileStyle) -> Self {
        self.style = style;
        self
    }

    /// Opens the window and runs until it is closed.
    ///
    /// Returns window or GPU initialization failures.
    pub fn run(self) -> Result<()> {
        let config = RuntimeConfig {
            title: self.title,
            initial_size: LogicalSize::new(self.width, self.height),
        };

        // The background shader emits display-ready values; an sRGB target would
        // encode them a second time.
        Runtime::run(config, GpuInit::linear_output(), MenuShell::new(self.style))
    }
}

impl Default for Application {
    fn default() -> Self {
        Self::new()
    }
}

// ── MenuShell ─────────────────────────────────────────────────────────────

/// Engine app that owns menu state and both renderers.
struct MenuShell {
    viewport: Vec2,
    state: MenuState,
    tween: CameraTween,
    input: MenuInput,
    style: TileStyle,

    background: BackgroundRenderer,
    tiles: TileRenderer,
}

impl MenuShell {
    fn new(style: TileStyle) -> Self {
        let state = MenuState::default();
        Self {
            viewport: Vec2::ONE,
            state,
            tween: CameraTween::settled(state.camera),
            input: MenuInput::new(),
            style,
            background: BackgroundRenderer::new(),
            tiles: TileRenderer::new(),
        }
    }

    fn dispatch(&mut self, event: MenuEvent, now: f32) {
        let next = reduce(self.state, event);
        if next == self.state {
            return;
        }

        log::debug!("menu {event:?}: {:?} -> {:?}", self.state, next);
        if next.selected != self.state.selected {
            match next.selected {
                Some(id) => log::info!("selected {id}"),
                None => log::info!("selection cleared"),
            }
        }
        if next.camera != self.state.camera {
            self.tween.retarget(next.camera, now);
        }
        self.state = next;
    }
}

impl EngineApp for MenuShell {
    fn on_resize(&mut self, surface: SurfaceState) {
        self.viewport = Vec2::new(surface.width, surface.height);
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        let now = ctx.time.elapsed;

        // Hit-test against the layout the user currently sees.
        let layout = MenuLayout::compute(self.viewport, self.tween.value(now));
        for event in self.input.collect(&layout, ctx.input, ctx.input_frame) {
            self.dispatch(event, now);
        }

        ctx.window.set_cursor(match self.input.hovered() {
            Some(_) => CursorIcon::Pointer,
            None => CursorIcon::Default,
        });

        let layout = MenuLayout::compute(self.viewport, self.tween.value(now));
        let instances = tile_instances(&layout, &self.state, &self.style);
        let uniforms = ctx.surface.uniforms();

        let background = &mut self.background;
        let tiles = &mut self.tiles;

        ctx.render(Color::from_straight(0.0, 0.0, 0.0, 1.0), |rctx, target| {
            background.render(rctx, target, &uniforms);
            tiles.render(rctx, target, &instances);
        })
    }

    fn on_teardown(&mut self) {
        log::info!("menu closed; final state {:?}", self.state);
    }
}
