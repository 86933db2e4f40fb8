//! Winit graphical front end for seekgrid.
//!
//! Shows each step of a search as a grid of coloured tiles in a native
//! window using:
//! - [`winit`] for window creation and input events
//! - [`softbuffer`] for CPU-based pixel rendering
//! - [`fontdue`] for the optional coordinate labels
//!
//! The event loop owns the main thread, so the search runs on a
//! [`BackgroundRun`] worker, started by the first click (or Enter or Space)
//! in the window. The worker's [`GuiSink`] posts a [`Scene`] to the loop for
//! every dequeued node, then blocks until the next click.
//!
//! # Usage
//!
//! ```rust,no_run
//! use seekgrid_core::{Grid, Point};
//! use seekgrid_search::{SearchEngine, UninformedStrategy};
//! use seekgrid_winit::{GuiConfig, GuiDriver};
//!
//! let grid = Grid::new(5, 5, Point::new(0, 0), Point::new(4, 4));
//! let engine = SearchEngine::new(grid, UninformedStrategy::BreadthFirst).unwrap();
//! let outcome = GuiDriver::new(GuiConfig::default()).run(engine).unwrap();
//! ```

mod input;
mod renderer;

use std::error::Error;
use std::num::NonZeroU32;
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};

use winit::{
    application::ApplicationHandler,
    dpi::{LogicalSize, PhysicalSize},
    event::WindowEvent,
    event_loop::{ActiveEventLoop, EventLoop, EventLoopProxy},
    window::{Window, WindowId},
};

use seekgrid_core::{Grid, Point, SearchError, messages::Key, messages::Msg};
use seekgrid_search::{BackgroundRun, SearchEngine, SearchReport, VisualizationMethod, Visualizer};

use renderer::SceneRenderer;
pub use renderer::Scene;

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Configuration for the GUI driver.
#[derive(Debug, Clone)]
pub struct GuiConfig {
    /// Window title.
    pub title: String,
    /// Side of a grid tile in logical pixels.
    pub cell_size: u32,
    /// TTF/OTF font for the coordinate labels. Tiles are unlabelled
    /// without one.
    pub font_path: Option<PathBuf>,
    /// Label size in pixels.
    pub font_size: f32,
}

impl Default for GuiConfig {
    fn default() -> Self {
        Self {
            title: "Search Algorithm Visualizer".into(),
            cell_size: 80,
            font_path: None,
            font_size: 14.0,
        }
    }
}

// ---------------------------------------------------------------------------
// Worker side
// ---------------------------------------------------------------------------

/// Events posted from the search worker to the event loop.
#[derive(Debug, Clone)]
pub enum UserEvent {
    Scene(Scene),
    Finished(SearchReport),
}

/// The [`Visualizer`] handed to the engine on the worker thread.
pub struct GuiSink {
    proxy: EventLoopProxy<UserEvent>,
    advance: Receiver<()>,
}

impl GuiSink {
    fn post(&self, event: UserEvent) {
        // Fails only once the window is gone; the search then runs out
        // unattended.
        if self.proxy.send_event(event).is_err() {
            log::debug!("event loop closed, dropping frame");
        }
    }
}

impl Visualizer for GuiSink {
    fn render(&mut self, grid: &Grid, path: &[Point], current: Option<Point>) {
        self.post(UserEvent::Scene(Scene::new(grid, path, current)));
    }

    /// Block until the next click. Clicks made before this call are
    /// discarded.
    fn wait_for_advance(&mut self) {
        loop {
            match self.advance.try_recv() {
                Ok(()) => continue,
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => return,
            }
        }
        let _ = self.advance.recv();
    }

    fn finished(&mut self, grid: &Grid, report: &SearchReport) {
        self.post(UserEvent::Scene(Scene::new(grid, &report.path, None)));
        self.post(UserEvent::Finished(report.clone()));
    }
}

// ---------------------------------------------------------------------------
// GuiDriver
// ---------------------------------------------------------------------------

/// Runs a search in a window, one click per step.
pub struct GuiDriver {
    config: GuiConfig,
}

impl GuiDriver {
    pub fn new(config: GuiConfig) -> Self {
        Self { config }
    }

    /// Open the window, run `engine` on a worker, and block until the window
    /// is closed.
    ///
    /// The outer error covers the window system; the inner value is the
    /// worker's outcome, `None` if the window closed before the search
    /// started.
    pub fn run(
        self,
        engine: SearchEngine,
    ) -> Result<Option<Result<SearchReport, SearchError>>, Box<dyn Error>> {
        let event_loop = EventLoop::<UserEvent>::with_user_event().build()?;
        let (tx, rx) = mpsc::channel();
        let sink = GuiSink {
            proxy: event_loop.create_proxy(),
            advance: rx,
        };
        let engine = engine.with_visualizer(VisualizationMethod::Gui, Box::new(sink));

        let mut app = GuiApp::new(self.config, BackgroundRun::new(engine), tx);
        event_loop.run_app(&mut app)?;
        if let Some(e) = app.error.take() {
            return Err(e);
        }

        let run = app.into_run();
        Ok(run.join())
    }
}

// ---------------------------------------------------------------------------
// GuiApp
// ---------------------------------------------------------------------------

struct GuiApp {
    config: GuiConfig,
    run: BackgroundRun,
    advance: Option<Sender<()>>,
    scene: Scene,
    cursor: Point,
    state: Option<GuiState>,
    error: Option<Box<dyn Error>>,
}

struct GuiState {
    window: Arc<Window>,
    surface: softbuffer::Surface<Arc<Window>, Arc<Window>>,
    renderer: SceneRenderer,
    pixel_width: u32,
    pixel_height: u32,
}

impl GuiApp {
    fn new(config: GuiConfig, run: BackgroundRun, advance: Sender<()>) -> Self {
        let scene = Scene::new(run.grid(), &[], None);
        Self {
            config,
            run,
            advance: Some(advance),
            scene,
            cursor: Point::ZERO,
            state: None,
            error: None,
        }
    }

    /// Release the worker. Dropping the advance sender unblocks any pending
    /// wait so the search can run to completion.
    fn into_run(mut self) -> BackgroundRun {
        self.advance = None;
        self.run
    }

    fn init(&mut self, event_loop: &ActiveEventLoop) -> Result<(), Box<dyn Error>> {
        let font = match &self.config.font_path {
            Some(path) => match renderer::load_font(path) {
                Ok(f) => Some(f),
                Err(e) => {
                    log::warn!("cannot load font {}: {e}; tiles will be unlabelled", path.display());
                    None
                }
            },
            None => None,
        };
        let cell = self.config.cell_size;
        let logical = LogicalSize::new(
            self.scene.width().max(1) as u32 * cell,
            self.scene.height().max(1) as u32 * cell,
        );
        let window_attrs = Window::default_attributes()
            .with_title(&self.config.title)
            .with_inner_size(logical)
            .with_resizable(true);
        let window = Arc::new(event_loop.create_window(window_attrs)?);

        // Tiles are painted in physical pixels.
        let scale = window.scale_factor();
        let renderer = SceneRenderer::new(
            (cell as f64 * scale).round() as u32,
            font,
            self.config.font_size * scale as f32,
        );

        let context = softbuffer::Context::new(window.clone())?;
        let mut surface = softbuffer::Surface::new(&context, window.clone())?;

        let size = window.inner_size();
        resize_surface(&mut surface, size.width, size.height);

        self.state = Some(GuiState {
            window,
            surface,
            renderer,
            pixel_width: size.width,
            pixel_height: size.height,
        });
        Ok(())
    }

    fn render(&mut self) {
        let Some(state) = self.state.as_mut() else {
            return;
        };
        let (width, height) = (state.pixel_width, state.pixel_height);
        if width == 0 || height == 0 {
            return;
        }

        let mut buf = match state.surface.buffer_mut() {
            Ok(b) => b,
            Err(e) => {
                log::warn!("cannot map window buffer: {e}");
                return;
            }
        };
        state
            .renderer
            .draw(&self.scene, &mut buf, width as usize, height as usize);
        if let Err(e) = buf.present() {
            log::warn!("cannot present frame: {e}");
        }
    }

    fn request_redraw(&self) {
        if let Some(state) = self.state.as_ref() {
            state.window.request_redraw();
        }
    }

    fn handle_msg(&mut self, event_loop: &ActiveEventLoop, msg: Msg) {
        if msg == Msg::key(Key::Escape) || msg == Msg::Quit {
            event_loop.exit();
            return;
        }
        if !msg.is_advance() {
            return;
        }
        // The first gesture starts the search; later ones step it.
        match self.run.launch() {
            Ok(true) => log::debug!("search worker started"),
            Ok(false) => {
                if let Some(tx) = self.advance.as_ref() {
                    let _ = tx.send(());
                }
            }
            Err(e) => {
                self.error = Some(Box::new(e));
                event_loop.exit();
            }
        }
    }
}

fn resize_surface(
    surface: &mut softbuffer::Surface<Arc<Window>, Arc<Window>>,
    width: u32,
    height: u32,
) {
    let one = NonZeroU32::MIN;
    let w = NonZeroU32::new(width).unwrap_or(one);
    let h = NonZeroU32::new(height).unwrap_or(one);
    if let Err(e) = surface.resize(w, h) {
        log::warn!("cannot resize window surface: {e}");
    }
}

impl ApplicationHandler<UserEvent> for GuiApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.state.is_some() {
            return;
        }
        if let Err(e) = self.init(event_loop) {
            self.error = Some(e);
            event_loop.exit();
            return;
        }
        self.render();
    }

    fn user_event(&mut self, _event_loop: &ActiveEventLoop, event: UserEvent) {
        match event {
            UserEvent::Scene(scene) => {
                self.scene = scene;
                self.request_redraw();
            }
            UserEvent::Finished(report) => {
                log::info!("{} finished: {:?}", report.strategy, report.status);
                if let Some(state) = self.state.as_ref() {
                    let title = if report.found() {
                        format!("{} - cost {}", self.config.title, report.final_cost)
                    } else {
                        format!("{} - no path", self.config.title)
                    };
                    state.window.set_title(&title);
                }
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                self.handle_msg(event_loop, Msg::Quit);
            }

            WindowEvent::Resized(PhysicalSize { width, height }) => {
                if let Some(state) = self.state.as_mut() {
                    state.pixel_width = width;
                    state.pixel_height = height;
                    resize_surface(&mut state.surface, width, height);
                }
                self.render();
            }

            WindowEvent::RedrawRequested => {
                self.render();
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if let Some(msg) = input::translate_keyboard(&event) {
                    self.handle_msg(event_loop, msg);
                }
            }

            WindowEvent::CursorMoved { position, .. } => {
                let cs = self.state.as_ref().map_or(1, |s| s.renderer.cell_size());
                self.cursor = input::pixel_to_cell(position.x, position.y, cs);
            }

            WindowEvent::MouseInput {
                state: btn_state,
                button,
                ..
            } => {
                if let Some(msg) = input::translate_mouse_button(btn_state, button, self.cursor) {
                    self.handle_msg(event_loop, msg);
                }
            }

            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let c = GuiConfig::default();
        assert_eq!(c.title, "Search Algorithm Visualizer");
        assert_eq!(c.cell_size, 80);
        assert!(c.font_path.is_none());
    }
}
