//! Windowed show runner: the frame driver.
//!
//! [`FireworksShow`] opens a winit window, hooks the engine to the display
//! refresh via `RedrawRequested` -> step -> `request_redraw`, and forwards
//! a couple of keys: Space toggles pause, C clears, Escape exits.

use std::sync::Arc;

use winit::{
    application::ApplicationHandler,
    event::{ElementState, KeyEvent, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use crate::error::ShowError;
use crate::gpu::WgpuCanvas;
use crate::simulation::{Fireworks, FireworksConfig};

/// A fireworks show in its own window. Blocks until the window closes.
///
/// ```ignore
/// FireworksShow::new().run()?;
/// ```
pub struct FireworksShow {
    config: Option<FireworksConfig>,
    debug: bool,
    window: Option<Arc<Window>>,
    fireworks: Option<Fireworks<WgpuCanvas>>,
    setup_error: Option<ShowError>,
}

impl FireworksShow {
    /// A show with default configuration.
    pub fn new() -> Self {
        Self::with_config(FireworksConfig::default())
    }

    /// A show with the given configuration.
    pub fn with_config(config: FireworksConfig) -> Self {
        Self {
            debug: config.debug,
            config: Some(config),
            window: None,
            fireworks: None,
            setup_error: None,
        }
    }

    /// Open the window and run the show until it is closed.
    ///
    /// Window or GPU setup failures inside the event loop surface here as
    /// the `Err` return.
    pub fn run(mut self) -> Result<(), ShowError> {
        let event_loop = EventLoop::new()?;
        event_loop.set_control_flow(ControlFlow::Poll);
        event_loop.run_app(&mut self)?;
        match self.setup_error.take() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

impl Default for FireworksShow {
    fn default() -> Self {
        Self::new()
    }
}

impl ApplicationHandler for FireworksShow {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let attrs = Window::default_attributes()
            .with_title("skyburst")
            .with_inner_size(winit::dpi::LogicalSize::new(1280, 720));

        let window = match event_loop.create_window(attrs) {
            Ok(window) => Arc::new(window),
            Err(e) => {
                self.setup_error = Some(ShowError::Window(e));
                event_loop.exit();
                return;
            }
        };
        self.window = Some(window.clone());

        let canvas = match pollster::block_on(WgpuCanvas::new(window)) {
            Ok(canvas) => canvas,
            Err(e) => {
                self.setup_error = Some(e.into());
                event_loop.exit();
                return;
            }
        };

        let config = self.config.take().unwrap_or_default();
        let mut fireworks = Fireworks::with_config(canvas, config);
        fireworks.start();
        self.fireworks = Some(fireworks);
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::Resized(physical_size) => {
                if let Some(fireworks) = &mut self.fireworks {
                    fireworks.canvas_mut().resize(physical_size);
                }
            }
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(code),
                        state: ElementState::Pressed,
                        ..
                    },
                ..
            } => {
                if let Some(fireworks) = &mut self.fireworks {
                    match code {
                        KeyCode::Space => fireworks.pause(),
                        KeyCode::KeyC => fireworks.clear(),
                        KeyCode::Escape => event_loop.exit(),
                        _ => {}
                    }
                }
            }
            WindowEvent::RedrawRequested => {
                if let Some(fireworks) = &mut self.fireworks {
                    fireworks.step();

                    match fireworks.canvas_mut().present() {
                        Ok(()) => {}
                        Err(wgpu::SurfaceError::Lost) => {
                            if let Some(window) = &self.window {
                                fireworks.canvas_mut().resize(window.inner_size());
                            }
                        }
                        Err(wgpu::SurfaceError::OutOfMemory) => event_loop.exit(),
                        Err(e) => eprintln!("Render error: {:?}", e),
                    }

                    if self.debug {
                        if let Some(window) = &self.window {
                            window.set_title(&format!(
                                "skyburst | {:.0} fps",
                                fireworks.fps()
                            ));
                        }
                    }
                }

                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }
            _ => {}
        }
    }
}
