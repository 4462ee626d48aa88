//! Sinescope - a sine wave on a 3D viewport
//!
//! Arrow keys shape the wave; Space flips between the waveform and its
//! magnitude spectrum, which eases into place.

use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use winit::{
    application::ApplicationHandler,
    event::*,
    event_loop::{ActiveEventLoop, EventLoop},
    keyboard::{KeyCode, ModifiersState, PhysicalKey},
    window::{Window, WindowId},
};

use sinescope::camera::CameraSystem;
use sinescope::cli::Args;
use sinescope::controls::ControlPanel;
use sinescope::params::AppConfig;
use sinescope::rendering::{RenderSystem, Uniforms};
use sinescope::view::{GeometryCommit, ViewController};

/// Main application state
struct App {
    // Window and rendering
    window: Option<Arc<Window>>,
    render_system: Option<RenderSystem>,

    // View state and input
    view: ViewController,
    controls: ControlPanel,
    camera: CameraSystem,
    modifiers: ModifiersState,

    // Configuration
    config: AppConfig,

    // Frame timing
    last_frame: Instant,
}

impl App {
    fn new(config: AppConfig) -> Self {
        let view = ViewController::new(config.waveform, config.layout, config.view);
        let camera = CameraSystem::new(&config.render);

        Self {
            window: None,
            render_system: None,
            view,
            controls: ControlPanel,
            camera,
            modifiers: ModifiersState::empty(),
            config,
            last_frame: Instant::now(),
        }
    }

    fn init_graphics(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let window_attributes = Window::default_attributes()
            .with_title(self.controls.status_line(&self.view.params(), self.view.mode()))
            .with_inner_size(winit::dpi::LogicalSize::new(
                self.config.render.window_width,
                self.config.render.window_height,
            ));

        let window = Arc::new(
            event_loop
                .create_window(window_attributes)
                .context("Failed to create window")?,
        );

        let size = window.inner_size();
        self.config.render.window_width = size.width.max(1);
        self.config.render.window_height = size.height.max(1);

        let render_system = pollster::block_on(RenderSystem::new(
            Arc::clone(&window),
            self.config.layout,
            &self.view.snapshot(),
            &self.config.render,
        ))?;

        self.window = Some(window);
        self.render_system = Some(render_system);
        self.last_frame = Instant::now();
        Ok(())
    }

    fn upload(&self, commit: &GeometryCommit) {
        if let Some(render_system) = &self.render_system {
            render_system.commit(commit);
        }
    }

    fn handle_key(&mut self, key: KeyCode) {
        let Some(event) = self
            .controls
            .handle_key(key, self.modifiers.shift_key(), &self.view.params())
        else {
            return;
        };

        log::debug!("Control: {:?}", event);
        if let Some(commit) = self.view.apply(event) {
            self.upload(&commit);
        }

        if let Some(window) = &self.window {
            window.set_title(&self.controls.status_line(&self.view.params(), self.view.mode()));
        }
    }

    /// Render a single frame
    fn render_frame(&mut self) {
        let now = Instant::now();
        let dt = now - self.last_frame;
        self.last_frame = now;

        if let Some(commit) = self.view.tick(dt) {
            self.upload(&commit);
        }

        let Some(render_system) = self.render_system.as_mut() else {
            return;
        };

        let uniforms = Uniforms {
            view_proj: self
                .camera
                .create_view_proj_matrix(&self.config.render)
                .to_cols_array_2d(),
            color: self.config.render.line_color,
        };
        render_system.update_uniforms(&uniforms);

        match render_system.render() {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                render_system.reconfigure();
            }
            Err(e) => log::error!("Render error: {:?}", e),
        }
    }
}

impl ApplicationHandler for App {
    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }

    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return; // Already initialized
        }

        if let Err(e) = self.init_graphics(event_loop) {
            log::error!("Graphics initialization failed: {:#}", e);
            event_loop.exit();
            return;
        }

        log::info!(
            "Sinescope is running ({} points, {})",
            self.config.layout.points,
            self.view.mode()
        );
        log::info!(
            "Arrows: amplitude/frequency (Shift = x10), T/F: time/frequency view, \
             Space/Tab: toggle view, Esc: quit"
        );
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::ModifiersChanged(modifiers) => {
                self.modifiers = modifiers.state();
            }
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Pressed,
                        physical_key: PhysicalKey::Code(code),
                        ..
                    },
                ..
            } => {
                if code == KeyCode::Escape {
                    event_loop.exit();
                } else {
                    self.handle_key(code);
                }
            }
            WindowEvent::Resized(size) => {
                if let Some(render_system) = self.render_system.as_mut() {
                    render_system.resize(size.width, size.height);
                }
                if size.width > 0 && size.height > 0 {
                    self.config.render.window_width = size.width;
                    self.config.render.window_height = size.height;
                }
            }
            WindowEvent::RedrawRequested => {
                self.render_frame();
            }
            _ => {}
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Args::parse().into_config()?;
    log::debug!("Startup config: {:?}", config);

    let mut app = App::new(config);
    let event_loop = EventLoop::new().context("Failed to create event loop")?;
    event_loop.run_app(&mut app).context("Event loop error")?;
    Ok(())
}
