//! Native runner: winit window, wgpu surface, paced frame loop

use std::sync::Arc;
use std::time::Instant;

use anyhow::Context;
use winit::{
    application::ApplicationHandler,
    dpi::LogicalSize,
    event::{ElementState, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::PhysicalKey,
    window::{Window, WindowId},
};

use super::input::{Action, action_for_keycode};
use crate::consts::{HEIGHT, WIDTH};
use crate::renderer::{RenderState, build_scene};
use crate::session::{Session, SessionStatus};

struct Gfx {
    window: Arc<Window>,
    render: RenderState,
}

struct App {
    session: Session,
    gfx: Option<Gfx>,
    last_frame: Option<Instant>,
    next_frame: Instant,
    error: Option<anyhow::Error>,
}

impl App {
    fn new(session: Session) -> Self {
        Self {
            session,
            gfx: None,
            last_frame: None,
            next_frame: Instant::now(),
            error: None,
        }
    }

    fn create_window(&self, event_loop: &ActiveEventLoop) -> anyhow::Result<Gfx> {
        let scale = self.session.settings.window_scale as f64;
        let attrs = Window::default_attributes()
            .with_title("Platformer")
            .with_inner_size(LogicalSize::new(WIDTH as f64 * scale, HEIGHT as f64 * scale));
        let window = Arc::new(
            event_loop
                .create_window(attrs)
                .context("failed to create window")?,
        );
        let render = pollster::block_on(init_gpu(window.clone()))?;
        Ok(Gfx { window, render })
    }

    /// Advance the session and draw one frame
    fn frame(&mut self, event_loop: &ActiveEventLoop) {
        let now = Instant::now();
        let dt = self
            .last_frame
            .map(|t| now.duration_since(t).as_secs_f32())
            .unwrap_or(0.0);
        self.last_frame = Some(now);

        let status = self.session.advance(dt);

        let Some(gfx) = self.gfx.as_mut() else { return };
        let vertices = build_scene(&self.session.world, self.session.settings.grace_blink);
        match gfx.render.render(&vertices) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => gfx.render.reconfigure(),
            Err(wgpu::SurfaceError::OutOfMemory) => {
                self.error = Some(anyhow::anyhow!("GPU out of memory"));
                event_loop.exit();
            }
            Err(e) => log::warn!("Render error: {:?}", e),
        }

        if status == SessionStatus::Over {
            event_loop.exit();
        }
    }
}

async fn init_gpu(window: Arc<Window>) -> anyhow::Result<RenderState> {
    let size = window.inner_size();
    let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
        backends: wgpu::Backends::all(),
        ..Default::default()
    });

    let surface = instance
        .create_surface(window)
        .context("failed to create surface")?;

    let adapter = instance
        .request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::default(),
            compatible_surface: Some(&surface),
            force_fallback_adapter: false,
        })
        .await
        .context("no compatible GPU adapter")?;
    log::info!("Using adapter: {:?}", adapter.get_info().name);

    let render = RenderState::new(surface, &adapter, size.width, size.height)
        .await
        .context("failed to create GPU device")?;
    Ok(render)
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.gfx.is_some() {
            return;
        }
        match self.create_window(event_loop) {
            Ok(gfx) => {
                gfx.window.request_redraw();
                self.gfx = Some(gfx);
            }
            Err(e) => {
                self.error = Some(e);
                event_loop.exit();
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::Resized(size) => {
                if let Some(gfx) = self.gfx.as_mut() {
                    gfx.render.resize(size.width, size.height);
                }
            }
            WindowEvent::Focused(false) => self.session.input.clear(),
            WindowEvent::KeyboardInput { event, .. } => {
                let PhysicalKey::Code(code) = event.physical_key else {
                    return;
                };
                let Some(action) = action_for_keycode(code) else {
                    return;
                };
                match (action, event.state) {
                    (Action::Quit, ElementState::Pressed) => {
                        log::info!("Quit requested");
                        event_loop.exit();
                    }
                    (_, ElementState::Pressed) => self.session.input.press(action),
                    (_, ElementState::Released) => self.session.input.release(action),
                }
            }
            WindowEvent::RedrawRequested => self.frame(event_loop),
            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        let Some(gfx) = self.gfx.as_ref() else { return };
        let now = Instant::now();
        if now >= self.next_frame {
            gfx.window.request_redraw();
            self.next_frame = now + self.session.frame_duration();
        }
        event_loop.set_control_flow(ControlFlow::WaitUntil(self.next_frame));
    }
}

/// Open the window and play until the player is caught or quits.
///
/// Returns the finished session so the caller can report the outcome.
pub fn run(session: Session) -> anyhow::Result<Session> {
    let event_loop = EventLoop::new().context("failed to create event loop")?;
    let mut app = App::new(session);
    event_loop.run_app(&mut app)?;

    match app.error.take() {
        Some(e) => Err(e),
        None => Ok(app.session),
    }
}
